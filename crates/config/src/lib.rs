// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod convert;
pub mod defaults;
mod env;
mod loader;
mod types;

pub use env::ENV_PREFIX;
pub use types::{ProfileConfig, SessionConfig};
