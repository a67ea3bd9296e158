// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod auth;
mod builder;
pub mod config;
mod contact;
mod identifier;
mod option;
mod session;

pub use auth::Credentials;
pub use builder::SessionBuilder;
pub use config::{DriverConfig, DriverConfigBuilder, DriverOption, DriverProfile, DriverValue, ProfileView};
pub use contact::{ContactPoint, DEFAULT_PORT};
pub use cqlsession_type::{Error, Result};
pub use identifier::is_valid_keyspace;
pub use option::{Compression, Consistency};
pub use session::Session;
