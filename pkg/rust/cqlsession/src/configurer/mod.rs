// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Hooks that customize session assembly.
//!
//! A [`SessionBuilderConfigurer`] receives the [`SessionBuilder`](cqlsession_driver::SessionBuilder) after the
//! factory seeded it from configuration and hands back the builder the session is finalized from. A
//! [`DriverConfigConfigurer`] runs earlier, on the driver options and execution profiles.

mod driver;
mod error;
mod session;

pub use driver::DriverConfigConfigurer;
pub use error::ConfigurerError;
pub use session::{Named, NoopConfigurer, SessionBuilderConfigurer, infallible, named};
