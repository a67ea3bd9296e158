// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod configurer;
mod factory;

pub use configurer::{
	ConfigurerError, DriverConfigConfigurer, Named, NoopConfigurer, SessionBuilderConfigurer, infallible, named,
};
pub use cqlsession_config as config;
pub use cqlsession_config::SessionConfig;
pub use cqlsession_driver as driver;
pub use cqlsession_driver::{
	Compression, Consistency, ContactPoint, Credentials, DriverConfig, DriverConfigBuilder, DriverOption,
	DriverValue, Session, SessionBuilder,
};
pub use cqlsession_type::{Diagnostic, Error, IntoDiagnostic, Result, error, return_error};
pub use factory::SessionFactory;
