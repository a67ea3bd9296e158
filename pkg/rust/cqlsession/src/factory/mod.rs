// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Assembles sessions from a [`SessionConfig`] and the registered configurers.

use std::path::Path;

use cqlsession_config::SessionConfig;
use cqlsession_driver::{DriverConfigBuilder, Session, SessionBuilder};
use cqlsession_type::{
	Result, error,
	error::diagnostic::configurer::{configurer_failed, driver_config_configurer_failed},
};
use tracing::{debug, instrument, warn};

use crate::configurer::{DriverConfigConfigurer, SessionBuilderConfigurer};

/// Builds sessions the same way every time: configuration first, then driver config configurers, then session
/// builder configurers in registration order, then finalization.
///
/// If any step fails the session is not finalized and the error is returned to the caller.
pub struct SessionFactory {
	config: SessionConfig,
	driver_config_configurers: Vec<Box<dyn DriverConfigConfigurer>>,
	session_builder_configurers: Vec<Box<dyn SessionBuilderConfigurer>>,
}

impl Default for SessionFactory {
	fn default() -> Self {
		Self::new(SessionConfig::default())
	}
}

impl SessionFactory {
	pub fn new(config: SessionConfig) -> Self {
		Self {
			config,
			driver_config_configurers: Vec::new(),
			session_builder_configurers: Vec::new(),
		}
	}

	/// Load the configuration file, apply `CQLSESSION_*` environment overrides and validate the result
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let mut config = SessionConfig::from_file(path)?;
		config.apply_process_env()?;
		config.finalize()?;
		Ok(Self::new(config))
	}

	/// Register a session builder configurer; configurers run in registration order
	pub fn with_configurer<C>(mut self, configurer: C) -> Self
	where
		C: SessionBuilderConfigurer + 'static,
	{
		self.session_builder_configurers.push(Box::new(configurer));
		self
	}

	/// Register a closure as session builder configurer
	pub fn configure_session_builder<F>(self, configurator: F) -> Self
	where
		F: Fn(SessionBuilder) -> Result<SessionBuilder> + Send + Sync + 'static,
	{
		self.with_configurer(configurator)
	}

	/// Register a driver config configurer; these run before any session builder configurer
	pub fn with_driver_config_configurer<C>(mut self, configurer: C) -> Self
	where
		C: DriverConfigConfigurer + 'static,
	{
		self.driver_config_configurers.push(Box::new(configurer));
		self
	}

	/// Register a closure as driver config configurer
	pub fn configure_driver_config<F>(self, configurator: F) -> Self
	where
		F: Fn(&mut DriverConfigBuilder) -> Result<()> + Send + Sync + 'static,
	{
		self.with_driver_config_configurer(configurator)
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn configurer_count(&self) -> usize {
		self.driver_config_configurers.len() + self.session_builder_configurers.len()
	}

	/// Produce the fully configured builder without finalizing it.
	#[instrument(name = "factory::configure_builder", level = "debug", skip(self))]
	pub fn configure_builder(&self) -> Result<SessionBuilder> {
		let mut driver = self.config.driver_config_builder()?;
		for configurer in &self.driver_config_configurers {
			debug!(configurer = configurer.name(), "applying driver config configurer");
			configurer.configure(&mut driver).map_err(|e| {
				warn!(configurer = configurer.name(), code = e.code(), "driver config configurer failed");
				error!(driver_config_configurer_failed(configurer.name(), e.diagnostic()))
			})?;
		}

		let mut builder = self.seed(driver)?;

		for configurer in &self.session_builder_configurers {
			debug!(configurer = configurer.name(), "applying session builder configurer");
			builder = configurer.configure(builder).map_err(|e| {
				warn!(configurer = configurer.name(), code = e.code(), "session builder configurer failed");
				error!(configurer_failed(configurer.name(), e.diagnostic()))
			})?;
		}

		Ok(builder)
	}

	/// Configure and build a session
	#[instrument(name = "factory::create", level = "debug", skip(self))]
	pub fn create(&self) -> Result<Session> {
		self.configure_builder()?.build()
	}

	/// Configure a builder and hand it to `finalize`, which is not called when configuration fails
	pub fn create_with<S, F>(&self, finalize: F) -> Result<S>
	where
		F: FnOnce(SessionBuilder) -> Result<S>,
	{
		let builder = self.configure_builder()?;
		finalize(builder)
	}

	fn seed(&self, driver: DriverConfigBuilder) -> Result<SessionBuilder> {
		let config = &self.config;

		let mut builder = SessionBuilder::new().with_config(driver.build()?).add_contact_points(config.contact_points()?);

		if let Some(datacenter) = &config.local_datacenter {
			builder = builder.with_local_datacenter(datacenter.clone());
		}
		if let Some(keyspace) = &config.keyspace {
			builder = builder.with_keyspace(keyspace.clone());
		}
		if let Some(credentials) = config.credentials() {
			builder = builder.with_credentials(credentials);
		}
		if let Some(name) = &config.session_name {
			builder = builder.with_session_name(name.clone());
		}

		Ok(builder)
	}
}
