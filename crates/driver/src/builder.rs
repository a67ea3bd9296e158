// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring a CQL session

use std::time::Duration;

use cqlsession_type::{
	error::diagnostic::session::{empty_username, invalid_keyspace, local_datacenter_required, no_contact_points},
	return_error,
};
use tracing::{debug, instrument};

use crate::{
	Compression, Consistency, ContactPoint, Credentials, DriverConfig, DriverOption, DriverValue, Session,
	config::defaults, identifier::is_valid_keyspace,
};

/// Accumulates session settings until [`build`](Self::build) turns them into a [`Session`].
///
/// Request-level settings (timeouts, page size, consistency, compression) live in the default profile of the
/// builder's [`DriverConfig`]; the dedicated setters are shortcuts for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionBuilder {
	contact_points: Vec<ContactPoint>,
	local_datacenter: Option<String>,
	keyspace: Option<String>,
	credentials: Option<Credentials>,
	session_name: Option<String>,
	config: DriverConfig,
}

impl SessionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_contact_point(mut self, contact_point: ContactPoint) -> Self {
		self.contact_points.push(contact_point);
		self
	}

	pub fn add_contact_points(mut self, contact_points: impl IntoIterator<Item = ContactPoint>) -> Self {
		self.contact_points.extend(contact_points);
		self
	}

	pub fn with_local_datacenter(mut self, datacenter: impl Into<String>) -> Self {
		self.local_datacenter = Some(datacenter.into());
		self
	}

	pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
		self.keyspace = Some(keyspace.into());
		self
	}

	pub fn without_keyspace(mut self) -> Self {
		self.keyspace = None;
		self
	}

	pub fn with_credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);
		self
	}

	pub fn with_auth_credentials(self, username: impl Into<String>, password: impl Into<String>) -> Self {
		self.with_credentials(Credentials::new(username, password))
	}

	pub fn with_session_name(mut self, name: impl Into<String>) -> Self {
		self.session_name = Some(name.into());
		self
	}

	pub fn with_application_name(self, name: impl Into<String>) -> Self {
		self.with_option(DriverOption::ApplicationName, DriverValue::Text(name.into()))
	}

	pub fn with_request_timeout(self, timeout: Duration) -> Self {
		self.with_option(DriverOption::RequestTimeout, DriverValue::Duration(timeout))
	}

	pub fn with_connect_timeout(self, timeout: Duration) -> Self {
		self.with_option(DriverOption::ConnectTimeout, DriverValue::Duration(timeout))
	}

	pub fn with_page_size(self, page_size: i64) -> Self {
		self.with_option(DriverOption::RequestPageSize, DriverValue::Int(page_size))
	}

	pub fn with_consistency(self, consistency: Consistency) -> Self {
		self.with_option(DriverOption::RequestConsistency, DriverValue::Consistency(consistency))
	}

	pub fn with_compression(self, compression: Compression) -> Self {
		self.with_option(DriverOption::ProtocolCompression, DriverValue::Compression(compression))
	}

	/// Set an option on the default profile
	pub fn with_option(mut self, option: DriverOption, value: DriverValue) -> Self {
		self.config.default_profile_mut().set(option, value);
		self
	}

	/// Replace the driver configuration, discarding options set earlier through this builder
	pub fn with_config(mut self, config: DriverConfig) -> Self {
		self.config = config;
		self
	}

	pub fn contact_points(&self) -> &[ContactPoint] {
		&self.contact_points
	}

	pub fn local_datacenter(&self) -> Option<&str> {
		self.local_datacenter.as_deref()
	}

	pub fn keyspace(&self) -> Option<&str> {
		self.keyspace.as_deref()
	}

	pub fn credentials(&self) -> Option<&Credentials> {
		self.credentials.as_ref()
	}

	pub fn session_name(&self) -> Option<&str> {
		self.session_name.as_deref()
	}

	pub fn config(&self) -> &DriverConfig {
		&self.config
	}

	pub fn application_name(&self) -> Option<&str> {
		self.config.default_profile().text(DriverOption::ApplicationName)
	}

	pub fn request_timeout(&self) -> Duration {
		self.config.default_profile().duration(DriverOption::RequestTimeout).unwrap_or(defaults::REQUEST_TIMEOUT)
	}

	pub fn connect_timeout(&self) -> Duration {
		self.config.default_profile().duration(DriverOption::ConnectTimeout).unwrap_or(defaults::CONNECT_TIMEOUT)
	}

	pub fn page_size(&self) -> i64 {
		self.config.default_profile().int(DriverOption::RequestPageSize).unwrap_or(defaults::PAGE_SIZE)
	}

	pub fn consistency(&self) -> Consistency {
		self.config.default_profile().consistency(DriverOption::RequestConsistency).unwrap_or(defaults::CONSISTENCY)
	}

	pub fn compression(&self) -> Compression {
		self.config.default_profile().compression().unwrap_or(defaults::COMPRESSION)
	}

	/// Check every invariant [`build`](Self::build) relies on without consuming the builder.
	pub fn validate(&self) -> crate::Result<()> {
		if self.contact_points.is_empty() {
			return_error!(no_contact_points());
		}

		if self.local_datacenter.as_deref().is_none_or(|dc| dc.trim().is_empty()) {
			return_error!(local_datacenter_required(self.contact_points.len()));
		}

		if let Some(keyspace) = &self.keyspace {
			if !is_valid_keyspace(keyspace) {
				return_error!(invalid_keyspace(keyspace));
			}
		}

		if let Some(credentials) = &self.credentials {
			if credentials.username().trim().is_empty() {
				return_error!(empty_username());
			}
		}

		self.config.validate()
	}

	/// Finalize the settings into a [`Session`].
	#[instrument(name = "driver::session::build", level = "debug", skip(self), fields(contact_points = self.contact_points.len()))]
	pub fn build(self) -> crate::Result<Session> {
		self.validate()?;

		let session = Session::from_builder(
			self.session_name,
			self.contact_points,
			self.local_datacenter.unwrap_or_default(),
			self.keyspace,
			self.credentials,
			self.config,
		);

		debug!(session = session.name(), keyspace = ?session.keyspace(), "session built");
		Ok(session)
	}
}

#[cfg(test)]
mod tests {

	fn local() -> crate::SessionBuilder {
		crate::SessionBuilder::new()
			.add_contact_point(crate::ContactPoint::new("127.0.0.1", 9042))
			.with_local_datacenter("datacenter1")
	}

	mod setters {
		use std::time::Duration;

		use crate::{Compression, Consistency, DriverConfigBuilder, DriverOption, SessionBuilder};

		#[test]
		fn test_defaults() {
			let builder = SessionBuilder::new();
			assert!(builder.contact_points().is_empty());
			assert_eq!(builder.request_timeout(), Duration::from_secs(2));
			assert_eq!(builder.connect_timeout(), Duration::from_secs(5));
			assert_eq!(builder.page_size(), 5000);
			assert_eq!(builder.consistency(), Consistency::LocalOne);
			assert_eq!(builder.compression(), Compression::None);
			assert_eq!(builder.application_name(), None);
		}

		#[test]
		fn test_request_settings_land_in_default_profile() {
			let builder = SessionBuilder::new()
				.with_request_timeout(Duration::from_millis(750))
				.with_page_size(250)
				.with_compression(Compression::Lz4)
				.with_application_name("orders");

			assert_eq!(builder.request_timeout(), Duration::from_millis(750));
			assert_eq!(
				builder.config().default_profile().duration(DriverOption::RequestTimeout),
				Some(Duration::from_millis(750))
			);
			assert_eq!(builder.page_size(), 250);
			assert_eq!(builder.compression(), Compression::Lz4);
			assert_eq!(builder.application_name(), Some("orders"));
		}

		#[test]
		fn test_with_config_replaces_options() {
			let mut config = DriverConfigBuilder::new();
			config.with_int(DriverOption::RequestPageSize, 42);

			let builder = SessionBuilder::new()
				.with_request_timeout(Duration::from_secs(9))
				.with_config(config.build().unwrap());

			assert_eq!(builder.page_size(), 42);
			assert_eq!(builder.request_timeout(), Duration::from_secs(2));
		}

		#[test]
		fn test_contact_points_accumulate() {
			let builder = super::local().add_contact_points(vec!["10.0.0.2".parse().unwrap()]);
			assert_eq!(builder.contact_points().len(), 2);
		}

		#[test]
		fn test_without_keyspace() {
			let builder = SessionBuilder::new().with_keyspace("ks").without_keyspace();
			assert_eq!(builder.keyspace(), None);
		}
	}

	mod build {
		use std::time::Duration;

		use crate::{ContactPoint, SessionBuilder};

		#[test]
		fn test_ok() {
			let session = super::local()
				.with_keyspace("inventory")
				.with_auth_credentials("cassandra", "cassandra")
				.with_session_name("orders")
				.with_request_timeout(Duration::from_secs(3))
				.build()
				.unwrap();

			assert_eq!(session.name(), "orders");
			assert_eq!(session.keyspace(), Some("inventory"));
			assert_eq!(session.username(), Some("cassandra"));
			assert_eq!(session.local_datacenter(), "datacenter1");
			assert_eq!(session.request_timeout(), Duration::from_secs(3));
		}

		#[test]
		fn test_no_contact_points() {
			let err = SessionBuilder::new().with_local_datacenter("dc1").build().unwrap_err();
			assert_eq!(err.code(), "SESSION_001");
		}

		#[test]
		fn test_local_datacenter_required() {
			let err = SessionBuilder::new().add_contact_point(ContactPoint::new("db", 9042)).build().unwrap_err();
			assert_eq!(err.code(), "SESSION_002");

			let err = SessionBuilder::new()
				.add_contact_point(ContactPoint::new("db", 9042))
				.with_local_datacenter(" ")
				.build()
				.unwrap_err();
			assert_eq!(err.code(), "SESSION_002");
		}

		#[test]
		fn test_invalid_keyspace() {
			let err = super::local().with_keyspace("my-keyspace").build().unwrap_err();
			assert_eq!(err.code(), "SESSION_004");
		}

		#[test]
		fn test_zero_timeout() {
			let err = super::local().with_connect_timeout(Duration::ZERO).build().unwrap_err();
			assert_eq!(err.code(), "SESSION_005");
		}

		#[test]
		fn test_non_positive_page_size() {
			let err = super::local().with_page_size(0).build().unwrap_err();
			assert_eq!(err.code(), "SESSION_006");
		}

		#[test]
		fn test_empty_username() {
			let err = super::local().with_auth_credentials("", "secret").build().unwrap_err();
			assert_eq!(err.code(), "SESSION_007");
		}

		#[test]
		fn test_generated_session_name() {
			let first = super::local().build().unwrap();
			let second = super::local().build().unwrap();

			assert!(first.name().starts_with('s'));
			assert_ne!(first.name(), second.name());
		}
	}
}
