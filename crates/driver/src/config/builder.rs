// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Programmatic builder for driver configuration

use std::{collections::BTreeMap, time::Duration};

use tracing::trace;

use super::{DriverConfig, DriverOption, DriverProfile, DriverValue};
use crate::{Compression, Consistency};

/// Builds a [`DriverConfig`] option by option.
///
/// Options go to the default profile until [`start_profile`](Self::start_profile) is called; from then on they go
/// to the named profile until [`end_profile`](Self::end_profile).
#[derive(Debug, Clone)]
pub struct DriverConfigBuilder {
	default: DriverProfile,
	profiles: BTreeMap<String, DriverProfile>,
	current: Option<String>,
}

impl Default for DriverConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DriverConfigBuilder {
	/// Create a builder seeded with the driver defaults
	pub fn new() -> Self {
		Self::from_config(DriverConfig::default())
	}

	/// Continue building from an existing configuration
	pub fn from_config(config: DriverConfig) -> Self {
		let (default, profiles) = config.into_parts();
		Self {
			default,
			profiles,
			current: None,
		}
	}

	pub fn with(&mut self, option: DriverOption, value: DriverValue) -> &mut Self {
		trace!(profile = self.current_name(), option = option.path(), ?value, "set driver option");
		self.current_profile_mut().set(option, value);
		self
	}

	pub fn with_duration(&mut self, option: DriverOption, value: Duration) -> &mut Self {
		self.with(option, DriverValue::Duration(value))
	}

	pub fn with_int(&mut self, option: DriverOption, value: i64) -> &mut Self {
		self.with(option, DriverValue::Int(value))
	}

	pub fn with_string(&mut self, option: DriverOption, value: impl Into<String>) -> &mut Self {
		self.with(option, DriverValue::Text(value.into()))
	}

	pub fn with_consistency(&mut self, option: DriverOption, value: Consistency) -> &mut Self {
		self.with(option, DriverValue::Consistency(value))
	}

	pub fn with_compression(&mut self, value: Compression) -> &mut Self {
		self.with(DriverOption::ProtocolCompression, DriverValue::Compression(value))
	}

	/// Remove an option from the current profile. On a named profile this restores inheritance from the default.
	pub fn without(&mut self, option: DriverOption) -> &mut Self {
		self.current_profile_mut().remove(option);
		self
	}

	/// Direct subsequent options to the named profile, creating it if needed
	pub fn start_profile(&mut self, name: impl Into<String>) -> &mut Self {
		let name = name.into();
		self.profiles.entry(name.clone()).or_default();
		self.current = Some(name);
		self
	}

	/// Direct subsequent options back to the default profile
	pub fn end_profile(&mut self) -> &mut Self {
		self.current = None;
		self
	}

	pub fn get(&self, option: DriverOption) -> Option<&DriverValue> {
		match &self.current {
			Some(name) => self.profiles.get(name).and_then(|p| p.get(option)).or_else(|| self.default.get(option)),
			None => self.default.get(option),
		}
	}

	pub fn build(&self) -> crate::Result<DriverConfig> {
		let config = DriverConfig::from_parts(self.default.clone(), self.profiles.clone());
		config.validate()?;
		Ok(config)
	}

	fn current_name(&self) -> &str {
		self.current.as_deref().unwrap_or(super::DEFAULT_PROFILE)
	}

	fn current_profile_mut(&mut self) -> &mut DriverProfile {
		match &self.current {
			Some(name) => self.profiles.entry(name.clone()).or_default(),
			None => &mut self.default,
		}
	}
}

#[cfg(test)]
mod tests {

	mod build {
		use std::time::Duration;

		use crate::{Consistency, DriverConfigBuilder, DriverOption};

		#[test]
		fn test_default_profile_options() {
			let mut builder = DriverConfigBuilder::new();
			builder.with_duration(DriverOption::RequestTimeout, Duration::from_secs(10))
				.with_consistency(DriverOption::RequestConsistency, Consistency::Quorum);

			let config = builder.build().unwrap();
			let profile = config.default_profile();
			assert_eq!(profile.duration(DriverOption::RequestTimeout), Some(Duration::from_secs(10)));
			assert_eq!(profile.consistency(DriverOption::RequestConsistency), Some(Consistency::Quorum));
		}

		#[test]
		fn test_named_profile_inherits_default() {
			let mut builder = DriverConfigBuilder::new();
			builder.with_int(DriverOption::RequestPageSize, 100)
				.start_profile("olap")
				.with_duration(DriverOption::RequestTimeout, Duration::from_secs(30))
				.end_profile()
				.with_string(DriverOption::ApplicationName, "billing");

			let config = builder.build().unwrap();
			let olap = config.profile("olap").unwrap();

			assert_eq!(olap.duration(DriverOption::RequestTimeout), Some(Duration::from_secs(30)));
			assert!(olap.overrides(DriverOption::RequestTimeout));
			assert_eq!(olap.int(DriverOption::RequestPageSize), Some(100));
			assert!(!olap.overrides(DriverOption::RequestPageSize));
			assert_eq!(olap.text(DriverOption::ApplicationName), Some("billing"));

			let default = config.default_profile();
			assert_eq!(default.duration(DriverOption::RequestTimeout), Some(Duration::from_secs(2)));
			assert_eq!(config.profile_names().collect::<Vec<_>>(), vec!["olap"]);
		}

		#[test]
		fn test_without_restores_inheritance() {
			let mut builder = DriverConfigBuilder::new();
			builder.start_profile("slow")
				.with_duration(DriverOption::RequestTimeout, Duration::from_secs(60))
				.without(DriverOption::RequestTimeout);

			let config = builder.build().unwrap();
			let slow = config.profile("slow").unwrap();
			assert_eq!(slow.duration(DriverOption::RequestTimeout), Some(Duration::from_secs(2)));
		}

		#[test]
		fn test_get_reads_current_profile() {
			let mut builder = DriverConfigBuilder::new();
			builder.start_profile("fast").with_int(DriverOption::RequestPageSize, 10);
			assert_eq!(builder.get(DriverOption::RequestPageSize), Some(&crate::DriverValue::Int(10)));

			builder.end_profile();
			assert_eq!(builder.get(DriverOption::RequestPageSize), Some(&crate::DriverValue::Int(5000)));
		}

		#[test]
		fn test_type_mismatch_fails() {
			let mut builder = DriverConfigBuilder::new();
			builder.with_string(DriverOption::RequestTimeout, "10s");

			let err = builder.build().unwrap_err();
			assert_eq!(err.code(), "SESSION_011");
		}

		#[test]
		fn test_empty_profile_name_fails() {
			let mut builder = DriverConfigBuilder::new();
			builder.start_profile("");

			let err = builder.build().unwrap_err();
			assert_eq!(err.code(), "SESSION_008");
		}
	}
}
