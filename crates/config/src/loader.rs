// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fs, path::Path};

use cqlsession_driver::{Compression, Consistency, ContactPoint, config::DEFAULT_PROFILE};
use cqlsession_type::{
	error,
	error::diagnostic::config::{
		empty_contact_points, invalid_value, not_positive, parse_failed, password_without_username, read_failed,
		zero_value,
	},
	error::diagnostic::session::invalid_profile_name,
	return_error,
};
use tracing::{debug, instrument};

use crate::SessionConfig;

impl SessionConfig {
	/// Load configuration from a TOML file
	///
	/// Environment overrides are applied separately via [`apply_env_overrides`](Self::apply_env_overrides);
	/// call [`finalize`](Self::finalize) again afterwards.
	#[instrument(name = "config::load", level = "debug", skip_all, fields(path = %path.as_ref().display()))]
	pub fn from_file<P: AsRef<Path>>(path: P) -> cqlsession_type::Result<Self> {
		let path = path.as_ref();
		let source = path.display().to_string();

		let content = fs::read_to_string(path).map_err(|e| error!(read_failed(&source, e.to_string())))?;

		let mut config: SessionConfig =
			toml::from_str(&content).map_err(|e| error!(parse_failed(&source, e.message())))?;
		config.finalize()?;

		debug!(contact_points = config.contact_points.len(), "loaded session config");
		Ok(config)
	}

	/// Parse configuration from TOML text
	pub fn from_toml(content: &str) -> cqlsession_type::Result<Self> {
		let mut config: SessionConfig =
			toml::from_str(content).map_err(|e| error!(parse_failed("inline TOML", e.message())))?;
		config.finalize()?;
		Ok(config)
	}

	/// Normalize values and validate configuration.
	///
	/// Call this after applying environment overrides.
	pub fn finalize(&mut self) -> cqlsession_type::Result<()> {
		self.contact_points = self
			.contact_points
			.iter()
			.map(|cp| cp.trim().to_string())
			.filter(|cp| !cp.is_empty())
			.collect();

		self.local_datacenter = self.local_datacenter.take().map(|dc| dc.trim().to_string()).filter(|dc| !dc.is_empty());

		self.validate()
	}

	/// Validate configuration settings
	pub fn validate(&self) -> cqlsession_type::Result<()> {
		if self.contact_points.is_empty() {
			return_error!(empty_contact_points());
		}

		if self.port == 0 {
			return_error!(zero_value("port"));
		}

		for contact_point in &self.contact_points {
			ContactPoint::parse_with_default_port(contact_point, self.port)
				.map_err(|e| error!(invalid_value("contact_points", e.diagnostic())))?;
		}

		if self.request_timeout_ms == 0 {
			return_error!(zero_value("request_timeout_ms"));
		}

		if self.connect_timeout_ms == 0 {
			return_error!(zero_value("connect_timeout_ms"));
		}

		if self.page_size <= 0 {
			return_error!(not_positive("page_size", self.page_size));
		}

		self.consistency
			.parse::<Consistency>()
			.map_err(|e| error!(invalid_value("consistency", e.diagnostic())))?;

		self.compression
			.parse::<Compression>()
			.map_err(|e| error!(invalid_value("compression", e.diagnostic())))?;

		if self.password.is_some() && self.username.is_none() {
			return_error!(password_without_username());
		}

		for (name, profile) in &self.profiles {
			if name.trim().is_empty() || name == DEFAULT_PROFILE {
				return_error!(invalid_value(&format!("profiles.{}", name), invalid_profile_name(name)));
			}
			if profile.request_timeout_ms == Some(0) {
				return_error!(zero_value(&format!("profiles.{}.request_timeout_ms", name)));
			}
			if let Some(size) = profile.page_size.filter(|size| *size <= 0) {
				return_error!(not_positive(&format!("profiles.{}.page_size", name), size));
			}
			if let Some(consistency) = &profile.consistency {
				consistency
					.parse::<Consistency>()
					.map_err(|e| error!(invalid_value(&format!("profiles.{}.consistency", name), e.diagnostic())))?;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {

	mod from_toml {
		use crate::SessionConfig;

		#[test]
		fn test_empty_document_uses_defaults() {
			let config = SessionConfig::from_toml("").unwrap();
			assert_eq!(config, SessionConfig::default());
		}

		#[test]
		fn test_full_document() {
			let config = SessionConfig::from_toml(
				r#"
				contact_points = ["10.0.0.1", "10.0.0.2:19042"]
				port = 9142
				local_datacenter = "dc1"
				keyspace = "inventory"
				username = "app"
				password = "secret"
				request_timeout_ms = 1500
				consistency = "LOCAL_QUORUM"
				compression = "lz4"

				[profiles.olap]
				request_timeout_ms = 30000
				consistency = "ONE"
				"#,
			)
			.unwrap();

			assert_eq!(config.contact_points, vec!["10.0.0.1", "10.0.0.2:19042"]);
			assert_eq!(config.port, 9142);
			assert_eq!(config.local_datacenter.as_deref(), Some("dc1"));
			assert_eq!(config.keyspace.as_deref(), Some("inventory"));
			assert_eq!(config.request_timeout_ms, 1500);
			assert_eq!(config.profiles["olap"].request_timeout_ms, Some(30000));
			assert_eq!(config.profiles["olap"].page_size, None);
		}

		#[test]
		fn test_unknown_field_is_parse_error() {
			let err = SessionConfig::from_toml("contact_pionts = [\"db\"]").unwrap_err();
			assert_eq!(err.code(), "CONFIG_002");
		}

		#[test]
		fn test_finalize_trims_values() {
			let config = SessionConfig::from_toml(
				r#"
				contact_points = [" db1 ", ""]
				local_datacenter = "  "
				"#,
			)
			.unwrap();

			assert_eq!(config.contact_points, vec!["db1"]);
			assert_eq!(config.local_datacenter, None);
		}
	}

	mod from_file {
		use std::io::Write;

		use crate::SessionConfig;

		#[test]
		fn test_ok() {
			let mut file = tempfile::NamedTempFile::new().unwrap();
			writeln!(file, "keyspace = \"metrics\"").unwrap();

			let config = SessionConfig::from_file(file.path()).unwrap();
			assert_eq!(config.keyspace.as_deref(), Some("metrics"));
		}

		#[test]
		fn test_missing_file() {
			let dir = tempfile::tempdir().unwrap();
			let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
			assert_eq!(err.code(), "CONFIG_001");
		}

		#[test]
		fn test_malformed_file() {
			let mut file = tempfile::NamedTempFile::new().unwrap();
			writeln!(file, "contact_points = ").unwrap();

			let err = SessionConfig::from_file(file.path()).unwrap_err();
			assert_eq!(err.code(), "CONFIG_002");
		}
	}

	mod validate {
		use crate::{ProfileConfig, SessionConfig};

		#[test]
		fn test_default_config_is_valid() {
			assert!(SessionConfig::default().validate().is_ok());
		}

		#[test]
		fn test_empty_contact_points() {
			let mut config = SessionConfig::default();
			config.contact_points.clear();
			assert_eq!(config.validate().unwrap_err().code(), "CONFIG_004");
		}

		#[test]
		fn test_bad_contact_point() {
			let mut config = SessionConfig::default();
			config.contact_points = vec!["db:notaport".to_string()];

			let err = config.validate().unwrap_err();
			assert_eq!(err.code(), "CONFIG_007");
			assert_eq!(err.root_cause().code, "SESSION_003");
		}

		#[test]
		fn test_zero_values() {
			let mut config = SessionConfig::default();
			config.port = 0;
			assert_eq!(config.validate().unwrap_err().code(), "CONFIG_005");

			let mut config = SessionConfig::default();
			config.connect_timeout_ms = 0;
			assert_eq!(config.validate().unwrap_err().code(), "CONFIG_005");
		}

		#[test]
		fn test_invalid_consistency() {
			let mut config = SessionConfig::default();
			config.consistency = "SOMETIMES".to_string();

			let err = config.validate().unwrap_err();
			assert_eq!(err.code(), "CONFIG_007");
			assert_eq!(err.root_cause().code, "SESSION_009");
		}

		#[test]
		fn test_invalid_compression() {
			let mut config = SessionConfig::default();
			config.compression = "gzip".to_string();
			assert_eq!(config.validate().unwrap_err().root_cause().code, "SESSION_010");
		}

		#[test]
		fn test_password_without_username() {
			let mut config = SessionConfig::default();
			config.password = Some("secret".to_string());
			assert_eq!(config.validate().unwrap_err().code(), "CONFIG_006");
		}

		#[test]
		fn test_invalid_profile() {
			let mut config = SessionConfig::default();
			config.profiles.insert(
				"olap".to_string(),
				ProfileConfig {
					request_timeout_ms: Some(0),
					..Default::default()
				},
			);
			assert_eq!(config.validate().unwrap_err().code(), "CONFIG_005");
		}

		#[test]
		fn test_negative_page_size() {
			let mut config = SessionConfig::default();
			config.page_size = -10;

			let err = config.validate().unwrap_err();
			assert_eq!(err.code(), "CONFIG_008");
			assert_eq!(err.message, "page_size must be positive, got -10");
		}

		#[test]
		fn test_default_profile_table_rejected() {
			let err = SessionConfig::from_toml("[profiles.default]\nrequest_timeout_ms = 9000\n").unwrap_err();
			assert_eq!(err.code(), "CONFIG_007");
			assert_eq!(err.root_cause().code, "SESSION_008");
		}
	}
}
