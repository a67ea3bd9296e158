// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Diagnostics raised while loading session configuration from files or the environment.

use super::Diagnostic;

/// The configuration file could not be read
pub fn read_failed(path: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("failed to read config file '{}'", path),
		label: Some(reason.into()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The configuration file is not valid TOML or does not match the schema
pub fn parse_failed(source: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_002".to_string(),
		message: format!("failed to parse config from {}", source),
		label: Some(reason.into()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// An environment override holds a value of the wrong shape
pub fn invalid_env_value(var: &str, value: &str, expected: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_003".to_string(),
		message: format!("environment variable {} has invalid value '{}'", var, value),
		label: Some(format!("expected {}", expected)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The configuration lists no contact points
pub fn empty_contact_points() -> Diagnostic {
	Diagnostic {
		code: "CONFIG_004".to_string(),
		message: "contact_points cannot be empty".to_string(),
		label: None,
		help: Some("List at least one node, e.g. contact_points = [\"127.0.0.1\"]".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A numeric field that must be positive is zero
pub fn zero_value(field: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_005".to_string(),
		message: format!("{} cannot be 0", field),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A signed numeric field is zero or negative
pub fn not_positive(field: &str, value: i64) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_008".to_string(),
		message: format!("{} must be positive, got {}", field, value),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A password was configured without a username
pub fn password_without_username() -> Diagnostic {
	Diagnostic {
		code: "CONFIG_006".to_string(),
		message: "password is set but username is missing".to_string(),
		label: None,
		help: Some("Set `username` alongside `password`".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A field holds a value the driver does not accept
pub fn invalid_value(field: &str, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_007".to_string(),
		message: format!("invalid value for {}", field),
		label: None,
		help: None,
		notes: vec![],
		cause: Some(Box::new(cause)),
	}
}
