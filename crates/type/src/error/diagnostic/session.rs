// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Diagnostics raised while assembling or finalizing a session builder.

use super::Diagnostic;

/// No contact point was configured before the session was built
pub fn no_contact_points() -> Diagnostic {
	Diagnostic {
		code: "SESSION_001".to_string(),
		message: "no contact points configured".to_string(),
		label: None,
		help: Some("Add at least one contact point, e.g. `127.0.0.1:9042`".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Explicit contact points were given without naming the local datacenter
pub fn local_datacenter_required(contact_points: usize) -> Diagnostic {
	Diagnostic {
		code: "SESSION_002".to_string(),
		message: "local datacenter is required when contact points are set explicitly".to_string(),
		label: Some(format!("{} contact point(s) configured", contact_points)),
		help: Some("Set the local datacenter, e.g. `datacenter1`".to_string()),
		notes: vec![
			"The load balancing policy only routes requests to nodes in the local datacenter".to_string(),
		],
		cause: None,
	}
}

/// A contact point could not be parsed into host and port
pub fn invalid_contact_point(input: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "SESSION_003".to_string(),
		message: format!("invalid contact point '{}'", input),
		label: Some(reason.into()),
		help: Some("Use `host`, `host:port`, `[ipv6]` or `[ipv6]:port`".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The keyspace is not a valid CQL identifier
pub fn invalid_keyspace(name: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_004".to_string(),
		message: format!("invalid keyspace name '{}'", name),
		label: None,
		help: Some(
			"Keyspace names are 1 to 48 characters of letters, digits and underscores, or a double-quoted identifier"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// A timeout option was set to zero
pub fn zero_timeout(option: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_005".to_string(),
		message: format!("{} must be greater than zero", option),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The page size is not positive
pub fn invalid_page_size(value: i64) -> Diagnostic {
	Diagnostic {
		code: "SESSION_006".to_string(),
		message: format!("page size must be positive, got {}", value),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Credentials were configured with an empty username
pub fn empty_username() -> Diagnostic {
	Diagnostic {
		code: "SESSION_007".to_string(),
		message: "credentials require a non-empty username".to_string(),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A named execution profile has an empty name
pub fn invalid_profile_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_008".to_string(),
		message: format!("invalid execution profile name '{}'", name),
		label: None,
		help: Some("Profile names must not be blank; 'default' names the default profile itself".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A consistency level string is not recognised
pub fn unknown_consistency(input: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_009".to_string(),
		message: format!("unknown consistency level '{}'", input),
		label: None,
		help: Some(
			"Expected one of ANY, ONE, TWO, THREE, QUORUM, ALL, LOCAL_QUORUM, EACH_QUORUM, LOCAL_ONE, SERIAL, LOCAL_SERIAL"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// A compression algorithm string is not recognised
pub fn unknown_compression(input: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_010".to_string(),
		message: format!("unknown compression '{}'", input),
		label: None,
		help: Some("Expected one of none, lz4, snappy".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A driver option was given a value of the wrong kind
pub fn option_type_mismatch(option: &str, expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_011".to_string(),
		message: format!("driver option '{}' expects a {} value, got {}", option, expected, actual),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A non-serial level was given where only SERIAL or LOCAL_SERIAL is allowed
pub fn non_serial_consistency(option: &str, level: &str) -> Diagnostic {
	Diagnostic {
		code: "SESSION_012".to_string(),
		message: format!("driver option '{}' requires a serial consistency level, got {}", option, level),
		label: None,
		help: Some("Expected one of SERIAL, LOCAL_SERIAL".to_string()),
		notes: vec![],
		cause: None,
	}
}
