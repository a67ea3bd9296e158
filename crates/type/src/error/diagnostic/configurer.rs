// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// A session builder configurer returned an error
pub fn configurer_failed(name: &str, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "CONFIGURER_001".to_string(),
		message: format!("session builder configurer '{}' failed", name),
		label: None,
		help: None,
		notes: vec!["The session was not created".to_string()],
		cause: Some(Box::new(cause)),
	}
}

/// A configurer found a required builder field unset
pub fn missing_field(field: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIGURER_002".to_string(),
		message: format!("session builder is missing required field '{}'", field),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A configurer was asked to apply a value it rejects
pub fn invalid_value(field: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIGURER_003".to_string(),
		message: format!("invalid value for '{}': {}", field, reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A configurer rejected the builder for a reason of its own
pub fn rejected(reason: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIGURER_004".to_string(),
		message: format!("session builder rejected: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A driver config configurer returned an error
pub fn driver_config_configurer_failed(name: &str, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "CONFIGURER_005".to_string(),
		message: format!("driver config configurer '{}' failed", name),
		label: None,
		help: None,
		notes: vec!["The session was not created".to_string()],
		cause: Some(Box::new(cause)),
	}
}
