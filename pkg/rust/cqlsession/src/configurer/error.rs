// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cqlsession_type::{
	Diagnostic, IntoDiagnostic,
	error::diagnostic::configurer::{invalid_value, missing_field, rejected},
};

/// Typed failures for configurer implementations; converts into [`cqlsession_type::Error`] with `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurerError {
	#[error("session builder is missing required field '{field}'")]
	MissingField {
		field: String,
	},

	#[error("invalid value for '{field}': {reason}")]
	InvalidValue {
		field: String,
		reason: String,
	},

	#[error("session builder rejected: {reason}")]
	Rejected {
		reason: String,
	},
}

impl IntoDiagnostic for ConfigurerError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ConfigurerError::MissingField {
				field,
			} => missing_field(&field),
			ConfigurerError::InvalidValue {
				field,
				reason,
			} => invalid_value(&field, &reason),
			ConfigurerError::Rejected {
				reason,
			} => rejected(&reason),
		}
	}
}

#[cfg(test)]
mod tests {
	use cqlsession_type::{Error, IntoDiagnostic};

	use super::ConfigurerError;

	#[test]
	fn test_diagnostic_codes() {
		let missing = ConfigurerError::MissingField {
			field: "keyspace".to_string(),
		};
		let invalid = ConfigurerError::InvalidValue {
			field: "page_size".to_string(),
			reason: "too large".to_string(),
		};
		let rejected = ConfigurerError::Rejected {
			reason: "read-only replica".to_string(),
		};

		assert_eq!(missing.clone().into_diagnostic().code, "CONFIGURER_002");
		assert_eq!(invalid.clone().into_diagnostic().code, "CONFIGURER_003");
		assert_eq!(rejected.into_diagnostic().code, "CONFIGURER_004");

		let err: Error = invalid.into();
		assert_eq!(err.message, "invalid value for 'page_size': too large");
		assert_eq!(missing.to_string(), "session builder is missing required field 'keyspace'");
	}
}
