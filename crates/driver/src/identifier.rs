// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

const MAX_KEYSPACE_LENGTH: usize = 48;

/// Checks `name` against the CQL rules for keyspace identifiers.
///
/// Unquoted names are 1 to 48 ASCII letters, digits or underscores. A double-quoted name may contain any
/// characters, with embedded quotes doubled, and its unescaped body obeys the same length limit.
pub fn is_valid_keyspace(name: &str) -> bool {
	match name.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
		Some(inner) if name.len() >= 2 => is_valid_quoted(inner),
		_ => {
			!name.is_empty()
				&& name.len() <= MAX_KEYSPACE_LENGTH
				&& name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
		}
	}
}

fn is_valid_quoted(inner: &str) -> bool {
	let mut length = 0;
	let mut chars = inner.chars();
	while let Some(c) = chars.next() {
		if c == '"' && chars.next() != Some('"') {
			return false;
		}
		length += 1;
	}
	length > 0 && length <= MAX_KEYSPACE_LENGTH
}

#[cfg(test)]
mod tests {
	use super::is_valid_keyspace;

	#[test]
	fn test_unquoted() {
		assert!(is_valid_keyspace("inventory"));
		assert!(is_valid_keyspace("ks_2025"));
		assert!(!is_valid_keyspace(""));
		assert!(!is_valid_keyspace("has space"));
		assert!(!is_valid_keyspace("dash-ed"));
		assert!(!is_valid_keyspace(&"k".repeat(49)));
		assert!(is_valid_keyspace(&"k".repeat(48)));
	}

	#[test]
	fn test_quoted() {
		assert!(is_valid_keyspace("\"MixedCase\""));
		assert!(is_valid_keyspace("\"with \"\"quote\"\"\""));
		assert!(!is_valid_keyspace("\"\""));
		assert!(!is_valid_keyspace("\"lone\"quote\""));
		assert!(!is_valid_keyspace("\""));
	}
}
