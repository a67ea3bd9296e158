// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use cqlsession_type::{error::diagnostic::config::invalid_env_value, return_error};
use tracing::debug;

use crate::SessionConfig;

pub const ENV_PREFIX: &str = "CQLSESSION_";

impl SessionConfig {
	/// Override settings from `CQLSESSION_*` variables in the process environment
	pub fn apply_process_env(&mut self) -> cqlsession_type::Result<()> {
		self.apply_env_overrides(|key| std::env::var(key).ok())
	}

	/// Override settings from variables resolved by `lookup`.
	///
	/// Recognised variables: `CONTACT_POINTS` (comma separated), `PORT`, `LOCAL_DATACENTER`, `KEYSPACE`,
	/// `USERNAME`, `PASSWORD`, `REQUEST_TIMEOUT_MS`, each with the `CQLSESSION_` prefix.
	pub fn apply_env_overrides<F>(&mut self, lookup: F) -> cqlsession_type::Result<()>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| {
			let key = format!("{}{}", ENV_PREFIX, name);
			lookup(&key).map(|value| (key, value))
		};

		if let Some((key, value)) = var("CONTACT_POINTS") {
			debug!(%key, "override from environment");
			self.contact_points =
				value.split(',').map(str::trim).filter(|cp| !cp.is_empty()).map(str::to_string).collect();
		}

		if let Some((key, value)) = var("PORT") {
			debug!(%key, "override from environment");
			self.port = parse_number(&key, &value, "a port number")?;
		}

		if let Some((key, value)) = var("LOCAL_DATACENTER") {
			debug!(%key, "override from environment");
			self.local_datacenter = Some(value);
		}

		if let Some((key, value)) = var("KEYSPACE") {
			debug!(%key, "override from environment");
			self.keyspace = Some(value);
		}

		if let Some((key, value)) = var("USERNAME") {
			debug!(%key, "override from environment");
			self.username = Some(value);
		}

		if let Some((key, value)) = var("PASSWORD") {
			debug!(%key, "override from environment");
			self.password = Some(value);
		}

		if let Some((key, value)) = var("REQUEST_TIMEOUT_MS") {
			debug!(%key, "override from environment");
			self.request_timeout_ms = parse_number(&key, &value, "milliseconds as an unsigned integer")?;
		}

		Ok(())
	}
}

fn parse_number<T: FromStr>(key: &str, value: &str, expected: &str) -> cqlsession_type::Result<T> {
	match value.trim().parse::<T>() {
		Ok(n) => Ok(n),
		Err(_) => return_error!(invalid_env_value(key, value, expected)),
	}
}
