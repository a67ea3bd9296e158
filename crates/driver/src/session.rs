// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	sync::atomic::{AtomicUsize, Ordering},
	time::Duration,
};

use crate::{
	Compression, Consistency, ContactPoint, Credentials, DriverConfig, DriverOption, ProfileView,
	config::defaults,
};

static SESSION_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Settings of a finalized session.
///
/// A `Session` only exists once every builder invariant held; it is immutable from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
	name: String,
	contact_points: Vec<ContactPoint>,
	local_datacenter: String,
	keyspace: Option<String>,
	credentials: Option<Credentials>,
	config: DriverConfig,
}

impl Session {
	pub(crate) fn from_builder(
		name: Option<String>,
		contact_points: Vec<ContactPoint>,
		local_datacenter: String,
		keyspace: Option<String>,
		credentials: Option<Credentials>,
		config: DriverConfig,
	) -> Self {
		let name = name.unwrap_or_else(|| format!("s{}", SESSION_COUNTER.fetch_add(1, Ordering::Relaxed)));
		Self {
			name,
			contact_points,
			local_datacenter,
			keyspace,
			credentials,
			config,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn contact_points(&self) -> &[ContactPoint] {
		&self.contact_points
	}

	pub fn local_datacenter(&self) -> &str {
		&self.local_datacenter
	}

	pub fn keyspace(&self) -> Option<&str> {
		self.keyspace.as_deref()
	}

	pub fn username(&self) -> Option<&str> {
		self.credentials.as_ref().map(Credentials::username)
	}

	pub fn credentials(&self) -> Option<&Credentials> {
		self.credentials.as_ref()
	}

	pub fn config(&self) -> &DriverConfig {
		&self.config
	}

	/// Execution profile by name; `"default"` is always present.
	pub fn execution_profile(&self, name: &str) -> Option<ProfileView<'_>> {
		self.config.profile(name)
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
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use crate::{Compression, ContactPoint, DriverConfigBuilder, DriverOption, SessionBuilder};

	#[test]
	fn test_execution_profiles() {
		let mut config = DriverConfigBuilder::new();
		config.start_profile("reporting").with_duration(DriverOption::RequestTimeout, Duration::from_secs(20));

		let session = SessionBuilder::new()
			.add_contact_point(ContactPoint::new("db", 9042))
			.with_local_datacenter("dc1")
			.with_config(config.build().unwrap())
			.with_compression(Compression::Snappy)
			.build()
			.unwrap();

		let reporting = session.execution_profile("reporting").unwrap();
		assert_eq!(reporting.duration(DriverOption::RequestTimeout), Some(Duration::from_secs(20)));
		assert_eq!(reporting.compression(), Some(Compression::Snappy));
		assert!(session.execution_profile("missing").is_none());
		assert_eq!(session.compression(), Compression::Snappy);
	}
}
