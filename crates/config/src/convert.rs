// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use cqlsession_driver::{Compression, Consistency, ContactPoint, Credentials, DriverConfigBuilder, DriverOption};

use crate::SessionConfig;

impl SessionConfig {
	/// Contact points with the configured port applied to entries that do not carry one
	pub fn contact_points(&self) -> cqlsession_type::Result<Vec<ContactPoint>> {
		self.contact_points.iter().map(|cp| ContactPoint::parse_with_default_port(cp, self.port)).collect()
	}

	pub fn credentials(&self) -> Option<Credentials> {
		self.username
			.as_ref()
			.map(|username| Credentials::new(username.clone(), self.password.clone().unwrap_or_default()))
	}

	/// Driver options for the default profile and every named profile
	pub fn driver_config_builder(&self) -> cqlsession_type::Result<DriverConfigBuilder> {
		let mut builder = DriverConfigBuilder::new();

		builder.with_duration(DriverOption::RequestTimeout, Duration::from_millis(self.request_timeout_ms))
			.with_duration(DriverOption::ConnectTimeout, Duration::from_millis(self.connect_timeout_ms))
			.with_int(DriverOption::RequestPageSize, self.page_size)
			.with_consistency(DriverOption::RequestConsistency, self.consistency.parse::<Consistency>()?)
			.with_compression(self.compression.parse::<Compression>()?);

		if let Some(name) = &self.application_name {
			builder.with_string(DriverOption::ApplicationName, name.clone());
		}

		for (name, profile) in &self.profiles {
			builder.start_profile(name.clone());
			if let Some(timeout) = profile.request_timeout_ms {
				builder.with_duration(DriverOption::RequestTimeout, Duration::from_millis(timeout));
			}
			if let Some(page_size) = profile.page_size {
				builder.with_int(DriverOption::RequestPageSize, page_size);
			}
			if let Some(consistency) = &profile.consistency {
				builder.with_consistency(DriverOption::RequestConsistency, consistency.parse::<Consistency>()?);
			}
			builder.end_profile();
		}

		Ok(builder)
	}
}
