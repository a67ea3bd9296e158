// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Driver options grouped into execution profiles.
//!
//! A [`DriverConfig`] always has a default profile. Named profiles only hold the options they override and
//! read everything else from the default profile.

mod builder;
mod option;
mod profile;

use std::collections::BTreeMap;

pub use builder::DriverConfigBuilder;
use cqlsession_type::{
	error::diagnostic::session::{
		invalid_page_size, invalid_profile_name, non_serial_consistency, option_type_mismatch, zero_timeout,
	},
	return_error,
};
pub use option::{DriverOption, DriverValue};
pub use profile::{DriverProfile, ProfileView};

pub const DEFAULT_PROFILE: &str = "default";

/// Default option values every configuration starts from
pub mod defaults {
	use std::time::Duration;

	use crate::{Compression, Consistency};

	pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

	pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

	pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

	pub const PAGE_SIZE: i64 = 5000;

	pub const CONSISTENCY: Consistency = Consistency::LocalOne;

	pub const SERIAL_CONSISTENCY: Consistency = Consistency::Serial;

	pub const COMPRESSION: Compression = Compression::None;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
	default: DriverProfile,
	profiles: BTreeMap<String, DriverProfile>,
}

impl Default for DriverConfig {
	fn default() -> Self {
		Self {
			default: default_profile(),
			profiles: BTreeMap::new(),
		}
	}
}

impl DriverConfig {
	pub fn builder() -> DriverConfigBuilder {
		DriverConfigBuilder::new()
	}

	pub fn default_profile(&self) -> ProfileView<'_> {
		ProfileView::new(DEFAULT_PROFILE, &self.default, &self.default)
	}

	/// Looks up a profile by name. `"default"` resolves to the default profile.
	pub fn profile(&self, name: &str) -> Option<ProfileView<'_>> {
		if name == DEFAULT_PROFILE {
			return Some(self.default_profile());
		}
		self.profiles.get_key_value(name).map(|(name, profile)| ProfileView::new(name, profile, &self.default))
	}

	pub fn profile_names(&self) -> impl Iterator<Item = &str> {
		self.profiles.keys().map(String::as_str)
	}

	pub(crate) fn from_parts(default: DriverProfile, profiles: BTreeMap<String, DriverProfile>) -> Self {
		Self {
			default,
			profiles,
		}
	}

	pub(crate) fn into_parts(self) -> (DriverProfile, BTreeMap<String, DriverProfile>) {
		(self.default, self.profiles)
	}

	pub(crate) fn default_profile_mut(&mut self) -> &mut DriverProfile {
		&mut self.default
	}

	/// Checks option kinds and value ranges across all profiles.
	pub fn validate(&self) -> crate::Result<()> {
		validate_profile(&self.default)?;
		for (name, profile) in &self.profiles {
			if name.trim().is_empty() || name == DEFAULT_PROFILE {
				return_error!(invalid_profile_name(name));
			}
			validate_profile(profile)?;
		}
		Ok(())
	}
}

fn default_profile() -> DriverProfile {
	let mut profile = DriverProfile::new();
	profile.set(DriverOption::RequestTimeout, DriverValue::Duration(defaults::REQUEST_TIMEOUT));
	profile.set(DriverOption::ConnectTimeout, DriverValue::Duration(defaults::CONNECT_TIMEOUT));
	profile.set(DriverOption::HeartbeatInterval, DriverValue::Duration(defaults::HEARTBEAT_INTERVAL));
	profile.set(DriverOption::RequestPageSize, DriverValue::Int(defaults::PAGE_SIZE));
	profile.set(DriverOption::RequestConsistency, DriverValue::Consistency(defaults::CONSISTENCY));
	profile.set(DriverOption::RequestSerialConsistency, DriverValue::Consistency(defaults::SERIAL_CONSISTENCY));
	profile.set(DriverOption::ProtocolCompression, DriverValue::Compression(defaults::COMPRESSION));
	profile
}

fn validate_profile(profile: &DriverProfile) -> crate::Result<()> {
	for (option, value) in profile.iter() {
		let expected = option.kind();
		let actual = value.kind();
		if expected != actual {
			return_error!(option_type_mismatch(option.path(), expected.as_str(), actual.as_str()));
		}

		match value {
			DriverValue::Duration(d) if d.is_zero() => return_error!(zero_timeout(option.path())),
			DriverValue::Int(size) if option == DriverOption::RequestPageSize && *size <= 0 => {
				return_error!(invalid_page_size(*size))
			}
			DriverValue::Consistency(level) if option == DriverOption::RequestSerialConsistency && !level.is_serial() => {
				return_error!(non_serial_consistency(option.path(), level.as_str()))
			}
			_ => {}
		}
	}
	Ok(())
}
