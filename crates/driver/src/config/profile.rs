// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, time::Duration};

use super::{DriverOption, DriverValue};
use crate::{Compression, Consistency};

/// A set of driver option values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriverProfile {
	values: BTreeMap<DriverOption, DriverValue>,
}

impl DriverProfile {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, option: DriverOption) -> Option<&DriverValue> {
		self.values.get(&option)
	}

	pub fn set(&mut self, option: DriverOption, value: DriverValue) -> Option<DriverValue> {
		self.values.insert(option, value)
	}

	pub fn remove(&mut self, option: DriverOption) -> Option<DriverValue> {
		self.values.remove(&option)
	}

	pub fn contains(&self, option: DriverOption) -> bool {
		self.values.contains_key(&option)
	}

	pub fn iter(&self) -> impl Iterator<Item = (DriverOption, &DriverValue)> {
		self.values.iter().map(|(k, v)| (*k, v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Read access to a named profile, falling back to the default profile for options it does not set.
#[derive(Debug, Clone, Copy)]
pub struct ProfileView<'a> {
	name: &'a str,
	profile: &'a DriverProfile,
	fallback: &'a DriverProfile,
}

impl<'a> ProfileView<'a> {
	pub(crate) fn new(name: &'a str, profile: &'a DriverProfile, fallback: &'a DriverProfile) -> Self {
		Self {
			name,
			profile,
			fallback,
		}
	}

	pub fn name(&self) -> &'a str {
		self.name
	}

	/// Whether the option is set on this profile itself rather than inherited.
	pub fn overrides(&self, option: DriverOption) -> bool {
		self.profile.contains(option)
	}

	pub fn get(&self, option: DriverOption) -> Option<&'a DriverValue> {
		self.profile.get(option).or_else(|| self.fallback.get(option))
	}

	pub fn duration(&self, option: DriverOption) -> Option<Duration> {
		match self.get(option) {
			Some(DriverValue::Duration(d)) => Some(*d),
			_ => None,
		}
	}

	pub fn int(&self, option: DriverOption) -> Option<i64> {
		match self.get(option) {
			Some(DriverValue::Int(i)) => Some(*i),
			_ => None,
		}
	}

	pub fn text(&self, option: DriverOption) -> Option<&'a str> {
		match self.get(option) {
			Some(DriverValue::Text(s)) => Some(s.as_str()),
			_ => None,
		}
	}

	pub fn consistency(&self, option: DriverOption) -> Option<Consistency> {
		match self.get(option) {
			Some(DriverValue::Consistency(c)) => Some(*c),
			_ => None,
		}
	}

	pub fn compression(&self) -> Option<Compression> {
		match self.get(DriverOption::ProtocolCompression) {
			Some(DriverValue::Compression(c)) => Some(*c),
			_ => None,
		}
	}
}
