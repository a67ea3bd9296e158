// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	time::Duration,
};

use crate::{Compression, Consistency};

/// Typed key of a driver setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DriverOption {
	RequestTimeout,
	ConnectTimeout,
	HeartbeatInterval,
	RequestPageSize,
	RequestConsistency,
	RequestSerialConsistency,
	ProtocolCompression,
	ApplicationName,
	ApplicationVersion,
}

impl DriverOption {
	/// Dotted path the option is known by in driver configuration files.
	pub fn path(&self) -> &'static str {
		match self {
			DriverOption::RequestTimeout => "basic.request.timeout",
			DriverOption::ConnectTimeout => "advanced.connection.connect-timeout",
			DriverOption::HeartbeatInterval => "advanced.heartbeat.interval",
			DriverOption::RequestPageSize => "basic.request.page-size",
			DriverOption::RequestConsistency => "basic.request.consistency",
			DriverOption::RequestSerialConsistency => "basic.request.serial-consistency",
			DriverOption::ProtocolCompression => "advanced.protocol.compression",
			DriverOption::ApplicationName => "basic.application.name",
			DriverOption::ApplicationVersion => "basic.application.version",
		}
	}

	pub(crate) fn kind(&self) -> ValueKind {
		match self {
			DriverOption::RequestTimeout | DriverOption::ConnectTimeout | DriverOption::HeartbeatInterval => {
				ValueKind::Duration
			}
			DriverOption::RequestPageSize => ValueKind::Int,
			DriverOption::RequestConsistency | DriverOption::RequestSerialConsistency => ValueKind::Consistency,
			DriverOption::ProtocolCompression => ValueKind::Compression,
			DriverOption::ApplicationName | DriverOption::ApplicationVersion => ValueKind::Text,
		}
	}
}

impl Display for DriverOption {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
	Duration(Duration),
	Int(i64),
	Text(String),
	Consistency(Consistency),
	Compression(Compression),
}

impl DriverValue {
	pub(crate) fn kind(&self) -> ValueKind {
		match self {
			DriverValue::Duration(_) => ValueKind::Duration,
			DriverValue::Int(_) => ValueKind::Int,
			DriverValue::Text(_) => ValueKind::Text,
			DriverValue::Consistency(_) => ValueKind::Consistency,
			DriverValue::Compression(_) => ValueKind::Compression,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
	Duration,
	Int,
	Text,
	Consistency,
	Compression,
}

impl ValueKind {
	pub(crate) fn as_str(&self) -> &'static str {
		match self {
			ValueKind::Duration => "duration",
			ValueKind::Int => "integer",
			ValueKind::Text => "string",
			ValueKind::Consistency => "consistency",
			ValueKind::Compression => "compression",
		}
	}
}
