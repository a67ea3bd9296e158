// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use cqlsession_type::{Error, error::diagnostic::session::invalid_contact_point, return_error};

/// Native protocol port used when a contact point does not name one.
pub const DEFAULT_PORT: u16 = 9042;

/// A node the driver contacts first to discover the rest of the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactPoint {
	host: String,
	port: u16,
}

impl ContactPoint {
	pub fn new(host: impl Into<String>, port: u16) -> Self {
		Self {
			host: host.into(),
			port,
		}
	}

	/// Parses `input`, using `default_port` when the input carries no port.
	pub fn parse_with_default_port(input: &str, default_port: u16) -> crate::Result<Self> {
		let trimmed = input.trim();
		if trimmed.is_empty() {
			return_error!(invalid_contact_point(input, "host is empty"));
		}

		let (host, port) = if let Some(rest) = trimmed.strip_prefix('[') {
			let Some((host, tail)) = rest.split_once(']') else {
				return_error!(invalid_contact_point(input, "missing closing ']'"));
			};
			let port = match tail {
				"" => default_port,
				_ => match tail.strip_prefix(':') {
					Some(port) => parse_port(input, port)?,
					None => return_error!(invalid_contact_point(input, "unexpected text after ']'")),
				},
			};
			(host, port)
		} else if trimmed.matches(':').count() == 1 {
			let (host, port) = trimmed.split_once(':').unwrap_or((trimmed, ""));
			(host, parse_port(input, port)?)
		} else {
			// bare IPv6 address or plain hostname
			(trimmed, default_port)
		};

		if host.is_empty() {
			return_error!(invalid_contact_point(input, "host is empty"));
		}

		Ok(Self::new(host, port))
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn port(&self) -> u16 {
		self.port
	}
}

fn parse_port(input: &str, port: &str) -> crate::Result<u16> {
	match port.parse::<u16>() {
		Ok(0) => return_error!(invalid_contact_point(input, "port must be between 1 and 65535")),
		Ok(port) => Ok(port),
		Err(_) => return_error!(invalid_contact_point(input, format!("'{}' is not a valid port", port))),
	}
}

impl FromStr for ContactPoint {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse_with_default_port(s, DEFAULT_PORT)
	}
}

impl Display for ContactPoint {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.host.contains(':') {
			write!(f, "[{}]:{}", self.host, self.port)
		} else {
			write!(f, "{}:{}", self.host, self.port)
		}
	}
}
