// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeMap,
	fmt::{self, Debug, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Session settings as read from a TOML file.
///
/// ```toml
/// contact_points = ["10.0.0.1", "10.0.0.2:19042"]
/// local_datacenter = "dc1"
/// keyspace = "inventory"
///
/// [profiles.olap]
/// request_timeout_ms = 30000
/// consistency = "ONE"
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
	/// Nodes to contact first, as `host`, `host:port`, `[ipv6]` or `[ipv6]:port`
	#[serde(default = "default_contact_points")]
	pub contact_points: Vec<String>,

	/// Port for contact points that do not name one
	#[serde(default = "default_port")]
	pub port: u16,

	#[serde(default = "default_local_datacenter")]
	pub local_datacenter: Option<String>,

	#[serde(default)]
	pub keyspace: Option<String>,

	#[serde(default)]
	pub username: Option<String>,

	#[serde(default)]
	pub password: Option<String>,

	#[serde(default)]
	pub session_name: Option<String>,

	#[serde(default)]
	pub application_name: Option<String>,

	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u64,

	#[serde(default = "default_connect_timeout_ms")]
	pub connect_timeout_ms: u64,

	#[serde(default = "default_page_size")]
	pub page_size: i64,

	#[serde(default = "default_consistency")]
	pub consistency: String,

	#[serde(default = "default_compression")]
	pub compression: String,

	/// Named execution profiles; unset fields inherit from the top-level settings
	#[serde(default)]
	pub profiles: BTreeMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
	#[serde(default)]
	pub request_timeout_ms: Option<u64>,

	#[serde(default)]
	pub page_size: Option<i64>,

	#[serde(default)]
	pub consistency: Option<String>,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			contact_points: default_contact_points(),
			port: default_port(),
			local_datacenter: default_local_datacenter(),
			keyspace: None,
			username: None,
			password: None,
			session_name: None,
			application_name: None,
			request_timeout_ms: default_request_timeout_ms(),
			connect_timeout_ms: default_connect_timeout_ms(),
			page_size: default_page_size(),
			consistency: default_consistency(),
			compression: default_compression(),
			profiles: BTreeMap::new(),
		}
	}
}

impl Debug for SessionConfig {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("SessionConfig")
			.field("contact_points", &self.contact_points)
			.field("port", &self.port)
			.field("local_datacenter", &self.local_datacenter)
			.field("keyspace", &self.keyspace)
			.field("username", &self.username)
			.field("password", &self.password.as_ref().map(|_| "<redacted>"))
			.field("session_name", &self.session_name)
			.field("application_name", &self.application_name)
			.field("request_timeout_ms", &self.request_timeout_ms)
			.field("connect_timeout_ms", &self.connect_timeout_ms)
			.field("page_size", &self.page_size)
			.field("consistency", &self.consistency)
			.field("compression", &self.compression)
			.field("profiles", &self.profiles)
			.finish()
	}
}
