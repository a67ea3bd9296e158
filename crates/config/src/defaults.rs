// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// Default value functions referenced by `#[serde(default = ...)]`

use cqlsession_driver::DEFAULT_PORT;

pub fn default_contact_points() -> Vec<String> {
	vec!["127.0.0.1".to_string()]
}

pub fn default_port() -> u16 {
	DEFAULT_PORT
}

pub fn default_local_datacenter() -> Option<String> {
	Some("datacenter1".to_string())
}

pub fn default_request_timeout_ms() -> u64 {
	2000
}

pub fn default_connect_timeout_ms() -> u64 {
	5000
}

pub fn default_page_size() -> i64 {
	5000
}

pub fn default_consistency() -> String {
	"LOCAL_ONE".to_string()
}

pub fn default_compression() -> String {
	"none".to_string()
}
