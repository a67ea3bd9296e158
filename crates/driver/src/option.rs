// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use cqlsession_type::{
	Error,
	error::diagnostic::session::{unknown_compression, unknown_consistency},
	return_error,
};

/// Frame compression negotiated with the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compression {
	#[default]
	None,
	Lz4,
	Snappy,
}

impl Compression {
	pub fn as_str(&self) -> &'static str {
		match self {
			Compression::None => "none",
			Compression::Lz4 => "lz4",
			Compression::Snappy => "snappy",
		}
	}
}

impl Display for Compression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Compression {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"none" | "" => Ok(Compression::None),
			"lz4" => Ok(Compression::Lz4),
			"snappy" => Ok(Compression::Snappy),
			_ => return_error!(unknown_compression(s)),
		}
	}
}

/// CQL consistency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Consistency {
	Any,
	One,
	Two,
	Three,
	Quorum,
	All,
	LocalQuorum,
	EachQuorum,
	#[default]
	LocalOne,
	Serial,
	LocalSerial,
}

impl Consistency {
	pub fn as_str(&self) -> &'static str {
		match self {
			Consistency::Any => "ANY",
			Consistency::One => "ONE",
			Consistency::Two => "TWO",
			Consistency::Three => "THREE",
			Consistency::Quorum => "QUORUM",
			Consistency::All => "ALL",
			Consistency::LocalQuorum => "LOCAL_QUORUM",
			Consistency::EachQuorum => "EACH_QUORUM",
			Consistency::LocalOne => "LOCAL_ONE",
			Consistency::Serial => "SERIAL",
			Consistency::LocalSerial => "LOCAL_SERIAL",
		}
	}

	/// Whether this level is only valid as a serial consistency for lightweight transactions.
	pub fn is_serial(&self) -> bool {
		matches!(self, Consistency::Serial | Consistency::LocalSerial)
	}
}

impl Display for Consistency {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Consistency {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let level = match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
			"ANY" => Consistency::Any,
			"ONE" => Consistency::One,
			"TWO" => Consistency::Two,
			"THREE" => Consistency::Three,
			"QUORUM" => Consistency::Quorum,
			"ALL" => Consistency::All,
			"LOCAL_QUORUM" => Consistency::LocalQuorum,
			"EACH_QUORUM" => Consistency::EachQuorum,
			"LOCAL_ONE" => Consistency::LocalOne,
			"SERIAL" => Consistency::Serial,
			"LOCAL_SERIAL" => Consistency::LocalSerial,
			_ => return_error!(unknown_consistency(s)),
		};
		Ok(level)
	}
}
