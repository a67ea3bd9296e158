// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cqlsession_driver::DriverConfigBuilder;
use cqlsession_type::Result;

/// Adjusts driver options and execution profiles in place before the session builder is created.
///
/// Any `Fn(&mut DriverConfigBuilder) -> Result<()> + Send + Sync` is a driver config configurer.
pub trait DriverConfigConfigurer: Send + Sync {
	fn configure(&self, builder: &mut DriverConfigBuilder) -> Result<()>;

	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}
}

impl<F> DriverConfigConfigurer for F
where
	F: Fn(&mut DriverConfigBuilder) -> Result<()> + Send + Sync,
{
	fn configure(&self, builder: &mut DriverConfigBuilder) -> Result<()> {
		self(builder)
	}
}
