// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use cqlsession::{Result, SessionBuilder, SessionBuilderConfigurer};
use tracing_subscriber::{EnvFilter, fmt};

/// Route tracing output to the test harness; honors `RUST_LOG`
pub fn init_tracing() {
	let _ = fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_test_writer()
		.try_init();
}

/// Counts how often it was applied and passes the builder through
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct Counting {
	calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl Counting {
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl SessionBuilderConfigurer for Counting {
	fn configure(&self, builder: SessionBuilder) -> Result<SessionBuilder> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(builder)
	}

	fn name(&self) -> &str {
		"counting"
	}
}
