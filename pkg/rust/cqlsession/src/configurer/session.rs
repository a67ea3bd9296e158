// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cqlsession_driver::SessionBuilder;
use cqlsession_type::Result;

/// Applies additional configuration to a [`SessionBuilder`] before the session is built.
///
/// The returned builder may be the one passed in, changed or not, or a new one. Callers must not assume
/// either. Implementations configure only; they must not build the session themselves. An error aborts
/// session assembly.
///
/// Any `Fn(SessionBuilder) -> Result<SessionBuilder> + Send + Sync` is a configurer.
pub trait SessionBuilderConfigurer: Send + Sync {
	fn configure(&self, builder: SessionBuilder) -> Result<SessionBuilder>;

	/// Name used in diagnostics and logs
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}
}

impl<F> SessionBuilderConfigurer for F
where
	F: Fn(SessionBuilder) -> Result<SessionBuilder> + Send + Sync,
{
	fn configure(&self, builder: SessionBuilder) -> Result<SessionBuilder> {
		self(builder)
	}
}

/// Returns the builder unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConfigurer;

impl SessionBuilderConfigurer for NoopConfigurer {
	fn configure(&self, builder: SessionBuilder) -> Result<SessionBuilder> {
		Ok(builder)
	}

	fn name(&self) -> &str {
		"noop"
	}
}

/// Wrap a configurer that cannot fail
pub fn infallible<F>(f: F) -> impl SessionBuilderConfigurer
where
	F: Fn(SessionBuilder) -> SessionBuilder + Send + Sync,
{
	move |builder: SessionBuilder| -> Result<SessionBuilder> { Ok(f(builder)) }
}

/// Give a configurer a readable name for diagnostics
pub fn named<C>(name: impl Into<String>, configurer: C) -> Named<C>
where
	C: SessionBuilderConfigurer,
{
	Named {
		name: name.into(),
		inner: configurer,
	}
}

pub struct Named<C> {
	name: String,
	inner: C,
}

impl<C> SessionBuilderConfigurer for Named<C>
where
	C: SessionBuilderConfigurer,
{
	fn configure(&self, builder: SessionBuilder) -> Result<SessionBuilder> {
		self.inner.configure(builder)
	}

	fn name(&self) -> &str {
		&self.name
	}
}
