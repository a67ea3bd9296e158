// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_one(&mut output, d, 0);
		output
	}
}

fn render_one(output: &mut String, d: &Diagnostic, depth: usize) {
	let indent = "  ".repeat(depth);

	if depth == 0 {
		let _ = writeln!(output, "error[{}]: {}", d.code, d.message);
	} else {
		let _ = writeln!(output, "{}caused by [{}]: {}", indent, d.code, d.message);
	}

	if let Some(label) = &d.label {
		let _ = writeln!(output, "{}  = {}", indent, label);
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "{}help: {}", indent, help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "{}note: {}", indent, note);
	}

	if let Some(cause) = &d.cause {
		render_one(output, cause, depth + 1);
	}
}
