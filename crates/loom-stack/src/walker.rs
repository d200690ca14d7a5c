// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime introspection of the call stack.

use rustc_demangle::demangle;

/// Opaque handle to a resolved program location, valid for the walker that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub usize);

/// Where a single stack depth is executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	pub handle: FrameHandle,
	/// Absolute source path as reported by the runtime
	pub file: String,
	/// 1-based line, `0` when unknown
	pub line: u32,
}

/// Capability to inspect a call stack one depth at a time.
///
/// Depth `0` is the innermost frame the walker exposes. Implementations
/// return `None` once `depth` is past the outermost frame.
pub trait StackWalker {
	fn location(&self, depth: usize) -> Option<Location>;

	/// Fully-qualified function name at `handle`, if it can be resolved.
	fn function_name(&self, handle: FrameHandle) -> Option<String>;
}

/// Leading frames with these name prefixes belong to the capture machinery.
const MACHINERY: &[&str] = &[
	"backtrace::",
	"<backtrace::",
	"_Unwind_",
	"loom_stack::walker::BacktraceWalker::capture",
	"loom_stack::capture::capture_stack",
];

#[derive(Debug, Clone)]
struct ResolvedSymbol {
	ip: usize,
	name: Option<String>,
	file: Option<String>,
	line: Option<u32>,
}

impl ResolvedSymbol {
	fn is_machinery(&self) -> bool {
		match &self.name {
			Some(name) => MACHINERY.iter().any(|m| name.starts_with(m)),
			None => false,
		}
	}
}

/// [`StackWalker`] over a snapshot of the current thread's stack, taken with
/// the `backtrace` crate.
///
/// Inlined functions resolve to separate depths. Depth `0` is the first
/// frame outside the capture machinery, i.e. the caller of
/// [`capture_stack`](crate::capture_stack).
#[derive(Debug, Clone, Default)]
pub struct BacktraceWalker {
	symbols: Vec<ResolvedSymbol>,
}

impl BacktraceWalker {
	/// Snapshots and symbolizes the current stack.
	#[inline(never)]
	pub fn capture() -> Self {
		let mut symbols = Vec::new();

		backtrace::trace(|frame| {
			let ip = frame.ip() as usize;
			let before = symbols.len();
			backtrace::resolve_frame(frame, |symbol| {
				symbols.push(ResolvedSymbol {
					ip,
					name: symbol.name().map(|name| match name.as_str() {
						Some(raw) => format!("{:#}", demangle(raw)),
						None => format!("{:#}", name),
					}),
					file: symbol
						.filename()
						.map(|path| path.to_string_lossy().into_owned()),
					line: symbol.lineno(),
				});
			});
			if symbols.len() == before {
				symbols.push(ResolvedSymbol {
					ip,
					name: None,
					file: None,
					line: None,
				});
			}
			true
		});

		let machinery = symbols
			.iter()
			.take_while(|symbol| symbol.is_machinery())
			.count();
		symbols.drain(..machinery);
		tracing::trace!(
			machinery,
			depth = symbols.len(),
			"snapshotted call stack"
		);

		Self { symbols }
	}

	pub fn depth(&self) -> usize {
		self.symbols.len()
	}

	/// Instruction pointer behind `handle`.
	pub fn ip(&self, handle: FrameHandle) -> Option<usize> {
		self.symbols.get(handle.0).map(|s| s.ip)
	}
}

impl StackWalker for BacktraceWalker {
	fn location(&self, depth: usize) -> Option<Location> {
		let symbol = self.symbols.get(depth)?;
		Some(Location {
			handle: FrameHandle(depth),
			file: symbol
				.file
				.clone()
				.unwrap_or_else(|| loom_stack_core::UNKNOWN.to_string()),
			line: symbol.line.unwrap_or(0),
		})
	}

	fn function_name(&self, handle: FrameHandle) -> Option<String> {
		self.symbols.get(handle.0)?.name.clone()
	}
}
