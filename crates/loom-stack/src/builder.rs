// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Normalization of raw stack locations into [`Frame`]s.

use std::path::MAIN_SEPARATOR;

use loom_stack_core::{read_source_line, Frame, KnownPathPatterns, UNKNOWN};

use crate::walker::{Location, StackWalker};

/// Builds normalized frames: bare function name, canonical path and,
/// optionally, the source line.
#[derive(Debug, Clone, Copy)]
pub struct FrameBuilder<'a> {
	patterns: &'a KnownPathPatterns,
	source_context: bool,
}

impl<'a> FrameBuilder<'a> {
	pub fn new(patterns: &'a KnownPathPatterns) -> Self {
		Self {
			patterns,
			source_context: true,
		}
	}

	/// Enables or disables reading the source line into [`Frame::code`].
	pub fn with_source_context(mut self, enabled: bool) -> Self {
		self.source_context = enabled;
		self
	}

	/// Normalizes a location reported by `walker`.
	pub fn build_frame<W>(&self, walker: &W, location: &Location) -> Frame
	where
		W: StackWalker + ?Sized,
	{
		let method = walker
			.function_name(location.handle)
			.map(|name| simple_function_name(&name))
			.unwrap_or_else(|| UNKNOWN.to_string());

		Frame::new(
			self.patterns.shorten(&location.file),
			method,
			location.line,
			self.source_code(&location.file, location.line),
		)
	}

	/// Creates a frame for an already-resolved location.
	///
	/// `method` is kept as given; only the path is canonicalized, the same
	/// way [`build_frame`](Self::build_frame) does it.
	pub fn new_frame(&self, file: &str, method: &str, line: u32) -> Frame {
		Frame::new(
			self.patterns.shorten(file),
			method,
			line,
			self.source_code(file, line),
		)
	}

	fn source_code(&self, file: &str, line: u32) -> String {
		if !self.source_context || file == UNKNOWN {
			return String::new();
		}
		match read_source_line(file, line) {
			Ok(code) => code,
			Err(e) => {
				tracing::trace!(error = %e, "source line unavailable");
				String::new()
			}
		}
	}
}

/// Reduces a fully-qualified function name to its bare name.
///
/// Everything up to the last path separator is dropped, then the last
/// `::` segment outside of `<...>` is kept. Turbofish arguments (`::<T>`)
/// are dropped. Closure and shim segments (`{{closure}}`, `{closure#0}`,
/// `{shim:vtable#0}`) stay attached to the function that owns them.
///
/// ```
/// use loom_stack::simple_function_name;
///
/// assert_eq!(simple_function_name("my_app::db::query"), "query");
/// assert_eq!(simple_function_name("my_app::main::{{closure}}"), "main::{{closure}}");
/// assert_eq!(simple_function_name("std::rt::lang_start::<()>::{closure#0}"), "lang_start::{closure#0}");
/// assert_eq!(simple_function_name("<alloc::vec::Vec<T> as core::ops::Drop>::drop"), "drop");
/// ```
pub fn simple_function_name(name: &str) -> String {
	let name = match name.rfind(MAIN_SEPARATOR) {
		Some(idx) => &name[idx + MAIN_SEPARATOR.len_utf8()..],
		None => name,
	};

	let mut segments = Vec::new();
	let mut seg_start = 0;
	for sep in top_level_separators(name) {
		segments.push(&name[seg_start..sep]);
		seg_start = sep + 2;
	}
	segments.push(&name[seg_start..]);

	// Walk back over closures and generic arguments to the owning function.
	let mut closures = Vec::new();
	let mut owner = None;
	for (idx, segment) in segments.iter().enumerate().rev() {
		if segment.starts_with('{') {
			closures.push(*segment);
		} else if segment.starts_with('<') && idx > 0 {
			continue;
		} else {
			owner = Some(*segment);
			break;
		}
	}

	let owner = match owner {
		Some("") => return UNKNOWN.to_string(),
		Some(owner) => owner,
		None => match closures.pop() {
			Some(first) => first,
			None => return UNKNOWN.to_string(),
		},
	};

	let mut simple = owner.to_string();
	for closure in closures.iter().rev() {
		simple.push_str("::");
		simple.push_str(closure);
	}
	simple
}

/// Byte offsets of `::` separators that are not nested inside `<...>`.
fn top_level_separators(name: &str) -> Vec<usize> {
	let bytes = name.as_bytes();
	let mut depth = 0usize;
	let mut separators = Vec::new();
	let mut i = 0;
	while i < bytes.len() {
		match bytes[i] {
			b'<' => depth += 1,
			// `->` in fn pointer types is not a closing bracket.
			b'>' if i > 0 && bytes[i - 1] == b'-' => {}
			b'>' => depth = depth.saturating_sub(1),
			b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
				separators.push(i);
				i += 1;
			}
			_ => {}
		}
		i += 1;
	}
	separators
}
