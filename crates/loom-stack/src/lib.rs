// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Call stack capture for Loom error reporting.
//!
//! Captures the live call stack at the point of an error, normalizes every
//! frame into a machine-independent [`Frame`], and derives the
//! [`Fingerprint`] used to group equivalent errors.
//!
//! # Example
//!
//! ```
//! use loom_stack::capture_stack;
//!
//! let stack = capture_stack(0);
//! let fingerprint = stack.fingerprint();
//! assert!(!fingerprint.as_str().is_empty());
//! ```
//!
//! Nothing here returns an error. Missing symbols degrade to `"???"` and
//! unreadable sources to an empty `code`, since capture usually runs while
//! another error is already being handled.

pub mod builder;
pub mod capture;
pub mod config;
pub mod walker;

pub use builder::{simple_function_name, FrameBuilder};
pub use capture::{capture_stack, capture_stack_with};
pub use config::{global_config, init, known_path_patterns, StackConfig};
pub use walker::{BacktraceWalker, FrameHandle, Location, StackWalker};

pub use loom_stack_core::{
	compute_fingerprint, read_source_line, Fingerprint, Frame, KnownPathPatterns, Stack,
	StackError, UNKNOWN,
};

/// Creates a frame for a known location, normalized the same way as frames
/// produced by [`capture_stack`].
pub fn new_frame(file: &str, method: &str, line: u32) -> Frame {
	config::global_builder().new_frame(file, method, line)
}

/// Shortens `path` using the process-wide [`KnownPathPatterns`].
pub fn shorten_file_path(path: &str) -> &str {
	known_path_patterns().shorten(path)
}
