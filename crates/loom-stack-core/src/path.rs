// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source path canonicalization.
//!
//! Frames must group the same way no matter where the binary was built, so
//! absolute paths are cut down to a recognizable root:
//!
//! ```text
//! /usr/local/go/src/pkg/runtime/proc.c                -> pkg/runtime/proc.c
//! /home/foo/src/github.com/acme/app/src/main.rs       -> github.com/acme/app/src/main.rs
//! /rustc/90b35a62/library/std/src/rt.rs               -> library/std/src/rt.rs
//! /rustc/90b35a62/library/test/src/lib.rs             -> library/test/src/lib.rs
//! ```

/// Legacy standard-library layout marker. Matches are cut after `/src/`.
const LEGACY_STD_MARKER: &str = "/src/pkg/";

/// Prefix of toolchain sources in debug info, followed by the commit hash.
const TOOLCHAIN_MARKER: &str = "/rustc/";

/// Source roots of the Rust standard library inside a toolchain checkout.
pub const RUST_STD_ROOTS: &[&str] = &[
	"library/std/",
	"library/core/",
	"library/alloc/",
	"library/test/",
	"library/panic_unwind/",
	"library/panic_abort/",
	"library/proc_macro/",
	"library/std_detect/",
];

/// Well-known code-hosting prefixes.
pub const HOSTING_PREFIXES: &[&str] = &[
	"github.com/",
	"code.google.com/",
	"bitbucket.org/",
	"launchpad.net/",
];

/// Ordered set of path prefixes used to canonicalize source paths.
///
/// Built once and never mutated, so a single value can be shared by every
/// capturing thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownPathPatterns {
	patterns: Vec<String>,
}

impl KnownPathPatterns {
	/// Builds the pattern set in scan order: `std_root`, the Rust standard
	/// library roots, the hosting prefixes, then `workspace_root`.
	///
	/// Empty roots are ignored.
	pub fn new(std_root: Option<&str>, workspace_root: Option<&str>) -> Self {
		let mut patterns = Vec::with_capacity(RUST_STD_ROOTS.len() + HOSTING_PREFIXES.len() + 2);
		if let Some(root) = std_root.filter(|r| !r.is_empty()) {
			patterns.push(root.to_string());
		}
		patterns.extend(RUST_STD_ROOTS.iter().map(|p| p.to_string()));
		patterns.extend(HOSTING_PREFIXES.iter().map(|p| p.to_string()));
		if let Some(root) = workspace_root.filter(|r| !r.is_empty()) {
			patterns.push(root.to_string());
		}
		Self { patterns }
	}

	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Strips the machine-specific prefix from `path`.
	///
	/// Toolchain sources (`/rustc/<commit>/...`) lose the commit directory.
	/// Returns `path` unchanged when nothing matches.
	pub fn shorten<'p>(&self, path: &'p str) -> &'p str {
		if let Some(idx) = path.find(LEGACY_STD_MARKER) {
			return &path[idx + "/src/".len()..];
		}
		if let Some(rest) = strip_toolchain_commit(path) {
			return rest;
		}
		for pattern in &self.patterns {
			if let Some(idx) = path.find(pattern.as_str()) {
				return &path[idx..];
			}
		}
		path
	}
}

/// `/rustc/<commit>/library/...` -> `library/...`
fn strip_toolchain_commit(path: &str) -> Option<&str> {
	let after_marker = &path[path.find(TOOLCHAIN_MARKER)? + TOOLCHAIN_MARKER.len()..];
	let slash = after_marker.find('/')?;
	let rest = &after_marker[slash + 1..];
	if slash == 0 || rest.is_empty() {
		return None;
	}
	Some(rest)
}

impl Default for KnownPathPatterns {
	fn default() -> Self {
		Self::new(None, None)
	}
}
