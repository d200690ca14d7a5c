// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fingerprinting algorithm for grouping equivalent errors.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::Stack;

/// Lowercase hex CRC-32 digest identifying a stack for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<Fingerprint> for String {
	fn from(fingerprint: Fingerprint) -> Self {
		fingerprint.0
	}
}

/// Compute the grouping fingerprint of a stack.
///
/// Every frame, in stack order, contributes `filename`, `method` and the
/// decimal `line` to a CRC-32 (IEEE) checksum. Fields are fed without
/// separators, so frames whose concatenated text is identical collide
/// (`"ab" + "c"` and `"a" + "bc"`). Existing fingerprints depend on this
/// exact byte stream; adding delimiters would regroup every stored error.
///
/// `code` is never hashed: the snippet depends on the checkout, not on the
/// failing frame.
pub fn compute_fingerprint(stack: &Stack) -> Fingerprint {
	let mut hasher = Hasher::new();
	for frame in stack {
		hasher.update(frame.filename.as_bytes());
		hasher.update(frame.method.as_bytes());
		hasher.update(frame.line.to_string().as_bytes());
	}
	Fingerprint(format!("{:x}", hasher.finalize()))
}
