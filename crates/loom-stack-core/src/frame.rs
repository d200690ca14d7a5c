// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack frame types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::fingerprint::{compute_fingerprint, Fingerprint};

/// Sentinel used for anything that could not be resolved.
pub const UNKNOWN: &str = "???";

/// A single executed line of code in a [`Stack`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
	/// Canonicalized source path
	pub filename: String,
	/// Bare function name, `"???"` when unresolved
	pub method: String,
	/// 1-based line, `0` when unknown. Negative or oversized `lineno`
	/// values in a payload read back as `0`.
	#[serde(rename = "lineno", deserialize_with = "lenient_line")]
	pub line: u32,
	/// Trimmed source text of the line, empty when unavailable
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub code: String,
}

impl Frame {
	/// Creates a frame from already-normalized parts.
	///
	/// Empty `filename` or `method` are replaced with [`UNKNOWN`].
	pub fn new(
		filename: impl Into<String>,
		method: impl Into<String>,
		line: u32,
		code: impl Into<String>,
	) -> Self {
		Self {
			filename: non_empty(filename.into()),
			method: non_empty(method.into()),
			line,
			code: code.into(),
		}
	}
}

fn lenient_line<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
	D: Deserializer<'de>,
{
	let line = i64::deserialize(deserializer)?;
	Ok(u32::try_from(line).unwrap_or(0))
}

fn non_empty(s: String) -> String {
	if s.is_empty() {
		UNKNOWN.to_string()
	} else {
		s
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{} in {}", self.filename, self.line, self.method)
	}
}

/// A stacktrace, innermost frame first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack {
	frames: Vec<Frame>,
}

impl Stack {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	pub fn len(&self) -> usize {
		self.frames.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}

	/// Grouping fingerprint for this stack. See [`compute_fingerprint`].
	pub fn fingerprint(&self) -> Fingerprint {
		compute_fingerprint(self)
	}
}

impl From<Vec<Frame>> for Stack {
	fn from(frames: Vec<Frame>) -> Self {
		Self { frames }
	}
}

impl FromIterator<Frame> for Stack {
	fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
		Self {
			frames: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for Stack {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Stack {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_frame_replaces_empty_identity_with_sentinel() {
		let frame = Frame::new("", "", 3, "");
		assert_eq!(frame.filename, UNKNOWN);
		assert_eq!(frame.method, UNKNOWN);
		assert_eq!(frame.line, 3);
		assert!(frame.code.is_empty());
	}

	#[test]
	fn frame_serializes_with_lineno_and_omits_empty_code() {
		let frame = Frame::new("github.com/acme/app/main.rs", "main", 12, "");
		let json = serde_json::to_value(&frame).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"filename": "github.com/acme/app/main.rs",
				"method": "main",
				"lineno": 12,
			})
		);
	}

	#[test]
	fn frame_serializes_code_when_present() {
		let frame = Frame::new("src/lib.rs", "run", 4, "let x = 1;");
		let json = serde_json::to_value(&frame).unwrap();
		assert_eq!(json["code"], "let x = 1;");
	}

	#[test]
	fn frame_deserializes_without_code() {
		let frame: Frame =
			serde_json::from_str(r#"{"filename":"a.rs","method":"f","lineno":1}"#).unwrap();
		assert_eq!(frame, Frame::new("a.rs", "f", 1, ""));
	}

	#[test]
	fn invalid_lineno_reads_as_unknown() {
		let negative: Frame =
			serde_json::from_str(r#"{"filename":"a.rs","method":"f","lineno":-1}"#).unwrap();
		assert_eq!(negative.line, 0);

		let oversized: Frame =
			serde_json::from_str(r#"{"filename":"a.rs","method":"f","lineno":4294967296}"#)
				.unwrap();
		assert_eq!(oversized.line, 0);
	}

	#[test]
	fn stack_serializes_as_array_in_order() {
		let stack: Stack = vec![
			Frame::new("inner.rs", "inner", 1, ""),
			Frame::new("outer.rs", "outer", 2, ""),
		]
		.into();

		let json = serde_json::to_value(&stack).unwrap();
		let frames = json.as_array().unwrap();
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[0]["method"], "inner");
		assert_eq!(frames[1]["method"], "outer");
	}

	#[test]
	fn frame_display() {
		let frame = Frame::new("src/main.rs", "main", 7, "");
		assert_eq!(frame.to_string(), "src/main.rs:7 in main");
	}

	#[test]
	fn empty_stack() {
		let stack = Stack::new();
		assert!(stack.is_empty());
		assert_eq!(stack.len(), 0);
		assert_eq!(stack.iter().count(), 0);
	}
}
