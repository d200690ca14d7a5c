// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source line lookup for frame enrichment.

use std::fs;
use std::path::Path;

use crate::error::{Result, StackError};
use crate::frame::UNKNOWN;

/// Read a single line of a source file, trimmed of spaces and tabs.
///
/// `line` is 1-based. A line outside the file (including `0`) yields
/// `Ok("???")`; only an unreadable or non-UTF-8 file is an error.
pub fn read_source_line(path: impl AsRef<Path>, line: u32) -> Result<String> {
	let path = path.as_ref();
	let data = fs::read(path).map_err(|source| StackError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let text = String::from_utf8(data).map_err(|_| StackError::NotUtf8 {
		path: path.to_path_buf(),
	})?;

	let mut lines: Vec<&str> = text.split('\n').collect();
	// A trailing newline terminates the last line rather than opening a new one.
	if text.is_empty() || text.ends_with('\n') {
		lines.pop();
	}

	if line == 0 || line as usize > lines.len() {
		return Ok(UNKNOWN.to_string());
	}

	Ok(lines[line as usize - 1]
		.trim_matches(|c| c == ' ' || c == '\t')
		.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn source_file(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file.flush().unwrap();
		file
	}

	#[test]
	fn reads_and_trims_line() {
		let file = source_file("fn main() {\n\t  let x = 1;  \t\n}\n");
		assert_eq!(read_source_line(file.path(), 1).unwrap(), "fn main() {");
		assert_eq!(read_source_line(file.path(), 2).unwrap(), "let x = 1;");
		assert_eq!(read_source_line(file.path(), 3).unwrap(), "}");
	}

	#[test]
	fn last_line_without_trailing_newline() {
		let file = source_file("first\nsecond");
		assert_eq!(read_source_line(file.path(), 2).unwrap(), "second");
		assert_eq!(read_source_line(file.path(), 3).unwrap(), UNKNOWN);
	}

	#[test]
	fn zero_line_is_out_of_range() {
		let file = source_file("only\n");
		assert_eq!(read_source_line(file.path(), 0).unwrap(), UNKNOWN);
	}

	#[test]
	fn line_past_end_is_out_of_range() {
		let file = source_file("one\ntwo\n");
		assert_eq!(read_source_line(file.path(), 3).unwrap(), UNKNOWN);
		assert_eq!(read_source_line(file.path(), u32::MAX).unwrap(), UNKNOWN);
	}

	#[test]
	fn empty_file_has_no_lines() {
		let file = source_file("");
		assert_eq!(read_source_line(file.path(), 1).unwrap(), UNKNOWN);
	}

	#[test]
	fn blank_line_reads_as_empty() {
		let file = source_file("a\n\n   \nb\n");
		assert_eq!(read_source_line(file.path(), 2).unwrap(), "");
		assert_eq!(read_source_line(file.path(), 3).unwrap(), "");
	}

	#[test]
	fn missing_file_is_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_source_line(dir.path().join("missing.rs"), 1).unwrap_err();
		assert!(matches!(err, StackError::Io { .. }));
	}

	#[test]
	fn binary_file_is_error() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(&[0xff, 0xfe, 0x00, 0x9f, b'\n']).unwrap();
		file.flush().unwrap();
		let err = read_source_line(file.path(), 1).unwrap_err();
		assert!(matches!(err, StackError::NotUtf8 { .. }));
	}
}
