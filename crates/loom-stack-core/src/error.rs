// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for stack capture.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while enriching frames.
///
/// These never escape frame construction; callers downgrade them to an empty
/// source snippet.
#[derive(Debug, Error)]
pub enum StackError {
	#[error("failed to read source file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("source file is not valid UTF-8: {path}")]
	NotUtf8 { path: PathBuf },
}

/// Result type for stack capture operations.
pub type Result<T> = std::result::Result<T, StackError>;
