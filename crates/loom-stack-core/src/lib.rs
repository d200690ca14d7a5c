// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Loom stack capture.
//!
//! This crate holds the parts of the error-grouping pipeline that do not need
//! access to the live call stack:
//!
//! - [`Frame`] and [`Stack`]: the normalized, serializable stack model
//! - [`KnownPathPatterns`]: machine-independent source path canonicalization
//! - [`read_source_line`]: best-effort source snippet lookup
//! - [`Fingerprint`]: the CRC-32 digest used to group equivalent errors
//!
//! Walking the live stack lives in the `loom-stack` crate, which builds on
//! these types.

pub mod error;
pub mod fingerprint;
pub mod frame;
pub mod path;
pub mod source;

pub use error::{Result, StackError};
pub use fingerprint::{compute_fingerprint, Fingerprint};
pub use frame::{Frame, Stack, UNKNOWN};
pub use path::{KnownPathPatterns, HOSTING_PREFIXES, RUST_STD_ROOTS};
pub use source::read_source_line;
