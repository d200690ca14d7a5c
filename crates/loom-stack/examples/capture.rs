// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: capture a stack and print its fingerprint.
//!
//! Run with:
//!   RUST_LOG=loom_stack=debug cargo run --example capture -p loom-stack

use loom_stack::{capture_stack, new_frame, Stack};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct LoadError {
	stack: Stack,
}

#[inline(never)]
fn load_config(path: &str) -> Result<String, LoadError> {
	std::fs::read_to_string(path).map_err(|_| LoadError {
		stack: capture_stack(0),
	})
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let err = match load_config("/nonexistent/loom/config.toml") {
		Ok(_) => return Ok(()),
		Err(err) => err,
	};

	println!("Captured {} frames:", err.stack.len());
	for frame in &err.stack {
		println!("  {frame}");
	}
	println!("\nFingerprint: {}", err.stack.fingerprint());

	println!("\nPayload:");
	println!("{}", serde_json::to_string_pretty(&err.stack)?);

	let manual = new_frame(file!(), "main", line!());
	println!("\nManual frame: {manual}");

	Ok(())
}
