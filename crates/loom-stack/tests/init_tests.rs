// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide configuration. Kept in its own test binary because the
//! configuration can only be installed once per process.

use loom_stack::{init, known_path_patterns, new_frame, shorten_file_path, StackConfig};

#[test]
fn init_installs_patterns_once() {
	let installed = init(StackConfig {
		workspace_root: Some("/home/dev/src".to_string()),
		source_context: false,
		..Default::default()
	});
	assert!(installed);
	assert!(!init(StackConfig::default()));

	assert_eq!(
		known_path_patterns().patterns().last().map(String::as_str),
		Some("/home/dev/src")
	);
	assert_eq!(
		shorten_file_path("/mnt/home/dev/src/app/main.rs"),
		"/home/dev/src/app/main.rs"
	);

	let frame = new_frame(
		concat!(env!("CARGO_MANIFEST_DIR"), "/tests/init_tests.rs"),
		"main",
		1,
	);
	assert!(frame.code.is_empty());
}
