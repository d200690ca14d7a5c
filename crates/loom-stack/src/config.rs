// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capture configuration and the process-wide path pattern set.

use std::sync::OnceLock;

use loom_stack_core::KnownPathPatterns;

use crate::builder::FrameBuilder;

pub const ENV_STD_ROOT: &str = "LOOM_STACK_STD_ROOT";
pub const ENV_WORKSPACE_ROOT: &str = "LOOM_STACK_WORKSPACE_ROOT";
pub const ENV_SOURCE_CONTEXT: &str = "LOOM_STACK_SOURCE_CONTEXT";

/// Settings for stack capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackConfig {
	/// Extra standard-library root, scanned before the built-in patterns.
	pub std_root: Option<String>,
	/// Local workspace root, scanned after the built-in patterns.
	pub workspace_root: Option<String>,
	/// Whether frames are enriched with their source line.
	pub source_context: bool,
}

impl Default for StackConfig {
	fn default() -> Self {
		Self {
			std_root: None,
			workspace_root: None,
			source_context: true,
		}
	}
}

impl StackConfig {
	/// Loads the configuration from `LOOM_STACK_*` environment variables.
	///
	/// Unset or empty variables fall back to the defaults.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

		let source_context = non_empty(ENV_SOURCE_CONTEXT)
			.map(|v| v != "0" && v.to_lowercase() != "false")
			.unwrap_or(true);

		Self {
			std_root: non_empty(ENV_STD_ROOT),
			workspace_root: non_empty(ENV_WORKSPACE_ROOT),
			source_context,
		}
	}

	/// Builds the path pattern set described by this configuration.
	pub fn patterns(&self) -> KnownPathPatterns {
		KnownPathPatterns::new(self.std_root.as_deref(), self.workspace_root.as_deref())
	}
}

struct Global {
	config: StackConfig,
	patterns: KnownPathPatterns,
}

static GLOBAL: OnceLock<Global> = OnceLock::new();

fn global() -> &'static Global {
	GLOBAL.get_or_init(|| {
		let config = StackConfig::from_env();
		tracing::debug!(?config, "stack capture configured from environment");
		Global::new(config)
	})
}

impl Global {
	fn new(config: StackConfig) -> Self {
		let patterns = config.patterns();
		Self { config, patterns }
	}
}

/// Installs `config` as the process-wide capture configuration.
///
/// Must run before the first capture. Returns `false` if the configuration
/// was already fixed, either by an earlier call or by a capture that loaded
/// it from the environment.
pub fn init(config: StackConfig) -> bool {
	let installed = GLOBAL.set(Global::new(config)).is_ok();
	if !installed {
		tracing::debug!("stack capture already configured; ignoring init");
	}
	installed
}

/// The process-wide configuration.
pub fn global_config() -> &'static StackConfig {
	&global().config
}

/// The process-wide path patterns.
pub fn known_path_patterns() -> &'static KnownPathPatterns {
	&global().patterns
}

pub(crate) fn global_builder() -> FrameBuilder<'static> {
	let global = global();
	FrameBuilder::new(&global.patterns).with_source_context(global.config.source_context)
}
