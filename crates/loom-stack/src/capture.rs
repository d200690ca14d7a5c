// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack capture.

use loom_stack_core::Stack;

use crate::builder::FrameBuilder;
use crate::config::global_builder;
use crate::walker::{BacktraceWalker, StackWalker};

/// Capture the current call stack, innermost frame first.
///
/// `skip` omits that many frames above the caller; `capture_stack(0)`
/// starts at the function that called it. A `skip` past the outermost
/// frame yields an empty stack.
#[inline(never)]
pub fn capture_stack(skip: usize) -> Stack {
	let walker = BacktraceWalker::capture();
	capture_stack_with(&walker, &global_builder(), skip)
}

/// Walk `walker` from depth `skip` until it reports no further frame.
pub fn capture_stack_with<W>(walker: &W, builder: &FrameBuilder<'_>, skip: usize) -> Stack
where
	W: StackWalker + ?Sized,
{
	let mut frames = Vec::new();
	let mut depth = skip;
	while let Some(location) = walker.location(depth) {
		frames.push(builder.build_frame(walker, &location));
		depth += 1;
	}

	tracing::debug!(skip, frames = frames.len(), "captured stack");
	Stack::from(frames)
}
