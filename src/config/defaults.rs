// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: display, fade, exit and debounce durations
//! - **Diagnostics**: event buffer capacity

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long an inline notification stays before hiding itself (ms).
pub const DEFAULT_INLINE_DURATION_MS: u64 = 5_000;

pub const MIN_INLINE_DURATION_MS: u64 = 1_000;

pub const MAX_INLINE_DURATION_MS: u64 = 60_000;

/// Fade-out of an inline notification before removal (ms).
pub const DEFAULT_INLINE_FADE_MS: u64 = 150;

pub const MIN_INLINE_FADE_MS: u64 = 0;

pub const MAX_INLINE_FADE_MS: u64 = 2_000;

/// Exit transition of a dismissed blocking notification (ms).
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

pub const MIN_EXIT_TRANSITION_MS: u64 = 0;

pub const MAX_EXIT_TRANSITION_MS: u64 = 2_000;

/// Delay between a backdrop click and the teardown it triggers (ms).
pub const DEFAULT_BACKDROP_DEBOUNCE_MS: u64 = 100;

pub const MIN_BACKDROP_DEBOUNCE_MS: u64 = 0;

pub const MAX_BACKDROP_DEBOUNCE_MS: u64 = 1_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of events kept in memory before the oldest are overwritten.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1_000;

pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_INLINE_DURATION_MS >= MIN_INLINE_DURATION_MS);
    assert!(DEFAULT_INLINE_DURATION_MS <= MAX_INLINE_DURATION_MS);
    assert!(DEFAULT_INLINE_FADE_MS <= MAX_INLINE_FADE_MS);
    assert!(DEFAULT_EXIT_TRANSITION_MS <= MAX_EXIT_TRANSITION_MS);
    assert!(DEFAULT_BACKDROP_DEBOUNCE_MS <= MAX_BACKDROP_DEBOUNCE_MS);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
