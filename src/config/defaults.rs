// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the control overlay. Constants are organized by category.
//!
//! # Categories
//!
//! - **Keyboard**: Arrow-key seek step
//! - **Volume**: Level classification threshold
//! - **Scrubbing**: Behavior on scrub release

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Default seek step for the arrow keys (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 1.0;

/// Minimum allowed seek step (in seconds).
pub const MIN_SEEK_STEP_SECS: f64 = 0.1;

/// Maximum allowed seek step (in seconds).
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume above which the level is reported as `high` (exclusive).
pub const HIGH_VOLUME_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Scrubbing Defaults
// ==========================================================================

/// Whether releasing the timeline thumb resumes playback.
pub const DEFAULT_RESUME_AFTER_SCRUB: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(MAX_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);

    assert!(HIGH_VOLUME_THRESHOLD > 0.0);
    assert!(HIGH_VOLUME_THRESHOLD < 1.0);
};
