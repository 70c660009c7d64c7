// SPDX-License-Identifier: MPL-2.0
//! Timeline value objects.
//!
//! Positions on the scrub bar are expressed as fractions of its width, so the
//! same value drives the progress marker, the hover preview and the seek.

/// Fraction of the timeline, guaranteed to be finite and within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TimelineFraction(f64);

impl TimelineFraction {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Creates a fraction, clamping into `[0, 1]`. NaN becomes `0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Position of `current_secs` within a media of `duration`.
    ///
    /// Unknown, zero or non-finite durations short-circuit to `0`.
    #[must_use]
    pub fn of_duration(current_secs: f64, duration: Option<f64>) -> Self {
        match known_duration(duration) {
            Some(duration) => Self::new(current_secs / duration),
            None => Self::START,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Time this fraction points at, or `None` while the duration is unknown.
    #[must_use]
    pub fn to_secs(self, duration: Option<f64>) -> Option<f64> {
        known_duration(duration).map(|duration| self.0 * duration)
    }
}

/// Filters out durations that cannot be divided by (not loaded, zero, NaN,
/// infinite live streams).
#[must_use]
pub fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Horizontal extent of the rendered timeline, re-read on every pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    pub origin_x: f32,
    pub width: f32,
}

impl TimelineGeometry {
    #[must_use]
    pub fn new(origin_x: f32, width: f32) -> Self {
        Self { origin_x, width }
    }

    /// Maps a pointer x coordinate onto the timeline.
    ///
    /// Pointers left of the timeline give `0`, right of it give `1`.
    /// A collapsed (zero-width) timeline always gives `0`.
    #[must_use]
    pub fn fraction_at(&self, pointer_x: f32) -> TimelineFraction {
        if !(self.width.is_finite() && self.width > 0.0) {
            return TimelineFraction::START;
        }
        let offset = (pointer_x - self.origin_x).clamp(0.0, self.width);
        TimelineFraction::new(f64::from(offset) / f64::from(self.width))
    }
}
