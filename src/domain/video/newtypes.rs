// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, the range of the media element).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Volume above which the level is `high` (exclusive).
    pub const HIGH_THRESHOLD: f32 = 0.5;
}

/// Volume magnitude, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use iced_transport::domain::video::Volume;
///
/// assert_eq!(Volume::new(0.4).value(), 0.4);
/// assert_eq!(Volume::new(3.0).value(), 1.0);
/// assert_eq!(Volume::new(f32::NAN).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume, clamping to valid range. NaN becomes silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true only for an exact zero, the value a slider reports at
    /// its left end.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == volume_bounds::MIN
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::MAX)
    }
}

// =============================================================================
// VolumeLevel
// =============================================================================

/// Coarse loudness indicator shown by the mute button icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeLevel {
    Muted,
    Low,
    #[default]
    High,
}

impl VolumeLevel {
    /// Classifies the media element's volume and mute state.
    ///
    /// Mute always wins over the magnitude.
    #[must_use]
    pub fn classify(volume: f32, muted: bool) -> Self {
        if muted || volume <= volume_bounds::MIN || volume.is_nan() {
            Self::Muted
        } else if volume > volume_bounds::HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Tag used by the presentation layer (`data-volume-level`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate table (0.25x to 2.0x in 0.25 steps).
pub mod rate_table {
    /// Every rate the speed button can select, in cycling order.
    pub const RATES: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];
    /// Index of normal speed (1.0x).
    pub const DEFAULT_INDEX: usize = 3;
}

/// Playback rate, stored as a position in [`rate_table::RATES`].
///
/// Cycling walks the table instead of adding 0.25 to a float, so the rate
/// never drifts off the table no matter how many times it wraps.
///
/// # Example
///
/// ```
/// use iced_transport::domain::video::PlaybackRate;
///
/// let rate = PlaybackRate::new(1.75);
/// assert_eq!(rate.next().value(), 2.0);
/// assert_eq!(rate.next().next().value(), 0.25);
/// assert_eq!(rate.next().next().label(), "0.25x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackRate(usize);

impl PlaybackRate {
    /// Creates a rate from an arbitrary value, snapping to the nearest
    /// table entry. Non-finite values map to normal speed.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self::default();
        }
        let index = rate_table::RATES
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - rate).abs().total_cmp(&(*b - rate).abs()))
            .map_or(rate_table::DEFAULT_INDEX, |(index, _)| index);
        Self(index)
    }

    /// Returns the rate multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        rate_table::RATES[self.0]
    }

    /// Returns the next rate, wrapping from the fastest back to the slowest.
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % rate_table::RATES.len())
    }

    /// Speed button label, e.g. `1x`, `1.25x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.value())
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 == rate_table::RATES.len() - 1
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_table::DEFAULT_INDEX)
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Keyboard seek step bounds (0.1s to 60s).
pub mod seek_step_bounds {
    /// Minimum seek step in seconds.
    pub const MIN: f64 = 0.1;
    /// Maximum seek step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default seek step in seconds.
    pub const DEFAULT: f64 = 1.0;
}

/// Seek distance for the arrow keys, guaranteed to be within valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}
