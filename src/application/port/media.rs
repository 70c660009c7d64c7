// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait, the transport primitives
//! the controls drive, and [`MediaEvent`], the notifications the element
//! emits back.
//!
//! # Design Notes
//!
//! - The element is the source of truth: its play/pause and volume events
//!   reconcile whatever the controls predicted.
//! - `play()` may complete asynchronously on the host; callers fire and
//!   forget, and a synchronous refusal is reported as [`HostError`].
//! - Setters do not clamp on the caller's behalf: the element clamps
//!   `current_time` into `[0, duration]` itself.

use crate::error::HostError;

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for the underlying playback element.
///
/// # Lifecycle
///
/// 1. The element is handed to the control surface at mount
/// 2. It emits [`MediaEvent::LoadedData`] once the duration is known
/// 3. It emits [`MediaEvent::TimeUpdate`] while playing or after seeks
/// 4. Play, pause and volume changes are echoed as events
pub trait MediaElement {
    /// Returns true while playback is paused (the initial state).
    fn is_paused(&self) -> bool;

    fn is_muted(&self) -> bool;

    /// Returns the volume magnitude in `[0, 1]`, independent of mute.
    fn volume(&self) -> f32;

    /// Returns the playback position in seconds.
    fn current_time(&self) -> f64;

    /// Returns the media duration, or `None` before it has loaded.
    fn duration(&self) -> Option<f64>;

    fn playback_rate(&self) -> f64;

    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host refuses to start playback
    /// (e.g., autoplay policy).
    fn play(&mut self) -> Result<(), HostError>;

    fn pause(&mut self);

    /// Seeks to `secs`; the element clamps into `[0, duration]`.
    fn set_current_time(&mut self, secs: f64);

    fn set_volume(&mut self, volume: f32);

    fn set_muted(&mut self, muted: bool);

    fn set_playback_rate(&mut self, rate: f64);

    /// Asks the host to move playback into a floating window.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if floating playback is refused or unsupported.
    fn request_floating_window(&mut self) -> Result<(), HostError>;
}

// =============================================================================
// MediaEvent
// =============================================================================

/// Notification emitted by a [`MediaElement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
    /// Volume magnitude or mute flag changed, from any source.
    VolumeChange,
    /// Media data is ready; carries the duration in seconds.
    LoadedData { duration: f64 },
    /// Playback position changed; carries the position in seconds.
    TimeUpdate { current_time: f64 },
}
