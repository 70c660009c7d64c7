// SPDX-License-Identifier: MPL-2.0
//! Aggregate playback state shown by the control overlay.

use super::newtypes::{PlaybackRate, VolumeLevel};
use super::timeline::{known_duration, TimelineFraction};

/// Mirror of the media element as the controls see it.
///
/// Created when the control surface mounts and dropped with it. Only the
/// controllers mutate it; `volume_level` in particular is written solely by
/// the volume-change handler.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // Independent view-mode flags
pub struct MediaSession {
    /// Playing as last predicted or reported by the media element.
    pub playing: bool,
    pub theater_mode: bool,
    pub full_screen: bool,
    pub floating_window: bool,
    volume_level: VolumeLevel,
    /// Value shown by the volume slider (0 while muted).
    pub slider_volume: f32,
    pub playback_rate: PlaybackRate,
    pub current_time: f64,
    duration: Option<f64>,
    /// Committed playback marker on the timeline.
    pub progress: TimelineFraction,
}

impl Default for MediaSession {
    fn default() -> Self {
        Self {
            playing: false,
            theater_mode: false,
            full_screen: false,
            floating_window: false,
            volume_level: VolumeLevel::High,
            slider_volume: 1.0,
            playback_rate: PlaybackRate::default(),
            current_time: 0.0,
            duration: None,
            progress: TimelineFraction::START,
        }
    }
}

impl MediaSession {
    #[must_use]
    pub fn volume_level(&self) -> VolumeLevel {
        self.volume_level
    }

    pub(crate) fn set_volume_level(&mut self, level: VolumeLevel) {
        self.volume_level = level;
    }

    /// Media duration, `None` until a usable duration has loaded.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Records the loaded duration; unusable values leave it unknown.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = known_duration(Some(duration));
    }

    /// Updates the playback clock and, unless a scrub owns the marker,
    /// the committed progress.
    pub fn record_time(&mut self, current_time: f64, scrubbing: bool) {
        self.current_time = current_time;
        if !scrubbing {
            self.progress = TimelineFraction::of_duration(current_time, self.duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_session_matches_mount_state() {
        let session = MediaSession::default();
        assert!(!session.playing);
        assert_eq!(session.volume_level(), VolumeLevel::High);
        assert_abs_diff_eq!(session.playback_rate.value(), 1.0);
        assert!(session.duration().is_none());
        assert!(!session.theater_mode && !session.full_screen && !session.floating_window);
    }

    #[test]
    fn set_duration_ignores_unusable_values() {
        let mut session = MediaSession::default();
        session.set_duration(f64::NAN);
        assert!(session.duration().is_none());
        session.set_duration(90.0);
        assert_eq!(session.duration(), Some(90.0));
    }

    #[test]
    fn record_time_moves_progress_only_when_idle() {
        let mut session = MediaSession::default();
        session.set_duration(100.0);

        session.record_time(25.0, false);
        assert_abs_diff_eq!(session.progress.value(), 0.25);

        session.record_time(80.0, true);
        assert_abs_diff_eq!(session.current_time, 80.0);
        assert_abs_diff_eq!(session.progress.value(), 0.25);
    }

    #[test]
    fn record_time_before_load_keeps_progress_at_start() {
        let mut session = MediaSession::default();
        session.record_time(12.0, false);
        assert_eq!(session.progress, TimelineFraction::START);
    }
}
