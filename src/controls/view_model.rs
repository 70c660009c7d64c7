// SPDX-License-Identifier: MPL-2.0
//! Presentation snapshot of the controls.

use super::time_format::format_time;
use super::timeline::{ScrubPhase, ScrubState};
use crate::domain::video::{MediaSession, VolumeLevel};

/// Everything a renderer needs to draw the overlay, detached from the
/// live session.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // Mode flags bound one-to-one to classes
pub struct ViewModel {
    pub playing: bool,
    pub theater_mode: bool,
    pub full_screen: bool,
    pub floating_window: bool,
    pub scrubbing: bool,
    pub volume_level: VolumeLevel,
    pub slider_volume: f32,
    /// Committed playback marker, in `[0, 1]`.
    pub progress_position: f64,
    /// Hover or drag marker, in `[0, 1]`.
    pub preview_position: f64,
    pub current_time: String,
    /// Empty until the duration is known.
    pub total_time: String,
    pub playback_rate_label: String,
}

impl ViewModel {
    #[must_use]
    pub fn new(session: &MediaSession, scrub: ScrubState) -> Self {
        Self {
            playing: session.playing,
            theater_mode: session.theater_mode,
            full_screen: session.full_screen,
            floating_window: session.floating_window,
            scrubbing: scrub.phase == ScrubPhase::Scrubbing,
            volume_level: session.volume_level(),
            slider_volume: session.slider_volume,
            progress_position: session.progress.value(),
            preview_position: scrub.preview.value(),
            current_time: format_time(session.current_time),
            total_time: session.duration().map(format_time).unwrap_or_default(),
            playback_rate_label: session.playback_rate.label(),
        }
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        !self.playing
    }

    /// Value of the `data-volume-level` attribute.
    #[must_use]
    pub fn volume_level_tag(&self) -> &'static str {
        self.volume_level.as_str()
    }

    /// Classes for the player container, base class first.
    #[must_use]
    pub fn container_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["video-container"];
        let flags = [
            (self.paused(), "paused"),
            (self.theater_mode, "theater"),
            (self.full_screen, "full-screen"),
            (self.floating_window, "mini-player"),
            (self.scrubbing, "scrubbing"),
        ];
        classes.extend(flags.into_iter().filter_map(|(on, class)| on.then_some(class)));
        classes
    }
}

impl std::fmt::Display for ViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} / {} progress={:.3} preview={:.3} volume={}({:.2}) speed={}",
            self.container_classes().join(" "),
            self.current_time,
            self.total_time,
            self.progress_position,
            self.preview_position,
            self.volume_level_tag(),
            self.slider_volume,
            self.playback_rate_label,
        )
    }
}
