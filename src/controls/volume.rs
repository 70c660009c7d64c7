// SPDX-License-Identifier: MPL-2.0
//! Volume slider and mute indicator.

use tracing::trace;

use crate::application::port::MediaElement;
use crate::domain::video::{MediaSession, Volume, VolumeLevel};

/// Binds the volume slider to the media element for one action.
pub struct VolumeController<'a, M: MediaElement> {
    session: &'a mut MediaSession,
    media: &'a mut M,
}

impl<'a, M: MediaElement> VolumeController<'a, M> {
    pub fn new(session: &'a mut MediaSession, media: &'a mut M) -> Self {
        Self { session, media }
    }

    /// Applies a slider value. Dragging to zero mutes, anything else unmutes.
    pub fn on_volume_input(&mut self, value: f32) {
        let volume = Volume::new(value);
        self.media.set_volume(volume.value());
        self.media.set_muted(volume.is_silent());
    }

    /// Recomputes the indicator after the element reports a volume change.
    ///
    /// This is the only writer of [`MediaSession::volume_level`]. While
    /// muted the slider shows `0` whatever the underlying magnitude.
    pub fn on_volume_change(&mut self) -> VolumeLevel {
        let volume = self.media.volume();
        let level = VolumeLevel::classify(volume, self.media.is_muted());
        self.session.set_volume_level(level);
        self.session.slider_volume = if level == VolumeLevel::Muted {
            0.0
        } else {
            volume
        };
        trace!(level = %level, volume, "volume indicator updated");
        level
    }
}
