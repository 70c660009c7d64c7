// SPDX-License-Identifier: MPL-2.0
//! Play/pause, mute, skip and speed controls.

use tracing::debug;

use crate::application::port::MediaElement;
use crate::domain::video::{MediaSession, PlaybackRate};

/// Drives the transport of the media element for one action.
///
/// `playing` is flipped optimistically; the element's own play/pause events
/// settle it through [`reconcile_playing`].
pub struct PlaybackController<'a, M: MediaElement> {
    session: &'a mut MediaSession,
    media: &'a mut M,
}

impl<'a, M: MediaElement> PlaybackController<'a, M> {
    pub fn new(session: &'a mut MediaSession, media: &'a mut M) -> Self {
        Self { session, media }
    }

    pub fn toggle_play(&mut self) {
        self.session.playing = !self.session.playing;
        if self.media.is_paused() {
            if let Err(err) = self.media.play() {
                debug!(%err, "play request rejected");
            }
        } else {
            self.media.pause();
        }
    }

    /// Flips mute without touching the volume magnitude.
    pub fn toggle_mute(&mut self) {
        let muted = !self.media.is_muted();
        self.media.set_muted(muted);
        debug!(muted, "mute toggled");
    }

    /// Seeks relative to the current position; the element clamps.
    pub fn skip(&mut self, delta_secs: f64) {
        let target = self.media.current_time() + delta_secs;
        self.media.set_current_time(target);
        debug!(delta_secs, target, "skip");
    }

    /// Steps to the next rate of the cycle, wrapping after the fastest.
    pub fn change_playback_speed(&mut self) -> PlaybackRate {
        let rate = PlaybackRate::new(self.media.playback_rate()).next();
        self.media.set_playback_rate(rate.value());
        self.session.playback_rate = rate;
        debug!(rate = %rate.label(), "playback speed changed");
        rate
    }
}

/// Applies the element's play (`true`) or pause (`false`) event.
pub fn reconcile_playing(session: &mut MediaSession, playing: bool) {
    session.playing = playing;
}
