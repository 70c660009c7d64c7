// SPDX-License-Identifier: MPL-2.0
//! Theater, fullscreen and floating-window modes.
//!
//! Theater mode is purely local. Fullscreen and floating playback belong to
//! the host; the session keeps a predicted mirror that host callbacks
//! correct through [`reconcile`]. The three modes combine freely.

use tracing::debug;

use crate::application::port::{HostEvent, HostWindow, MediaElement};
use crate::domain::video::MediaSession;

pub struct ViewModeController<'a, M: MediaElement, H: HostWindow> {
    session: &'a mut MediaSession,
    media: &'a mut M,
    host: &'a mut H,
}

impl<'a, M: MediaElement, H: HostWindow> ViewModeController<'a, M, H> {
    pub fn new(session: &'a mut MediaSession, media: &'a mut M, host: &'a mut H) -> Self {
        Self {
            session,
            media,
            host,
        }
    }

    pub fn toggle_theater(&mut self) {
        self.session.theater_mode = !self.session.theater_mode;
        debug!(theater = self.session.theater_mode, "theater mode toggled");
    }

    /// Enters fullscreen unless the host already has something fullscreen,
    /// in which case it exits.
    ///
    /// A refused entry leaves the flag as it was. A failed exit means there
    /// was nothing to exit, so the flag is cleared either way.
    pub fn toggle_full_screen(&mut self) {
        if self.host.is_fullscreen_active() {
            if let Err(err) = self.host.exit_fullscreen() {
                debug!(%err, "fullscreen exit rejected");
            }
            self.session.full_screen = false;
        } else {
            match self.host.request_fullscreen() {
                Ok(()) => self.session.full_screen = true,
                Err(err) => debug!(%err, "fullscreen request rejected"),
            }
        }
        debug!(full_screen = self.session.full_screen, "fullscreen toggled");
    }

    /// Same policy as [`Self::toggle_full_screen`], keyed on the predicted
    /// flag since the host offers no floating-window query.
    pub fn toggle_floating_window(&mut self) {
        if self.session.floating_window {
            if let Err(err) = self.host.exit_floating_window() {
                debug!(%err, "floating window exit rejected");
            }
            self.session.floating_window = false;
        } else {
            match self.media.request_floating_window() {
                Ok(()) => self.session.floating_window = true,
                Err(err) => debug!(%err, "floating window request rejected"),
            }
        }
        debug!(
            floating_window = self.session.floating_window,
            "floating window toggled"
        );
    }
}

/// Applies a host callback to the predicted mode flags.
pub fn reconcile(session: &mut MediaSession, event: HostEvent) {
    match event {
        HostEvent::FullscreenChanged(active) => session.full_screen = active,
        HostEvent::FloatingWindowChanged(active) => session.floating_window = active,
    }
    debug!(?event, "host mode reconciled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{HeadlessMedia, HeadlessWindow};

    struct Fixture {
        session: MediaSession,
        media: HeadlessMedia,
        host: HeadlessWindow,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                session: MediaSession::default(),
                media: HeadlessMedia::with_duration(60.0),
                host: HeadlessWindow::default(),
            }
        }

        fn controller(&mut self) -> ViewModeController<'_, HeadlessMedia, HeadlessWindow> {
            ViewModeController::new(&mut self.session, &mut self.media, &mut self.host)
        }
    }

    #[test]
    fn theater_is_local_toggle() {
        let mut fx = Fixture::new();
        fx.controller().toggle_theater();
        assert!(fx.session.theater_mode);
        assert!(fx.host.drain_events().is_empty());
        fx.controller().toggle_theater();
        assert!(!fx.session.theater_mode);
    }

    #[test]
    fn fullscreen_round_trip() {
        let mut fx = Fixture::new();
        fx.controller().toggle_full_screen();
        assert!(fx.session.full_screen);
        assert!(fx.host.is_fullscreen_active());

        fx.controller().toggle_full_screen();
        assert!(!fx.session.full_screen);
        assert!(!fx.host.is_fullscreen_active());
    }

    #[test]
    fn rejected_fullscreen_keeps_flag() {
        let mut fx = Fixture::new();
        fx.host.set_fullscreen_allowed(false);
        fx.controller().toggle_full_screen();
        assert!(!fx.session.full_screen);
    }

    #[test]
    fn unsupported_floating_window_keeps_flag() {
        let mut fx = Fixture::new();
        fx.media.set_floating_window_supported(false);
        fx.controller().toggle_floating_window();
        assert!(!fx.session.floating_window);
    }

    #[test]
    fn floating_window_round_trip() {
        let mut fx = Fixture::new();
        fx.controller().toggle_floating_window();
        assert!(fx.session.floating_window);
        fx.controller().toggle_floating_window();
        assert!(!fx.session.floating_window);
        assert_eq!(
            fx.host.drain_events(),
            vec![HostEvent::FloatingWindowChanged(false)]
        );
    }

    #[test]
    fn modes_combine() {
        let mut fx = Fixture::new();
        fx.controller().toggle_theater();
        fx.controller().toggle_full_screen();
        fx.controller().toggle_floating_window();
        assert!(fx.session.theater_mode && fx.session.full_screen && fx.session.floating_window);
    }

    #[test]
    fn reconcile_applies_host_callbacks() {
        let mut session = MediaSession::default();
        session.full_screen = true;
        session.floating_window = true;
        reconcile(&mut session, HostEvent::FullscreenChanged(false));
        reconcile(&mut session, HostEvent::FloatingWindowChanged(false));
        assert!(!session.full_screen && !session.floating_window);
    }
}
