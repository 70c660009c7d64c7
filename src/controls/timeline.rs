// SPDX-License-Identifier: MPL-2.0
//! Timeline scrubbing.
//!
//! The scrubber is a two-state machine (`Idle`, `Scrubbing`). While idle,
//! hovering the timeline only moves the preview marker. Pressing the primary
//! button pauses playback and hands the progress marker to the pointer until
//! release, wherever the pointer travels in the window. Releasing seeks to
//! the final position and resumes playback.

use iced_core::{mouse, Point, Rectangle};
use tracing::{debug, trace};

use crate::application::port::MediaElement;
use crate::domain::video::{MediaSession, TimelineFraction, TimelineGeometry};

// =============================================================================
// Pointer input
// =============================================================================

/// Bitmask of held pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(1 << 1);
    pub const AUXILIARY: Self = Self(1 << 2);
    /// Back, forward and vendor buttons.
    pub const OTHER: Self = Self(1 << 3);

    #[must_use]
    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub fn is_primary_held(self) -> bool {
        self.0 & Self::PRIMARY.0 != 0
    }
}

impl From<mouse::Button> for PointerButtons {
    fn from(button: mouse::Button) -> Self {
        match button {
            mouse::Button::Left => Self::PRIMARY,
            mouse::Button::Right => Self::SECONDARY,
            mouse::Button::Middle => Self::AUXILIARY,
            mouse::Button::Back | mouse::Button::Forward | mouse::Button::Other(_) => Self::OTHER,
        }
    }
}

/// Pointer position with the buttons held at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub buttons: PointerButtons,
}

impl PointerEvent {
    #[must_use]
    pub fn new(position: Point, buttons: PointerButtons) -> Self {
        Self { position, buttons }
    }

    /// Pointer at `x` with only the primary button held.
    #[must_use]
    pub fn primary_at(x: f32) -> Self {
        Self::new(Point::new(x, 0.0), PointerButtons::PRIMARY)
    }

    /// Pointer at `x` with no button held.
    #[must_use]
    pub fn released_at(x: f32) -> Self {
        Self::new(Point::new(x, 0.0), PointerButtons::NONE)
    }
}

impl From<Rectangle> for TimelineGeometry {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.width)
    }
}

// =============================================================================
// Scrubber
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubPhase {
    #[default]
    Idle,
    Scrubbing,
}

/// Observable scrubber state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrubState {
    pub phase: ScrubPhase,
    /// Hover or drag preview marker.
    pub preview: TimelineFraction,
}

#[derive(Debug, Clone)]
pub struct TimelineScrubber {
    state: ScrubState,
    resume_after_scrub: bool,
}

impl Default for TimelineScrubber {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_RESUME_AFTER_SCRUB)
    }
}

impl TimelineScrubber {
    /// Creates an idle scrubber. With `resume_after_scrub`, every release
    /// starts playback, even if it was paused before the drag.
    #[must_use]
    pub fn new(resume_after_scrub: bool) -> Self {
        Self {
            state: ScrubState::default(),
            resume_after_scrub,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScrubState {
        self.state
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.state.phase == ScrubPhase::Scrubbing
    }

    #[must_use]
    pub fn preview(&self) -> TimelineFraction {
        self.state.preview
    }

    #[must_use]
    pub fn compute_percent(pointer_x: f32, geometry: TimelineGeometry) -> TimelineFraction {
        geometry.fraction_at(pointer_x)
    }

    /// Handles a press on the timeline.
    pub fn pointer_down<M: MediaElement>(
        &mut self,
        pointer: PointerEvent,
        geometry: TimelineGeometry,
        session: &mut MediaSession,
        media: &mut M,
    ) {
        let percent = Self::compute_percent(pointer.position.x, geometry);
        self.state.preview = percent;
        if !pointer.buttons.is_primary_held() {
            return;
        }

        self.state.phase = ScrubPhase::Scrubbing;
        media.pause();
        session.progress = percent;
        debug!(percent = percent.value(), "scrub started");
    }

    /// Handles a move anywhere in the window.
    ///
    /// A scrubbing move without the primary button held means the release
    /// happened where we could not see it, so it ends the scrub.
    pub fn pointer_move<M: MediaElement>(
        &mut self,
        pointer: PointerEvent,
        geometry: TimelineGeometry,
        over_timeline: bool,
        session: &mut MediaSession,
        media: &mut M,
    ) {
        let percent = Self::compute_percent(pointer.position.x, geometry);
        match self.state.phase {
            ScrubPhase::Scrubbing if !pointer.buttons.is_primary_held() => {
                self.release(percent, session, media);
            }
            ScrubPhase::Scrubbing => {
                self.state.preview = percent;
                session.progress = percent;
                trace!(percent = percent.value(), "scrub moved");
            }
            ScrubPhase::Idle if over_timeline => {
                self.state.preview = percent;
            }
            ScrubPhase::Idle => {}
        }
    }

    /// Handles a release anywhere in the window. Returns true if it ended a
    /// scrub.
    ///
    /// Only the primary button ends a scrub; releasing another button while
    /// the primary is still held leaves the drag running.
    pub fn pointer_up<M: MediaElement>(
        &mut self,
        pointer: PointerEvent,
        geometry: TimelineGeometry,
        session: &mut MediaSession,
        media: &mut M,
    ) -> bool {
        if !self.is_scrubbing() || pointer.buttons.is_primary_held() {
            return false;
        }
        let percent = Self::compute_percent(pointer.position.x, geometry);
        self.release(percent, session, media);
        true
    }

    fn release<M: MediaElement>(
        &mut self,
        percent: TimelineFraction,
        session: &mut MediaSession,
        media: &mut M,
    ) {
        self.state.phase = ScrubPhase::Idle;
        self.state.preview = percent;
        session.progress = percent;

        match percent.to_secs(media.duration()) {
            Some(target) => media.set_current_time(target),
            None => debug!("duration unknown, scrub seek skipped"),
        }
        if self.resume_after_scrub {
            if let Err(err) = media.play() {
                debug!(%err, "resume after scrub rejected");
            }
        }
        debug!(percent = percent.value(), "scrub released");
    }
}
