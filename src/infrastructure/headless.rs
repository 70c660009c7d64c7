// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters implementing the host ports.
//!
//! [`HeadlessMedia`] behaves like a browser media element without decoding
//! anything: setters queue the same events a real element would fire, and
//! [`HeadlessMedia::advance`] moves the clock while playing.
//! [`HeadlessWindow`] stands in for the page, with a fixed timeline layout
//! and switchable fullscreen policy.
//!
//! Events are queued, not delivered. [`ControlSurface::settle`] drains both
//! queues into the surface until nothing is left, which mirrors the host
//! event loop running after each user action.

use std::collections::VecDeque;

use iced_core::Rectangle;

use crate::application::port::{
    FocusedControl, GlobalListener, HostEvent, HostWindow, ListenerRegistry, MediaElement,
    MediaEvent,
};
use crate::controls::{ControlSurface, Message};
use crate::domain::video::timeline::known_duration;
use crate::error::HostError;

// =============================================================================
// HeadlessMedia
// =============================================================================

/// Media element with a simulated clock.
#[derive(Debug, Clone)]
pub struct HeadlessMedia {
    paused: bool,
    muted: bool,
    volume: f32,
    current_time: f64,
    duration: Option<f64>,
    playback_rate: f64,
    play_blocked: bool,
    floating_window_supported: bool,
    last_seek: Option<f64>,
    events: VecDeque<MediaEvent>,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self {
            paused: true,
            muted: false,
            volume: 1.0,
            current_time: 0.0,
            duration: None,
            playback_rate: 1.0,
            play_blocked: false,
            floating_window_supported: true,
            last_seek: None,
            events: VecDeque::new(),
        }
    }
}

impl HeadlessMedia {
    /// Creates an element with nothing loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element and immediately loads media of `duration` seconds.
    #[must_use]
    pub fn with_duration(duration: f64) -> Self {
        let mut media = Self::new();
        media.load(duration);
        media
    }

    /// Finishes loading: records the duration and queues `LoadedData`.
    pub fn load(&mut self, duration: f64) {
        self.duration = known_duration(Some(duration));
        self.events.push_back(MediaEvent::LoadedData { duration });
    }

    /// Advances the clock by `secs` of wall time, scaled by the playback rate.
    ///
    /// Reaching the end pauses the element, like a browser does.
    pub fn advance(&mut self, secs: f64) {
        if self.paused || !(secs.is_finite() && secs > 0.0) {
            return;
        }
        let mut next = self.current_time + secs * self.playback_rate;
        let ended = self.duration.is_some_and(|duration| next >= duration);
        if let Some(duration) = self.duration {
            next = next.min(duration);
        }
        self.current_time = next;
        self.events.push_back(MediaEvent::TimeUpdate { current_time: next });
        if ended {
            self.paused = true;
            self.events.push_back(MediaEvent::Pause);
        }
    }

    /// Makes `play()` fail as if blocked by an autoplay policy.
    pub fn set_play_blocked(&mut self, blocked: bool) {
        self.play_blocked = blocked;
    }

    pub fn set_floating_window_supported(&mut self, supported: bool) {
        self.floating_window_supported = supported;
    }

    /// Position of the most recent seek, if any.
    #[must_use]
    pub fn last_seek(&self) -> Option<f64> {
        self.last_seek
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }
}

impl MediaElement for HeadlessMedia {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn play(&mut self) -> Result<(), HostError> {
        if self.play_blocked {
            return Err(HostError::Rejected(
                "playback requires a user gesture".to_string(),
            ));
        }
        if self.paused {
            self.paused = false;
            self.events.push_back(MediaEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.events.push_back(MediaEvent::Pause);
        }
    }

    fn set_current_time(&mut self, secs: f64) {
        if secs.is_nan() {
            return;
        }
        let upper = self.duration.unwrap_or(f64::INFINITY);
        let target = secs.clamp(0.0, upper);
        self.current_time = target;
        self.last_seek = Some(target);
        self.events.push_back(MediaEvent::TimeUpdate {
            current_time: target,
        });
    }

    fn set_volume(&mut self, volume: f32) {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        if (volume - self.volume).abs() > f32::EPSILON {
            self.volume = volume;
            self.events.push_back(MediaEvent::VolumeChange);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if muted != self.muted {
            self.muted = muted;
            self.events.push_back(MediaEvent::VolumeChange);
        }
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
    }

    fn request_floating_window(&mut self) -> Result<(), HostError> {
        if self.floating_window_supported {
            Ok(())
        } else {
            Err(HostError::Unsupported)
        }
    }
}

// =============================================================================
// HeadlessWindow
// =============================================================================

/// Default timeline layout: 600 px wide, starting 100 px from the left.
pub const DEFAULT_TIMELINE_BOUNDS: Rectangle = Rectangle {
    x: 100.0,
    y: 500.0,
    width: 600.0,
    height: 8.0,
};

/// Host window with a fixed layout and observable listener set.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    fullscreen: bool,
    fullscreen_allowed: bool,
    focus: FocusedControl,
    timeline: Rectangle,
    listeners: Vec<GlobalListener>,
    events: VecDeque<HostEvent>,
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new(DEFAULT_TIMELINE_BOUNDS)
    }
}

impl HeadlessWindow {
    #[must_use]
    pub fn new(timeline: Rectangle) -> Self {
        Self {
            fullscreen: false,
            fullscreen_allowed: true,
            focus: FocusedControl::None,
            timeline,
            listeners: Vec::new(),
            events: VecDeque::new(),
        }
    }

    /// Makes fullscreen requests fail, as a permissions policy would.
    pub fn set_fullscreen_allowed(&mut self, allowed: bool) {
        self.fullscreen_allowed = allowed;
    }

    pub fn set_focus(&mut self, focus: FocusedControl) {
        self.focus = focus;
    }

    /// Moves or resizes the timeline, e.g. after a layout change.
    pub fn set_timeline_bounds(&mut self, bounds: Rectangle) {
        self.timeline = bounds;
    }

    /// Listeners currently registered.
    #[must_use]
    pub fn listeners(&self) -> &[GlobalListener] {
        &self.listeners
    }

    /// Leaves fullscreen the way the OS escape key does, behind the
    /// controls' back.
    pub fn user_exit_fullscreen(&mut self) {
        if self.fullscreen {
            self.fullscreen = false;
            self.events.push_back(HostEvent::FullscreenChanged(false));
        }
    }

    /// Closes the floating window from its own close button.
    pub fn user_close_floating_window(&mut self) {
        self.events.push_back(HostEvent::FloatingWindowChanged(false));
    }

    /// Takes every queued host event, oldest first.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        self.events.drain(..).collect()
    }
}

impl ListenerRegistry for HeadlessWindow {
    fn add_listener(&mut self, listener: GlobalListener) {
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
    }

    fn remove_listener(&mut self, listener: GlobalListener) {
        self.listeners.retain(|registered| *registered != listener);
    }
}

impl HostWindow for HeadlessWindow {
    fn is_fullscreen_active(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), HostError> {
        if !self.fullscreen_allowed {
            return Err(HostError::Rejected(
                "fullscreen is disallowed by policy".to_string(),
            ));
        }
        if !self.fullscreen {
            self.fullscreen = true;
            self.events.push_back(HostEvent::FullscreenChanged(true));
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostError> {
        if !self.fullscreen {
            return Err(HostError::Rejected("not in fullscreen".to_string()));
        }
        self.fullscreen = false;
        self.events.push_back(HostEvent::FullscreenChanged(false));
        Ok(())
    }

    fn exit_floating_window(&mut self) -> Result<(), HostError> {
        self.events.push_back(HostEvent::FloatingWindowChanged(false));
        Ok(())
    }

    fn focused_control(&self) -> FocusedControl {
        self.focus
    }

    fn timeline_bounds(&self) -> Rectangle {
        self.timeline
    }
}

// =============================================================================
// Event pump
// =============================================================================

impl ControlSurface<HeadlessMedia, HeadlessWindow> {
    /// Delivers queued media and host events until both queues are empty.
    pub fn settle(&mut self) {
        loop {
            let media_events = self.media_mut().drain_events();
            let host_events = self.host_mut().drain_events();
            if media_events.is_empty() && host_events.is_empty() {
                break;
            }
            for event in media_events {
                self.handle(Message::Media(event));
            }
            for event in host_events {
                self.handle(Message::Host(event));
            }
        }
    }
}
