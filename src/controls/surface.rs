// SPDX-License-Identifier: MPL-2.0
//! The mounted control overlay.
//!
//! [`ControlSurface`] owns the media element, the host window and all
//! control state. Every input, whether a button press, a raw toolkit event
//! or a notification from the element, arrives as a [`Message`] and is
//! handled synchronously on the caller's thread.

use iced_core::{keyboard, Event};
use tracing::{debug, trace};

use super::keyboard::{Command, KeyboardDispatcher};
use super::playback::{self, PlaybackController};
use super::subscription::{PointerInput, PointerTracker, Subscriptions};
use super::timeline::{PointerEvent, ScrubState, TimelineScrubber};
use super::view_mode::{self, ViewModeController};
use super::view_model::ViewModel;
use super::volume::VolumeController;
use crate::application::port::{GlobalListener, HostEvent, HostWindow, MediaElement, MediaEvent};
use crate::config::Config;
use crate::domain::video::{KeyboardSeekStep, MediaSession, TimelineGeometry};

/// Input to the control surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Transport buttons
    TogglePlay,
    ToggleMute,
    Skip(f64),
    ChangePlaybackSpeed,
    VolumeInput(f32),

    // View modes
    ToggleTheater,
    ToggleFullScreen,
    ToggleFloatingWindow,

    // Timeline pointer
    /// Press on the timeline itself.
    TimelinePointerDown(PointerEvent),
    /// Move anywhere in the window.
    PointerMove {
        pointer: PointerEvent,
        over_timeline: bool,
    },
    /// Release anywhere in the window.
    PointerUp(PointerEvent),

    KeyDown(keyboard::Key),

    // Reconciliation
    Media(MediaEvent),
    Host(HostEvent),
}

/// Video controls bound to one media element.
///
/// Global listeners are registered at [`mount`](Self::mount) and removed by
/// [`unmount`](Self::unmount) or, failing that, on drop.
pub struct ControlSurface<M: MediaElement, H: HostWindow> {
    media: M,
    host: H,
    session: MediaSession,

    // ═══════════════════════════════════════════════════════════════════════
    // INPUT STATE
    // ═══════════════════════════════════════════════════════════════════════
    scrubber: TimelineScrubber,
    keyboard: KeyboardDispatcher,
    pointer: PointerTracker,
    subscriptions: Subscriptions,
}

impl<M: MediaElement, H: HostWindow> ControlSurface<M, H> {
    /// Attaches the controls to `media` inside `host`.
    pub fn mount(media: M, mut host: H, config: &Config) -> Self {
        let mut session = MediaSession::default();
        session.slider_volume = media.volume();
        if let Some(duration) = media.duration() {
            session.set_duration(duration);
        }

        let mut subscriptions = Subscriptions::default();
        subscriptions.register(&mut host);
        debug!(?config, "control surface mounted");

        Self {
            media,
            host,
            session,
            scrubber: TimelineScrubber::new(config.resume_after_scrub),
            keyboard: KeyboardDispatcher::new(KeyboardSeekStep::new(config.seek_step_secs)),
            pointer: PointerTracker::default(),
            subscriptions,
        }
    }

    /// Removes the global listeners. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.subscriptions.teardown(&mut self.host);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    #[must_use]
    pub fn session(&self) -> &MediaSession {
        &self.session
    }

    #[must_use]
    pub fn scrub_state(&self) -> ScrubState {
        self.scrubber.state()
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn view(&self) -> ViewModel {
        ViewModel::new(&self.session, self.scrubber.state())
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::TogglePlay => self.apply(Command::TogglePlay),
            Message::ToggleMute => self.apply(Command::ToggleMute),
            Message::Skip(delta_secs) => self.apply(Command::Skip(delta_secs)),
            Message::ChangePlaybackSpeed => {
                PlaybackController::new(&mut self.session, &mut self.media)
                    .change_playback_speed();
            }
            Message::VolumeInput(value) => {
                VolumeController::new(&mut self.session, &mut self.media).on_volume_input(value);
            }
            Message::ToggleTheater => self.apply(Command::ToggleTheater),
            Message::ToggleFullScreen => self.apply(Command::ToggleFullScreen),
            Message::ToggleFloatingWindow => self.apply(Command::ToggleFloatingWindow),
            Message::TimelinePointerDown(pointer) => {
                let geometry = self.timeline_geometry();
                self.scrubber
                    .pointer_down(pointer, geometry, &mut self.session, &mut self.media);
            }
            Message::PointerMove {
                pointer,
                over_timeline,
            } => {
                let geometry = self.timeline_geometry();
                self.scrubber.pointer_move(
                    pointer,
                    geometry,
                    over_timeline,
                    &mut self.session,
                    &mut self.media,
                );
            }
            Message::PointerUp(pointer) => {
                let geometry = self.timeline_geometry();
                self.scrubber
                    .pointer_up(pointer, geometry, &mut self.session, &mut self.media);
            }
            Message::KeyDown(key) => {
                if let Some(command) = self.keyboard.dispatch(&key, self.host.focused_control()) {
                    self.apply(command);
                }
            }
            Message::Media(event) => self.on_media_event(event),
            Message::Host(event) => view_mode::reconcile(&mut self.session, event),
        }
    }

    /// Translates a raw toolkit event into messages.
    ///
    /// Presses count only on the timeline. Key presses, moves and releases
    /// are window-wide and only flow while their listener is registered.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if self.subscriptions.is_registered(GlobalListener::KeyDown) {
                    self.handle(Message::KeyDown(key.clone()));
                }
            }
            Event::Mouse(mouse_event) => {
                let Some(input) = self.pointer.track(mouse_event) else {
                    return;
                };
                let bounds = self.host.timeline_bounds();
                match input {
                    PointerInput::Down(pointer) => {
                        if bounds.contains(pointer.position) {
                            self.handle(Message::TimelinePointerDown(pointer));
                        }
                    }
                    PointerInput::Move(pointer) => {
                        if self.subscriptions.is_registered(GlobalListener::PointerMove) {
                            let over_timeline = bounds.contains(pointer.position);
                            self.handle(Message::PointerMove {
                                pointer,
                                over_timeline,
                            });
                        }
                    }
                    PointerInput::Up(pointer) => {
                        if self.subscriptions.is_registered(GlobalListener::PointerUp) {
                            self.handle(Message::PointerUp(pointer));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePlay => {
                PlaybackController::new(&mut self.session, &mut self.media).toggle_play();
            }
            Command::ToggleMute => {
                PlaybackController::new(&mut self.session, &mut self.media).toggle_mute();
            }
            Command::Skip(delta_secs) => {
                PlaybackController::new(&mut self.session, &mut self.media).skip(delta_secs);
            }
            Command::ToggleTheater => self.view_modes().toggle_theater(),
            Command::ToggleFullScreen => self.view_modes().toggle_full_screen(),
            Command::ToggleFloatingWindow => self.view_modes().toggle_floating_window(),
        }
    }

    fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => playback::reconcile_playing(&mut self.session, true),
            MediaEvent::Pause => playback::reconcile_playing(&mut self.session, false),
            MediaEvent::VolumeChange => {
                VolumeController::new(&mut self.session, &mut self.media).on_volume_change();
            }
            MediaEvent::LoadedData { duration } => {
                self.session.set_duration(duration);
                debug!(duration = ?self.session.duration(), "media loaded");
            }
            MediaEvent::TimeUpdate { current_time } => {
                self.session
                    .record_time(current_time, self.scrubber.is_scrubbing());
                trace!(current_time, "time update");
            }
        }
    }

    fn view_modes(&mut self) -> ViewModeController<'_, M, H> {
        ViewModeController::new(&mut self.session, &mut self.media, &mut self.host)
    }

    fn timeline_geometry(&self) -> TimelineGeometry {
        self.host.timeline_bounds().into()
    }
}

impl<M: MediaElement, H: HostWindow> Drop for ControlSurface<M, H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
