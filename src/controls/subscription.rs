// SPDX-License-Identifier: MPL-2.0
//! Window-scoped listener lifecycle and raw pointer tracking.

use iced_core::{mouse, Point};
use tracing::debug;

use super::timeline::{PointerButtons, PointerEvent};
use crate::application::port::{GlobalListener, ListenerRegistry};

// =============================================================================
// Subscriptions
// =============================================================================

/// Listeners the control surface holds while mounted.
///
/// Registration happens once at mount; [`Subscriptions::teardown`] removes
/// exactly what was added and may be called any number of times.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<GlobalListener>,
}

impl Subscriptions {
    pub fn register<R: ListenerRegistry + ?Sized>(&mut self, registry: &mut R) {
        for listener in GlobalListener::ALL {
            if !self.active.contains(&listener) {
                registry.add_listener(listener);
                self.active.push(listener);
            }
        }
        debug!(listeners = ?self.active, "global listeners registered");
    }

    pub fn teardown<R: ListenerRegistry + ?Sized>(&mut self, registry: &mut R) {
        if self.active.is_empty() {
            return;
        }
        for listener in self.active.drain(..) {
            registry.remove_listener(listener);
        }
        debug!("global listeners removed");
    }

    #[must_use]
    pub fn is_registered(&self, listener: GlobalListener) -> bool {
        self.active.contains(&listener)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

// =============================================================================
// PointerTracker
// =============================================================================

/// Pointer input resolved from raw mouse events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
}

/// Accumulates cursor position and held buttons across mouse events, since
/// iced reports them separately.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Point>,
    buttons: PointerButtons,
}

impl PointerTracker {
    /// Folds `event` into the tracked state. Button events before the first
    /// cursor move carry no position and are dropped. The last position
    /// survives the cursor leaving the window, so a release out there still
    /// ends a scrub.
    pub fn track(&mut self, event: &mouse::Event) -> Option<PointerInput> {
        match *event {
            mouse::Event::CursorMoved { position } => {
                self.position = Some(position);
                Some(PointerInput::Move(PointerEvent::new(position, self.buttons)))
            }
            mouse::Event::ButtonPressed(button) => {
                self.buttons = self.buttons.with(button.into());
                self.position
                    .map(|position| PointerInput::Down(PointerEvent::new(position, self.buttons)))
            }
            mouse::Event::ButtonReleased(button) => {
                self.buttons = self.buttons.without(button.into());
                self.position
                    .map(|position| PointerInput::Up(PointerEvent::new(position, self.buttons)))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}
