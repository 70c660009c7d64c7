// SPDX-License-Identifier: MPL-2.0
//! Host window port definition.
//!
//! The host window owns everything the controls cannot see on their own:
//! fullscreen and floating-window state, keyboard focus, the rendered
//! timeline layout, and the window-scoped event listeners.

use crate::error::HostError;
use iced_core::Rectangle;

/// Window-scoped listener the control surface keeps alive while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalListener {
    /// Key-down anywhere in the window (shortcuts).
    KeyDown,
    /// Pointer movement anywhere in the window (scrubbing past the edges).
    PointerMove,
    /// Pointer release anywhere in the window (ending a scrub).
    PointerUp,
}

impl GlobalListener {
    /// Every listener registered at mount.
    pub const ALL: [Self; 3] = [Self::KeyDown, Self::PointerMove, Self::PointerUp];
}

/// Registration of window-scoped listeners.
pub trait ListenerRegistry {
    fn add_listener(&mut self, listener: GlobalListener);
    fn remove_listener(&mut self, listener: GlobalListener);
}

/// Kind of control currently holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedControl {
    #[default]
    None,
    Button,
    /// Range input such as the volume slider.
    Slider,
    TextInput,
}

impl FocusedControl {
    /// Returns true if the control consumes typed keys itself, in which case
    /// shortcuts must stay silent.
    #[must_use]
    pub fn captures_keys(self) -> bool {
        matches!(self, Self::TextInput | Self::Slider)
    }
}

/// Host-side change the controls did not initiate (or only predicted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Fullscreen was entered or left, e.g. via the OS escape key.
    FullscreenChanged(bool),
    /// The floating window was opened or closed by the host.
    FloatingWindowChanged(bool),
}

/// Port for the window hosting the player.
pub trait HostWindow: ListenerRegistry {
    /// Returns true if any element currently holds host fullscreen.
    fn is_fullscreen_active(&self) -> bool;

    /// Requests fullscreen for the player container.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host refuses the request.
    fn request_fullscreen(&mut self) -> Result<(), HostError>;

    /// Leaves fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if nothing can be exited.
    fn exit_fullscreen(&mut self) -> Result<(), HostError>;

    /// Closes the floating window, returning playback to the page.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if no floating window is open.
    fn exit_floating_window(&mut self) -> Result<(), HostError>;

    fn focused_control(&self) -> FocusedControl;

    /// Current bounds of the rendered timeline, in window coordinates.
    fn timeline_bounds(&self) -> Rectangle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_input_controls_capture_keys() {
        assert!(FocusedControl::TextInput.captures_keys());
        assert!(FocusedControl::Slider.captures_keys());
        assert!(!FocusedControl::Button.captures_keys());
        assert!(!FocusedControl::None.captures_keys());
    }

    #[test]
    fn all_listeners_are_distinct() {
        let [a, b, c] = GlobalListener::ALL;
        assert!(a != b && b != c && a != c);
    }
}
