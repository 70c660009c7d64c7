// SPDX-License-Identifier: MPL-2.0
//! Window-wide keyboard shortcuts.
//!
//! | Key | Command |
//! |-----|---------|
//! | `Space` / `k` | play/pause |
//! | `f` | fullscreen |
//! | `t` | theater mode |
//! | `i` | floating window |
//! | `m` | mute |
//! | `ArrowLeft` / `ArrowRight` | skip by the seek step |
//!
//! Letters match case-insensitively. Modifiers are not inspected.

use iced_core::keyboard;
use tracing::trace;

use crate::application::port::FocusedControl;
use crate::domain::video::KeyboardSeekStep;

/// Action bound to a shortcut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePlay,
    ToggleFullScreen,
    ToggleTheater,
    ToggleFloatingWindow,
    ToggleMute,
    /// Relative seek in seconds.
    Skip(f64),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardDispatcher {
    seek_step: KeyboardSeekStep,
}

impl KeyboardDispatcher {
    #[must_use]
    pub fn new(seek_step: KeyboardSeekStep) -> Self {
        Self { seek_step }
    }

    /// Resolves a key press, unless the focused control consumes keys itself.
    #[must_use]
    pub fn dispatch(&self, key: &keyboard::Key, focus: FocusedControl) -> Option<Command> {
        if focus.captures_keys() {
            trace!(?key, ?focus, "shortcut suppressed by focused input");
            return None;
        }
        self.command_for(key)
    }

    #[must_use]
    pub fn command_for(&self, key: &keyboard::Key) -> Option<Command> {
        let step = self.seek_step.value();
        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Space) => Some(Command::TogglePlay),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Command::Skip(-step)),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Command::Skip(step)),
            keyboard::Key::Character(c) => match c.to_lowercase().as_str() {
                " " | "k" => Some(Command::TogglePlay),
                "f" => Some(Command::ToggleFullScreen),
                "t" => Some(Command::ToggleTheater),
                "i" => Some(Command::ToggleFloatingWindow),
                "m" => Some(Command::ToggleMute),
                _ => None,
            },
            _ => None,
        }
    }
}
