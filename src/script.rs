// SPDX-License-Identifier: MPL-2.0
//! Line-oriented scripts for driving a headless control surface.
//!
//! Each non-empty line holds one command; `#` starts a comment.
//!
//! ```text
//! # drag from 25% to 75% of the default timeline
//! down 250
//! move 550
//! up 550
//! key k
//! tick 2.5
//! ```

use iced_core::{keyboard, mouse, Event, Point};

use crate::application::port::{FocusedControl, HostWindow};
use crate::controls::{ControlSurface, Message, PointerEvent};
use crate::error::{Error, Result};
use crate::infrastructure::{HeadlessMedia, HeadlessWindow};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Key(keyboard::Key),
    /// Press the primary button at `x` on the timeline row.
    Down(f32),
    /// Move to `x` on the timeline row, keeping held buttons.
    Move(f32),
    /// Release the primary button at `x`.
    Up(f32),
    /// Move to `x` reporting no held button, as after a missed release.
    ReleaseMove(f32),
    Volume(f32),
    Mute,
    Play,
    Speed,
    Theater,
    Fullscreen,
    Floating,
    /// Advance the media clock by this many seconds.
    Tick(f64),
    /// Leave fullscreen from the host side.
    Esc,
    Focus(FocusedControl),
}

/// Parses a whole script, reporting the first malformed line.
pub fn parse(source: &str) -> Result<Vec<ScriptCommand>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line).transpose())
        .collect()
}

/// Parses one line; blank lines and comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ScriptCommand>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut parts = content.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    if let Some(extra) = parts.next() {
        return Err(script_error(line_no, format!("unexpected argument '{extra}'")));
    }

    let command = match name {
        "key" => ScriptCommand::Key(parse_key(line_no, require(line_no, name, arg)?)?),
        "down" => ScriptCommand::Down(number(line_no, name, arg)?),
        "move" => ScriptCommand::Move(number(line_no, name, arg)?),
        "up" => ScriptCommand::Up(number(line_no, name, arg)?),
        "release-move" => ScriptCommand::ReleaseMove(number(line_no, name, arg)?),
        "volume" => ScriptCommand::Volume(number(line_no, name, arg)?),
        "tick" => ScriptCommand::Tick(number(line_no, name, arg)?),
        "focus" => ScriptCommand::Focus(parse_focus(line_no, require(line_no, name, arg)?)?),
        "mute" | "play" | "speed" | "theater" | "fullscreen" | "floating" | "esc" => {
            if arg.is_some() {
                return Err(script_error(line_no, format!("'{name}' takes no argument")));
            }
            match name {
                "mute" => ScriptCommand::Mute,
                "play" => ScriptCommand::Play,
                "speed" => ScriptCommand::Speed,
                "theater" => ScriptCommand::Theater,
                "fullscreen" => ScriptCommand::Fullscreen,
                "floating" => ScriptCommand::Floating,
                _ => ScriptCommand::Esc,
            }
        }
        other => return Err(script_error(line_no, format!("unknown command '{other}'"))),
    };
    Ok(Some(command))
}

fn script_error(line: usize, message: String) -> Error {
    Error::Script { line, message }
}

fn require<'a>(line_no: usize, name: &str, arg: Option<&'a str>) -> Result<&'a str> {
    arg.ok_or_else(|| script_error(line_no, format!("'{name}' needs an argument")))
}

fn number<T: std::str::FromStr>(line_no: usize, name: &str, arg: Option<&str>) -> Result<T> {
    let raw = require(line_no, name, arg)?;
    raw.parse()
        .map_err(|_| script_error(line_no, format!("'{raw}' is not a number")))
}

fn parse_key(line_no: usize, name: &str) -> Result<keyboard::Key> {
    use keyboard::key::Named;

    let key = match name.to_lowercase().as_str() {
        "space" => keyboard::Key::Named(Named::Space),
        "left" | "arrowleft" => keyboard::Key::Named(Named::ArrowLeft),
        "right" | "arrowright" => keyboard::Key::Named(Named::ArrowRight),
        "esc" | "escape" => keyboard::Key::Named(Named::Escape),
        _ if name.chars().count() == 1 => keyboard::Key::Character(name.into()),
        _ => return Err(script_error(line_no, format!("unknown key '{name}'"))),
    };
    Ok(key)
}

fn parse_focus(line_no: usize, name: &str) -> Result<FocusedControl> {
    match name {
        "none" => Ok(FocusedControl::None),
        "button" => Ok(FocusedControl::Button),
        "slider" => Ok(FocusedControl::Slider),
        "text" => Ok(FocusedControl::TextInput),
        other => Err(script_error(line_no, format!("unknown focus target '{other}'"))),
    }
}

// =============================================================================
// Execution
// =============================================================================

impl ControlSurface<HeadlessMedia, HeadlessWindow> {
    /// Runs one command and delivers every event it caused.
    ///
    /// Pointer commands travel as raw mouse events at the vertical centre of
    /// the timeline, so they exercise the same path a toolkit would.
    pub fn run(&mut self, command: &ScriptCommand) {
        match command {
            ScriptCommand::Key(key) => self.handle(Message::KeyDown(key.clone())),
            ScriptCommand::Down(x) => {
                self.cursor_to(*x);
                self.mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
            }
            ScriptCommand::Move(x) => self.cursor_to(*x),
            ScriptCommand::Up(x) => {
                self.cursor_to(*x);
                self.mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
            }
            ScriptCommand::ReleaseMove(x) => {
                let bounds = self.host().timeline_bounds();
                let pointer = PointerEvent::released_at(*x);
                self.handle(Message::PointerMove {
                    pointer,
                    over_timeline: bounds.x <= *x && *x < bounds.x + bounds.width,
                });
            }
            ScriptCommand::Volume(value) => self.handle(Message::VolumeInput(*value)),
            ScriptCommand::Mute => self.handle(Message::ToggleMute),
            ScriptCommand::Play => self.handle(Message::TogglePlay),
            ScriptCommand::Speed => self.handle(Message::ChangePlaybackSpeed),
            ScriptCommand::Theater => self.handle(Message::ToggleTheater),
            ScriptCommand::Fullscreen => self.handle(Message::ToggleFullScreen),
            ScriptCommand::Floating => self.handle(Message::ToggleFloatingWindow),
            ScriptCommand::Tick(secs) => self.media_mut().advance(*secs),
            ScriptCommand::Esc => self.host_mut().user_exit_fullscreen(),
            ScriptCommand::Focus(focus) => self.host_mut().set_focus(*focus),
        }
        self.settle();
    }

    fn cursor_to(&mut self, x: f32) {
        let bounds = self.host().timeline_bounds();
        let position = Point::new(x, bounds.center_y());
        self.mouse(mouse::Event::CursorMoved { position });
    }

    fn mouse(&mut self, event: mouse::Event) {
        self.handle_event(&Event::Mouse(event));
    }
}
