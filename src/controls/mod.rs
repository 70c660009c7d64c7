// SPDX-License-Identifier: MPL-2.0
//! Video control overlay.
//!
//! Each controller borrows the session and the ports it needs for the
//! duration of one action; [`ControlSurface`] owns everything and routes
//! [`Message`]s to them.
//!
//! # Components
//!
//! - [`playback`]: play/pause, mute, skip and speed
//! - [`volume`]: slider input and the volume-level indicator
//! - [`timeline`]: hover preview and drag-to-seek
//! - [`view_mode`]: theater, fullscreen and floating window
//! - [`keyboard`]: window-wide shortcuts
//! - [`subscription`]: global listener lifecycle and pointer tracking
//! - [`view_model`]: presentation snapshot

pub mod keyboard;
pub mod playback;
pub mod subscription;
pub mod surface;
pub mod time_format;
pub mod timeline;
pub mod view_mode;
pub mod view_model;
pub mod volume;

pub use keyboard::{Command, KeyboardDispatcher};
pub use playback::PlaybackController;
pub use subscription::{PointerInput, PointerTracker, Subscriptions};
pub use surface::{ControlSurface, Message};
pub use time_format::format_time;
pub use timeline::{PointerButtons, PointerEvent, ScrubPhase, ScrubState, TimelineScrubber};
pub use view_mode::ViewModeController;
pub use view_model::ViewModel;
pub use volume::VolumeController;
