// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! The controls only ever talk to the media element and the window through
//! these traits.
//!
//! # Available Ports
//!
//! - [`host`]: Fullscreen, floating window, focus, layout and listeners
//! - [`media`]: Media element transport and playback events
//!
//! # Design Notes
//!
//! - Everything runs on the UI thread: traits are neither `Send` nor `Sync`
//! - Host requests are fire-and-forget; a synchronous refusal is a
//!   [`HostError`](crate::error::HostError), later outcomes arrive as events

pub mod host;
pub mod media;

// Re-export main types for convenience
pub use host::{FocusedControl, GlobalListener, HostEvent, HostWindow, ListenerRegistry};
pub use media::{MediaElement, MediaEvent};
