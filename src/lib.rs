// SPDX-License-Identifier: MPL-2.0
//! `iced_transport` is the headless core of a video control overlay.
//!
//! It drives an underlying media element through play/pause, volume,
//! scrubbing, playback speed and view-mode toggles, and exposes a
//! [`ViewModel`](controls::ViewModel) for whatever toolkit renders the
//! controls. Input arrives as `iced_core` events.
//!
//! # Layers
//!
//! - [`domain`]: pure value objects and the playback session
//! - [`application`]: port traits for the media element and host window
//! - [`controls`]: controllers and the [`ControlSurface`](controls::ControlSurface)
//! - [`infrastructure`]: in-memory adapters for the ports
//! - [`script`]: line-oriented scripts replayed by the `iced_transport` binary

#![doc(html_root_url = "https://docs.rs/iced_transport/0.1.0")]

pub mod application;
pub mod config;
pub mod controls;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod script;

#[cfg(test)]
pub(crate) mod test_utils;
