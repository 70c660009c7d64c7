// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`headless`]: In-memory media element and host window (implement
//!   [`MediaElement`] and [`HostWindow`]), used by the driver binary and tests
//!
//! [`MediaElement`]: crate::application::port::MediaElement
//! [`HostWindow`]: crate::application::port::HostWindow

pub mod headless;

pub use headless::{HeadlessMedia, HeadlessWindow};
