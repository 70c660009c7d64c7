// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`video`]: Playback types ([`MediaSession`](video::MediaSession),
//!   [`PlaybackRate`](video::PlaybackRate), [`VolumeLevel`](video::VolumeLevel),
//!   [`TimelineFraction`](video::TimelineFraction))

pub mod video;
