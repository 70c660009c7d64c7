// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects and the session aggregate,
//! independent of any presentation or host concerns.

pub mod newtypes;
pub mod session;
pub mod timeline;

// Re-export commonly used types
pub use newtypes::{KeyboardSeekStep, PlaybackRate, Volume, VolumeLevel};
pub use session::MediaSession;
pub use timeline::{TimelineFraction, TimelineGeometry};
