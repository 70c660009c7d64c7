// SPDX-License-Identifier: MPL-2.0
//! Clock-style rendering of playback positions.

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Formats `seconds` as `m:ss`, or `h:mm:ss` from one hour up.
///
/// Fractions are floored. Negative and NaN inputs render as `0:00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Floored, non-negative, saturating
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_nan() || seconds <= 0.0 {
        0
    } else {
        seconds.floor() as u64
    };

    let hours = total / SECS_PER_HOUR;
    let minutes = (total / SECS_PER_MINUTE) % 60;
    let secs = total % SECS_PER_MINUTE;

    if hours == 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}
