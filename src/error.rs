// SPDX-License-Identifier: MPL-2.0
//! Error types for the control overlay.
//!
//! Host capability failures ([`HostError`]) are swallowed by the controllers
//! and only logged. The crate-level [`Error`] covers configuration loading
//! and the headless driver.

use thiserror::Error;

/// Failure reported by a host capability (fullscreen, floating window, play).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host refused the request (user-gesture policy, permissions, ...).
    #[error("request rejected by host: {0}")]
    Rejected(String),

    /// The host has no support for the requested capability.
    #[error("capability not supported by host")]
    Unsupported,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Malformed driver script line.
    #[error("Script Error (line {line}): {message}")]
    Script { line: usize, message: String },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
