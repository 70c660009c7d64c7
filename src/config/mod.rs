// SPDX-License-Identifier: MPL-2.0
//! This module handles the control overlay configuration, read from a
//! `controls.toml` file.
//!
//! Configuration is read-only: the overlay never writes preferences back.
//!
//! # Examples
//!
//! ```
//! use iced_transport::config::{self, Config};
//!
//! let config = config::from_toml_str("seek_step_secs = 5.0").unwrap();
//! assert_eq!(config.seek_step_secs, 5.0);
//! assert!(config.resume_after_scrub);
//!
//! // Missing keys fall back to defaults
//! assert_eq!(config::from_toml_str("").unwrap(), Config::default());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "controls.toml";
const APP_NAME: &str = "IcedTransport";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arrow-key seek step in seconds.
    pub seek_step_secs: f64,
    /// Resume playback when a scrub is released.
    pub resume_after_scrub: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seek_step_secs: DEFAULT_SEEK_STEP_SECS,
            resume_after_scrub: DEFAULT_RESUME_AFTER_SCRUB,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns the defaults when no configuration file exists.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads the configuration from `path`.
///
/// An unreadable file is an error; a file with invalid contents falls back
/// to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(from_toml_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid controls config, using defaults");
        Config::default()
    }))
}

/// Parses a configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
