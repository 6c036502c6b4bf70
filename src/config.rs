//! Application configuration.
//!
//! Settings live in `<config dir>/twenty/config.json`. A missing file means
//! defaults; a malformed file is an error surfaced at startup. CLI flags
//! override file values. Phase durations are deliberately absent here: the
//! 20-20-20 intervals are fixed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default for the sound setting.
fn default_sound() -> bool {
    true
}

/// Default for the notification setting.
fn default_notify() -> bool {
    true
}

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Play the alarm sound at phase transitions.
    #[serde(default = "default_sound")]
    pub sound: bool,

    /// Send a desktop notification at phase transitions.
    #[serde(default = "default_notify")]
    pub notify: bool,

    /// Start with the dark display theme.
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sound: default_sound(),
            notify: default_notify(),
            dark_mode: false,
        }
    }
}

impl AppConfig {
    /// Returns the default configuration file path, if a config directory
    /// can be determined on this platform.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("twenty").join("config.json"))
    }

    /// Loads configuration from the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error only for a file that exists but cannot be parsed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
