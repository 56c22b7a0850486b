//! Configuration types for aura.
//!
//! The configuration is a JSON file. Every field has a default, so a missing
//! or partial file still yields a usable config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::profile::UserProfile;

/// Main configuration for aura.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Profile shown in the sidebar and greeting.
    #[serde(default)]
    pub profile: UserProfile,

    /// Delay before the simulated reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// UI tick rate in milliseconds (animations, smooth scroll).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon style.
    #[serde(default)]
    pub icons: IconStyle,

    /// Whether the sidebar starts open.
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,

    /// Where the TUI writes its log. Defaults to the temp dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_sidebar_open() -> bool {
    true
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark purple/blue palette.
    #[default]
    Aura,
    /// Light palette.
    Light,
    /// Maximum contrast.
    HighContrast,
}

/// Icon style selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    #[default]
    Unicode,
    Ascii,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Default config location: `<config dir>/aura/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aura").join("config.json"))
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Log file path, falling back to `aura.log` in the temp dir.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("aura.log"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            reply_delay_ms: default_reply_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            theme: ThemeName::default(),
            icons: IconStyle::default(),
            sidebar_open: default_sidebar_open(),
            log_file: None,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
