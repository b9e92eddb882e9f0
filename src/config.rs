//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the interactive game, read from TOML.
///
/// Every field has a default, so an empty file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ReversiConfig {
    /// Where the game is saved.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// How long a scripted side thinks before moving, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Per-cell redraw pacing in the terminal, in milliseconds.
    #[serde(default = "default_animation_ms")]
    animation_ms: u64,

    /// Log destination for the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_save_path() -> PathBuf {
    PathBuf::from("reversi_game.txt")
}

fn default_thinking_delay_ms() -> u64 {
    2000
}

fn default_animation_ms() -> u64 {
    150
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_reversi.log")
}

impl Default for ReversiConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            thinking_delay_ms: default_thinking_delay_ms(),
            animation_ms: default_animation_ms(),
            log_file: default_log_file(),
        }
    }
}

impl ReversiConfig {
    /// Loads configuration from a TOML file, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not valid TOML for this shape.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(save_path = %config.save_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Thinking delay as a duration.
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Animation pacing as a duration.
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(ReversiConfig::from_toml("").unwrap(), ReversiConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ReversiConfig::from_toml("thinking_delay_ms = 10\n").unwrap();
        assert_eq!(config.thinking_delay(), Duration::from_millis(10));
        assert_eq!(*config.animation_ms(), 150);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = ReversiConfig::from_toml("animation_ms = \"fast\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = ReversiConfig::default().with_thinking_delay_ms(0);
        assert_eq!(config.thinking_delay(), Duration::ZERO);
    }
}
