use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/starfolio/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("starfolio").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML.
    ///
    /// Not validated here: command-line flags may still fix the result, so
    /// callers run [`validate`](Self::validate) once the overrides are in.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The profile has a name
    /// - Typewriter intervals and the UI tick rate are non-zero
    /// - An empty greeting has at least one non-zero hold
    /// - A GitHub user is set when fetching is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "profile.name must not be empty".to_string(),
            });
        }

        let tw = &self.typewriter;
        if tw.type_interval_ms == 0 || tw.delete_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "typewriter intervals must be greater than zero".to_string(),
            });
        }

        // An empty greeting only ever holds, so at least one hold must wait.
        if self.profile.greeting.is_empty() && tw.hold_full_ms == 0 && tw.hold_empty_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "typewriter holds must not both be zero for an empty greeting"
                    .to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.github.enabled && self.github.user.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "github.user must be set when github.enabled = true".to_string(),
            });
        }

        Ok(())
    }
}
