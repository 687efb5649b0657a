//! Terminal session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Display and logging settings for the terminal adapter.
///
/// Every field has a default, so a partial (or empty) TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name for Black.
    black_label: String,

    /// Display name for White.
    white_label: String,

    /// Glyph drawn for a Black stone.
    black_glyph: char,

    /// Glyph drawn for a White stone.
    white_glyph: char,

    /// Glyph drawn for an empty cell.
    empty_glyph: char,

    /// Whether to print row and column indices around the board.
    show_coordinates: bool,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            black_label: "Black".to_string(),
            white_label: "White".to_string(),
            black_glyph: 'X',
            white_glyph: 'O',
            empty_glyph: '.',
            show_coordinates: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is missing.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that labels are non-empty and glyphs are distinct.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.black_label.trim().is_empty() || self.white_label.trim().is_empty() {
            return Err(ConfigError::new("Player labels must not be empty".to_string()));
        }

        let glyphs = [self.black_glyph, self.white_glyph, self.empty_glyph];
        if glyphs[0] == glyphs[1] || glyphs[0] == glyphs[2] || glyphs[1] == glyphs[2] {
            return Err(ConfigError::new(format!(
                "Board glyphs must be distinct, got {:?}",
                glyphs
            )));
        }

        Ok(())
    }

    /// Renders the defaults as TOML, for writing a starter config file.
    #[instrument]
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
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
