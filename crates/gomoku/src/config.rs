//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gomoku_engine::{Mode, clamp_size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How events are written to stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Board drawings and messages.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings for a playing session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of new boards (clamped to the supported range).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Variant to play.
    #[serde(default)]
    mode: Mode,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for reproducible games. Entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Output format.
    #[serde(default)]
    output: OutputFormat,
}

fn default_board_size() -> usize {
    15
}

fn default_computer_delay_ms() -> u64 {
    600
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            mode: Mode::default(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            output: OutputFormat::default(),
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides. The board size is clamped.
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        mode: Option<Mode>,
        computer_delay_ms: Option<u64>,
        seed: Option<u64>,
        output: Option<OutputFormat>,
    ) -> Self {
        self.board_size = clamp_size(board_size.unwrap_or(self.board_size));
        self.mode = mode.unwrap_or(self.mode);
        self.computer_delay_ms = computer_delay_ms.unwrap_or(self.computer_delay_ms);
        self.seed = seed.or(self.seed);
        self.output = output.unwrap_or(self.output);
        self
    }

    /// Computer reply delay as a duration.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
