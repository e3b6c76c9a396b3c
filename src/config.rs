//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::GameMode;

/// Settings for a play session. Every field has a default, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Where the score ledger is kept.
    #[serde(default = "default_scores_path")]
    scores_path: PathBuf,

    /// Pause before the CPU answers, in milliseconds.
    #[serde(default = "default_cpu_delay_ms")]
    cpu_delay_ms: u64,

    /// Fixed seed for the CPU's random choices.
    #[serde(default)]
    seed: Option<u64>,

    /// Ring the terminal bell for sound cues.
    #[serde(default = "default_bell")]
    bell: bool,

    /// Log file for the terminal front end.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Mode picked when none is given on the command line.
    #[serde(default)]
    default_mode: Option<GameMode>,
}

fn default_scores_path() -> PathBuf {
    PathBuf::from("scores.json")
}

fn default_cpu_delay_ms() -> u64 {
    500
}

fn default_bell() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("neon_tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scores_path: default_scores_path(),
            cpu_delay_ms: default_cpu_delay_ms(),
            seed: None,
            bell: default_bell(),
            log_file: default_log_file(),
            default_mode: None,
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
        Self::from_toml(&content)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            info!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            scores_path = %config.scores_path.display(),
            cpu_delay_ms = config.cpu_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Overrides the score file location.
    pub fn with_scores_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scores_path = path.into();
        self
    }

    /// Overrides the CPU seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the starting mode.
    pub fn with_default_mode(mut self, mode: GameMode) -> Self {
        self.default_mode = Some(mode);
        self
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
