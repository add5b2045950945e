// config.rs - Game tuning, loaded from JSON and overridden from the command line
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Session rules and notification timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Session length in seconds
    pub session_seconds: u32,
    /// Score awarded per exact match
    pub points_per_match: u32,
    /// Pause between finishing a cake and the fresh one appearing
    pub reset_delay_ms: u64,
    /// Countdown rate
    pub tick_hz: f32,
    /// Display time for "pick a shape/batter" warnings
    pub warning_ms: u64,
    /// Display time for match/mismatch feedback
    pub match_feedback_ms: u64,
    /// Display time for the end-of-session summary
    pub summary_ms: u64,
    /// Fixed seed for target generation
    pub seed: Option<u64>,
    /// Reject attribute edits once the clock has run out
    pub lock_attributes_after_timeout: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session_seconds: 60,
            points_per_match: 10,
            reset_delay_ms: 1000,
            tick_hz: 1.0,
            warning_ms: 1500,
            match_feedback_ms: 2000,
            summary_ms: 5000,
            seed: None,
            lock_attributes_after_timeout: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Config file (if any) with command-line overrides applied
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(seed) = cli.seed {
            config.seed = Some(seed);
        }
        if let Some(duration) = cli.duration {
            config.session_seconds = duration;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "session_seconds",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.tick_hz > 0.0 && self.tick_hz.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "tick_hz",
                reason: format!("must be a positive rate, got {}", self.tick_hz),
            });
        }
        if self.points_per_match == 0 {
            return Err(ConfigError::Invalid {
                field: "points_per_match",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn reset_delay_secs(&self) -> f32 {
        self.reset_delay_ms as f32 / 1000.0
    }
}
