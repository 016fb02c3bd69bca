use std::path::Path;

use anyhow::{Context, Result};
use chess_core::{Color, GameState};
use engine_bridge::EngineConfig;
use serde::{Deserialize, Serialize};

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chess_play.toml";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub human_side: Color,
    /// Start from this position instead of the opening.
    pub start_fen: Option<String>,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
    /// End the game on the fifty-move rule and on insufficient material.
    pub claim_draws: bool,
    pub engine: EngineConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_side: Color::White,
            start_fen: None,
            log_level: "warn".to_string(),
            claim_draws: true,
            engine: EngineConfig::default(),
        }
    }
}

impl PlayConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// An explicit path must exist; the default file is optional.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn initial_state(&self) -> Result<GameState> {
        match &self.start_fen {
            Some(fen) => GameState::from_fen(fen)
                .with_context(|| format!("Invalid start position '{}'", fen)),
            None => Ok(GameState::new()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
