use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How long the engine may think about one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchLimit {
    Depth(u32),
    MovetimeMs(u64),
    Clock {
        wtime_ms: u64,
        btime_ms: u64,
        #[serde(default)]
        winc_ms: u64,
        #[serde(default)]
        binc_ms: u64,
    },
}

impl Default for SearchLimit {
    fn default() -> Self {
        SearchLimit::MovetimeMs(500)
    }
}

/// Engine settings, usually the `[engine]` table of a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine executable. `None` means no external engine.
    pub path: Option<PathBuf>,
    /// Extra command-line arguments for the executable.
    pub args: Vec<String>,
    /// Sent as `Skill Level`, clamped to 0..=20.
    pub skill_level: Option<i32>,
    /// Sent as `UCI_LimitStrength true` plus `UCI_Elo`.
    pub elo: Option<u32>,
    /// Defaults to the machine's available parallelism.
    pub threads: Option<usize>,
    pub hash_mb: u32,
    pub limit: SearchLimit,
    pub handshake_timeout_ms: u64,
    pub move_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: None,
            args: Vec::new(),
            skill_level: None,
            elo: None,
            threads: None,
            hash_mb: 128,
            limit: SearchLimit::default(),
            handshake_timeout_ms: 5_000,
            move_timeout_ms: 30_000,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
