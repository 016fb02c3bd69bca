//! Random Move Opponent
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Playing without an external UCI engine installed
//! - Stress testing move generation and the session loop

use chess_core::{generate_legal, GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// An opponent that plays random legal moves.
///
/// There is no evaluation. It is the simplest possible bot and the
/// fallback when no engine path is configured.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence of picks, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly random legal move, or `None` on mate or stalemate.
    pub fn pick(&mut self, state: &GameState) -> Option<Move> {
        generate_legal(state).choose(&mut self.rng).copied()
    }

    pub fn name(&self) -> &str {
        "Random v1.0"
    }
}
