//! The bot side of a session.

use anyhow::{Context, Result};
use chess_core::{GameState, Move};
use engine_bridge::{resolve, EngineConfig, UciEngine};
use random_engine::RandomEngine;
use tracing::{debug, info};

pub enum Opponent {
    Uci(UciEngine),
    Random(RandomEngine),
}

impl Opponent {
    /// The UCI engine at `config.path`, or the random bot when no path is set.
    pub async fn from_config(config: &EngineConfig) -> Result<Self> {
        match &config.path {
            Some(path) => {
                let engine = UciEngine::spawn(path, config)
                    .await
                    .with_context(|| format!("Failed to start engine {}", path.display()))?;
                info!(engine = engine.name().unwrap_or("?"), "engine ready");
                Ok(Opponent::Uci(engine))
            }
            None => {
                info!("no engine configured, using the random bot");
                Ok(Opponent::Random(RandomEngine::new()))
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Opponent::Uci(engine) => engine.name().unwrap_or("UCI engine").to_string(),
            Opponent::Random(engine) => engine.name().to_string(),
        }
    }

    pub async fn new_game(&mut self) -> Result<()> {
        if let Opponent::Uci(engine) = self {
            engine.new_game().await?;
        }
        Ok(())
    }

    /// A legal move for the side to move, or `None` if the bot has none.
    pub async fn choose(&mut self, state: &GameState) -> Result<Option<Move>> {
        match self {
            Opponent::Uci(engine) => {
                let limit = engine.config().limit;
                let best = engine.best_move_for(state, limit).await?;
                debug!(?best, fen = %state.fen_full(), "engine reply");
                Ok(resolve(state, &best)?)
            }
            Opponent::Random(engine) => Ok(engine.pick(state)),
        }
    }

    pub async fn shutdown(self) -> Result<()> {
        if let Opponent::Uci(engine) = self {
            engine.quit().await?;
        }
        Ok(())
    }
}
