//! Terminal chess session
//!
//! Ties a `chess_core::GameState` to an opponent (an external UCI engine
//! or the random bot) and a line-based command loop.

pub mod cli;
pub mod config;
pub mod opponent;
pub mod session;

pub use cli::CliArgs;
pub use config::PlayConfig;
pub use opponent::Opponent;
pub use session::{GameEnd, Input, Session};
