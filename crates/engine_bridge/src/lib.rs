//! Client side of the UCI protocol.
//!
//! Spawns an external engine process, performs the `uci`/`isready`
//! handshake, and turns `bestmove` replies into legal [`chess_core::Move`]s
//! for a [`chess_core::GameState`].

mod client;
mod config;
mod error;
mod protocol;
mod resolve;

pub use client::UciEngine;
pub use config::{EngineConfig, SearchLimit};
pub use error::BridgeError;
pub use protocol::{BestMove, Command, EngineLine};
pub use resolve::resolve;
