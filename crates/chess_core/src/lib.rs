//! Chess rules core: board, moves, the game session with exact undo, legal
//! move generation, and terminal-state classification.
//!
//! Callers ask [`generate_legal`] for the moves of a [`GameState`], pick one,
//! and hand it to [`GameState::apply_move`]. Nothing in here searches or
//! evaluates; that is left to an external engine speaking UCI.

pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
pub mod game_state;
pub mod movegen;
pub mod perft;
pub mod report;
pub mod status;
pub mod types;
pub mod uci;

pub use board::Board;
pub use error::*;
pub use fen::STARTPOS_FEN;
pub use game_state::{CastlingRights, GameState};
pub use movegen::*;
pub use perft::{divide, perft};
pub use report::PositionReport;
pub use status::GameStatus;
pub use types::*;
