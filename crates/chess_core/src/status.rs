//! Terminal-state classification.
//!
//! Nothing here is stored: the status is recomputed from the current
//! position whenever a caller asks, typically right after each move.

use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::movegen::generate_legal;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
        }
    }
}

impl GameState {
    /// Mate and stalemate take precedence over repetition.
    pub fn status(&self) -> GameStatus {
        if generate_legal(self).is_empty() {
            return if self.in_check() {
                GameStatus::Checkmate {
                    winner: self.side_to_move().other(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.repetition_count() >= 3 {
            return GameStatus::ThreefoldRepetition;
        }
        GameStatus::Ongoing
    }

    /// A hundred halfmoves without a pawn move or capture. Claimable, never
    /// reported by [`GameState::status`].
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// one bishop each on squares of the same colour.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = Vec::new();
        for (sq, pc) in self.board().occupied() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((sq, pc)),
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [(sq_a, a), (sq_b, b)] => {
                a.kind == PieceKind::Bishop
                    && b.kind == PieceKind::Bishop
                    && a.color != b.color
                    && sq_a.is_dark() == sq_b.is_dark()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
