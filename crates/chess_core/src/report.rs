use serde::{Deserialize, Serialize};

use crate::board::SIZE;
use crate::game_state::{CastlingRights, GameState};
use crate::movegen::generate_legal;
use crate::status::GameStatus;
use crate::types::*;

/// Plain-data view of a session for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionReport {
    pub fen: String,
    /// Rank 8 first, one character per square, `.` for empty.
    pub ranks: Vec<String>,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<String>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub in_check: bool,
    pub status: GameStatus,
    pub repetition_count: u32,
    pub legal_moves: Vec<String>,
    pub history: Vec<String>,
}

impl GameState {
    pub fn report(&self) -> PositionReport {
        let board = self.board();
        let ranks = (0..SIZE)
            .rev()
            .map(|row| {
                (0..SIZE)
                    .map(|col| board.piece_at(Square::new(row, col)).map_or('.', Piece::symbol))
                    .collect()
            })
            .collect();
        PositionReport {
            fen: self.fen_full(),
            ranks,
            side_to_move: self.side_to_move(),
            castling: self.castling(),
            en_passant: self.en_passant_target().map(|sq| sq.to_string()),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
            in_check: self.in_check(),
            status: self.status(),
            repetition_count: self.repetition_count(),
            legal_moves: generate_legal(self).iter().map(Move::to_uci).collect(),
            history: self.history_uci(),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
