//! Forsyth-Edwards position strings.
//!
//! The four-field form (placement, side, castling, en passant) doubles as the
//! repetition key; the six-field form adds the clocks and is what gets handed
//! to an external engine.

use std::str::FromStr;

use crate::board::{Board, SIZE};
use crate::error::FenError;
use crate::game_state::{CastlingRights, GameState};
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Piece placement, rank 8 first, empty runs as digits.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (0..SIZE).rev() {
            let mut empty = 0;
            for col in 0..SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }

    pub fn from_placement(text: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = text.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        let mut board = Board::empty();
        for (idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - idx as i8;
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let pc = Piece::from_symbol(ch).ok_or(FenError::Piece(ch))?;
                    if col >= SIZE {
                        return Err(FenError::RankWidth(rank_str.to_string()));
                    }
                    board.set_piece(Square::new(row, col), Some(pc));
                    col += 1;
                }
                if col > SIZE {
                    return Err(FenError::RankWidth(rank_str.to_string()));
                }
            }
            if col != SIZE {
                return Err(FenError::RankWidth(rank_str.to_string()));
            }
        }
        Ok(board)
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.wk = true,
            'Q' => rights.wq = true,
            'k' => rights.bk = true,
            'q' => rights.bq = true,
            _ => return Err(FenError::Castling(field.to_string())),
        }
    }
    Ok(rights)
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        Some(f) => f.parse().map_err(|_| FenError::Counter(f.to_string())),
        None => Ok(default),
    }
}

impl GameState {
    /// Position signature: placement, side to move, castling rights and
    /// en-passant square. Used as the repetition key.
    pub fn fen(&self) -> String {
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {}",
            self.board().to_placement(),
            self.side_to_move().letter(),
            self.castling().to_fen_field(),
            ep
        )
    }

    /// Full position string including halfmove clock and fullmove number.
    pub fn fen_full(&self) -> String {
        format!(
            "{} {} {}",
            self.fen(),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }

    /// Start a session from a position string of 4 to 6 fields.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::FieldCount(parts.len()));
        }

        let board = Board::from_placement(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };
        let castling = parse_castling(parts[2])?;
        let en_passant = match parts[3] {
            "-" => None,
            s => {
                let sq = s
                    .parse::<Square>()
                    .map_err(|_| FenError::EnPassant(s.to_string()))?;
                // The skipped square sits behind the opponent's double push:
                // rank 6 when White is to move, rank 3 when Black is.
                let pusher = side_to_move.other();
                if sq.row != pusher.pawn_row() + pusher.forward() {
                    return Err(FenError::EnPassant(s.to_string()));
                }
                Some(sq)
            }
        };
        let halfmove_clock = parse_counter(parts.get(4).copied(), 0)?;
        let fullmove_number = parse_counter(parts.get(5).copied(), 1)?;

        Ok(GameState::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_fen(s)
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
