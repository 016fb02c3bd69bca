use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::Board;
use crate::error::MoveError;
use crate::movegen;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn clear_both(&mut self, color: Color) {
        match color {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drop the right tied to a rook's original corner, if `sq` is one.
    /// Rights only ever go from true to false, so clearing twice is harmless.
    fn clear_corner(&mut self, color: Color, sq: Square) {
        if sq.row != color.home_row() {
            return;
        }
        match (color, sq.col) {
            (Color::White, 0) => self.wq = false,
            (Color::White, 7) => self.wk = false,
            (Color::Black, 0) => self.bq = false,
            (Color::Black, 7) => self.bk = false,
            _ => {}
        }
    }

    /// `KQkq` subset, or `-` when no right remains.
    pub fn to_fen_field(&self) -> String {
        let s: String = [(self.wk, 'K'), (self.wq, 'Q'), (self.bk, 'k'), (self.bq, 'q')]
            .iter()
            .filter(|(held, _)| *held)
            .map(|&(_, c)| c)
            .collect();
        if s.is_empty() { "-".to_string() } else { s }
    }
}

/// Everything `undo_move` puts back.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Move>,
    repetitions: HashMap<String, u32>,
}

/// The authoritative game session.
///
/// `apply_move` and `undo_move` are the only mutators. Each apply pushes a
/// full snapshot so undo is a verbatim restore with no recomputation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Move>,
    /// Position signature -> number of times it has occurred.
    repetitions: HashMap<String, u32>,
    snapshots: Vec<Snapshot>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard opening position.
    pub fn new() -> Self {
        Self::from_parts(
            Board::startpos(),
            Color::White,
            CastlingRights::ALL,
            None,
            0,
            1,
        )
    }

    /// Build a session whose initial position is the given one. The initial
    /// position is recorded once for repetition counting.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            repetitions: HashMap::new(),
            snapshots: Vec::new(),
        };
        state.repetitions.insert(state.fen(), 1);
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.castling.kingside(color)
    }
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.castling.queenside(color)
    }
    /// Square a pawn may capture onto en passant this ply.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    pub fn history_uci(&self) -> Vec<String> {
        self.history.iter().map(Move::to_uci).collect()
    }

    /// Number of undoable moves.
    pub fn undo_depth(&self) -> usize {
        self.snapshots.len()
    }

    /// How many times the current position has occurred, this one included.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(&self.fen()).copied().unwrap_or(0)
    }

    /// Is the side to move in check?
    pub fn in_check(&self) -> bool {
        movegen::is_in_check(&self.board, self.side_to_move)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: self.history.clone(),
            repetitions: self.repetitions.clone(),
        }
    }

    /// Play a move. The move is assumed legal (take it from
    /// [`movegen::generate_legal`]). Every call pushes exactly one snapshot;
    /// a move from an empty or off-board square then changes nothing, and
    /// the matching `undo_move` restores the same state.
    pub fn apply_move(&mut self, mv: Move) {
        self.snapshots.push(self.snapshot());
        if !mv.from.is_inside() || !mv.to.is_inside() {
            warn!(%mv, "ignoring off-board move");
            return;
        }
        let Some(moved) = self.board.piece_at(mv.from) else {
            warn!(%mv, "ignoring move from an empty square");
            return;
        };

        let captured_sq = if mv.is_en_passant {
            Square::new(mv.from.row, mv.to.col)
        } else {
            mv.to
        };
        let captured = self.board.piece_at(captured_sq);

        self.board.apply_move(&mv);

        match moved.kind {
            PieceKind::King => self.castling.clear_both(moved.color),
            PieceKind::Rook => self.castling.clear_corner(moved.color, mv.from),
            _ => {}
        }
        // Taking a rook on its corner costs the owner that right, even if the
        // rook never moved. Uses the pre-move capture info.
        if let Some(cp) = captured {
            if cp.kind == PieceKind::Rook {
                self.castling.clear_corner(cp.color, captured_sq);
            }
        }

        let double_push = moved.kind == PieceKind::Pawn && (mv.to.row - mv.from.row).abs() == 2;
        self.en_passant = if double_push {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.history.push(mv);
        self.side_to_move = self.side_to_move.other();

        let key = self.fen();
        *self.repetitions.entry(key).or_insert(0) += 1;
        debug!(%mv, ply = self.history.len(), "applied move");
    }

    /// Undo the most recent move. Returns false when there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(snap) = self.snapshots.pop() else {
            return false;
        };
        self.board = snap.board;
        self.side_to_move = snap.side_to_move;
        self.castling = snap.castling;
        self.en_passant = snap.en_passant;
        self.halfmove_clock = snap.halfmove_clock;
        self.fullmove_number = snap.fullmove_number;
        self.history = snap.history;
        self.repetitions = snap.repetitions;
        debug!(ply = self.history.len(), "undid move");
        true
    }

    /// Apply a move given in coordinate notation, after checking it against
    /// the legal move list. The generator's castling and en-passant flags are
    /// used in place of the (unrecoverable) parsed ones.
    pub fn apply_uci(&mut self, txt: &str) -> Result<Move, MoveError> {
        let candidate = Move::from_uci(txt)?;
        let mv = movegen::find_legal(self, &candidate)
            .ok_or_else(|| MoveError::Illegal(txt.to_string()))?;
        self.apply_move(mv);
        Ok(mv)
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod game_state_tests;
