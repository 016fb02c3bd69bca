use std::fmt;

use tracing::warn;

use crate::types::*;

pub const SIZE: i8 = 8;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]` with a1 at `[0][0]`.
///
/// The board knows how pieces physically move but nothing about legality:
/// any placement is representable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        b.initialize();
        b
    }

    /// Reset to the standard opening position.
    pub fn initialize(&mut self) {
        self.cells = [[None; 8]; 8];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            self.cells[0][col] = Some(Piece::new(kind, Color::White));
            self.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            self.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            self.cells[7][col] = Some(Piece::new(kind, Color::Black));
        }
    }

    pub fn is_inside(row: i8, col: i8) -> bool {
        (0..SIZE).contains(&row) && (0..SIZE).contains(&col)
    }

    /// Occupant of a square. Coordinates must be on the board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn piece_at_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        *self.piece_at_mut(sq) = pc;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Every occupied square with its piece, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..SIZE).flat_map(move |row| {
            (0..SIZE).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|pc| (sq, pc))
            })
        })
    }

    /// Physically carry out a move: relocates the castling rook, removes a
    /// pawn captured en passant, substitutes the promoted piece. Out-of-range
    /// or empty-origin moves are ignored.
    pub fn apply_move(&mut self, mv: &Move) {
        if !mv.from.is_inside() || !mv.to.is_inside() {
            warn!(%mv, "ignoring off-board move");
            return;
        }
        let Some(moving) = self.piece_at(mv.from) else {
            warn!(%mv, "ignoring move from an empty square");
            return;
        };

        if mv.is_castle && moving.kind == PieceKind::King {
            let row = mv.to.row;
            let (rook_from, rook_to) = if mv.to.col > mv.from.col {
                (Square::new(row, 7), Square::new(row, 5))
            } else {
                (Square::new(row, 0), Square::new(row, 3))
            };
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_to, rook);
            self.set_piece(rook_from, None);
        }

        if mv.is_en_passant && moving.kind == PieceKind::Pawn {
            // The captured pawn sits beside the mover, not on the destination.
            self.set_piece(Square::new(mv.from.row, mv.to.col), None);
        }

        let placed = match mv.promo {
            Some(kind) if moving.kind == PieceKind::Pawn => Piece::new(kind, moving.color),
            _ => moving,
        };
        self.set_piece(mv.to, Some(placed));
        self.set_piece(mv.from, None);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..SIZE {
                let c = self
                    .piece_at(Square::new(row, col))
                    .map_or('.', Piece::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
