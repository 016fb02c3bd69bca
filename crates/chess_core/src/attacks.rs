//! Square attack queries over a plain [`Board`].

use tracing::warn;

use crate::board::Board;
use crate::types::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn holds(board: &Board, sq: Option<Square>, by: Color, kind: PieceKind) -> bool {
    sq.and_then(|s| board.piece_at(s))
        .is_some_and(|pc| pc.color == by && pc.kind == kind)
}

/// First occupied square along a ray, if any.
fn ray_blocker(board: &Board, from: Square, (dr, dc): (i8, i8)) -> Option<Piece> {
    let mut cur = from;
    while let Some(next) = cur.offset(dr, dc) {
        if let Some(pc) = board.piece_at(next) {
            return Some(pc);
        }
        cur = next;
    }
    None
}

/// Is `target` attacked by any piece of side `by`?
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    // An attacking pawn stands one step "behind" the target from its own point of view.
    let pawn_row = -by.forward();
    if [-1, 1]
        .iter()
        .any(|&dc| holds(board, target.offset(pawn_row, dc), by, PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(board, target.offset(dr, dc), by, PieceKind::Knight))
    {
        return true;
    }

    let straight = ROOK_DIRS.iter().any(|&dir| {
        ray_blocker(board, target, dir).is_some_and(|pc| {
            pc.color == by && matches!(pc.kind, PieceKind::Rook | PieceKind::Queen)
        })
    });
    if straight {
        return true;
    }

    let diagonal = BISHOP_DIRS.iter().any(|&dir| {
        ray_blocker(board, target, dir).is_some_and(|pc| {
            pc.color == by && matches!(pc.kind, PieceKind::Bishop | PieceKind::Queen)
        })
    });
    if diagonal {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(board, target.offset(dr, dc), by, PieceKind::King))
}

/// Is `color`'s king attacked? A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ksq) => is_attacked(board, ksq, color.other()),
        None => {
            warn!(%color, "no king on the board");
            false
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
