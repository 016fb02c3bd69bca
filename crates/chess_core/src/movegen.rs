use crate::attacks::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};
use crate::board::Board;
use crate::game_state::GameState;
use crate::types::*;

pub use crate::attacks::{is_attacked, is_in_check};

/// All legal moves for the side to move.
///
/// Each pseudo-legal candidate is played on a scratch copy of the board and
/// kept only if the mover's king is not attacked afterwards, which covers
/// pins, discovered checks and en-passant exposure without a separate analysis.
pub fn generate_legal(state: &GameState) -> Vec<Move> {
    let mover = state.side_to_move();
    let mut moves = generate_pseudo_legal(state);
    moves.retain(|mv| {
        let mut scratch = state.board().clone();
        scratch.apply_move(mv);
        !is_in_check(&scratch, mover)
    });
    moves
}

/// Legal moves starting on `from`.
pub fn legal_moves_from(state: &GameState, from: Square) -> Vec<Move> {
    let mut moves = generate_legal(state);
    moves.retain(|mv| mv.from == from);
    moves
}

/// The legal move equivalent to `candidate` (same squares and promotion),
/// carrying the generator's castling and en-passant flags.
pub fn find_legal(state: &GameState, candidate: &Move) -> Option<Move> {
    generate_legal(state)
        .into_iter()
        .find(|mv| mv.is_equivalent(candidate))
}

/// Moves that obey piece movement rules but may leave the king in check.
pub fn generate_pseudo_legal(state: &GameState) -> Vec<Move> {
    let board = state.board();
    let side = state.side_to_move();
    let mut out = Vec::with_capacity(64);
    for (from, pc) in board.occupied() {
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, side, state.en_passant_target(), &mut out),
            PieceKind::Knight => gen_steps(board, from, side, &KNIGHT_OFFSETS, &mut out),
            PieceKind::Bishop => gen_slider(board, from, side, &BISHOP_DIRS, &mut out),
            PieceKind::Rook => gen_slider(board, from, side, &ROOK_DIRS, &mut out),
            PieceKind::Queen => {
                gen_slider(board, from, side, &BISHOP_DIRS, &mut out);
                gen_slider(board, from, side, &ROOK_DIRS, &mut out);
            }
            PieceKind::King => {
                gen_steps(board, from, side, &KING_OFFSETS, &mut out);
                gen_castle(state, from, side, &mut out);
            }
        }
    }
    out
}

fn push_pawn_move(from: Square, to: Square, c: Color, out: &mut Vec<Move>) {
    if to.row == c.promotion_row() {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::promoting(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, ep: Option<Square>, out: &mut Vec<Move>) {
    let dir = c.forward();

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            push_pawn_move(from, one, c, out);
            if from.row == c.pawn_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            Some(_) => {}
            None if ep == Some(to) => out.push(Move::en_passant(from, to)),
            None => {}
        }
    }
}

/// Single-step movers: knight and king.
fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

fn gen_castle(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>) {
    let board = state.board();
    let row = c.home_row();
    if from != Square::new(row, 4) {
        return;
    }
    let wants_kingside = state.can_castle_kingside(c);
    let wants_queenside = state.can_castle_queenside(c);
    if !wants_kingside && !wants_queenside {
        return;
    }
    // No castling out of check.
    if is_in_check(board, c) {
        return;
    }

    let enemy = c.other();
    let own_rook = |col: i8| {
        board.piece_at(Square::new(row, col)) == Some(Piece::new(PieceKind::Rook, c))
    };
    let empty = |cols: &[i8]| {
        cols.iter()
            .all(|&col| board.piece_at(Square::new(row, col)).is_none())
    };
    let safe = |cols: &[i8]| {
        cols.iter()
            .all(|&col| !is_attacked(board, Square::new(row, col), enemy))
    };

    if wants_kingside && own_rook(7) && empty(&[5, 6]) && safe(&[5, 6]) {
        out.push(Move::castle(from, Square::new(row, 6)));
    }
    // b-file must be empty but may be attacked: the king never crosses it.
    if wants_queenside && own_rook(0) && empty(&[1, 2, 3]) && safe(&[3, 2]) {
        out.push(Move::castle(from, Square::new(row, 2)));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
