use crate::{game_state::GameState, movegen::generate_legal};

/// Pure perft node count.
/// Counts all legal move sequences of length `depth` from the current position,
/// walking the tree with `apply_move`/`undo_move`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal(state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        state.apply_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Per-move node counts at the root, sorted by move text.
pub fn divide(state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    let mut out: Vec<(String, u64)> = generate_legal(state)
        .into_iter()
        .map(|mv| {
            state.apply_move(mv);
            let n = perft(state, depth.saturating_sub(1));
            state.undo_move();
            (mv.to_uci(), n)
        })
        .collect();
    out.sort();
    out
}
