use chess_core::{GameState, Move, find_legal};

use crate::error::BridgeError;
use crate::protocol::BestMove;

/// Match an engine reply against the legal moves of `state`.
///
/// Returns the generator's own move, so castling and en-passant flags are
/// set even though UCI text does not carry them. `Ok(None)` means the
/// engine reported that it has no move.
pub fn resolve(state: &GameState, best: &BestMove) -> Result<Option<Move>, BridgeError> {
    let uci = match best {
        BestMove::NoMove => return Ok(None),
        BestMove::Move { uci, .. } => uci,
    };
    let candidate = Move::from_uci(uci).map_err(|source| BridgeError::BadMove {
        text: uci.clone(),
        source,
    })?;
    find_legal(state, &candidate)
        .map(Some)
        .ok_or_else(|| BridgeError::IllegalMove(uci.clone()))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
