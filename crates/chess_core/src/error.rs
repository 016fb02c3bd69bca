//! Error types for notation parsing and position import.

use thiserror::Error;

/// Malformed coordinate notation (`e2e4`, `e7e8q`) or square name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("move `{0}` is shorter than four characters")]
    TooShort(String),
    #[error("move `{0}` is longer than five characters")]
    TooLong(String),
    #[error("`{0}` is not a square on the board")]
    BadSquare(String),
    #[error("`{0}` is not a promotion piece (expected q, r, b or n)")]
    BadPromotion(char),
}

/// Malformed position string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 4 to 6 fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank `{0}` does not describe exactly 8 squares")]
    RankWidth(String),
    #[error("unknown piece letter `{0}`")]
    Piece(char),
    #[error("side to move must be `w` or `b`, found `{0}`")]
    SideToMove(String),
    #[error("bad castling field `{0}`")]
    Castling(String),
    #[error("bad en-passant field `{0}`")]
    EnPassant(String),
    #[error("bad move counter `{0}`")]
    Counter(String),
}

/// Why an externally supplied move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error("`{0}` is not a legal move in this position")]
    Illegal(String),
}
