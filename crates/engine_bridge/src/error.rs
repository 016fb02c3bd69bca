use chess_core::NotationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to start engine '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine closed its output")]
    Closed,

    #[error("timed out after {after_ms} ms waiting for {waiting_for}")]
    Timeout {
        waiting_for: &'static str,
        after_ms: u64,
    },

    #[error("engine handshake failed: {0}")]
    Handshake(String),

    #[error("engine sent malformed move '{text}': {source}")]
    BadMove {
        text: String,
        #[source]
        source: NotationError,
    },

    #[error("engine move '{0}' is not legal in this position")]
    IllegalMove(String),
}
