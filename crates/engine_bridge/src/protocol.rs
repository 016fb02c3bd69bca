use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SearchLimit;

/// A line the client writes to the engine's stdin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Uci,
    IsReady,
    UciNewGame,
    SetOption { name: String, value: String },
    PositionFen { fen: String, moves: Vec<String> },
    PositionStartpos { moves: Vec<String> },
    Go(SearchLimit),
    Quit,
}

fn write_moves(f: &mut fmt::Formatter<'_>, moves: &[String]) -> fmt::Result {
    if !moves.is_empty() {
        write!(f, " moves {}", moves.join(" "))?;
    }
    Ok(())
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Uci => write!(f, "uci"),
            Command::IsReady => write!(f, "isready"),
            Command::UciNewGame => write!(f, "ucinewgame"),
            Command::SetOption { name, value } => {
                write!(f, "setoption name {} value {}", name, value)
            }
            Command::PositionFen { fen, moves } => {
                write!(f, "position fen {}", fen)?;
                write_moves(f, moves)
            }
            Command::PositionStartpos { moves } => {
                write!(f, "position startpos")?;
                write_moves(f, moves)
            }
            Command::Go(SearchLimit::Depth(depth)) => write!(f, "go depth {}", depth),
            Command::Go(SearchLimit::MovetimeMs(ms)) => write!(f, "go movetime {}", ms),
            Command::Go(SearchLimit::Clock {
                wtime_ms,
                btime_ms,
                winc_ms,
                binc_ms,
            }) => write!(
                f,
                "go wtime {} btime {} winc {} binc {}",
                wtime_ms, btime_ms, winc_ms, binc_ms
            ),
            Command::Quit => write!(f, "quit"),
        }
    }
}

/// The engine's answer to `go`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestMove {
    Move { uci: String, ponder: Option<String> },
    /// `bestmove (none)` or `bestmove 0000`: the engine sees no legal move.
    NoMove,
}

/// A line read from the engine's stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineLine {
    IdName(String),
    IdAuthor(String),
    /// Name of an advertised option.
    Option(String),
    UciOk,
    ReadyOk,
    BestMove(BestMove),
    Info(String),
    Other(String),
}

impl EngineLine {
    pub fn parse(line: &str) -> EngineLine {
        let line = line.trim();
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&head) = parts.first() else {
            return EngineLine::Other(String::new());
        };

        match head {
            "uciok" => EngineLine::UciOk,
            "readyok" => EngineLine::ReadyOk,
            "id" => match parts.get(1) {
                Some(&"name") => EngineLine::IdName(parts[2..].join(" ")),
                Some(&"author") => EngineLine::IdAuthor(parts[2..].join(" ")),
                _ => EngineLine::Other(line.to_string()),
            },
            "option" if parts.get(1) == Some(&"name") => {
                let name: Vec<&str> = parts[2..]
                    .iter()
                    .copied()
                    .take_while(|&t| t != "type")
                    .collect();
                if name.is_empty() {
                    EngineLine::Other(line.to_string())
                } else {
                    EngineLine::Option(name.join(" "))
                }
            }
            "bestmove" => EngineLine::BestMove(parse_bestmove(&parts[1..])),
            "info" => EngineLine::Info(parts[1..].join(" ")),
            _ => EngineLine::Other(line.to_string()),
        }
    }
}

fn parse_bestmove(rest: &[&str]) -> BestMove {
    match rest.first() {
        None | Some(&"(none)") | Some(&"0000") => BestMove::NoMove,
        Some(&best) => {
            let ponder = rest
                .iter()
                .position(|&t| t == "ponder")
                .and_then(|idx| rest.get(idx + 1))
                .map(|p| p.to_string());
            BestMove::Move {
                uci: best.to_string(),
                ponder,
            }
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
