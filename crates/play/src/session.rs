//! Human-versus-bot game loop over a line-based terminal.

use std::fmt;
use std::io::Write;

use anyhow::{bail, Result};
use chess_core::{generate_legal, legal_moves_from, Color, GameState, GameStatus, Move, Square};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::cli::USAGE;
use crate::opponent::Opponent;

/// One line of human input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Move(String),
    Moves(Option<String>),
    Undo,
    Board,
    Fen,
    Json,
    Help,
    Quit,
}

impl Input {
    /// `None` for a blank line. Anything that is not a command is treated
    /// as a move.
    pub fn parse(line: &str) -> Option<Input> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?;
        let input = match head.to_lowercase().as_str() {
            "moves" => Input::Moves(parts.next().map(str::to_string)),
            "undo" => Input::Undo,
            "board" => Input::Board,
            "fen" => Input::Fen,
            "json" => Input::Json,
            "help" | "?" => Input::Help,
            "quit" | "exit" => Input::Quit,
            _ => Input::Move(head.to_string()),
        };
        Some(input)
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameStatus),
    FiftyMoveRule,
    InsufficientMaterial,
    Quit,
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnd::Finished(status) => write!(f, "Game over: {}", status),
            GameEnd::FiftyMoveRule => write!(f, "Game over: draw by the fifty-move rule"),
            GameEnd::InsufficientMaterial => write!(f, "Game over: draw by insufficient material"),
            GameEnd::Quit => write!(f, "Game abandoned"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the game and the human's colour.
pub struct Session {
    state: GameState,
    human: Color,
    claim_draws: bool,
}

impl Session {
    pub fn new(state: GameState, human: Color, claim_draws: bool) -> Self {
        Self {
            state,
            human,
            claim_draws,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn human(&self) -> Color {
        self.human
    }

    /// Terminal status first, then the claimable draws if enabled.
    pub fn check_end(&self) -> Option<GameEnd> {
        let status = self.state.status();
        if status.is_terminal() {
            return Some(GameEnd::Finished(status));
        }
        if self.claim_draws {
            if self.state.is_fifty_move_draw() {
                return Some(GameEnd::FiftyMoveRule);
            }
            if self.state.is_insufficient_material() {
                return Some(GameEnd::InsufficientMaterial);
            }
        }
        None
    }

    pub fn print_position<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.state.board())?;
        let check = if self.state.in_check() { " (check)" } else { "" };
        writeln!(out, "{} to move{}", self.state.side_to_move(), check)
    }

    /// Take back plies until it is the human's turn again.
    pub fn undo_turn(&mut self) -> usize {
        let mut undone = 0;
        while self.state.undo_move() {
            undone += 1;
            if self.state.side_to_move() == self.human {
                break;
            }
        }
        undone
    }

    /// Handle one human command.
    pub fn handle<W: Write>(&mut self, input: Input, out: &mut W) -> Result<Flow> {
        match input {
            Input::Move(text) => match self.state.apply_uci(&text) {
                Ok(mv) => {
                    debug!(mv = %mv, "human move");
                    self.print_position(out)?;
                }
                Err(err) => writeln!(out, "Illegal move '{}': {}", text, err)?,
            },
            Input::Moves(None) => {
                writeln!(out, "{}", join_uci(&generate_legal(&self.state)))?;
            }
            Input::Moves(Some(square)) => match square.parse::<Square>() {
                Ok(sq) => writeln!(out, "{}", join_uci(&legal_moves_from(&self.state, sq)))?,
                Err(err) => writeln!(out, "{}", err)?,
            },
            Input::Undo => {
                if self.undo_turn() == 0 {
                    writeln!(out, "Nothing to undo")?;
                } else {
                    self.print_position(out)?;
                }
            }
            Input::Board => self.print_position(out)?,
            Input::Fen => writeln!(out, "{}", self.state.fen_full())?,
            Input::Json => writeln!(out, "{}", serde_json::to_string(&self.state.report())?)?,
            Input::Help => writeln!(out, "{}", USAGE)?,
            Input::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn bot_turn<W: Write>(&mut self, opponent: &mut Opponent, out: &mut W) -> Result<()> {
        let Some(mv) = opponent.choose(&self.state).await? else {
            bail!("{} found no move in {}", opponent.name(), self.state.fen_full());
        };
        self.state.apply_move(mv);
        writeln!(out, "{} plays {}", opponent.name(), mv)?;
        self.print_position(out)?;
        Ok(())
    }

    /// Play until the game ends, the human quits, or input runs out.
    pub async fn run<R, W>(
        &mut self,
        opponent: &mut Opponent,
        input: R,
        out: &mut W,
    ) -> Result<GameEnd>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        self.print_position(out)?;
        loop {
            if let Some(end) = self.check_end() {
                info!(%end, fen = %self.state.fen_full(), "game finished");
                writeln!(out, "{}", end)?;
                return Ok(end);
            }

            if self.state.side_to_move() != self.human {
                self.bot_turn(opponent, out).await?;
                continue;
            }

            write!(out, "{}> ", self.human)?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                return Ok(GameEnd::Quit);
            };
            let Some(input) = Input::parse(&line) else {
                continue;
            };
            if self.handle(input, out)? == Flow::Quit {
                return Ok(GameEnd::Quit);
            }
        }
    }
}

fn join_uci(moves: &[Move]) -> String {
    let mut list: Vec<String> = moves.iter().map(Move::to_uci).collect();
    list.sort();
    list.join(" ")
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
