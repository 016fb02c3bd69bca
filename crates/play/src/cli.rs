//! Command-line flags

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::Color;

use crate::config::PlayConfig;

pub const USAGE: &str = "\
chess_play - play chess in the terminal

Usage:
  chess_play [--config FILE] [--engine PATH] [--side white|black] [--fen FEN] [--json]

Options:
  --config FILE   TOML config (default: ./chess_play.toml if present)
  --engine PATH   UCI engine executable; without one the random bot plays
  --side SIDE     the side you play (default: white)
  --fen FEN       start from this position
  --json          print the start position as JSON and exit

In-game commands:
  e2e4 / e7e8q    make a move in coordinate notation
  moves [SQUARE]  list legal moves, optionally from one square
  undo            take back your last move and the reply
  board           redraw the board
  fen             print the position string
  json            print the position as JSON
  help            show the commands
  quit            leave the game";

/// Parsed flags. Anything not given leaves the config untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub engine: Option<PathBuf>,
    pub side: Option<Color>,
    pub fen: Option<String>,
    pub json: bool,
    pub help: bool,
}

fn parse_side(text: &str) -> Result<Color> {
    match text.to_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => bail!("Unknown side: {} (expected white or black)", text),
    }
}

impl CliArgs {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .cloned()
                    .with_context(|| format!("{} requires a value", flag))
            };
            match flag {
                "--config" | "-c" => cli.config = Some(PathBuf::from(value()?)),
                "--engine" | "-e" => cli.engine = Some(PathBuf::from(value()?)),
                "--side" | "-s" => cli.side = Some(parse_side(&value()?)?),
                "--fen" | "-f" => cli.fen = Some(value()?),
                "--json" => cli.json = true,
                "help" | "--help" | "-h" => cli.help = true,
                other => bail!("Unknown argument: {}", other),
            }
            i += 1;
        }
        Ok(cli)
    }

    /// Flags win over the config file.
    pub fn apply(&self, config: &mut PlayConfig) {
        if let Some(engine) = &self.engine {
            config.engine.path = Some(engine.clone());
        }
        if let Some(side) = self.side {
            config.human_side = side;
        }
        if let Some(fen) = &self.fen {
            config.start_fen = Some(fen.clone());
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
