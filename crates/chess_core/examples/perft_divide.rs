//! Perft with a per-move breakdown, for checking move generation against a
//! reference engine.
//!
//! Usage:
//!   cargo run --release --example perft_divide -p chess_core -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 4 from the starting position
//!   cargo run --release --example perft_divide -p chess_core
//!
//!   # Kiwipete at depth 3
//!   cargo run --release --example perft_divide -p chess_core -- 3 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_core::{GameState, STARTPOS_FEN, divide};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let fen = args.get(2).map(String::as_str).unwrap_or(STARTPOS_FEN);

    let mut state = match GameState::from_fen(fen) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Invalid position: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Position: {fen}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let split = divide(&mut state, depth);
    let elapsed = start.elapsed();

    let mut nodes = 0u64;
    for (mv, n) in &split {
        println!("{mv}: {n}");
        nodes += n;
    }

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!();
    println!("Moves: {}", split.len());
    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
    ExitCode::SUCCESS
}
