//! chess_play CLI
//!
//! Play a game in the terminal against a UCI engine or the random bot.

use std::env;

use anyhow::Result;
use chess_play::cli::USAGE;
use chess_play::{CliArgs, Opponent, PlayConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = PlayConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    init_logging(&config.log_level);

    let state = config.initial_state()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state.report())?);
        return Ok(());
    }

    let mut opponent = Opponent::from_config(&config.engine).await?;
    opponent.new_game().await?;
    info!(opponent = %opponent.name(), human = %config.human_side, "starting game");
    println!(
        "You play {} against {}. Type 'help' for commands.",
        config.human_side,
        opponent.name()
    );

    let mut session = Session::new(state, config.human_side, config.claim_draws);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = session.run(&mut opponent, stdin, &mut stdout).await;

    opponent.shutdown().await?;
    let end = outcome?;
    info!(%end, moves = session.state().history().len(), "session closed");
    Ok(())
}
