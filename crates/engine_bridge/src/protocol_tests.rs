use super::*;

#[test]
fn test_command_rendering() {
    assert_eq!(Command::Uci.to_string(), "uci");
    assert_eq!(Command::IsReady.to_string(), "isready");
    assert_eq!(Command::UciNewGame.to_string(), "ucinewgame");
    assert_eq!(Command::Quit.to_string(), "quit");
    assert_eq!(
        Command::SetOption {
            name: "Skill Level".into(),
            value: "5".into()
        }
        .to_string(),
        "setoption name Skill Level value 5"
    );
}

#[test]
fn test_position_commands() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    assert_eq!(
        Command::PositionFen {
            fen: fen.into(),
            moves: vec![]
        }
        .to_string(),
        format!("position fen {}", fen)
    );
    assert_eq!(
        Command::PositionStartpos { moves: vec![] }.to_string(),
        "position startpos"
    );
    assert_eq!(
        Command::PositionStartpos {
            moves: vec!["e2e4".into(), "e7e5".into()]
        }
        .to_string(),
        "position startpos moves e2e4 e7e5"
    );
}

#[test]
fn test_go_commands() {
    assert_eq!(Command::Go(SearchLimit::Depth(12)).to_string(), "go depth 12");
    assert_eq!(Command::Go(SearchLimit::MovetimeMs(250)).to_string(), "go movetime 250");
    assert_eq!(
        Command::Go(SearchLimit::Clock {
            wtime_ms: 60000,
            btime_ms: 59000,
            winc_ms: 1000,
            binc_ms: 1000
        })
        .to_string(),
        "go wtime 60000 btime 59000 winc 1000 binc 1000"
    );
}

#[test]
fn test_parse_banner_and_handshake() {
    assert_eq!(
        EngineLine::parse("id name Stockfish 16.1"),
        EngineLine::IdName("Stockfish 16.1".into())
    );
    assert_eq!(
        EngineLine::parse("id author the Stockfish developers"),
        EngineLine::IdAuthor("the Stockfish developers".into())
    );
    assert_eq!(EngineLine::parse("uciok\r"), EngineLine::UciOk);
    assert_eq!(EngineLine::parse("  readyok  "), EngineLine::ReadyOk);
}

#[test]
fn test_parse_option_names() {
    assert_eq!(
        EngineLine::parse("option name Hash type spin default 16 min 1 max 33554432"),
        EngineLine::Option("Hash".into())
    );
    assert_eq!(
        EngineLine::parse("option name Skill Level type spin default 20 min 0 max 20"),
        EngineLine::Option("Skill Level".into())
    );
    assert_eq!(
        EngineLine::parse("option name UCI_LimitStrength type check default false"),
        EngineLine::Option("UCI_LimitStrength".into())
    );
}

#[test]
fn test_parse_bestmove() {
    assert_eq!(
        EngineLine::parse("bestmove e2e4 ponder e7e5"),
        EngineLine::BestMove(BestMove::Move {
            uci: "e2e4".into(),
            ponder: Some("e7e5".into())
        })
    );
    assert_eq!(
        EngineLine::parse("bestmove a7a8q"),
        EngineLine::BestMove(BestMove::Move {
            uci: "a7a8q".into(),
            ponder: None
        })
    );
    assert_eq!(EngineLine::parse("bestmove (none)"), EngineLine::BestMove(BestMove::NoMove));
    assert_eq!(EngineLine::parse("bestmove 0000"), EngineLine::BestMove(BestMove::NoMove));
}

#[test]
fn test_parse_info_and_other() {
    assert_eq!(
        EngineLine::parse("info depth 10 score cp 34 pv e2e4"),
        EngineLine::Info("depth 10 score cp 34 pv e2e4".into())
    );
    assert_eq!(
        EngineLine::parse("Stockfish 16 by the Stockfish developers"),
        EngineLine::Other("Stockfish 16 by the Stockfish developers".into())
    );
    assert_eq!(EngineLine::parse(""), EngineLine::Other(String::new()));
    assert_eq!(EngineLine::parse("id"), EngineLine::Other("id".into()));
}
