use super::*;
use chess_core::PositionReport;
use random_engine::RandomEngine;

fn bot() -> Opponent {
    Opponent::Random(RandomEngine::with_seed(3))
}

async fn play(session: &mut Session, script: &str) -> (GameEnd, String) {
    let mut opponent = bot();
    let mut out = Vec::new();
    let end = session
        .run(&mut opponent, script.as_bytes(), &mut out)
        .await
        .unwrap();
    (end, String::from_utf8(out).unwrap())
}

#[test]
fn test_input_parsing() {
    assert_eq!(Input::parse("   "), None);
    assert_eq!(Input::parse("e2e4"), Some(Input::Move("e2e4".into())));
    assert_eq!(Input::parse("moves"), Some(Input::Moves(None)));
    assert_eq!(Input::parse("moves g1"), Some(Input::Moves(Some("g1".into()))));
    assert_eq!(Input::parse("UNDO"), Some(Input::Undo));
    assert_eq!(Input::parse("quit"), Some(Input::Quit));
}

#[test]
fn test_handle_commands() {
    let mut session = Session::new(GameState::new(), Color::White, true);
    let mut out = Vec::new();

    session.handle(Input::Moves(Some("g1".into())), &mut out).unwrap();
    session.handle(Input::Fen, &mut out).unwrap();
    session.handle(Input::Move("e2e5".into()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("g1f3 g1h3"));
    assert!(text.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    assert!(text.contains("Illegal move 'e2e5'"));
    assert_eq!(session.state().undo_depth(), 0);
}

#[test]
fn test_json_command_prints_report() {
    let mut session = Session::new(GameState::new(), Color::White, true);
    session.handle(Input::Move("d2d4".into()), &mut Vec::new()).unwrap();

    let mut out = Vec::new();
    session.handle(Input::Json, &mut out).unwrap();
    let report: PositionReport = serde_json::from_slice(&out).unwrap();
    assert_eq!(report.history, vec!["d2d4"]);
    assert_eq!(report.side_to_move, Color::Black);
    assert_eq!(report.en_passant.as_deref(), Some("d3"));
}

#[tokio::test]
async fn test_bot_replies_and_undo_takes_back_both() {
    let mut session = Session::new(GameState::new(), Color::White, true);
    let (end, _) = play(&mut session, "e2e4\n").await;
    assert_eq!(end, GameEnd::Quit);
    assert_eq!(session.state().history().len(), 2);
    assert_eq!(session.state().side_to_move(), Color::White);

    let (end, text) = play(&mut session, "undo\nquit\n").await;
    assert_eq!(end, GameEnd::Quit);
    assert!(!text.contains("Nothing to undo"));
    assert_eq!(session.state(), &GameState::new());
}

#[tokio::test]
async fn test_bot_moves_first_when_human_is_black() {
    let mut session = Session::new(GameState::new(), Color::Black, true);
    let (end, text) = play(&mut session, "quit\n").await;
    assert_eq!(end, GameEnd::Quit);
    assert_eq!(session.state().history().len(), 1);
    assert!(text.contains("Random v1.0 plays"));
    assert!(text.contains("Black> "));
}

#[tokio::test]
async fn test_nothing_to_undo() {
    let mut session = Session::new(GameState::new(), Color::White, true);
    let (_, text) = play(&mut session, "undo\nquit\n").await;
    assert!(text.contains("Nothing to undo"));
}

#[tokio::test]
async fn test_human_delivers_mate() {
    let state =
        GameState::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
            .unwrap();
    let mut session = Session::new(state, Color::White, true);
    let (end, text) = play(&mut session, "h5f7\n").await;
    assert_eq!(
        end,
        GameEnd::Finished(GameStatus::Checkmate {
            winner: Color::White
        })
    );
    assert!(text.contains("checkmate, White wins"));
}

#[tokio::test]
async fn test_stalemate_ends_before_the_bot_moves() {
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let mut session = Session::new(state, Color::White, true);
    let (end, _) = play(&mut session, "").await;
    assert_eq!(end, GameEnd::Finished(GameStatus::Stalemate));
}

#[tokio::test]
async fn test_claimable_draws_only_when_enabled() {
    let fen = "8/8/8/4k3/8/4K3/8/8 w - - 0 1";

    let mut claiming = Session::new(GameState::from_fen(fen).unwrap(), Color::White, true);
    let (end, _) = play(&mut claiming, "").await;
    assert_eq!(end, GameEnd::InsufficientMaterial);

    let mut playing_on = Session::new(GameState::from_fen(fen).unwrap(), Color::White, false);
    let (end, _) = play(&mut playing_on, "quit\n").await;
    assert_eq!(end, GameEnd::Quit);

    let fifty = GameState::from_fen("8/8/8/4k3/8/4K3/4P3/8 w - - 100 80").unwrap();
    let session = Session::new(fifty, Color::White, true);
    assert_eq!(session.check_end(), Some(GameEnd::FiftyMoveRule));
}
