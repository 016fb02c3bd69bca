use super::*;

#[test]
fn test_report_of_new_game() {
    let report = GameState::new().report();
    assert_eq!(report.ranks[0], "rnbqkbnr");
    assert_eq!(report.ranks[7], "RNBQKBNR");
    assert_eq!(report.ranks[4], "........");
    assert_eq!(report.side_to_move, Color::White);
    assert_eq!(report.legal_moves.len(), 20);
    assert_eq!(report.status, GameStatus::Ongoing);
    assert_eq!(report.repetition_count, 1);
    assert!(!report.in_check);
    assert!(report.history.is_empty());
}

#[test]
fn test_report_serializes_as_plain_json() {
    let mut state = GameState::new();
    state.apply_uci("e2e4").unwrap();
    let report = state.report();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["side_to_move"], "black");
    assert_eq!(json["en_passant"], "e3");
    assert_eq!(json["status"]["kind"], "ongoing");
    assert_eq!(json["castling"]["wk"], true);
    assert_eq!(json["history"][0], "e2e4");

    let back: PositionReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_report_of_mate() {
    let state =
        GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    let report = state.report();
    assert!(report.in_check);
    assert!(report.legal_moves.is_empty());
    assert_eq!(
        report.status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
}
