use super::*;

fn reply(uci: &str) -> BestMove {
    BestMove::Move {
        uci: uci.to_string(),
        ponder: None,
    }
}

#[test]
fn test_no_move_resolves_to_none() {
    let state = GameState::new();
    assert_eq!(resolve(&state, &BestMove::NoMove).unwrap(), None);
}

#[test]
fn test_plain_move() {
    let state = GameState::new();
    let mv = resolve(&state, &reply("g1f3")).unwrap().unwrap();
    assert_eq!(mv.to_uci(), "g1f3");
    assert!(!mv.is_castle && !mv.is_en_passant);
}

#[test]
fn test_flags_come_from_the_generator() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castle = resolve(&state, &reply("e1g1")).unwrap().unwrap();
    assert!(castle.is_castle);

    let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep = resolve(&state, &reply("e5d6")).unwrap().unwrap();
    assert!(ep.is_en_passant);
}

#[test]
fn test_malformed_reply() {
    let state = GameState::new();
    let err = resolve(&state, &reply("e2")).unwrap_err();
    assert!(matches!(err, BridgeError::BadMove { ref text, .. } if text == "e2"));
}

#[test]
fn test_illegal_reply() {
    let state = GameState::new();
    let err = resolve(&state, &reply("e2e5")).unwrap_err();
    assert!(matches!(err, BridgeError::IllegalMove(ref m) if m == "e2e5"));
}
