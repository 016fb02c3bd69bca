use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let state = GameState::new();

    let mv = engine.pick(&state);

    assert!(mv.is_some());
    assert!(generate_legal(&state).contains(&mv.unwrap()));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let state =
        GameState::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert!(engine.pick(&state).is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert!(engine.pick(&state).is_none());
}

#[test]
fn seeded_engines_agree() {
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);
    let mut state = GameState::new();
    for _ in 0..20 {
        let mv = a.pick(&state);
        assert_eq!(mv, b.pick(&state));
        match mv {
            Some(mv) => state.apply_move(mv),
            None => break,
        }
    }
}

#[test]
fn random_engine_only_returns_the_forced_move() {
    // 1. e4 f5 2. Qh5+: g7-g6 is the only reply.
    let mut engine = RandomEngine::with_seed(7);
    let state =
        GameState::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2")
            .unwrap();
    for _ in 0..5 {
        assert_eq!(engine.pick(&state).map(|m| m.to_uci()), Some("g7g6".to_string()));
    }
}
