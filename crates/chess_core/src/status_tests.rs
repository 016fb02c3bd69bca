use super::*;

#[test]
fn test_new_game_is_ongoing() {
    assert_eq!(GameState::new().status(), GameStatus::Ongoing);
    assert!(!GameStatus::Ongoing.is_terminal());
}

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        state.apply_uci(mv).unwrap();
    }
    assert!(state.in_check());
    assert_eq!(
        state.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(state.status().is_terminal());
}

#[test]
fn test_stalemate() {
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(state.status(), GameStatus::Stalemate);
}

#[test]
fn test_threefold_by_knight_shuffle() {
    let mut state = GameState::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    for mv in shuffle.iter().chain(shuffle.iter()) {
        assert_eq!(state.status(), GameStatus::Ongoing);
        state.apply_uci(mv).unwrap();
    }
    assert_eq!(state.repetition_count(), 3);
    assert_eq!(state.status(), GameStatus::ThreefoldRepetition);
}

#[test]
fn test_fifty_move_rule_is_claim_only() {
    let state = GameState::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").unwrap();
    assert!(state.is_fifty_move_draw());
    assert_eq!(state.status(), GameStatus::Ongoing);

    let state = GameState::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 99 60").unwrap();
    assert!(!state.is_fifty_move_draw());
}

#[test]
fn test_insufficient_material() {
    let cases = [
        ("8/8/8/4k3/8/4K3/8/8 w - - 0 1", true),
        ("8/8/8/4k3/8/4KB2/8/8 w - - 0 1", true),
        ("8/8/8/4k3/8/4KN2/8/8 w - - 0 1", true),
        // Bishops on c8 and f1: both light squares.
        ("2b5/8/8/4k3/8/4K3/8/5B2 w - - 0 1", true),
        // Bishops on c8 and c1: opposite colours.
        ("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1", false),
        ("8/8/8/4k3/8/4KNN1/8/8 w - - 0 1", false),
        ("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", false),
        ("8/8/8/4k3/8/4K3/8/R7 w - - 0 1", false),
    ];
    for (fen, expected) in cases {
        let state = GameState::from_fen(fen).unwrap();
        assert_eq!(state.is_insufficient_material(), expected, "{fen}");
    }
}
