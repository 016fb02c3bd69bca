use super::*;

#[test]
fn test_empty_table_uses_defaults() {
    let config: EngineConfig = toml::from_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.hash_mb, 128);
    assert_eq!(config.limit, SearchLimit::MovetimeMs(500));
}

#[test]
fn test_full_table() {
    let config: EngineConfig = toml::from_str(
        r#"
        path = "/usr/local/bin/stockfish"
        skill_level = 8
        elo = 1500
        threads = 2
        hash_mb = 64
        limit = { depth = 12 }
        move_timeout_ms = 10000
        "#,
    )
    .unwrap();
    assert_eq!(config.path.as_deref(), Some(std::path::Path::new("/usr/local/bin/stockfish")));
    assert_eq!(config.skill_level, Some(8));
    assert_eq!(config.elo, Some(1500));
    assert_eq!(config.threads, Some(2));
    assert_eq!(config.hash_mb, 64);
    assert_eq!(config.limit, SearchLimit::Depth(12));
    assert_eq!(config.move_timeout_ms, 10_000);
    assert_eq!(config.handshake_timeout_ms, 5_000);
}

#[test]
fn test_clock_limit_increments_default_to_zero() {
    let config: EngineConfig =
        toml::from_str("limit = { clock = { wtime_ms = 60000, btime_ms = 55000 } }").unwrap();
    assert_eq!(
        config.limit,
        SearchLimit::Clock {
            wtime_ms: 60_000,
            btime_ms: 55_000,
            winc_ms: 0,
            binc_ms: 0,
        }
    );
}
