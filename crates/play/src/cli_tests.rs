use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_arguments() {
    assert_eq!(CliArgs::parse(&[]).unwrap(), CliArgs::default());
}

#[test]
fn test_all_flags() {
    let cli = CliArgs::parse(&args(&[
        "--config",
        "my.toml",
        "--engine",
        "/usr/bin/stockfish",
        "--side",
        "Black",
        "--fen",
        "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
        "--json",
    ]))
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    assert_eq!(cli.engine, Some(PathBuf::from("/usr/bin/stockfish")));
    assert_eq!(cli.side, Some(Color::Black));
    assert_eq!(cli.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
    assert!(cli.json);
    assert!(!cli.help);
}

#[test]
fn test_missing_value_and_unknown_flag() {
    assert!(CliArgs::parse(&args(&["--engine"])).is_err());
    assert!(CliArgs::parse(&args(&["--side", "green"])).is_err());
    assert!(CliArgs::parse(&args(&["--depth", "3"])).is_err());
}

#[test]
fn test_flags_override_config() {
    let mut config = PlayConfig::default();
    config.engine.path = Some(PathBuf::from("from-file"));
    let cli = CliArgs::parse(&args(&["-e", "from-flag", "-s", "b"])).unwrap();
    cli.apply(&mut config);
    assert_eq!(config.engine.path, Some(PathBuf::from("from-flag")));
    assert_eq!(config.human_side, Color::Black);
    assert_eq!(config.start_fen, None);
}
