//! Tests for loading match configs from disk.

use std::io::Write;
use strictly_minimax::{GameStatus, Position, Strategy};
use strictly_minimax_cli::{MatchConfig, Orchestrator};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
x_strategy = "pruned"
o_strategy = "exhaustive"
opening = "center"
"#,
    );

    let config = MatchConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.x_strategy(), Strategy::Pruned);
    assert_eq!(*config.o_strategy(), Strategy::Exhaustive);
    assert_eq!(*config.opening(), Some(Position::Center));
}

#[test]
fn test_aliases_are_accepted() {
    let file = write_config("x_strategy = \"minimax\"\no_strategy = \"alpha-beta\"\n");
    let config = MatchConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, MatchConfig::default());
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let file = write_config("x_strategy = \"greedy\"\n");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{}", err);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{}", err);
}

#[test]
fn test_loaded_config_drives_a_drawn_match() {
    let file = write_config("opening = \"top-left\"\n");
    let config = MatchConfig::from_file(file.path()).expect("valid config");

    let summary = Orchestrator::from_config(&config).run(|_| {}).expect("game runs");
    assert_eq!(summary.moves[0].position, Position::TopLeft);
    assert_eq!(summary.status, GameStatus::Draw);
}
