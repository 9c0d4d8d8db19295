//! Tests for play configuration loading.

use std::io::Write;
use strictly_minimax::{PlayConfig, Player};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file("human = \"o\"\nlog_filter = \"strictly_minimax=debug\"\n");
    let config = PlayConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.human(), Some(Player::O));
    assert_eq!(config.log_filter(), "strictly_minimax=debug");
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = config_file("");
    let config = PlayConfig::from_file(file.path()).unwrap();

    assert_eq!(config, PlayConfig::default());
    assert_eq!(*config.human(), None);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_invalid_toml_is_rejected() {
    let file = config_file("human = \"z\"\n");
    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_side_overrides_file() {
    let config = PlayConfig::new(Some(Player::X));
    assert_eq!(*config.clone().with_human(Some(Player::O)).human(), Some(Player::O));
    assert_eq!(*config.with_human(None).human(), Some(Player::X));
}
