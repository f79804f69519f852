//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal UI starts are exercised.

mod common;

use common::temp_config;
use std::process::Command;

fn cardviewer_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cardviewer"));
    cmd.env_remove("CARDVIEWER_ENV").env_remove("CARDVIEWER_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    let output = cardviewer_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--deck", "--style", "--env", "--api-url", "--config", "--no-speech"] {
        assert!(stdout.contains(flag), "missing {} in:\n{}", flag, stdout);
    }
}

#[test]
fn test_invalid_deck_is_rejected_by_clap() {
    let output = cardviewer_cmd()
        .arg("--deck")
        .arg("quizzes")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {}", stderr);
    assert!(stderr.contains("flashcards"));
}

#[test]
fn test_broken_config_exits_with_one() {
    let (_dir, path) = temp_config("[ui\n");
    let output = cardviewer_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Failed to parse config file"), "got: {}", stderr);
}

#[test]
fn test_bad_api_url_exits_with_one() {
    let (_dir, path) = temp_config("");
    let output = cardviewer_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--api-url")
        .arg("ftp://cards")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--api-url"), "got: {}", stderr);
}
