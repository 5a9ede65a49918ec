//! Tests for CLI argument parsing and early-exit behavior of the binary.

use clap::Parser;
use quizterm::cli::Cli;
use quizterm::config::Config;
use quizterm::trivia::InsertionMode;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn quizterm_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quizterm"))
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_help_lists_overrides() {
    let output = quizterm_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--category"));
    assert!(stdout.contains("--amount"));
    assert!(stdout.contains("--insertion"));
    assert!(stdout.contains("Open Trivia Database"));
}

#[test]
fn test_invalid_amount_exits_with_error() {
    let file = config_file("");
    let output = quizterm_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("--amount")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Config validation failed"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let output = quizterm_cmd()
        .arg("--config")
        .arg(&missing)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_unknown_insertion_rejected_by_clap() {
    let output = quizterm_cmd()
        .arg("--insertion")
        .arg("sideways")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_overrides_apply_on_top_of_file() {
    let file = config_file(
        r#"
[api]
category = 9
amount = 10

[quiz]
insertion = "uniform"
"#,
    );
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "quizterm",
        "--config",
        path,
        "--category",
        "18",
        "--insertion",
        "rounded",
    ])
    .unwrap();

    let config = cli.load_config().unwrap();
    assert_eq!(config.api.category, 18);
    assert_eq!(config.api.amount, 10);
    assert_eq!(config.quiz.insertion, InsertionMode::Rounded);
}

#[test]
fn test_no_overrides_leaves_config_untouched() {
    let cli = Cli::try_parse_from(["quizterm"]).unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
}
