//! End-to-end tests for the `config` subcommands.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Invoke the binary and return (stdout, stderr, exit code).
fn run_cli(config: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pomotimer"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("POMOTIMER_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

#[test]
fn path_prints_configured_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.json");
    let (stdout, _, code) = run_cli(&config, &["config", "path"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), config.display().to_string());
}

#[test]
fn show_prints_defaults_when_missing() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let (stdout, _, code) = run_cli(&config, &["config", "show"]);
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["work_time"], 50);
    assert_eq!(json["break_time"], 10);
    assert_eq!(json["button_color"], "Default");
    assert_eq!(json["theme_color"], "System");
    assert!(!config.exists());
}

#[test]
fn reset_overwrites_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{ corrupt").unwrap();

    let (_, stderr, code) = run_cli(&config, &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("falling back to defaults"));

    let (stdout, _, code) = run_cli(&config, &["config", "reset"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("reset to defaults"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["colors"]["Default"], "#1f538d");
}

#[test]
fn timer_flags_before_subcommand_are_accepted() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let (stdout, stderr, code) = run_cli(&config, &["--mute", "--no-quotes", "config", "path"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout.trim(), config.display().to_string());
}
