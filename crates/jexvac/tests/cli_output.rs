//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::Command;

#[test]
fn test_help_describes_dry_run() {
    let output = Command::new(env!("CARGO_BIN_EXE_jexvac"))
        .arg("--help")
        .output()
        .expect("Failed to execute 'jexvac --help'");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--confirm"), "got: {}", stdout);
    assert!(stdout.contains("--test-del-1"), "got: {}", stdout);
}

#[test]
fn test_archive_argument_required() {
    let output = Command::new(env!("CARGO_BIN_EXE_jexvac"))
        .output()
        .expect("Failed to execute 'jexvac'");

    assert!(!output.status.success());
}

/// Explicit port and token mean no network traffic happens before the
/// archive is opened, so a missing archive fails deterministically.
#[test]
fn test_missing_archive_fails_with_message() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_jexvac"))
        .current_dir(temp_dir.path())
        .args(["missing.jex", "--port", "1", "--token", "T"])
        .output()
        .expect("Failed to execute jexvac");

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to open archive 'missing.jex'"),
        "Expected archive error in stderr, got: {}",
        stderr
    );
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_emits_json_logs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_jexvac"))
        .current_dir(temp_dir.path())
        .args(["-v", "missing.jex", "--port", "1", "--token", "T"])
        .output()
        .expect("Failed to execute jexvac");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""event":"core.app.startup_completed""#),
        "Verbose mode should emit startup event, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_project_config_warns() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".jexvac");
    std::fs::create_dir_all(&config_dir).expect("Failed to create .jexvac dir");
    std::fs::write(config_dir.join("config.toml"), "invalid toml [[[")
        .expect("Failed to write invalid config");

    let output = Command::new(env!("CARGO_BIN_EXE_jexvac"))
        .current_dir(temp_dir.path())
        .args(["missing.jex", "--port", "1", "--token", "T"])
        .output()
        .expect("Failed to execute jexvac");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
}
