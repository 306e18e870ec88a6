//! Integration tests for the current-temp binary
//!
//! These only exercise paths that end before any network request.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_current-temp"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CURRENT_TEMP_CONFIG")
        // keep a developer's own config file out of the run
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start current-temp");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for current-temp")
}

/// Test that help describes the tool
#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("current temperature for a US zip code"));
    assert!(stdout.contains("--zip"));
    assert!(stdout.contains("--config"));
}

/// Invalid lines are answered with diagnostics and a re-prompt until input ends
#[test]
fn test_prompt_reprompts_then_fails_on_eof() {
    let output = run_cli(&[], "abcde\n123\n");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("---Check the temperature of your area---\nPlease enter a zip code:"));
    assert!(stdout.contains("Input must only contain integers..."));
    assert!(stdout.contains("Input must contain 5 digits..."));
    assert_eq!(stdout.matches("Error..Please enter a valid zip code: ").count(), 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Reading from the terminal failed"));
}

/// An invalid --zip is rejected without prompting
#[test]
fn test_invalid_zip_flag() {
    let output = run_cli(&["--zip", "9021"], "");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
    assert_eq!(stderr.matches("Input must contain 5 digits...").count(), 1);
}

/// A broken config file stops the run before anything else
#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[http]\non_error = \"shrug\"").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let output = run_cli(&["--config", &path, "--zip", "90210"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

/// A --config path that does not exist is an error, not a silent fallback
#[test]
fn test_missing_config_file() {
    let output = run_cli(
        &["--config", "/nonexistent/current-temp.toml", "--zip", "90210"],
        "",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
    assert!(stderr.contains("/nonexistent/current-temp.toml"));
}

/// The shipped sample config loads cleanly
#[test]
fn test_sample_config_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
    let output = run_cli(&["--config", path, "--zip", "abcde"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Failed to load configuration"));
    assert!(stderr.contains("Input must only contain integers..."));
}
