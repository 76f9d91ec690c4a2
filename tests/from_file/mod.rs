//! Integration tests running the crate binary on a file: the full E2E path.

use std::path::PathBuf;
use std::process::Command;

#[test]
fn mixed_commands() {
    let input_path = fixture_path("mixed_commands.csv");
    let expected = std::fs::read_to_string(fixture_path("mixed_commands_expected.csv"))
        .expect("failed to read expected output fixture");

    let output = Command::new(env!("CARGO_BIN_EXE_point-wallet"))
        .arg(&input_path)
        .env("WALLET_WORKERS", "4")
        .output()
        .expect("failed to execute binary");

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("binary output was not valid UTF-8");
    assert_eq!(stdout.trim_end(), expected.trim_end());
}

#[test]
fn missing_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_point-wallet"))
        .output()
        .expect("failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn invalid_configuration_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_point-wallet"))
        .arg(fixture_path("mixed_commands.csv"))
        .env("WALLET_MAX_BALANCE", "plenty")
        .output()
        .expect("failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("WALLET_MAX_BALANCE"));
}

/// Returns the absolute path to a test fixture file in `tests/data/`.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
