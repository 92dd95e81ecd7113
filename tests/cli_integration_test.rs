//! CLI-level tests driving the compiled binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn build_command_writes_database_and_reports_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("records");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a9059cbb"), "transfer(address,uint256)").unwrap();
    fs::write(input.join("deadbeef"), "frob(uint256)").unwrap();
    let output = dir.path().join("db.json");

    let result = Command::cargo_bin("sigmap")
        .unwrap()
        .args([
            "build",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("stored 1 entries"), "stdout: {stdout}");

    // The rejection diagnostic goes to stderr and names both hashes.
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("deadbeef"), "stderr: {stderr}");

    let emitted = fs::read_to_string(&output).unwrap();
    assert!(emitted.contains("\"a9059cbb\": \"transfer(address,uint256)\""));
    assert!(!emitted.contains("deadbeef"));
}

#[test]
fn build_command_fails_on_missing_input_directory() {
    let dir = TempDir::new().unwrap();

    let result = Command::cargo_bin("sigmap")
        .unwrap()
        .args([
            "build",
            "--input",
            dir.path().join("nope").to_str().unwrap(),
            "--output",
            dir.path().join("db.json").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
}

#[test]
fn selector_command_prints_known_selectors() {
    let result = Command::cargo_bin("sigmap")
        .unwrap()
        .args(["selector", "transfer(address,uint256)", "balanceOf(address)"])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("0xa9059cbb -> transfer(address,uint256)"));
    assert!(stdout.contains("0x70a08231 -> balanceOf(address)"));
}
