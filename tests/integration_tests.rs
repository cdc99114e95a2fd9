use std::process::Command;

/// Integration tests for the repograb CLI
/// These tests run the actual binary and verify its behavior

#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Verify help lists the supported flags
    assert!(stdout.contains("--username"));
    assert!(stdout.contains("--dest"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repograb"));
}
