//! The one-shot `add` command, run as a real process
//!
//! Each run gets its own home, config and data directories so no user
//! config or log file is touched.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_projectboard"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run projectboard")
}

/// `--json` output stays parseable even with `-v`
#[test]
fn test_verbose_json_stdout_is_pure_json() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        &["-v", "add", "-t", "T", "-d", "long enough desc", "-p", "3", "--json"],
    );

    assert!(
        output.status.success(),
        "expected zero exit (stderr={})",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value[0]["title"], "T");
    assert_eq!(value[0]["people"], 3);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Verbose mode enabled"));
}

/// Text output lists both panels
#[test]
fn test_add_prints_panels() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        &["add", "-t", "Build API", "-d", "Design and build the REST API", "-p", "1"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ACTIVE PROJECTS (1)"));
    assert!(stdout.contains("1 person assigned"));
    assert!(stdout.contains("FINISHED PROJECTS (0)"));
}

/// Rejected input exits non-zero with the alert message and prints nothing
#[test]
fn test_add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["add", "-t", "T", "-d", "abc", "-p", "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid input, please try again!"));
}
