use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_rutcheck_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("rutcheck")
}

#[test]
fn test_query_command_help() {
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("query").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Run a single lookup"))
        .stdout(predicate::str::contains("--chrome-path"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--visible"))
        .stdout(predicate::str::contains("--off-screen"));
}

#[test]
fn test_query_requires_a_rut() {
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("query");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<RUT>"));
}

#[test]
fn test_query_fails_without_chrome() {
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("query")
        .arg("12345678-9")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}

#[test]
fn test_query_rejects_malformed_url() {
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("query")
        .arg("12345678-9")
        .arg("--url")
        .arg("not a url")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid portal URL"));
}

#[test]
fn test_query_flags_parse_together() {
    // Flags should parse even when the lookup itself cannot run
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("query")
        .arg("12345678-9")
        .arg("--visible")
        .arg("--off-screen")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert().failure();
}
