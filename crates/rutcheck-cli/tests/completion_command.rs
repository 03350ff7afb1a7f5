use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_rutcheck_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("rutcheck")
}

#[test]
fn test_completion_bash() {
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("completion").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rutcheck"));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    let mut cmd = Command::new(get_rutcheck_bin());
    cmd.arg("completion").arg("tcsh");

    cmd.assert().failure();
}
