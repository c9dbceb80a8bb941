//! Binary-level tests for argument parsing and startup validation.

mod common;

use assert_cmd::Command;
use common::git_available;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_rejects_zero_interval() {
    Command::cargo_bin("gitwatch")
        .unwrap()
        .args(["--interval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_rejects_missing_directory() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    Command::cargo_bin("gitwatch")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_rejects_directory_outside_a_repository() {
    if !git_available() {
        return;
    }
    let plain = TempDir::new().unwrap();

    Command::cargo_bin("gitwatch")
        .unwrap()
        .arg(plain.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository"));
}

#[test]
fn test_completions_print_a_script() {
    Command::cargo_bin("gitwatch")
        .unwrap()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitwatch"));
}

#[test]
fn test_help_documents_the_interval_flag() {
    Command::cargo_bin("gitwatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--interval"));
}
