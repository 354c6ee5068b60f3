//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("thermolog").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("thermolog").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--secret-key"))
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--index-path"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("thermolog").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-name"));
}

#[test]
fn test_serve_refuses_empty_secret() {
    let mut cmd = Command::cargo_bin("thermolog").unwrap();
    cmd.arg("serve")
        .env_remove("APP_SECRET_KEY")
        .current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("secret key cannot be empty"));
}
