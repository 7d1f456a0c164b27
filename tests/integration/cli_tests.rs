//! Integration tests for the CLI surface: argument parsing and
//! configuration loading.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn stevedore() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stevedore"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_help_flag_shows_usage() {
    stevedore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    stevedore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stevedore"));
}

// --- Configuration loading tests ---

#[test]
fn test_cli_missing_config_flag_is_a_usage_error() {
    stevedore()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_cli_unreadable_config_fails() {
    stevedore()
        .arg("--config")
        .arg("/definitely/not/here.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_cli_malformed_json_config_fails_with_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{ not json").expect("write config");

    stevedore()
        .arg("--config")
        .arg(&config)
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse JSON input"));
}
