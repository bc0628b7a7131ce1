//! Integration tests for the non-interactive surface of the `surveyor` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's real settings.
fn surveyor(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("surveyor").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("SURVEYOR_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    surveyor(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("features"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    surveyor(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn features_lists_cli_features_and_service_types() {
    let home = TempDir::new().unwrap();
    surveyor(&home)
        .arg("features")
        .assert()
        .success()
        .stdout(predicate::str::contains("  auth\n"))
        .stdout(predicate::str::contains("  database\n"))
        .stdout(predicate::str::contains("  tracker\n"))
        .stdout(predicate::str::contains("  gateway\n"))
        .stdout(predicate::str::contains("  grpc\n"))
        .stdout(predicate::str::contains("health").not());
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    surveyor(&home).arg("deploy").assert().code(2);
}

#[test]
fn unsupported_kind_is_rejected_before_prompting() {
    let home = TempDir::new().unwrap();
    surveyor(&home)
        .args(["init", "--kind", "soap"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported service type 'soap'"));
}

#[test]
fn init_needs_a_terminal() {
    let home = TempDir::new().unwrap();
    surveyor(&home)
        .args(["init", "--kind", "grpc"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn missing_config_file() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.toml");
    surveyor(&home)
        .arg("--config")
        .arg(&missing)
        .arg("features")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn invalid_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[ui\ntheme = 1\n").unwrap();
    surveyor(&home)
        .arg("--config")
        .arg(&path)
        .arg("features")
        .assert()
        .code(4);
}

#[test]
fn settings_in_home_are_picked_up() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".mikros");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[ui\n").unwrap();

    // a broken default file is reported, not ignored
    surveyor(&home).arg("features").assert().code(4);

    fs::write(dir.join("config.toml"), "[ui]\naccessible = true\n").unwrap();
    surveyor(&home).arg("features").assert().success();
}
