// ABOUTME: Integration tests for the portside CLI commands.
// ABOUTME: Validates --help output and init command behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn portside_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("portside"))
}

#[test]
fn help_shows_commands() {
    portside_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("endpoints"))
        .stdout(predicate::str::contains("ps"))
        .stdout(predicate::str::contains("logs"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("portside.yml");

    portside_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "portside.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("url:"), "Config should have url field");
    assert!(
        content.contains("api_key:"),
        "Config should have api_key field"
    );
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("portside.yml");

    fs::write(&config_path, "existing: config").unwrap();

    portside_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn ps_without_config_reports_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    portside_cmd()
        .current_dir(temp_dir.path())
        .arg("ps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}
