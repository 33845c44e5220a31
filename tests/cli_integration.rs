#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn spacecli_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("spacecli"));
    cmd.env("SPACECLI_COLOR", "never")
        .env_remove("SPACECLI_CONFIG")
        .env_remove("SPACECLI_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn title_comes_first() {
    spacecli_cmd()
        .args(["team"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "SpaceCLI TEST\nTest & demo for SpaceCLI\n",
        ));
}

#[test]
fn team_with_value_and_flag() {
    spacecli_cmd()
        .args(["team", "--team", "Bohemians 1905", "--best"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Bohemians 1905 is the best!\n"));
}

#[test]
fn team_defaults() {
    spacecli_cmd()
        .args(["team"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Boheminas Praha 1905\n"));
}

#[test]
fn team_in_color() {
    spacecli_cmd()
        .env("SPACECLI_COLOR", "always")
        .args(["team", "--color=white:green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[42m"));
}

#[test]
fn unknown_command_lists_commands() {
    spacecli_cmd()
        .args(["nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unrecognized command \"nope\".\nAvailable commands:\n * colors\n * config\n * help\n * progress\n * team\n",
        ));
}

#[test]
fn no_command_lists_commands() {
    spacecli_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:").and(
            predicate::str::contains("Unrecognized").not(),
        ));
}

#[test]
fn help_for_team() {
    spacecli_cmd()
        .args(["help", "team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command team:"))
        .stdout(predicate::str::contains(
            "Writes football team name in color; says whether named one is the best",
        ))
        .stdout(predicate::str::contains("example: spacecli team"))
        .stdout(predicate::str::contains(
            "--team   team name (default: \"Boheminas Praha 1905\")",
        ));
}

#[test]
fn help_without_target() {
    spacecli_cmd()
        .args(["help"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("Type .*spacecli\\S* help COMMAND\n").unwrap());
}

#[test]
fn progress_reaches_completion() {
    spacecli_cmd()
        .args(["progress", "--steps=4", "--delay=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress bar test:"))
        .stdout(predicate::str::contains(
            "Testing: [########################################] 100%\n",
        ));
}

#[test]
fn progress_rejects_bad_numbers() {
    spacecli_cmd()
        .args(["progress", "--steps=many", "--delay=0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: --steps expects a whole number, got \"many\"",
        ));
}

#[test]
fn config_from_env_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("demo.toml");
    fs::write(&path, "[database]\nhost = \"localhost\"\nport = 5432\n").unwrap();

    spacecli_cmd()
        .env("SPACECLI_CONFIG", path.as_os_str())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[database]\nhost = localhost\nport = 5432\n"));
}

#[test]
fn config_missing_file() {
    let temp = TempDir::new().unwrap();

    spacecli_cmd()
        .env("SPACECLI_CONFIG", temp.path().join("absent.toml").as_os_str())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration loaded."));
}

#[test]
fn broken_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[database\n").unwrap();

    spacecli_cmd()
        .env("SPACECLI_CONFIG", path.as_os_str())
        .args(["team"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error in"));
}

#[test]
fn logging_goes_to_stderr() {
    spacecli_cmd()
        .env("SPACECLI_LOG", "info")
        .args(["nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unrecognized command"))
        .stdout(predicate::str::contains("unrecognized command").not());
}
