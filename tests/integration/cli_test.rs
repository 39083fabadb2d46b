//! Binary-level CLI tests.
//!
//! These never run the animation itself (the test environment has no
//! TTY); they cover the flag surface and the failure paths around it.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn gridfall() -> Command {
    Command::cargo_bin("gridfall").unwrap()
}

#[test]
fn help_lists_the_flags() {
    gridfall()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-splash"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--palette"));
}

#[test]
fn version_prints_and_exits() {
    gridfall()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gridfall"));
}

#[test]
fn no_splash_bypasses_the_animation() {
    gridfall().arg("--no-splash").assert().success();
}

#[test]
fn refuses_to_animate_without_a_tty() {
    gridfall()
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn unknown_palette_is_rejected_with_the_valid_names() {
    gridfall()
        .args(["--no-splash", "--palette", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown palette"))
        .stderr(predicate::str::contains("midnight"));
}

#[test]
fn known_palette_is_accepted() {
    gridfall()
        .args(["--no-splash", "--palette", "phosphor"])
        .assert()
        .success();
}

#[test]
fn missing_config_file_is_an_error() {
    gridfall()
        .args(["--no-splash", "--config", "/nonexistent/gridfall.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn valid_config_file_is_accepted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hold_ticks = 3").unwrap();
    writeln!(file, "background = \"#101010\"").unwrap();

    gridfall()
        .args(["--no-splash", "--config"])
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn malformed_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "background = \"not-a-color\"").unwrap();

    gridfall()
        .args(["--no-splash", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn print_config_emits_the_effective_toml() {
    gridfall()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tick_period_ms"))
        .stdout(predicate::str::contains("glitch_alphabet"));
}

#[test]
fn print_config_reflects_the_chosen_palette() {
    gridfall()
        .args(["--print-config", "--palette", "phosphor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#5af78e"));
}

#[test]
fn init_config_creates_the_default_file() {
    let dir = tempfile::tempdir().unwrap();
    gridfall()
        .arg("--init-config")
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_are_generated_for_bash() {
    gridfall()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gridfall"));
}
