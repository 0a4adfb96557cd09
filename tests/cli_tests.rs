//! CLI surface tests

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    TestWorkspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    TestWorkspace::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_fails() {
    TestWorkspace::new().cmd().assert().failure();
}

#[test]
fn test_completions_bash() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_ac"));
}

#[test]
fn test_completions_unknown_shell() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let workspace = TestWorkspace::with_source();

    workspace
        .copy(&["claude", "--merge", "skip", "-vv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reconciling"))
        .stdout(predicate::str::contains("reconciling").not());
}

#[test]
fn test_log_env_overrides_verbosity() {
    let workspace = TestWorkspace::with_source();

    workspace
        .copy(&["claude", "--merge", "skip"])
        .env("AC_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("reconciling"));
}
