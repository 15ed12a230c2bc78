//! End-to-end tests of the clitext binary, driven through stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn clitext() -> Command {
    Command::cargo_bin("clitext-cli").unwrap()
}

#[test]
fn test_integer_retries_until_valid() {
    clitext()
        .args(["--kind", "int", "--message", "How many?"])
        .write_stdin("4x2\n42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid entry. Try again"))
        .stdout(predicate::str::ends_with("42\n"));
}

#[test]
fn test_cancel_exits_with_one() {
    clitext()
        .args(["--kind", "int"])
        .write_stdin("CANCEL\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cancelled"));
}

#[test]
fn test_cancel_refused_when_disabled() {
    clitext()
        .args(["--kind", "bool", "--no-cancel"])
        .write_stdin("cancel\nyup\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid entry. try again"))
        .stdout(predicate::str::ends_with("true\n"));
}

#[test]
fn test_float_adds_fraction_to_negative_whole() {
    clitext()
        .args(["--kind", "float"])
        .write_stdin("-3.5\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("-2.5\n"));
}

#[test]
fn test_default_help_for_bool() {
    clitext()
        .args(["--kind", "bool", "--default-help"])
        .write_stdin("?help?\nNope\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("enter one of the following: ["))
        .stdout(predicate::str::ends_with("false\n"));
}

#[test]
fn test_missing_help_notice() {
    clitext()
        .args(["--kind", "int"])
        .write_stdin("?h?\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Help message not found."));
}

#[test]
fn test_string_keeps_escapes_when_disabled() {
    clitext()
        .args(["--no-newlines"])
        .write_stdin("a\\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("a\\nb\n"));
}

#[test]
fn test_closed_input_fails() {
    clitext()
        .args(["--kind", "int", "--no-cancel"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input stream closed"));
}

#[test]
fn test_unknown_kind_rejected() {
    clitext().args(["--kind", "date"]).assert().failure();
}
