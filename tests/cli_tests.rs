//! Integration tests for the argkit binary
//!
//! These run the compiled binary and check what it reports for a set of
//! command lines:
//! - Human output, with and without `--color`
//! - JSONL records
//! - The positional argument and flag clusters

use assert_cmd::Command;
use predicates::prelude::*;

fn argkit() -> Command {
    Command::cargo_bin("argkit").unwrap()
}

#[test]
fn test_no_arguments_prints_nothing() {
    argkit().assert().success().stdout("");
}

#[test]
fn test_human_output() {
    argkit()
        .args(["--name=value", "-p", "8080"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name         value"))
        .stdout(predicate::str::contains("p            8080"))
        .stdout(predicate::str::contains("__default__  8080"));
}

#[test]
fn test_human_output_without_color_has_no_escapes() {
    argkit()
        .args(["-abc"])
        .assert()
        .success()
        .stdout("a  true\nb  true\nc  true\n");
}

#[test]
fn test_color_flag_enables_styling() {
    argkit()
        .args(["--color", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1;36mcolor\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[0;32mtrue\x1b[0m"));
}

#[test]
fn test_jsonl_output() {
    let output = argkit()
        .args(["build", "--jsonl", "--release"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["name"], "__default__");
    assert_eq!(records[0]["value"], "build");
    assert_eq!(records[1]["name"], "jsonl");
    assert_eq!(records[1]["value"], true);
    assert_eq!(records[2]["name"], "release");

    let summary = &records[3];
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["arguments"], 3);
    assert_eq!(summary["flags"], 2);
    assert_eq!(summary["positional"], "build");
}

#[test]
fn test_program_path_is_not_positional() {
    argkit()
        .args(["--jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""positional":null"#));
}

#[test]
fn test_unusual_tokens_never_fail() {
    argkit()
        .args(["-", "--", "---", "--=", "--UPPER=x", ""])
        .assert()
        .success();
}
