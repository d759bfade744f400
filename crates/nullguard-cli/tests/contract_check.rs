#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn nullguard() -> Command {
    let mut cmd = Command::cargo_bin("nullguard").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    let text = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(text.trim()).expect("stdout must be a single JSON document")
}

#[test]
fn test_check_clean_file_exits_zero() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("doc.json");
    fs::write(&doc, r#"{"a": 1, "b": [true, "x"]}"#).unwrap();

    nullguard()
        .arg("check")
        .arg(&doc)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#"{"status":"success"}"#));
}

#[test]
fn test_check_reports_paths_and_exits_one() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("doc.json");
    fs::write(&doc, r#"{"a": 1, "b": null, "c": {"d": null}}"#).unwrap();

    let output = nullguard().arg("check").arg(&doc).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v = stdout_json(&output);
    assert_eq!(v["status"], "error");
    assert_eq!(v["invalid_fields"], serde_json::json!(["b", "c.d"]));
}

#[test]
fn test_check_reads_stdin() {
    let output = nullguard()
        .args(["check", "-"])
        .write_stdin(r#"{"items": [1, null, {"x": null}]}"#)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v = stdout_json(&output);
    assert_eq!(v["invalid_fields"], serde_json::json!(["items[1]", "items[2].x"]));
}

#[test]
fn test_check_optional_flags_and_file() {
    let dir = tempdir().unwrap();
    let optional = dir.path().join("optional.yaml");
    fs::write(&optional, "- c.d\n").unwrap();

    nullguard()
        .args(["check", "--optional", "b", "--optional-file"])
        .arg(&optional)
        .write_stdin(r#"{"a": 1, "b": null, "c": {"d": null}}"#)
        .assert()
        .code(0);
}

#[test]
fn test_check_invalid_json_exits_two() {
    nullguard()
        .arg("check")
        .write_stdin("{not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_check_missing_file_exits_two() {
    nullguard()
        .args(["check", "/definitely/not/here.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_serve_bad_config_exits_two() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("nullguard.yaml");
    fs::write(&cfg, "unknown_key: 1\n").unwrap();

    nullguard()
        .args(["serve", "--config"])
        .arg(&cfg)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config"));
}
