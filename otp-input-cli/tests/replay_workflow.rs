#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn otp_input() -> Command {
    Command::new(env!("CARGO_BIN_EXE_otp-input"))
}

fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write script");
    path
}

#[test]
fn test_replay_full_paste() {
    // 1. Setup
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let script = write_script(
        temp_dir.path(),
        "paste.json",
        r#"{ "events": [ { "type": "paste", "text": "123456" } ] }"#,
    );

    // 2. Replay and verify the emitted events
    otp_input()
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"type":"change","values":["1","2","3","4","5","6"]}"#,
        ))
        .stdout(predicate::str::contains(r#"{"type":"filled","value":"123456"}"#))
        .stdout(predicate::str::contains("value: 123456"))
        .stdout(predicate::str::contains("focused: none"));
}

#[test]
fn test_replay_typing_overwrite_and_backspace() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let script = write_script(
        temp_dir.path(),
        "typing.json",
        r#"{
            "events": [
                { "type": "input", "box": 0, "raw": "5" },
                { "type": "arrow_left", "box": 1 },
                { "type": "input", "box": 0, "raw": "53" },
                { "type": "input", "box": 1, "raw": "x" },
                { "type": "input", "box": 1, "raw": "8" },
                { "type": "backspace", "box": 1 }
            ]
        }"#,
    );

    otp_input()
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("value: 3\n"))
        .stdout(predicate::str::contains("focused: 0\n"));
}

#[test]
fn test_flags_override_script_config() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let script = write_script(
        temp_dir.path(),
        "letters.json",
        r#"{
            "config": { "length": 6 },
            "events": [ { "type": "paste", "text": "AB12" } ]
        }"#,
    );

    otp_input()
        .arg("--length")
        .arg("4")
        .arg("--pattern")
        .arg("^[A-Z0-9]+$")
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("value: AB12"))
        .stdout(predicate::str::contains(r#"{"type":"filled","value":"AB12"}"#));
}

#[test]
fn test_config_file_is_used() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = write_script(
        temp_dir.path(),
        "otp.json",
        r#"{ "length": 3, "auto_blur": false }"#,
    );
    let script = write_script(
        temp_dir.path(),
        "paste.json",
        r#"{ "events": [ { "type": "paste", "text": "987" } ] }"#,
    );

    otp_input()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("value: 987"))
        .stdout(predicate::str::contains("focused: 2"));
}

#[test]
fn test_invalid_pattern_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let script = write_script(temp_dir.path(), "empty.json", r#"{ "events": [] }"#);

    otp_input()
        .arg("--pattern")
        .arg("[0-9")
        .arg("replay")
        .arg(&script)
        .assert()
        .failure();
}

#[test]
fn test_missing_script_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    otp_input()
        .arg("replay")
        .arg(temp_dir.path().join("does-not-exist.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
