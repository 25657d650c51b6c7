//! Integration tests for the dvt CLI

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the dvt binary, pointed at `data_dir`
fn dvt(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("dvt"));
    cmd.env("NO_COLOR", "1")
        .env_remove("DVT_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

fn add(data_dir: &TempDir, outcomes: &[&str]) {
    for outcome in outcomes {
        dvt(data_dir).arg("add").arg(outcome).assert().success();
    }
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    dvt(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dragon/Tiger round tracker"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    dvt(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_show_with_empty_history() {
    let temp = TempDir::new().unwrap();
    dvt(&temp)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."))
        .stdout(predicate::str::contains("Total: 0"))
        .stdout(predicate::str::contains("Need more data"));
}

#[test]
fn test_add_persists_and_renders() {
    let temp = TempDir::new().unwrap();

    dvt(&temp)
        .arg("add")
        .arg("dragon")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 🐉 Dragon (round 1)"))
        .stdout(predicate::str::contains("Total: 1"));

    let blob = std::fs::read_to_string(temp.path().join("dvt_history_v1.json")).unwrap();
    assert!(blob.contains(r#""r":"D""#));
}

#[test]
fn test_add_rejects_unknown_outcome() {
    let temp = TempDir::new().unwrap();

    dvt(&temp)
        .arg("add")
        .arg("phoenix")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid outcome 'phoenix'"));

    assert!(!temp.path().join("dvt_history_v1.json").exists());
}

#[test]
fn test_predict_alternation() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["d", "t", "d", "t"]);

    dvt(&temp)
        .arg("predict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guess: 🐉 Dragon"))
        .stdout(predicate::str::contains("Confidence: 70%"))
        .stdout(predicate::str::contains("Alternating pattern detected in last 4"));
}

#[test]
fn test_predict_json() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["t", "t", "t"]);

    let output = dvt(&temp).arg("predict").arg("--json").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["guess"], "tiger");
    assert_eq!(json["confidence"], 70);
    assert_eq!(json["recent"], serde_json::json!(["T", "T", "T"]));
}

#[test]
fn test_stats_json() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["d", "i", "t", "t"]);

    let output = dvt(&temp).arg("stats").arg("--json").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["streak"]["last"], "T");
    assert_eq!(json["streak"]["length"], 2);
}

#[test]
fn test_undo_removes_last_round() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["d", "t"]);

    dvt(&temp)
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 🐯 Tiger"))
        .stdout(predicate::str::contains("Total: 1"));
}

#[test]
fn test_undo_on_empty_history() {
    let temp = TempDir::new().unwrap();
    dvt(&temp)
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo"));
}

#[test]
fn test_clear_declined_keeps_history() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["d", "d"]);

    dvt(&temp)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear cancelled"));

    dvt(&temp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn test_clear_confirmed_on_stdin() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["d", "t", "i"]);

    dvt(&temp)
        .arg("clear")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"))
        .stdout(predicate::str::contains("Total: 0"));
}

#[test]
fn test_clear_force() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["t"]);

    dvt(&temp)
        .arg("clear")
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));
}

#[test]
fn test_corrupt_history_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("dvt_history_v1.json"), "{broken").unwrap();

    dvt(&temp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0"));
}

#[test]
fn test_history_is_bounded_by_settings() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("settings.json"),
        r#"{"historyLimit": 2, "color": false}"#,
    )
    .unwrap();
    add(&temp, &["d", "t", "i"]);

    dvt(&temp)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("History (last 2)"))
        .stdout(predicate::str::contains("T I"))
        .stdout(predicate::str::contains("Stats").not());
}

#[test]
fn test_invalid_settings_fail() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("settings.json"), r#"{"recentLimit": 0}"#).unwrap();

    dvt(&temp)
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("recentLimit"));
}

#[test]
fn test_config_paths() {
    let temp = TempDir::new().unwrap();
    dvt(&temp)
        .arg("config")
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.json"))
        .stdout(predicate::str::contains("dvt_history_v1.json"));
}

#[test]
fn test_config_show_json() {
    let temp = TempDir::new().unwrap();
    dvt(&temp)
        .arg("config")
        .arg("show")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"storageKey\""));
}
