//! CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cmd() -> Command {
    Command::cargo_bin("zakupki-extractor").unwrap()
}

#[test]
fn test_extract_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        fixture("organization_Moscow_2013.xml"),
        dir.path().join("organization_Moscow_2013.xml"),
    )
    .unwrap();

    cmd()
        .arg("extract")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"customer""#))
        .stdout(predicate::str::contains("7710168360"));
}

#[test]
fn test_extract_to_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        fixture("contract_Moscow_2013.xml"),
        dir.path().join("contract_Moscow_2013.xml"),
    )
    .unwrap();
    let output = dir.path().join("records.jsonl");

    cmd()
        .arg("extract")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contracts: 2"))
        .stdout(predicate::str::contains("Dropped contracts: 1"));

    let lines: Vec<String> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["kind"], "contract");
    }
}

#[test]
fn test_extract_empty_directory() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("extract")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No corpus files found"));
}

#[test]
fn test_extract_missing_directory_fails() {
    cmd()
        .arg("extract")
        .arg("no/such/directory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_extract_requires_path() {
    cmd().arg("extract").assert().failure();
}
