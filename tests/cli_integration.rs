//! Integration tests for the piigen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn write_fixtures(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let addresses = dir.join("addresses.csv");
    fs::write(
        &addresses,
        "street,zip_code\n\
         \"Blk 123, Serangoon Avenue 4\",550123\n\
         Bishan Street 22 #05-678,570456\n\
         ,999999\n",
    )
    .unwrap();
    let names = dir.join("names.csv");
    fs::write(&names, "name\nJohn Tan\nSiti binti Abdullah\n").unwrap();
    (addresses, names)
}

#[test]
fn generates_balanced_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let (addresses, names) = write_fixtures(dir.path());
    let out = dir.path().join("corpus.conll");

    Command::cargo_bin("piigen")
        .unwrap()
        .args(["--addresses"])
        .arg(&addresses)
        .arg("--names")
        .arg(&names)
        .arg("--out")
        .arg(&out)
        .args(["--total", "12", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generated 12 sentences"));

    let content = fs::read_to_string(&out).unwrap();
    let sentences = piigen::corpus::parse_conll(&content).unwrap();
    assert_eq!(sentences.len(), 12);
    for s in &sentences {
        assert!(s.check_bio());
    }
    // Both classes present.
    assert!(sentences.iter().any(|s| s.pii));
    assert!(sentences.iter().any(|s| !s.pii));
}

#[test]
fn seed_makes_output_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let (addresses, names) = write_fixtures(dir.path());

    let mut outputs = Vec::new();
    for run in 0..2 {
        let out = dir.path().join(format!("corpus{run}.conll"));
        Command::cargo_bin("piigen")
            .unwrap()
            .arg("--addresses")
            .arg(&addresses)
            .arg("--names")
            .arg(&names)
            .arg("--out")
            .arg(&out)
            .args(["--total", "24", "--seed", "77"])
            .assert()
            .success();
        outputs.push(fs::read_to_string(&out).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn no_flag_column_drops_third_field() {
    let dir = tempfile::tempdir().unwrap();
    let (addresses, names) = write_fixtures(dir.path());
    let out = dir.path().join("corpus.conll");

    Command::cargo_bin("piigen")
        .unwrap()
        .arg("--addresses")
        .arg(&addresses)
        .arg("--names")
        .arg(&names)
        .arg("--out")
        .arg(&out)
        .args(["--total", "6", "--seed", "5", "--no-flag-column"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        assert_eq!(line.split('\t').count(), 2, "unexpected columns: {line}");
    }
}

#[test]
fn json_report_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let (addresses, names) = write_fixtures(dir.path());
    let out = dir.path().join("corpus.conll");

    let assert = Command::cargo_bin("piigen")
        .unwrap()
        .arg("--addresses")
        .arg(&addresses)
        .arg("--names")
        .arg(&names)
        .arg("--out")
        .arg(&out)
        .args(["--total", "18", "--seed", "9", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["generated"], 18);
    assert_eq!(report["requested"], 18);
}

#[test]
fn missing_address_file_fails_with_clear_message() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("piigen")
        .unwrap()
        .args(["--addresses", "/nonexistent/addresses.csv"])
        .arg("--out")
        .arg(dir.path().join("corpus.conll"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input"));
}
