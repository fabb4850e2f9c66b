//! Tests for the `ubl-extractor` binary.
//!
//! The binary reads from the folder next to itself, so each test copies it
//! into a scratch directory first.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use ubl_extractor::config::{INPUT_DIR_NAME, OUTPUT_FILE_NAME};

/// Copy the built binary into a fresh directory and return both.
fn install_binary() -> (TempDir, PathBuf) {
    let base = tempfile::tempdir().expect("Failed to create temp dir");
    let source = assert_cmd::cargo::cargo_bin("ubl-extractor");
    let target = base
        .path()
        .join(source.file_name().expect("binary has a file name"));
    fs::copy(&source, &target).expect("Failed to copy binary");
    (base, target)
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_binary_writes_workbook() {
    let (base, binary) = install_binary();
    let dir = base.path().join(INPUT_DIR_NAME);
    fs::create_dir(&dir).unwrap();
    fs::copy(fixture_path("factura_001.xml"), dir.join("factura_001.xml")).unwrap();

    Command::new(&binary)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    assert!(dir.join(OUTPUT_FILE_NAME).exists());
}

#[test]
fn test_binary_logs_skipped_lines() {
    let (base, binary) = install_binary();
    let dir = base.path().join(INPUT_DIR_NAME);
    fs::create_dir(&dir).unwrap();
    fs::copy(fixture_path("factura_002.xml"), dir.join("factura_002.xml")).unwrap();

    Command::new(&binary)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping invoice line"))
        .stdout(predicate::str::contains("UNO"));
}

#[test]
fn test_binary_fails_without_input_directory() {
    let (base, binary) = install_binary();

    Command::new(&binary)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains(INPUT_DIR_NAME));

    assert!(!base.path().join(OUTPUT_FILE_NAME).exists());
}

#[test]
fn test_binary_rejects_arguments() {
    let (_base, binary) = install_binary();

    Command::new(&binary).arg("--output").arg("x.xlsx").assert().failure();
}
