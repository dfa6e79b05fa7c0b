//! End-to-end CLI tests for chatsum.
//!
//! These run the actual binary against temporary transcript files and check
//! the printed output. Summarization itself is not exercised here (it needs
//! a live endpoint); the tests cover parsing, filtering, previews, and error
//! paths up to the remote call.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\
1/1/24, 10:00 AM - Alice: Hi
how are you
1/1/24, 10:05 AM - Bob: Good thanks
2/1/24, 9:15 AM - Alice: Plans for the weekend?
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    fs::write(dir.path().join("garbage.txt"), "no headers\nat all\n").unwrap();

    dir
}

fn chatsum() -> Command {
    Command::cargo_bin("chatsum").expect("binary exists")
}

#[test]
fn parses_and_previews() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("chat.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 messages"))
        .stdout(predicate::str::contains("Alice: Hi how are you"))
        .stdout(predicate::str::contains("Bob: Good thanks"));
}

#[test]
fn filters_to_range() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("chat.txt"))
        .args(["--from", "2024-01-02", "--to", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered 1 messages"))
        .stdout(predicate::str::contains("Plans for the weekend?"))
        .stdout(predicate::str::contains("Good thanks").not());
}

#[test]
fn preview_is_capped() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("chat.txt"))
        .args(["--preview", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... and 2 more"))
        .stdout(predicate::str::contains("Good thanks").not());
}

#[test]
fn inverted_range_is_an_error() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("chat.txt"))
        .args(["--from", "2024-06-01", "--to", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn malformed_date_is_an_error() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("chat.txt"))
        .args(["--from", "01-06-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn missing_file_is_an_error() {
    chatsum()
        .arg("definitely_missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn headerless_transcript_reports_nothing_to_do() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("garbage.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 0 messages"))
        .stdout(predicate::str::contains("no messages parsed"));
}

#[test]
fn summarize_without_key_fails_before_any_request() {
    let dir = setup_fixtures();

    chatsum()
        .arg(dir.path().join("chat.txt"))
        .arg("--summarize")
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
