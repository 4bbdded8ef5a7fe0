//! Behavioral specs for `rummage find`.
//!
//! Reference: docs/specs/03-matching.md

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Spec: docs/specs/03-matching.md#occurrences
///
/// > Every occurrence is reported as a 0-based offset, one per line
#[test]
fn reports_each_position_on_its_own_line() {
    rummage_cmd()
        .args(["find", "aa", "aaaa"])
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

/// Spec: docs/specs/03-matching.md#occurrences
///
/// > Overlapping occurrences are all reported
#[test]
fn reports_overlapping_occurrences() {
    rummage_cmd()
        .args(["find", "abab", "ababab"])
        .assert()
        .success()
        .stdout("0\n2\n");
}

/// Spec: docs/specs/01-cli.md#exit-codes
///
/// > Exit code 1 when the pattern does not occur
#[test]
fn no_match_exits_one_with_empty_output() {
    rummage_cmd()
        .args(["find", "xyz", "0123456789"])
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty());
}

/// Spec: docs/specs/01-cli.md#exit-codes
///
/// > Exit code 2 on invalid input
#[test]
fn empty_pattern_exits_two() {
    rummage_cmd()
        .args(["find", "", "0123456789"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("pattern must not be empty"));
}

/// Spec: docs/specs/03-matching.md#algorithms
///
/// > Both algorithms report identical positions
#[test]
fn rabin_karp_matches_kmp_output() {
    let kmp = rummage_cmd()
        .args(["find", "26", "3141592653589793"])
        .output()
        .unwrap();
    let rk = rummage_cmd()
        .args(["find", "--algorithm", "rabin-karp", "26", "3141592653589793"])
        .output()
        .unwrap();
    assert_eq!(kmp.stdout, rk.stdout);
    assert_eq!(String::from_utf8_lossy(&kmp.stdout), "6\n");
}

/// Spec: docs/specs/03-matching.md#verification
///
/// > --verify cross-checks every matcher against the oracle
#[test]
fn verify_agrees_on_real_input() {
    rummage_cmd()
        .args(["find", "--verify", "515", "5151515151"])
        .assert()
        .success()
        .stdout("0\n2\n4\n6\n");
}

/// Spec: docs/specs/01-cli.md#find
///
/// > --count prints only the number of matches
#[test]
fn count_prints_the_total_only() {
    rummage_cmd()
        .args(["find", "--count", "aa", "aaaa"])
        .assert()
        .success()
        .stdout("3\n");
}

/// Spec: docs/specs/01-cli.md#find
///
/// > JSON output carries algorithm, lengths, count, and positions
#[test]
fn json_output_has_the_documented_shape() {
    let output = rummage_cmd()
        .args(["find", "--output", "json", "aa", "aaaa"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["algorithm"], "kmp");
    assert_eq!(value["text_len"], 4);
    assert_eq!(value["pattern_len"], 2);
    assert_eq!(value["count"], 3);
    assert_eq!(value["positions"], serde_json::json!([0, 1, 2]));
}

/// Spec: docs/specs/01-cli.md#find
///
/// > --file reads the text from disk
#[test]
fn file_input_is_searched() {
    let project = Project::empty();
    let corpus = project.file("corpus.txt", b"3141592653589793");
    rummage_cmd()
        .args(["find", "26", "--file"])
        .arg(&corpus)
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("6\n");
}

/// Spec: docs/specs/01-cli.md#find
///
/// > Without TEXT or --file the text comes from stdin
#[test]
fn stdin_is_searched_when_no_text_given() {
    rummage_cmd()
        .args(["find", "aa"])
        .write_stdin("aaaa")
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

/// Spec: docs/specs/01-cli.md#exit-codes
///
/// > Exit code 2 when the text file cannot be read
#[test]
fn missing_file_exits_two() {
    let project = Project::empty();
    rummage_cmd()
        .args(["find", "aa", "--file", "no-such-corpus.txt"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

/// Spec: docs/specs/01-cli.md#find
///
/// > TEXT and --file are mutually exclusive
#[test]
fn inline_text_conflicts_with_file() {
    rummage_cmd()
        .args(["find", "aa", "aaaa", "--file", "corpus.txt"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot be used with"));
}

/// Spec: docs/specs/03-matching.md#edge-cases
///
/// > A pattern longer than the text matches nothing
#[test]
fn pattern_longer_than_text_exits_one() {
    rummage_cmd()
        .args(["find", "123456", "123"])
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty());
}
