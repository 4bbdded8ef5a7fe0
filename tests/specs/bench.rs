//! Behavioral specs for `rummage bench`.
//!
//! Reference: docs/specs/04-bench.md

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Small matrix so specs stay fast: 3 cells instead of 6.
const SMALL_MATRIX: &str = r#"version = 1

[bench]
fixed_text_len = 200
pattern_lengths = [2, 4]
text_lengths = [300]
fixed_pattern_len = 3
samples = 1
seed = 7
"#;

/// Spec: docs/specs/04-bench.md#matrix
///
/// > Each matcher is timed on every cell of the matrix
#[test]
fn bench_reports_every_matcher_and_cell() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    rummage_cmd()
        .arg("bench")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("kmp"))
        .stdout(predicates::str::contains("rabin-karp"))
        .stdout(predicates::str::contains("text 200 x pattern 2:"))
        .stdout(predicates::str::contains("text 200 x pattern 4:"))
        .stdout(predicates::str::contains("text 300 x pattern 3:"));
}

/// Spec: docs/specs/04-bench.md#reproducibility
///
/// > The seed is always reported
#[test]
fn bench_reports_the_seed() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    rummage_cmd()
        .arg("bench")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("seed: 7"));
}

/// Spec: docs/specs/04-bench.md#reproducibility
///
/// > --seed overrides the configured seed
#[test]
fn seed_flag_overrides_config() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    rummage_cmd()
        .args(["bench", "--seed", "123"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("seed: 123"));
}

/// Spec: docs/specs/04-bench.md#output
///
/// > JSON output carries a versioned report with one record per
/// > (matcher, cell) pair
#[test]
fn bench_json_has_one_record_per_matcher_and_cell() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    let output = rummage_cmd()
        .args(["bench", "--output", "json"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["version"], 1);
    assert_eq!(value["seed"], 7);
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 6);
    for record in records {
        assert!(record["micros"].is_u64());
        assert_eq!(record["samples"], 1);
    }
}

/// Spec: docs/specs/04-bench.md#matrix
///
/// > The default matrix is 6 cells for each of the two matchers
#[test]
fn default_matrix_times_twelve_records() {
    let project = Project::empty();
    let output = rummage_cmd()
        .args(["bench", "--output", "json", "--seed", "1"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["records"].as_array().unwrap().len(), 12);
}

/// Spec: docs/specs/04-bench.md#verification
///
/// > --verify cross-checks the matchers before timing and says so
#[test]
fn verify_prints_agreement_note() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    rummage_cmd()
        .args(["bench", "--verify"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("agree with the oracle"));
}

/// Spec: docs/specs/04-bench.md#output
///
/// > --samples overrides the configured sample count
#[test]
fn samples_flag_is_echoed_in_records() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    let output = rummage_cmd()
        .args(["bench", "--output", "json", "--samples", "2"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for record in value["records"].as_array().unwrap() {
        assert_eq!(record["samples"], 2);
    }
}

/// Spec: docs/specs/04-bench.md#output
///
/// > Identical match counts across matchers for the same cell
#[test]
fn matchers_report_identical_match_counts() {
    let project = Project::empty();
    project.config(SMALL_MATRIX);
    let output = rummage_cmd()
        .args(["bench", "--output", "json"])
        .current_dir(project.path())
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = value["records"].as_array().unwrap();
    let (kmp, rk) = records.split_at(3);
    for (a, b) in kmp.iter().zip(rk) {
        assert_eq!(a["text_len"], b["text_len"]);
        assert_eq!(a["pattern_len"], b["pattern_len"]);
        assert_eq!(a["matches"], b["matches"]);
    }
}
