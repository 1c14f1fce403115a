// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for directory scanning over real catalog files

use lincat::report::{write_report, ReportFormat};
use lincat::scan;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/mythgame_nb.ts")
}

#[test]
fn test_scan_reports_clean_and_broken_catalogs() {
    let dir = TempDir::new().expect("tempdir should be created");
    fs::copy(fixture_path(), dir.path().join("mythgame_nb.ts")).expect("fixture copy");
    fs::write(dir.path().join("broken.ts"), "<TS version=\"2.0\"><context>")
        .expect("broken catalog write");

    let report = scan::run(dir.path()).expect("scan should succeed");
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.files_failed, 1);
    assert_eq!(report.total_messages, 225);
    assert_eq!(report.total_findings, 0);

    let ok = report
        .results
        .iter()
        .find(|r| r.error.is_none())
        .expect("clean row");
    assert_eq!(ok.file_name, "mythgame_nb.ts");
    assert_eq!(ok.language, "nb_NO");
    assert_eq!(ok.contexts, 10);
    assert_eq!(ok.messages, 225);
    assert_eq!(ok.finished, 147);
    assert_eq!(ok.error_count, 0);
    assert_eq!(ok.warning_count, 0);

    let failed = report
        .results
        .iter()
        .find(|r| r.error.is_some())
        .expect("failure row");
    assert_eq!(failed.file_name, "broken.ts");
    assert_eq!(failed.messages, 0);

    // a parse failure fails the gate even without strict mode
    assert!(report.fails(false));
}

#[test]
fn test_nested_clean_tree_passes_strict_mode() {
    let dir = TempDir::new().expect("tempdir should be created");
    fs::copy(fixture_path(), dir.path().join("mythgame_nb.ts")).expect("fixture copy");
    let nested = dir.path().join("translations");
    fs::create_dir(&nested).expect("nested dir");
    fs::copy(fixture_path(), nested.join("mythgame_nb.ts")).expect("fixture copy");
    fs::write(dir.path().join("README.md"), "not a catalog").expect("readme write");

    let report = scan::run(dir.path()).expect("scan should succeed");
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.files_failed, 0);
    assert_eq!(report.total_messages, 450);
    assert!(!report.fails(true));
}

#[test]
fn test_scan_report_round_trips_through_json() {
    let dir = TempDir::new().expect("tempdir should be created");
    fs::copy(fixture_path(), dir.path().join("mythgame_nb.ts")).expect("fixture copy");

    let report = scan::run(dir.path()).expect("scan should succeed");
    let out = dir.path().join("reports/scan.json");
    write_report(&report, &out, ReportFormat::Json).expect("report write should succeed");

    let raw = fs::read_to_string(&out).expect("report read should succeed");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["files_scanned"], 1);
    assert_eq!(value["files_failed"], 0);
    assert!(value["created_at"].is_string());

    let rows = value["results"].as_array().expect("results array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["file_name"], "mythgame_nb.ts");
    assert_eq!(rows[0]["finished"], 147);
    // clean rows serialize without an error field
    assert!(rows[0].get("error").is_none());
}
