// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for lint and statistics reports built from the reference catalog

use lincat::lint;
use lincat::report::{self, write_report, ReportFormat};
use lincat::ts;
use lincat::types::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/mythgame_nb.ts")
}

fn load_fixture() -> Catalog {
    ts::load_file(&fixture_path()).expect("reference catalog should load")
}

#[test]
fn test_reference_catalog_lints_clean() {
    let catalog = load_fixture();
    let findings = lint::check(&catalog).expect("lint should succeed");
    assert!(findings.is_empty(), "unexpected findings: {:?}", findings);

    let report = report::lint_report(&fixture_path(), &catalog, findings);
    assert_eq!(report.language, "nb_NO");
    assert_eq!(report.errors, 0);
    assert_eq!(report.warnings, 0);
    assert_eq!(report.infos, 0);
    assert!(!report.fails(true));
}

#[test]
fn test_stats_cover_every_context() {
    let catalog = load_fixture();
    let report = report::stats_report(&fixture_path(), &catalog);

    assert_eq!(report.contexts.len(), 10);
    assert_eq!(report.total_messages, 225);
    assert_eq!(report.total_finished, 147);
    assert_eq!(report.total_unfinished, 0);
    assert_eq!(report.total_vanished, 0);
    assert_eq!(report.total_obsolete, 78);
    assert_eq!(report.language_name.as_deref(), Some("Norwegian Bokmål"));

    // every active entry is translated, so inactive memory does not
    // drag coverage down
    assert!((report.coverage - 100.0).abs() < 1e-9);

    let qobject = report
        .contexts
        .iter()
        .find(|c| c.name == "QObject")
        .expect("QObject row");
    assert_eq!(qobject.messages, 73);
    assert_eq!(qobject.obsolete, 73);
    assert_eq!(qobject.finished, 0);
}

#[test]
fn test_reports_serialize_for_file_output() {
    let catalog = load_fixture();
    let findings = lint::check(&catalog).expect("lint should succeed");
    let lint_report = report::lint_report(&fixture_path(), &catalog, findings);

    let dir = TempDir::new().expect("tempdir should be created");
    let json_path = dir.path().join("lint.json");
    write_report(&lint_report, &json_path, ReportFormat::Json)
        .expect("json write should succeed");

    let raw = fs::read_to_string(&json_path).expect("report read should succeed");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["language"], "nb_NO");
    assert_eq!(value["errors"], 0);
    assert_eq!(value["warnings"], 0);
    assert_eq!(value["infos"], 0);
    assert_eq!(value["findings"].as_array().expect("findings array").len(), 0);
    assert!(value["created_at"].is_string());

    let stats = report::stats_report(&fixture_path(), &catalog);
    let yaml_path = dir.path().join("stats.yaml");
    write_report(&stats, &yaml_path, ReportFormat::Yaml).expect("yaml write should succeed");
    let yaml = fs::read_to_string(&yaml_path).expect("report read should succeed");
    assert!(yaml.contains("language: nb_NO"));
    assert!(yaml.contains("total_messages: 225"));
}
