// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch lint across a directory tree of catalogs
//!
//! Walks a directory, finds every `.ts` file, loads and lints each, and
//! produces a summary report sorted by finding count (highest first).
//! Files that fail to parse stay in the report as failure rows instead of
//! aborting the whole scan.

use crate::lint::{self, Level};
use crate::ts;
use crate::types::Status;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Results from linting a single catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub file_name: String,
    pub language: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub error_count: usize,
    pub warning_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    fn findings(&self) -> usize {
        self.error_count + self.warning_count
    }
}

/// Complete scan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub created_at: String,
    pub directory: PathBuf,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub total_messages: usize,
    pub total_findings: usize,
    pub results: Vec<FileResult>,
}

impl ScanReport {
    /// Whether the scan fails the lint gate. Parse failures and lint
    /// errors always fail; warnings fail under strict mode.
    pub fn fails(&self, strict: bool) -> bool {
        self.results.iter().any(|row| {
            row.error.is_some() || row.error_count > 0 || (strict && row.warning_count > 0)
        })
    }
}

/// Find all catalog files under the given directory.
fn discover(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        anyhow::bail!("not a directory: {}", directory.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(directory).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "ts")
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Lint every catalog under a directory.
pub fn run(directory: &Path) -> Result<ScanReport> {
    let files = discover(directory)?;
    let mut results: Vec<FileResult> = Vec::new();

    for path in &files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        match ts::load_file(path).and_then(|catalog| {
            let findings = lint::check(&catalog)?;
            Ok((catalog, findings))
        }) {
            Ok((catalog, findings)) => {
                results.push(FileResult {
                    path: path.clone(),
                    file_name,
                    language: catalog.language.clone(),
                    contexts: catalog.contexts.len(),
                    messages: catalog.message_count(),
                    finished: catalog.count_status(Status::Finished),
                    error_count: lint::count_level(&findings, Level::Error),
                    warning_count: lint::count_level(&findings, Level::Warning),
                    error: None,
                });
            }
            Err(e) => {
                results.push(FileResult {
                    path: path.clone(),
                    file_name,
                    language: String::new(),
                    contexts: 0,
                    messages: 0,
                    finished: 0,
                    error_count: 0,
                    warning_count: 0,
                    error: Some(format!("{:#}", e)),
                });
            }
        }
    }

    // Noisiest catalogs first; ties stay in path order.
    results.sort_by(|a, b| b.findings().cmp(&a.findings()));

    let files_failed = results.iter().filter(|r| r.error.is_some()).count();
    let total_messages: usize = results.iter().map(|r| r.messages).sum();
    let total_findings: usize = results.iter().map(|r| r.findings()).sum();

    Ok(ScanReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        directory: directory.to_path_buf(),
        files_scanned: results.len(),
        files_failed,
        total_messages,
        total_findings,
        results,
    })
}

/// Print a summary table to the terminal.
pub fn print_summary(report: &ScanReport) {
    use colored::*;

    println!("\n{}", "=== CATALOG SCAN ===".bold().cyan());
    println!(
        "  Directory: {}  |  Files: {}  |  Failed: {}",
        report.directory.display(),
        report.files_scanned,
        if report.files_failed > 0 {
            report.files_failed.to_string().red().bold().to_string()
        } else {
            report.files_failed.to_string()
        }
    );
    println!(
        "  Total messages: {}  |  Total findings: {}",
        report.total_messages, report.total_findings
    );
    println!();

    if report.results.is_empty() {
        println!("  No catalog files found.");
        return;
    }

    println!(
        "  {:<32} {:>8} {:>9} {:>9} {:>7} {:>7}",
        "Catalog", "Language", "Messages", "Finished", "Errors", "Warns"
    );
    println!("  {}", "-".repeat(78));

    for result in &report.results {
        if let Some(err) = &result.error {
            println!("  {:<32} {}: {}", result.file_name, "FAILED".red().bold(), err);
        } else {
            println!(
                "  {:<32} {:>8} {:>9} {:>9} {:>7} {:>7}",
                result.file_name,
                result.language,
                result.messages,
                result.finished,
                result.error_count,
                result.warning_count,
            );
        }
    }
    println!();
}
