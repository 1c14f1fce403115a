// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report types for lint results and catalog statistics

pub mod formatter;
pub mod output;

pub use formatter::{print_lint, print_merge, print_stats};
pub use output::{write_report, ReportFormat};

use crate::lang;
use crate::lint::{self, Finding, Level};
use crate::types::{Catalog, Status};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lint findings for one catalog, with per-level counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub file: PathBuf,
    pub language: String,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub findings: Vec<Finding>,
    pub created_at: String,
}

impl LintReport {
    /// Whether the catalog fails the lint gate. Errors always fail;
    /// warnings fail under strict mode.
    pub fn fails(&self, strict: bool) -> bool {
        self.errors > 0 || (strict && self.warnings > 0)
    }
}

pub fn lint_report(file: &Path, catalog: &Catalog, findings: Vec<Finding>) -> LintReport {
    LintReport {
        file: file.to_path_buf(),
        language: catalog.language.clone(),
        errors: lint::count_level(&findings, Level::Error),
        warnings: lint::count_level(&findings, Level::Warning),
        infos: lint::count_level(&findings, Level::Info),
        findings,
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Per-context message counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextStats {
    pub name: String,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub obsolete: usize,
}

/// Translation progress for one catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub file: PathBuf,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    pub contexts: Vec<ContextStats>,
    pub total_messages: usize,
    pub total_finished: usize,
    pub total_unfinished: usize,
    pub total_vanished: usize,
    pub total_obsolete: usize,
    /// Finished share of active messages, in percent.
    pub coverage: f64,
    pub created_at: String,
}

pub fn stats_report(file: &Path, catalog: &Catalog) -> StatsReport {
    let mut contexts = Vec::new();
    for context in &catalog.contexts {
        let mut row = ContextStats {
            name: context.name.clone(),
            messages: context.messages.len(),
            ..Default::default()
        };
        for message in &context.messages {
            match message.status {
                Status::Finished => row.finished += 1,
                Status::Unfinished => row.unfinished += 1,
                Status::Vanished => row.vanished += 1,
                Status::Obsolete => row.obsolete += 1,
            }
        }
        contexts.push(row);
    }

    let total_messages: usize = contexts.iter().map(|c| c.messages).sum();
    let total_finished: usize = contexts.iter().map(|c| c.finished).sum();
    let total_unfinished: usize = contexts.iter().map(|c| c.unfinished).sum();
    let total_vanished: usize = contexts.iter().map(|c| c.vanished).sum();
    let total_obsolete: usize = contexts.iter().map(|c| c.obsolete).sum();

    let active = total_finished + total_unfinished;
    let coverage = if active == 0 {
        100.0
    } else {
        total_finished as f64 * 100.0 / active as f64
    };

    let (primary, _) = lang::split_locale(&catalog.language);

    StatsReport {
        file: file.to_path_buf(),
        language: catalog.language.clone(),
        language_name: lang::language_name(primary).map(str::to_string),
        contexts,
        total_messages,
        total_finished,
        total_unfinished,
        total_vanished,
        total_obsolete,
        coverage,
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}
