// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colored console rendering of reports

use crate::lint::{Finding, Level};
use crate::merge::MergeStats;
use crate::report::{LintReport, StatsReport};
use colored::*;

pub fn print_lint(report: &LintReport) {
    println!("\n{}", "=== CATALOG LINT ===".bold().cyan());
    println!("  File: {}", report.file.display());
    println!("  Language: {}", report.language);
    println!(
        "  Errors: {}  Warnings: {}  Infos: {}",
        count_tag(report.errors, "red"),
        count_tag(report.warnings, "yellow"),
        count_tag(report.infos, "blue"),
    );
    println!();

    if report.findings.is_empty() {
        println!("  {}", "No findings.".green());
        return;
    }

    for finding in &report.findings {
        let level_color = match finding.level {
            Level::Error => "red",
            Level::Warning => "yellow",
            Level::Info => "blue",
        };
        println!(
            "  [{}] {}: {}",
            finding.level.as_str().color(level_color).bold(),
            place(finding),
            finding.detail
        );
    }
    println!();
}

pub fn print_stats(report: &StatsReport) {
    println!("\n{}", "=== CATALOG STATISTICS ===".bold().cyan());
    println!("  File: {}", report.file.display());
    match &report.language_name {
        Some(name) => println!("  Language: {} ({})", report.language, name),
        None => println!("  Language: {}", report.language),
    }
    println!();

    println!(
        "  {:<28} {:>9} {:>9} {:>11} {:>9} {:>9}",
        "Context", "Messages", "Finished", "Unfinished", "Vanished", "Obsolete"
    );
    println!("  {}", "-".repeat(80));
    for row in &report.contexts {
        println!(
            "  {:<28} {:>9} {:>9} {:>11} {:>9} {:>9}",
            row.name, row.messages, row.finished, row.unfinished, row.vanished, row.obsolete
        );
    }
    println!("  {}", "-".repeat(80));
    println!(
        "  {:<28} {:>9} {:>9} {:>11} {:>9} {:>9}",
        "Total",
        report.total_messages,
        report.total_finished,
        report.total_unfinished,
        report.total_vanished,
        report.total_obsolete
    );
    println!();

    let coverage_color = if report.coverage >= 80.0 {
        "green"
    } else if report.coverage >= 50.0 {
        "yellow"
    } else {
        "red"
    };
    println!(
        "  Coverage: {}",
        format!("{:.1}%", report.coverage).color(coverage_color).bold()
    );
    println!();
}

// Goes to stderr: stdout may be carrying the merged TS document.
pub fn print_merge(stats: &MergeStats) {
    eprintln!("\n{}", "=== MERGE SUMMARY ===".bold().cyan());
    eprintln!(
        "  Kept: {}  Added: {}  Revived: {}  Vanished: {}",
        stats.kept.to_string().green().bold(),
        stats.added.to_string().yellow().bold(),
        stats.revived.to_string().blue().bold(),
        stats.vanished.to_string().red().bold(),
    );
    eprintln!();
}

fn count_tag(count: usize, color: &str) -> String {
    let text = count.to_string();
    if count == 0 {
        text
    } else {
        text.color(color).bold().to_string()
    }
}

fn place(finding: &Finding) -> String {
    match (finding.context.is_empty(), finding.source.is_empty()) {
        (true, _) => "catalog".to_string(),
        (false, true) => finding.context.clone(),
        (false, false) => format!("{} \"{}\"", finding.context, finding.source.replace('\n', "\\n")),
    }
}
