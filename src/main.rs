// SPDX-License-Identifier: PMPL-1.0-or-later

//! lincat: loader, linter, and merge tool for Qt Linguist translation catalogs
//!
//! Loads `.ts` catalogs into a typed model and exposes the toolchain
//! around them: lint for authoring defects, lookup with the runtime
//! fallback rules, per-context statistics, the extraction merge,
//! JSON/YAML export, and batch scans over catalog trees.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use lincat::report::{self, ReportFormat};
use lincat::resolve::Resolver;
use lincat::{lint, merge, scan, ts};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lincat")]
#[command(version = "0.5.0")]
#[command(about = "Loader, linter, and merge tool for Qt Linguist translation catalogs")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog and report authoring defects
    Lint {
        /// Catalog file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up the translation for a source string
    Resolve {
        /// Catalog file to query
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Context the string belongs to
        #[arg(value_name = "CONTEXT")]
        context: String,

        /// Source string to look up
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Disambiguation comment
        #[arg(short, long)]
        comment: Option<String>,

        /// Count for plural-aware messages; selects the numerus form and
        /// fills in %n
        #[arg(short = 'n', long = "count")]
        count: Option<u64>,
    },

    /// Show per-context translation statistics
    Stats {
        /// Catalog file to summarize
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge a translated catalog with a freshly extracted template
    Merge {
        /// Existing translated catalog
        #[arg(value_name = "OLD")]
        old: PathBuf,

        /// Freshly extracted template catalog
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Write the merged catalog here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drop vanished and obsolete entries from the result
        #[arg(long)]
        purge: bool,
    },

    /// Export a catalog as JSON or YAML
    Export {
        /// Catalog file to export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Serialization format
        #[arg(short, long, value_enum)]
        format: ReportFormat,

        /// Write the export to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lint every catalog under a directory
    Scan {
        /// Directory tree to search for .ts files
        #[arg(value_name = "DIR")]
        directory: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lint {
            file,
            strict,
            format,
            output,
        } => {
            let catalog = ts::load_file(&file)?;
            let findings = lint::check(&catalog)?;
            let lint_report = report::lint_report(&file, &catalog, findings);

            if let Some(path) = output {
                report::write_report(&lint_report, &path, format)?;
            } else if format == ReportFormat::Text {
                report::print_lint(&lint_report);
            } else {
                println!("{}", format.serialize(&lint_report)?);
            }

            if lint_report.fails(strict) {
                return Err(anyhow!(
                    "{}: {} errors, {} warnings",
                    file.display(),
                    lint_report.errors,
                    lint_report.warnings
                ));
            }
        }

        Commands::Resolve {
            file,
            context,
            source,
            comment,
            count,
        } => {
            let catalog = ts::load_file(&file)?;
            let resolver = Resolver::new(&catalog);
            match count {
                Some(n) => println!(
                    "{}",
                    resolver.resolve_plural(&context, &source, comment.as_deref(), n)
                ),
                None => println!("{}", resolver.resolve(&context, &source, comment.as_deref())),
            }
        }

        Commands::Stats {
            file,
            format,
            output,
        } => {
            let catalog = ts::load_file(&file)?;
            let stats = report::stats_report(&file, &catalog);

            if let Some(path) = output {
                report::write_report(&stats, &path, format)?;
            } else if format == ReportFormat::Text {
                report::print_stats(&stats);
            } else {
                println!("{}", format.serialize(&stats)?);
            }
        }

        Commands::Merge {
            old,
            template,
            output,
            purge,
        } => {
            let old_catalog = ts::load_file(&old)?;
            let template_catalog = ts::load_file(&template)?;

            let (mut merged, stats) = merge::update(&old_catalog, &template_catalog);
            if purge {
                let removed = merge::purge_obsolete(&mut merged);
                eprintln!("Purged {} inactive entries", removed);
            }
            report::print_merge(&stats);

            match output {
                Some(path) => {
                    ts::write_file(&merged, &path)?;
                    println!("Merged catalog saved to: {}", path.display());
                }
                None => print!("{}", ts::to_xml(&merged)?),
            }
        }

        Commands::Export {
            file,
            format,
            output,
        } => {
            if format == ReportFormat::Text {
                return Err(anyhow!("export requires --format json or yaml"));
            }
            let catalog = ts::load_file(&file)?;

            if let Some(path) = output {
                report::write_report(&catalog, &path, format)?;
            } else {
                println!("{}", format.serialize(&catalog)?);
            }
        }

        Commands::Scan {
            directory,
            strict,
            format,
            output,
        } => {
            let scan_report = scan::run(&directory)?;

            if let Some(path) = output {
                report::write_report(&scan_report, &path, format)?;
            } else if format == ReportFormat::Text {
                scan::print_summary(&scan_report);
            } else {
                println!("{}", format.serialize(&scan_report)?);
            }

            if scan_report.fails(strict) {
                return Err(anyhow!(
                    "{} of {} catalogs failed validation",
                    scan_report
                        .results
                        .iter()
                        .filter(|row| {
                            row.error.is_some()
                                || row.error_count > 0
                                || (strict && row.warning_count > 0)
                        })
                        .count(),
                    scan_report.files_scanned
                ));
            }
        }
    }

    Ok(())
}
