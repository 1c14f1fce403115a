// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use anyhow::{bail, Context as _, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "yaml" | "yml" => Some(ReportFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ReportFormat::Text => {
                bail!("text reports print to the terminal; use json or yaml for file output")
            }
            ReportFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Serializes a report and writes it to disk.
pub fn write_report<T: Serialize>(value: &T, path: &Path, format: ReportFormat) -> Result<()> {
    let serialized = format.serialize(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serialized).with_context(|| format!("writing {}", path.display()))?;
    println!("Report saved to: {}", path.display());
    Ok(())
}
