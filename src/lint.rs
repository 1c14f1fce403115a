// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog validation.
//!
//! `check` walks a loaded catalog and reports authoring defects: broken
//! placeholder parity, ambiguous lookup keys, status/text disagreements,
//! numerus form counts that do not fit the catalog language. Findings are
//! returned in document order, catalog-level ones first, so output is
//! stable across runs.

use crate::lang;
use crate::types::{Catalog, Message, Status};
use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Finding severity. Errors make a catalog unusable, warnings are
/// authoring defects, infos are hygiene notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    Info,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding. `context` and `source` are empty for
/// catalog-level findings such as an unknown language attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub level: Level,
    pub context: String,
    pub source: String,
    pub detail: String,
}

impl Finding {
    fn new(level: Level, context: &str, source: &str, detail: String) -> Self {
        Finding {
            level,
            context: context.to_string(),
            source: source.to_string(),
            detail,
        }
    }

    fn error(context: &str, source: &str, detail: String) -> Self {
        Finding::new(Level::Error, context, source, detail)
    }

    fn warning(context: &str, source: &str, detail: String) -> Self {
        Finding::new(Level::Warning, context, source, detail)
    }

    fn info(context: &str, source: &str, detail: String) -> Self {
        Finding::new(Level::Info, context, source, detail)
    }
}

/// Number of findings at one level.
pub fn count_level(findings: &[Finding], level: Level) -> usize {
    findings.iter().filter(|f| f.level == level).count()
}

/// Validates a catalog and returns all findings.
pub fn check(catalog: &Catalog) -> Result<Vec<Finding>> {
    let placeholder = Regex::new(r"%(\d+)")?;
    let mut findings = Vec::new();

    let (primary, _) = lang::split_locale(&catalog.language);
    if !lang::is_valid_iso639_1(primary) {
        findings.push(Finding::warning(
            "",
            "",
            format!("language attribute \"{}\" is not a known ISO 639-1 code", catalog.language),
        ));
    }
    let expected_forms = lang::plural_form_count(&catalog.language);

    for context in &catalog.contexts {
        if context.name.is_empty() {
            findings.push(Finding::error("", "", "context with empty name".to_string()));
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for message in &context.messages {
            if message.source.is_empty() {
                findings.push(Finding::error(
                    &context.name,
                    "",
                    "message with empty source".to_string(),
                ));
            }

            if message.status.is_active()
                && !seen.insert((message.source.as_str(), message.comment_key()))
            {
                findings.push(Finding::warning(
                    &context.name,
                    &message.source,
                    match &message.comment {
                        Some(comment) => format!(
                            "duplicate entry for this source with comment \"{}\"; the first one wins",
                            comment
                        ),
                        None => "duplicate entry for this source; the first one wins".to_string(),
                    },
                ));
            }

            check_message(
                &mut findings,
                &context.name,
                message,
                &placeholder,
                expected_forms,
            );
        }
    }

    Ok(findings)
}

fn check_message(
    findings: &mut Vec<Finding>,
    context: &str,
    message: &Message,
    placeholder: &Regex,
    expected_forms: usize,
) {
    let translated = !message.translation.is_empty() || !message.numerus_forms.is_empty();

    if message.status.is_finished() {
        if translated {
            if !message.translation.is_empty() {
                check_placeholders(findings, context, message, &message.translation, placeholder);
            }
            for form in &message.numerus_forms {
                if !form.is_empty() {
                    check_placeholders(findings, context, message, form, placeholder);
                }
            }
        } else {
            findings.push(Finding::warning(
                context,
                &message.source,
                "finished entry has no translation text".to_string(),
            ));
        }
    }

    if message.status == Status::Unfinished && translated {
        findings.push(Finding::info(
            context,
            &message.source,
            "entry has translation text but is still marked unfinished".to_string(),
        ));
    }

    if !message.status.is_active() && !message.locations.is_empty() {
        findings.push(Finding::info(
            context,
            &message.source,
            format!("{} entry still carries location provenance", message.status),
        ));
    }

    if message.numerus {
        if message.status.is_finished()
            && !message.numerus_forms.is_empty()
            && message.numerus_forms.len() != expected_forms
        {
            findings.push(Finding::warning(
                context,
                &message.source,
                format!(
                    "has {} numerus forms, the catalog language expects {}",
                    message.numerus_forms.len(),
                    expected_forms
                ),
            ));
        }
    } else if !message.numerus_forms.is_empty() {
        findings.push(Finding::warning(
            context,
            &message.source,
            "carries numerus forms without the numerus flag".to_string(),
        ));
    }
}

fn check_placeholders(
    findings: &mut Vec<Finding>,
    context: &str,
    message: &Message,
    translation: &str,
    placeholder: &Regex,
) {
    let wanted = placeholders(placeholder, &message.source);
    let got = placeholders(placeholder, translation);
    if wanted == got {
        return;
    }

    let mut parts = Vec::new();
    let missing: Vec<String> = wanted.difference(&got).map(|n| format!("%{}", n)).collect();
    if !missing.is_empty() {
        parts.push(format!("missing {}", missing.join(", ")));
    }
    let unexpected: Vec<String> = got.difference(&wanted).map(|n| format!("%{}", n)).collect();
    if !unexpected.is_empty() {
        parts.push(format!("unexpected {}", unexpected.join(", ")));
    }

    findings.push(Finding::warning(
        context,
        &message.source,
        format!("placeholder mismatch: {}", parts.join("; ")),
    ));
}

fn placeholders(placeholder: &Regex, text: &str) -> BTreeSet<u32> {
    placeholder
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
