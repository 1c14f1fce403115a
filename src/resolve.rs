// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime lookup over a loaded catalog.
//!
//! A `Resolver` indexes a catalog once by the composite key
//! (context, source, comment) and then answers read-only lookups for the
//! life of the process. Vanished and obsolete entries are never indexed.
//! When two active messages collide on the same key, the first one in
//! document order wins; the linter reports the collision separately.

use crate::lang;
use crate::types::Catalog;
use std::collections::HashMap;

#[derive(Hash, PartialEq, Eq)]
struct Key {
    context: String,
    source: String,
    comment: String,
}

impl Key {
    fn new(context: &str, source: &str, comment: &str) -> Self {
        Key {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.to_string(),
        }
    }
}

struct Entry {
    translation: String,
    numerus_forms: Vec<String>,
    finished: bool,
}

impl Entry {
    fn usable(&self) -> bool {
        self.finished && (!self.translation.is_empty() || !self.numerus_forms.is_empty())
    }
}

/// Immutable lookup index over one catalog.
///
/// Owns its data and is `Send + Sync`; build it once and share it freely.
pub struct Resolver {
    language: String,
    entries: HashMap<Key, Entry>,
}

impl Resolver {
    /// Indexes all active messages of the catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let mut entries = HashMap::new();
        for (context, message) in catalog.messages() {
            if !message.status.is_active() {
                continue;
            }
            let key = Key::new(&context.name, &message.source, message.comment_key());
            entries.entry(key).or_insert_with(|| Entry {
                translation: message.translation.clone(),
                numerus_forms: message.numerus_forms.clone(),
                finished: message.status.is_finished(),
            });
        }
        Resolver {
            language: catalog.language.clone(),
            entries,
        }
    }

    /// Number of indexed lookup keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the translation for a source string.
    ///
    /// Returns the finished, non-empty translation when one exists,
    /// otherwise the source text unchanged. A lookup that supplies a
    /// comment and misses retries once with the empty comment before
    /// falling back. Placeholders come back verbatim; substitution is the
    /// caller's job.
    pub fn resolve<'a>(&'a self, context: &str, source: &'a str, comment: Option<&str>) -> &'a str {
        match self.entry(context, source, comment) {
            Some(entry) if !entry.translation.is_empty() => &entry.translation,
            Some(entry) => entry
                .numerus_forms
                .first()
                .map(String::as_str)
                .unwrap_or(source),
            None => source,
        }
    }

    /// Looks up the plural form for a count.
    ///
    /// Selects the numerus form the catalog language's plural rule picks
    /// for `n` and substitutes `%n` with the count. Numbered placeholders
    /// stay intact. Falls back to the source text, `%n` substituted, when
    /// nothing resolves.
    pub fn resolve_plural(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: u64,
    ) -> String {
        let count = n.to_string();
        if let Some(entry) = self.entry(context, source, comment) {
            if !entry.numerus_forms.is_empty() {
                let index = lang::plural_index(&self.language, n).min(entry.numerus_forms.len() - 1);
                return entry.numerus_forms[index].replace("%n", &count);
            }
            if !entry.translation.is_empty() {
                return entry.translation.replace("%n", &count);
            }
        }
        source.replace("%n", &count)
    }

    fn entry(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Entry> {
        let comment = comment.unwrap_or("");
        if let Some(entry) = self.probe(context, source, comment) {
            return Some(entry);
        }
        if !comment.is_empty() {
            return self.probe(context, source, "");
        }
        None
    }

    fn probe(&self, context: &str, source: &str, comment: &str) -> Option<&Entry> {
        self.entries
            .get(&Key::new(context, source, comment))
            .filter(|entry| entry.usable())
    }
}
