// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog update against a freshly extracted template.
//!
//! `update` replays the extraction merge: the template decides which
//! contexts and messages exist, in what order, and with which locations;
//! the old catalog contributes translations, translator notes, and its
//! document attributes. Strings gone from the template are kept as
//! vanished entries so their translations stay available as translation
//! memory. `purge_obsolete` strips that memory when a catalog should
//! ship lean.

use crate::types::{Catalog, Message, Status, TsContext};
use std::collections::{HashMap, HashSet};

/// How many messages each merge bucket received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Template messages whose translation carried over from an active entry.
    pub kept: usize,
    /// Template messages with no old counterpart, entered unfinished.
    pub added: usize,
    /// Template messages matched against a vanished or obsolete entry.
    pub revived: usize,
    /// Active old messages missing from the template, now marked vanished.
    pub vanished: usize,
}

/// Merges an old, translated catalog with an extracted template.
///
/// The result takes its `version`, `language` and `sourcelanguage`
/// attributes from `old`; everything structural comes from `template`.
pub fn update(old: &Catalog, template: &Catalog) -> (Catalog, MergeStats) {
    let mut stats = MergeStats::default();

    // First old position per (context, source, comment); later duplicates
    // are left for the leftover pass.
    let mut index: HashMap<(&str, &str, &str), (usize, usize)> = HashMap::new();
    for (ci, context) in old.contexts.iter().enumerate() {
        for (mi, message) in context.messages.iter().enumerate() {
            index
                .entry((
                    context.name.as_str(),
                    message.source.as_str(),
                    message.comment_key(),
                ))
                .or_insert((ci, mi));
        }
    }

    let mut consumed: HashSet<(usize, usize)> = HashSet::new();
    let mut drained: HashSet<usize> = HashSet::new();

    let mut result = Catalog::new(old.language.clone());
    result.version = old.version.clone();
    result.source_language = old.source_language.clone();

    for template_context in &template.contexts {
        let mut context = TsContext::new(template_context.name.clone());

        for template_message in &template_context.messages {
            let key = (
                template_context.name.as_str(),
                template_message.source.as_str(),
                template_message.comment_key(),
            );
            match index.get(&key) {
                Some(&(ci, mi)) => {
                    consumed.insert((ci, mi));
                    let old_message = &old.contexts[ci].messages[mi];
                    context
                        .messages
                        .push(carry_translation(template_message, old_message, &mut stats));
                }
                None => {
                    stats.added += 1;
                    let mut message = template_message.clone();
                    message.translation = String::new();
                    message.numerus_forms = Vec::new();
                    message.status = Status::Unfinished;
                    context.messages.push(message);
                }
            }
        }

        for (ci, old_context) in old.contexts.iter().enumerate() {
            if old_context.name != template_context.name || drained.contains(&ci) {
                continue;
            }
            drained.insert(ci);
            append_leftovers(&mut context, ci, old_context, &consumed, &mut stats);
        }

        result.contexts.push(context);
    }

    // Contexts the template no longer mentions at all.
    for (ci, old_context) in old.contexts.iter().enumerate() {
        if drained.contains(&ci) {
            continue;
        }
        let mut context = TsContext::new(old_context.name.clone());
        append_leftovers(&mut context, ci, old_context, &consumed, &mut stats);
        if !context.messages.is_empty() {
            result.contexts.push(context);
        }
    }

    (result, stats)
}

/// Removes every vanished and obsolete message, drops contexts left
/// empty, and returns the number of messages removed.
pub fn purge_obsolete(catalog: &mut Catalog) -> usize {
    let mut removed = 0;
    for context in &mut catalog.contexts {
        let before = context.messages.len();
        context.messages.retain(|message| message.status.is_active());
        removed += before - context.messages.len();
    }
    catalog.contexts.retain(|context| !context.messages.is_empty());
    removed
}

fn carry_translation(
    template_message: &Message,
    old_message: &Message,
    stats: &mut MergeStats,
) -> Message {
    let mut message = template_message.clone();
    message.translation = old_message.translation.clone();
    message.numerus_forms = old_message.numerus_forms.clone();
    message.translator_comment = old_message.translator_comment.clone();
    if old_message.status.is_active() {
        stats.kept += 1;
        message.status = old_message.status;
    } else {
        stats.revived += 1;
        message.status =
            if message.translation.is_empty() && message.numerus_forms.is_empty() {
                Status::Unfinished
            } else {
                Status::Finished
            };
    }
    message
}

fn append_leftovers(
    context: &mut TsContext,
    ci: usize,
    old_context: &TsContext,
    consumed: &HashSet<(usize, usize)>,
    stats: &mut MergeStats,
) {
    for (mi, old_message) in old_context.messages.iter().enumerate() {
        if consumed.contains(&(ci, mi)) {
            continue;
        }
        let mut message = old_message.clone();
        if message.status.is_active() {
            stats.vanished += 1;
            message.status = Status::Vanished;
            message.locations.clear();
        }
        context.messages.push(message);
    }
}
