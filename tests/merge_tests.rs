// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the extraction-merge lifecycle on the reference catalog

use lincat::merge;
use lincat::ts;
use lincat::types::{Catalog, Message, Status, TsContext};
use std::path::{Path, PathBuf};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/mythgame_nb.ts")
}

fn load_fixture() -> Catalog {
    ts::load_file(&fixture_path()).expect("reference catalog should load")
}

/// What a fresh string extraction would produce: the active strings with
/// their keys and locations, no translations, no inactive entries.
fn extraction_template(old: &Catalog) -> Catalog {
    let mut template = Catalog::new("en_US");
    for context in &old.contexts {
        let mut extracted = TsContext::new(context.name.clone());
        for message in &context.messages {
            if !message.status.is_active() {
                continue;
            }
            let mut entry = Message::new(message.source.clone());
            entry.comment = message.comment.clone();
            entry.extra_comment = message.extra_comment.clone();
            entry.locations = message.locations.clone();
            entry.numerus = message.numerus;
            extracted.messages.push(entry);
        }
        if !extracted.messages.is_empty() {
            template.contexts.push(extracted);
        }
    }
    template
}

#[test]
fn test_reextraction_keeps_every_translation() {
    let old = load_fixture();
    let template = extraction_template(&old);

    let (merged, stats) = merge::update(&old, &template);
    assert_eq!(stats.kept, 147);
    assert_eq!(stats.added, 0);
    assert_eq!(stats.revived, 0);
    assert_eq!(stats.vanished, 0);

    // attributes come from the translated catalog, not the template
    assert_eq!(merged.language, "nb_NO");

    // obsolete entries ride along untouched as translation memory
    assert_eq!(merged.message_count(), 225);
    assert_eq!(merged.count_status(Status::Obsolete), 78);
    assert_eq!(merged.count_status(Status::Finished), 147);
}

#[test]
fn test_dropped_strings_vanish_and_new_strings_enter_unfinished() {
    let old = load_fixture();
    let mut template = extraction_template(&old);

    let dropped = template.contexts[0].messages.remove(0);
    template.contexts[0]
        .messages
        .push(Message::new("Brand new string"));

    let (merged, stats) = merge::update(&old, &template);
    assert_eq!(stats.kept, 146);
    assert_eq!(stats.added, 1);
    assert_eq!(stats.vanished, 1);

    let game_types = merged.context("(GameTypes)").expect("(GameTypes) context");

    let vanished = game_types
        .messages
        .iter()
        .find(|m| m.source == dropped.source)
        .expect("dropped string should stay as a vanished entry");
    assert_eq!(vanished.status, Status::Vanished);
    assert!(vanished.locations.is_empty());
    assert!(
        !vanished.translation.is_empty(),
        "the old translation stays available as translation memory"
    );

    let added = game_types
        .messages
        .iter()
        .find(|m| m.source == "Brand new string")
        .expect("new string should appear");
    assert_eq!(added.status, Status::Unfinished);
    assert_eq!(added.translation, "");
}

#[test]
fn test_revived_translation_comes_back_finished() {
    let old = load_fixture();
    let mut template = extraction_template(&old);

    // a string that previously went obsolete shows up in the source again
    let mut qobject = TsContext::new("QObject");
    qobject
        .messages
        .push(Message::new("Favourite display order"));
    template.contexts.push(qobject);

    let (merged, stats) = merge::update(&old, &template);
    assert_eq!(stats.revived, 1);
    assert_eq!(stats.kept, 147);

    let revived = &merged.context("QObject").expect("QObject context").messages[0];
    assert_eq!(revived.source, "Favourite display order");
    assert_eq!(revived.translation, "Rekkefølge for favoritter");
    assert_eq!(revived.status, Status::Finished);
}

#[test]
fn test_purge_strips_translation_memory() {
    let old = load_fixture();
    let template = extraction_template(&old);
    let (mut merged, _) = merge::update(&old, &template);

    let removed = merge::purge_obsolete(&mut merged);
    assert_eq!(removed, 78);
    assert_eq!(merged.message_count(), 147);
    assert!(
        merged.context("QObject").is_none(),
        "a context holding only inactive entries disappears"
    );

    // the purged catalog still serializes and reloads cleanly
    let xml = ts::to_xml(&merged).expect("serialize should succeed");
    let reloaded = ts::parse(&xml).expect("reparse should succeed");
    assert_eq!(reloaded, merged);
}
