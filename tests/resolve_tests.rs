// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for catalog loading and runtime lookup against the reference catalog

use lincat::resolve::Resolver;
use lincat::ts;
use lincat::types::{Catalog, Status};
use std::path::{Path, PathBuf};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/mythgame_nb.ts")
}

fn load_fixture() -> Catalog {
    ts::load_file(&fixture_path()).expect("reference catalog should load")
}

#[test]
fn test_fixture_shape() {
    let catalog = load_fixture();
    assert_eq!(catalog.version, "2.0");
    assert_eq!(catalog.language, "nb_NO");
    assert_eq!(catalog.source_language, None);
    assert_eq!(catalog.contexts.len(), 10);
    assert_eq!(catalog.message_count(), 225);
    assert_eq!(catalog.count_status(Status::Finished), 147);
    assert_eq!(catalog.count_status(Status::Obsolete), 78);
    assert_eq!(catalog.count_status(Status::Unfinished), 0);
    assert_eq!(catalog.count_status(Status::Vanished), 0);

    let names: Vec<&str> = catalog.contexts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "(GameTypes)",
            "GameHandler",
            "GameScanner",
            "GameUI",
            "MythControls",
            "MythGameGeneralSettings",
            "MythGamePlayerEditor",
            "MythGamePlayerSettings",
            "QObject",
            "ThemeUI",
        ]
    );
}

#[test]
fn test_obsolete_entries_carry_no_locations() {
    let catalog = load_fixture();
    for (context, message) in catalog.messages() {
        if !message.status.is_active() {
            assert!(
                message.locations.is_empty(),
                "inactive entry {} / {:?} should carry no locations",
                context.name,
                message.source
            );
        }
    }
}

#[test]
fn test_every_finished_translation_resolves_exactly() {
    let catalog = load_fixture();
    let resolver = Resolver::new(&catalog);

    let mut checked = 0;
    for (context, message) in catalog.messages() {
        if message.status == Status::Finished && !message.translation.is_empty() {
            let resolved =
                resolver.resolve(&context.name, &message.source, message.comment.as_deref());
            assert_eq!(
                resolved, message.translation,
                "lookup for {} / {:?}",
                context.name, message.source
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 147, "every finished entry should have been checked");
}

#[test]
fn test_disambiguation_comments_share_one_translation() {
    let catalog = load_fixture();
    let resolver = Resolver::new(&catalog);

    for comment in [
        "Unknown country",
        "Unknown game name",
        "Unknown genre",
        "Unknown plot",
        "Unknown publisher",
    ] {
        assert_eq!(
            resolver.resolve("GameHandler", "Unknown", Some(comment)),
            "Ukjent",
            "comment {:?}",
            comment
        );
    }

    // the same comment disambiguates another source independently
    assert_eq!(
        resolver.resolve("GameHandler", "Unknown %1", Some("Unknown genre")),
        "Ukjent %1"
    );

    // no comment-free "Unknown" entry exists, so a bare lookup falls back
    assert_eq!(resolver.resolve("GameHandler", "Unknown", None), "Unknown");
}

#[test]
fn test_obsolete_entries_do_not_resolve() {
    let catalog = load_fixture();
    let resolver = Resolver::new(&catalog);
    let source = "%1 appears to be missing.\nRemove it from the database?";

    // the GameHandler copy is finished and resolves
    assert_eq!(
        resolver.resolve("GameHandler", source, None),
        "Det ser ut som «%1» mangler. \nFjerne den fra databasen?"
    );

    // the QObject copy of the same source is obsolete and must not
    assert_eq!(resolver.resolve("QObject", source, None), source);
    assert_eq!(
        resolver.resolve("QObject", "Favourite display order", None),
        "Favourite display order"
    );
}

#[test]
fn test_missing_lookups_fall_back_to_source() {
    let catalog = load_fixture();
    let resolver = Resolver::new(&catalog);

    assert_eq!(
        resolver.resolve("GameUI", "No such string", None),
        "No such string"
    );
    assert_eq!(
        resolver.resolve("NoSuchContext", "Favorites", None),
        "Favorites"
    );

    // a stale comment relaxes to the comment-free entry
    assert_eq!(
        resolver.resolve("GameUI", "Favorites", Some("main menu")),
        "Favoritter"
    );
}

#[test]
fn test_resolver_shared_across_threads() {
    let catalog = load_fixture();
    let resolver = Resolver::new(&catalog);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(
                    resolver.resolve("GameScanner", "Verifying game files...", None),
                    "Sjekker spillfiler..."
                );
                assert_eq!(
                    resolver.resolve("MythGameGeneralSettings", "Favorite display order", None),
                    "Rekkefølge for favoritter"
                );
            });
        }
    });
}
