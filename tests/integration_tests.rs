// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for scalebook
//!
//! These tests verify that normalization, transformation, resolution, labels
//! and search work together through the public API.

use std::fs;

use scalebook::music::interval::all_interval_tokens;
use scalebook::music::{generate_labels, rotate_left, NoReferenceScales};
use scalebook::{
    normalize_interval, resolve_note_names, transform_intervals, Catalog, IntervalTransformation,
    LabelTheme, ScaleFamily, SearchOptions, TransformOptions,
};
use tempfile::tempdir;

/// Every canonical token normalizes to itself
#[test]
fn test_interval_round_trip() {
    let mut count = 0;
    for token in all_interval_tokens() {
        assert_eq!(normalize_interval(token), Ok(token));
        count += 1;
    }
    assert_eq!(count, 75);
}

#[test]
fn test_interval_aliases() {
    assert_eq!(normalize_interval("M3"), normalize_interval("3"));
    assert_eq!(normalize_interval("b3"), normalize_interval("♭3"));
    assert_eq!(normalize_interval("#b3"), Ok("3"));

    for bad in ["", "16", "invalid", "♭ 3"] {
        assert!(normalize_interval(bad).is_err(), "{:?}", bad);
    }
}

#[test]
fn test_chromatic_fill_properties() {
    let catalog = Catalog::builtin();
    let inputs: [&[&str]; 4] = [
        &[],
        &["1", "3", "5"],
        &["1", "♭2", "♯2", "3", "♯4", "5", "6", "♭7", "8"],
        &["1", "3", "5", "♭7", "9", "♯11", "13"],
    ];

    for input in inputs {
        for reference in [None, Some("mixolydian"), Some("altered")] {
            let mut options = TransformOptions::new().chromatic();
            options.most_similar_scale = reference.map(str::to_string);
            let filled = transform_intervals(input, &options, catalog);
            assert_eq!(filled.len(), 12);
            for (k, token) in filled.iter().enumerate() {
                let semitones = scalebook::music::interval_semitones(token).map(|s| s.rem_euclid(12));
                assert_eq!(semitones, Some(k as i32), "{:?} slot {}", input, k);
            }
        }
    }
}

#[test]
fn test_explicit_input_wins_over_reference() {
    let catalog = Catalog::builtin();
    // Altered spells pitch class 3 as ♭3; the input asks for ♯9
    let options = TransformOptions::new().chromatic().similar_to("altered");
    let filled = transform_intervals(&["1", "3", "♭7", "♯9"], &options, catalog);
    assert_eq!(filled[3], "♯9");
    assert_eq!(filled[1], "♭2");
}

#[test]
fn test_rotation_inverse() {
    let items: Vec<String> = ScaleFamily::Diatonic
        .mode_intervals(0)
        .into_iter()
        .map(str::to_string)
        .collect();
    for n in -16..=16 {
        assert_eq!(rotate_left(&rotate_left(&items, n), -n), items);
    }
}

#[test]
fn test_note_resolution_letter_rule() {
    let catalog = Catalog::builtin();
    let options = TransformOptions::new();

    assert_eq!(
        catalog.note_names("C", "ionian", &options),
        vec!["C", "D", "E", "F", "G", "A", "B", "C"]
    );
    assert_eq!(
        catalog.note_names("G♭", "mixolydian", &options),
        vec!["G♭", "A♭", "B♭", "C♭", "D♭", "E♭", "F♭", "G♭"]
    );
}

#[test]
fn test_every_mode_spells_seven_letters() {
    let catalog = Catalog::builtin();
    for root in ["C", "D", "E♭", "F♯", "A♭", "B"] {
        for mode in catalog.iter().filter(|c| c.family.is_some()) {
            let names = catalog.note_names(root, &mode.key, &TransformOptions::new());
            let letters: Vec<char> = names.iter().filter_map(|n| n.chars().next()).collect();
            let mut distinct = letters[..7].to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            assert_eq!(distinct.len(), 7, "{} {}: {:?}", root, mode.key, names);
        }
    }
}

#[test]
fn test_invalid_root_resolves_to_nothing() {
    let names = resolve_note_names("X#", &["1", "3", "5"], &TransformOptions::new(), &NoReferenceScales);
    assert!(names.is_empty());
}

#[test]
fn test_locrian_labels() {
    let family = ScaleFamily::Diatonic;
    let labels = generate_labels(
        &[0, 1, 3, 5, 6, 8, 10],
        6,
        family.triad_pattern(),
        family.seventh_pattern(),
    );
    assert_eq!(labels.triad[&0], "°");

    let locrian = Catalog::builtin().get("locrian").unwrap();
    assert_eq!(locrian.label(LabelTheme::Triad, 0), Some("°"));
    assert_eq!(locrian.label(LabelTheme::RomanSeventh, 0), Some("iø7"));
}

#[test]
fn test_search_ranking() {
    let catalog = Catalog::builtin();

    let best = catalog.find_best(&SearchOptions::new().with_query("Major Scale"));
    assert_eq!(best.map(|c| c.key.as_str()), Some("ionian"));

    let results = catalog.search(&SearchOptions::new().with_query("dominant").with_type("arpeggio"));
    let keys: Vec<&str> = results.iter().map(|c| c.key.as_str()).collect();
    assert!(keys.contains(&"dominant7"));
    assert!(!keys.contains(&"mixolydian"));
}

#[test]
fn test_sort_idempotence() {
    let options = TransformOptions::new().sorted();
    let input = ["♭7", "3", "1", "♯11", "5", "9", "♭3"];
    let once = transform_intervals(&input, &options, &NoReferenceScales);
    let twice = transform_intervals(&once, &options, &NoReferenceScales);
    assert_eq!(once, twice);
    assert_eq!(once, vec!["1", "♭3", "3", "5", "♭7", "9", "♯11"]);
}

#[test]
fn test_extension_spelling_pipeline() {
    let catalog = Catalog::builtin();
    let dominant13 = catalog.get("dominant13").unwrap();

    let simple = catalog.transform(
        &dominant13.intervals,
        &TransformOptions::new().with_transformation(IntervalTransformation::ExtensionToSimple),
    );
    assert_eq!(simple, vec!["1", "3", "5", "♭7", "2", "6"]);

    let names = catalog.resolve("C", &dominant13.intervals, &TransformOptions::new().sorted());
    assert_eq!(names, vec!["C", "E", "G", "B♭", "D", "A"]);
}

#[test]
fn test_user_catalog_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.toml");
    fs::write(
        &path,
        r#"
[[collections]]
key = "ionian"
name = "Ionian"
aliases = ["Major", "Major Scale"]
intervals = ["P1", "M2", "M3", "P4", "P5", "M6", "M7", "P8"]
types = ["scale", "mode"]
family = "diatonic"
rotation = 0

[[collections]]
key = "in_sen"
name = "In Sen"
intervals = ["1", "b2", "4", "5", "b7", "8"]
types = ["scale"]
characteristics = ["japanese"]
"#,
    )
    .unwrap();

    let catalog = Catalog::with_file(&path).unwrap();
    assert_eq!(catalog.len(), Catalog::builtin().len() + 1);
    assert_eq!(catalog.get("ionian").unwrap().intervals, Catalog::builtin().get("ionian").unwrap().intervals);
    assert_eq!(
        catalog.note_names("E", "in_sen", &TransformOptions::new()),
        vec!["E", "F", "A", "B", "D", "E"]
    );
    let found = catalog.find_best(&SearchOptions::new().with_query("japanese"));
    assert_eq!(found.map(|c| c.key.as_str()), Some("in_sen"));
}
