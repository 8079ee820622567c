// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Free-text, interval and type search over a catalog.
//!
//! Queries and catalog text go through the same normalization: musical words
//! fold to their symbols ("flat" -> "♭", "maj" -> "M", "dim" -> "°"), ordinal
//! suffixes drop, and the result is split into letter runs, digit runs and
//! single symbols. "Major 7th", "maj7" and "M7" all normalize to "M 7".

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Catalog, NoteCollection};
use crate::music::accidental::{FLAT, SHARP};
use crate::music::interval::normalize_interval;

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").expect("valid letter pattern"));

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+|\d+|\S").expect("valid token pattern"));

static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("flat", FLAT),
        ("sharp", SHARP),
        ("natural", "♮"),
        ("maj", "M"),
        ("major", "M"),
        ("min", "m"),
        ("minor", "m"),
        ("dim", "°"),
        ("diminished", "°"),
        ("aug", "+"),
        ("augmented", "+"),
        ("dom", "dominant"),
        ("fifth", "5"),
        ("sixth", "6"),
        ("seventh", "7"),
        ("ninth", "9"),
        ("eleventh", "11"),
        ("thirteenth", "13"),
    ])
});

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Normalize free text for comparison.
///
/// The single letters "M" and "m" keep their case; every other word is
/// lower-cased. A lone "b" directly before a digit is a flat.
pub fn normalize_text(input: &str) -> String {
    let spaced = input.replace(['-', '_', '/', ','], " ").replace('#', SHARP);

    let folded = LETTER_RUN.replace_all(&spaced, |caps: &Captures| {
        let Some(word) = caps.get(0) else {
            return String::new();
        };
        let before = spaced[..word.start()].chars().next_back();
        let after = spaced[word.end()..].chars().next();
        let text = word.as_str();
        let lower = text.to_lowercase();

        if before.is_some_and(|c| c.is_ascii_digit()) && ORDINAL_SUFFIXES.contains(&lower.as_str()) {
            return String::new();
        }
        if text == "b" && after.is_some_and(|c| c.is_ascii_digit()) {
            return FLAT.to_string();
        }
        if let Some(canonical) = ALIASES.get(lower.as_str()) {
            return format!(" {} ", canonical);
        }
        if text == "M" || text == "m" {
            return format!(" {} ", text);
        }
        format!(" {} ", lower)
    });

    TOKEN
        .find_iter(&folded)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Search criteria; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Free text matched against names, aliases and tags
    pub query: Option<String>,
    /// Intervals every result must contain
    pub intervals: Option<Vec<String>>,
    /// Type tag words every result must carry ("chord", "scale", ...)
    #[serde(rename = "type")]
    pub collection_type: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_type(mut self, collection_type: impl Into<String>) -> Self {
        self.collection_type = Some(collection_type.into());
        self
    }

    pub fn with_intervals<S: AsRef<str>>(mut self, intervals: &[S]) -> Self {
        self.intervals = Some(intervals.iter().map(|s| s.as_ref().to_string()).collect());
        self
    }
}

/// A collection with its normalized searchable text
struct Candidate<'a> {
    collection: &'a NoteCollection,
    name: String,
    aliases: Vec<String>,
    words: HashSet<String>,
}

impl<'a> Candidate<'a> {
    fn new(collection: &'a NoteCollection) -> Self {
        let name = normalize_text(&collection.name);
        let aliases: Vec<String> = collection.aliases.iter().map(|a| normalize_text(a)).collect();

        let mut words: HashSet<String> = HashSet::new();
        let tags = collection.types.iter().chain(&collection.characteristics);
        for text in std::iter::once(name.clone())
            .chain(aliases.iter().cloned())
            .chain(tags.map(|t| normalize_text(t)))
        {
            words.extend(text.split(' ').filter(|w| !w.is_empty()).map(str::to_string));
        }

        Self {
            collection,
            name,
            aliases,
            words,
        }
    }
}

type RankPass = fn(&Candidate<'_>, &str) -> bool;

const RANK_PASSES: [(&str, RankPass); 4] = [
    ("exact name", |c, q| c.name == q),
    ("exact alias", |c, q| c.aliases.iter().any(|a| a == q)),
    ("name prefix", |c, q| c.name.starts_with(q)),
    ("alias prefix", |c, q| c.aliases.iter().any(|a| a.starts_with(q))),
];

fn has_type_words(collection: &NoteCollection, type_words: &[&str]) -> bool {
    if type_words.is_empty() {
        return true;
    }
    let tags = normalize_text(&collection.types.join(" "));
    let tags: HashSet<&str> = tags.split(' ').collect();
    type_words.iter().all(|word| tags.contains(word))
}

impl Catalog {
    /// Search the catalog, most relevant first.
    ///
    /// Type and interval filters apply first. Without a query the filtered
    /// collections come back in catalog order. With a query, collections must
    /// contain every query word and are ranked: exact name, exact alias, name
    /// prefix, alias prefix, then the rest in catalog order.
    pub fn search(&self, options: &SearchOptions) -> Vec<&NoteCollection> {
        let type_text = options
            .collection_type
            .as_deref()
            .map(normalize_text)
            .unwrap_or_default();
        let type_words: Vec<&str> = type_text.split(' ').filter(|w| !w.is_empty()).collect();

        let wanted: Vec<String> = options
            .intervals
            .iter()
            .flatten()
            .map(|i| normalize_interval(i).map_or_else(|_| i.clone(), str::to_string))
            .collect();

        let filtered: Vec<&NoteCollection> = self
            .iter()
            .filter(|c| has_type_words(c, &type_words))
            .filter(|c| wanted.iter().all(|i| c.intervals.contains(i)))
            .collect();

        let query = options
            .query
            .as_deref()
            .map(normalize_text)
            .unwrap_or_default();
        if query.is_empty() {
            debug!(results = filtered.len(), "search without query");
            return filtered;
        }

        let query_words: Vec<&str> = query.split(' ').collect();
        let candidates: Vec<Candidate> = filtered
            .into_iter()
            .map(Candidate::new)
            .filter(|c| query_words.iter().all(|w| c.words.contains(*w)))
            .collect();

        let mut taken = vec![false; candidates.len()];
        let mut ranked = Vec::with_capacity(candidates.len());
        for (pass, matches) in RANK_PASSES {
            for (i, candidate) in candidates.iter().enumerate() {
                if !taken[i] && matches(candidate, &query) {
                    taken[i] = true;
                    ranked.push(candidate.collection);
                }
            }
            trace!(pass, ranked = ranked.len(), "rank pass");
        }
        ranked.extend(
            candidates
                .iter()
                .zip(&taken)
                .filter(|(_, done)| !**done)
                .map(|(c, _)| c.collection),
        );

        debug!(query = %query, results = ranked.len(), "search");
        ranked
    }

    /// The most relevant collection for a search, if any
    pub fn find_best(&self, options: &SearchOptions) -> Option<&NoteCollection> {
        self.search(options).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(results: &[&'a NoteCollection]) -> Vec<&'a str> {
        results.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Major Scale"), "M scale");
        assert_eq!(normalize_text("Dominant 7th"), "dominant 7");
        assert_eq!(normalize_text("maj7"), "M 7");
        assert_eq!(normalize_text("Major Seventh"), "M 7");
        assert_eq!(normalize_text("dim7"), "° 7");
        assert_eq!(normalize_text("m7b5"), "m 7 ♭ 5");
        assert_eq!(normalize_text("7#9"), "7 ♯ 9");
        assert_eq!(normalize_text("flat 9"), "♭ 9");
        assert_eq!(normalize_text("Half-Diminished"), "half °");
        assert_eq!(normalize_text("  lots   of\tspace "), "lots of space");
    }

    #[test]
    fn test_case_kept_only_for_single_m() {
        assert_eq!(normalize_text("M"), "M");
        assert_eq!(normalize_text("m"), "m");
        assert_eq!(normalize_text("MIXOLYDIAN"), "mixolydian");
        assert_eq!(normalize_text("Cmaj7"), "cmaj 7");
    }

    #[test]
    fn test_major_scale_finds_ionian_first() {
        let catalog = Catalog::builtin();
        let results = catalog.search(&SearchOptions::new().with_query("Major Scale"));
        assert_eq!(results.first().map(|c| c.key.as_str()), Some("ionian"));
    }

    #[test]
    fn test_type_filter() {
        let catalog = Catalog::builtin();
        let options = SearchOptions::new().with_query("dominant").with_type("arpeggio");
        let found = keys(&catalog.search(&options));
        assert!(found.contains(&"dominant7"));
        assert!(!found.contains(&"mixolydian"));
        assert!(found.iter().all(|k| catalog.get(k).is_some_and(|c| c.has_type("arpeggio"))));
    }

    #[test]
    fn test_exact_name_outranks_prefix() {
        let catalog = Catalog::builtin();
        let found = keys(&catalog.search(&SearchOptions::new().with_query("dorian")));
        assert_eq!(found[0], "dorian");
        assert!(found.contains(&"dorian_flat2"));
        assert!(found.contains(&"dorian_sharp4"));
    }

    #[test]
    fn test_symbol_and_word_queries_agree() {
        let catalog = Catalog::builtin();
        let by_word = catalog.find_best(&SearchOptions::new().with_query("diminished seventh"));
        let by_symbol = catalog.find_best(&SearchOptions::new().with_query("°7"));
        assert_eq!(by_word.map(|c| c.key.as_str()), Some("diminished7"));
        assert_eq!(by_symbol.map(|c| c.key.as_str()), Some("diminished7"));
    }

    #[test]
    fn test_interval_filter() {
        let catalog = Catalog::builtin();
        let options = SearchOptions::new().with_type("seventh").with_intervals(&["3", "b7"]);
        let found = keys(&catalog.search(&options));
        assert!(found.contains(&"dominant7"));
        assert!(found.contains(&"augmented7"));
        assert!(!found.contains(&"major7"));
        assert!(!found.contains(&"minor7"));
    }

    #[test]
    fn test_no_query_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let found = keys(&catalog.search(&SearchOptions::new().with_type("triad")));
        assert_eq!(found[..4], ["major_triad", "minor_triad", "diminished_triad", "augmented_triad"]);
    }

    fn blues_catalog() -> Catalog {
        let intervals = ["1", "♭3", "4", "5", "♭7"];
        Catalog::from_collections([
            NoteCollection::new("tagged", "Pentatonic", &intervals).with_characteristics(&["blues"]),
            NoteCollection::new("alias_prefix", "Minor Hexatonic", &intervals).with_aliases(&["Blues Minor"]),
            NoteCollection::new("name_prefix", "Blues Major", &intervals),
            NoteCollection::new("whole_tone", "Whole Tone", &intervals),
            NoteCollection::new("exact_alias", "Six Note", &intervals).with_aliases(&["Blues"]),
            NoteCollection::new("exact_name", "Blues", &intervals),
            NoteCollection::new("tagged_late", "Hirajoshi", &intervals).with_characteristics(&["Blues"]),
        ])
    }

    #[test]
    fn test_ranking_order() {
        let catalog = blues_catalog();
        let found = keys(&catalog.search(&SearchOptions::new().with_query("blues")));
        assert_eq!(
            found,
            ["exact_name", "exact_alias", "name_prefix", "alias_prefix", "tagged", "tagged_late"]
        );
    }

    #[test]
    fn test_type_filter_ignores_case() {
        let catalog = Catalog::builtin();
        let upper = keys(&catalog.search(&SearchOptions::new().with_type("ARPEGGIO")));
        let lower = keys(&catalog.search(&SearchOptions::new().with_type("arpeggio")));
        assert!(!upper.is_empty());
        assert_eq!(upper, lower);
        assert!(upper.iter().all(|k| catalog.get(k).is_some_and(|c| c.has_type("arpeggio"))));
    }

    #[test]
    fn test_type_words_keep_m_case() {
        let catalog = Catalog::from_collections([
            NoteCollection::new("upper", "Upper", &["1", "3", "5"]).with_types(&["triad", "M"]),
            NoteCollection::new("lower", "Lower", &["1", "♭3", "5"]).with_types(&["triad", "m"]),
        ]);
        let search = |t: &str| keys(&catalog.search(&SearchOptions::new().with_type(t)));
        assert_eq!(search("M"), ["upper"]);
        assert_eq!(search("m"), ["lower"]);
        assert_eq!(search("major"), ["upper"]);
        assert_eq!(search("minor triad"), ["lower"]);
        assert_eq!(search("triad"), ["upper", "lower"]);
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .find_best(&SearchOptions::new().with_query("polka"))
            .is_none());
        assert_eq!(catalog.search(&SearchOptions::new()).len(), catalog.len());
    }
}
