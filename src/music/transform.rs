// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval-set transformations and chromatic fill.
//!
//! Transformation is formatting, not validation: tokens the tables don't know
//! pass through unchanged and nothing here fails.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::interval::{
    interval_semitones, is_octave_equivalent, IntervalTransformation, Semitones, FLAT_TEMPLATE,
    UNISON,
};
use super::rotation::rotate_left;

/// Source of reference-scale spellings for chromatic fill
pub trait ReferenceScales {
    /// Interval tokens of the collection registered under `key`
    fn reference_intervals(&self, key: &str) -> Option<&[String]>;
}

/// A reference source with no scales, for callers without a catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReferenceScales;

impl ReferenceScales for NoReferenceScales {
    fn reference_intervals(&self, _key: &str) -> Option<&[String]> {
        None
    }
}

/// Options controlling `transform_intervals`; every field is independent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Renumber tokens between simple, compound and extension forms
    pub interval_transformation: Option<IntervalTransformation>,
    /// Drop octave-equivalent tokens before anything else
    pub filter_out_octave: bool,
    /// Stable sort by semitone value (ignored when filling)
    pub should_sort: bool,
    /// Cyclic left rotation; negative rotates right
    pub rotate_left: Option<isize>,
    /// Expand into a 12-slot chromatic spelling
    pub fill_chromatic: bool,
    /// Catalog key whose spellings fill the chromatic background
    pub most_similar_scale: Option<String>,
    /// Rotate so absolute pitch class 0 lands at index 0 (needs `root_note_integer`)
    #[serde(rename = "rotateToRootInteger0")]
    pub rotate_to_root_integer_0: bool,
    /// Pitch class of the root
    pub root_note_integer: Option<i32>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transformation(mut self, transformation: IntervalTransformation) -> Self {
        self.interval_transformation = Some(transformation);
        self
    }

    pub fn without_octave(mut self) -> Self {
        self.filter_out_octave = true;
        self
    }

    pub fn sorted(mut self) -> Self {
        self.should_sort = true;
        self
    }

    pub fn rotated(mut self, n: isize) -> Self {
        self.rotate_left = Some(n);
        self
    }

    pub fn chromatic(mut self) -> Self {
        self.fill_chromatic = true;
        self
    }

    pub fn similar_to(mut self, key: impl Into<String>) -> Self {
        self.most_similar_scale = Some(key.into());
        self
    }

    pub fn rooted_at(mut self, root_note_integer: i32) -> Self {
        self.rotate_to_root_integer_0 = true;
        self.root_note_integer = Some(root_note_integer);
        self
    }

    /// Total left rotation requested for a fixed-length chromatic array
    pub(crate) fn chromatic_rotation(&self, root: Option<i32>) -> isize {
        let to_root = match (self.rotate_to_root_integer_0, root) {
            (true, Some(root)) => -(root as isize),
            _ => 0,
        };
        to_root + self.rotate_left.unwrap_or(0)
    }
}

/// Transform an interval set according to `options`.
///
/// Without chromatic fill: filter octave, renumber, sort, rotate. With
/// chromatic fill the result always has 12 slots, slot `k` holding a spelling
/// of `k` semitones above the root before any rotation.
pub fn transform_intervals<S, R>(intervals: &[S], options: &TransformOptions, reference: &R) -> Vec<String>
where
    S: AsRef<str>,
    R: ReferenceScales + ?Sized,
{
    let input: Vec<&str> = intervals
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !(options.filter_out_octave && is_octave_equivalent(token)))
        .collect();

    if options.fill_chromatic {
        let slots = chromatic_slots(&input, options, reference);
        return rotate_left(&slots, options.chromatic_rotation(options.root_note_integer));
    }

    let mut working: Vec<String> = input
        .iter()
        .map(|token| renumber(token, options.interval_transformation))
        .collect();

    if options.should_sort {
        working.sort_by_key(|token| interval_semitones(token).unwrap_or(Semitones::MAX));
    }

    match options.rotate_left {
        Some(n) => rotate_left(&working, n),
        None => working,
    }
}

/// Build the unrotated 12-slot chromatic spelling: flat template, then the
/// reference scale, then explicit input, then renumbering.
pub(crate) fn chromatic_slots<R>(input: &[&str], options: &TransformOptions, reference: &R) -> Vec<String>
where
    R: ReferenceScales + ?Sized,
{
    let mut slots: Vec<String> = FLAT_TEMPLATE.iter().map(|t| t.to_string()).collect();

    if let Some(key) = &options.most_similar_scale {
        match reference.reference_intervals(key) {
            Some(reference_intervals) => {
                overlay(&mut slots, reference_intervals.iter().map(String::as_str))
            }
            None => debug!(key = %key, "reference scale not found, keeping flat template"),
        }
    }

    overlay(&mut slots, input.iter().copied());

    slots
        .iter()
        .map(|token| renumber(token, options.interval_transformation))
        .collect()
}

/// Write tokens into their semitone slots, skipping root-equivalent spellings
/// other than the unison itself. Reference-scale tokens are skipped the same
/// way as direct input, so a reference "8" never replaces slot 0.
fn overlay<'a>(slots: &mut [String], tokens: impl Iterator<Item = &'a str>) {
    for token in tokens {
        let Some(semitones) = interval_semitones(token) else {
            trace!(token, "no semitone value, not placed");
            continue;
        };
        let slot = semitones.rem_euclid(12) as usize;
        if slot == 0 && token != UNISON {
            continue;
        }
        slots[slot] = token.to_string();
    }
}

fn renumber(token: &str, transformation: Option<IntervalTransformation>) -> String {
    match transformation {
        Some(t) => t.apply(token),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Fixed(HashMap<String, Vec<String>>);

    impl ReferenceScales for Fixed {
        fn reference_intervals(&self, key: &str) -> Option<&[String]> {
            self.0.get(key).map(Vec::as_slice)
        }
    }

    fn mixolydian() -> Fixed {
        let intervals = ["1", "2", "3", "4", "5", "6", "♭7", "8"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Fixed(HashMap::from([("mixolydian".to_string(), intervals)]))
    }

    #[test]
    fn test_passthrough() {
        let out = transform_intervals(&["1", "3", "5"], &TransformOptions::new(), &NoReferenceScales);
        assert_eq!(out, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_filter_octave() {
        let options = TransformOptions::new().without_octave();
        let out = transform_intervals(&["1", "3", "5", "8"], &options, &NoReferenceScales);
        assert_eq!(out, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_transformation_with_passthrough() {
        let options = TransformOptions::new().with_transformation(IntervalTransformation::SimpleToExtension);
        let out = transform_intervals(&["1", "3", "♭7", "2", "♯4", "weird"], &options, &NoReferenceScales);
        assert_eq!(out, vec!["1", "3", "♭7", "9", "♯11", "weird"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let options = TransformOptions::new().sorted();
        let once = transform_intervals(&["5", "♯4", "♭5", "1", "9"], &options, &NoReferenceScales);
        assert_eq!(once, vec!["1", "♯4", "♭5", "5", "9"]);
        let twice = transform_intervals(&once, &options, &NoReferenceScales);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rotation() {
        let options = TransformOptions::new().rotated(1);
        let out = transform_intervals(&["1", "3", "5"], &options, &NoReferenceScales);
        assert_eq!(out, vec!["3", "5", "1"]);

        let back = transform_intervals(&out, &TransformOptions::new().rotated(-1), &NoReferenceScales);
        assert_eq!(back, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_chromatic_fill_length_and_slots() {
        let options = TransformOptions::new().chromatic();
        for input in [vec![], vec!["1"], vec!["1", "♯2", "3", "♯4", "5", "6", "7", "8"]] {
            let out = transform_intervals(&input, &options, &NoReferenceScales);
            assert_eq!(out.len(), 12);
            for (k, token) in out.iter().enumerate() {
                assert_eq!(interval_semitones(token).map(|s| s.rem_euclid(12)), Some(k as i32));
            }
        }
    }

    #[test]
    fn test_chromatic_fill_overlay_precedence() {
        let reference = mixolydian();
        let options = TransformOptions::new().chromatic().similar_to("mixolydian");

        let out = transform_intervals(&["1", "3", "5", "♯6"], &options, &reference);
        assert_eq!(out[10], "♯6");
        assert_eq!(out[4], "3");
        assert_eq!(out[9], "6");
        assert_eq!(out[0], "1");
    }

    #[test]
    fn test_chromatic_fill_keeps_unison() {
        let options = TransformOptions::new().chromatic();
        let out = transform_intervals(&["8", "15", "3"], &options, &NoReferenceScales);
        assert_eq!(out[0], "1");
        assert_eq!(out[4], "3");
    }

    #[test]
    fn test_reference_octave_skips_unison_slot() {
        let options = TransformOptions::new().chromatic().similar_to("mixolydian");
        let out = transform_intervals(&["3", "5"], &options, &mixolydian());
        assert_eq!(out[0], "1");
        assert_eq!(out[10], "♭7");
    }

    #[test]
    fn test_chromatic_fill_unknown_reference() {
        let options = TransformOptions::new().chromatic().similar_to("nothing");
        let out = transform_intervals(&["1"], &options, &mixolydian());
        assert_eq!(out, FLAT_TEMPLATE.to_vec());
    }

    #[test]
    fn test_chromatic_fill_transformation() {
        let options = TransformOptions::new()
            .chromatic()
            .with_transformation(IntervalTransformation::SimpleToExtension);
        let out = transform_intervals(&["1", "3", "5", "♭7"], &options, &NoReferenceScales);
        assert_eq!(out[1], "♭9");
        assert_eq!(out[2], "9");
        assert_eq!(out[5], "11");
    }

    #[test]
    fn test_chromatic_fill_root_rotation() {
        // D root: pitch class 0 (C) is a minor seventh above, slot 10
        let options = TransformOptions::new().chromatic().rooted_at(2);
        let out = transform_intervals(&["1", "3", "5", "7"], &options, &NoReferenceScales);
        assert_eq!(out[0], "♭7");
        assert_eq!(out[2], "1");
        assert_eq!(out[6], "3");
    }

    #[test]
    fn test_root_rotation_needs_root() {
        let mut options = TransformOptions::new().chromatic();
        options.rotate_to_root_integer_0 = true;
        let out = transform_intervals(&["1"], &options, &NoReferenceScales);
        assert_eq!(out[0], "1");
    }

    #[test]
    fn test_chromatic_rotation_is_additive() {
        let options = TransformOptions::new().chromatic().rooted_at(2).rotated(1);
        let out = transform_intervals(&["1"], &options, &NoReferenceScales);
        assert_eq!(out[1], "1");
    }
}
