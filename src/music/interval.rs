// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval tokens and interval normalization.
//!
//! The interval catalog covers interval numbers 1 through 15, each with a
//! double-flat, flat, natural, sharp and double-sharp spelling. Tokens are
//! written with canonical glyphs (`♭3`, `𝄪4`, `13`). Free-form input such as
//! `b3`, `#11`, `M3` or `AA4` is normalized into one of these tokens.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::accidental::{parse_accidental_run, render_accidentals};
use crate::error::{TheoryError, TheoryResult};

/// Semitone offset type
pub type Semitones = i32;

/// Highest interval number in the catalog (a double octave)
pub const MAX_INTERVAL_NUMBER: u8 = 15;

/// Largest interval number that counts as "simple"
pub const MAX_SIMPLE_NUMBER: u8 = 8;

/// Preferred (flat) spelling for each semitone 0..11 above the root
pub const FLAT_TEMPLATE: [&str; 12] = [
    "1", "♭2", "2", "♭3", "3", "4", "♭5", "5", "♭6", "6", "♭7", "7",
];

/// The octave token
pub const OCTAVE: &str = "8";

/// The unison token
pub const UNISON: &str = "1";

/// One spelling in the interval catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalEntry {
    /// Canonical token, e.g. "♭7"
    pub token: String,
    /// Interval number (1-15)
    pub number: u8,
    /// Net accidental alteration (-2..=2)
    pub alteration: i32,
    /// Semitones above the root
    pub semitones: Semitones,
}

/// Semitones of the unaltered interval for each number (major/perfect)
fn base_semitones(number: u8) -> Option<Semitones> {
    let base = match number {
        1 => 0,
        2 => 2,
        3 => 4,
        4 => 5,
        5 => 7,
        6 => 9,
        7 => 11,
        8 => 12,
        9 => 14,
        10 => 16,
        11 => 17,
        12 => 19,
        13 => 21,
        14 => 23,
        15 => 24,
        _ => return None,
    };
    Some(base)
}

/// Whether an interval number takes perfect (P) rather than major/minor qualities
fn is_perfect_number(number: u8) -> bool {
    matches!(number, 1 | 4 | 5 | 8 | 11 | 12 | 15)
}

static INTERVALS: Lazy<Vec<IntervalEntry>> = Lazy::new(|| {
    let mut entries = Vec::new();
    for number in 1..=MAX_INTERVAL_NUMBER {
        let Some(base) = base_semitones(number) else {
            continue;
        };
        for alteration in -2..=2 {
            entries.push(IntervalEntry {
                token: format!("{}{}", render_accidentals(alteration), number),
                number,
                alteration,
                semitones: base + alteration,
            });
        }
    }
    entries
});

static BY_TOKEN: Lazy<HashMap<&'static str, &'static IntervalEntry>> =
    Lazy::new(|| INTERVALS.iter().map(|e| (e.token.as_str(), e)).collect());

/// Quality codes ("M3", "d5", "AA4", ...) to canonical tokens
static QUALITY_CODES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut codes = HashMap::new();
    for entry in INTERVALS.iter() {
        if let Some(quality) = quality_prefix(entry.number, entry.alteration) {
            codes.insert(format!("{}{}", quality, entry.number), entry.token.as_str());
        }
    }
    codes
});

/// Quality prefix for a number/alteration pair, if one exists
fn quality_prefix(number: u8, alteration: i32) -> Option<&'static str> {
    let prefix = if is_perfect_number(number) {
        match alteration {
            -2 => "dd",
            -1 => "d",
            0 => "P",
            1 => "A",
            2 => "AA",
            _ => return None,
        }
    } else {
        match alteration {
            -2 => "d",
            -1 => "m",
            0 => "M",
            1 => "A",
            2 => "AA",
            _ => return None,
        }
    };
    Some(prefix)
}

/// Every canonical interval token in the catalog
pub fn all_interval_tokens() -> impl Iterator<Item = &'static str> {
    INTERVALS.iter().map(|e| e.token.as_str())
}

/// Look up a catalog entry by canonical token
pub fn interval_entry(token: &str) -> Option<&'static IntervalEntry> {
    BY_TOKEN.get(token).copied()
}

/// Semitones above the root for a canonical token
pub fn interval_semitones(token: &str) -> Option<Semitones> {
    interval_entry(token).map(|e| e.semitones)
}

/// Interval number for a canonical token
pub fn interval_number(token: &str) -> Option<u8> {
    interval_entry(token).map(|e| e.number)
}

/// Parse the trailing digits of any token, canonical or not
pub fn trailing_number(token: &str) -> Option<u32> {
    let start = token
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    token[start..].parse().ok()
}

/// Token spelling interval `number` with the given total semitones, if the
/// required alteration fits the catalog
pub fn interval_for_degree(number: u8, semitones: Semitones) -> Option<&'static str> {
    let alteration = semitones - base_semitones(number)?;
    let token = format!("{}{}", render_accidentals(alteration), number);
    interval_entry(&token).map(|e| e.token.as_str())
}

/// Preferred spelling for a semitone offset (reduced modulo 12)
pub fn canonical_interval_for_semitones(semitones: Semitones) -> &'static str {
    FLAT_TEMPLATE[semitones.rem_euclid(12) as usize]
}

/// Quality code for a canonical token (e.g. "♭3" -> "m3")
pub fn quality_code(token: &str) -> Option<String> {
    let entry = interval_entry(token)?;
    quality_prefix(entry.number, entry.alteration).map(|q| format!("{}{}", q, entry.number))
}

/// Whether a token spells the octave (12 semitones above the root)
pub fn is_octave_equivalent(token: &str) -> bool {
    token == OCTAVE || interval_semitones(token) == Some(12)
}

/// Normalize a free-form interval string into a canonical token.
///
/// Tries, in order: a quality code, an already-canonical token, and finally an
/// accidental run followed by an interval number.
pub fn normalize_interval(input: &str) -> TheoryResult<&'static str> {
    if let Some(&token) = QUALITY_CODES.get(input) {
        return Ok(token);
    }
    if let Some(entry) = BY_TOKEN.get(input) {
        return Ok(entry.token.as_str());
    }

    let invalid = || TheoryError::InvalidInterval(input.to_string());

    let digits_len = input
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits_len == 0 {
        trace!(input, "interval has no number");
        return Err(invalid());
    }
    let (accidentals, digits) = input.split_at(input.len() - digits_len);

    let alteration = parse_accidental_run(accidentals).map_err(|_| invalid())?;
    let candidate = format!("{}{}", render_accidentals(alteration), digits);

    match BY_TOKEN.get(candidate.as_str()) {
        Some(entry) => Ok(entry.token.as_str()),
        None => {
            trace!(input, %candidate, "interval not in catalog");
            Err(invalid())
        }
    }
}

/// Normalize, accepting only simple intervals (number 1-8)
pub fn normalize_simple_interval(input: &str) -> TheoryResult<&'static str> {
    let token = normalize_interval(input)?;
    match interval_number(token) {
        Some(n) if n <= MAX_SIMPLE_NUMBER => Ok(token),
        _ => Err(TheoryError::InvalidInterval(input.to_string())),
    }
}

/// Normalize, accepting only compound intervals (number 9 and up)
pub fn normalize_compound_interval(input: &str) -> TheoryResult<&'static str> {
    let token = normalize_interval(input)?;
    match interval_number(token) {
        Some(n) if n > MAX_SIMPLE_NUMBER => Ok(token),
        _ => Err(TheoryError::InvalidInterval(input.to_string())),
    }
}

/// Normalize a loosely formatted list, silently dropping entries that fail
pub fn normalize_intervals<S: AsRef<str>>(inputs: &[S]) -> Vec<&'static str> {
    inputs
        .iter()
        .filter_map(|s| normalize_interval(s.as_ref()).ok())
        .collect()
}

/// Table-driven renumbering between simple, compound and extension forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntervalTransformation {
    /// 2, 4, 6 -> 9, 11, 13
    SimpleToExtension,
    /// 9, 11, 13 -> 2, 4, 6
    ExtensionToSimple,
    /// 2..8 -> 9..15
    SimpleToCompound,
    /// 9..15 -> 2..8
    CompoundToSimple,
}

impl IntervalTransformation {
    pub const ALL: [IntervalTransformation; 4] = [
        IntervalTransformation::SimpleToExtension,
        IntervalTransformation::ExtensionToSimple,
        IntervalTransformation::SimpleToCompound,
        IntervalTransformation::CompoundToSimple,
    ];

    fn map_number(self, number: u8) -> Option<u8> {
        match self {
            IntervalTransformation::SimpleToExtension => match number {
                2 | 4 | 6 => Some(number + 7),
                _ => None,
            },
            IntervalTransformation::ExtensionToSimple => match number {
                9 | 11 | 13 => Some(number - 7),
                _ => None,
            },
            IntervalTransformation::SimpleToCompound => match number {
                2..=8 => Some(number + 7),
                _ => None,
            },
            IntervalTransformation::CompoundToSimple => match number {
                9..=15 => Some(number - 7),
                _ => None,
            },
        }
    }

    /// Apply the table to one token, passing it through unchanged on a miss
    pub fn apply(self, token: &str) -> String {
        TRANSFORMATION_TABLES
            .get(&self)
            .and_then(|table| table.get(token))
            .map(|t| t.to_string())
            .unwrap_or_else(|| token.to_string())
    }

    pub fn name(self) -> &'static str {
        match self {
            IntervalTransformation::SimpleToExtension => "simpleToExtension",
            IntervalTransformation::ExtensionToSimple => "extensionToSimple",
            IntervalTransformation::SimpleToCompound => "simpleToCompound",
            IntervalTransformation::CompoundToSimple => "compoundToSimple",
        }
    }
}

impl fmt::Display for IntervalTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IntervalTransformation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalTransformation::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown interval transformation: '{}'", s))
    }
}

type TransformationTable = HashMap<&'static str, &'static str>;

static TRANSFORMATION_TABLES: Lazy<HashMap<IntervalTransformation, TransformationTable>> =
    Lazy::new(|| {
        IntervalTransformation::ALL
            .into_iter()
            .map(|transformation| {
                let table = INTERVALS
                    .iter()
                    .filter_map(|entry| {
                        let target = transformation.map_number(entry.number)?;
                        let token = format!("{}{}", render_accidentals(entry.alteration), target);
                        let target_entry = BY_TOKEN.get(token.as_str())?;
                        Some((entry.token.as_str(), target_entry.token.as_str()))
                    })
                    .collect();
                (transformation, table)
            })
            .collect()
    });
