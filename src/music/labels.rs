// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord-quality labels and per-pitch-class label themes.
//!
//! Each scale family carries a fixed triad and seventh quality pattern for its
//! first mode. Labels for the Nth mode come from rotating those patterns left
//! by N and pairing them with that mode's own pitch classes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::FLAT_TEMPLATE;
use super::note::PitchClass;
use super::rotation::rotate_left;
use crate::error::TheoryError;

/// Upper-case Roman numerals for degrees 1-7
const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriadQuality {
    #[serde(rename = "M")]
    Major,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "°")]
    Diminished,
    #[serde(rename = "+")]
    Augmented,
}

impl TriadQuality {
    pub fn symbol(self) -> &'static str {
        match self {
            TriadQuality::Major => "M",
            TriadQuality::Minor => "m",
            TriadQuality::Diminished => "°",
            TriadQuality::Augmented => "+",
        }
    }

    /// Roman numeral for this quality on a 0-based scale degree
    pub fn roman(self, degree: usize) -> String {
        let upper = NUMERALS[degree % 7];
        match self {
            TriadQuality::Major => upper.to_string(),
            TriadQuality::Minor => upper.to_lowercase(),
            TriadQuality::Diminished => format!("{}°", upper.to_lowercase()),
            TriadQuality::Augmented => format!("{}+", upper),
        }
    }
}

impl fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TriadQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" | "maj" | "major" => Ok(TriadQuality::Major),
            "m" | "min" | "minor" => Ok(TriadQuality::Minor),
            "°" | "dim" | "diminished" => Ok(TriadQuality::Diminished),
            "+" | "aug" | "augmented" => Ok(TriadQuality::Augmented),
            _ => Err(TheoryError::UnknownQuality(s.to_string())),
        }
    }
}

/// Seventh-chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeventhQuality {
    #[serde(rename = "M7")]
    Major7,
    #[serde(rename = "7")]
    Dominant7,
    #[serde(rename = "m7")]
    Minor7,
    #[serde(rename = "ø7")]
    HalfDiminished7,
    #[serde(rename = "°7")]
    Diminished7,
    #[serde(rename = "m(M7)")]
    MinorMajor7,
    #[serde(rename = "+M7")]
    AugmentedMajor7,
}

impl SeventhQuality {
    pub fn symbol(self) -> &'static str {
        match self {
            SeventhQuality::Major7 => "M7",
            SeventhQuality::Dominant7 => "7",
            SeventhQuality::Minor7 => "m7",
            SeventhQuality::HalfDiminished7 => "ø7",
            SeventhQuality::Diminished7 => "°7",
            SeventhQuality::MinorMajor7 => "m(M7)",
            SeventhQuality::AugmentedMajor7 => "+M7",
        }
    }

    /// Whether the chord's triad is written with an upper-case numeral
    fn upper_case(self) -> bool {
        match self {
            SeventhQuality::Major7 | SeventhQuality::Dominant7 | SeventhQuality::AugmentedMajor7 => {
                true
            }
            SeventhQuality::Minor7
            | SeventhQuality::HalfDiminished7
            | SeventhQuality::Diminished7
            | SeventhQuality::MinorMajor7 => false,
        }
    }

    /// Roman numeral with the quality symbol appended, e.g. "V7", "viiø7"
    pub fn roman(self, degree: usize) -> String {
        let upper = NUMERALS[degree % 7];
        let numeral = if self.upper_case() {
            upper.to_string()
        } else {
            upper.to_lowercase()
        };
        format!("{}{}", numeral, self.symbol())
    }
}

impl fmt::Display for SeventhQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for SeventhQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M7" | "maj7" => Ok(SeventhQuality::Major7),
            "7" | "dom7" => Ok(SeventhQuality::Dominant7),
            "m7" | "min7" => Ok(SeventhQuality::Minor7),
            "ø7" | "m7b5" | "m7♭5" => Ok(SeventhQuality::HalfDiminished7),
            "°7" | "dim7" => Ok(SeventhQuality::Diminished7),
            "m(M7)" | "mM7" => Ok(SeventhQuality::MinorMajor7),
            "+M7" | "augM7" => Ok(SeventhQuality::AugmentedMajor7),
            _ => Err(TheoryError::UnknownQuality(s.to_string())),
        }
    }
}

/// Recognized label themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelTheme {
    Flat,
    Sharp,
    Relative,
    Quality,
    Extension,
    Solfege,
    SolfegeSharp,
    SolfegeFlat,
    Triad,
    RomanTriad,
    Seventh,
    RomanSeventh,
}

impl LabelTheme {
    pub const ALL: [LabelTheme; 12] = [
        LabelTheme::Flat,
        LabelTheme::Sharp,
        LabelTheme::Relative,
        LabelTheme::Quality,
        LabelTheme::Extension,
        LabelTheme::Solfege,
        LabelTheme::SolfegeSharp,
        LabelTheme::SolfegeFlat,
        LabelTheme::Triad,
        LabelTheme::RomanTriad,
        LabelTheme::Seventh,
        LabelTheme::RomanSeventh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LabelTheme::Flat => "flat",
            LabelTheme::Sharp => "sharp",
            LabelTheme::Relative => "relative",
            LabelTheme::Quality => "quality",
            LabelTheme::Extension => "extension",
            LabelTheme::Solfege => "solfege",
            LabelTheme::SolfegeSharp => "solfegeSharp",
            LabelTheme::SolfegeFlat => "solfegeFlat",
            LabelTheme::Triad => "triad",
            LabelTheme::RomanTriad => "romanTriad",
            LabelTheme::Seventh => "seventh",
            LabelTheme::RomanSeventh => "romanSeventh",
        }
    }

    /// Built-in label for a root-relative pitch class.
    ///
    /// Chord themes and the relative theme have no built-in table; they only
    /// come from a collection's overrides.
    pub fn default_label(self, pitch_class: PitchClass) -> Option<&'static str> {
        let table: &[&str; 12] = match self {
            LabelTheme::Flat => &FLAT_TEMPLATE,
            LabelTheme::Sharp => &[
                "1", "♯1", "2", "♯2", "3", "4", "♯4", "5", "♯5", "6", "♯6", "7",
            ],
            LabelTheme::Quality => &[
                "P1", "m2", "M2", "m3", "M3", "P4", "d5", "P5", "m6", "M6", "m7", "M7",
            ],
            LabelTheme::Extension => &[
                "1", "♭9", "9", "♭3", "3", "11", "♯11", "5", "♭13", "13", "♭7", "7",
            ],
            LabelTheme::Solfege => &[
                "Do", "Ra", "Re", "Me", "Mi", "Fa", "Fi", "Sol", "Le", "La", "Te", "Ti",
            ],
            LabelTheme::SolfegeSharp => &[
                "Do", "Di", "Re", "Ri", "Mi", "Fa", "Fi", "Sol", "Si", "La", "Li", "Ti",
            ],
            LabelTheme::SolfegeFlat => &[
                "Do", "Ra", "Re", "Me", "Mi", "Fa", "Se", "Sol", "Le", "La", "Te", "Ti",
            ],
            LabelTheme::Relative
            | LabelTheme::Triad
            | LabelTheme::RomanTriad
            | LabelTheme::Seventh
            | LabelTheme::RomanSeventh => return None,
        };
        Some(table[(pitch_class % 12) as usize])
    }
}

impl fmt::Display for LabelTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LabelTheme {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| TheoryError::UnknownLabelTheme(s.to_string()))
    }
}

/// Sparse per-collection labels: theme -> pitch class -> label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelsOverride {
    themes: BTreeMap<LabelTheme, BTreeMap<PitchClass, String>>,
}

impl LabelsOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, theme: LabelTheme, pitch_class: PitchClass) -> Option<&str> {
        self.themes
            .get(&theme)
            .and_then(|labels| labels.get(&(pitch_class % 12)))
            .map(String::as_str)
    }

    pub fn insert(&mut self, theme: LabelTheme, pitch_class: PitchClass, label: impl Into<String>) {
        self.themes
            .entry(theme)
            .or_default()
            .insert(pitch_class % 12, label.into());
    }

    /// All labels for one theme, if any were set
    pub fn theme(&self, theme: LabelTheme) -> Option<&BTreeMap<PitchClass, String>> {
        self.themes.get(&theme)
    }

    pub fn themes(&self) -> impl Iterator<Item = LabelTheme> + '_ {
        self.themes.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.values().all(BTreeMap::is_empty)
    }

    /// Copy every label from `other`, replacing existing entries
    pub fn merge(&mut self, other: &LabelsOverride) {
        for (theme, labels) in &other.themes {
            for (pc, label) in labels {
                self.insert(*theme, *pc, label.clone());
            }
        }
    }
}

/// Generated chord labels for one mode, keyed by pitch class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordLabels {
    pub triad: BTreeMap<PitchClass, String>,
    pub roman_triad: BTreeMap<PitchClass, String>,
    pub seventh: BTreeMap<PitchClass, String>,
    pub roman_seventh: BTreeMap<PitchClass, String>,
}

impl ChordLabels {
    /// Store these labels under the chord themes of an override set
    pub fn apply_to(&self, labels: &mut LabelsOverride) {
        let themes = [
            (LabelTheme::Triad, &self.triad),
            (LabelTheme::RomanTriad, &self.roman_triad),
            (LabelTheme::Seventh, &self.seventh),
            (LabelTheme::RomanSeventh, &self.roman_seventh),
        ];
        for (theme, map) in themes {
            for (pc, label) in map {
                labels.insert(theme, *pc, label.clone());
            }
        }
    }
}

/// Generate triad and seventh labels for the mode at `rotation` of a family.
///
/// `integers` is the mode's own pitch-class sequence, starting from its root.
/// Only the first seven degrees are labelled; a trailing octave is ignored.
pub fn generate_labels(
    integers: &[i32],
    rotation: usize,
    triad_pattern: &[TriadQuality; 7],
    seventh_pattern: &[SeventhQuality; 7],
) -> ChordLabels {
    let triads = rotate_left(triad_pattern, rotation as isize);
    let sevenths = rotate_left(seventh_pattern, rotation as isize);

    let mut labels = ChordLabels::default();
    for (degree, ((&integer, triad), seventh)) in
        integers.iter().zip(&triads).zip(&sevenths).enumerate()
    {
        let pc = integer.rem_euclid(12) as PitchClass;
        labels.triad.insert(pc, triad.symbol().to_string());
        labels.roman_triad.insert(pc, triad.roman(degree));
        labels.seventh.insert(pc, seventh.symbol().to_string());
        labels.roman_seventh.insert(pc, seventh.roman(degree));
    }
    labels
}
