// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Parent scale families and their modes.
//!
//! Provides the three seven-note families whose rotations make up the modal
//! part of the catalog, their chord-quality patterns, and step-pattern
//! descriptions for any pitch-class sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::{interval_for_degree, Semitones, OCTAVE};
use super::labels::{SeventhQuality, TriadQuality};
use crate::error::TheoryError;

use SeventhQuality::*;
use TriadQuality::{Augmented, Diminished, Major, Minor};

/// Seven-note parent scales with named rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    /// Major scale and its church modes
    Diatonic,
    HarmonicMinor,
    /// Ascending form
    MelodicMinor,
}

impl ScaleFamily {
    pub const ALL: [ScaleFamily; 3] = [
        ScaleFamily::Diatonic,
        ScaleFamily::HarmonicMinor,
        ScaleFamily::MelodicMinor,
    ];

    /// Semitones from root for the family's first mode
    pub fn integers(self) -> [Semitones; 7] {
        match self {
            ScaleFamily::Diatonic => [0, 2, 4, 5, 7, 9, 11],
            ScaleFamily::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            ScaleFamily::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
        }
    }

    /// Triad qualities on each degree of the first mode
    pub fn triad_pattern(self) -> &'static [TriadQuality; 7] {
        match self {
            ScaleFamily::Diatonic => &[Major, Minor, Minor, Major, Major, Minor, Diminished],
            ScaleFamily::HarmonicMinor => {
                &[Minor, Diminished, Augmented, Minor, Major, Major, Diminished]
            }
            ScaleFamily::MelodicMinor => {
                &[Minor, Minor, Augmented, Major, Major, Diminished, Diminished]
            }
        }
    }

    /// Seventh-chord qualities on each degree of the first mode
    pub fn seventh_pattern(self) -> &'static [SeventhQuality; 7] {
        match self {
            ScaleFamily::Diatonic => &[
                Major7,
                Minor7,
                Minor7,
                Major7,
                Dominant7,
                Minor7,
                HalfDiminished7,
            ],
            ScaleFamily::HarmonicMinor => &[
                MinorMajor7,
                HalfDiminished7,
                AugmentedMajor7,
                Minor7,
                Dominant7,
                Major7,
                Diminished7,
            ],
            ScaleFamily::MelodicMinor => &[
                MinorMajor7,
                Minor7,
                AugmentedMajor7,
                Dominant7,
                Dominant7,
                HalfDiminished7,
                HalfDiminished7,
            ],
        }
    }

    /// Names of the seven rotations, in rotation order
    pub fn mode_names(self) -> [&'static str; 7] {
        match self {
            ScaleFamily::Diatonic => [
                "Ionian",
                "Dorian",
                "Phrygian",
                "Lydian",
                "Mixolydian",
                "Aeolian",
                "Locrian",
            ],
            ScaleFamily::HarmonicMinor => [
                "Harmonic Minor",
                "Locrian ♮6",
                "Ionian ♯5",
                "Dorian ♯4",
                "Phrygian Dominant",
                "Lydian ♯2",
                "Super Locrian 𝄫7",
            ],
            ScaleFamily::MelodicMinor => [
                "Melodic Minor",
                "Dorian ♭2",
                "Lydian Augmented",
                "Lydian Dominant",
                "Mixolydian ♭6",
                "Locrian ♮2",
                "Altered",
            ],
        }
    }

    /// Root-relative semitones of the mode at `rotation` (0-based)
    pub fn mode_integers(self, rotation: usize) -> Vec<Semitones> {
        let parent = self.integers();
        let start = parent[rotation % 7];
        (0..7)
            .map(|i| (parent[(rotation + i) % 7] - start).rem_euclid(12))
            .collect()
    }

    /// Interval tokens of the mode at `rotation`, closed with the octave.
    ///
    /// Degree `n` is always spelled with interval number `n`.
    pub fn mode_intervals(self, rotation: usize) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = self
            .mode_integers(rotation)
            .into_iter()
            .enumerate()
            .filter_map(|(i, semitones)| interval_for_degree(i as u8 + 1, semitones))
            .collect();
        tokens.push(OCTAVE);
        tokens
    }

    /// Get a human-readable name for this family
    pub fn name(self) -> &'static str {
        match self {
            ScaleFamily::Diatonic => "Diatonic",
            ScaleFamily::HarmonicMinor => "Harmonic Minor",
            ScaleFamily::MelodicMinor => "Melodic Minor",
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScaleFamily {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "diatonic" | "major" => Ok(ScaleFamily::Diatonic),
            "harmonicminor" => Ok(ScaleFamily::HarmonicMinor),
            "melodicminor" => Ok(ScaleFamily::MelodicMinor),
            _ => Err(TheoryError::UnknownScaleFamily(s.to_string())),
        }
    }
}

/// Describe the gaps between successive degrees ("W-W-H-W-W-W-H").
///
/// One semitone is H, two is W, three is W+H; larger gaps are written as a
/// semitone count.
pub fn step_pattern(integers: &[Semitones]) -> String {
    integers
        .windows(2)
        .map(|pair| match pair[1] - pair[0] {
            1 => "H".to_string(),
            2 => "W".to_string(),
            3 => "W+H".to_string(),
            n => n.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}
