// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names, pitch classes and enharmonic groups.
//!
//! A note name is a letter A-G followed by at most a double accidental
//! (`C`, `F♯`, `B𝄫`). There are 35 such spellings, partitioned into 12
//! enharmonic groups by pitch class.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::trace;

use super::accidental::{parse_accidental_run, render_accidentals};
use crate::error::{TheoryError, TheoryResult};

/// Pitch class (0-11), 0 = C
pub type PitchClass = u8;

/// Natural note letters in order
pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Pitch class of each natural letter
const NATURAL_PITCH_CLASSES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Largest accidental magnitude a note name may carry
pub const MAX_NOTE_ALTERATION: i32 = 2;

/// One spelling in the note-name catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    /// Canonical name, e.g. "G♭"
    pub name: String,
    /// Natural letter
    pub letter: char,
    /// Net accidental alteration (-2..=2)
    pub alteration: i32,
    /// Pitch class of the sounding note
    pub pitch_class: PitchClass,
}

static NOTES: Lazy<Vec<NoteEntry>> = Lazy::new(|| {
    let mut entries = Vec::new();
    for (letter, natural) in LETTERS.iter().zip(NATURAL_PITCH_CLASSES) {
        for alteration in -MAX_NOTE_ALTERATION..=MAX_NOTE_ALTERATION {
            entries.push(NoteEntry {
                name: format!("{}{}", letter, render_accidentals(alteration)),
                letter: *letter,
                alteration,
                pitch_class: (natural + alteration).rem_euclid(12) as PitchClass,
            });
        }
    }
    entries
});

static BY_NAME: Lazy<HashMap<&'static str, &'static NoteEntry>> =
    Lazy::new(|| NOTES.iter().map(|n| (n.name.as_str(), n)).collect());

/// Spellings per pitch class: naturals first, then single flats, single sharps,
/// double flats, double sharps.
static ENHARMONIC_GROUPS: Lazy<Vec<Vec<&'static str>>> = Lazy::new(|| {
    let mut groups: Vec<Vec<&'static NoteEntry>> = vec![Vec::new(); 12];
    for entry in NOTES.iter() {
        groups[entry.pitch_class as usize].push(entry);
    }
    groups
        .into_iter()
        .map(|mut group| {
            group.sort_by_key(|e| (e.alteration.abs(), e.alteration));
            group.into_iter().map(|e| e.name.as_str()).collect()
        })
        .collect()
});

/// Every canonical note name
pub fn all_note_names() -> impl Iterator<Item = &'static str> {
    NOTES.iter().map(|n| n.name.as_str())
}

/// Look up a canonical note name
pub fn note_entry(name: &str) -> Option<&'static NoteEntry> {
    BY_NAME.get(name).copied()
}

/// Normalize a note name into its canonical spelling.
///
/// The letter is case-insensitive; accidentals may be ASCII or Unicode. More
/// than a double accidental is rejected.
pub fn normalize_note_name(input: &str) -> TheoryResult<&'static str> {
    let invalid = || TheoryError::InvalidNoteName(input.to_string());

    let mut chars = input.chars();
    let letter = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| LETTERS.contains(c))
        .ok_or_else(invalid)?;

    let alteration = parse_accidental_run(chars.as_str()).map_err(|_| invalid())?;
    if alteration.abs() > MAX_NOTE_ALTERATION {
        trace!(input, alteration, "note alteration out of range");
        return Err(invalid());
    }

    let name = format!("{}{}", letter, render_accidentals(alteration));
    BY_NAME
        .get(name.as_str())
        .map(|entry| entry.name.as_str())
        .ok_or_else(invalid)
}

/// Pitch class of a (loosely spelled) note name
pub fn note_pitch_class(name: &str) -> Option<PitchClass> {
    let canonical = normalize_note_name(name).ok()?;
    note_entry(canonical).map(|e| e.pitch_class)
}

/// Natural letter of a (loosely spelled) note name
pub fn note_letter(name: &str) -> Option<char> {
    let canonical = normalize_note_name(name).ok()?;
    note_entry(canonical).map(|e| e.letter)
}

/// Position of a letter in the C-based letter cycle
pub fn letter_index(letter: char) -> Option<usize> {
    LETTERS.iter().position(|&l| l == letter.to_ascii_uppercase())
}

/// All spellings of a pitch class, ordered by simplicity
pub fn enharmonic_group(pitch_class: PitchClass) -> &'static [&'static str] {
    &ENHARMONIC_GROUPS[(pitch_class % 12) as usize]
}

/// The spelling of a pitch class that uses the given letter, if any
pub fn spell_with_letter(pitch_class: PitchClass, letter: char) -> Option<&'static str> {
    enharmonic_group(pitch_class)
        .iter()
        .copied()
        .find(|name| name.starts_with(letter))
}
