// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in collection definitions.

use super::NoteCollection;
use crate::music::scale::ScaleFamily;

/// Metadata for one mode; name and intervals come from the family
struct ModeInfo {
    key: &'static str,
    aliases: &'static [&'static str],
    characteristics: &'static [&'static str],
}

/// A fixed scale or chord
struct Definition {
    key: &'static str,
    name: &'static str,
    intervals: &'static [&'static str],
    aliases: &'static [&'static str],
    types: &'static [&'static str],
    characteristics: &'static [&'static str],
}

impl Definition {
    fn build(&self) -> NoteCollection {
        NoteCollection::new(self.key, self.name, self.intervals)
            .with_aliases(self.aliases)
            .with_types(self.types)
            .with_characteristics(self.characteristics)
    }
}

const MODE_TYPES: &[&str] = &["scale", "mode"];
const SCALE_TYPES: &[&str] = &["scale"];
const TRIAD_TYPES: &[&str] = &["chord", "arpeggio", "triad"];
const SEVENTH_TYPES: &[&str] = &["chord", "arpeggio", "seventh"];
const SIXTH_TYPES: &[&str] = &["chord", "arpeggio", "sixth"];
const EXTENDED_TYPES: &[&str] = &["chord", "arpeggio", "extended"];

const DIATONIC_MODES: [ModeInfo; 7] = [
    ModeInfo {
        key: "ionian",
        aliases: &["Major", "Major Scale"],
        characteristics: &["major", "bright", "stable"],
    },
    ModeInfo {
        key: "dorian",
        aliases: &["Dorian Minor"],
        characteristics: &["minor", "jazzy", "soulful"],
    },
    ModeInfo {
        key: "phrygian",
        aliases: &["Phrygian Minor"],
        characteristics: &["minor", "dark", "spanish"],
    },
    ModeInfo {
        key: "lydian",
        aliases: &["Lydian Major"],
        characteristics: &["major", "bright", "dreamy"],
    },
    ModeInfo {
        key: "mixolydian",
        aliases: &["Dominant Scale"],
        characteristics: &["major", "dominant", "bluesy"],
    },
    ModeInfo {
        key: "aeolian",
        aliases: &["Natural Minor", "Minor", "Minor Scale"],
        characteristics: &["minor", "sad"],
    },
    ModeInfo {
        key: "locrian",
        aliases: &[],
        characteristics: &["diminished", "dark", "unstable"],
    },
];

const HARMONIC_MINOR_MODES: [ModeInfo; 7] = [
    ModeInfo {
        key: "harmonic_minor",
        aliases: &["Harmonic Minor Scale", "Aeolian ♮7"],
        characteristics: &["minor", "exotic", "classical"],
    },
    ModeInfo {
        key: "locrian_natural6",
        aliases: &["Locrian Natural 6"],
        characteristics: &["diminished", "dark"],
    },
    ModeInfo {
        key: "ionian_sharp5",
        aliases: &["Ionian Augmented"],
        characteristics: &["augmented", "major"],
    },
    ModeInfo {
        key: "dorian_sharp4",
        aliases: &["Ukrainian Dorian", "Romanian Minor"],
        characteristics: &["minor", "exotic"],
    },
    ModeInfo {
        key: "phrygian_dominant",
        aliases: &["Spanish Phrygian", "Phrygian Major", "Freygish"],
        characteristics: &["dominant", "exotic", "spanish"],
    },
    ModeInfo {
        key: "lydian_sharp2",
        aliases: &["Lydian Sharp 2"],
        characteristics: &["major", "exotic"],
    },
    ModeInfo {
        key: "super_locrian_double_flat7",
        aliases: &["Ultralocrian", "Altered Diminished"],
        characteristics: &["diminished", "dark"],
    },
];

const MELODIC_MINOR_MODES: [ModeInfo; 7] = [
    ModeInfo {
        key: "melodic_minor",
        aliases: &["Jazz Minor", "Melodic Minor Scale"],
        characteristics: &["minor", "jazzy"],
    },
    ModeInfo {
        key: "dorian_flat2",
        aliases: &["Phrygian ♮6", "Javanese"],
        characteristics: &["minor", "jazzy"],
    },
    ModeInfo {
        key: "lydian_augmented",
        aliases: &["Lydian ♯5"],
        characteristics: &["augmented", "bright"],
    },
    ModeInfo {
        key: "lydian_dominant",
        aliases: &["Overtone Scale", "Acoustic Scale", "Lydian ♭7"],
        characteristics: &["dominant", "bright"],
    },
    ModeInfo {
        key: "mixolydian_flat6",
        aliases: &["Aeolian Dominant", "Hindu"],
        characteristics: &["dominant", "minor"],
    },
    ModeInfo {
        key: "locrian_natural2",
        aliases: &["Half Diminished Scale", "Aeolian ♭5"],
        characteristics: &["diminished", "jazzy"],
    },
    ModeInfo {
        key: "altered",
        aliases: &["Super Locrian", "Altered Scale", "Altered Dominant"],
        characteristics: &["dominant", "tense", "jazzy"],
    },
];

const SCALES: &[Definition] = &[
    Definition {
        key: "major_pentatonic",
        name: "Major Pentatonic",
        intervals: &["1", "2", "3", "5", "6", "8"],
        aliases: &["Pentatonic", "Major Pentatonic Scale"],
        types: SCALE_TYPES,
        characteristics: &["major", "pentatonic", "open"],
    },
    Definition {
        key: "minor_pentatonic",
        name: "Minor Pentatonic",
        intervals: &["1", "♭3", "4", "5", "♭7", "8"],
        aliases: &["Minor Pentatonic Scale"],
        types: SCALE_TYPES,
        characteristics: &["minor", "pentatonic", "bluesy"],
    },
    Definition {
        key: "blues",
        name: "Blues",
        intervals: &["1", "♭3", "4", "♭5", "5", "♭7", "8"],
        aliases: &["Blues Scale", "Minor Blues"],
        types: SCALE_TYPES,
        characteristics: &["minor", "bluesy"],
    },
    Definition {
        key: "major_blues",
        name: "Major Blues",
        intervals: &["1", "2", "♭3", "3", "5", "6", "8"],
        aliases: &["Major Blues Scale"],
        types: SCALE_TYPES,
        characteristics: &["major", "bluesy"],
    },
    Definition {
        key: "bebop_dominant",
        name: "Bebop Dominant",
        intervals: &["1", "2", "3", "4", "5", "6", "♭7", "7", "8"],
        aliases: &["Dominant Bebop"],
        types: SCALE_TYPES,
        characteristics: &["dominant", "jazzy"],
    },
    Definition {
        key: "whole_tone",
        name: "Whole Tone",
        intervals: &["1", "2", "3", "♯4", "♯5", "♭7", "8"],
        aliases: &["Whole Tone Scale"],
        types: SCALE_TYPES,
        characteristics: &["augmented", "symmetrical", "dreamy"],
    },
    Definition {
        key: "diminished_whole_half",
        name: "Diminished Whole Half",
        intervals: &["1", "2", "♭3", "4", "♭5", "♭6", "𝄫7", "7", "8"],
        aliases: &["Diminished Scale", "Whole Half Diminished"],
        types: SCALE_TYPES,
        characteristics: &["diminished", "symmetrical"],
    },
    Definition {
        key: "diminished_half_whole",
        name: "Diminished Half Whole",
        intervals: &["1", "♭2", "♯2", "3", "♯4", "5", "6", "♭7", "8"],
        aliases: &["Dominant Diminished", "Half Whole Diminished", "Octatonic"],
        types: SCALE_TYPES,
        characteristics: &["dominant", "diminished", "symmetrical"],
    },
    Definition {
        key: "chromatic",
        name: "Chromatic",
        intervals: &[
            "1", "♭2", "2", "♭3", "3", "4", "♭5", "5", "♭6", "6", "♭7", "7", "8",
        ],
        aliases: &["Chromatic Scale"],
        types: SCALE_TYPES,
        characteristics: &["symmetrical"],
    },
];

const CHORDS: &[Definition] = &[
    Definition {
        key: "major_triad",
        name: "Major Triad",
        intervals: &["1", "3", "5"],
        aliases: &["Major Chord"],
        types: TRIAD_TYPES,
        characteristics: &["major", "stable"],
    },
    Definition {
        key: "minor_triad",
        name: "Minor Triad",
        intervals: &["1", "♭3", "5"],
        aliases: &["Minor Chord"],
        types: TRIAD_TYPES,
        characteristics: &["minor", "stable"],
    },
    Definition {
        key: "diminished_triad",
        name: "Diminished Triad",
        intervals: &["1", "♭3", "♭5"],
        aliases: &["Diminished Chord"],
        types: TRIAD_TYPES,
        characteristics: &["diminished", "tense"],
    },
    Definition {
        key: "augmented_triad",
        name: "Augmented Triad",
        intervals: &["1", "3", "♯5"],
        aliases: &["Augmented Chord"],
        types: TRIAD_TYPES,
        characteristics: &["augmented", "tense"],
    },
    Definition {
        key: "sus2",
        name: "Suspended 2nd",
        intervals: &["1", "2", "5"],
        aliases: &["sus2"],
        types: TRIAD_TYPES,
        characteristics: &["suspended", "open"],
    },
    Definition {
        key: "sus4",
        name: "Suspended 4th",
        intervals: &["1", "4", "5"],
        aliases: &["sus4"],
        types: TRIAD_TYPES,
        characteristics: &["suspended"],
    },
    Definition {
        key: "power_chord",
        name: "Power Chord",
        intervals: &["1", "5"],
        aliases: &["Fifth Chord"],
        types: &["chord", "dyad"],
        characteristics: &["open"],
    },
    Definition {
        key: "major7",
        name: "Major 7th",
        intervals: &["1", "3", "5", "7"],
        aliases: &["maj7", "Major Seventh"],
        types: SEVENTH_TYPES,
        characteristics: &["major", "jazzy"],
    },
    Definition {
        key: "dominant7",
        name: "Dominant 7th",
        intervals: &["1", "3", "5", "♭7"],
        aliases: &["dom7", "Dominant Seventh"],
        types: SEVENTH_TYPES,
        characteristics: &["dominant", "bluesy"],
    },
    Definition {
        key: "minor7",
        name: "Minor 7th",
        intervals: &["1", "♭3", "5", "♭7"],
        aliases: &["min7", "Minor Seventh"],
        types: SEVENTH_TYPES,
        characteristics: &["minor", "jazzy"],
    },
    Definition {
        key: "minor_major7",
        name: "Minor Major 7th",
        intervals: &["1", "♭3", "5", "7"],
        aliases: &["m(M7)", "Minor Major Seventh"],
        types: SEVENTH_TYPES,
        characteristics: &["minor", "tense"],
    },
    Definition {
        key: "half_diminished7",
        name: "Half Diminished 7th",
        intervals: &["1", "♭3", "♭5", "♭7"],
        aliases: &["ø7", "m7♭5", "Minor 7th Flat 5"],
        types: SEVENTH_TYPES,
        characteristics: &["diminished", "jazzy"],
    },
    Definition {
        key: "diminished7",
        name: "Diminished 7th",
        intervals: &["1", "♭3", "♭5", "𝄫7"],
        aliases: &["dim7", "°7"],
        types: SEVENTH_TYPES,
        characteristics: &["diminished", "symmetrical", "tense"],
    },
    Definition {
        key: "augmented_major7",
        name: "Augmented Major 7th",
        intervals: &["1", "3", "♯5", "7"],
        aliases: &["+M7", "maj7♯5"],
        types: SEVENTH_TYPES,
        characteristics: &["augmented"],
    },
    Definition {
        key: "augmented7",
        name: "Augmented 7th",
        intervals: &["1", "3", "♯5", "♭7"],
        aliases: &["+7", "7♯5"],
        types: SEVENTH_TYPES,
        characteristics: &["augmented", "dominant"],
    },
    Definition {
        key: "major6",
        name: "Major 6th",
        intervals: &["1", "3", "5", "6"],
        aliases: &["Sixth Chord"],
        types: SIXTH_TYPES,
        characteristics: &["major"],
    },
    Definition {
        key: "minor6",
        name: "Minor 6th",
        intervals: &["1", "♭3", "5", "6"],
        aliases: &["m6"],
        types: SIXTH_TYPES,
        characteristics: &["minor"],
    },
    Definition {
        key: "add9",
        name: "Add 9",
        intervals: &["1", "3", "5", "9"],
        aliases: &["Major Add 9"],
        types: EXTENDED_TYPES,
        characteristics: &["major", "open"],
    },
    Definition {
        key: "dominant9",
        name: "Dominant 9th",
        intervals: &["1", "3", "5", "♭7", "9"],
        aliases: &["dom9", "Dominant Ninth"],
        types: EXTENDED_TYPES,
        characteristics: &["dominant"],
    },
    Definition {
        key: "major9",
        name: "Major 9th",
        intervals: &["1", "3", "5", "7", "9"],
        aliases: &["maj9", "Major Ninth"],
        types: EXTENDED_TYPES,
        characteristics: &["major", "jazzy"],
    },
    Definition {
        key: "minor9",
        name: "Minor 9th",
        intervals: &["1", "♭3", "5", "♭7", "9"],
        aliases: &["min9", "Minor Ninth"],
        types: EXTENDED_TYPES,
        characteristics: &["minor", "jazzy"],
    },
    Definition {
        key: "dominant7_flat9",
        name: "Dominant 7th Flat 9",
        intervals: &["1", "3", "5", "♭7", "♭9"],
        aliases: &["7♭9"],
        types: EXTENDED_TYPES,
        characteristics: &["dominant", "tense"],
    },
    Definition {
        key: "dominant7_sharp9",
        name: "Dominant 7th Sharp 9",
        intervals: &["1", "3", "5", "♭7", "♯9"],
        aliases: &["7♯9", "Hendrix Chord"],
        types: EXTENDED_TYPES,
        characteristics: &["dominant", "bluesy"],
    },
    Definition {
        key: "dominant11",
        name: "Dominant 11th",
        intervals: &["1", "3", "5", "♭7", "9", "11"],
        aliases: &["dom11", "Dominant Eleventh"],
        types: EXTENDED_TYPES,
        characteristics: &["dominant"],
    },
    Definition {
        key: "minor11",
        name: "Minor 11th",
        intervals: &["1", "♭3", "5", "♭7", "9", "11"],
        aliases: &["min11", "Minor Eleventh"],
        types: EXTENDED_TYPES,
        characteristics: &["minor", "jazzy"],
    },
    Definition {
        key: "major7_sharp11",
        name: "Major 7th Sharp 11",
        intervals: &["1", "3", "5", "7", "♯11"],
        aliases: &["maj7♯11", "Lydian Chord"],
        types: EXTENDED_TYPES,
        characteristics: &["major", "bright"],
    },
    Definition {
        key: "dominant13",
        name: "Dominant 13th",
        intervals: &["1", "3", "5", "♭7", "9", "13"],
        aliases: &["dom13", "Dominant Thirteenth"],
        types: EXTENDED_TYPES,
        characteristics: &["dominant"],
    },
];

fn modes() -> impl Iterator<Item = NoteCollection> {
    let families = [
        (ScaleFamily::Diatonic, &DIATONIC_MODES),
        (ScaleFamily::HarmonicMinor, &HARMONIC_MINOR_MODES),
        (ScaleFamily::MelodicMinor, &MELODIC_MINOR_MODES),
    ];
    families.into_iter().flat_map(|(family, infos)| {
        infos.iter().enumerate().map(move |(rotation, info)| {
            NoteCollection::mode(info.key, family, rotation)
                .with_aliases(info.aliases)
                .with_types(MODE_TYPES)
                .with_characteristics(info.characteristics)
        })
    })
}

/// Every built-in collection in catalog order: modes, then scales, then chords
pub fn builtin_collections() -> Vec<NoteCollection> {
    modes()
        .chain(SCALES.iter().map(Definition::build))
        .chain(CHORDS.iter().map(Definition::build))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::labels::LabelTheme;

    #[test]
    fn test_keys_are_unique() {
        let collections = builtin_collections();
        let mut keys: Vec<&str> = collections.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), collections.len());
    }

    #[test]
    fn test_no_intervals_dropped() {
        let collections = builtin_collections();
        let expected = 21 + SCALES.len() + CHORDS.len();
        assert_eq!(collections.len(), expected);
        for definition in SCALES.iter().chain(CHORDS) {
            let built = definition.build();
            assert_eq!(built.intervals.len(), definition.intervals.len(), "{}", definition.key);
        }
    }

    #[test]
    fn test_modes_carry_labels() {
        let collections = builtin_collections();
        let modes: Vec<&NoteCollection> = collections.iter().filter(|c| c.family.is_some()).collect();
        assert_eq!(modes.len(), 21);
        for mode in modes {
            assert_eq!(mode.intervals.last().map(String::as_str), Some("8"));
            let triads = mode.labels.theme(LabelTheme::Triad).map_or(0, |t| t.len());
            assert_eq!(triads, 7, "{}", mode.key);
        }
    }

    #[test]
    fn test_mixolydian_definition() {
        let collections = builtin_collections();
        let mixolydian = collections.iter().find(|c| c.key == "mixolydian").unwrap();
        assert_eq!(mixolydian.intervals, vec!["1", "2", "3", "4", "5", "6", "♭7", "8"]);
        assert_eq!(mixolydian.integers, vec![0, 2, 4, 5, 7, 9, 10, 12]);
        assert_eq!(mixolydian.pattern, "W-W-H-W-W-H-W");
        assert_eq!(mixolydian.label(LabelTheme::RomanTriad, 7), Some("v"));
        assert_eq!(mixolydian.label(LabelTheme::RomanSeventh, 0), Some("I7"));
    }

    #[test]
    fn test_chords_omit_octave() {
        for chord in CHORDS {
            assert!(!chord.intervals.contains(&"8"), "{}", chord.key);
        }
    }
}
