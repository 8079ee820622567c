// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelling interval sets as concrete note names over a root.
//!
//! Each degree takes the letter implied by its interval number, so a
//! G♭ Mixolydian spells its fourth as C♭ rather than B. When no spelling with
//! that letter exists within a double accidental (an augmented second over
//! B♯, say) the simplest spelling of the pitch class is used instead, and the
//! letter sequence is broken at that degree.

use tracing::debug;

use super::interval::{interval_semitones, trailing_number, FLAT_TEMPLATE};
use super::note::{
    enharmonic_group, letter_index, note_letter, note_pitch_class, spell_with_letter, PitchClass,
    LETTERS,
};
use super::rotation::rotate_left;
use super::transform::{chromatic_slots, transform_intervals, ReferenceScales, TransformOptions};

/// Spell one interval token above a root given as pitch class and letter index
fn spell_interval(root_pitch_class: PitchClass, root_letter: usize, token: &str) -> Option<String> {
    let semitones = interval_semitones(token)?;
    let pitch_class = (i32::from(root_pitch_class) + semitones).rem_euclid(12) as PitchClass;
    let group = enharmonic_group(pitch_class);

    let spelled = trailing_number(token)
        .filter(|&number| number >= 1)
        .and_then(|number| {
            let letter = LETTERS[(root_letter + number as usize - 1) % LETTERS.len()];
            spell_with_letter(pitch_class, letter)
        })
        .or_else(|| group.first().copied())?;

    Some(spelled.to_string())
}

/// Spell a single interval above a root note.
///
/// Returns `None` for an invalid root or an interval with no semitone value.
pub fn interval_note_name(root: &str, token: &str) -> Option<String> {
    let pitch_class = note_pitch_class(root)?;
    let letter = letter_index(note_letter(root)?)?;
    spell_interval(pitch_class, letter, token)
}

/// Resolve interval tokens into note names above `root`.
///
/// Without chromatic fill the intervals are transformed (filter, renumber,
/// sort, rotate) and tokens with no semitone value are dropped. With
/// chromatic fill the result has 12 names, index `k` sounding `k` semitones
/// above the root before rotation. An unparseable root yields an empty list.
pub fn resolve_note_names<S, R>(
    root: &str,
    intervals: &[S],
    options: &TransformOptions,
    reference: &R,
) -> Vec<String>
where
    S: AsRef<str>,
    R: ReferenceScales + ?Sized,
{
    let (Some(root_pitch_class), Some(root_letter)) =
        (note_pitch_class(root), note_letter(root).and_then(letter_index))
    else {
        debug!(root, "unrecognized root note, nothing to resolve");
        return Vec::new();
    };

    let names: Vec<String> = if options.fill_chromatic {
        let input: Vec<&str> = intervals.iter().map(AsRef::as_ref).collect();
        chromatic_slots(&input, options, reference)
            .iter()
            .zip(FLAT_TEMPLATE)
            .filter_map(|(token, fallback)| {
                spell_interval(root_pitch_class, root_letter, token)
                    .or_else(|| spell_interval(root_pitch_class, root_letter, fallback))
            })
            .collect()
    } else {
        let mut plain = options.clone();
        plain.rotate_to_root_integer_0 = false;
        transform_intervals(intervals, &plain, reference)
            .iter()
            .filter_map(|token| spell_interval(root_pitch_class, root_letter, token))
            .collect()
    };

    let rotation = if options.fill_chromatic {
        options.chromatic_rotation(Some(i32::from(root_pitch_class)))
    } else if options.rotate_to_root_integer_0 {
        -(root_pitch_class as isize)
    } else {
        0
    };

    rotate_left(&names, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::transform::NoReferenceScales;

    const MAJOR: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];
    const MIXOLYDIAN: [&str; 8] = ["1", "2", "3", "4", "5", "6", "♭7", "8"];

    fn resolve(root: &str, intervals: &[&str], options: &TransformOptions) -> Vec<String> {
        resolve_note_names(root, intervals, options, &NoReferenceScales)
    }

    #[test]
    fn test_c_major() {
        let names = resolve("C", &MAJOR, &TransformOptions::new());
        assert_eq!(names, vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
    }

    #[test]
    fn test_g_flat_mixolydian() {
        let names = resolve("Gb", &MIXOLYDIAN, &TransformOptions::new());
        assert_eq!(names, vec!["G♭", "A♭", "B♭", "C♭", "D♭", "E♭", "F♭", "G♭"]);
    }

    #[test]
    fn test_sharp_keys() {
        let names = resolve("F#", &MAJOR, &TransformOptions::new());
        assert_eq!(names, vec!["F♯", "G♯", "A♯", "B", "C♯", "D♯", "E♯", "F♯"]);
    }

    #[test]
    fn test_compound_letters() {
        let names = resolve("C", &["1", "3", "♭7", "9", "♯11", "13"], &TransformOptions::new());
        assert_eq!(names, vec!["C", "E", "B♭", "D", "F♯", "A"]);
    }

    #[test]
    fn test_letter_fallback() {
        // No C spelling of pitch class 3 within a double sharp
        assert_eq!(interval_note_name("B#", "♯2"), Some("E♭".to_string()));
    }

    #[test]
    fn test_invalid_root() {
        assert!(resolve("H", &MAJOR, &TransformOptions::new()).is_empty());
        assert!(resolve("C###", &MAJOR, &TransformOptions::new().chromatic()).is_empty());
    }

    #[test]
    fn test_unknown_tokens_dropped() {
        let names = resolve("C", &["1", "bogus", "5"], &TransformOptions::new());
        assert_eq!(names, vec!["C", "G"]);
    }

    #[test]
    fn test_chromatic_names() {
        let names = resolve("D", &MAJOR, &TransformOptions::new().chromatic());
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "D");
        assert_eq!(names[1], "E♭");
        assert_eq!(names[4], "F♯");
        assert_eq!(names[11], "C♯");
        for (k, name) in names.iter().enumerate() {
            assert_eq!(note_pitch_class(name), Some(((2 + k) % 12) as PitchClass));
        }
    }

    #[test]
    fn test_chromatic_names_rotated_to_c() {
        let mut options = TransformOptions::new().chromatic();
        options.rotate_to_root_integer_0 = true;
        let names = resolve("D", &MAJOR, &options);
        assert_eq!(names[0], "C");
        assert_eq!(names[2], "D");
        for (k, name) in names.iter().enumerate() {
            assert_eq!(note_pitch_class(name), Some(k as PitchClass));
        }
    }

    #[test]
    fn test_sorted_and_rotated() {
        let options = TransformOptions::new().sorted().without_octave().rotated(2);
        let names = resolve("A", &["5", "1", "♭3"], &options);
        assert_eq!(names, vec!["E", "A", "C"]);
    }
}
