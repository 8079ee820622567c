// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Accidental parsing and rendering.
//!
//! Accidentals may be written in ASCII (`#`, `x`, `X`, `b`) or with the Unicode
//! glyphs (`♯`, `𝄪`, `♭`, `𝄫`). Parsing collapses any run of them into a net
//! semitone alteration; rendering turns an alteration back into canonical glyphs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TheoryError, TheoryResult};

/// Canonical sharp glyph
pub const SHARP: &str = "♯";
/// Canonical flat glyph
pub const FLAT: &str = "♭";
/// Canonical double-sharp glyph
pub const DOUBLE_SHARP: &str = "𝄪";
/// Canonical double-flat glyph
pub const DOUBLE_FLAT: &str = "𝄫";

/// Maximal runs of sharp-family or flat-family characters.
static ACCIDENTAL_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#xX♯𝄪]+|[b♭𝄫]+").expect("accidental pattern is valid"));

/// Semitone value of a single accidental character.
fn char_alteration(c: char) -> i32 {
    match c {
        '#' | '♯' => 1,
        'x' | 'X' | '𝄪' => 2,
        'b' | '♭' => -1,
        '𝄫' => -2,
        _ => 0,
    }
}

/// Parse a run of accidental characters into a net semitone alteration.
///
/// An empty string is a valid run with alteration 0. Sharps and flats may be
/// mixed and cancel each other out. Any character that is not an accidental
/// makes the whole run invalid.
pub fn parse_accidental_run(s: &str) -> TheoryResult<i32> {
    let mut matched_len = 0;
    let mut alteration = 0;

    for run in ACCIDENTAL_RUN.find_iter(s) {
        matched_len += run.as_str().len();
        alteration += run.as_str().chars().map(char_alteration).sum::<i32>();
    }

    if matched_len < s.len() {
        return Err(TheoryError::InvalidAccidental(s.to_string()));
    }

    Ok(alteration)
}

/// Render a net alteration as canonical glyphs, double accidentals first.
///
/// `3` renders as `𝄪♯`, `-2` as `𝄫`, `0` as the empty string.
pub fn render_accidentals(alteration: i32) -> String {
    let (double, single) = if alteration >= 0 {
        (DOUBLE_SHARP, SHARP)
    } else {
        (DOUBLE_FLAT, FLAT)
    };
    let magnitude = alteration.unsigned_abs() as usize;

    let mut out = double.repeat(magnitude / 2);
    if magnitude % 2 == 1 {
        out.push_str(single);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run() {
        assert_eq!(parse_accidental_run(""), Ok(0));
    }

    #[test]
    fn test_ascii_runs() {
        assert_eq!(parse_accidental_run("#"), Ok(1));
        assert_eq!(parse_accidental_run("##"), Ok(2));
        assert_eq!(parse_accidental_run("x"), Ok(2));
        assert_eq!(parse_accidental_run("X#"), Ok(3));
        assert_eq!(parse_accidental_run("b"), Ok(-1));
        assert_eq!(parse_accidental_run("bbb"), Ok(-3));
    }

    #[test]
    fn test_unicode_runs() {
        assert_eq!(parse_accidental_run("♯"), Ok(1));
        assert_eq!(parse_accidental_run("𝄪"), Ok(2));
        assert_eq!(parse_accidental_run("♭"), Ok(-1));
        assert_eq!(parse_accidental_run("𝄫♭"), Ok(-3));
    }

    #[test]
    fn test_mixed_runs_cancel() {
        assert_eq!(parse_accidental_run("#b"), Ok(0));
        assert_eq!(parse_accidental_run("♯♭♭"), Ok(-1));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(parse_accidental_run("q").is_err());
        assert!(parse_accidental_run("# ").is_err());
        assert!(parse_accidental_run("b3").is_err());
    }

    #[test]
    fn test_render() {
        assert_eq!(render_accidentals(0), "");
        assert_eq!(render_accidentals(1), "♯");
        assert_eq!(render_accidentals(2), "𝄪");
        assert_eq!(render_accidentals(3), "𝄪♯");
        assert_eq!(render_accidentals(-1), "♭");
        assert_eq!(render_accidentals(-2), "𝄫");
        assert_eq!(render_accidentals(-5), "𝄫𝄫♭");
    }
}
