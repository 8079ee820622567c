// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives for scalebook.
//!
//! This module provides interval and note-name normalization, scale families
//! and their chord labels, interval-set transformations, and resolution of
//! interval sets into concrete note names.

pub mod accidental;
pub mod interval;
pub mod labels;
pub mod note;
pub mod resolve;
pub mod rotation;
pub mod scale;
pub mod transform;

pub use interval::{
    interval_semitones, normalize_compound_interval, normalize_interval, normalize_intervals,
    normalize_simple_interval, IntervalTransformation, Semitones,
};
pub use labels::{generate_labels, ChordLabels, LabelTheme, LabelsOverride, SeventhQuality, TriadQuality};
pub use note::{enharmonic_group, normalize_note_name, note_pitch_class, PitchClass};
pub use resolve::{interval_note_name, resolve_note_names};
pub use rotation::rotate_left;
pub use scale::{step_pattern, ScaleFamily};
pub use transform::{transform_intervals, NoReferenceScales, ReferenceScales, TransformOptions};
