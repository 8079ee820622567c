// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! scalebook - symbolic music theory.
//!
//! Normalizes loosely spelled intervals and note names, transforms interval
//! sets between simple, compound and extension forms, spells them as
//! letter-correct note names over a root, labels the chords of every mode of
//! the diatonic, harmonic-minor and melodic-minor families, and searches a
//! catalog of named scales and chords.
//!
//! Everything here is synchronous and pure. The built-in catalog is built
//! once on first use and shared read-only.

pub mod catalog;
pub mod config;
pub mod error;
pub mod music;

pub use catalog::{Catalog, NoteCollection, SearchOptions};
pub use error::{TheoryError, TheoryResult};
pub use music::{
    normalize_interval, normalize_note_name, resolve_note_names, transform_intervals,
    IntervalTransformation, LabelTheme, ScaleFamily, TransformOptions,
};
