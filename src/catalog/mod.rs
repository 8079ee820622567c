// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Catalog of named scales, modes and chords.
//!
//! The built-in catalog is constructed once on first use and never mutated.
//! Extended catalogs (built-in plus a user file) are separate values.

pub mod data;
pub mod search;

pub use search::{normalize_text, SearchOptions};

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::CatalogFile;
use crate::music::interval::{interval_semitones, normalize_intervals, Semitones};
use crate::music::labels::{generate_labels, LabelTheme, LabelsOverride};
use crate::music::note::PitchClass;
use crate::music::resolve::resolve_note_names;
use crate::music::scale::{step_pattern, ScaleFamily};
use crate::music::transform::{transform_intervals, ReferenceScales, TransformOptions};

/// A named scale, mode or chord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteCollection {
    /// Unique catalog key, e.g. "mixolydian"
    pub key: String,
    /// Primary display name
    pub name: String,
    /// Alternative names
    pub aliases: Vec<String>,
    /// Canonical interval tokens; scales close with the octave, chords don't
    pub intervals: Vec<String>,
    /// Semitone value of each interval, aligned with `intervals`
    pub integers: Vec<Semitones>,
    /// Type tags ("scale", "mode", "chord", "arpeggio", ...)
    pub types: Vec<String>,
    /// Characteristic tags ("bright", "dominant", ...)
    pub characteristics: Vec<String>,
    /// Step description, e.g. "W-W-H-W-W-W-H"
    pub pattern: String,
    /// Position within the parent family, for modes
    pub rotation: Option<usize>,
    pub family: Option<ScaleFamily>,
    pub labels: LabelsOverride,
}

impl NoteCollection {
    /// Create a collection from loosely spelled interval tokens.
    ///
    /// Tokens that don't normalize are dropped, so `intervals` and `integers`
    /// always stay aligned.
    pub fn new<S: AsRef<str>>(key: impl Into<String>, name: impl Into<String>, intervals: &[S]) -> Self {
        let key = key.into();
        let tokens = normalize_intervals(intervals);
        if tokens.len() != intervals.len() {
            warn!(
                key = %key,
                dropped = intervals.len() - tokens.len(),
                "discarded unparseable intervals"
            );
        }

        let integers: Vec<Semitones> = tokens
            .iter()
            .filter_map(|token| interval_semitones(token))
            .collect();

        Self {
            pattern: step_pattern(&integers),
            key,
            name: name.into(),
            aliases: Vec::new(),
            intervals: tokens.into_iter().map(str::to_string).collect(),
            integers,
            types: Vec::new(),
            characteristics: Vec::new(),
            rotation: None,
            family: None,
            labels: LabelsOverride::new(),
        }
    }

    /// Build the mode at `rotation` of a scale family, with chord labels
    pub fn mode(key: impl Into<String>, family: ScaleFamily, rotation: usize) -> Self {
        let name = family.mode_names()[rotation % 7];
        NoteCollection::new(key, name, &family.mode_intervals(rotation)).in_family(family, rotation)
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_characteristics(mut self, characteristics: &[&str]) -> Self {
        self.characteristics = characteristics.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Attach family membership and generate its triad and seventh labels
    pub fn in_family(mut self, family: ScaleFamily, rotation: usize) -> Self {
        let chords = generate_labels(
            &self.integers,
            rotation,
            family.triad_pattern(),
            family.seventh_pattern(),
        );
        chords.apply_to(&mut self.labels);
        self.family = Some(family);
        self.rotation = Some(rotation);
        self
    }

    /// Merge label overrides over whatever the collection already carries
    pub fn with_labels(mut self, labels: &LabelsOverride) -> Self {
        self.labels.merge(labels);
        self
    }

    /// Label for a root-relative pitch class under a theme.
    ///
    /// Overrides win; the relative theme falls back to the collection's own
    /// interval at that pitch class; other themes use their built-in tables.
    pub fn label(&self, theme: LabelTheme, pitch_class: PitchClass) -> Option<&str> {
        let pitch_class = pitch_class % 12;
        if let Some(label) = self.labels.get(theme, pitch_class) {
            return Some(label);
        }
        match theme {
            LabelTheme::Relative => self
                .intervals
                .iter()
                .zip(&self.integers)
                .find(|(_, semitones)| semitones.rem_euclid(12) == i32::from(pitch_class))
                .map(|(token, _)| token.as_str()),
            _ => theme.default_label(pitch_class),
        }
    }

    /// Whole/half step description of the collection
    pub fn step_pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::from_collections(data::builtin_collections()));

/// An ordered, keyed set of collections
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    collections: Vec<NoteCollection>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog, constructed on first use
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog; a later collection replaces an earlier one with the same key
    pub fn from_collections(collections: impl IntoIterator<Item = NoteCollection>) -> Self {
        let mut catalog = Catalog::default();
        for collection in collections {
            catalog.insert(collection);
        }
        catalog
    }

    /// Built-in catalog extended with the collections in a YAML or TOML file
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = CatalogFile::load(path.as_ref())?;
        let extra = file.into_collections();
        info!(path = ?path.as_ref(), collections = extra.len(), "loaded catalog file");

        let mut catalog = Catalog::builtin().clone();
        for collection in extra {
            catalog.insert(collection);
        }
        Ok(catalog)
    }

    fn insert(&mut self, collection: NoteCollection) {
        match self.index.get(&collection.key) {
            Some(&position) => self.collections[position] = collection,
            None => {
                self.index.insert(collection.key.clone(), self.collections.len());
                self.collections.push(collection);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&NoteCollection> {
        self.index.get(key).map(|&i| &self.collections[i])
    }

    /// Collections in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &NoteCollection> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Transform an interval set, using this catalog for reference scales
    pub fn transform<S: AsRef<str>>(&self, intervals: &[S], options: &TransformOptions) -> Vec<String> {
        transform_intervals(intervals, options, self)
    }

    /// Resolve an interval set into note names, using this catalog for reference scales
    pub fn resolve<S: AsRef<str>>(&self, root: &str, intervals: &[S], options: &TransformOptions) -> Vec<String> {
        resolve_note_names(root, intervals, options, self)
    }

    /// Note names of the collection `key` over `root`; empty for an unknown key
    pub fn note_names(&self, root: &str, key: &str, options: &TransformOptions) -> Vec<String> {
        match self.get(key) {
            Some(collection) => self.resolve(root, &collection.intervals, options),
            None => {
                warn!(key, "unknown collection");
                Vec::new()
            }
        }
    }
}

impl ReferenceScales for Catalog {
    fn reference_intervals(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(|c| c.intervals.as_slice())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a NoteCollection;
    type IntoIter = std::slice::Iter<'a, NoteCollection>;

    fn into_iter(self) -> Self::IntoIter {
        self.collections.iter()
    }
}
