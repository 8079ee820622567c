// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for scalebook.
//!
//! This module loads user catalog files: extra scales and chords described in
//! YAML or TOML and merged over the built-in catalog.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::NoteCollection;
use crate::music::labels::{LabelTheme, LabelsOverride};
use crate::music::note::PitchClass;
use crate::music::scale::ScaleFamily;

/// File format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

/// Root of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogFile {
    /// Collection definitions
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,
}

impl CatalogFile {
    /// Load a catalog file, YAML or TOML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
        match Format::of(path) {
            Format::Toml => Self::from_toml(&contents),
            Format::Yaml => Self::from_yaml(&contents),
        }
    }

    /// Parse a catalog from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML catalog")
    }

    /// Parse a catalog from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML catalog")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize catalog to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize catalog to TOML")
    }

    /// Save the catalog, YAML or TOML by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = match Format::of(path) {
            Format::Toml => self.to_toml()?,
            Format::Yaml => self.to_yaml()?,
        };
        fs::write(path, text).with_context(|| format!("Failed to write catalog file: {:?}", path))
    }

    /// Problems that would drop or shadow collections when loading
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();
        for collection in &self.collections {
            if collection.key.trim().is_empty() {
                problems.push(format!("collection '{}' has an empty key", collection.name));
            }
            if !seen.insert(collection.key.as_str()) {
                problems.push(format!("duplicate collection key '{}'", collection.key));
            }
            if collection.to_collection().intervals.is_empty() {
                problems.push(format!("collection '{}' has no valid intervals", collection.key));
            }
            for (theme, labels) in &collection.labels {
                if theme.parse::<LabelTheme>().is_err() {
                    problems.push(format!(
                        "collection '{}' has unknown label theme '{}'",
                        collection.key, theme
                    ));
                }
                for pc in labels.keys().filter(|pc| parse_pitch_class(pc).is_none()) {
                    problems.push(format!(
                        "collection '{}' label {} has invalid pitch class '{}'",
                        collection.key, theme, pc
                    ));
                }
            }
        }
        problems
    }

    /// Build collections, dropping those with no valid intervals
    pub fn into_collections(self) -> Vec<NoteCollection> {
        self.collections
            .iter()
            .filter_map(|config| {
                let collection = config.to_collection();
                if collection.intervals.is_empty() {
                    warn!(key = %config.key, "collection has no valid intervals, skipping");
                    return None;
                }
                Some(collection)
            })
            .collect()
    }
}

/// One collection in a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionConfig {
    /// Catalog key; replaces a built-in collection with the same key
    pub key: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Interval spellings; loose forms like "b3" or "M7" are accepted
    pub intervals: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
    /// Parent family, for modes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<ScaleFamily>,
    /// Position within the family (0-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<usize>,
    /// Label overrides: theme name -> pitch class -> label
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, HashMap<String, String>>,
}

impl CollectionConfig {
    /// Build the collection this entry describes.
    ///
    /// Unparseable intervals and label keys are skipped. Family labels are
    /// generated when both family and rotation are present, and explicit
    /// labels override them.
    pub fn to_collection(&self) -> NoteCollection {
        let aliases: Vec<&str> = self.aliases.iter().map(String::as_str).collect();
        let types: Vec<&str> = self.types.iter().map(String::as_str).collect();
        let characteristics: Vec<&str> = self.characteristics.iter().map(String::as_str).collect();

        let mut collection = NoteCollection::new(self.key.as_str(), self.name.as_str(), &self.intervals)
            .with_aliases(&aliases)
            .with_types(&types)
            .with_characteristics(&characteristics);

        match (self.family, self.rotation) {
            (Some(family), Some(rotation)) => collection = collection.in_family(family, rotation),
            (Some(family), None) => collection.family = Some(family),
            (None, rotation) => collection.rotation = rotation,
        }

        collection.with_labels(&self.label_overrides())
    }

    fn label_overrides(&self) -> LabelsOverride {
        let mut overrides = LabelsOverride::new();
        for (name, labels) in &self.labels {
            let Ok(theme) = name.parse::<LabelTheme>() else {
                warn!(key = %self.key, theme = %name, "unknown label theme, skipping");
                continue;
            };
            for (pc, label) in labels {
                match parse_pitch_class(pc) {
                    Some(pitch_class) => overrides.insert(theme, pitch_class, label.as_str()),
                    None => warn!(key = %self.key, theme = %name, pitch_class = %pc, "invalid label pitch class"),
                }
            }
        }
        overrides
    }
}

fn parse_pitch_class(text: &str) -> Option<PitchClass> {
    text.trim().parse::<PitchClass>().ok().filter(|pc| *pc < 12)
}
