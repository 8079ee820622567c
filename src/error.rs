// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for parsing and catalog lookups.

use thiserror::Error;

/// Failures produced while parsing user-supplied symbols or looking up catalog data.
///
/// Parse failures are low severity: batch callers drop the offending element and
/// carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Interval string could not be mapped to a catalog interval token
    #[error("invalid interval: '{0}'")]
    InvalidInterval(String),

    /// Accidental run contained characters other than sharps and flats
    #[error("invalid accidental run: '{0}'")]
    InvalidAccidental(String),

    /// Note name is malformed or uses more than a double accidental
    #[error("invalid note name: '{0}'")]
    InvalidNoteName(String),

    /// No collection is registered under the given key
    #[error("unknown collection: '{0}'")]
    UnknownCollection(String),

    /// Label theme name is not one of the recognized themes
    #[error("unknown label theme: '{0}'")]
    UnknownLabelTheme(String),

    /// Scale family name is not recognized
    #[error("unknown scale family: '{0}'")]
    UnknownScaleFamily(String),

    /// Chord quality symbol is not recognized
    #[error("unknown chord quality: '{0}'")]
    UnknownQuality(String),
}

/// Result alias for music-theory operations
pub type TheoryResult<T> = Result<T, TheoryError>;
