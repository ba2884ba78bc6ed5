//! Closed vocabulary of composite identifier types.
//!
//! The vocabulary is owned by whoever configures the API (layers and sources
//! known to the index) and handed to the sanitizer at construction time. It is
//! read-only from the sanitizer's point of view and is used twice: membership
//! testing, and listing the allowed values in error messages. Order is kept
//! exactly as configured so that the message is stable.

use std::{fmt::Display, str::FromStr};

use crate::sanitization::{error::SanitizationError, infrastructure::naming::LIST_DELIM};

/// Types accepted when no vocabulary is configured explicitly.
pub const DEFAULT_TYPES: &[&str] = &[
    "geoname",
    "osmnode",
    "osmway",
    "admin0",
    "admin1",
    "admin2",
    "neighborhood",
    "locality",
    "local_admin",
    "osmaddress",
    "openaddresses",
];

/// Ordered set of valid `type` tokens.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TypeVocabulary {
    types: Vec<String>,
}

impl TypeVocabulary {
    /// Builds a vocabulary from the given types, dropping repeated entries.
    pub fn new<I, T>(types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for kind in types.into_iter().map(Into::into) {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { types: unique }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TYPES.iter().copied())
    }
}

/// Comma and space separated, as shown to API clients.
impl Display for TypeVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.types.join(", "))
    }
}

/// Parses a comma-separated configuration value such as `geoname,osmnode`.
///
/// Entries are trimmed and blank entries skipped. A list without any usable
/// entry is rejected, since it would make every request fail.
impl FromStr for TypeVocabulary {
    type Err = SanitizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vocabulary =
            Self::new(s.split(LIST_DELIM).map(str::trim).filter(|kind| !kind.is_empty()));
        if vocabulary.is_empty() { Err(SanitizationError::EmptyVocabulary) } else { Ok(vocabulary) }
    }
}
