//! Composite identifier naming.
//!
//! Records exposed by the geocoding API are addressed by a composite identifier of
//! the form `type:id`, for example `geoname:4163334`. The `type` part names the
//! source or layer the record comes from and must belong to the configured
//! [`TypeVocabulary`]; the `id` part is opaque and taken verbatim.
//!
//! ## Parsing Rules
//!
//! - The token is split on the **first** `:` only. Anything after it, further
//!   colons included, belongs to the `id`.
//! - Neither part may be empty or whitespace-only.
//! - The `id` is checked before the `type`, so a token such as `:` reports a
//!   missing value once rather than twice.

use std::fmt::Display;

use crate::sanitization::{error::IdsError, infrastructure::vocabulary::TypeVocabulary};

/// Delimiter between the type and the id of a composite identifier.
pub const ID_DELIM: char = ':';

/// Delimiter between composite identifiers in the raw `ids` parameter.
pub const LIST_DELIM: char = ',';

/// A validated `type:id` pair.
///
/// Instances are only produced by [`CompositeId::parse`] or by the sanitizer, so
/// holding one means both fields are non-blank and the type was accepted by the
/// vocabulary in use at the time.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CompositeId {
    /// Source or layer discriminator (the `type` part)
    pub kind: String,
    /// Opaque identifier within the source
    pub id: String,
}

impl CompositeId {
    /// Parses and validates a single raw token against `vocabulary`.
    ///
    /// The error carries the exact message reported to API clients.
    pub fn parse(raw: &str, vocabulary: &TypeVocabulary) -> Result<Self, IdsError> {
        let Some((kind, id)) = raw.split_once(ID_DELIM) else {
            return Err(IdsError::MalformedToken);
        };

        if is_blank(id) || is_blank(kind) {
            Err(IdsError::EmptyOrMissing(raw.to_string()))
        } else if !vocabulary.contains(kind) {
            Err(IdsError::InvalidType { kind: kind.to_string(), allowed: vocabulary.to_string() })
        } else {
            Ok(Self { kind: kind.to_string(), id: id.to_string() })
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for CompositeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.kind, ID_DELIM, self.id)
    }
}

/// Renders a list of identifiers back into the raw `ids` parameter form.
///
/// Sanitizing the returned string with the same vocabulary yields `ids` again.
pub fn join_ids(ids: &[CompositeId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(&LIST_DELIM.to_string())
}

/// Empty or whitespace-only text.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
