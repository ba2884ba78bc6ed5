use thiserror::Error;

use crate::sanitization::api::Diagnostics;

/// Problems found in the raw `ids` parameter.
///
/// The `Display` output of each variant is the message reported to API clients,
/// so the wording must stay stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdsError {
    #[error("`ids` parameter specified multiple times.")]
    MultipleValues,

    #[error("invalid param '{0}': text length, must be >0")]
    EmptyOrMissing(String),

    #[error("invalid: must be of the format type:id for ex: 'geoname:4163334'")]
    MalformedToken,

    #[error("{kind} is invalid. It must be one of these values - [{allowed}]")]
    InvalidType { kind: String, allowed: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SanitizationError {
    #[error("Sanitization error, invalid parameters: {0}")]
    Rejected(Diagnostics),

    #[error("Sanitization error, type vocabulary is empty")]
    EmptyVocabulary,
}
