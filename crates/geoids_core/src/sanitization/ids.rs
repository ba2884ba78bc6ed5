//! Sanitizer for the `ids` request parameter.
//!
//! The parameter carries a comma-separated list of composite identifiers, for
//! example `ids=geoname:4163334,osmnode:123`. Sanitizing it goes through two
//! phases:
//!
//! **Structural checks** stop at the first failure: the parameter must be given
//! exactly once and must not be blank. A single error is reported and nothing
//! else is looked at.
//!
//! **Token checks** run over every distinct token and accumulate one error per
//! bad token, so a client sees all its mistakes at once. Tokens are deduplicated
//! on their raw text before being checked, first occurrence wins.
//!
//! The clean `ids` list is published only when every token is valid. A request
//! with one bad token out of ten gets nine silent successes and one error, but
//! no partial `ids`.

use std::collections::HashSet;

#[cfg(feature = "geoids_tracing")]
use tracing::debug;

use crate::sanitization::{
    api::{CleanParams, Diagnostics, IDS_PARAM, RawIdsValue, RawParams, Sanitizer},
    error::IdsError,
    infrastructure::{
        naming::{CompositeId, LIST_DELIM, is_blank},
        vocabulary::TypeVocabulary,
    },
};

/// Validates the `ids` parameter against an injected type vocabulary.
#[derive(Debug, Clone, Default)]
pub struct IdsSanitizer {
    vocabulary: TypeVocabulary,
}

impl IdsSanitizer {
    pub fn new(vocabulary: TypeVocabulary) -> Self {
        Self { vocabulary }
    }

    fn sanitize_list(&self, list: &str, clean: &mut CleanParams) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        let mut seen = HashSet::new();
        let tokens: Vec<&str> =
            list.split(LIST_DELIM).filter(|token| seen.insert(*token)).collect();

        #[cfg(feature = "geoids_tracing")]
        debug!("[ids] sanitizing {} distinct token(s) out of {:?}", tokens.len(), list);

        // Reported once for the whole list, on top of the per token errors below
        if tokens.iter().any(|token| is_blank(token)) {
            diagnostics.error(IdsError::EmptyOrMissing(IDS_PARAM.to_string()));
        }

        let mut ids = Vec::with_capacity(tokens.len());
        for token in tokens {
            match CompositeId::parse(token, &self.vocabulary) {
                Ok(id) => ids.push(id),
                Err(error) => diagnostics.error(error),
            }
        }

        if diagnostics.is_ok() {
            clean.ids = Some(ids);
        }
        diagnostics
    }
}

impl Sanitizer for IdsSanitizer {
    fn sanitize(&self, raw: &RawParams, clean: &mut CleanParams) -> Diagnostics {
        match raw.ids() {
            RawIdsValue::Multiple(_values) => {
                #[cfg(feature = "geoids_tracing")]
                debug!("[ids] parameter given {} times", _values.len());
                let mut diagnostics = Diagnostics::new();
                diagnostics.error(IdsError::MultipleValues);
                diagnostics
            }
            RawIdsValue::Single(list) if !is_blank(list) => self.sanitize_list(list, clean),
            RawIdsValue::Single(_) | RawIdsValue::Absent => {
                let mut diagnostics = Diagnostics::new();
                diagnostics.error(IdsError::EmptyOrMissing(IDS_PARAM.to_string()));
                diagnostics
            }
        }
    }
}
