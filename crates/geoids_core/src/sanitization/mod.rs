//! Sanitization module.
//!
//! Turns untyped request parameters into validated, typed ones before any query
//! is built. Every problem is reported as a human readable message so the
//! request layer can answer with a client error listing all of them.
//!
//! ## Components
//!
//! - **Api**: raw and clean parameter bags, diagnostics, and the [`api::Sanitizer`] trait
//! - **Ids**: the `ids` parameter sanitizer, parsing `type:id` lists
//! - **Infrastructure**: composite identifier naming and the type vocabulary
//! - **Validation**: `tower` filter predicate gating a service on a sanitizer
//! - **Error Handling**: client facing messages and pipeline rejections
//!
//! ## Default Service Stack
//!
//! `IdsSanitizerStack<T>` wraps any service consuming [`api::CleanParams`] with the
//! `ids` sanitizer. Use [`init_sanitizer`] to build it.

pub mod api;
pub mod error;
pub mod ids;
pub mod infrastructure;
pub mod validation;

use tower::{ServiceBuilder, filter::FilterLayer};

/// Service stack sanitizing `ids` before calling `T` with the clean parameters.
pub type IdsSanitizerStack<T> =
    tower::filter::Filter<T, validation::SanitizeValidator<ids::IdsSanitizer>>;

/// Wraps `inner` with the `ids` sanitizer configured with `vocabulary`.
///
/// Requests whose `ids` parameter is invalid fail with
/// [`error::SanitizationError::Rejected`] and never reach `inner`.
pub fn init_sanitizer<T>(
    vocabulary: infrastructure::vocabulary::TypeVocabulary,
    inner: T,
) -> IdsSanitizerStack<T> {
    ServiceBuilder::new()
        .layer(FilterLayer::new(validation::SanitizeValidator::new(ids::IdsSanitizer::new(
            vocabulary,
        ))))
        .service(inner)
}
