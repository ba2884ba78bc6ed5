//! External-facing types of the sanitization layer.
//!
//! Raw and clean parameter bags, the diagnostics returned to callers, and the
//! [`Sanitizer`] trait every parameter sanitizer implements.

pub mod types;

// Re-export all types for convenience
pub use types::*;

/// A sanitizer validates part of a raw request and fills the clean bag.
///
/// Implementations never fail: every problem is reported through the returned
/// [`Diagnostics`]. They must leave `clean` untouched when they report errors
/// for the fields they own.
pub trait Sanitizer {
    fn sanitize(&self, raw: &RawParams, clean: &mut CleanParams) -> Diagnostics;
}
