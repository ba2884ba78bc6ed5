//! Request validation and filtering for the query pipeline.
//!
//! [`SanitizeValidator`] turns any [`Sanitizer`] into a `tower` filter predicate.
//! Placed in front of a query builder with `FilterLayer`, it converts each
//! [`RawParams`] request into [`CleanParams`] and only lets it through when the
//! sanitizer reported no error. Rejected requests never reach the inner
//! service; the caller receives a [`SanitizationError::Rejected`] carrying the
//! full diagnostics, ready to be turned into a client error response.

#[cfg(feature = "geoids_tracing")]
use tracing::info;
use tower::{BoxError, filter::Predicate};

use crate::sanitization::{
    api::{CleanParams, RawParams, Sanitizer},
    error::SanitizationError,
};

/// Filter predicate running a sanitizer on incoming requests.
#[derive(Default, Debug, Clone)]
pub struct SanitizeValidator<S> {
    sanitizer: S,
}

impl<S> SanitizeValidator<S> {
    pub fn new(sanitizer: S) -> Self {
        Self { sanitizer }
    }
}

impl<S: Sanitizer> Predicate<RawParams> for SanitizeValidator<S> {
    type Request = CleanParams;

    fn check(&mut self, request: RawParams) -> Result<Self::Request, BoxError> {
        let mut clean = CleanParams::default();
        let diagnostics = self.sanitizer.sanitize(&request, &mut clean);
        if diagnostics.is_ok() {
            Ok(clean)
        } else {
            #[cfg(feature = "geoids_tracing")]
            info!("[validator] rejecting request: {:?}", diagnostics.errors);
            Err(Box::new(SanitizationError::Rejected(diagnostics)))
        }
    }
}
