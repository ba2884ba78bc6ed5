//! Request parameter sanitization for a geocoding API.
//!
//! Clients address records by composite identifiers such as `geoname:4163334`.
//! This crate validates the raw `ids` query parameter carrying a list of them
//! against a configured vocabulary of record types, producing either a typed
//! list for the query builder or the full set of human readable errors.
//!
//! The sanitizer is a pure function of the request and can be used directly, or
//! placed in front of any [`tower`] service with [`sanitization::init_sanitizer`].
//!
//! [`tower`]: https://docs.rs/tower

#[cfg(test)]
pub mod tests;

pub mod sanitization;

#[cfg(feature = "geoids_tracing")]
pub mod geoids_tracing {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    /// This sets up a tracing subscriber that will display logs during test execution.
    /// Call this at the beginning of tests that need to see tracing output.
    pub fn init() {
        INIT.call_once(|| {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

            fmt().with_target(false).with_test_writer().with_env_filter(filter).init();
        });
    }
}
