//! Infrastructure primitives for request sanitization.
//!
//! Composite identifier naming and the type vocabulary it is validated against.

pub mod naming;
pub mod vocabulary;
