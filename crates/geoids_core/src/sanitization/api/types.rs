//! Sanitization API type definitions.
//!
//! Three bags travel through a sanitizer:
//!
//! - [`RawParams`]: the untyped parameters as handed over by the transport layer.
//!   A query key may appear several times, so every name maps to the list of
//!   values it was given with.
//! - [`CleanParams`]: the typed output consumed by the query builder. Fields are
//!   only set by a sanitizer that fully succeeded.
//! - [`Diagnostics`]: human readable errors and warnings, returned to the caller
//!   who decides how to turn them into a client response.

use std::{collections::HashMap, fmt::Display};

use crate::sanitization::infrastructure::naming::CompositeId;

/// Name of the query parameter holding composite identifiers.
pub const IDS_PARAM: &str = "ids";

/// Shape of a raw parameter as received from the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawIdsValue<'a> {
    /// Parameter not supplied
    Absent,
    /// Parameter supplied exactly once
    Single(&'a str),
    /// Parameter supplied more than once, values in transport order
    Multiple(&'a [String]),
}

/// Untyped request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    params: HashMap<String, Vec<String>>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `name`, keeping earlier occurrences.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    /// Builder flavour of [`RawParams::append`].
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// Every value given for `name`, in transport order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// Classifies a parameter by how many times it was supplied.
    pub fn value(&self, name: &str) -> RawIdsValue<'_> {
        match self.get(name) {
            None | Some([]) => RawIdsValue::Absent,
            Some([single]) => RawIdsValue::Single(single),
            Some(values) => RawIdsValue::Multiple(values),
        }
    }

    /// Shortcut for the `ids` parameter.
    pub fn ids(&self) -> RawIdsValue<'_> {
        self.value(IDS_PARAM)
    }
}

impl<K, V> FromIterator<(K, V)> for RawParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut raw = Self::new();
        for (name, value) in pairs {
            raw.append(name, value);
        }
        raw
    }
}

/// Typed, validated request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanParams {
    /// Composite identifiers to look up, in first-occurrence order
    pub ids: Option<Vec<CompositeId>>,
}

/// Messages produced while sanitizing a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error using its display form.
    pub fn error(&mut self, error: impl ToString) {
        self.errors.push(error.to_string());
    }

    pub fn warning(&mut self, warning: impl ToString) {
        self.warnings.push(warning.to_string());
    }

    /// True when no error was recorded. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Appends the messages of another sanitizer run after ours.
    pub fn merge(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Errors joined by `; `, warnings are left out.
impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}
