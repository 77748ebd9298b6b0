//! Error types shared across this crate.
//!
//! Errors specific to a single concern live next to it:
//!
//! - [`EventBuildError`](crate::sse::EventBuildError): an event could not be built
//!   from the given input;
//! - `ReadSignalsError` (`http` feature): the signals sent by the client could not be read.

use smol_str::SmolStr;
use std::fmt;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned when parsing a token which is not
/// part of a closed set, e.g. [`EventType`](crate::sse::datastar::EventType).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    kind: &'static str,
    value: SmolStr,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} variant: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariantError {}
