//! Error types for response building, context lookup and wire encoding.
//!
//! Uses `thiserror` for typed variants that callers can match on. The
//! introspection predicates never return these; they collapse structural
//! faults to `false` instead.

use thiserror::Error;

/// Errors raised when a required field is given an empty value.
///
/// Validation is fail-fast: the first empty field is reported and the
/// value being built is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field received an empty value.
    #[error("{component} {field} cannot be empty")]
    EmptyField {
        /// The element being built (e.g. `basic card`, `option item`).
        component: &'static str,
        /// The field that was rejected (e.g. `title`, `url`).
        field: &'static str,
    },
}

impl ValidationError {
    /// Creates an empty-field error.
    #[must_use]
    pub const fn empty_field(component: &'static str, field: &'static str) -> Self {
        Self::EmptyField { component, field }
    }

    /// Returns the name of the rejected field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field, .. } => *field,
        }
    }
}

/// Errors raised by context lookups that require the context to exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No context with the given name is attached to the document.
    #[error("context not found: {0}")]
    NotFound(String),
}

/// Errors raised while encoding or decoding the wire form of a document.
#[derive(Debug, Error)]
pub enum WireError {
    /// The document could not be encoded as JSON.
    #[error("failed to encode response document: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input could not be decoded into a response document.
    #[error("failed to decode response document: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Umbrella error for callers that want a single error type.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A builder rejected a field value.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required context was missing.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Encoding or decoding failed.
    #[error(transparent)]
    Wire(#[from] WireError),
}
