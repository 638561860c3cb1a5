//! Crate-level error type and result alias
//!
//! Component contracts return their own structured errors
//! ([`TypeResolutionError`](crate::registry::TypeResolutionError),
//! [`CoercionError`](crate::coerce::CoercionError),
//! [`BindingError`](crate::bind::BindingError)); this module wraps them
//! for the composed operations so callers see one error surface. All
//! errors are values; nothing here is fatal to the host process.

use thiserror::Error;

use crate::bind::BindingError;
use crate::coerce::CoercionError;
use crate::registry::TypeResolutionError;
use crate::schema::SchemaIssue;

/// Result type for the `propbind` library
pub type Result<T> = core::result::Result<T, error_stack::Report<Error>>;

/// Top-level error for composed engine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A type name could not be resolved.
    #[error(transparent)]
    TypeResolution(#[from] TypeResolutionError),

    /// A value could not be coerced to its declared kind.
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// A payload failed schema validation; binding was not attempted.
    #[error("configuration failed validation with {} issue(s)", .issues.len())]
    Validation {
        /// Every issue recorded by the exhaustive validation pass
        issues: Vec<SchemaIssue>,
    },

    /// A property assignment failed.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// An argument was malformed before any component was consulted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create an "invalid argument" error.
    pub fn invalid(what: &str, details: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("{what}: {details}"))
    }
}
