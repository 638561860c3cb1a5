//! Validation outcomes
//!
//! Validation collects every issue in one pass. Issues split into fatal
//! errors (missing required entry, range violation, coercion failure)
//! and non-fatal warnings (unknown field, dropped from the merged
//! result). The merged configuration is only exposed when no fatal
//! issue was recorded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field_schema::NumericRange;
use crate::coerce::{CoercionError, TypedValue};

/// One problem found while validating a payload against a schema.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SchemaIssue {
    /// A required entry was absent from the payload.
    #[error("missing required field `{field}`")]
    MissingRequired {
        /// Name of the absent entry
        field: String,
    },

    /// A numeric value fell outside its declared inclusive range.
    #[error("field `{field}` value {value} is outside the range [{}, {}]", .range.min, .range.max)]
    OutOfRange {
        /// Name of the violating entry
        field: String,
        /// The coerced numeric value
        value: f64,
        /// The declared bounds
        range: NumericRange,
    },

    /// A payload value could not be coerced to its declared kind.
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// A payload key matched no schema entry; non-fatal, the key is
    /// dropped from the merged result.
    #[error("unknown field `{field}` ignored")]
    UnknownField {
        /// The unmatched payload key
        field: String,
    },
}

impl SchemaIssue {
    /// Whether this issue fails validation (warnings do not).
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnknownField { .. })
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    issues: Vec<SchemaIssue>,
    merged: Vec<(String, TypedValue)>,
}

impl ValidationResult {
    pub(crate) fn record(&mut self, issue: SchemaIssue) {
        self.issues.push(issue);
    }

    pub(crate) fn merge(&mut self, field: String, value: TypedValue) {
        self.merged.push((field, value));
    }

    /// Whether the payload passed (warnings alone do not fail it).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(SchemaIssue::is_fatal)
    }

    /// Every issue recorded, fatal and non-fatal, in evaluation order.
    #[must_use]
    pub fn issues(&self) -> &[SchemaIssue] {
        &self.issues
    }

    /// Fatal issues only.
    pub fn errors(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.issues.iter().filter(|issue| issue.is_fatal())
    }

    /// Non-fatal warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.issues.iter().filter(|issue| !issue.is_fatal())
    }

    /// The merged configuration, available only when validation passed.
    ///
    /// Entries follow schema declaration order: validated payload values
    /// overlaid on declared defaults, unknown keys dropped.
    #[must_use]
    pub fn merged(&self) -> Option<&[(String, TypedValue)]> {
        self.is_valid().then_some(self.merged.as_slice())
    }

    /// Consume the result, splitting it into issues and the merged
    /// configuration (`None` when validation failed).
    #[must_use]
    pub fn into_parts(self) -> (Vec<SchemaIssue>, Option<Vec<(String, TypedValue)>>) {
        let valid = self.is_valid();
        (self.issues, valid.then_some(self.merged))
    }
}
