//! Exhaustive payload validation and default merging
//!
//! The validator never short-circuits: every entry is evaluated so a
//! caller sees all problems in one response. Unknown payload keys are
//! warnings, not errors, and are dropped from the merged result.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use super::field_schema::{FieldSchema, SchemaEntry};
use super::result::{SchemaIssue, ValidationResult};
use crate::coerce::Coercer;

/// Validates configuration payloads against declared schemas.
pub struct SchemaValidator {
    coercer: Arc<Coercer>,
}

impl SchemaValidator {
    /// Create a validator that coerces entries through `coercer`.
    #[must_use]
    pub const fn new(coercer: Arc<Coercer>) -> Self {
        Self { coercer }
    }

    /// Validate `payload` against `schema`, merging declared defaults.
    ///
    /// Pure with respect to its inputs: the same payload and schema
    /// always produce the same result.
    #[must_use]
    pub fn validate(&self, payload: &Map<String, Value>, schema: &FieldSchema) -> ValidationResult {
        let mut result = ValidationResult::default();

        for entry in schema.entries() {
            match payload.get(entry.name()) {
                Some(raw) => self.check_supplied(&mut result, entry, raw),
                None if entry.is_required() => result.record(SchemaIssue::MissingRequired {
                    field: entry.name().to_string(),
                }),
                None => self.inject_default(&mut result, entry),
            }
        }

        for key in payload.keys() {
            if schema.get(key).is_none() {
                debug!("unknown field `{key}` dropped from `{}` payload", schema.name());
                result.record(SchemaIssue::UnknownField { field: key.clone() });
            }
        }

        result
    }

    /// Coerce a supplied value and check its declared range.
    fn check_supplied(&self, result: &mut ValidationResult, entry: &SchemaEntry, raw: &Value) {
        match self.coercer.coerce(entry.name(), raw, entry.spec()) {
            Ok(value) => {
                if entry.spec().kind.is_numeric()
                    && let Some(range) = entry.range()
                    && let Some(numeric) = value.as_f64()
                    && !range.contains(numeric)
                {
                    result.record(SchemaIssue::OutOfRange {
                        field: entry.name().to_string(),
                        value: numeric,
                        range,
                    });
                    return;
                }
                result.merge(entry.name().to_string(), value);
            }
            Err(err) => result.record(SchemaIssue::Coercion(err)),
        }
    }

    /// Inject a declared default into the merged configuration.
    ///
    /// Defaults are authored alongside the schema and are expected to be
    /// well-formed; a default that fails coercion is reported the same
    /// way a payload value would be.
    fn inject_default(&self, result: &mut ValidationResult, entry: &SchemaEntry) {
        let Some(default) = entry.default_value() else {
            return;
        };
        match self.coercer.coerce(entry.name(), default, entry.spec()) {
            Ok(value) => result.merge(entry.name().to_string(), value),
            Err(err) => result.record(SchemaIssue::Coercion(err)),
        }
    }
}
