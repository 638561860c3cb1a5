//! Schema validation and default merging for configuration payloads
//!
//! A [`FieldSchema`] declares the shape a payload must take for one
//! logical operation or target type; the [`SchemaValidator`] checks a
//! payload against it exhaustively — every problem is collected in one
//! pass — and produces the merged, fully-typed configuration the binder
//! consumes.

mod field_schema;
mod result;
mod validator;

pub use field_schema::{FieldSchema, NumericRange, SchemaEntry};
pub use result::{SchemaIssue, ValidationResult};
pub use validator::SchemaValidator;
