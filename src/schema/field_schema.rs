//! Declared configuration shapes
//!
//! A schema is an ordered set of named entries. Entry constructors
//! enforce the structural invariants by shape: a required entry never
//! carries a default, and a declared range is only consulted for the
//! numeric kinds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::KindSpec;

/// Inclusive numeric bounds for a schema entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl NumericRange {
    /// Create an inclusive range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range, boundaries included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One named entry of a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    name: String,
    spec: KindSpec,
    required: bool,
    range: Option<NumericRange>,
    default: Option<Value>,
}

impl SchemaEntry {
    /// A required entry; the payload must supply it, so it has no default.
    pub fn required(name: impl Into<String>, spec: impl Into<KindSpec>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
            required: true,
            range: None,
            default: None,
        }
    }

    /// An optional entry with a declared default injected when absent.
    pub fn optional(
        name: impl Into<String>,
        spec: impl Into<KindSpec>,
        default: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
            required: false,
            range: None,
            default: Some(default.into()),
        }
    }

    /// An optional entry with no default; absent means left untouched.
    pub fn optional_bare(name: impl Into<String>, spec: impl Into<KindSpec>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
            required: false,
            range: None,
            default: None,
        }
    }

    /// Declare inclusive numeric bounds; consulted only for numeric kinds.
    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(NumericRange::new(min, max));
        self
    }

    /// Entry name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind and coercion metadata
    #[must_use]
    pub const fn spec(&self) -> &KindSpec {
        &self.spec
    }

    /// Whether the payload must supply this entry
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Declared numeric bounds, if any
    #[must_use]
    pub const fn range(&self) -> Option<NumericRange> {
        self.range
    }

    /// Declared default, if any
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// The declared shape of a configuration payload for one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    name: String,
    entries: Vec<SchemaEntry>,
}

impl FieldSchema {
    /// Create an empty schema keyed by an operation or type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry, preserving declaration order.
    #[must_use]
    pub fn entry(mut self, entry: SchemaEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Schema key (operation or target type name)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in declaration order
    #[must_use]
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Look up an entry by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::value_kind::ValueKind;

    use super::*;

    #[test]
    fn range_boundaries_are_inclusive() {
        let range = NumericRange::new(0.0, 100.0);
        assert!(range.contains(0.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(100.001));
    }

    #[test]
    fn entries_keep_declaration_order() {
        let schema = FieldSchema::new("spawn")
            .entry(SchemaEntry::required("speed", ValueKind::Float))
            .entry(SchemaEntry::optional("looping", ValueKind::Bool, false));
        let names: Vec<&str> = schema.entries().iter().map(SchemaEntry::name).collect();
        assert_eq!(names, vec!["speed", "looping"]);
        assert!(schema.get("speed").is_some_and(SchemaEntry::is_required));
    }
}
