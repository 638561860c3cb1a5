//! End-to-end validate-then-bind orchestration
//!
//! [`BindingEngine`] is the seam an editor's tool layer calls: validate a
//! payload against its schema, then bind every merged field onto the
//! target, aggregating per-field outcomes. Validation always precedes
//! binding, and binding never sees a field that failed validation.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::bind::{BindingError, PropertyBinder, PropertyPath, ReflectTarget};
use crate::coerce::{Coercer, ObjectRefResolver};
use crate::error::{Error, Result};
use crate::registry::{TypeResolver, TypeUniverse};
use crate::schema::{FieldSchema, SchemaIssue, SchemaValidator};

/// One field whose binding failed after validation passed.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// The merged-configuration key (possibly a dotted path)
    pub field: String,
    /// Why the assignment did not happen
    pub error: BindingError,
}

/// Aggregated outcome of one apply pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    bound: Vec<String>,
    failures: Vec<FieldFailure>,
    warnings: Vec<SchemaIssue>,
}

impl ApplyReport {
    /// Fields assigned successfully, in merge order.
    #[must_use]
    pub fn bound(&self) -> &[String] {
        &self.bound
    }

    /// Fields whose binding failed; earlier binds are not rolled back.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Non-fatal validation warnings (unknown fields dropped).
    #[must_use]
    pub fn warnings(&self) -> &[SchemaIssue] {
        &self.warnings
    }

    /// Whether every merged field was bound.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The composed configuration engine.
///
/// Owns the shared resolver, coercer, validator, and binder; construct
/// one per process next to the host's collaborators.
pub struct BindingEngine {
    resolver: Arc<TypeResolver>,
    validator: SchemaValidator,
    binder: PropertyBinder,
}

impl BindingEngine {
    /// Wire an engine from the host's collaborators.
    #[must_use]
    pub fn new(universe: Arc<dyn TypeUniverse>, refs: Arc<dyn ObjectRefResolver>) -> Self {
        let resolver = Arc::new(TypeResolver::new(Arc::clone(&universe)));
        let coercer = Arc::new(
            Coercer::new(Arc::clone(&resolver), refs).with_layers(universe.layer_names()),
        );
        Self::from_parts(resolver, coercer)
    }

    /// Wire an engine from pre-built parts, for callers that configured
    /// resolver aliases or coercer extensions themselves.
    #[must_use]
    pub fn from_parts(resolver: Arc<TypeResolver>, coercer: Arc<Coercer>) -> Self {
        Self {
            resolver: Arc::clone(&resolver),
            validator: SchemaValidator::new(Arc::clone(&coercer)),
            binder: PropertyBinder::new(resolver, coercer),
        }
    }

    /// The shared type resolver, for tool layers that resolve component
    /// names from free text before configuring anything.
    #[must_use]
    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Validate `payload` against `schema`, then bind every merged field
    /// onto `target`.
    ///
    /// Binding is per-field: one field's failure does not stop the rest,
    /// and the report says which fields were set and which were not.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] carrying the full issue list when the
    /// payload fails validation; binding is not attempted in that case.
    pub fn apply(
        &self,
        target: &mut dyn ReflectTarget,
        schema: &FieldSchema,
        payload: &Map<String, Value>,
    ) -> Result<ApplyReport> {
        let validation = self.validator.validate(payload, schema);
        let (issues, merged) = validation.into_parts();
        let Some(merged) = merged else {
            return Err(Error::Validation { issues }.into());
        };

        debug!(
            "applying {} merged field(s) from `{}`",
            merged.len(),
            schema.name()
        );
        let mut report = ApplyReport {
            warnings: issues,
            ..ApplyReport::default()
        };
        for (field, value) in merged {
            let outcome = PropertyPath::parse(&field)
                .and_then(|path| self.binder.bind(target, &path, value));
            match outcome {
                Ok(()) => report.bound.push(field),
                Err(error) => report.failures.push(FieldFailure { field, error }),
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use serde_json::json;

    use super::*;
    use crate::bind::{DynamicInstance, MemberValue};
    use crate::coerce::TypedValue;
    use crate::schema::SchemaEntry;
    use crate::test_support::{material_instance, sample_engine};
    use crate::value_kind::ValueKind;

    fn renderer_schema() -> FieldSchema {
        FieldSchema::new("configure_renderer")
            .entry(SchemaEntry::required("material.color", ValueKind::Color))
            .entry(SchemaEntry::optional("enabled", ValueKind::Bool, true))
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn applies_validated_fields_through_dotted_paths() {
        let engine = sample_engine();
        let mut renderer = DynamicInstance::new("Renderer")
            .with_member("material", MemberValue::Object(material_instance()));

        let report = engine
            .apply(
                &mut renderer,
                &renderer_schema(),
                &payload(json!({ "material.color": "red" })),
            )
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.bound(), ["material.color", "enabled"]);
        assert_eq!(
            renderer.member("enabled"),
            Some(&MemberValue::Typed(TypedValue::Bool(true)))
        );
    }

    #[test]
    fn validation_failure_prevents_any_binding() {
        let engine = sample_engine();
        let mut renderer = DynamicInstance::new("Renderer")
            .with_member("material", MemberValue::Object(material_instance()));

        let err = engine
            .apply(&mut renderer, &renderer_schema(), &payload(json!({})))
            .unwrap_err();
        let Error::Validation { issues } = err.current_context() else {
            panic!("expected a validation error");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(renderer.member("enabled"), None);
    }

    #[test]
    fn binding_failures_are_aggregated_per_field() {
        let engine = sample_engine();
        // Material left unset: the dotted field fails, the plain one binds.
        let mut renderer = DynamicInstance::new("Renderer")
            .with_member("material", MemberValue::UnsetReference);

        let report = engine
            .apply(
                &mut renderer,
                &renderer_schema(),
                &payload(json!({ "material.color": "red", "enabled": false })),
            )
            .unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.bound(), ["enabled"]);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].field, "material.color");
        assert!(matches!(
            report.failures()[0].error,
            BindingError::NullIntermediate { .. }
        ));
    }

    #[test]
    fn unknown_field_warnings_ride_along_on_success() {
        let engine = sample_engine();
        let mut renderer = DynamicInstance::new("Renderer")
            .with_member("material", MemberValue::Object(material_instance()));

        let report = engine
            .apply(
                &mut renderer,
                &renderer_schema(),
                &payload(json!({ "material.color": "blue", "stray": 1 })),
            )
            .unwrap();
        assert!(report.is_complete());
        assert_eq!(report.warnings().len(), 1);
    }
}
