//! Value coercion from untyped payload values to declared kinds
//!
//! Dispatch is purely on the declared [`ValueKind`]: one coercion rule
//! per tag, no inference across tags. Every failure is a structured
//! [`CoercionError`] naming the field, the expected kind, and the
//! offending raw value; nothing in this module panics or throws across
//! the component boundary.

mod color;
mod enums;
mod math;
mod object_ref;
mod typed_value;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub use object_ref::{NullRefResolver, ObjectHandle, ObjectRefResolver};
pub use typed_value::TypedValue;

use crate::json_object::IntoStrings;
use crate::registry::{KindSpec, TypeResolver};
use crate::value_kind::ValueKind;

/// A value that could not become its declared kind.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[error("field `{field}` expected {expected}: {reason} (got {raw})")]
pub struct CoercionError {
    /// The configuration field being coerced
    pub field: String,
    /// The declared kind the value had to become
    pub expected: ValueKind,
    /// The offending raw value
    pub raw: Value,
    /// Why the value was rejected
    pub reason: String,
}

impl CoercionError {
    pub(crate) fn new(
        field: &str,
        expected: ValueKind,
        raw: &Value,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field: field.to_string(),
            expected,
            raw: raw.clone(),
            reason: reason.into(),
        }
    }
}

/// Converts untyped payload values into [`TypedValue`]s.
///
/// Holds the host collaborators the conversion rules need: the type
/// resolver (nested objects), the object resolver (references), the
/// host's layer table, and any caller-registered named colors.
pub struct Coercer {
    resolver: Arc<TypeResolver>,
    refs: Arc<dyn ObjectRefResolver>,
    layers: Vec<String>,
    color_extensions: HashMap<String, [f32; 4]>,
}

impl Coercer {
    /// Create a coercer over the given collaborators.
    #[must_use]
    pub fn new(resolver: Arc<TypeResolver>, refs: Arc<dyn ObjectRefResolver>) -> Self {
        Self {
            resolver,
            refs,
            layers: Vec::new(),
            color_extensions: HashMap::new(),
        }
    }

    /// Supply the host's layer names in bit order.
    #[must_use]
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.layers = layers.into_iter().map(Into::into).collect();
        self
    }

    /// Register a named color, shadowing the built-in table.
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, rgba: [f32; 4]) -> Self {
        self.color_extensions
            .insert(name.into().to_ascii_lowercase(), rgba);
        self
    }

    /// Convert `raw` into the kind declared by `spec`.
    ///
    /// # Errors
    ///
    /// [`CoercionError`] when the raw value cannot be interpreted as the
    /// declared kind; the error names the field, the expected kind, and
    /// the offending value.
    pub fn coerce(
        &self,
        field: &str,
        raw: &Value,
        spec: &KindSpec,
    ) -> Result<TypedValue, CoercionError> {
        match spec.kind {
            ValueKind::Bool => coerce_bool(field, raw),
            ValueKind::Integer => coerce_integer(field, raw),
            ValueKind::Float => coerce_float(field, raw),
            ValueKind::String => coerce_string(field, raw),
            ValueKind::Vector2 => {
                let c = math::coerce_components(field, raw, spec.kind, 2, true)?;
                Ok(TypedValue::Vector2([c[0], c[1]]))
            }
            ValueKind::Vector3 => {
                let c = math::coerce_components(field, raw, spec.kind, 3, true)?;
                Ok(TypedValue::Vector3([c[0], c[1], c[2]]))
            }
            ValueKind::Vector4 => {
                let c = math::coerce_components(field, raw, spec.kind, 4, true)?;
                Ok(TypedValue::Vector4([c[0], c[1], c[2], c[3]]))
            }
            ValueKind::Quaternion => {
                let c = math::coerce_components(field, raw, spec.kind, 4, false)?;
                Ok(TypedValue::Quaternion([c[0], c[1], c[2], c[3]]))
            }
            ValueKind::Color => color::coerce_color(field, raw, &self.color_extensions),
            ValueKind::Enum => enums::coerce_enum(field, raw, &spec.enum_members),
            ValueKind::LayerMask => enums::coerce_layer_mask(field, raw, &self.layers),
            ValueKind::ObjectReference => object_ref::coerce_reference(
                self.refs.as_ref(),
                field,
                raw,
                spec.reference_type.as_ref(),
            ),
            ValueKind::NestedObject => self.coerce_nested(field, raw, spec),
        }
    }

    /// Structural recursion into a nested object.
    ///
    /// Each entry is coerced against the nested type's member table.
    /// Dotted keys are not interpreted here; path walking belongs to the
    /// binder.
    fn coerce_nested(
        &self,
        field: &str,
        raw: &Value,
        spec: &KindSpec,
    ) -> Result<TypedValue, CoercionError> {
        let Value::Object(entries) = raw else {
            return Err(CoercionError::new(
                field,
                ValueKind::NestedObject,
                raw,
                "expected a mapping",
            ));
        };
        let Some(nested_type) = spec.nested_type.as_ref() else {
            return Err(CoercionError::new(
                field,
                ValueKind::NestedObject,
                raw,
                "nested kind declared without a member-table type",
            ));
        };
        let descriptor = self.resolver.resolve(nested_type.as_str()).map_err(|err| {
            CoercionError::new(field, ValueKind::NestedObject, raw, err.to_string())
        })?;

        debug!("structurally coercing `{field}` as `{nested_type}`");
        let mut coerced = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let member = descriptor.member(name).ok_or_else(|| {
                CoercionError::new(
                    field,
                    ValueKind::NestedObject,
                    raw,
                    format!(
                        "`{nested_type}` has no member `{name}`; available members: {}",
                        descriptor.member_names().into_strings().join(", ")
                    ),
                )
            })?;
            let entry_field = format!("{field}.{name}");
            coerced.push((name.clone(), self.coerce(&entry_field, value, &member.spec)?));
        }
        Ok(TypedValue::Nested(coerced))
    }
}

fn coerce_bool(field: &str, raw: &Value) -> Result<TypedValue, CoercionError> {
    raw.as_bool().map(TypedValue::Bool).ok_or_else(|| {
        CoercionError::new(field, ValueKind::Bool, raw, "expected true or false")
    })
}

fn coerce_string(field: &str, raw: &Value) -> Result<TypedValue, CoercionError> {
    raw.as_str()
        .map(|s| TypedValue::Text(s.to_string()))
        .ok_or_else(|| CoercionError::new(field, ValueKind::String, raw, "expected a string"))
}

fn coerce_integer(field: &str, raw: &Value) -> Result<TypedValue, CoercionError> {
    let out_of_domain =
        || CoercionError::new(field, ValueKind::Integer, raw, "expected a whole number");
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| whole_float_to_i64(number.as_f64()?))
            .map(TypedValue::Integer)
            .ok_or_else(out_of_domain),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| whole_float_to_i64(text.trim().parse::<f64>().ok()?))
            .map(TypedValue::Integer)
            .ok_or_else(out_of_domain),
        _ => Err(out_of_domain()),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the fractional check guarantees the cast is exact for in-range values"
)]
fn whole_float_to_i64(value: f64) -> Option<i64> {
    #[allow(clippy::cast_precision_loss, reason = "bounds comparison only")]
    let in_range = value.is_finite() && value.abs() <= i64::MAX as f64;
    (in_range && value.fract() == 0.0).then_some(value as i64)
}

fn coerce_float(field: &str, raw: &Value) -> Result<TypedValue, CoercionError> {
    let out_of_domain = || CoercionError::new(field, ValueKind::Float, raw, "expected a number");
    let numeric = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    numeric
        .filter(|value| value.is_finite())
        .map(TypedValue::Float)
        .ok_or_else(out_of_domain)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use serde_json::json;

    use super::*;
    use crate::test_support::sample_coercer;

    #[test]
    fn numeric_kinds_accept_numbers_and_numeric_strings() {
        let coercer = sample_coercer();
        let spec = KindSpec::of(ValueKind::Float);
        assert_eq!(
            coercer.coerce("speed", &json!(2.5), &spec).unwrap(),
            TypedValue::Float(2.5)
        );
        assert_eq!(
            coercer.coerce("speed", &json!("2.5"), &spec).unwrap(),
            TypedValue::Float(2.5)
        );

        let ints = KindSpec::of(ValueKind::Integer);
        assert_eq!(
            coercer.coerce("count", &json!("12"), &ints).unwrap(),
            TypedValue::Integer(12)
        );
        assert_eq!(
            coercer.coerce("count", &json!(12.0), &ints).unwrap(),
            TypedValue::Integer(12)
        );
    }

    #[test]
    fn numeric_kinds_reject_booleans_and_non_numeric_strings() {
        let coercer = sample_coercer();
        let spec = KindSpec::of(ValueKind::Float);
        let err = coercer.coerce("speed", &json!(true), &spec).unwrap_err();
        assert_eq!(err.expected, ValueKind::Float);

        let err = coercer.coerce("speed", &json!("fast"), &spec).unwrap_err();
        assert_eq!(err.field, "speed");
        assert_eq!(err.raw, json!("fast"));
    }

    #[test]
    fn integer_rejects_fractional_values() {
        let coercer = sample_coercer();
        let spec = KindSpec::of(ValueKind::Integer);
        let err = coercer.coerce("count", &json!(1.5), &spec).unwrap_err();
        assert!(err.reason.contains("whole number"));
    }

    #[test]
    fn vector_dispatch_produces_fixed_arity_values() {
        let coercer = sample_coercer();
        let value = coercer
            .coerce("scale", &json!({ "x": 2 }), &KindSpec::of(ValueKind::Vector3))
            .unwrap();
        assert_eq!(value, TypedValue::Vector3([2.0, 0.0, 0.0]));
    }

    #[test]
    fn nested_objects_coerce_structurally() {
        let coercer = sample_coercer();
        let spec = KindSpec::nested("Material");
        let value = coercer
            .coerce("material", &json!({ "color": "red", "metallic": 0.25 }), &spec)
            .unwrap();
        let TypedValue::Nested(entries) = value else {
            panic!("expected nested value");
        };
        assert_eq!(entries[0].0, "color");
        assert_eq!(entries[0].1, TypedValue::Color([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(entries[1].1, TypedValue::Float(0.25));
    }

    #[test]
    fn nested_objects_report_unknown_members_with_alternatives() {
        let coercer = sample_coercer();
        let spec = KindSpec::nested("Material");
        let err = coercer
            .coerce("material", &json!({ "colr": "red" }), &spec)
            .unwrap_err();
        assert!(err.reason.contains("no member `colr`"));
        assert!(err.reason.contains("color"));
    }
}
