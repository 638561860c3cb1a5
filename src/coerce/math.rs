//! Vector and quaternion coercion
//!
//! Accepts either positional array form (`[1.0, 2.0, 3.0]`) or named
//! component mappings (`{"x": 1.0, "y": 2.0}`). Vector mappings may omit
//! trailing components, which default to 0; quaternions are taken as
//! already normalized and must supply all four components.

use serde_json::Value;

use super::CoercionError;
use crate::json_object::JsonObjectAccess;
use crate::value_kind::ValueKind;

/// Component names in declaration order for the mapping form
const COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Coerce `raw` into exactly `count` float components.
///
/// `fill_missing` controls the mapping form only: vectors default absent
/// components to 0, quaternions reject them.
#[allow(
    clippy::cast_possible_truncation,
    reason = "components are stored as f32 by the value model"
)]
pub(crate) fn coerce_components(
    field: &str,
    raw: &Value,
    kind: ValueKind,
    count: usize,
    fill_missing: bool,
) -> Result<Vec<f32>, CoercionError> {
    match raw {
        Value::Array(items) => {
            if items.len() != count {
                return Err(CoercionError::new(
                    field,
                    kind,
                    raw,
                    format!("expected {count} components, got {}", items.len()),
                ));
            }
            let mut components = Vec::with_capacity(count);
            for (index, item) in items.iter().enumerate() {
                let component = item.as_f64().ok_or_else(|| {
                    CoercionError::new(
                        field,
                        kind,
                        raw,
                        format!("component {index} is not a number"),
                    )
                })?;
                components.push(component as f32);
            }
            Ok(components)
        }
        Value::Object(_) => {
            let mut components = Vec::with_capacity(count);
            for name in COMPONENT_NAMES.iter().take(count) {
                match raw.get_field(name) {
                    Some(component) => {
                        let numeric = component.as_f64().ok_or_else(|| {
                            CoercionError::new(
                                field,
                                kind,
                                raw,
                                format!("component `{name}` is not a number"),
                            )
                        })?;
                        components.push(numeric as f32);
                    }
                    None if fill_missing => components.push(0.0),
                    None => {
                        return Err(CoercionError::new(
                            field,
                            kind,
                            raw,
                            format!("missing component `{name}`"),
                        ));
                    }
                }
            }
            Ok(components)
        }
        _ => Err(CoercionError::new(
            field,
            kind,
            raw,
            format!("expected an array of {count} numbers or a component mapping"),
        )),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use serde_json::json;

    use super::*;

    #[test]
    fn array_form_is_exact_length() {
        let ok = coerce_components("size", &json!([1.0, 2.0, 3.0]), ValueKind::Vector3, 3, true);
        assert_eq!(ok.unwrap(), vec![1.0, 2.0, 3.0]);

        let err =
            coerce_components("size", &json!([1.0, 2.0]), ValueKind::Vector3, 3, true).unwrap_err();
        assert!(err.reason.contains("expected 3 components"));
    }

    #[test]
    fn mapping_form_defaults_missing_vector_components() {
        let components = coerce_components(
            "offset",
            &json!({ "x": 4, "z": 2.5 }),
            ValueKind::Vector3,
            3,
            true,
        )
        .unwrap();
        assert_eq!(components, vec![4.0, 0.0, 2.5]);
    }

    #[test]
    fn quaternion_mapping_requires_all_components() {
        let err = coerce_components(
            "rotation",
            &json!({ "x": 0.0, "y": 0.0, "z": 0.0 }),
            ValueKind::Quaternion,
            4,
            false,
        )
        .unwrap_err();
        assert!(err.reason.contains("missing component `w`"));
    }

    #[test]
    fn round_trips_array_components() {
        let original = [0.25_f32, -1.5, 3.75];
        let raw = json!(original);
        let components =
            coerce_components("scale", &raw, ValueKind::Vector3, 3, true).unwrap();
        for (got, want) in components.iter().zip(original.iter()) {
            assert!((got - want).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn rejects_non_numeric_components() {
        let err = coerce_components(
            "position",
            &json!(["a", 2, 3]),
            ValueKind::Vector3,
            3,
            true,
        )
        .unwrap_err();
        assert!(err.reason.contains("component 0"));
    }
}
