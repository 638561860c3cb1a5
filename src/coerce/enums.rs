//! Enum and layer-mask coercion
//!
//! Enum values arrive as a symbolic name (matched case-insensitively
//! against the declared members) or as the backing integral value. Layer
//! masks arrive as a single layer name, an array of names, or a raw
//! integer bitmask; names are matched against the host's bit-ordered
//! layer table.

use serde_json::Value;

use super::{CoercionError, TypedValue};
use crate::registry::EnumMember;
use crate::value_kind::ValueKind;

/// Coerce `raw` into one of the declared enum members.
pub(crate) fn coerce_enum(
    field: &str,
    raw: &Value,
    members: &[EnumMember],
) -> Result<TypedValue, CoercionError> {
    if members.is_empty() {
        return Err(CoercionError::new(
            field,
            ValueKind::Enum,
            raw,
            "enum kind declared without members",
        ));
    }

    let matched = match raw {
        Value::String(name) => members.iter().find(|m| m.name.eq_ignore_ascii_case(name)),
        Value::Number(number) => number
            .as_i64()
            .and_then(|value| members.iter().find(|m| m.value == value)),
        _ => None,
    };

    matched.map(|member| TypedValue::Enum(member.clone())).ok_or_else(|| {
        CoercionError::new(
            field,
            ValueKind::Enum,
            raw,
            format!("valid members: {}", member_names(members)),
        )
    })
}

fn member_names(members: &[EnumMember]) -> String {
    members
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Coerce `raw` into a layer bitmask against the host's layer table.
pub(crate) fn coerce_layer_mask(
    field: &str,
    raw: &Value,
    layers: &[String],
) -> Result<TypedValue, CoercionError> {
    match raw {
        Value::Number(number) => {
            let mask = number.as_u64().ok_or_else(|| {
                CoercionError::new(
                    field,
                    ValueKind::LayerMask,
                    raw,
                    "bitmask must be a non-negative integer",
                )
            })?;
            let mask = u32::try_from(mask).map_err(|_| {
                CoercionError::new(field, ValueKind::LayerMask, raw, "bitmask exceeds 32 bits")
            })?;
            if !layers.is_empty() && layers.len() < 32 && u64::from(mask) >= 1_u64 << layers.len() {
                return Err(CoercionError::new(
                    field,
                    ValueKind::LayerMask,
                    raw,
                    format!("bitmask has bits outside the {} declared layers", layers.len()),
                ));
            }
            Ok(TypedValue::LayerMask(mask))
        }
        Value::String(name) => Ok(TypedValue::LayerMask(layer_bit(field, raw, name, layers)?)),
        Value::Array(names) => {
            let mut mask = 0_u32;
            for entry in names {
                let name = entry.as_str().ok_or_else(|| {
                    CoercionError::new(
                        field,
                        ValueKind::LayerMask,
                        raw,
                        "layer arrays must contain only names",
                    )
                })?;
                mask |= layer_bit(field, raw, name, layers)?;
            }
            Ok(TypedValue::LayerMask(mask))
        }
        _ => Err(CoercionError::new(
            field,
            ValueKind::LayerMask,
            raw,
            "expected a layer name, array of names, or integer bitmask",
        )),
    }
}

fn layer_bit(
    field: &str,
    raw: &Value,
    name: &str,
    layers: &[String],
) -> Result<u32, CoercionError> {
    layers
        .iter()
        .position(|layer| layer.eq_ignore_ascii_case(name))
        .map(|index| 1_u32 << index)
        .ok_or_else(|| {
            CoercionError::new(
                field,
                ValueKind::LayerMask,
                raw,
                format!("unknown layer `{name}`; valid layers: {}", layers.join(", ")),
            )
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use serde_json::json;

    use super::*;

    fn shadow_members() -> Vec<EnumMember> {
        vec![
            EnumMember::new("None", 0),
            EnumMember::new("Hard", 1),
            EnumMember::new("Soft", 2),
        ]
    }

    fn layers() -> Vec<String> {
        ["Default", "TransparentFX", "Water", "UI"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn enum_matches_name_case_insensitively() {
        let value = coerce_enum("shadows", &json!("soft"), &shadow_members()).unwrap();
        assert_eq!(value, TypedValue::Enum(EnumMember::new("Soft", 2)));
    }

    #[test]
    fn enum_matches_backing_value() {
        let value = coerce_enum("shadows", &json!(1), &shadow_members()).unwrap();
        assert_eq!(value, TypedValue::Enum(EnumMember::new("Hard", 1)));
    }

    #[test]
    fn enum_failure_names_valid_members() {
        let err = coerce_enum("shadows", &json!("Fuzzy"), &shadow_members()).unwrap_err();
        assert!(err.reason.contains("None, Hard, Soft"));

        let err = coerce_enum("shadows", &json!(9), &shadow_members()).unwrap_err();
        assert!(err.reason.contains("valid members"));
    }

    #[test]
    fn layer_mask_accepts_all_three_forms() {
        let table = layers();
        assert_eq!(
            coerce_layer_mask("mask", &json!("Water"), &table).unwrap(),
            TypedValue::LayerMask(0b100)
        );
        assert_eq!(
            coerce_layer_mask("mask", &json!(["Default", "UI"]), &table).unwrap(),
            TypedValue::LayerMask(0b1001)
        );
        assert_eq!(
            coerce_layer_mask("mask", &json!(5), &table).unwrap(),
            TypedValue::LayerMask(5)
        );
    }

    #[test]
    fn layer_mask_unknown_name_lists_valid_layers() {
        let err = coerce_layer_mask("mask", &json!("Ghost"), &layers()).unwrap_err();
        assert!(err.reason.contains("unknown layer `Ghost`"));
        assert!(err.reason.contains("TransparentFX"));
    }

    #[test]
    fn layer_mask_rejects_out_of_table_bits() {
        let err = coerce_layer_mask("mask", &json!(1 << 6), &layers()).unwrap_err();
        assert!(err.reason.contains("outside the 4 declared layers"));
    }
}
