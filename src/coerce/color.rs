//! Color coercion with named-color lookup and component clamping
//!
//! Colors arrive as an array or `{r, g, b, a}` mapping of floats in
//! `[0, 1]`, or as a recognized color name. Out-of-range components are
//! clamped rather than rejected; the named table is extensible per
//! coercer instance.

use std::collections::HashMap;
use std::sync::LazyLock;

use itertools::Itertools;
use serde_json::Value;
use tracing::trace;

use super::{CoercionError, TypedValue};
use crate::json_object::JsonObjectAccess;
use crate::value_kind::ValueKind;

/// Built-in named colors, keyed lowercase
static NAMED_COLORS: LazyLock<HashMap<&'static str, [f32; 4]>> = LazyLock::new(|| {
    HashMap::from([
        ("red", [1.0, 0.0, 0.0, 1.0]),
        ("green", [0.0, 1.0, 0.0, 1.0]),
        ("blue", [0.0, 0.0, 1.0, 1.0]),
        ("white", [1.0, 1.0, 1.0, 1.0]),
        ("black", [0.0, 0.0, 0.0, 1.0]),
        ("yellow", [1.0, 1.0, 0.0, 1.0]),
        ("cyan", [0.0, 1.0, 1.0, 1.0]),
        ("magenta", [1.0, 0.0, 1.0, 1.0]),
        ("gray", [0.5, 0.5, 0.5, 1.0]),
        ("grey", [0.5, 0.5, 0.5, 1.0]),
        ("clear", [0.0, 0.0, 0.0, 0.0]),
    ])
});

/// Color component names for the mapping form
const CHANNEL_NAMES: [&str; 4] = ["r", "g", "b", "a"];

/// Coerce `raw` into an RGBA color.
///
/// `extensions` are caller-registered names consulted before the built-in
/// table, so a host palette can shadow the defaults.
pub(crate) fn coerce_color(
    field: &str,
    raw: &Value,
    extensions: &HashMap<String, [f32; 4]>,
) -> Result<TypedValue, CoercionError> {
    match raw {
        Value::String(name) => {
            let key = name.to_ascii_lowercase();
            let rgba = extensions
                .get(&key)
                .or_else(|| NAMED_COLORS.get(key.as_str()))
                .ok_or_else(|| {
                    let known = extensions
                        .keys()
                        .map(String::as_str)
                        .chain(NAMED_COLORS.keys().copied())
                        .sorted_unstable()
                        .join(", ");
                    CoercionError::new(
                        field,
                        ValueKind::Color,
                        raw,
                        format!("unknown color name `{name}`; known names: {known}"),
                    )
                })?;
            trace!("named color `{name}` resolved for `{field}`");
            Ok(TypedValue::Color(*rgba))
        }
        Value::Array(items) => {
            if items.len() < 3 || items.len() > 4 {
                return Err(CoercionError::new(
                    field,
                    ValueKind::Color,
                    raw,
                    format!("expected 3 or 4 components, got {}", items.len()),
                ));
            }
            let mut rgba = [0.0, 0.0, 0.0, 1.0];
            for (index, item) in items.iter().enumerate() {
                let component = item.as_f64().ok_or_else(|| {
                    CoercionError::new(
                        field,
                        ValueKind::Color,
                        raw,
                        format!("component {index} is not a number"),
                    )
                })?;
                rgba[index] = clamp_channel(component);
            }
            Ok(TypedValue::Color(rgba))
        }
        Value::Object(_) => {
            let mut rgba = [0.0, 0.0, 0.0, 1.0];
            for (index, name) in CHANNEL_NAMES.iter().enumerate() {
                match raw.get_field(name) {
                    Some(component) => {
                        let numeric = component.as_f64().ok_or_else(|| {
                            CoercionError::new(
                                field,
                                ValueKind::Color,
                                raw,
                                format!("component `{name}` is not a number"),
                            )
                        })?;
                        rgba[index] = clamp_channel(numeric);
                    }
                    // Alpha defaults to opaque; the color channels do not.
                    None if *name == "a" => {}
                    None => {
                        return Err(CoercionError::new(
                            field,
                            ValueKind::Color,
                            raw,
                            format!("missing component `{name}`"),
                        ));
                    }
                }
            }
            Ok(TypedValue::Color(rgba))
        }
        _ => Err(CoercionError::new(
            field,
            ValueKind::Color,
            raw,
            "expected a color name, component array, or component mapping",
        )),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "color channels are stored as f32 by the value model"
)]
fn clamp_channel(component: f64) -> f32 {
    (component as f32).clamp(0.0, 1.0)
}
