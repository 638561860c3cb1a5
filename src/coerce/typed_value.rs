//! Strongly-typed results of coercion
//!
//! A [`TypedValue`] is what the coercer hands to the binder: the raw
//! payload value re-expressed in the member's declared kind. Values are
//! plain data and can be re-serialized to JSON for diagnostics or for
//! hosts that store members as documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::object_ref::ObjectHandle;
use crate::registry::EnumMember;
use crate::value_kind::ValueKind;

/// A coerced configuration value, tagged by its declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    /// Boolean flag
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Plain text
    Text(String),
    /// Two-component vector
    Vector2([f32; 2]),
    /// Three-component vector
    Vector3([f32; 3]),
    /// Four-component vector
    Vector4([f32; 4]),
    /// RGBA color, components clamped to `[0, 1]`
    Color([f32; 4]),
    /// Rotation quaternion in `x, y, z, w` order
    Quaternion([f32; 4]),
    /// Resolved member of a declared enumeration
    Enum(EnumMember),
    /// Bitmask over host layers
    LayerMask(u32),
    /// Resolved reference to an existing live object
    Reference(ObjectHandle),
    /// Structurally coerced nested object, entries in payload order
    Nested(Vec<(String, TypedValue)>),
}

impl TypedValue {
    /// The value-kind this value was coerced into.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::String,
            Self::Vector2(_) => ValueKind::Vector2,
            Self::Vector3(_) => ValueKind::Vector3,
            Self::Vector4(_) => ValueKind::Vector4,
            Self::Color(_) => ValueKind::Color,
            Self::Quaternion(_) => ValueKind::Quaternion,
            Self::Enum(_) => ValueKind::Enum,
            Self::LayerMask(_) => ValueKind::LayerMask,
            Self::Reference(_) => ValueKind::ObjectReference,
            Self::Nested(_) => ValueKind::NestedObject,
        }
    }

    /// Numeric view used for range checks; `None` for non-numeric values.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(
                clippy::cast_precision_loss,
                reason = "range bounds are declared as f64"
            )]
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Re-serialize to JSON for diagnostics and document-backed targets.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(v) => json!(v),
            Self::Integer(v) => json!(v),
            Self::Float(v) => json!(v),
            Self::Text(v) => json!(v),
            Self::Vector2(c) => json!(c),
            Self::Vector3(c) => json!(c),
            Self::Vector4(c) | Self::Color(c) | Self::Quaternion(c) => json!(c),
            Self::Enum(member) => json!(member.name),
            Self::LayerMask(mask) => json!(mask),
            Self::Reference(handle) => json!(handle.identifier()),
            Self::Nested(entries) => {
                let map: Map<String, Value> = entries
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect();
                Value::Object(map)
            }
        }
    }
}
