//! Value-kind tags for configuration values
//!
//! A value-kind identifies how a raw configuration value must be
//! interpreted before it can be assigned to a member. The set is closed:
//! each kind has exactly one coercion rule, and new kinds require an
//! explicit case in the coercer dispatch.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Declared kind of a member or schema entry value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum ValueKind {
    /// Boolean flag
    Bool,
    /// Whole number
    Integer,
    /// Floating-point number
    Float,
    /// Plain text
    String,
    /// Two-component vector
    Vector2,
    /// Three-component vector
    Vector3,
    /// Four-component vector
    Vector4,
    /// RGBA color with components in `[0, 1]`
    Color,
    /// Rotation quaternion in already-normalized `x, y, z, w` form
    Quaternion,
    /// Member of a declared enumeration
    Enum,
    /// Bitmask over host-defined layer names
    LayerMask,
    /// Reference to an existing live object
    ObjectReference,
    /// Structured value with its own member table
    NestedObject,
}

impl ValueKind {
    /// Whether a declared numeric range applies to this kind.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Whether a dotted path may descend through a member of this kind.
    ///
    /// Only object-valued members can be entered; vectors, colors and the
    /// other value kinds are assigned whole.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::ObjectReference | Self::NestedObject)
    }

    /// Component count for the fixed-arity kinds, `None` otherwise.
    #[must_use]
    pub const fn component_count(self) -> Option<usize> {
        match self {
            Self::Vector2 => Some(2),
            Self::Vector3 => Some(3),
            Self::Vector4 | Self::Quaternion | Self::Color => Some(4),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        let kind: ValueKind = "LayerMask".parse().unwrap();
        assert_eq!(kind, ValueKind::LayerMask);
        assert_eq!(ValueKind::ObjectReference.to_string(), "ObjectReference");
    }

    #[test]
    fn numeric_kinds() {
        assert!(ValueKind::Integer.is_numeric());
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::Vector3.is_numeric());
    }

    #[test]
    fn only_object_kinds_descend() {
        assert!(ValueKind::ObjectReference.is_object());
        assert!(ValueKind::NestedObject.is_object());
        assert!(!ValueKind::Color.is_object());
    }
}
