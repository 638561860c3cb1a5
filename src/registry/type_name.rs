//! A newtype wrapper for canonical type names
//!
//! Canonical names are the host's own identifiers for its types (for
//! example `Rigidbody` or `render::MeshRenderer`). The wrapper gives the
//! bare strings type safety when used as map keys and carries the small
//! set of name operations the engine needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A canonical type name as reported by the host's type universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Get the underlying string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive lookup keys
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Last path segment of a namespaced name
    ///
    /// `render::MeshRenderer` yields `MeshRenderer`; names without a
    /// namespace are returned whole.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for TypeName {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<TypeName> for String {
    fn from(type_name: TypeName) -> Self {
        type_name.0
    }
}

impl From<&TypeName> for String {
    fn from(type_name: &TypeName) -> Self {
        type_name.0.clone()
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TypeName> for Value {
    fn from(type_name: TypeName) -> Self {
        Self::String(type_name.0)
    }
}

impl From<&TypeName> for Value {
    fn from(type_name: &TypeName) -> Self {
        Self::String(type_name.0.clone())
    }
}
