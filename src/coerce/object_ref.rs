//! Object-reference coercion through the host resolver collaborator
//!
//! The engine never creates objects: a reference value is a string
//! identifier handed to the host-owned [`ObjectRefResolver`], and the
//! engine only checks that the returned handle exists and is assignable
//! to the declared reference type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CoercionError, TypedValue};
use crate::registry::TypeName;
use crate::value_kind::ValueKind;

/// A live object reference as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectHandle {
    identifier: String,
    type_name: TypeName,
}

impl ObjectHandle {
    /// Create a handle from the host's identifier and the object's type.
    pub fn new(identifier: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            identifier: identifier.into(),
            type_name: type_name.into(),
        }
    }

    /// The identifier the handle was resolved from
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The type of the referenced object
    #[must_use]
    pub const fn type_name(&self) -> &TypeName {
        &self.type_name
    }
}

/// Host collaborator that looks up existing live objects by identifier.
pub trait ObjectRefResolver: Send + Sync {
    /// Look up an existing object; `None` when nothing matches.
    ///
    /// Implementations must never create objects to satisfy a lookup.
    fn find(&self, identifier: &str) -> Option<ObjectHandle>;

    /// Whether `handle` may be assigned where `expected` is declared.
    ///
    /// The default requires an exact type match; hosts with subtyping
    /// override this.
    fn assignable(&self, handle: &ObjectHandle, expected: &TypeName) -> bool {
        handle.type_name() == expected
    }
}

/// Resolver for hosts without referenceable objects; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRefResolver;

impl ObjectRefResolver for NullRefResolver {
    fn find(&self, _identifier: &str) -> Option<ObjectHandle> {
        None
    }
}

/// Coerce `raw` into a validated object reference.
pub(crate) fn coerce_reference(
    refs: &dyn ObjectRefResolver,
    field: &str,
    raw: &Value,
    expected: Option<&TypeName>,
) -> Result<TypedValue, CoercionError> {
    let Value::String(identifier) = raw else {
        return Err(CoercionError::new(
            field,
            ValueKind::ObjectReference,
            raw,
            "expected an object identifier string",
        ));
    };

    let handle = refs.find(identifier).ok_or_else(|| {
        CoercionError::new(
            field,
            ValueKind::ObjectReference,
            raw,
            format!("no existing object matches identifier `{identifier}`"),
        )
    })?;

    if let Some(expected) = expected
        && !refs.assignable(&handle, expected)
    {
        return Err(CoercionError::new(
            field,
            ValueKind::ObjectReference,
            raw,
            format!(
                "object `{identifier}` has type `{}`, which is not assignable to `{expected}`",
                handle.type_name()
            ),
        ));
    }

    Ok(TypedValue::Reference(handle))
}
