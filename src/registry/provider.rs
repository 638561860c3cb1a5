//! The type-universe collaborator contract
//!
//! The host owns the set of types that exist in a session; the engine
//! only consumes it. [`StaticTypeUniverse`] is an explicit registration
//! table for hosts without runtime reflection and for tests; hosts with
//! their own introspection implement [`TypeUniverse`] directly.
//!
//! The universe is assumed immutable after the first resolution — the
//! resolver caches descriptors for the process lifetime and performs no
//! invalidation.

use std::collections::HashMap;

use super::descriptor::TypeDescriptor;
use super::type_name::TypeName;

/// Host collaborator enumerating all known types and their members.
///
/// Also the authority for layer names, since layer identity is host
/// session state owned by the same party as the type table.
pub trait TypeUniverse: Send + Sync {
    /// All canonical type names known to the host
    fn type_names(&self) -> Vec<TypeName>;

    /// Member table for one canonical name, `None` when unknown
    fn describe(&self, name: &TypeName) -> Option<TypeDescriptor>;

    /// Layer names in bit order; empty when the host has no layer concept
    fn layer_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Registration-table implementation of [`TypeUniverse`].
#[derive(Debug, Default)]
pub struct StaticTypeUniverse {
    types: HashMap<TypeName, TypeDescriptor>,
    order: Vec<TypeName>,
    layers: Vec<String>,
}

impl StaticTypeUniverse {
    /// Create an empty universe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type descriptor under its canonical name.
    ///
    /// Registering the same name twice replaces the earlier descriptor;
    /// registration must finish before the universe is handed to a
    /// resolver.
    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        let name = descriptor.name().clone();
        if self.types.insert(name.clone(), descriptor).is_none() {
            self.order.push(name);
        }
        self
    }

    /// Declare the host's layer names in bit order.
    #[must_use]
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.layers = layers.into_iter().map(Into::into).collect();
        self
    }
}

impl TypeUniverse for StaticTypeUniverse {
    fn type_names(&self) -> Vec<TypeName> {
        self.order.clone()
    }

    fn describe(&self, name: &TypeName) -> Option<TypeDescriptor> {
        self.types.get(name).cloned()
    }

    fn layer_names(&self) -> Vec<String> {
        self.layers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemberDescriptor;
    use crate::value_kind::ValueKind;

    #[test]
    fn registration_preserves_order_and_replaces() {
        let universe = StaticTypeUniverse::new()
            .with_type(TypeDescriptor::new("B", vec![]))
            .with_type(TypeDescriptor::new("A", vec![]))
            .with_type(TypeDescriptor::new(
                "B",
                vec![MemberDescriptor::field("x", ValueKind::Float)],
            ));

        assert_eq!(
            universe.type_names(),
            vec![TypeName::from("B"), TypeName::from("A")]
        );
        let described = universe.describe(&TypeName::from("B"));
        assert_eq!(described.map(|d| d.members().len()), Some(1));
    }
}
