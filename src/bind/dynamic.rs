//! Member-table target implementation
//!
//! [`DynamicInstance`] stores members in an explicit table, giving hosts
//! without runtime reflection (and the test suite) a concrete
//! [`ReflectTarget`]. Reference members start unset and stay unset until
//! an object is attached; the engine never allocates one implicitly.

use super::target::{MemberSlot, MutationRefusal, ReflectTarget};
use crate::coerce::TypedValue;
use crate::registry::TypeName;

/// Stored state of one member slot.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberValue {
    /// A plain coerced value
    Typed(TypedValue),
    /// A live nested object
    Object(DynamicInstance),
    /// A reference member with nothing attached
    UnsetReference,
}

/// An in-memory instance backed by an explicit member table.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicInstance {
    type_name: TypeName,
    members: Vec<(String, MemberValue)>,
}

impl DynamicInstance {
    /// Create an instance of the given type with no members set.
    pub fn new(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            members: Vec::new(),
        }
    }

    /// Seed a member slot.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, value: MemberValue) -> Self {
        self.members.push((name.into(), value));
        self
    }

    /// Read a member slot back, mainly for assertions and host sync.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberValue> {
        self.members
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, value)| value)
    }
}

impl ReflectTarget for DynamicInstance {
    fn type_name(&self) -> TypeName {
        self.type_name.clone()
    }

    fn member_slot(&mut self, member: &str) -> MemberSlot<'_> {
        match self
            .members
            .iter_mut()
            .find(|(name, _)| name == member)
            .map(|(_, value)| value)
        {
            Some(MemberValue::Object(instance)) => MemberSlot::Object(instance),
            Some(MemberValue::UnsetReference) => MemberSlot::Unset,
            Some(MemberValue::Typed(_)) => MemberSlot::Value,
            None => MemberSlot::Missing,
        }
    }

    fn set_member(&mut self, member: &str, value: TypedValue) -> Result<(), MutationRefusal> {
        if let Some(slot) = self
            .members
            .iter_mut()
            .find(|(name, _)| name == member)
            .map(|(_, value)| value)
        {
            *slot = MemberValue::Typed(value);
        } else {
            self.members.push((member.to_string(), MemberValue::Typed(value)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_classify_by_stored_state() {
        let mut instance = DynamicInstance::new("Renderer")
            .with_member("material", MemberValue::UnsetReference)
            .with_member("enabled", MemberValue::Typed(TypedValue::Bool(true)))
            .with_member("child", MemberValue::Object(DynamicInstance::new("Material")));

        assert!(matches!(instance.member_slot("material"), MemberSlot::Unset));
        assert!(matches!(instance.member_slot("enabled"), MemberSlot::Value));
        assert!(matches!(instance.member_slot("child"), MemberSlot::Object(_)));
        assert!(matches!(instance.member_slot("ghost"), MemberSlot::Missing));
    }

    #[test]
    fn writes_replace_or_append() {
        let mut instance = DynamicInstance::new("Mover");
        assert!(instance.set_member("speed", TypedValue::Float(2.0)).is_ok());
        assert!(instance.set_member("speed", TypedValue::Float(3.0)).is_ok());
        assert_eq!(
            instance.member("speed"),
            Some(&MemberValue::Typed(TypedValue::Float(3.0)))
        );
    }
}
