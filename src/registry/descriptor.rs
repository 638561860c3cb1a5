//! Runtime type and member descriptors
//!
//! A [`TypeDescriptor`] is the engine's view of one host type: its
//! canonical name plus the ordered table of assignable members. Member
//! entries carry a [`KindSpec`] — the declared value-kind together with
//! whatever side data that kind needs at coercion time (enum members,
//! the referenced type of an object reference, the member table owner of
//! a nested object). Descriptors are immutable once constructed and are
//! shared behind `Arc` by the resolver cache.

use serde::{Deserialize, Serialize};

use super::type_name::TypeName;
use crate::value_kind::ValueKind;

/// One named member of a declared enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Symbolic name as declared by the host
    pub name: String,
    /// Integral value backing the member
    pub value: i64,
}

impl EnumMember {
    /// Create an enum member from its symbolic name and backing value.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A declared value-kind plus the metadata coercion into it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSpec {
    /// The value-kind tag
    pub kind: ValueKind,
    /// Declared members, populated for [`ValueKind::Enum`]
    pub enum_members: Vec<EnumMember>,
    /// Referenced type, populated for [`ValueKind::ObjectReference`]
    pub reference_type: Option<TypeName>,
    /// Member-table owner, populated for [`ValueKind::NestedObject`]
    pub nested_type: Option<TypeName>,
}

impl KindSpec {
    /// Spec for a kind that needs no side data.
    #[must_use]
    pub const fn of(kind: ValueKind) -> Self {
        Self {
            kind,
            enum_members: Vec::new(),
            reference_type: None,
            nested_type: None,
        }
    }

    /// Spec for an enum kind with its declared members.
    #[must_use]
    pub fn enumeration(members: impl IntoIterator<Item = EnumMember>) -> Self {
        Self {
            kind: ValueKind::Enum,
            enum_members: members.into_iter().collect(),
            reference_type: None,
            nested_type: None,
        }
    }

    /// Spec for an object reference to the given type.
    #[must_use]
    pub fn reference(ty: impl Into<TypeName>) -> Self {
        Self {
            kind: ValueKind::ObjectReference,
            enum_members: Vec::new(),
            reference_type: Some(ty.into()),
            nested_type: None,
        }
    }

    /// Spec for a nested object whose members belong to the given type.
    #[must_use]
    pub fn nested(ty: impl Into<TypeName>) -> Self {
        Self {
            kind: ValueKind::NestedObject,
            enum_members: Vec::new(),
            reference_type: None,
            nested_type: Some(ty.into()),
        }
    }
}

impl From<ValueKind> for KindSpec {
    fn from(kind: ValueKind) -> Self {
        Self::of(kind)
    }
}

/// How a member is reached on the live instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberBacking {
    /// Plain field
    Field,
    /// Accessor property (getter/setter pair)
    Accessor,
}

/// One assignable member of a host type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name as addressed in property paths
    pub name: String,
    /// Declared kind and its coercion metadata
    pub spec: KindSpec,
    /// Field or accessor backing
    pub backing: MemberBacking,
    /// Whether the member accepts writes
    pub mutable: bool,
}

impl MemberDescriptor {
    /// A mutable field-backed member.
    pub fn field(name: impl Into<String>, spec: impl Into<KindSpec>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
            backing: MemberBacking::Field,
            mutable: true,
        }
    }

    /// A mutable accessor-backed member.
    pub fn accessor(name: impl Into<String>, spec: impl Into<KindSpec>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
            backing: MemberBacking::Accessor,
            mutable: true,
        }
    }

    /// Mark the member read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.mutable = false;
        self
    }
}

/// Resolved runtime type handle: canonical name plus member table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: TypeName,
    members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    /// Build a descriptor from a canonical name and its ordered members.
    pub fn new(name: impl Into<TypeName>, members: Vec<MemberDescriptor>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Canonical name of the described type
    #[must_use]
    pub const fn name(&self) -> &TypeName {
        &self.name
    }

    /// Ordered member table
    #[must_use]
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Look up a member by exact name
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Member names in declaration order
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }
}
