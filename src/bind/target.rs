//! The mutation-executor seam
//!
//! A [`ReflectTarget`] is the engine's borrowed view of one live
//! instance. The host implements it over whatever mechanism it exposes —
//! direct field writes, accessor calls, a document store — and the
//! engine only decides *what* to write and *where*. The borrow lasts for
//! a single binding pass and is never retained.

use thiserror::Error;

use crate::coerce::TypedValue;
use crate::registry::TypeName;

/// What the binder finds when it opens a member for path descent.
pub enum MemberSlot<'t> {
    /// The member holds a live object the walk can continue into.
    Object(&'t mut dyn ReflectTarget),
    /// A reference-typed member that is currently null.
    Unset,
    /// The member holds a plain value; the walk cannot continue.
    Value,
    /// The live instance has no such member, whatever the descriptor
    /// says (host drift).
    Missing,
}

/// A write the target would not perform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct MutationRefusal {
    /// Host-supplied explanation
    pub reason: String,
}

impl MutationRefusal {
    /// Create a refusal with a host-supplied reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A live instance being configured, borrowed for one binding pass.
///
/// Not `Send`: host objects are commonly pinned to an editor thread, and
/// the engine performs no suspension of its own.
pub trait ReflectTarget {
    /// The instance's canonical type name, used to look up its member
    /// descriptors.
    fn type_name(&self) -> TypeName;

    /// Open a member for path descent.
    fn member_slot(&mut self, member: &str) -> MemberSlot<'_>;

    /// Write a coerced value to a member.
    ///
    /// # Errors
    ///
    /// [`MutationRefusal`] when the host will not perform the write; the
    /// binder surfaces it as a binding failure for that field.
    fn set_member(&mut self, member: &str, value: TypedValue) -> Result<(), MutationRefusal>;
}
