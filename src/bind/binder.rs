//! The property-path walk and terminal assignment
//!
//! Intermediate segments must be object-valued members holding a live
//! object: an unset reference is a fatal error (nested auto-creation is
//! never performed), and a value-typed member cannot be entered. The
//! terminal member's declared kind drives coercion, and the write goes
//! through the target's own setter.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};

use super::path::PropertyPath;
use super::target::{MemberSlot, ReflectTarget};
use crate::coerce::{Coercer, CoercionError, TypedValue};
use crate::registry::{TypeDescriptor, TypeName, TypeResolutionError, TypeResolver, rank_candidates};
use crate::value_kind::ValueKind;

/// Number of approximate matches carried by an unknown-member error
const SUGGESTION_LIMIT: usize = 3;

/// Failure to assign one value to one property path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BindingError {
    /// The path string was empty or contained an empty segment.
    #[error("`{path}` is not a valid property path")]
    InvalidPath {
        /// The offending path string
        path: String,
    },

    /// A segment named no member of the object it was applied to.
    #[error("no member `{segment}` on `{type_name}`; closest members: {}", .suggestions.join(", "))]
    UnknownMember {
        /// Type of the object the segment was looked up on
        type_name: TypeName,
        /// The unmatched segment
        segment: String,
        /// Member names ranked by ascending edit distance
        suggestions: Vec<String>,
    },

    /// An intermediate reference member is currently null.
    #[error("cannot descend into `{segment}` on `{type_name}`: the member is unset")]
    NullIntermediate {
        /// Type of the object owning the unset member
        type_name: TypeName,
        /// The unset member
        segment: String,
    },

    /// An intermediate member holds a plain value, not an object.
    #[error("cannot descend into `{segment}` on `{type_name}`: {kind} members hold values, not objects")]
    ValueIntermediate {
        /// Type of the object owning the member
        type_name: TypeName,
        /// The value-typed member
        segment: String,
        /// Its declared kind
        kind: ValueKind,
    },

    /// The terminal member does not accept writes.
    #[error("member `{segment}` on `{type_name}` is read-only")]
    ReadOnly {
        /// Type of the object owning the member
        type_name: TypeName,
        /// The read-only member
        segment: String,
    },

    /// The target itself refused the write.
    #[error("target rejected write to `{segment}`: {reason}")]
    MutationRefused {
        /// The member the write was aimed at
        segment: String,
        /// Host-supplied explanation
        reason: String,
    },

    /// The value could not become the terminal member's declared kind.
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// The type of an object along the path could not be resolved.
    #[error(transparent)]
    TypeResolution(#[from] TypeResolutionError),
}

/// A value on its way to a member: still raw, or already coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// Untyped payload value; coerced against the terminal member
    Raw(Value),
    /// Already coerced, assigned directly when the kinds agree
    Typed(TypedValue),
}

impl From<Value> for BindValue {
    fn from(raw: Value) -> Self {
        Self::Raw(raw)
    }
}

impl From<TypedValue> for BindValue {
    fn from(typed: TypedValue) -> Self {
        Self::Typed(typed)
    }
}

/// Walks property paths on live targets and performs the assignment.
pub struct PropertyBinder {
    resolver: Arc<TypeResolver>,
    coercer: Arc<Coercer>,
}

impl PropertyBinder {
    /// Create a binder over the shared resolver and coercer.
    #[must_use]
    pub const fn new(resolver: Arc<TypeResolver>, coercer: Arc<Coercer>) -> Self {
        Self { resolver, coercer }
    }

    /// Assign `value` to the member addressed by `path` on `target`.
    ///
    /// Each call is independent: a failure leaves earlier binds in place
    /// and reports exactly which assignment did not happen.
    ///
    /// # Errors
    ///
    /// [`BindingError`] for an unknown segment (with ranked suggestions),
    /// an unset or value-typed intermediate, a read-only terminal, a
    /// host-refused write, or a coercion failure on the terminal value.
    pub fn bind(
        &self,
        target: &mut dyn ReflectTarget,
        path: &PropertyPath,
        value: impl Into<BindValue>,
    ) -> Result<(), BindingError> {
        let mut current: &mut dyn ReflectTarget = target;

        for segment in path.intermediates() {
            let descriptor = self.resolver.resolve(current.type_name().as_str())?;
            let member = descriptor
                .member(segment)
                .ok_or_else(|| unknown_member(&descriptor, segment))?;
            if !member.spec.kind.is_object() {
                return Err(BindingError::ValueIntermediate {
                    type_name: descriptor.name().clone(),
                    segment: segment.clone(),
                    kind: member.spec.kind,
                });
            }
            trace!("descending into `{segment}` on `{}`", descriptor.name());
            current = match current.member_slot(segment) {
                MemberSlot::Object(next) => next,
                MemberSlot::Unset => {
                    return Err(BindingError::NullIntermediate {
                        type_name: descriptor.name().clone(),
                        segment: segment.clone(),
                    });
                }
                MemberSlot::Value => {
                    return Err(BindingError::ValueIntermediate {
                        type_name: descriptor.name().clone(),
                        segment: segment.clone(),
                        kind: member.spec.kind,
                    });
                }
                MemberSlot::Missing => {
                    return Err(unknown_member(&descriptor, segment));
                }
            };
        }

        let descriptor = self.resolver.resolve(current.type_name().as_str())?;
        let terminal = path.terminal();
        let member = descriptor
            .member(terminal)
            .ok_or_else(|| unknown_member(&descriptor, terminal))?;
        if !member.mutable {
            return Err(BindingError::ReadOnly {
                type_name: descriptor.name().clone(),
                segment: terminal.to_string(),
            });
        }

        let typed = match value.into() {
            BindValue::Typed(typed) if typed.kind() == member.spec.kind => typed,
            BindValue::Typed(typed) => {
                self.coercer.coerce(terminal, &typed.to_json(), &member.spec)?
            }
            BindValue::Raw(raw) => self.coercer.coerce(terminal, &raw, &member.spec)?,
        };

        current
            .set_member(terminal, typed)
            .map_err(|refusal| BindingError::MutationRefused {
                segment: terminal.to_string(),
                reason: refusal.reason,
            })?;
        debug!("bound `{path}` on `{}`", descriptor.name());
        Ok(())
    }
}

fn unknown_member(descriptor: &TypeDescriptor, segment: &str) -> BindingError {
    BindingError::UnknownMember {
        type_name: descriptor.name().clone(),
        segment: segment.to_string(),
        suggestions: rank_candidates(segment, descriptor.member_names(), SUGGESTION_LIMIT),
    }
}
