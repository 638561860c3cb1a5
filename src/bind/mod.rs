//! Property binding onto live target instances
//!
//! The binder walks a dotted [`PropertyPath`] across a borrowed
//! [`ReflectTarget`], descending only through object-valued members, and
//! assigns a coerced value to the terminal member through the target's
//! setter. Each bind call is independent; a failure reports exactly
//! which assignment did not happen and why, and nothing is rolled back.

mod binder;
mod dynamic;
mod path;
mod target;

pub use binder::{BindValue, BindingError, PropertyBinder};
pub use dynamic::{DynamicInstance, MemberValue};
pub use path::PropertyPath;
pub use target::{MemberSlot, MutationRefusal, ReflectTarget};
