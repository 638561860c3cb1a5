//! Reflective configuration validation and property binding
//!
//! This crate is the configuration engine shared by editor-automation
//! tools: given an untyped, partially-specified JSON configuration and a
//! target whose shape is only known at runtime, it resolves the target
//! type from a string (with fuzzy recovery for misspelled names),
//! validates the configuration against a declared schema, merges declared
//! defaults, and assigns each resulting value onto the correct member of
//! the live target, descending through dotted paths such as
//! `material.color` and converting domain value types (vectors, colors,
//! enums, layer masks, object references) along the way.
//!
//! The engine never talks to an editor directly. Three collaborator seams
//! point outward:
//!
//! - [`registry::TypeUniverse`] enumerates the host's types and members
//! - [`coerce::ObjectRefResolver`] looks up existing live objects
//! - [`bind::ReflectTarget`] performs the actual member reads and writes
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use propbind::ValueKind;
//! use propbind::bind::DynamicInstance;
//! use propbind::coerce::NullRefResolver;
//! use propbind::engine::BindingEngine;
//! use propbind::registry::{KindSpec, MemberDescriptor, StaticTypeUniverse, TypeDescriptor};
//! use propbind::schema::{FieldSchema, SchemaEntry};
//!
//! let universe = StaticTypeUniverse::new().with_type(TypeDescriptor::new(
//!     "Mover",
//!     vec![
//!         MemberDescriptor::field("speed", KindSpec::of(ValueKind::Float)),
//!         MemberDescriptor::field("looping", KindSpec::of(ValueKind::Bool)),
//!     ],
//! ));
//!
//! let schema = FieldSchema::new("mover")
//!     .entry(SchemaEntry::required("speed", ValueKind::Float).with_range(0.0, 100.0))
//!     .entry(SchemaEntry::optional("looping", ValueKind::Bool, false));
//!
//! let engine = BindingEngine::new(Arc::new(universe), Arc::new(NullRefResolver));
//! let mut target = DynamicInstance::new("Mover");
//! let payload = serde_json::json!({ "speed": 4.5 });
//!
//! let report = engine
//!     .apply(&mut target, &schema, payload.as_object().unwrap())
//!     .unwrap();
//! assert!(report.is_complete());
//! assert_eq!(report.bound(), ["speed", "looping"]);
//! ```
//!
//! Validation always precedes binding, validation collects every problem
//! in one pass rather than stopping at the first, and every failure is a
//! structured value naming exactly which field was not set and why.

pub mod bind;
pub mod coerce;
pub mod engine;
pub mod error;
mod json_object;
pub mod registry;
pub mod schema;
mod value_kind;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};
pub use json_object::{IntoStrings, JsonObjectAccess};
pub use value_kind::ValueKind;
