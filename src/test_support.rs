//! Shared fixtures for the test suite
//!
//! One small editor-shaped type universe, a table-backed object
//! resolver, and pre-wired component instances, so individual test
//! modules stay focused on the behavior under test.

use std::collections::HashMap;
use std::sync::Arc;

use crate::bind::{DynamicInstance, MemberValue, PropertyBinder};
use crate::coerce::{Coercer, ObjectHandle, ObjectRefResolver, TypedValue};
use crate::engine::BindingEngine;
use crate::registry::{
    EnumMember, KindSpec, MemberDescriptor, StaticTypeUniverse, TypeDescriptor, TypeResolver,
    TypeUniverse,
};
use crate::value_kind::ValueKind;

/// Table-backed object resolver for tests.
#[derive(Debug, Default)]
pub struct TableRefResolver {
    objects: HashMap<String, ObjectHandle>,
}

impl TableRefResolver {
    /// Register a live object under its identifier.
    #[must_use]
    pub fn with_object(mut self, handle: ObjectHandle) -> Self {
        self.objects.insert(handle.identifier().to_string(), handle);
        self
    }
}

impl ObjectRefResolver for TableRefResolver {
    fn find(&self, identifier: &str) -> Option<ObjectHandle> {
        self.objects.get(identifier).cloned()
    }
}

/// A small editor-shaped universe: components, one enum, layers.
pub fn sample_universe() -> Arc<StaticTypeUniverse> {
    let universe = StaticTypeUniverse::new()
        .with_type(TypeDescriptor::new(
            "Rigidbody",
            vec![
                MemberDescriptor::field("mass", ValueKind::Float),
                MemberDescriptor::field("drag", ValueKind::Float),
                MemberDescriptor::field("is_kinematic", ValueKind::Bool),
            ],
        ))
        .with_type(TypeDescriptor::new(
            "Transform",
            vec![
                MemberDescriptor::field("position", ValueKind::Vector3),
                MemberDescriptor::field("rotation", ValueKind::Quaternion),
                MemberDescriptor::field("scale", ValueKind::Vector3),
            ],
        ))
        .with_type(TypeDescriptor::new(
            "Material",
            vec![
                MemberDescriptor::field("color", ValueKind::Color),
                MemberDescriptor::field("metallic", ValueKind::Float),
                MemberDescriptor::field("emission", ValueKind::Color),
            ],
        ))
        .with_type(TypeDescriptor::new(
            "Renderer",
            vec![
                MemberDescriptor::accessor("material", KindSpec::reference("Material")),
                MemberDescriptor::field("enabled", ValueKind::Bool),
                MemberDescriptor::field("culling_mask", ValueKind::LayerMask),
            ],
        ))
        .with_type(TypeDescriptor::new(
            "Light",
            vec![
                MemberDescriptor::field("intensity", ValueKind::Float),
                MemberDescriptor::field(
                    "shadows",
                    KindSpec::enumeration([
                        EnumMember::new("None", 0),
                        EnumMember::new("Hard", 1),
                        EnumMember::new("Soft", 2),
                    ]),
                ),
                MemberDescriptor::field("color", ValueKind::Color),
            ],
        ))
        .with_type(TypeDescriptor::new(
            "BoxCollider",
            vec![
                MemberDescriptor::field("size", ValueKind::Vector3),
                MemberDescriptor::field("is_trigger", ValueKind::Bool),
            ],
        ))
        .with_type(TypeDescriptor::new(
            "Camera",
            vec![
                MemberDescriptor::field("field_of_view", ValueKind::Float),
                MemberDescriptor::accessor("aspect", ValueKind::Float).read_only(),
            ],
        ))
        .with_layers(["Default", "TransparentFX", "IgnoreRaycast", "Water", "UI"]);
    Arc::new(universe)
}

/// Object table with one material and one texture.
pub fn sample_refs() -> Arc<TableRefResolver> {
    Arc::new(
        TableRefResolver::default()
            .with_object(ObjectHandle::new("mat:standard", "Material"))
            .with_object(ObjectHandle::new("tex:noise", "Texture")),
    )
}

/// Resolver over the sample universe, no aliases.
pub fn sample_resolver() -> Arc<TypeResolver> {
    Arc::new(TypeResolver::new(sample_universe()))
}

/// Coercer wired to the sample universe, refs, and layer table.
pub fn sample_coercer() -> Coercer {
    Coercer::new(sample_resolver(), sample_refs())
        .with_layers(sample_universe().layer_names())
}

/// Binder sharing the sample resolver and coercer.
pub fn sample_binder() -> PropertyBinder {
    PropertyBinder::new(sample_resolver(), Arc::new(sample_coercer()))
}

/// Fully wired engine over the sample collaborators.
pub fn sample_engine() -> BindingEngine {
    BindingEngine::new(sample_universe(), sample_refs())
}

/// A material instance with a white color and zero metallic.
pub fn material_instance() -> DynamicInstance {
    DynamicInstance::new("Material")
        .with_member("color", MemberValue::Typed(TypedValue::Color([1.0; 4])))
        .with_member("metallic", MemberValue::Typed(TypedValue::Float(0.0)))
}
