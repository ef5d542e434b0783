//! Model annotation pass.
//!
//! Runs once per generation pass, after every property already carries
//! both its raw `base_name` and its legalized `name`. Total over
//! well-formed model data; it has no failure modes.

use swiftlw_core::TypeDescriptor;

use crate::schema::Model;

/// Schema primitives whose target types are scalars. Optional scalars are
/// flagged because some interop modes (e.g. Objective-C bridging) cannot
/// represent them directly; the renderer decides what to emit.
const SCALAR_PRIMITIVES: &[&str] = &["integer", "long", "float", "double", "boolean"];

/// Annotate `models` in place.
///
/// A property whose legalized name diverges from its raw name is flagged
/// `is_escaped_name`, and its owning model `has_escaped_property`. A
/// non-required property with a scalar schema type is flagged
/// `is_optional_scalar`.
pub fn annotate_models(models: &mut [Model]) {
    for model in models {
        let mut has_escaped = false;
        for property in &mut model.properties {
            if property.name != property.base_name {
                property.annotation.is_escaped_name = true;
                has_escaped = true;
            }
            if !property.required && is_scalar(&property.descriptor) {
                property.annotation.is_optional_scalar = true;
            }
        }
        if has_escaped {
            model.annotation.has_escaped_property = true;
        }
    }
}

fn is_scalar(descriptor: &TypeDescriptor) -> bool {
    descriptor
        .primitive_name()
        .is_some_and(|name| SCALAR_PRIMITIVES.contains(&name))
}
