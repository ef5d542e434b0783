//! Schema type descriptors.

use serde::{Deserialize, Serialize};

/// A schema-provided type shape, consumed by the type-mapping resolver.
///
/// The variant set is closed: a schema type is a named primitive, an array,
/// a string-keyed map, or a reference to a user-defined model. Descriptors
/// are built by the schema layer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A named schema primitive (e.g. "string", "integer", "boolean").
    Primitive(String),
    /// An array of elements.
    Array(Box<TypeDescriptor>),
    /// A map with string keys.
    Map(Box<TypeDescriptor>),
    /// A reference to a user-defined model.
    Model(String),
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive(name.into())
    }

    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    pub fn map(value: TypeDescriptor) -> Self {
        TypeDescriptor::Map(Box::new(value))
    }

    pub fn model(name: impl Into<String>) -> Self {
        TypeDescriptor::Model(name.into())
    }

    /// The primitive name at the root of this descriptor, if any.
    pub fn primitive_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Primitive(name) => Some(name),
            _ => None,
        }
    }
}
