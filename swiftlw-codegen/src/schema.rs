//! Schema info types carried through a generation run.
//!
//! The schema layer hands these in with raw names and descriptors filled;
//! the generator walk fills the legalized names, resolved types, and enum
//! entries, and the annotation pass fills the flags. Raw `base_name`
//! fields are never mutated, so the renderer can always recover the
//! original schema name.

use serde::{Deserialize, Serialize};

use swiftlw_core::TypeDescriptor;

/// Flags attached to a property by the annotation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyAnnotation {
    /// The legalized name diverges from the raw schema name.
    pub is_escaped_name: bool,
    /// Non-required scalar that some interop modes cannot represent.
    pub is_optional_scalar: bool,
}

/// Flags aggregated over a model's properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAnnotation {
    /// At least one property has an escaped name.
    pub has_escaped_property: bool,
}

/// One raw enum literal with its derived names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueEntry {
    /// The literal as it appears in the schema.
    pub raw_value: String,
    /// Resolved target type underlying the enum.
    pub datatype: String,
    /// Legalized case name.
    pub case_name: String,
    /// Composite default-value token (`datatype_rawValue`).
    pub default_value: String,
}

/// A model property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Raw schema name; never mutated.
    pub base_name: String,
    /// Legalized name; filled by the generator walk.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    /// Schema type shape.
    pub descriptor: TypeDescriptor,
    /// Resolved target type declaration; filled by the generator walk.
    #[serde(default)]
    pub data_type: String,
    /// Raw enum literals when the schema declares an inline enum.
    #[serde(default)]
    pub enum_values: Vec<String>,
    /// Derived enum entries; filled by the generator walk.
    #[serde(default)]
    pub enum_entries: Vec<EnumValueEntry>,
    /// Disambiguated enum type name; filled by the generator walk.
    #[serde(default)]
    pub datatype_with_enum: Option<String>,
    #[serde(default)]
    pub annotation: PropertyAnnotation,
}

impl Property {
    pub fn new(base_name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            base_name: base_name.into(),
            name: String::new(),
            required: false,
            descriptor,
            data_type: String::new(),
            enum_values: Vec::new(),
            enum_entries: Vec::new(),
            datatype_with_enum: None,
            annotation: PropertyAnnotation::default(),
        }
    }

    /// Whether the schema declares this property as an inline enum.
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

/// A schema model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Raw schema name; never mutated.
    pub base_name: String,
    /// Legalized model name; filled by the generator walk.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub annotation: ModelAnnotation,
}

impl Model {
    pub fn new(base_name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            base_name: base_name.into(),
            name: String::new(),
            properties,
            annotation: ModelAnnotation::default(),
        }
    }
}

/// An operation parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Raw schema name; never mutated.
    pub base_name: String,
    /// Legalized name; filled by the generator walk.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub descriptor: TypeDescriptor,
    /// Resolved target type declaration; filled by the generator walk.
    #[serde(default)]
    pub data_type: String,
}

/// A callable API operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Raw operation id; never mutated.
    pub base_name: String,
    /// Legalized method name; filled by the generator walk.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Schema shape of the response body, if any.
    #[serde(default)]
    pub return_descriptor: Option<TypeDescriptor>,
    /// Resolved return type; filled by the generator walk.
    #[serde(default)]
    pub return_type: Option<String>,
}

impl Operation {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            name: String::new(),
            params: Vec::new(),
            return_descriptor: None,
            return_type: None,
        }
    }
}
