//! Swift type mapper.

use swiftlw_codegen::naming::legalize_model_name;
use swiftlw_codegen::{LanguageConfig, TypeMapper};
use swiftlw_core::TypeDescriptor;

/// Maps schema type descriptors to Swift type declarations.
///
/// Borrows the generator's [`LanguageConfig`]; resolution is a pure
/// function of the descriptor and the config tables.
pub struct SwiftTypeMapper<'a> {
    config: &'a LanguageConfig,
}

impl<'a> SwiftTypeMapper<'a> {
    pub fn new(config: &'a LanguageConfig) -> Self {
        Self { config }
    }

    /// Target type for a schema primitive name.
    ///
    /// Mapped built-ins are trusted verbatim; any other mapped name, and
    /// any name missing from the table, resolves through the model-name
    /// rule.
    fn primitive_type(&self, name: &str) -> String {
        match self.config.mapped_type(name) {
            Some(mapped)
                if self.config.is_language_primitive(mapped)
                    || self.config.is_default_include(mapped) =>
            {
                mapped.to_string()
            }
            Some(mapped) => legalize_model_name(mapped),
            None => legalize_model_name(name),
        }
    }
}

impl TypeMapper for SwiftTypeMapper<'_> {
    fn language(&self) -> &'static str {
        "swift"
    }

    fn type_declaration(&self, descriptor: &TypeDescriptor) -> String {
        match descriptor {
            TypeDescriptor::Array(element) => format!("[{}]", self.type_declaration(element)),
            TypeDescriptor::Map(value) => format!("[String: {}]", self.type_declaration(value)),
            TypeDescriptor::Primitive(name) => self.primitive_type(name),
            TypeDescriptor::Model(name) => legalize_model_name(name),
        }
    }
}
