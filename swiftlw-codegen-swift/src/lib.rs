//! Swift naming and type mapping for the swiftlw client generator.
//!
//! This crate is the Swift instantiation of the language-agnostic
//! machinery in `swiftlw-codegen`: the Swift configuration tables
//! (reserved words, type mapping, symbol names), the [`SwiftTypeMapper`],
//! and the [`SwiftGenerator`] that walks a parsed schema graph and fills
//! in legalized names, resolved type declarations, enum entries, and
//! annotations for the external template renderer.
//!
//! ```ignore
//! use swiftlw_codegen_swift::SwiftGenerator;
//!
//! let generator = SwiftGenerator::new();
//! generator.process_models(&mut models);
//! // models now carry legalized names and annotations for the renderer
//! ```

mod generator;
mod naming;
mod options;
mod type_mapper;

pub use generator::SwiftGenerator;
pub use naming::{
    DEFAULT_INCLUDES, LANGUAGE_PRIMITIVES, NUMERIC_TYPES, RESERVED_WORDS, SYMBOL_NAMES,
    TYPE_MAPPING, swift_config,
};
pub use options::GeneratorOptions;
pub use swiftlw_codegen::{Diagnostic, LanguageConfig, Severity, TypeMapper};
pub use type_mapper::SwiftTypeMapper;
