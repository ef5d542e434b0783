//! Language configuration injected into resolvers and legalizers.

use std::collections::HashSet;

use indexmap::IndexMap;

use swiftlw_core::TypeDescriptor;

/// Immutable language configuration.
///
/// Owns every externally supplied table the naming and type-mapping stages
/// consult: the schema-type → target-type mapping, the built-in type sets
/// that bypass model-name resolution, the reserved words, the numeric
/// target types, and the symbol → word table. Built once at generator
/// startup from static slices and passed by reference into every call;
/// nothing here is ever written after construction.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    type_mapping: IndexMap<String, String>,
    language_primitives: HashSet<String>,
    default_includes: HashSet<String>,
    reserved_words: HashSet<String>,
    numeric_types: HashSet<String>,
    symbol_names: IndexMap<String, String>,
}

impl LanguageConfig {
    pub fn new(
        type_mapping: &[(&str, &str)],
        language_primitives: &[&str],
        default_includes: &[&str],
        reserved_words: &[&str],
        numeric_types: &[&str],
        symbol_names: &[(&str, &str)],
    ) -> Self {
        Self {
            type_mapping: to_map(type_mapping),
            language_primitives: to_set(language_primitives),
            default_includes: to_set(default_includes),
            reserved_words: to_set(reserved_words),
            numeric_types: to_set(numeric_types),
            symbol_names: to_map(symbol_names),
        }
    }

    /// Target type the schema type `name` maps to, if any.
    pub fn mapped_type(&self, name: &str) -> Option<&str> {
        self.type_mapping.get(name).map(String::as_str)
    }

    /// Built-in target type that never resolves to a model name.
    pub fn is_language_primitive(&self, name: &str) -> bool {
        self.language_primitives.contains(name)
    }

    /// Target type available without an import; also bypasses model-name
    /// resolution.
    pub fn is_default_include(&self, name: &str) -> bool {
        self.default_includes.contains(name)
    }

    /// Reserved-word membership. Case-sensitive: callers lowercase the
    /// candidate where the rule chain specifies it.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(name)
    }

    /// Target types that trigger the numeric-prefix naming rule.
    pub fn is_numeric_type(&self, datatype: &str) -> bool {
        self.numeric_types.contains(datatype)
    }

    /// Word form for a whole-string symbol token (e.g. `$` -> "Dollar").
    pub fn symbol_name(&self, raw: &str) -> Option<&str> {
        self.symbol_names.get(raw).map(String::as_str)
    }
}

fn to_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Trait for mapping schema type descriptors to target type declarations.
///
/// Implement this trait for each target language. Implementations must
/// recurse over the full descriptor tree, not just one level.
pub trait TypeMapper {
    /// The target language name.
    fn language(&self) -> &'static str;

    /// Render a complete type declaration for `descriptor`.
    fn type_declaration(&self, descriptor: &TypeDescriptor) -> String;
}
