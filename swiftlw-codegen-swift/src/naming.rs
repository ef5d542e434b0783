//! Swift-specific naming configuration.

use swiftlw_codegen::LanguageConfig;

/// Schema type name -> Swift type name.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "Array"),
    ("List", "Array"),
    ("map", "Dictionary"),
    ("date", "Date"),
    ("Date", "Date"),
    ("DateTime", "Date"),
    ("boolean", "Bool"),
    ("string", "String"),
    ("char", "Character"),
    ("short", "Int"),
    ("int", "Int"),
    ("long", "Int64"),
    ("integer", "Int"),
    ("Integer", "Int"),
    ("float", "Float"),
    ("number", "Double"),
    ("double", "Double"),
    ("object", "Any"),
    ("file", "URL"),
    ("binary", "Data"),
    ("ByteArray", "Data"),
    ("UUID", "UUID"),
];

/// Swift types that never trigger model-name resolution or imports.
pub const LANGUAGE_PRIMITIVES: &[&str] = &[
    "Int",
    "Int32",
    "Int64",
    "Float",
    "Double",
    "Bool",
    "String",
    "Character",
    "Any",
    "AnyObject",
    "Void",
];

/// Foundation types available without a generated model behind them.
pub const DEFAULT_INCLUDES: &[&str] =
    &["Array", "Dictionary", "Set", "Data", "Date", "URL", "UUID"];

/// Swift reserved words. The variable rule chain tests the lowercased
/// candidate against this set, so entries are stored lowercase; that also
/// catches identifiers that would collide with a built-in type name once
/// case is folded.
pub const RESERVED_WORDS: &[&str] = &[
    // Declarations and statements
    "associatedtype",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "open",
    "operator",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "try",
    "typealias",
    "var",
    "where",
    "while",
    // Expressions and literals
    "as",
    "false",
    "nil",
    "true",
    // Contextual keywords
    "associativity",
    "convenience",
    "didset",
    "dynamic",
    "final",
    "get",
    "indirect",
    "infix",
    "lazy",
    "left",
    "mutating",
    "none",
    "nonmutating",
    "optional",
    "override",
    "postfix",
    "precedence",
    "prefix",
    "required",
    "right",
    "set",
    "type",
    "unowned",
    "weak",
    "willset",
    // Lowercased built-in type names
    "any",
    "anyobject",
    "bool",
    "character",
    "data",
    "date",
    "double",
    "error",
    "float",
    "int",
    "int32",
    "int64",
    "string",
    "url",
    "uuid",
    "void",
];

/// Swift types that trigger the numeric-prefix naming rule.
pub const NUMERIC_TYPES: &[&str] = &["Int", "Int32", "Int64", "Float", "Double"];

/// Symbol tokens mapped to their word forms.
pub const SYMBOL_NAMES: &[(&str, &str)] = &[
    ("$", "Dollar"),
    ("#", "Hash"),
    ("@", "At"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("+", "Plus"),
    ("-", "Minus"),
    ("*", "Star"),
    ("/", "Slash"),
    ("=", "Equal"),
    ("!", "Exclamation"),
    ("<", "Less Than"),
    (">", "Greater Than"),
    ("~", "Tilde"),
    ("^", "Caret"),
    ("|", "Pipe"),
    (".", "Period"),
];

/// Build the Swift [`LanguageConfig`]. Called once at generator startup;
/// the result is read-only for the rest of the run.
pub fn swift_config() -> LanguageConfig {
    LanguageConfig::new(
        TYPE_MAPPING,
        LANGUAGE_PRIMITIVES,
        DEFAULT_INCLUDES,
        RESERVED_WORDS,
        NUMERIC_TYPES,
        SYMBOL_NAMES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftlw_codegen::naming::legalize_variable_name;

    #[test]
    fn test_swift_reserved_words() {
        let config = swift_config();
        assert!(config.is_reserved("class"));
        assert!(config.is_reserved("func"));
        assert!(config.is_reserved("int"));
        assert!(!config.is_reserved("Int"));
        assert!(!config.is_reserved("pet"));
    }

    #[test]
    fn test_swift_type_mapping() {
        let config = swift_config();
        assert_eq!(config.mapped_type("long"), Some("Int64"));
        assert_eq!(config.mapped_type("binary"), Some("Data"));
        assert_eq!(config.mapped_type("Pet"), None);
    }

    #[test]
    fn test_swift_variable_naming() {
        let config = swift_config();
        assert_eq!(legalize_variable_name(&config, "class", "String"), "_class");
        assert_eq!(legalize_variable_name(&config, "$", "String"), "dollar");
        assert_eq!(
            legalize_variable_name(&config, "pet_name", "String"),
            "petName"
        );
    }

    #[test]
    fn test_swift_numeric_types() {
        let config = swift_config();
        for datatype in NUMERIC_TYPES {
            assert!(config.is_numeric_type(datatype));
        }
        assert!(!config.is_numeric_type("Bool"));
        assert!(!config.is_numeric_type("String"));
    }
}
