//! Enum case, default value, and type naming.

use crate::language::LanguageConfig;
use crate::naming::{legalize_model_name, legalize_variable_name};

/// Derive a case name for a raw enum literal.
///
/// The enum's resolved underlying datatype participates in the numeric
/// prefix rule, exactly as for plain variables.
pub fn case_name(config: &LanguageConfig, raw_value: &str, datatype: &str) -> String {
    legalize_variable_name(config, raw_value, datatype)
}

/// Composite default-value token (e.g. "Status_ACTIVE"). Consumed by the
/// renderer as-is; this is not a legalized identifier.
pub fn default_value(datatype: &str, raw_value: &str) -> String {
    format!("{datatype}_{raw_value}")
}

/// Disambiguated type name for an inline property enum.
///
/// The candidate is the property's legalized model name. An enum type must
/// not collide with a reserved word and must stay distinguishable from its
/// own holder variable; either collision appends "Enum". A digit-leading
/// result gets an underscore prefix.
pub fn enum_type_name(config: &LanguageConfig, property_base_name: &str, datatype: &str) -> String {
    let mut name = legalize_model_name(property_base_name);
    let variable = legalize_variable_name(config, property_base_name, datatype);
    if config.is_reserved(&name) || name == variable {
        name.push_str("Enum");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LanguageConfig {
        LanguageConfig::new(
            &[("string", "String"), ("integer", "Int")],
            &["String", "Int"],
            &[],
            &["class", "return", "Type"],
            &["Int"],
            &[("$", "Dollar")],
        )
    }

    #[test]
    fn test_case_name_uses_variable_rules() {
        let config = test_config();
        assert_eq!(case_name(&config, "ACTIVE", "String"), "active");
        assert_eq!(case_name(&config, "$", "String"), "dollar");
        assert_eq!(case_name(&config, "123", "Int"), "_123");
        assert_eq!(case_name(&config, "-1", "Int"), "numberminus1");
    }

    #[test]
    fn test_default_value_is_composite_token() {
        assert_eq!(default_value("Status", "ACTIVE"), "Status_ACTIVE");
        assert_eq!(default_value("String", "SOLD OUT"), "String_SOLD OUT");
    }

    #[test]
    fn test_enum_type_name_plain() {
        let config = test_config();
        assert_eq!(enum_type_name(&config, "status", "String"), "Status");
    }

    #[test]
    fn test_enum_type_name_reserved_appends_enum() {
        let config = test_config();
        // "Type" is reserved as a type name, so the candidate is suffixed.
        assert_eq!(enum_type_name(&config, "type", "String"), "TypeEnum");
    }

    #[test]
    fn test_enum_type_name_digit_leading_is_prefixed() {
        let config = test_config();
        // camelize keeps the leading digit, so the guard kicks in.
        assert_eq!(enum_type_name(&config, "1type", "String"), "_1type");
    }
}
