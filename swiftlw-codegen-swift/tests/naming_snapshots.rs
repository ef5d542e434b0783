//! Snapshot tests for Swift naming and type mapping.
//!
//! These tests pin the full legalization surface in one place. Run
//! `cargo insta review` to update snapshots when making intentional
//! changes.

use swiftlw_codegen::TypeMapper;
use swiftlw_codegen::naming::legalize_variable_name;
use swiftlw_codegen_swift::{SwiftTypeMapper, swift_config};
use swiftlw_core::TypeDescriptor;

#[test]
fn test_variable_naming_table() {
    let config = swift_config();
    let cases: &[(&str, &str)] = &[
        ("name", "String"),
        ("PetName", "String"),
        ("pet_name", "String"),
        ("pet-id", "Int"),
        ("class", "String"),
        ("$", "String"),
        ("123list", "String"),
        ("1.5", "Double"),
        ("-1", "Int"),
        ("+1", "Int"),
        ("ACTIVE", "String"),
        ("created at", "Date"),
    ];

    let mut table = String::new();
    for (raw, datatype) in cases {
        let name = legalize_variable_name(&config, raw, datatype);
        table.push_str(&format!("{raw} ({datatype}) -> {name}\n"));
    }
    insta::assert_snapshot!("variable_naming", table);
}

#[test]
fn test_type_declaration_table() {
    let config = swift_config();
    let mapper = SwiftTypeMapper::new(&config);
    let cases: Vec<(&str, TypeDescriptor)> = vec![
        ("string", TypeDescriptor::primitive("string")),
        ("integer", TypeDescriptor::primitive("integer")),
        ("long", TypeDescriptor::primitive("long")),
        ("boolean", TypeDescriptor::primitive("boolean")),
        ("binary", TypeDescriptor::primitive("binary")),
        ("object", TypeDescriptor::primitive("object")),
        ("pet", TypeDescriptor::primitive("pet")),
        (
            "[string]",
            TypeDescriptor::array(TypeDescriptor::primitive("string")),
        ),
        (
            "[[pet]]",
            TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::model("pet"))),
        ),
        (
            "{string: integer}",
            TypeDescriptor::map(TypeDescriptor::primitive("integer")),
        ),
        (
            "{string: [pet]}",
            TypeDescriptor::map(TypeDescriptor::array(TypeDescriptor::model("pet"))),
        ),
    ];

    let mut table = String::new();
    for (label, descriptor) in &cases {
        let declaration = mapper.type_declaration(descriptor);
        table.push_str(&format!("{label} -> {declaration}\n"));
    }
    insta::assert_snapshot!("type_declarations", table);
}
