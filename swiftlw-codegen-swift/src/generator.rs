//! The Swift generator walk over models and operations.

use swiftlw_codegen::annotate::annotate_models;
use swiftlw_codegen::enums;
use swiftlw_codegen::naming::{legalize_method_name, legalize_model_name, legalize_variable_name};
use swiftlw_codegen::schema::{EnumValueEntry, Model, Operation, Property};
use swiftlw_codegen::{Diagnostic, LanguageConfig, Result, TypeMapper};
use swiftlw_core::initial_caps;

use crate::naming::swift_config;
use crate::options::GeneratorOptions;
use crate::type_mapper::SwiftTypeMapper;

/// Drives naming and type mapping over a parsed schema graph.
///
/// Owns the immutable Swift [`LanguageConfig`] and collects non-fatal
/// diagnostics. The processed graph — legalized names, resolved type
/// declarations, enum entries, annotations — is handed to the external
/// template renderer; this crate never emits source text itself.
pub struct SwiftGenerator {
    config: LanguageConfig,
    options: GeneratorOptions,
    diagnostics: Vec<Diagnostic>,
}

impl SwiftGenerator {
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            config: swift_config(),
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn mapper(&self) -> SwiftTypeMapper<'_> {
        SwiftTypeMapper::new(&self.config)
    }

    /// Name for an API grouping tag.
    pub fn api_name(&self, tag: &str) -> String {
        if tag.is_empty() {
            "DefaultAPI".to_string()
        } else {
            initial_caps(tag)
        }
    }

    /// Legalize names and resolve types across `models`, then run the
    /// annotation pass. Total: model processing never fails.
    pub fn process_models(&self, models: &mut [Model]) {
        for model in models.iter_mut() {
            model.name = legalize_model_name(&model.base_name);
            for property in &mut model.properties {
                property.data_type = self.mapper().type_declaration(&property.descriptor);
                property.name =
                    legalize_variable_name(&self.config, &property.base_name, &property.data_type);
                if property.is_enum() {
                    self.process_enum(property);
                }
            }
        }
        annotate_models(models);
    }

    fn process_enum(&self, property: &mut Property) {
        let datatype = property.data_type.clone();
        property.datatype_with_enum = Some(enums::enum_type_name(
            &self.config,
            &property.base_name,
            &datatype,
        ));
        property.enum_entries = property
            .enum_values
            .iter()
            .map(|raw| EnumValueEntry {
                raw_value: raw.clone(),
                datatype: datatype.clone(),
                case_name: enums::case_name(&self.config, raw, &datatype),
                default_value: enums::default_value(&datatype, raw),
            })
            .collect();
    }

    /// Legalize operation and parameter names and resolve their types.
    ///
    /// Fails on an operation id that legalizes to nothing; reserved-word
    /// renames are collected as warnings and processing continues.
    pub fn process_operations(&mut self, operations: &mut [Operation]) -> Result<()> {
        for operation in operations.iter_mut() {
            operation.name =
                legalize_method_name(&self.config, &operation.base_name, &mut self.diagnostics)?;
            if let Some(descriptor) = &operation.return_descriptor {
                operation.return_type = Some(self.mapper().type_declaration(descriptor));
            }
            for param in &mut operation.params {
                param.data_type = self.mapper().type_declaration(&param.descriptor);
                param.name =
                    legalize_variable_name(&self.config, &param.base_name, &param.data_type);
            }
        }
        Ok(())
    }
}

impl Default for SwiftGenerator {
    fn default() -> Self {
        Self::new()
    }
}
