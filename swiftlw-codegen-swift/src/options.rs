//! Generator options.

use serde::Deserialize;

/// Renderer-facing options, read once at startup from the generator's
/// TOML configuration block. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Project name the renderer uses to prefix client types.
    pub project_name: String,
    /// Whether the renderer should emit Objective-C interop shims for
    /// properties flagged as optional scalars.
    pub objc_compatible: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            project_name: "Network".to_string(),
            objc_compatible: false,
        }
    }
}

impl GeneratorOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
