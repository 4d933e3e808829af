//! Options that shape generated declarations.

use sqlts_config::{Config, Overrides, Singularize};
use sqlts_core::RuntimeEnumStyle;

/// Naming and rendering options for one generation run.
///
/// `default_schemas` is the effective list: the configured one, or the
/// adapter's default when none was configured.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub default_schemas: Vec<String>,
    pub camel_case: bool,
    pub singularize: Singularize,
    pub overrides: Overrides,
    pub runtime_enums: RuntimeEnumStyle,
    pub type_only_imports: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), Vec::new())
    }
}

impl GenerateOptions {
    pub fn from_config(config: &Config, default_schemas: Vec<String>) -> Self {
        Self {
            default_schemas,
            camel_case: config.camel_case,
            singularize: config.singularize.clone(),
            overrides: config.overrides.clone(),
            runtime_enums: config.runtime_enums,
            type_only_imports: config.type_only_imports,
        }
    }

    pub fn default_schemas(mut self, schemas: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.default_schemas = schemas.into_iter().map(Into::into).collect();
        self
    }

    pub fn camel_case(mut self, enabled: bool) -> Self {
        self.camel_case = enabled;
        self
    }

    pub fn singularize(mut self, setting: Singularize) -> Self {
        self.singularize = setting;
        self
    }

    pub fn runtime_enums(mut self, style: RuntimeEnumStyle) -> Self {
        self.runtime_enums = style;
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn type_only_imports(mut self, enabled: bool) -> Self {
        self.type_only_imports = enabled;
        self
    }
}
