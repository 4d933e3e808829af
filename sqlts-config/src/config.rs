use std::{path::PathBuf, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use sqlts_core::{DateParser, Dialect, NumericParser, RuntimeEnumStyle};

use crate::{Error, Result, SourceContext};

/// Environment variable consulted when no `url` is configured.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Root of `sqlts.toml`.
///
/// Every key is optional. The CLI layers its flags on top of a loaded
/// config before the run starts; nothing reads settings from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database engine. Inferred from `url` when absent.
    pub dialect: Option<Dialect>,

    /// Connection string.
    pub url: Option<String>,

    /// Render column names in camelCase.
    pub camel_case: bool,

    /// Table name singularization.
    pub singularize: Singularize,

    /// Schemas whose tables are emitted without a schema prefix.
    pub default_schemas: Vec<String>,

    /// Only tables matching this pattern are emitted.
    pub include_pattern: Option<String>,

    /// Tables matching this pattern are never emitted.
    pub exclude_pattern: Option<String>,

    pub numeric_parser: NumericParser,

    pub date_parser: DateParser,

    /// Preserve domains as named types instead of resolving them.
    pub domains: bool,

    /// Fold partition children into their root table.
    pub partitions: bool,

    pub runtime_enums: RuntimeEnumStyle,

    pub overrides: Overrides,

    /// Emit `import type` instead of `import`.
    pub type_only_imports: bool,

    /// Output path. Declarations go to stdout when unset.
    pub out_file: Option<PathBuf>,

    /// Compare against `out_file` instead of writing it.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: None,
            url: None,
            camel_case: false,
            singularize: Singularize::default(),
            default_schemas: Vec::new(),
            include_pattern: None,
            exclude_pattern: None,
            numeric_parser: NumericParser::default(),
            date_parser: DateParser::default(),
            domains: false,
            partitions: false,
            runtime_enums: RuntimeEnumStyle::default(),
            overrides: Overrides::default(),
            type_only_imports: true,
            out_file: None,
            verify: false,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "sqlts.toml")
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        ctx.validate(&config)?;
        Ok(config)
    }

    /// The configured connection string, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String> {
        self.url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// The configured dialect, or the one implied by the connection string.
    pub fn resolved_dialect(&self) -> Option<Dialect> {
        self.dialect
            .or_else(|| self.database_url().as_deref().and_then(Dialect::from_url))
    }
}

/// Singularization setting: off, the built-in English rules, or user rules
/// evaluated ahead of the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Singularize {
    #[default]
    Disabled,
    Default,
    Rules(Vec<SingularRule>),
}

impl Singularize {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Singularize::Disabled)
    }

    /// User-supplied rules, empty unless custom rules are configured.
    pub fn rules(&self) -> &[SingularRule] {
        match self {
            Singularize::Rules(rules) => rules,
            _ => &[],
        }
    }
}

impl<'de> Deserialize<'de> for Singularize {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Rules(Vec<SingularRule>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Singularize::Disabled,
            Raw::Flag(true) => Singularize::Default,
            Raw::Rules(rules) => Singularize::Rules(rules),
        })
    }
}

/// A `pattern` -> `replacement` singularization rule.
///
/// `pattern` is a regular expression, optionally written as a `/.../i`
/// literal. `replacement` may reference capture groups as `$1`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingularRule {
    pub pattern: String,
    pub replacement: String,
}

impl SingularRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Exact-match name and type overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    /// `"schema.table.column"` -> type text emitted verbatim.
    pub columns: IndexMap<String, String>,

    /// `"schema.table"` -> interface name.
    pub tables: IndexMap<String, String>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.tables.is_empty()
    }

    pub fn column_type(&self, schema: &str, table: &str, column: &str) -> Option<&str> {
        self.columns
            .get(&format!("{}.{}.{}", schema, table, column))
            .map(String::as_str)
    }

    pub fn table_name(&self, schema: &str, table: &str) -> Option<&str> {
        self.tables
            .get(&format!("{}.{}", schema, table))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.type_only_imports);
        assert_eq!(config.numeric_parser, NumericParser::String);
        assert_eq!(config.date_parser, DateParser::Timestamp);
        assert!(!config.singularize.is_enabled());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
dialect = "postgres"
url = "postgres://localhost/app"
camel_case = true
default_schemas = ["public", "audit"]
include_pattern = "public.*"
exclude_pattern = "*.knex_*"
numeric_parser = "number-or-string"
date_parser = "string"
domains = true
partitions = true
runtime_enums = "pascal-case"
type_only_imports = false
out_file = "src/db.d.ts"
verify = true

[overrides.columns]
"public.users.settings" = "UserSettings"

[overrides.tables]
"public.people" = "Person"
"#
        .parse()
        .unwrap();

        assert_eq!(config.dialect, Some(Dialect::Postgres));
        assert!(config.camel_case);
        assert_eq!(config.default_schemas, vec!["public", "audit"]);
        assert_eq!(config.numeric_parser, NumericParser::NumberOrString);
        assert_eq!(config.date_parser, DateParser::String);
        assert_eq!(config.runtime_enums, RuntimeEnumStyle::PascalCase);
        assert!(!config.type_only_imports);
        assert_eq!(config.out_file, Some(PathBuf::from("src/db.d.ts")));
        assert_eq!(
            config.overrides.column_type("public", "users", "settings"),
            Some("UserSettings")
        );
        assert_eq!(config.overrides.table_name("public", "people"), Some("Person"));
        assert_eq!(config.overrides.table_name("public", "users"), None);
    }

    #[test]
    fn test_singularize_flag() {
        let config: Config = "singularize = true".parse().unwrap();
        assert_eq!(config.singularize, Singularize::Default);
        assert!(config.singularize.rules().is_empty());

        let config: Config = "singularize = false".parse().unwrap();
        assert_eq!(config.singularize, Singularize::Disabled);
    }

    #[test]
    fn test_singularize_rules_keep_order() {
        let config: Config = r#"
singularize = [
  { pattern = "/(bacch)(?:us|i)$/i", replacement = "$1us" },
  { pattern = "s$", replacement = "" },
]
"#
        .parse()
        .unwrap();

        let rules = config.singularize.rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].replacement, "$1us");
        assert_eq!(rules[1].pattern, "s$");
    }

    #[test]
    fn test_runtime_enums_bool() {
        let config: Config = "runtime_enums = true".parse().unwrap();
        assert_eq!(config.runtime_enums, RuntimeEnumStyle::ScreamingSnakeCase);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "camelCase = true".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_resolved_dialect_from_url() {
        let config = Config {
            url: Some("mysql://root@localhost/app".into()),
            ..Config::default()
        };
        assert_eq!(config.resolved_dialect(), Some(Dialect::Mysql));

        let config = Config {
            dialect: Some(Dialect::Sqlite),
            url: Some("mysql://root@localhost/app".into()),
            ..Config::default()
        };
        assert_eq!(config.resolved_dialect(), Some(Dialect::Sqlite));
    }
}
