use std::path::{Path, PathBuf};

use clap::Args;
use sqlts_config::{Config, ConfigFile, Singularize};
use sqlts_core::{DateParser, Dialect, NumericParser, RuntimeEnumStyle};

use super::UnwrapOrExit;

/// Connection and code generation flags shared by `generate` and `verify`.
///
/// Every flag overrides the matching `sqlts.toml` key.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to sqlts.toml (defaults to ./sqlts.toml when present)
    #[arg(short, long, env = "SQLTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Connection string (falls back to DATABASE_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Database dialect, inferred from the URL when omitted
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// Render column names in camelCase
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub camel_case: Option<bool>,

    /// Singularize table names with the built-in English rules
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub singularize: Option<bool>,

    /// Schemas emitted without a prefix (repeatable or comma separated)
    #[arg(long = "default-schema", value_delimiter = ',')]
    pub default_schemas: Vec<String>,

    /// Only emit tables matching this pattern
    #[arg(long)]
    pub include_pattern: Option<String>,

    /// Never emit tables matching this pattern
    #[arg(long)]
    pub exclude_pattern: Option<String>,

    /// Typing of numeric and 64-bit integer columns: number, string or number-or-string
    #[arg(long)]
    pub numeric_parser: Option<NumericParser>,

    /// Typing of date columns: string or timestamp
    #[arg(long)]
    pub date_parser: Option<DateParser>,

    /// Preserve domains as named types
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub domains: Option<bool>,

    /// Fold partitions into their root table
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub partitions: Option<bool>,

    /// Runtime enums: false, true, pascal-case or screaming-snake-case
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub runtime_enums: Option<RuntimeEnumStyle>,

    /// Emit `import type` for kysely imports
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub type_only_imports: Option<bool>,
}

impl RunArgs {
    /// Load the config file and layer the flags on top.
    ///
    /// Exits with a rendered diagnostic when the file is invalid.
    pub fn load_config(&self, dir: &Path) -> Config {
        let mut config = ConfigFile::discover(self.config.as_deref(), dir)
            .unwrap_or_exit()
            .map(ConfigFile::into_config)
            .unwrap_or_default();
        self.apply(&mut config);
        config
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.url = Some(url.clone());
        }
        if let Some(dialect) = self.dialect {
            config.dialect = Some(dialect);
        }
        if let Some(camel_case) = self.camel_case {
            config.camel_case = camel_case;
        }
        // Custom rules only come from the file; the flag can still turn them off.
        match self.singularize {
            Some(false) => config.singularize = Singularize::Disabled,
            Some(true) if !config.singularize.is_enabled() => {
                config.singularize = Singularize::Default
            }
            _ => {}
        }
        if !self.default_schemas.is_empty() {
            config.default_schemas = self.default_schemas.clone();
        }
        if let Some(pattern) = &self.include_pattern {
            config.include_pattern = Some(pattern.clone());
        }
        if let Some(pattern) = &self.exclude_pattern {
            config.exclude_pattern = Some(pattern.clone());
        }
        if let Some(parser) = self.numeric_parser {
            config.numeric_parser = parser;
        }
        if let Some(parser) = self.date_parser {
            config.date_parser = parser;
        }
        if let Some(domains) = self.domains {
            config.domains = domains;
        }
        if let Some(partitions) = self.partitions {
            config.partitions = partitions;
        }
        if let Some(style) = self.runtime_enums {
            config.runtime_enums = style;
        }
        if let Some(type_only) = self.type_only_imports {
            config.type_only_imports = type_only;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use sqlts_config::SingularRule;
    use tempfile::TempDir;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: RunArgs,
    }

    fn parse(argv: &[&str]) -> RunArgs {
        Harness::parse_from(std::iter::once("sqlts").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_flags_override_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sqlts.toml"),
            "camel_case = false\nurl = \"postgres://file\"\nnumeric_parser = \"number\"\n",
        )
        .unwrap();

        let config = parse(&["--camel-case", "--url", "postgres://flag"]).load_config(temp.path());

        assert!(config.camel_case);
        assert_eq!(config.url.as_deref(), Some("postgres://flag"));
        assert_eq!(config.numeric_parser, NumericParser::Number);
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = parse(&[]).load_config(temp.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bool_flags_accept_values() {
        let args = parse(&["--type-only-imports=false", "--runtime-enums=pascal-case"]);
        assert_eq!(args.type_only_imports, Some(false));
        assert_eq!(args.runtime_enums, Some(RuntimeEnumStyle::PascalCase));

        let args = parse(&["--runtime-enums"]);
        assert_eq!(args.runtime_enums, Some(RuntimeEnumStyle::ScreamingSnakeCase));
    }

    #[test]
    fn test_default_schemas_are_comma_separated() {
        let args = parse(&["--default-schema", "public,audit"]);
        assert_eq!(args.default_schemas, vec!["public", "audit"]);
    }

    #[test]
    fn test_singularize_flag_keeps_custom_rules() {
        let rules = Singularize::Rules(vec![SingularRule::new("i$", "us")]);
        let mut config = Config {
            singularize: rules.clone(),
            ..Config::default()
        };

        parse(&["--singularize"]).apply(&mut config);
        assert_eq!(config.singularize, rules);

        parse(&["--singularize=false"]).apply(&mut config);
        assert_eq!(config.singularize, Singularize::Disabled);
    }
}
