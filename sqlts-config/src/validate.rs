//! Post-parse validation of `sqlts.toml`.

use miette::SourceSpan;
use sqlts_core::is_identifier;

use crate::{Config, Result, SourceContext};

const COLUMN_KEY: &str = "schema.table.column";
const TABLE_KEY: &str = "schema.table";

impl SourceContext {
    /// Validate a parsed config against its source.
    pub(crate) fn validate(&self, config: &Config) -> Result<()> {
        self.validate_pattern("include_pattern", config.include_pattern.as_deref())?;
        self.validate_pattern("exclude_pattern", config.exclude_pattern.as_deref())?;

        if config.default_schemas.iter().any(|s| s.trim().is_empty()) {
            return Err(self.validation_error(
                "default_schemas must not contain empty names",
                "default_schemas",
            ));
        }

        for rule in config.singularize.rules() {
            if rule.pattern.trim().is_empty() || rule.pattern == "//" {
                return Err(self.validation_error(
                    "singularization rule pattern must not be empty",
                    "singularize",
                ));
            }
        }

        for (key, value) in &config.overrides.columns {
            if !has_segments(key, 3) {
                return Err(self.override_key_error(key, "column", COLUMN_KEY));
            }
            if value.trim().is_empty() {
                return Err(self.validation_error(
                    format!("column override '{}' has an empty type", key),
                    key,
                ));
            }
        }

        for (key, value) in &config.overrides.tables {
            if !has_segments(key, 2) {
                return Err(self.override_key_error(key, "table", TABLE_KEY));
            }
            if !is_identifier(value) {
                return Err(self.validation_error(
                    format!("table override '{}' is not a valid type name", value),
                    value,
                ));
            }
        }

        Ok(())
    }

    fn validate_pattern(&self, key: &str, pattern: Option<&str>) -> Result<()> {
        match pattern {
            Some(p) if p.trim().is_empty() => {
                Err(self.validation_error(format!("{} must not be empty", key), key))
            }
            _ => Ok(()),
        }
    }
}

fn has_segments(key: &str, count: usize) -> bool {
    let segments: Vec<&str> = key.split('.').collect();
    segments.len() == count && segments.iter().all(|s| !s.is_empty())
}

/// Find the span of a key or value in the TOML source.
///
/// Prefers an assignment (`key =`, `key=`) or a quoted occurrence before
/// falling back to the first occurrence anywhere.
pub(crate) fn find_key_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }

    let patterns = [
        (format!("{} =", needle), 0),
        (format!("{}=", needle), 0),
        (format!("\"{}\"", needle), 1),
    ];

    for (pattern, offset) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + offset, needle.len())));
        }
    }

    src.find(needle)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}
