//! TypeScript spelling of names and literals.

use std::collections::HashSet;

use sqlts_core::{RuntimeEnumStyle, is_identifier, to_pascal_case, to_screaming_snake_case};

/// A double-quoted TypeScript string literal.
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// An object or interface key, quoted unless it is a plain identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Member names for a runtime enum, one per label and in label order.
///
/// Labels converting to the same name get a numeric suffix, and names that
/// cannot stand as identifiers are prefixed with `_` or, failing that,
/// quoted.
pub fn enum_member_keys(labels: &[String], style: RuntimeEnumStyle) -> Vec<String> {
    let mut used = HashSet::new();

    labels
        .iter()
        .map(|label| {
            let base = match style {
                RuntimeEnumStyle::ScreamingSnakeCase => to_screaming_snake_case(label),
                _ => to_pascal_case(label),
            };
            let base = if is_identifier(&base) {
                base
            } else if !base.is_empty() && is_identifier(&format!("_{}", base)) {
                format!("_{}", base)
            } else {
                string_literal(label)
            };

            let mut key = base.clone();
            let mut n = 2;
            while !used.insert(key.clone()) {
                key = suffixed(&base, n);
                n += 1;
            }
            key
        })
        .collect()
}

fn suffixed(base: &str, n: usize) -> String {
    match base.strip_suffix('"') {
        Some(quoted) => format!("{}_{}\"", quoted, n),
        None => format!("{}_{}", base, n),
    }
}
