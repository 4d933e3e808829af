//! Include/exclude filtering of schema-qualified table names.

use regex::Regex;
use sqlts_core::{is_regex_literal, regex_source};

use crate::{Error, Result};

/// Decides which tables are emitted.
///
/// Patterns are matched against `schema.table`. A glob without a dot
/// matches the table name in any schema. In globs `*` matches within one
/// name segment, `**` matches across segments and `?` matches a single
/// character. `/source/flags` literals are used as regular expressions.
///
/// Patterns are compiled once when the matcher is built.
#[derive(Debug, Clone)]
pub struct TableMatcher {
    include: Option<Regex>,
    exclude: Option<Regex>,
    default_schemas: Vec<String>,
}

impl TableMatcher {
    pub fn new(
        include: Option<&str>,
        exclude: Option<&str>,
        default_schemas: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            include: include.map(|p| compile("include", p)).transpose()?,
            exclude: exclude.map(|p| compile("exclude", p)).transpose()?,
            default_schemas,
        })
    }

    /// Accept everything in the given schemas.
    pub fn schemas(default_schemas: Vec<String>) -> Self {
        Self {
            include: None,
            exclude: None,
            default_schemas,
        }
    }

    pub fn matches(&self, schema: &str, table: &str) -> bool {
        let qualified = format!("{}.{}", schema, table);

        if let Some(exclude) = &self.exclude
            && exclude.is_match(&qualified)
        {
            return false;
        }

        if let Some(include) = &self.include {
            return include.is_match(&qualified);
        }

        self.default_schemas.is_empty() || self.default_schemas.iter().any(|s| s == schema)
    }
}

fn compile(kind: &'static str, pattern: &str) -> Result<Regex> {
    let source = if is_regex_literal(pattern) {
        regex_source(pattern)
    } else {
        glob_source(pattern)
    };

    Regex::new(&source).map_err(|source| Error::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        source,
    })
}

fn glob_source(glob: &str) -> String {
    let mut out = String::from("^");
    if !glob.contains('.') {
        out.push_str(r"(?:[^.]*\.)?");
    }

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(".*");
            }
            '*' => out.push_str("[^.]*"),
            '?' => out.push_str("[^.]"),
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push('$');
    out
}
