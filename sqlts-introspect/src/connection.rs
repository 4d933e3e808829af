//! The connection contract adapters query through.

use indexmap::IndexMap;

use crate::{Error, Result};

/// A read-only connection able to run catalog queries.
///
/// Implementations bind `params` as text and return every selected value
/// as text (`NULL` as `None`). Catalog SQL casts its output columns so
/// drivers never have to guess a Rust type.
pub trait CatalogConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>>;
}

/// One row of a catalog query, keyed by output column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRow {
    values: IndexMap<String, Option<String>>,
}

impl CatalogRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        self.values.insert(column.into(), value);
    }

    /// Builder-style [`insert`](Self::insert) for a non-null value.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, Some(value.into()));
        self
    }

    /// Builder-style [`insert`](Self::insert) for a `NULL` value.
    pub fn with_null(mut self, column: impl Into<String>) -> Self {
        self.insert(column, None);
        self
    }

    /// The value of `column`, `None` when absent or `NULL`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).and_then(|v| v.as_deref())
    }

    /// The non-null value of `column`.
    pub fn require(&self, query: &'static str, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| Error::MissingColumn {
            query,
            column: column.to_string(),
        })
    }

    /// Interpret `column` as a boolean. `NULL` and absent are false.
    pub fn flag(&self, column: &str) -> bool {
        matches!(
            self.get(column).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("t" | "true" | "1" | "y" | "yes")
        )
    }

    pub fn int(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(|v| v.trim().parse().ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for CatalogRow {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut row = CatalogRow::new();
        for (column, value) in iter {
            row.insert(column, value.map(Into::into));
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag() {
        let row = CatalogRow::new()
            .with("a", "t")
            .with("b", "YES")
            .with("c", "0")
            .with_null("d");
        assert!(row.flag("a"));
        assert!(row.flag("b"));
        assert!(!row.flag("c"));
        assert!(!row.flag("d"));
        assert!(!row.flag("missing"));
    }

    #[test]
    fn test_require() {
        let row = CatalogRow::new().with("name", "users").with_null("comment");
        assert_eq!(row.require("tables", "name").unwrap(), "users");

        let err = row.require("tables", "comment").unwrap_err();
        assert!(matches!(err, Error::MissingColumn { column, .. } if column == "comment"));
    }

    #[test]
    fn test_from_iter() {
        let row: CatalogRow = vec![("pk", Some("1")), ("notnull", None)]
            .into_iter()
            .collect();
        assert_eq!(row.int("pk"), Some(1));
        assert_eq!(row.get("notnull"), None);
    }
}
