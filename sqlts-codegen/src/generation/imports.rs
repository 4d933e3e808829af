//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order and symbols are sorted, so output is
/// deterministic regardless of the order helpers were requested in.
///
/// # Example
///
/// ```
/// use sqlts_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("kysely", "ColumnType");
/// imports.add("kysely", "ColumnType");
///
/// let (module, symbols) = imports.iter().next().unwrap();
/// assert_eq!(module, "kysely");
/// assert_eq!(symbols.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }
}
