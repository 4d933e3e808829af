//! The populated schema model for one run.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::{EnumCollection, QualifiedName, TableMetadata};

/// A table identity was added twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("table '{table}' is already present in the schema model")]
pub struct DuplicateTable {
    pub table: QualifiedName,
}

/// Tables in declaration order plus the enums they reference.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseMetadata {
    tables: Vec<TableMetadata>,
    enums: EnumCollection,
    #[serde(skip)]
    identities: HashSet<QualifiedName>,
}

impl DatabaseMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model over an already populated enum collection.
    pub fn with_enums(enums: EnumCollection) -> Self {
        Self {
            enums,
            ..Self::default()
        }
    }

    /// Append a table, rejecting duplicate (schema, name) identities.
    pub fn add_table(&mut self, table: TableMetadata) -> Result<(), DuplicateTable> {
        let identity = table.qualified_name();
        if !self.identities.insert(identity.clone()) {
            return Err(DuplicateTable { table: identity });
        }
        self.tables.push(table);
        Ok(())
    }

    pub fn tables(&self) -> &[TableMetadata] {
        &self.tables
    }

    pub fn table(&self, schema: &str, name: &str) -> Option<&TableMetadata> {
        self.tables
            .iter()
            .find(|t| t.schema == schema && t.name == name)
    }

    pub fn enums(&self) -> &EnumCollection {
        &self.enums
    }

    pub fn enums_mut(&mut self) -> &mut EnumCollection {
        &mut self.enums
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
