//! In-memory connections and adapters for tests without a live database.

use std::fmt;

use indexmap::IndexMap;
use sqlts_core::Dialect;
use sqlts_ir::QualifiedName;

use crate::{
    CatalogConnection, CatalogRow, ColumnFact, DialectAdapter, DomainFact, EnumFact, Error,
    Result, TableFact,
};

/// Error returned by a scripted failure.
#[derive(Debug, Clone)]
pub struct ScriptedFailure(pub String);

impl fmt::Display for ScriptedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ScriptedFailure {}

#[derive(Debug, Clone)]
struct Script {
    needle: String,
    params: Option<Vec<String>>,
    response: std::result::Result<Vec<CatalogRow>, String>,
}

/// A connection answering queries from canned responses.
///
/// The first script whose needle occurs in the SQL (and whose params match,
/// when given) answers. Unscripted queries return no rows.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConnection {
    scripts: Vec<Script>,
    queries: Vec<(String, Vec<String>)>,
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, needle: impl Into<String>, rows: Vec<CatalogRow>) -> Self {
        self.scripts.push(Script {
            needle: needle.into(),
            params: None,
            response: Ok(rows),
        });
        self
    }

    pub fn on_params(
        mut self,
        needle: impl Into<String>,
        params: &[&str],
        rows: Vec<CatalogRow>,
    ) -> Self {
        self.scripts.push(Script {
            needle: needle.into(),
            params: Some(params.iter().map(|p| p.to_string()).collect()),
            response: Ok(rows),
        });
        self
    }

    pub fn fail_on(mut self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.scripts.push(Script {
            needle: needle.into(),
            params: None,
            response: Err(message.into()),
        });
        self
    }

    /// Every query run so far with its params.
    pub fn queries(&self) -> &[(String, Vec<String>)] {
        &self.queries
    }
}

impl CatalogConnection for ScriptedConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        self.queries.push((sql.to_string(), params.clone()));

        let script = self.scripts.iter().find(|s| {
            sql.contains(&s.needle) && s.params.as_ref().is_none_or(|p| *p == params)
        });

        match script.map(|s| &s.response) {
            Some(Ok(rows)) => Ok(rows.clone()),
            Some(Err(message)) => Err(Error::catalog(
                "scripted query",
                ScriptedFailure(message.clone()),
            )),
            None => Ok(Vec::new()),
        }
    }
}

/// An adapter serving fixed facts, ignoring the connection.
#[derive(Debug, Clone)]
pub struct StaticAdapter {
    dialect: Dialect,
    default_schemas: Vec<String>,
    tables: Vec<TableFact>,
    columns: IndexMap<QualifiedName, Vec<ColumnFact>>,
    enums: Vec<EnumFact>,
    domains: Vec<DomainFact>,
}

impl StaticAdapter {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            default_schemas: Vec::new(),
            tables: Vec::new(),
            columns: IndexMap::new(),
            enums: Vec::new(),
            domains: Vec::new(),
        }
    }

    pub fn default_schemas<S: Into<String>>(mut self, schemas: impl IntoIterator<Item = S>) -> Self {
        self.default_schemas = schemas.into_iter().map(Into::into).collect();
        self
    }

    pub fn table(mut self, table: TableFact, columns: Vec<ColumnFact>) -> Self {
        self.columns.insert(table.qualified_name(), columns);
        self.tables.push(table);
        self
    }

    pub fn enum_type(mut self, fact: EnumFact) -> Self {
        self.enums.push(fact);
        self
    }

    pub fn domain(mut self, fact: DomainFact) -> Self {
        self.domains.push(fact);
        self
    }
}

impl DialectAdapter for StaticAdapter {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn default_schemas(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<String>> {
        Ok(self.default_schemas.clone())
    }

    fn list_tables(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<TableFact>> {
        Ok(self.tables.clone())
    }

    fn list_columns(
        &self,
        _conn: &mut dyn CatalogConnection,
        table: &TableFact,
    ) -> Result<Vec<ColumnFact>> {
        Ok(self
            .columns
            .get(&table.qualified_name())
            .cloned()
            .unwrap_or_default())
    }

    fn list_enums(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<EnumFact>> {
        Ok(self.enums.clone())
    }

    fn list_domains(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<DomainFact>> {
        Ok(self.domains.clone())
    }
}
