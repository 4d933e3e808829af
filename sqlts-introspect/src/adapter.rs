use sqlts_core::Dialect;

use crate::{
    CatalogConnection, ColumnFact, DomainFact, EnumFact, Result, TableFact,
    dialects::{MysqlAdapter, PostgresAdapter, SqliteAdapter},
};

/// Catalog queries for one database engine.
///
/// The introspector is written once against this trait. Adapters only
/// read catalog metadata and return facts in catalog declaration order.
pub trait DialectAdapter {
    fn dialect(&self) -> Dialect;

    /// Schemas emitted unprefixed when none are configured.
    fn default_schemas(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<String>>;

    fn list_tables(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<TableFact>>;

    fn list_columns(
        &self,
        conn: &mut dyn CatalogConnection,
        table: &TableFact,
    ) -> Result<Vec<ColumnFact>>;

    fn list_enums(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<EnumFact>>;

    /// Dialects without domains keep the default.
    fn list_domains(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<DomainFact>> {
        Ok(Vec::new())
    }
}

/// Select the adapter for a dialect.
pub fn adapter_for(dialect: Dialect) -> Box<dyn DialectAdapter> {
    match dialect {
        Dialect::Postgres => Box::new(PostgresAdapter),
        Dialect::Mysql => Box::new(MysqlAdapter),
        Dialect::Sqlite => Box::new(SqliteAdapter),
    }
}
