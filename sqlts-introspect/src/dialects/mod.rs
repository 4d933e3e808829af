//! Catalog queries per database engine.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MysqlAdapter;
pub use postgres::PostgresAdapter;
pub use sqlite::SqliteAdapter;

use crate::{CatalogRow, EnumFact, Result};

/// Group `(schema, name, label)` rows into enums.
///
/// Rows must arrive grouped by enum with labels in declaration order.
fn group_enum_rows(query: &'static str, rows: &[CatalogRow]) -> Result<Vec<EnumFact>> {
    let mut enums: Vec<EnumFact> = Vec::new();

    for row in rows {
        let schema = row.require(query, "enum_schema")?;
        let name = row.require(query, "enum_name")?;
        let label = row.require(query, "label")?;

        match enums.last_mut() {
            Some(last) if last.schema == schema && last.name == name => {
                last.labels.push(label.to_string());
            }
            _ => enums.push(EnumFact::new(schema, name, [label])),
        }
    }

    Ok(enums)
}
