use sqlts_core::Dialect;

use crate::{
    CatalogConnection, CatalogRow, ColumnFact, DialectAdapter, EnumFact, RawType, Result,
    TableFact,
};

const SCHEMA: &str = "main";

const TABLES_SQL: &str = r#"
SELECT 'main' AS table_schema,
       name AS table_name,
       CASE WHEN type = 'view' THEN 'true' ELSE 'false' END AS is_view
FROM sqlite_master
WHERE type IN ('table', 'view')
  AND name NOT LIKE 'sqlite\_%' ESCAPE '\'
ORDER BY name
"#;

const COLUMNS_SQL: &str = r#"
SELECT name AS column_name,
       type AS column_type,
       CAST("notnull" AS TEXT) AS not_null,
       dflt_value AS column_default,
       CAST(pk AS TEXT) AS pk,
       CAST(hidden AS TEXT) AS hidden
FROM pragma_table_xinfo(?)
ORDER BY cid
"#;

/// SQLite catalog queries over `sqlite_master` and `pragma_table_xinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteAdapter;

impl DialectAdapter for SqliteAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn default_schemas(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<String>> {
        Ok(vec![SCHEMA.to_string()])
    }

    fn list_tables(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<TableFact>> {
        conn.query(TABLES_SQL, &[])?
            .iter()
            .map(|row| {
                let name = row.require("sqlite tables", "table_name")?;
                Ok(if row.flag("is_view") {
                    TableFact::view(SCHEMA, name)
                } else {
                    TableFact::table(SCHEMA, name)
                })
            })
            .collect()
    }

    fn list_columns(
        &self,
        conn: &mut dyn CatalogConnection,
        table: &TableFact,
    ) -> Result<Vec<ColumnFact>> {
        let rows = conn.query(COLUMNS_SQL, &[table.name.as_str()])?;
        let key_columns = rows
            .iter()
            .filter(|row| row.int("pk").is_some_and(|pk| pk > 0))
            .count();

        rows.iter()
            .map(|row| column_fact(row, key_columns))
            .collect()
    }

    fn list_enums(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<EnumFact>> {
        Ok(Vec::new())
    }
}

fn column_fact(row: &CatalogRow, key_columns: usize) -> Result<ColumnFact> {
    const QUERY: &str = "sqlite columns";
    let name = row.require(QUERY, "column_name")?;
    let declared = row.get("column_type").unwrap_or_default();

    // A lone INTEGER PRIMARY KEY aliases the rowid.
    let is_rowid = key_columns == 1
        && row.int("pk") == Some(1)
        && declared.eq_ignore_ascii_case("integer");
    let hidden = row.int("hidden").unwrap_or(0);

    let mut fact = ColumnFact::new(name, RawType::new(declared));
    fact.is_nullable = !row.flag("not_null") && !is_rowid;
    fact.has_default = row.get("column_default").is_some();
    fact.is_auto_incrementing = is_rowid;
    fact.is_generated = hidden == 2 || hidden == 3;
    Ok(fact)
}
