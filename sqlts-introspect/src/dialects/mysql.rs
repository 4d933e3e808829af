use sqlts_core::Dialect;

use crate::{
    CatalogConnection, CatalogRow, ColumnFact, DialectAdapter, EnumFact, RawType, Result,
    TableFact,
};

const DATABASE_SQL: &str = "SELECT DATABASE() AS database_name";

const TABLES_SQL: &str = r#"
SELECT TABLE_SCHEMA AS table_schema,
       TABLE_NAME AS table_name,
       CASE WHEN TABLE_TYPE = 'VIEW' THEN 'true' ELSE 'false' END AS is_view
FROM information_schema.TABLES
WHERE TABLE_SCHEMA = DATABASE()
ORDER BY TABLE_NAME
"#;

const COLUMNS_SQL: &str = r#"
SELECT COLUMN_NAME AS column_name,
       DATA_TYPE AS data_type,
       COLUMN_TYPE AS column_type,
       IS_NULLABLE AS is_nullable,
       COLUMN_DEFAULT AS column_default,
       EXTRA AS extra,
       COLUMN_COMMENT AS column_comment
FROM information_schema.COLUMNS
WHERE TABLE_SCHEMA = ?
  AND TABLE_NAME = ?
ORDER BY ORDINAL_POSITION
"#;

/// MySQL catalog queries over `information_schema`, scoped to the
/// connected database.
///
/// MySQL has no named enum types. Each `enum(...)` column becomes an
/// enum named `<table>_<column>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlAdapter;

impl DialectAdapter for MysqlAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn default_schemas(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<String>> {
        let rows = conn.query(DATABASE_SQL, &[])?;
        Ok(rows
            .first()
            .and_then(|row| row.get("database_name"))
            .map(|name| vec![name.to_string()])
            .unwrap_or_default())
    }

    fn list_tables(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<TableFact>> {
        conn.query(TABLES_SQL, &[])?
            .iter()
            .map(|row| {
                let schema = row.require("mysql tables", "table_schema")?;
                let name = row.require("mysql tables", "table_name")?;
                Ok(if row.flag("is_view") {
                    TableFact::view(schema, name)
                } else {
                    TableFact::table(schema, name)
                })
            })
            .collect()
    }

    fn list_columns(
        &self,
        conn: &mut dyn CatalogConnection,
        table: &TableFact,
    ) -> Result<Vec<ColumnFact>> {
        conn.query(COLUMNS_SQL, &[table.schema.as_str(), table.name.as_str()])?
            .iter()
            .map(|row| column_fact(table, row))
            .collect()
    }

    fn list_enums(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<EnumFact>> {
        Ok(Vec::new())
    }
}

fn column_fact(table: &TableFact, row: &CatalogRow) -> Result<ColumnFact> {
    const QUERY: &str = "mysql columns";
    let name = row.require(QUERY, "column_name")?;
    let data_type = row.require(QUERY, "data_type")?;

    let mut raw = RawType::new(data_type);
    if raw.name.eq_ignore_ascii_case("enum")
        && let Some(labels) = row.get("column_type").and_then(parse_enum_labels)
    {
        raw = raw.inline_enum(EnumFact::new(
            &table.schema,
            format!("{}_{}", table.name, name),
            labels,
        ));
    }

    let extra = row.get("extra").unwrap_or_default().to_ascii_lowercase();

    let mut fact = ColumnFact::new(name, raw);
    fact.is_nullable = row.flag("is_nullable");
    fact.has_default = row.get("column_default").is_some() || extra.contains("default_generated");
    fact.is_auto_incrementing = extra.contains("auto_increment");
    fact.is_generated = extra.contains("virtual generated") || extra.contains("stored generated");
    fact.comment = row
        .get("column_comment")
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    Ok(fact)
}

/// Parse the labels out of a column type like `enum('a','it''s')`.
fn parse_enum_labels(column_type: &str) -> Option<Vec<String>> {
    let body = column_type
        .trim()
        .strip_prefix("enum(")
        .or_else(|| column_type.trim().strip_prefix("ENUM("))?
        .strip_suffix(')')?;

    let mut labels = Vec::new();
    let mut chars = body.chars().peekable();

    loop {
        match chars.next() {
            None => break,
            Some(',') | Some(' ') => continue,
            Some('\'') => {}
            Some(_) => return None,
        }

        let mut label = String::new();
        loop {
            match chars.next() {
                None => return None,
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    label.push('\'');
                }
                Some('\'') => break,
                Some('\\') => label.extend(chars.next()),
                Some(c) => label.push(c),
            }
        }
        labels.push(label);
    }

    Some(labels)
}
