use sqlts_core::Dialect;
use sqlts_ir::QualifiedName;

use super::group_enum_rows;
use crate::{
    CatalogConnection, CatalogRow, ColumnFact, DialectAdapter, DomainFact, EnumFact, RawType,
    Result, TableFact,
};

const TABLES_SQL: &str = r#"
SELECT n.nspname::text AS table_schema,
       c.relname::text AS table_name,
       (c.relkind IN ('v', 'm'))::text AS is_view,
       c.relispartition::text AS is_partition,
       rn.nspname::text AS root_schema,
       r.relname::text AS root_name
FROM pg_catalog.pg_class c
JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
LEFT JOIN pg_catalog.pg_class r
  ON c.relispartition AND r.oid = pg_catalog.pg_partition_root(c.oid)
LEFT JOIN pg_catalog.pg_namespace rn ON rn.oid = r.relnamespace
WHERE c.relkind IN ('r', 'p', 'v', 'm', 'f')
  AND n.nspname NOT IN ('pg_catalog', 'information_schema')
  AND n.nspname NOT LIKE 'pg\_toast%'
  AND n.nspname NOT LIKE 'pg\_temp%'
ORDER BY n.nspname, c.relname
"#;

const COLUMNS_SQL: &str = r#"
SELECT a.attname::text AS column_name,
       (CASE WHEN t.typcategory = 'A' THEN et.typname ELSE t.typname END)::text AS type_name,
       (CASE WHEN t.typcategory = 'A' THEN etn.nspname ELSE tn.nspname END)::text AS type_schema,
       (t.typcategory = 'A')::text AS is_array,
       (NOT a.attnotnull)::text AS is_nullable,
       a.atthasdef::text AS has_default,
       (a.attidentity <> ''
         OR COALESCE(pg_catalog.pg_get_expr(d.adbin, d.adrelid) LIKE 'nextval(%', false))::text
         AS is_auto_incrementing,
       (a.attgenerated <> '' OR a.attidentity = 'a')::text AS is_generated,
       pg_catalog.col_description(c.oid, a.attnum)::text AS comment
FROM pg_catalog.pg_attribute a
JOIN pg_catalog.pg_class c ON c.oid = a.attrelid
JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
JOIN pg_catalog.pg_type t ON t.oid = a.atttypid
JOIN pg_catalog.pg_namespace tn ON tn.oid = t.typnamespace
LEFT JOIN pg_catalog.pg_type et ON et.oid = t.typelem AND t.typcategory = 'A'
LEFT JOIN pg_catalog.pg_namespace etn ON etn.oid = et.typnamespace
LEFT JOIN pg_catalog.pg_attrdef d ON d.adrelid = a.attrelid AND d.adnum = a.attnum
WHERE n.nspname = $1
  AND c.relname = $2
  AND a.attnum > 0
  AND NOT a.attisdropped
ORDER BY a.attnum
"#;

const ENUMS_SQL: &str = r#"
SELECT n.nspname::text AS enum_schema,
       t.typname::text AS enum_name,
       e.enumlabel::text AS label
FROM pg_catalog.pg_enum e
JOIN pg_catalog.pg_type t ON t.oid = e.enumtypid
JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace
ORDER BY n.nspname, t.typname, e.enumsortorder
"#;

const DOMAINS_SQL: &str = r#"
SELECT n.nspname::text AS domain_schema,
       t.typname::text AS domain_name,
       (CASE WHEN bt.typcategory = 'A' THEN et.typname ELSE bt.typname END)::text AS type_name,
       (CASE WHEN bt.typcategory = 'A' THEN etn.nspname ELSE btn.nspname END)::text AS type_schema,
       (bt.typcategory = 'A')::text AS is_array
FROM pg_catalog.pg_type t
JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace
JOIN pg_catalog.pg_type bt ON bt.oid = t.typbasetype
JOIN pg_catalog.pg_namespace btn ON btn.oid = bt.typnamespace
LEFT JOIN pg_catalog.pg_type et ON et.oid = bt.typelem AND bt.typcategory = 'A'
LEFT JOIN pg_catalog.pg_namespace etn ON etn.oid = et.typnamespace
WHERE t.typtype = 'd'
  AND n.nspname NOT IN ('pg_catalog', 'information_schema')
ORDER BY n.nspname, t.typname
"#;

/// PostgreSQL catalog queries over `pg_catalog`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAdapter;

impl DialectAdapter for PostgresAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn default_schemas(&self, _conn: &mut dyn CatalogConnection) -> Result<Vec<String>> {
        Ok(vec!["public".to_string()])
    }

    fn list_tables(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<TableFact>> {
        conn.query(TABLES_SQL, &[])?
            .iter()
            .map(table_fact)
            .collect()
    }

    fn list_columns(
        &self,
        conn: &mut dyn CatalogConnection,
        table: &TableFact,
    ) -> Result<Vec<ColumnFact>> {
        conn.query(COLUMNS_SQL, &[table.schema.as_str(), table.name.as_str()])?
            .iter()
            .map(column_fact)
            .collect()
    }

    fn list_enums(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<EnumFact>> {
        let rows = conn.query(ENUMS_SQL, &[])?;
        group_enum_rows("postgres enums", &rows)
    }

    fn list_domains(&self, conn: &mut dyn CatalogConnection) -> Result<Vec<DomainFact>> {
        conn.query(DOMAINS_SQL, &[])?
            .iter()
            .map(|row| {
                let schema = row.require("postgres domains", "domain_schema")?;
                let name = row.require("postgres domains", "domain_name")?;
                let base = raw_type("postgres domains", row)?;
                Ok(DomainFact::new(schema, name, base))
            })
            .collect()
    }
}

fn table_fact(row: &CatalogRow) -> Result<TableFact> {
    const QUERY: &str = "postgres tables";
    let schema = row.require(QUERY, "table_schema")?;
    let name = row.require(QUERY, "table_name")?;

    let mut fact = if row.flag("is_view") {
        TableFact::view(schema, name)
    } else {
        TableFact::table(schema, name)
    };

    if row.flag("is_partition")
        && let (Some(root_schema), Some(root_name)) = (row.get("root_schema"), row.get("root_name"))
    {
        fact = fact.partition_of(QualifiedName::new(root_schema, root_name));
    }

    Ok(fact)
}

fn column_fact(row: &CatalogRow) -> Result<ColumnFact> {
    const QUERY: &str = "postgres columns";
    let name = row.require(QUERY, "column_name")?;

    let mut fact = ColumnFact::new(name, raw_type(QUERY, row)?);
    fact.is_nullable = row.flag("is_nullable");
    fact.has_default = row.flag("has_default");
    fact.is_auto_incrementing = row.flag("is_auto_incrementing");
    fact.is_generated = row.flag("is_generated");
    fact.comment = row.get("comment").map(str::to_string);
    Ok(fact)
}

fn raw_type(query: &'static str, row: &CatalogRow) -> Result<RawType> {
    let mut raw = RawType::new(row.require(query, "type_name")?);
    if let Some(schema) = row.get("type_schema") {
        raw = raw.in_schema(schema);
    }
    if row.flag("is_array") {
        raw = raw.array();
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;

    #[test]
    fn test_list_tables_with_partitions() {
        let mut conn = ScriptedConnection::new().on(
            "pg_partition_root",
            vec![
                CatalogRow::new()
                    .with("table_schema", "public")
                    .with("table_name", "events")
                    .with("is_view", "false")
                    .with("is_partition", "false")
                    .with_null("root_schema")
                    .with_null("root_name"),
                CatalogRow::new()
                    .with("table_schema", "public")
                    .with("table_name", "events_2024")
                    .with("is_view", "false")
                    .with("is_partition", "true")
                    .with("root_schema", "public")
                    .with("root_name", "events"),
                CatalogRow::new()
                    .with("table_schema", "public")
                    .with("table_name", "recent_events")
                    .with("is_view", "true")
                    .with("is_partition", "false"),
            ],
        );

        let tables = PostgresAdapter.list_tables(&mut conn).unwrap();
        assert_eq!(tables.len(), 3);
        assert!(!tables[0].is_partition);
        assert_eq!(
            tables[1].partition_root,
            Some(QualifiedName::new("public", "events"))
        );
        assert!(tables[2].is_view);
    }

    #[test]
    fn test_list_columns_binds_schema_and_table() {
        let mut conn = ScriptedConnection::new().on_params(
            "pg_attribute",
            &["public", "bacchi"],
            vec![
                CatalogRow::new()
                    .with("column_name", "bacchus_id")
                    .with("type_name", "int4")
                    .with("type_schema", "pg_catalog")
                    .with("is_array", "false")
                    .with("is_nullable", "false")
                    .with("has_default", "false")
                    .with("is_auto_incrementing", "true")
                    .with("is_generated", "false")
                    .with_null("comment"),
                CatalogRow::new()
                    .with("column_name", "tags")
                    .with("type_name", "text")
                    .with("type_schema", "pg_catalog")
                    .with("is_array", "true")
                    .with("is_nullable", "true")
                    .with("has_default", "false")
                    .with("is_auto_incrementing", "false")
                    .with("is_generated", "false")
                    .with("comment", "Free-form labels"),
            ],
        );

        let columns = PostgresAdapter
            .list_columns(&mut conn, &TableFact::table("public", "bacchi"))
            .unwrap();

        assert_eq!(columns.len(), 2);
        assert!(columns[0].is_auto_incrementing);
        assert_eq!(columns[0].raw_type.qualified_name().unwrap().to_string(), "pg_catalog.int4");
        assert!(columns[1].raw_type.is_array);
        assert!(columns[1].is_nullable);
        assert_eq!(columns[1].comment.as_deref(), Some("Free-form labels"));
        assert_eq!(conn.queries()[0].1, vec!["public", "bacchi"]);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut conn = ScriptedConnection::new()
            .on("pg_partition_root", vec![CatalogRow::new().with("table_name", "x")]);

        let err = PostgresAdapter.list_tables(&mut conn).unwrap_err();
        assert!(matches!(err, crate::Error::MissingColumn { column, .. } if column == "table_schema"));
    }
}
