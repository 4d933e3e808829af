use indexmap::IndexMap;
use sqlts_config::Config;
use sqlts_ir::{
    ColumnMetadata, DatabaseMetadata, DuplicateTable, EnumCollection, QualifiedName,
    TableMetadata,
};
use tracing::{debug, info};

use crate::{
    CatalogConnection, ColumnFact, DialectAdapter, Error, Result, TableFact, TableMatcher,
    TypeMapper, TypeOptions,
};

/// Options for an introspection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntrospectOptions {
    /// Overrides the adapter's default schemas when non-empty.
    pub default_schemas: Vec<String>,
    pub include_pattern: Option<String>,
    pub exclude_pattern: Option<String>,
    /// Fold partitions into their root table instead of dropping them.
    pub partitions: bool,
    pub types: TypeOptions,
}

impl From<&Config> for IntrospectOptions {
    fn from(config: &Config) -> Self {
        Self {
            default_schemas: config.default_schemas.clone(),
            include_pattern: config.include_pattern.clone(),
            exclude_pattern: config.exclude_pattern.clone(),
            partitions: config.partitions,
            types: TypeOptions::from(config),
        }
    }
}

/// Result of an introspection run.
#[derive(Debug, Clone)]
pub struct Introspection {
    pub metadata: DatabaseMetadata,
    /// Schemas emitted without a prefix.
    pub default_schemas: Vec<String>,
}

/// Builds a [`DatabaseMetadata`] through a dialect adapter.
pub struct Introspector<'a> {
    adapter: &'a dyn DialectAdapter,
    options: IntrospectOptions,
}

impl<'a> Introspector<'a> {
    pub fn new(adapter: &'a dyn DialectAdapter, options: IntrospectOptions) -> Self {
        Self { adapter, options }
    }

    pub fn run(&self, conn: &mut dyn CatalogConnection) -> Result<Introspection> {
        let default_schemas = if self.options.default_schemas.is_empty() {
            self.adapter.default_schemas(conn)?
        } else {
            self.options.default_schemas.clone()
        };
        debug!(dialect = %self.adapter.dialect(), schemas = ?default_schemas, "default schemas");

        let matcher = TableMatcher::new(
            self.options.include_pattern.as_deref(),
            self.options.exclude_pattern.as_deref(),
            default_schemas.clone(),
        )?;

        let mapper = TypeMapper::new(self.adapter.dialect(), self.options.types)
            .with_enums(self.adapter.list_enums(conn)?)
            .with_domains(self.adapter.list_domains(conn)?);

        let facts = self.adapter.list_tables(conn)?;
        let (partitions, roots): (Vec<&TableFact>, Vec<&TableFact>) =
            facts.iter().partition(|fact| fact.is_partition);

        let mut enums = EnumCollection::new();
        let mut tables: IndexMap<QualifiedName, TableMetadata> = IndexMap::new();

        for fact in roots {
            if !matcher.matches(&fact.schema, &fact.name) {
                debug!(table = %fact.qualified_name(), "table skipped by matcher");
                continue;
            }

            let table = self.build_table(conn, &mapper, &mut enums, fact)?;
            let key = table.qualified_name();
            if tables.contains_key(&key) {
                return Err(DuplicateTable { table: key }.into());
            }
            tables.insert(key, table);
        }

        for fact in partitions {
            let name = fact.qualified_name();
            if !self.options.partitions {
                debug!(table = %name, "partition dropped");
                continue;
            }
            let Some(root_name) = &fact.partition_root else {
                continue;
            };
            if !tables.contains_key(root_name) {
                debug!(table = %name, root = %root_name, "partition root not emitted");
                continue;
            }

            let partition = self.build_table(conn, &mapper, &mut enums, fact)?;
            if let Some(root) = tables.get_mut(root_name) {
                merge_partition(root, partition)?;
            }
        }

        let mut metadata = DatabaseMetadata::with_enums(enums);
        for table in tables.into_values() {
            metadata.add_table(table)?;
        }

        info!(
            tables = metadata.tables().len(),
            enums = metadata.enums().len(),
            "introspection finished"
        );

        Ok(Introspection {
            metadata,
            default_schemas,
        })
    }

    fn build_table(
        &self,
        conn: &mut dyn CatalogConnection,
        mapper: &TypeMapper,
        enums: &mut EnumCollection,
        fact: &TableFact,
    ) -> Result<TableMetadata> {
        let columns = self.adapter.list_columns(conn, fact)?;

        let mut table = TableMetadata::new(&fact.schema, &fact.name);
        table.is_view = fact.is_view;
        table.is_partition = fact.is_partition;
        table.partition_root = fact.partition_root.clone();

        for column in columns {
            table.columns.push(build_column(fact, mapper, enums, column)?);
        }

        debug!(table = %fact.qualified_name(), columns = table.columns.len(), "introspected table");
        Ok(table)
    }
}

fn build_column(
    table: &TableFact,
    mapper: &TypeMapper,
    enums: &mut EnumCollection,
    fact: ColumnFact,
) -> Result<ColumnMetadata> {
    let data_type = mapper.map(&fact.raw_type, enums).map_err(|conflict| {
        Error::SchemaInconsistency(format!(
            "{} (column {}.{})",
            conflict,
            table.qualified_name(),
            fact.name
        ))
    })?;

    Ok(ColumnMetadata {
        name: fact.name,
        data_type,
        is_nullable: fact.is_nullable,
        is_auto_incrementing: fact.is_auto_incrementing,
        is_generated: fact.is_generated,
        has_default: fact.has_default,
        comment: fact.comment,
    })
}

/// Merge a partition's columns into its root.
///
/// The root keeps its declared column order; columns only a partition
/// declares are appended in the order partitions are visited.
fn merge_partition(root: &mut TableMetadata, partition: TableMetadata) -> Result<()> {
    for column in partition.columns {
        match root.columns.iter().find(|c| c.name == column.name) {
            Some(existing) if existing.data_type != column.data_type => {
                return Err(Error::SchemaInconsistency(format!(
                    "column '{}' of partition '{}.{}' has a different type than in '{}'",
                    column.name,
                    partition.schema,
                    partition.name,
                    root.qualified_name()
                )));
            }
            Some(_) => {}
            None => root.columns.push(column),
        }
    }
    Ok(())
}
