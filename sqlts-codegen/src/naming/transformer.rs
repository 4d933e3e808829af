//! Catalog name to declaration name resolution.

use eyre::Result;
use sqlts_config::Overrides;
use sqlts_core::{to_camel_case, to_pascal_case};
use sqlts_ir::QualifiedName;

use super::Singularizer;
use crate::GenerateOptions;

/// Resolves declaration names from catalog names.
///
/// Table names go through override lookup, then singularization, then
/// case conversion. An override replaces the result wholesale.
/// Column names are only ever case converted.
#[derive(Debug, Clone)]
pub struct NameTransformer {
    camel_case: bool,
    singularizer: Option<Singularizer>,
    overrides: Overrides,
    default_schemas: Vec<String>,
}

impl NameTransformer {
    /// Fails when a configured singularization rule does not compile.
    pub fn new(options: &GenerateOptions) -> Result<Self> {
        Ok(Self {
            camel_case: options.camel_case,
            singularizer: Singularizer::from_setting(&options.singularize)?,
            overrides: options.overrides.clone(),
            default_schemas: options.default_schemas.clone(),
        })
    }

    /// Interface name for a table or view.
    pub fn table_type_name(&self, table: &QualifiedName) -> String {
        if let Some(name) = self.overrides.table_name(&table.schema, &table.name) {
            return name.to_string();
        }

        let name = match &self.singularizer {
            Some(singularizer) => singularizer.singularize(&table.name),
            None => table.name.clone(),
        };
        self.qualify(&table.schema, &name)
    }

    /// Type name for an enum or domain.
    pub fn type_name(&self, identity: &QualifiedName) -> String {
        self.qualify(&identity.schema, &identity.name)
    }

    /// Property name for a column.
    pub fn column_name(&self, column: &str) -> String {
        if self.camel_case {
            to_camel_case(column)
        } else {
            column.to_string()
        }
    }

    /// Verbatim type text configured for a column, if any.
    pub fn column_type_override(&self, table: &QualifiedName, column: &str) -> Option<&str> {
        self.overrides
            .column_type(&table.schema, &table.name, column)
    }

    /// Key of the table in the `DB` interface.
    pub fn db_key(&self, table: &QualifiedName) -> String {
        if self.is_default_schema(&table.schema) {
            table.name.clone()
        } else {
            table.to_string()
        }
    }

    pub fn is_default_schema(&self, schema: &str) -> bool {
        schema.is_empty() || self.default_schemas.iter().any(|s| s == schema)
    }

    fn qualify(&self, schema: &str, name: &str) -> String {
        let name = to_pascal_case(name);
        if self.is_default_schema(schema) {
            name
        } else {
            format!("{}{}", to_pascal_case(schema), name)
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlts_config::{SingularRule, Singularize};

    use super::*;

    fn transformer(options: GenerateOptions) -> NameTransformer {
        NameTransformer::new(&options.default_schemas(["public"])).unwrap()
    }

    #[test]
    fn test_plain_names() {
        let names = transformer(GenerateOptions::default());
        let users = QualifiedName::new("public", "users");

        assert_eq!(names.table_type_name(&users), "Users");
        assert_eq!(names.column_name("created_at"), "created_at");
        assert_eq!(names.db_key(&users), "users");
    }

    #[test]
    fn test_singularize_and_camel_case() {
        let names = transformer(
            GenerateOptions::default()
                .camel_case(true)
                .singularize(Singularize::Rules(vec![SingularRule::new(
                    "/(bacch)(?:us|i)$/i",
                    "$1us",
                )])),
        );

        let bacchi = QualifiedName::new("public", "bacchi");
        assert_eq!(names.table_type_name(&bacchi), "Bacchus");
        assert_eq!(names.column_name("bacchus_id"), "bacchusId");
        // DB keys keep the catalog name
        assert_eq!(names.db_key(&bacchi), "bacchi");
    }

    #[test]
    fn test_non_default_schema_is_qualified() {
        let names = transformer(GenerateOptions::default().singularize(Singularize::Default));
        let logs = QualifiedName::new("audit_log", "entries");

        assert_eq!(names.table_type_name(&logs), "AuditLogEntry");
        assert_eq!(names.db_key(&logs), "audit_log.entries");
        assert_eq!(
            names.type_name(&QualifiedName::new("audit_log", "level")),
            "AuditLogLevel"
        );
    }

    #[test]
    fn test_table_override_wins() {
        let mut overrides = Overrides::default();
        overrides
            .tables
            .insert("public.people".into(), "Human".into());
        overrides
            .columns
            .insert("public.people.tags".into(), "string[]".into());

        let names = transformer(
            GenerateOptions::default()
                .singularize(Singularize::Default)
                .overrides(overrides),
        );
        let people = QualifiedName::new("public", "people");

        assert_eq!(names.table_type_name(&people), "Human");
        assert_eq!(names.column_type_override(&people, "tags"), Some("string[]"));
        assert_eq!(names.column_type_override(&people, "name"), None);
    }

    #[test]
    fn test_malformed_rule_fails() {
        let options = GenerateOptions::default()
            .singularize(Singularize::Rules(vec![SingularRule::new("(", "")]));
        assert!(NameTransformer::new(&options).is_err());
    }
}
