//! Fixtures shared by pipeline and serializer tests.

use sqlts_config::{SingularRule, Singularize};
use sqlts_core::RuntimeEnumStyle;
use sqlts_ir::{ColumnMetadata, DataType, DatabaseMetadata, QualifiedName, ScalarKind, TableMetadata};

use crate::GenerateOptions;

/// Rule singularizing `bacchi` to `bacchus`.
pub fn bacchus_rule() -> SingularRule {
    SingularRule::new("/(bacch)(?:us|i)$/i", "$1us")
}

/// `public.bacchi` with an auto-incrementing `bacchus_id` and a nullable
/// `status` enum column.
pub fn bacchi_metadata() -> DatabaseMetadata {
    let mut metadata = DatabaseMetadata::new();
    let status = metadata
        .enums_mut()
        .register(
            QualifiedName::new("public", "status"),
            vec!["CONFIRMED".to_string(), "UNCONFIRMED".to_string()],
        )
        .expect("fresh enum collection");

    metadata
        .add_table(
            TableMetadata::new("public", "bacchi")
                .column(
                    ColumnMetadata::new("bacchus_id", DataType::scalar(ScalarKind::Number))
                        .auto_incrementing(),
                )
                .column(ColumnMetadata::new("status", DataType::enum_ref(status)).nullable()),
        )
        .expect("fresh schema model");
    metadata
}

/// Camel case, the bacchus rule, pascal-case runtime enums and `public`
/// as the default schema.
pub fn bacchi_options() -> GenerateOptions {
    GenerateOptions::default()
        .default_schemas(["public"])
        .camel_case(true)
        .singularize(Singularize::Rules(vec![bacchus_rule()]))
        .runtime_enums(RuntimeEnumStyle::PascalCase)
        .type_only_imports(true)
}
