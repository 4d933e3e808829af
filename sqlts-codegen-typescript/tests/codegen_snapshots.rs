//! Snapshot tests for declaration file generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sqlts_codegen::{
    GenerateOptions,
    pipeline::Pipeline,
    testing::{bacchi_metadata, bacchi_options},
    verify::VerifyOutcome,
};
use sqlts_codegen_typescript::Generator;
use sqlts_config::Overrides;
use sqlts_core::{RuntimeEnumStyle, WriteResult};
use sqlts_ir::{ColumnMetadata, DataType, DatabaseMetadata, ScalarKind, TableMetadata};

fn generate(metadata: DatabaseMetadata, options: GenerateOptions) -> String {
    let ctx = Pipeline::new()
        .run(metadata, options)
        .expect("Pipeline failed");
    Generator::from_context(ctx)
        .expect("Missing declarations")
        .serialize()
}

fn single_table(table: TableMetadata) -> DatabaseMetadata {
    let mut metadata = DatabaseMetadata::new();
    metadata.add_table(table).expect("fresh schema model");
    metadata
}

#[test]
fn test_bacchi_declarations() {
    let code = generate(bacchi_metadata(), bacchi_options());

    insta::assert_snapshot!(code, @r#"
/**
 * This file was generated by sqlts.
 * Please do not edit it manually.
 */

import type { ColumnType } from "kysely";

export enum Status {
  Confirmed = "CONFIRMED",
  Unconfirmed = "UNCONFIRMED",
}

export type Generated<T> = T extends ColumnType<infer S, infer I, infer U>
  ? ColumnType<S, I | undefined, U>
  : ColumnType<T, T | undefined, T>;

export interface Bacchus {
  bacchusId: Generated<number>;
  status: Status | null;
}

export interface DB {
  bacchi: Bacchus;
}
"#);
}

#[test]
fn test_output_is_deterministic() {
    let first = generate(bacchi_metadata(), bacchi_options());
    let second = generate(bacchi_metadata(), bacchi_options());
    assert_eq!(first, second);
}

#[test]
fn test_screaming_snake_enum_members() {
    let code = generate(
        bacchi_metadata(),
        bacchi_options().runtime_enums(RuntimeEnumStyle::ScreamingSnakeCase),
    );

    assert!(code.contains("export enum Status {\n  CONFIRMED = \"CONFIRMED\",\n  UNCONFIRMED = \"UNCONFIRMED\",\n}\n"));
}

#[test]
fn test_value_imports_when_type_only_disabled() {
    let code = generate(bacchi_metadata(), bacchi_options().type_only_imports(false));
    assert!(code.contains("import { ColumnType } from \"kysely\";\n"));
}

#[test]
fn test_no_import_without_column_type_helpers() {
    let metadata = single_table(
        TableMetadata::new("public", "settings")
            .column(ColumnMetadata::new("key", DataType::scalar(ScalarKind::String)))
            .column(ColumnMetadata::new("value", DataType::scalar(ScalarKind::Json)).nullable()),
    );
    let code = generate(metadata, GenerateOptions::default().default_schemas(["public"]));

    assert!(!code.contains("import"));
    assert!(code.contains("export type Json = JsonValue;\n"));
    assert!(code.contains("  value: Json | null;\n"));
}

#[test]
fn test_numeric_and_timestamp_helpers() {
    let metadata = single_table(
        TableMetadata::new("public", "orders")
            .column(ColumnMetadata::new("total", DataType::scalar(ScalarKind::NumericString)))
            .column(
                ColumnMetadata::new("placed_at", DataType::scalar(ScalarKind::Timestamp))
                    .with_default(),
            )
            .column(
                ColumnMetadata::new(
                    "quantities",
                    DataType::array_of(DataType::scalar(ScalarKind::NumberOrString)),
                )
                .nullable(),
            ),
    );
    let code = generate(
        metadata,
        GenerateOptions::default()
            .default_schemas(["public"])
            .camel_case(true),
    );

    insta::assert_snapshot!(code, @r#"
/**
 * This file was generated by sqlts.
 * Please do not edit it manually.
 */

import type { ColumnType } from "kysely";

export type Generated<T> = T extends ColumnType<infer S, infer I, infer U>
  ? ColumnType<S, I | undefined, U>
  : ColumnType<T, T | undefined, T>;

export type Numeric = ColumnType<string, number | string, number | string>;

export type Timestamp = ColumnType<Date, Date | string, Date | string>;

export interface Orders {
  total: Numeric;
  placedAt: Generated<Timestamp>;
  quantities: (number | string)[] | null;
}

export interface DB {
  orders: Orders;
}
"#);
}

#[test]
fn test_schema_qualified_tables() {
    let mut metadata = DatabaseMetadata::new();
    metadata
        .add_table(
            TableMetadata::new("audit", "events")
                .column(ColumnMetadata::new("id", DataType::scalar(ScalarKind::Number))),
        )
        .expect("fresh schema model");
    metadata
        .add_table(
            TableMetadata::new("public", "users")
                .column(ColumnMetadata::new("id", DataType::scalar(ScalarKind::Number))),
        )
        .expect("fresh schema model");

    let code = generate(metadata, bacchi_options());

    assert!(code.contains("export interface AuditEvent {\n"));
    assert!(code.contains("export interface User {\n"));
    assert!(code.contains(
        "export interface DB {\n  \"audit.events\": AuditEvent;\n  users: User;\n}\n"
    ));
}

#[test]
fn test_column_override_is_emitted_verbatim() {
    let metadata = single_table(
        TableMetadata::new("public", "posts").column(
            ColumnMetadata::new("tags", DataType::unknown("tsvector"))
                .nullable()
                .with_default(),
        ),
    );
    let mut overrides = Overrides::default();
    overrides
        .columns
        .insert("public.posts.tags".into(), "string[]".into());

    let code = generate(
        metadata,
        GenerateOptions::default()
            .default_schemas(["public"])
            .overrides(overrides),
    );

    assert!(code.contains("  tags: string[];\n"));
    assert!(!code.contains("Generated"));
}

#[test]
fn test_unknown_type_renders_unknown() {
    let metadata = single_table(
        TableMetadata::new("public", "docs")
            .column(ColumnMetadata::new("search", DataType::unknown("tsvector"))),
    );
    let code = generate(metadata, GenerateOptions::default().default_schemas(["public"]));

    assert!(code.contains("  search: unknown;\n"));
}

#[test]
fn test_empty_schema() {
    let code = generate(DatabaseMetadata::new(), GenerateOptions::default());
    assert!(code.ends_with("\n\nexport interface DB {}\n"));
}

#[test]
fn test_verify_matches_own_output() {
    let ctx = Pipeline::new()
        .run(bacchi_metadata(), bacchi_options())
        .unwrap();
    let generator = Generator::from_context(ctx).unwrap();
    let existing = generator.serialize().replace('\n', "\r\n");

    assert!(generator.verify(&existing).is_match());
}

#[test]
fn test_verify_reports_first_difference() {
    let ctx = Pipeline::new()
        .run(bacchi_metadata(), bacchi_options())
        .unwrap();
    let generator = Generator::from_context(ctx).unwrap();
    let corrupted = generator
        .serialize()
        .replace("status: Status | null;", "status: string;");

    match generator.verify(&corrupted) {
        VerifyOutcome::Mismatch(mismatch) => {
            assert_eq!(mismatch.expected.as_deref(), Some("  status: Status | null;"));
            assert_eq!(mismatch.actual.as_deref(), Some("  status: string;"));
        }
        VerifyOutcome::Match => panic!("corrupted file should not verify"),
    }
}

#[test]
fn test_verify_detects_changed_enum_label() {
    let ctx = Pipeline::new()
        .run(bacchi_metadata(), bacchi_options())
        .unwrap();
    let generator = Generator::from_context(ctx).unwrap();
    let corrupted = generator
        .serialize()
        .replace("Unconfirmed = \"UNCONFIRMED\",", "Unconfirmed = \"PENDING\",");

    let VerifyOutcome::Mismatch(mismatch) = generator.verify(&corrupted) else {
        panic!("changed enum label should not verify");
    };
    assert_eq!(mismatch.line, 10);
    assert_eq!(
        mismatch.expected.as_deref(),
        Some("  Unconfirmed = \"UNCONFIRMED\",")
    );
    assert_eq!(mismatch.actual.as_deref(), Some("  Unconfirmed = \"PENDING\","));
}

#[test]
fn test_write_then_unchanged() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("src").join("db.d.ts");

    let ctx = Pipeline::new()
        .run(bacchi_metadata(), bacchi_options())
        .unwrap();
    let generator = Generator::from_context(ctx).unwrap();

    assert_eq!(generator.write(&path).unwrap(), WriteResult::Written);
    assert_eq!(generator.write(&path).unwrap(), WriteResult::Unchanged);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(generator.verify(&written).is_match());
}
