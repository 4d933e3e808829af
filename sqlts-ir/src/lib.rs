//! Canonical schema metadata model for sqlts.
//!
//! This crate provides the in-memory representation of an introspected
//! database schema. Dialect adapters populate it, the code generators
//! consume it.
//!
//! # Architecture
//!
//! ```text
//! catalog (driver) → sqlts-introspect (facts, mapping) → sqlts-ir (model) → codegen
//! ```
//!
//! The model is built once per run and is immutable once introspection
//! finishes. It is designed to be:
//! - Dialect-agnostic (no catalog OIDs or ordinals survive into it)
//! - Order-preserving (tables, columns and enum labels keep catalog order)
//! - Self-contained (no dependency on how it gets rendered)

mod database;
mod enums;
mod names;
mod table;
mod types;

pub use database::{DatabaseMetadata, DuplicateTable};
pub use enums::{EnumCollection, EnumConflict, EnumHandle};
pub use names::QualifiedName;
pub use table::{ColumnMetadata, TableMetadata};
pub use types::{DataType, ScalarKind};
