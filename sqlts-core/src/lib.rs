//! Core utilities and types for sqlts.
//!
//! This crate provides fundamental types and utilities used across
//! the sqlts crates: the dialect identifier, the parser option enums
//! that shape type mapping, case conversion helpers, user regex
//! rewriting and output file handling.

mod dialect;
mod file;
mod pattern;
mod types;
mod utils;

pub use dialect::Dialect;
// File operations
pub use file::{File, WriteResult, read_if_exists};
// Pattern helpers
pub use pattern::{is_regex_literal, regex_source, replacement_template};
// Fundamental types
pub use types::{DateParser, NumericParser, RuntimeEnumStyle};
// String utilities
pub use utils::{
    is_identifier, split_words, to_camel_case, to_pascal_case, to_screaming_snake_case,
};
