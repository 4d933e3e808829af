//! Language-agnostic code generation for sqlts.
//!
//! This crate sits between the introspected schema model and the
//! language serializers:
//!
//! ```text
//! DatabaseMetadata → Pipeline (lower → validate) → SchemaDeclarations → serializer
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output assembly helpers (ImportCollector)
//! - [`naming`] - Singularization rules and the name transformer
//! - [`declarations`] - Resolved declarations handed to serializers
//! - [`pipeline`] - Phases, plugins and diagnostics
//! - [`verify`] - Comparison against a committed output file
//! - [`testing`] - Shared fixtures (feature-gated)

pub mod builder;
pub mod declarations;
pub mod generation;
pub mod naming;
mod options;
pub mod pipeline;
pub mod verify;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use options::GenerateOptions;
