//! Compilation pipeline for code generation.
//!
//! A [`Pipeline`] takes the introspected [`DatabaseMetadata`] and runs it
//! through explicit phases:
//!
//! - `lower` resolves every name and type into
//!   [`SchemaDeclarations`](crate::declarations::SchemaDeclarations)
//! - `validate` runs lints over the declarations and aborts on errors
//!
//! Plugins observe each phase through before/after hooks.
//!
//! # Example
//!
//! ```ignore
//! use sqlts_codegen::pipeline::{Pipeline, TimingPlugin};
//!
//! let ctx = Pipeline::new()
//!     .plugin(TimingPlugin::new())
//!     .run(metadata, options)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```
//!
//! [`DatabaseMetadata`]: sqlts_ir::DatabaseMetadata

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;
mod timing;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
pub use timing::TimingPlugin;
