//! Lint trait for declaration validation.

use crate::{declarations::SchemaDeclarations, pipeline::Diagnostic};

/// A lint that checks lowered declarations for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the declarations and add any diagnostics.
    fn check(&self, schema: &SchemaDeclarations, diagnostics: &mut Vec<Diagnostic>);
}
