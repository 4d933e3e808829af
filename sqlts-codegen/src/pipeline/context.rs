//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use sqlts_ir::DatabaseMetadata;

use super::diagnostic::Diagnostic;
use crate::{GenerateOptions, declarations::SchemaDeclarations};

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The introspected schema model.
    pub metadata: DatabaseMetadata,
    /// Naming and rendering options for this run.
    pub options: GenerateOptions,
    /// Resolved declarations (populated by LowerPhase).
    pub declarations: Option<SchemaDeclarations>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(metadata: DatabaseMetadata, options: GenerateOptions) -> Self {
        Self {
            metadata,
            options,
            declarations: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// The lowered declarations, or an error when LowerPhase hasn't run.
    pub fn declarations(&self) -> Result<&SchemaDeclarations> {
        self.declarations
            .as_ref()
            .ok_or_else(|| eyre!("declarations not set - did LowerPhase run?"))
    }
}
