//! Validate phase - runs lints on the lowered declarations.

mod lint;
pub mod lints;

use eyre::{Result, bail};
use tracing::debug;
pub use lint::Lint;
pub use lints::{DuplicatePropertyLint, DuplicateTypeNameLint, UnknownTypeLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the declarations using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateTypeNameLint),
                Box::new(DuplicatePropertyLint),
                Box::new(UnknownTypeLint),
            ],
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint declarations and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(schema) = ctx.declarations.as_ref() else {
            bail!("declarations not set - did LowerPhase run?");
        };

        for lint in &self.lints {
            debug!(lint = lint.name(), description = lint.description(), "running lint");
            lint.check(schema, &mut ctx.diagnostics);
        }

        // Warnings are allowed, errors abort
        if ctx.has_errors() {
            let details: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
            bail!(
                "validation failed with {} error(s):\n{}",
                ctx.error_count(),
                details.join("\n")
            );
        }

        Ok(())
    }
}
