//! Pipeline orchestrator.

use eyre::Result;
use sqlts_ir::DatabaseMetadata;
use tracing::debug;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LowerPhase, ValidatePhase},
};
use crate::GenerateOptions;

/// The compilation pipeline orchestrator.
///
/// Runs the lower and validate phases, calling plugin hooks before and
/// after each one.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".sqlts/debug"))
///     .run(metadata, options)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase over the given schema model.
    ///
    /// # Errors
    ///
    /// Fails when a phase fails fatally, including when validation recorded
    /// any error diagnostic.
    pub fn run(
        &self,
        metadata: DatabaseMetadata,
        options: GenerateOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(metadata, options);

        let phases: [&dyn Phase; 2] = [&LowerPhase, &self.validate];
        for phase in phases {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, description = phase.description(), "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
