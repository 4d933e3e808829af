//! Pipeline snapshot plugin for debugging.
//!
//! Captures the declarations and diagnostics after each phase so the
//! intermediate state of a run can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::declarations::SchemaDeclarations;

/// The pipeline state at the end of a phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    /// Number of tables in the schema model.
    pub tables: usize,

    /// Available from the "lower" phase on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declarations: Option<SchemaDeclarations>,

    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that writes the pipeline state to `<dir>/<phase>.json` as soon
/// as each phase completes.
pub struct SnapshotPlugin {
    output_dir: PathBuf,
}

impl SnapshotPlugin {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            tables: ctx.metadata.tables().len(),
            declarations: ctx.declarations.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        write_snapshot(&self.output_dir, &snapshot)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        pipeline::Pipeline,
        testing::{bacchi_metadata, bacchi_options},
    };

    #[test]
    fn test_snapshots_written_per_phase() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("debug");

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(&dir))
            .run(bacchi_metadata(), bacchi_options())
            .unwrap();

        let lower = fs::read_to_string(dir.join("lower.json")).unwrap();
        assert!(lower.contains("\"Bacchus\""));
        assert!(dir.join("validate.json").exists());
    }

    #[test]
    fn test_snapshot_before_lowering_omits_declarations() {
        let temp = TempDir::new().unwrap();
        let plugin = SnapshotPlugin::with_output_dir(temp.path());
        let mut ctx = CompilationContext::new(bacchi_metadata(), bacchi_options());

        plugin.on_after_phase("custom", &mut ctx).unwrap();

        let json = fs::read_to_string(temp.path().join("custom.json")).unwrap();
        assert!(json.contains("\"tables\": 1"));
        assert!(!json.contains("declarations"));
    }
}
