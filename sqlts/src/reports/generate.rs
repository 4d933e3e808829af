//! Generate command report data structures.

use std::path::PathBuf;

use sqlts_codegen::verify::VerifyOutcome;
use sqlts_core::{Dialect, WriteResult};

use super::output::{Output, Report};

/// What happened to the generated declarations.
#[derive(Debug)]
pub enum GenerationResult {
    /// Printed to stdout.
    Stdout(String),
    /// Written to a file.
    Written { path: PathBuf, result: WriteResult },
    /// Compared against an existing file.
    Verified {
        path: PathBuf,
        outcome: VerifyOutcome,
    },
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub dialect: Dialect,
    /// Tables and views emitted.
    pub table_count: usize,
    /// Pipeline warnings, already formatted.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

impl GenerateReport {
    /// Whether verify mode found the file out of date.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            &self.result,
            GenerationResult::Verified { outcome, .. } if !outcome.is_match()
        )
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Stdout(code) => out.code(code),
            GenerationResult::Written { path, result } => {
                let verb = match result {
                    WriteResult::Written => "Wrote",
                    WriteResult::Unchanged => "Unchanged",
                };
                out.success(&format!("{} {}", verb, path.display()));
                out.key_value("dialect", self.dialect.as_str());
                out.key_value("tables", &self.table_count.to_string());
            }
            GenerationResult::Verified { path, outcome } => match outcome {
                VerifyOutcome::Match => {
                    out.success(&format!("{} is up to date", path.display()));
                }
                VerifyOutcome::Mismatch(mismatch) => {
                    out.error(
                        &format!("{} is out of date", path.display()),
                        &mismatch.to_string(),
                    );
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlts_codegen::verify::Mismatch;

    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            dialect: Dialect::Postgres,
            table_count: 2,
            warnings: vec!["unknown type 'tsvector'".into()],
            result,
        }
    }

    #[test]
    fn test_stdout_renders_code_only() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Stdout("export interface DB {}\n".into())).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: unknown type 'tsvector'".to_string(),
                "code: export interface DB {}\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_mismatch_reports_first_difference() {
        let report = report(GenerationResult::Verified {
            path: PathBuf::from("db.d.ts"),
            outcome: VerifyOutcome::Mismatch(Mismatch {
                line: 12,
                expected: Some("  status: Status | null;".into()),
                actual: Some("  status: string;".into()),
            }),
        });
        assert!(report.is_mismatch());

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines[1],
            "error: db.d.ts is out of date / line 12: expected \"  status: Status | null;\", found \"  status: string;\""
        );
    }

    #[test]
    fn test_written_summary() {
        let report = report(GenerationResult::Written {
            path: PathBuf::from("src/db.d.ts"),
            result: WriteResult::Unchanged,
        });
        assert!(!report.is_mismatch());

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines[1], "success: Unchanged src/db.d.ts");
        assert_eq!(out.lines[3], "tables: 2");
    }
}
