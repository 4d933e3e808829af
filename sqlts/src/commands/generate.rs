use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::RunArgs;
use crate::{
    ops::{self, RunOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: RunArgs,

    /// Write declarations to this file instead of stdout
    #[arg(short, long)]
    pub out_file: Option<PathBuf>,

    /// Compare against the output file instead of writing it
    #[arg(long)]
    pub verify: bool,

    /// Write per-phase JSON snapshots of the pipeline to this directory
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("failed to read the working directory")?;
        let mut config = self.args.load_config(&cwd);
        if let Some(path) = &self.out_file {
            config.out_file = Some(path.clone());
        }
        if self.verify {
            config.verify = true;
        }

        let report = ops::generate(
            &config,
            RunOptions {
                snapshot_dir: self.snapshot_dir.as_deref(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.is_mismatch() {
            std::process::exit(1);
        }
        Ok(())
    }
}
