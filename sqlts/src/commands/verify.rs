use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::RunArgs;
use crate::{
    ops::{self, RunOptions},
    reports::{Report, TerminalOutput},
};

/// Shorthand for `generate --verify`.
#[derive(Args)]
pub struct VerifyCommand {
    #[command(flatten)]
    pub args: RunArgs,

    /// File to compare against (defaults to `out_file` from sqlts.toml)
    #[arg(short, long)]
    pub out_file: Option<PathBuf>,
}

impl VerifyCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("failed to read the working directory")?;
        let mut config = self.args.load_config(&cwd);
        if let Some(path) = &self.out_file {
            config.out_file = Some(path.clone());
        }
        config.verify = true;

        let report = ops::generate(&config, RunOptions::default())?;
        report.render(&mut TerminalOutput::new());

        if report.is_mismatch() {
            std::process::exit(1);
        }
        Ok(())
    }
}
