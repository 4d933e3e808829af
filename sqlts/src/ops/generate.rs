//! Generate operation: introspect, lower, serialize, then print, write or
//! verify.

use std::path::Path;

use eyre::{Context, Result, bail, eyre};
use sqlts_codegen::{
    GenerateOptions,
    pipeline::{Pipeline, SnapshotPlugin, TimingPlugin},
};
use sqlts_codegen_typescript::Generator;
use sqlts_config::Config;
use sqlts_core::read_if_exists;
use sqlts_introspect::{
    CatalogConnection, IntrospectOptions, Introspection, Introspector, adapter_for,
};
use tracing::info;

use crate::{
    connect,
    reports::{GenerateReport, GenerationResult},
};

/// Options for the generate operation that have no config key.
#[derive(Debug, Default)]
pub struct RunOptions<'a> {
    /// Where to write per-phase pipeline snapshots.
    pub snapshot_dir: Option<&'a Path>,
}

/// Execute the generate operation against the configured database.
pub fn generate(config: &Config, opts: RunOptions) -> Result<GenerateReport> {
    let url = config.database_url().ok_or_else(|| {
        eyre!("no database url: set `url` in sqlts.toml, pass --url or set DATABASE_URL")
    })?;
    let dialect = config.resolved_dialect().ok_or_else(|| {
        eyre!("cannot infer the dialect from the connection string: set `dialect` or pass --dialect")
    })?;

    let mut conn = connect::open(dialect, &url)?;
    generate_with(config, conn.as_mut(), opts)
}

/// Execute the generate operation over an open connection.
pub fn generate_with(
    config: &Config,
    conn: &mut dyn CatalogConnection,
    opts: RunOptions,
) -> Result<GenerateReport> {
    if config.verify && config.out_file.is_none() {
        bail!("verify mode needs an output file: set `out_file` or pass --out-file");
    }
    let dialect = config
        .resolved_dialect()
        .ok_or_else(|| eyre!("no dialect configured"))?;

    let adapter = adapter_for(dialect);
    let Introspection {
        metadata,
        default_schemas,
    } = Introspector::new(adapter.as_ref(), IntrospectOptions::from(config))
        .run(conn)
        .wrap_err("introspection failed")?;
    let table_count = metadata.tables().len();

    let mut pipeline = Pipeline::new().plugin(TimingPlugin::new());
    if let Some(dir) = opts.snapshot_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let ctx = pipeline
        .run(metadata, GenerateOptions::from_config(config, default_schemas))
        .wrap_err("code generation failed")?;

    let warnings: Vec<String> = ctx.warnings().map(ToString::to_string).collect();
    let generator = Generator::from_context(ctx)?;

    let result = match (&config.out_file, config.verify) {
        (Some(path), true) => {
            let existing = read_if_exists(path)?.ok_or_else(|| {
                eyre!("cannot verify '{}': the file does not exist", path.display())
            })?;
            GenerationResult::Verified {
                path: path.clone(),
                outcome: generator.verify(&existing),
            }
        }
        (Some(path), false) => GenerationResult::Written {
            path: path.clone(),
            result: generator
                .write(path)
                .wrap_err("failed to write declarations")?,
        },
        (None, _) => GenerationResult::Stdout(generator.serialize()),
    };

    info!(%dialect, tables = table_count, warnings = warnings.len(), "generation finished");

    Ok(GenerateReport {
        dialect,
        table_count,
        warnings,
        result,
    })
}
