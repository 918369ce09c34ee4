use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use catalog_etl::config::{Cli, PipelineConfig};
use catalog_etl::util::db::Db;
use catalog_etl::util::env as env_util;
use catalog_etl::run_catalog_pipeline;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env first so RUST_LOG is picked up
    env_util::init_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = PipelineConfig::resolve(Cli::parse()).context("configuration")?;
    info!(
        source = %cfg.source.display(),
        table = %cfg.table,
        db = %env_util::redact_dsn(&cfg.database_url),
        "starting catalog pipeline"
    );

    let db = Db::connect(&cfg.database_url, 5).context("invalid database URL")?;
    let outcome = run_catalog_pipeline(&db, &cfg).await;

    // The pool is released on every exit path, success or not.
    db.close().await;

    match outcome {
        Ok(summary) if summary.success() => {
            info!(rows = summary.rows_loaded, "pipeline finished");
            Ok(ExitCode::SUCCESS)
        }
        Ok(summary) => {
            warn!(
                load_ok = summary.load_ok,
                query_ok = summary.query_ok,
                "pipeline finished with absorbed stage failures"
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("extract stage failed"),
    }
}
