use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::util::env::{env_opt, env_parse};

#[derive(Parser, Debug)]
#[command(name = "catalog-etl", version, about = "Media catalog CSV -> Postgres batch pipeline")]
pub struct Cli {
    /// Path to the source CSV file (falls back to SOURCE_CSV)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Optional override for the database URL
    #[arg(long)]
    pub db_url: Option<String>,

    /// Destination table name (falls back to CATALOG_TABLE)
    #[arg(long)]
    pub table: Option<String>,

    /// Rows to print in the post-load sample query
    #[arg(long)]
    pub sample_rows: Option<i64>,
}

/// Fully resolved run configuration. Built once at startup; stage logic
/// never reads the environment directly.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source: PathBuf,
    pub database_url: String,
    pub table: String,
    pub sample_rows: i64,
}

pub const DEFAULT_TABLE: &str = "catalog_titles";

impl PipelineConfig {
    pub fn resolve(cli: Cli) -> Result<Self> {
        let source = match cli.source.or_else(|| env_opt("SOURCE_CSV").map(PathBuf::from)) {
            Some(p) => p,
            None => bail!("no source file configured; pass --source or set SOURCE_CSV"),
        };

        let database_url = match cli.db_url {
            Some(url) => url,
            None => crate::util::env::db_url()
                .context("no database URL configured; pass --db-url or set DATABASE_URL / DB_* vars")?,
        };

        let table = cli
            .table
            .or_else(|| env_opt("CATALOG_TABLE"))
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());
        if !valid_table_name(&table) {
            bail!("invalid destination table name: {table:?}");
        }

        let sample_rows = cli
            .sample_rows
            .unwrap_or_else(|| env_parse("SAMPLE_ROWS", 5i64));
        if sample_rows < 0 {
            bail!("sample rows must be non-negative, got {sample_rows}");
        }

        Ok(Self {
            source,
            database_url,
            table,
            sample_rows,
        })
    }
}

// The table name is interpolated into DDL, so it is restricted to a plain
// identifier instead of relying on quoting alone.
fn valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
