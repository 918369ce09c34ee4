use std::path::PathBuf;

use thiserror::Error;

/// Stage-level failures. Per-row data problems are never errors here; they
/// degrade to column defaults during normalization.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source file not found: {path}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source file is not parseable as delimited text")]
    SourceMalformed(#[from] csv::Error),

    #[error("load into table {table} failed")]
    LoadFailed {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("query against table {table} failed")]
    QueryFailed {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}

impl PipelineError {
    /// Extract-stage errors abort the run; load/query errors are reported
    /// and absorbed so the pipeline always reaches its terminal state.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PipelineError::SourceNotFound { .. } | PipelineError::SourceMalformed(_)
        )
    }
}
