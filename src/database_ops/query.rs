use sqlx::Row;
use tracing::{info, instrument};

use crate::error::PipelineError;
use crate::util::db::Db;

#[derive(Debug, Clone)]
pub struct SampleRow {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub country: Option<String>,
    pub rating: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QueryReport {
    pub total_rows: i64,
    pub sample: Vec<SampleRow>,
}

/// Run the two fixed read queries against the loaded table: a full row
/// count and a bounded sample of four columns.
#[instrument(skip(db))]
pub async fn report(db: &Db, table: &str, sample_rows: i64) -> Result<QueryReport, PipelineError> {
    let wrap = |source: sqlx::Error| PipelineError::QueryFailed {
        table: table.to_string(),
        source,
    };

    let total_rows: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{table}\""))
        .persistent(false)
        .fetch_one(&db.pool)
        .await
        .map_err(wrap)?;

    let rows = sqlx::query(&format!(
        "SELECT title, \"type\", country, rating FROM \"{table}\" LIMIT {sample_rows}"
    ))
    .persistent(false)
    .fetch_all(&db.pool)
    .await
    .map_err(wrap)?;

    let sample: Vec<SampleRow> = rows
        .iter()
        .map(|r| SampleRow {
            title: r.get("title"),
            kind: r.get("type"),
            country: r.get("country"),
            rating: r.get("rating"),
        })
        .collect();

    info!(total_rows, table, "loaded table queried");
    for row in &sample {
        info!(
            title = row.title.as_deref().unwrap_or("-"),
            kind = row.kind.as_deref().unwrap_or("-"),
            country = row.country.as_deref().unwrap_or("-"),
            rating = row.rating.as_deref().unwrap_or("-"),
            "sample row"
        );
    }
    Ok(QueryReport { total_rows, sample })
}
