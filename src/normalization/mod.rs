pub mod date;
pub mod duration;
pub mod text;

use chrono::NaiveDate;
use tracing::info;

use crate::extract::RawRow;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_RATED: &str = "Not rated";

/// One cleaned catalog entry, immutable once handed to the loader. Field
/// names double as the (lowercase) output column names; the raw `duration`
/// column has been consumed into `duration_int` / `duration_type` and does
/// not exist here.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub show_id: Option<String>,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration_int: f64,
    pub duration_type: String,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

/// Apply the full normalization sequence to the extracted rows. Pure and
/// total: malformed values degrade to their column default or null, never
/// to an error.
pub fn normalize_rows(rows: Vec<RawRow>) -> Vec<CatalogRecord> {
    let records: Vec<CatalogRecord> = rows.into_iter().map(normalize_row).collect();
    info!(rows = records.len(), "rows normalized");
    records
}

fn normalize_row(row: RawRow) -> CatalogRecord {
    let presence = |v: &Option<String>| text::presence(v.as_deref());

    let (duration_int, duration_type) =
        duration::split(presence(&row.duration).as_deref().unwrap_or(""));

    CatalogRecord {
        show_id: presence(&row.show_id),
        kind: presence(&row.kind),
        title: presence(&row.title),
        director: presence(&row.director).unwrap_or_else(|| UNKNOWN.to_string()),
        cast: presence(&row.cast).unwrap_or_else(|| UNKNOWN.to_string()),
        country: presence(&row.country).unwrap_or_else(|| UNKNOWN.to_string()),
        date_added: presence(&row.date_added).and_then(|s| date::parse_added(&s)),
        release_year: presence(&row.release_year).and_then(|s| s.parse::<i32>().ok()),
        rating: presence(&row.rating).unwrap_or_else(|| NOT_RATED.to_string()),
        duration_int,
        duration_type,
        listed_in: presence(&row.listed_in).map(|s| s.replace(',', " |")),
        description: presence(&row.description),
    }
}
