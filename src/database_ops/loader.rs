use sqlx::QueryBuilder;
use tracing::{info, instrument};

use crate::error::PipelineError;
use crate::normalization::CatalogRecord;
use crate::util::db::Db;

// Postgres caps bind parameters at u16::MAX per statement; 13 columns per
// row keeps 1000-row chunks well under that.
const INSERT_CHUNK_ROWS: usize = 1000;

// "type" and "cast" are reserved words, hence the quoting throughout.
const INSERT_PREFIX: &str = "INSERT INTO ";
const COLUMN_LIST: &str = "(show_id, \"type\", title, director, \"cast\", country, \
     date_added, release_year, rating, duration_int, duration_type, listed_in, description) ";

fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE \"{table}\" (\n\
             show_id TEXT,\n\
             \"type\" TEXT,\n\
             title TEXT,\n\
             director TEXT,\n\
             \"cast\" TEXT,\n\
             country TEXT,\n\
             date_added DATE,\n\
             release_year INT,\n\
             rating TEXT,\n\
             duration_int DOUBLE PRECISION,\n\
             duration_type TEXT,\n\
             listed_in TEXT,\n\
             description TEXT\n\
         )"
    )
}

/// Replace the destination table with the given records: drop, recreate,
/// batch-insert. Not an upsert; each run owns the table outright.
#[instrument(skip(db, records), fields(rows = records.len()))]
pub async fn replace_table(
    db: &Db,
    table: &str,
    records: &[CatalogRecord],
) -> Result<(), PipelineError> {
    write_all(db, table, records)
        .await
        .map_err(|source| PipelineError::LoadFailed {
            table: table.to_string(),
            source,
        })?;
    info!(rows = records.len(), table, "catalog table replaced");
    Ok(())
}

async fn write_all(db: &Db, table: &str, records: &[CatalogRecord]) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("DROP TABLE IF EXISTS \"{table}\""))
        .persistent(false)
        .execute(&db.pool)
        .await?;
    sqlx::query(&create_table_sql(table))
        .persistent(false)
        .execute(&db.pool)
        .await?;

    for chunk in records.chunks(INSERT_CHUNK_ROWS) {
        let mut qb: QueryBuilder<'_, sqlx::Postgres> =
            QueryBuilder::new(format!("{INSERT_PREFIX}\"{table}\" {COLUMN_LIST}"));
        qb.push_values(chunk, |mut b, r| {
            b.push_bind(&r.show_id)
                .push_bind(&r.kind)
                .push_bind(&r.title)
                .push_bind(&r.director)
                .push_bind(&r.cast)
                .push_bind(&r.country)
                .push_bind(r.date_added)
                .push_bind(r.release_year)
                .push_bind(&r.rating)
                .push_bind(r.duration_int)
                .push_bind(&r.duration_type)
                .push_bind(&r.listed_in)
                .push_bind(&r.description);
        });
        qb.build().persistent(false).execute(&db.pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_quotes_reserved_column_names() {
        let sql = create_table_sql("catalog_titles");
        assert!(sql.contains("\"type\" TEXT"));
        assert!(sql.contains("\"cast\" TEXT"));
        assert!(sql.contains("date_added DATE"));
        assert!(sql.contains("release_year INT"));
        assert!(sql.contains("duration_int DOUBLE PRECISION"));
        // The raw duration column must not leak into the output schema.
        assert!(!sql.contains("duration TEXT"));
    }

    #[test]
    fn chunking_stays_under_bind_limit() {
        assert!(INSERT_CHUNK_ROWS * 13 < u16::MAX as usize);
    }
}
