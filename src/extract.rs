use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::PipelineError;

/// One source row, exactly as named in the CSV header. Every value stays
/// raw text until normalization; empty cells deserialize to None.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

/// Read the whole source file into memory. Columns are mapped by header
/// name, so source column order does not matter; a missing column simply
/// yields absent values for the normalizer to fill.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::Reader::from_reader(BufReader::new(file));
    let mut rows: Vec<RawRow> = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }

    info!(rows = rows.len(), "source file extracted");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_rows_with_raw_values() {
        let f = write_csv(
            "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description\n\
             s1,Movie,Dust,Ann Lee,Bo Chan,US,\"September 25, 2021\",2021,PG,90 min,\"Drama, Indie\",A story.\n\
             s2,TV Show,Tides,,,,,abc,,3 Seasons,Drama,Another.\n",
        );
        let rows = read_rows(f.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].show_id.as_deref(), Some("s1"));
        assert_eq!(rows[0].kind.as_deref(), Some("Movie"));
        assert_eq!(rows[0].duration.as_deref(), Some("90 min"));
        // Empty cells come through as absent, not empty strings.
        assert_eq!(rows[1].director, None);
        assert_eq!(rows[1].release_year.as_deref(), Some("abc"));
    }

    #[test]
    fn missing_columns_become_absent_values() {
        let f = write_csv("show_id,title\ns1,Dust\n");
        let rows = read_rows(f.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title.as_deref(), Some("Dust"));
        assert_eq!(rows[0].duration, None);
        assert_eq!(rows[0].rating, None);
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let err = read_rows(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::SourceNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn ragged_file_is_source_malformed() {
        let f = write_csv("show_id,title\ns1,Dust,extra,fields,here\n");
        let err = read_rows(f.path()).unwrap_err();
        assert!(matches!(err, PipelineError::SourceMalformed(_)));
        assert!(err.is_fatal());
    }
}
