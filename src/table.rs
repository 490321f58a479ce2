//! Review table held as a polars `DataFrame`.

use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

use polars::prelude::{
    CsvReadOptions, CsvWriter, DataFrame, NamedFrom, PolarsError, SerReader, SerWriter, Series,
};
use thiserror::Error;
use tracing::info;

/// Column holding the review text.
pub const REVIEW_COLUMN: &str = "review_text";
/// Column added by the tagger.
pub const TAGS_COLUMN: &str = "tags";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("table error: {0}")]
    Polars(#[from] PolarsError),
    #[error("missing required column `{0}`")]
    MissingColumn(String),
    #[error("column `{column}` has {got} values but the table has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}

/// Whole review table, loaded before processing and written in one go.
///
/// Every column is read as text so values are written back exactly as they came in.
#[derive(Debug, Clone)]
pub struct ReviewTable {
    df: DataFrame,
}

impl ReviewTable {
    /// Read a comma separated file with a header row.
    pub fn read(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_reader(file).map_err(|err| match err {
            TableError::Io { source, .. } => TableError::Io {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        info!(path = %path.display(), rows = table.len(), "loaded review table");
        Ok(table)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TableError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| TableError::Io {
                path: "<reader>".to_string(),
                source,
            })?;
        if bytes.starts_with(UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;
        if df.get_column_index(REVIEW_COLUMN).is_none() {
            return Err(TableError::MissingColumn(REVIEW_COLUMN.to_string()));
        }
        Ok(Self { df })
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.df
            .get_column_names()
            .into_iter()
            .map(|name| &**name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Review text of every row in table order; missing values read as `""`.
    pub fn review_texts(&self) -> Result<Vec<&str>, TableError> {
        self.column(REVIEW_COLUMN)
            .ok_or_else(|| TableError::MissingColumn(REVIEW_COLUMN.to_string()))
    }

    /// Values of a text column, if present.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let values = self.df.column(name).ok()?.str().ok()?;
        Some(values.into_iter().map(|v| v.unwrap_or("")).collect())
    }

    /// Return a copy with `name` set to `values`, replacing an existing column of that name.
    pub fn with_column(&self, name: &str, values: Vec<String>) -> Result<Self, TableError> {
        if values.len() != self.len() {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected: self.len(),
                got: values.len(),
            });
        }
        let mut df = self.df.clone();
        df.with_column(Series::new(name.into(), values))?;
        Ok(Self { df })
    }

    /// Write the table, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<(), TableError> {
        let io_err = |source| TableError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut file = File::create(path).map_err(io_err)?;
        let mut df = self.df.clone();
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        info!(path = %path.display(), rows = df.height(), "saved review table");
        Ok(())
    }

    /// The first `n` rows rendered by polars.
    pub fn preview(&self, n: usize) -> String {
        self.df.head(Some(n)).to_string()
    }

    /// Same columns in the same order with equal values.
    pub fn same_contents(&self, other: &Self) -> bool {
        self.df.equals_missing(&other.df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "id,review_text,rating\n1,Great product,5\n2,Bad service,1\n";

    fn table(text: &str) -> ReviewTable {
        ReviewTable::from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn reads_reviews_in_order() {
        let table = table(SAMPLE);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.review_texts().unwrap(),
            vec!["Great product", "Bad service"]
        );
    }

    #[test]
    fn values_stay_textual() {
        let table = table("id,review_text\n007,x\n");
        assert_eq!(table.column("id").unwrap(), vec!["007"]);
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let table = table("\u{feff}review_text\nhalo\n");
        assert_eq!(table.review_texts().unwrap(), vec!["halo"]);
    }

    #[test]
    fn missing_review_column_is_rejected() {
        let err = ReviewTable::from_reader("id,text\n1,hello\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(ref c) if c == "review_text"));
    }

    #[test]
    fn with_column_appends_and_keeps_existing_columns() {
        let table = table(SAMPLE);
        let tagged = table
            .with_column(TAGS_COLUMN, vec!["#a".into(), "#b".into()])
            .unwrap();
        assert_eq!(
            tagged.column_names(),
            vec!["id", "review_text", "rating", "tags"]
        );
        assert_eq!(tagged.column("rating").unwrap(), vec!["5", "1"]);
        assert_eq!(tagged.column("tags").unwrap(), vec!["#a", "#b"]);
        assert_eq!(tagged.len(), table.len());
    }

    #[test]
    fn with_column_replaces_existing_values() {
        let table = table("review_text,tags\nx,old\n");
        let tagged = table.with_column(TAGS_COLUMN, vec!["new".into()]).unwrap();
        assert_eq!(tagged.column_names(), vec!["review_text", "tags"]);
        assert_eq!(tagged.column("tags").unwrap(), vec!["new"]);
    }

    #[test]
    fn with_column_rejects_wrong_length() {
        let err = table(SAMPLE).with_column(TAGS_COLUMN, vec![]).unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { expected: 2, got: 0, .. }));
    }

    #[test]
    fn write_quotes_fields_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        let tagged = table(SAMPLE)
            .with_column(TAGS_COLUMN, vec!["#a, #b, #c".into(), "#d".into()])
            .unwrap();
        tagged.write(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("id,review_text,rating,tags\n"));
        assert!(written.contains("\"#a, #b, #c\""));
        let reread = ReviewTable::read(&path).unwrap();
        assert!(reread.same_contents(&tagged));
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = ReviewTable::read(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn preview_limits_rows() {
        let preview = table(SAMPLE).preview(1);
        assert!(preview.contains("review_text"));
        assert!(preview.contains("Great product"));
        assert!(!preview.contains("Bad service"));
    }
}
