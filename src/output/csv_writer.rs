// CSV export of the aggregated topic analytics.
//
// List-valued fields are written as a single cell with the elements joined
// by ',' and the writer quotes the cell when needed. The file does not end
// with a newline.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{ExamTopicsError, Result};
use crate::topics::models::TopicAnalytic;

pub const CSV_EXTENSION: &str = ".csv";

/// Delimiter used for the output file when the caller does not choose one.
pub const DEFAULT_OUTPUT_DELIMITER: u8 = b',';

/// Flat row shape of a TopicAnalytic. Field order is the column order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticRow<'a> {
    name: &'a str,
    related_tasks: String,
    related_years: String,
    topic: &'a str,
    count: u32,
    probability: &'a str,
}

impl<'a> From<&'a TopicAnalytic> for AnalyticRow<'a> {
    fn from(item: &'a TopicAnalytic) -> Self {
        Self {
            name: &item.name,
            related_tasks: item.related_tasks.join(","),
            related_years: item.related_years.join(","),
            topic: &item.topic,
            count: item.count,
            probability: &item.probability,
        }
    }
}

/// `filename` with ".csv" appended unless it already ends with it (case-sensitive).
pub fn with_csv_extension(filename: &str) -> String {
    if filename.ends_with(CSV_EXTENSION) {
        filename.to_string()
    } else {
        format!("{filename}{CSV_EXTENSION}")
    }
}

/// Render analytics as delimited text with a header row.
pub fn render_records(records: &[TopicAnalytic], delimiter: u8, path: &Path) -> Result<Vec<u8>> {
    let write_err = |source: csv::Error| ExamTopicsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(AnalyticRow::from(record)).map_err(write_err)?;
    }

    let mut data = writer
        .into_inner()
        .map_err(|e| write_err(csv::Error::from(e.into_error())))?;

    // Rows are separated, not terminated: no newline after the last row
    if data.last() == Some(&b'\n') {
        data.pop();
    }
    Ok(data)
}

/// Ensure a directory exists, creating parents as needed.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    info!(dir = %dir.display(), "Start writing directory");
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ExamTopicsError::DirectoryWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    info!(dir = %dir.display(), "End writing directory");
    Ok(())
}

/// Write analytics to `<dir>/<filename>.csv`. Returns the written path.
pub async fn write_records(
    filename: &str,
    dir: &Path,
    records: &[TopicAnalytic],
    delimiter: u8,
) -> Result<PathBuf> {
    ensure_dir(dir).await?;

    let path = dir.join(with_csv_extension(filename));
    let data = render_records(records, delimiter, &path)?;
    tokio::fs::write(&path, data)
        .await
        .map_err(|source| ExamTopicsError::Write {
            path: path.clone(),
            source: csv::Error::from(source),
        })?;

    info!(path = %path.display(), rows = records.len(), "Wrote topic analytics");
    Ok(path)
}
