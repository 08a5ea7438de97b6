// Row normalization — raw header/value maps to ExamRecords.

use crate::error::{ExamTopicsError, Result};
use crate::topics::models::ExamRecord;

use super::loader::{ParsedFiles, RawRow};

pub const COL_NAME: &str = "Name";
pub const COL_PART: &str = "Part";
pub const COL_SEASON: &str = "Season";
pub const COL_YEAR: &str = "Year";
pub const COL_SPECIFIED_TOPIC: &str = "SpecifiedTopic";
pub const COL_TOPIC: &str = "Topic";

/// Separator between tags in the SpecifiedTopic column.
pub const TOPIC_SEPARATOR: &str = ", ";

/// Normalize one row. `file` and `row` (1-based data line) label errors.
pub fn normalize_row(raw: &RawRow, file: &str, row: usize) -> Result<ExamRecord> {
    let column = |column: &'static str| {
        raw.get(column)
            .cloned()
            .ok_or_else(|| ExamTopicsError::MalformedRecord {
                file: file.to_string(),
                row,
                column,
            })
    };

    let specified_topics = column(COL_SPECIFIED_TOPIC)?
        .split(TOPIC_SEPARATOR)
        .map(str::to_string)
        .collect();

    Ok(ExamRecord {
        name: column(COL_NAME)?,
        part: column(COL_PART)?,
        season: column(COL_SEASON)?,
        year: column(COL_YEAR)?,
        topic: column(COL_TOPIC)?,
        specified_topics,
    })
}

/// Flatten all parsed files into one record list, file by file in map order.
///
/// Stops at the first malformed row.
pub fn normalize_files(files: &ParsedFiles) -> Result<Vec<ExamRecord>> {
    let mut records = Vec::new();
    for (file, rows) in files {
        for (i, raw) in rows.iter().enumerate() {
            records.push(normalize_row(raw, file, i + 1)?);
        }
    }
    Ok(records)
}
