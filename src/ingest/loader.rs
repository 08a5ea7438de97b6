// Directory loader — reads every delimited file in a directory.
//
// Files are read and parsed one at a time, each fully into memory. A single
// unreadable or unparseable file fails the whole load; rows parsed from
// earlier files are dropped with it.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, error, info};

use crate::error::{ExamTopicsError, Result};

/// One data line of a delimited file: column name -> cell value.
pub type RawRow = HashMap<String, String>;

/// Parsed files keyed by file name, iterated in file name order.
pub type ParsedFiles = BTreeMap<String, Vec<RawRow>>;

/// Delimiter used when the caller does not choose one.
pub const DEFAULT_INPUT_DELIMITER: u8 = b';';

/// Parse delimited text with a header row into raw rows.
///
/// Rows shorter than the header get "" for the missing trailing columns.
/// Rows longer than the header are rejected. `file` is only used to label
/// errors.
pub fn parse_rows(data: &[u8], delimiter: u8, file: &str) -> Result<Vec<RawRow>> {
    let parse_err = |source: csv::Error| ExamTopicsError::FileParse {
        file: file.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers().map_err(parse_err)?.clone();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(parse_err)?;
        if record.len() > headers.len() {
            return Err(ExamTopicsError::ExtraFields {
                file: file.to_string(),
                row: i + 1,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(col, name)| (name.to_string(), record.get(col).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Read and parse a single delimited file.
pub async fn parse_file(path: &Path, delimiter: u8) -> Result<Vec<RawRow>> {
    let file = path.display().to_string();
    let delimiter_char = delimiter as char;
    info!(file = %file, delimiter = %delimiter_char, "Start reading file");

    let data = tokio::fs::read(path)
        .await
        .map_err(|source| ExamTopicsError::FileRead {
            file: file.clone(),
            source,
        })?;

    let rows = parse_rows(&data, delimiter, &file)?;
    info!(file = %file, rows = rows.len(), "Parsed rows");
    Ok(rows)
}

/// List the regular files in `dir`, sorted by name.
pub async fn list_files(dir: &Path) -> Result<Vec<String>> {
    info!(dir = %dir.display(), "Start reading directory");

    let read_err = |source: std::io::Error| ExamTopicsError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let file_type = entry.file_type().await.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !file_type.is_file() {
            debug!(entry = %name, "Skipping non-file entry");
            continue;
        }
        names.push(name);
    }
    names.sort();

    info!(dir = %dir.display(), files = ?names, "End reading directory");
    Ok(names)
}

/// Read every file in `dir` as delimited text.
///
/// `None` falls back to `DEFAULT_INPUT_DELIMITER`.
pub async fn read_directory_files(dir: &Path, delimiter: Option<u8>) -> Result<ParsedFiles> {
    let delimiter = delimiter.unwrap_or(DEFAULT_INPUT_DELIMITER);
    let names = list_files(dir).await.inspect_err(|e| {
        error!(dir = %dir.display(), error = %e, "Reading directory failed");
    })?;

    let mut files = ParsedFiles::new();
    for name in names {
        let rows = parse_file(&dir.join(&name), delimiter)
            .await
            .inspect_err(|e| error!(error = %e, "Loading input files failed"))?;
        files.insert(name, rows);
    }

    Ok(files)
}
