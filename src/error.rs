// Error types for the analytics pipeline.
//
// Every stage fails fast: the first error aborts the run and is surfaced to
// main, which adds context with anyhow.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, ExamTopicsError>;

#[derive(Error, Debug)]
pub enum ExamTopicsError {
    /// The input directory could not be listed
    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be read from disk
    #[error("Failed to read file {file}: {source}")]
    FileRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid delimited text
    #[error("Failed to parse file {file}: {source}")]
    FileParse {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A row has more fields than the header names
    #[error("Failed to parse file {file} (row {row}): expected at most {expected} fields, found {found}")]
    ExtraFields {
        file: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row is missing one of the required columns
    #[error("Malformed record in {file} (row {row}): missing column '{column}'")]
    MalformedRecord {
        file: String,
        row: usize,
        column: &'static str,
    },

    /// The output directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be serialized or written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}
