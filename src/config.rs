use std::env;
use std::path::PathBuf;

use crate::error::{ExamTopicsError, Result};

pub const DEFAULT_INPUT_DIR: &str = "./files/input";
pub const DEFAULT_OUTPUT_DIR: &str = "./files/output";
pub const DEFAULT_OUTPUT_FILE: &str = "analytics";

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so a bare run reads `./files/input` and writes
/// `./files/output/analytics.csv`. The .env file is loaded at startup via
/// dotenvy; CLI flags override individual values afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the exam CSV files
    pub input_dir: PathBuf,
    /// Delimiter of the input files (default ',')
    pub input_delimiter: u8,
    /// Directory the analytics file is written to (created if missing)
    pub output_dir: PathBuf,
    /// File name of the analytics file; ".csv" is appended if absent
    pub output_file: String,
    /// Delimiter of the analytics file (default ',')
    pub output_delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            input_delimiter: b',',
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            output_delimiter: crate::output::csv_writer::DEFAULT_OUTPUT_DELIMITER,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let input_delimiter = match env::var("EXAMTOPICS_INPUT_DELIMITER") {
            Ok(value) => parse_delimiter("EXAMTOPICS_INPUT_DELIMITER", &value)?,
            Err(_) => defaults.input_delimiter,
        };
        let output_delimiter = match env::var("EXAMTOPICS_OUTPUT_DELIMITER") {
            Ok(value) => parse_delimiter("EXAMTOPICS_OUTPUT_DELIMITER", &value)?,
            Err(_) => defaults.output_delimiter,
        };

        Ok(Self {
            input_dir: env::var("EXAMTOPICS_INPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_dir),
            input_delimiter,
            output_dir: env::var("EXAMTOPICS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            output_file: env::var("EXAMTOPICS_OUTPUT_FILE").unwrap_or(defaults.output_file),
            output_delimiter,
        })
    }

    /// Check that the input directory exists.
    /// Call this before loading so a typo fails with a readable message.
    pub fn require_input_dir(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(ExamTopicsError::Config(format!(
                "input directory {} does not exist.\n\
                 Set EXAMTOPICS_INPUT_DIR or pass --input.",
                self.input_dir.display()
            )));
        }
        Ok(())
    }
}

/// Parse a delimiter setting. Must be exactly one ASCII character.
pub fn parse_delimiter(name: &str, value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(ExamTopicsError::Config(format!(
            "{name} must be a single ASCII character, got {value:?}"
        ))),
    }
}
