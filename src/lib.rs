// examtopics: topic frequency analytics for exam task catalogues
//
// This is the library root. The pipeline runs ingest -> topics -> output;
// each module corresponds to one stage.

pub mod config;
pub mod error;
pub mod ingest;
pub mod output;
pub mod topics;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::topics::aggregate::TopicReport;

/// Load, normalize and aggregate every file in `input_dir`.
pub async fn analyze_dir(input_dir: &Path, delimiter: u8) -> Result<TopicReport> {
    let files = ingest::loader::read_directory_files(input_dir, Some(delimiter)).await?;
    let records = ingest::normalize::normalize_files(&files)?;
    info!(
        files = files.len(),
        records = records.len(),
        "Normalized exam records"
    );
    Ok(topics::aggregate::build_report(&records))
}

/// Run the full pipeline described by `config` and write the analytics file.
///
/// Returns the report together with the path that was written.
pub async fn run(config: &Config) -> Result<(TopicReport, PathBuf)> {
    let report = analyze_dir(&config.input_dir, config.input_delimiter).await?;
    let path = output::csv_writer::write_records(
        &config.output_file,
        &config.output_dir,
        &report.analytics,
        config.output_delimiter,
    )
    .await?;
    Ok((report, path))
}
