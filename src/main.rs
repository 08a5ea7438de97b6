use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use examtopics::config::Config;

/// examtopics: topic frequency analytics for exam task catalogues.
///
/// Reads every exam CSV in a directory, folds topic tags into canonical
/// labels and reports how often each label appears across exams.
#[derive(Parser)]
#[command(name = "examtopics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate the input directory and write the analytics CSV
    Analyze {
        /// Input directory (overrides EXAMTOPICS_INPUT_DIR)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory (overrides EXAMTOPICS_OUTPUT_DIR)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output file name, ".csv" is appended if missing (overrides EXAMTOPICS_OUTPUT_FILE)
        #[arg(long)]
        file: Option<String>,
    },

    /// Print the topic analytics without writing a file
    Report {
        /// Input directory (overrides EXAMTOPICS_INPUT_DIR)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Only show the N most frequent topics
        #[arg(long)]
        top: Option<usize>,

        /// Print the analytics as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("examtopics=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("Invalid configuration")?;

    info!("Start program");

    match cli.command {
        Commands::Analyze {
            input,
            output,
            file,
        } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(file) = file {
                config.output_file = file;
            }
            config.require_input_dir()?;

            let (report, path) = examtopics::run(&config).await.with_context(|| {
                format!(
                    "Failed to build topic analytics from {}",
                    config.input_dir.display()
                )
            })?;
            examtopics::output::terminal::display_write_summary(&report, &path);
        }

        Commands::Report { input, top, json } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            config.require_input_dir()?;

            let report = examtopics::analyze_dir(&config.input_dir, config.input_delimiter)
                .await
                .with_context(|| {
                    format!(
                        "Failed to build topic analytics from {}",
                        config.input_dir.display()
                    )
                })?;

            if json {
                let ranked = report.ranked();
                let shown = top.unwrap_or(ranked.len()).min(ranked.len());
                println!("{}", serde_json::to_string_pretty(&ranked[..shown])?);
            } else {
                examtopics::output::terminal::display_topic_report(&report, top);
            }
        }
    }

    info!("End program");
    Ok(())
}
