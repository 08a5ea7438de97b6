// Colored terminal output for topic reports.
//
// main.rs delegates all terminal formatting here.

use std::path::Path;

use colored::Colorize;

use super::truncate_chars;
use crate::topics::aggregate::TopicReport;

/// Widest label shown in the table before truncation.
const LABEL_WIDTH: usize = 40;

/// Display the ranked topic table. `top` limits the number of rows.
pub fn display_topic_report(report: &TopicReport, top: Option<usize>) {
    if report.analytics.is_empty() {
        println!("No topics found. Check that the input directory contains exam files.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Topic Report ({} topics across {} exams, {} tasks) ===",
            report.analytics.len(),
            report.total_exam_count,
            report.record_count
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<42} {:>5}  {:>8}  {:<20}",
        "Rank".dimmed(),
        "Topic".dimmed(),
        "Count".dimmed(),
        "Prob".dimmed(),
        "Area".dimmed(),
    );
    println!("  {}", "-".repeat(86).dimmed());

    let ranked = report.ranked();
    let shown = top.unwrap_or(ranked.len()).min(ranked.len());

    for (i, item) in ranked.iter().take(shown).enumerate() {
        let label = truncate_chars(&item.name, LABEL_WIDTH);
        let probability = colorize_probability(&item.probability, item.count, report);

        println!(
            "  {:>4}. {:<42} {:>5}  {:>8}  {:<20}",
            i + 1,
            label,
            item.count,
            probability,
            truncate_chars(&item.topic, 20).dimmed(),
        );
    }

    if shown < ranked.len() {
        println!(
            "\n  {}",
            format!("... {} more topics (use --top to show more)", ranked.len() - shown).dimmed()
        );
    }
    println!();
}

/// Short summary after the CSV has been written.
pub fn display_write_summary(report: &TopicReport, path: &Path) {
    println!(
        "{} {} topics from {} tasks ({} exams)",
        "Wrote".green().bold(),
        report.analytics.len(),
        report.record_count,
        report.total_exam_count
    );
    println!("  {}", path.display().to_string().dimmed());
}

/// Color a probability cell by how many exams the topic showed up in.
fn colorize_probability(
    probability: &str,
    count: u32,
    report: &TopicReport,
) -> colored::ColoredString {
    let total = report.total_exam_count.max(1) as f64;
    let share = count as f64 / total;
    if share >= 0.5 {
        probability.bright_green()
    } else if share >= 0.25 {
        probability.bright_yellow()
    } else {
        probability.normal()
    }
}
