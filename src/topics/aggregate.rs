// Topic aggregation — counts, related tasks/years and probabilities.
//
// The probability of a label is the share of distinct exams (year + season)
// it was counted in, relative to all exams in the input. It is recomputed
// from the integer count after every increment.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use super::canonical::CanonicalRules;
use super::models::{ExamRecord, TopicAnalytic};
use super::traits::LabelCanonicalizer;

/// Everything a run produces, before it is written anywhere.
#[derive(Debug, Clone)]
pub struct TopicReport {
    /// One entry per canonical label, in first-seen order
    pub analytics: Vec<TopicAnalytic>,
    /// Distinct (year, season) exams in the input
    pub total_exam_count: usize,
    /// Normalized records that went into the aggregation
    pub record_count: usize,
}

impl TopicReport {
    /// Analytics sorted by count (highest first). Equal counts keep their
    /// first-seen order.
    pub fn ranked(&self) -> Vec<&TopicAnalytic> {
        let mut ranked: Vec<&TopicAnalytic> = self.analytics.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

/// Number of distinct "<year> | <season>" exams across all records.
pub fn total_exam_count(records: &[ExamRecord]) -> usize {
    records
        .iter()
        .map(ExamRecord::exam_key)
        .collect::<HashSet<_>>()
        .len()
}

/// Format `count / total * 100` with two decimals and a trailing percent sign.
///
/// Computed in integer hundredths of a percent so the result never depends on
/// float rounding; exact halves round up.
pub fn format_probability(count: u32, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    let total = total as u64;
    let hundredths = (count as u64 * 20_000 + total) / (2 * total);
    format!("{}.{:02}%", hundredths / 100, hundredths % 100)
}

/// Aggregate records using the default folding rules.
pub fn aggregate(records: &[ExamRecord], total_exam_count: usize) -> Vec<TopicAnalytic> {
    aggregate_with(&CanonicalRules::default(), records, total_exam_count)
}

/// Aggregate records into one TopicAnalytic per canonical label.
pub fn aggregate_with(
    canonicalizer: &dyn LabelCanonicalizer,
    records: &[ExamRecord],
    total_exam_count: usize,
) -> Vec<TopicAnalytic> {
    let mut analytics: Vec<TopicAnalytic> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        for label in canonicalizer.labels(record) {
            let slot = match index.get(&label) {
                Some(&slot) => slot,
                None => {
                    debug!(label = %label, "New topic label");
                    analytics.push(TopicAnalytic::new(label.clone(), record));
                    index.insert(label, analytics.len() - 1);
                    analytics.len() - 1
                }
            };

            let item = &mut analytics[slot];
            item.related_years.push(record.year.clone());
            item.related_tasks.push(record.task_label());
            item.count += 1;
            item.probability = format_probability(item.count, total_exam_count);
        }
    }

    analytics
}

/// Count exams, then aggregate. The usual entry point for a run.
pub fn build_report(records: &[ExamRecord]) -> TopicReport {
    let total = total_exam_count(records);
    let analytics = aggregate(records, total);
    info!(
        records = records.len(),
        exams = total,
        topics = analytics.len(),
        "Aggregated topic analytics"
    );
    TopicReport {
        analytics,
        total_exam_count: total,
        record_count: records.len(),
    }
}
