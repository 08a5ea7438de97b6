// Record types flowing through the pipeline.
//
// ExamRecord is one normalized row of an input file. TopicAnalytic is one
// aggregated output row, keyed by its canonical label.

use serde::Serialize;

/// One exam task, normalized from a raw input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRecord {
    /// Task name, e.g. "Aufgabe 3"
    pub name: String,
    /// Exam part the task belongs to
    pub part: String,
    /// Exam season, e.g. "WS" or "SS"
    pub season: String,
    pub year: String,
    /// Broad topic of the task
    pub topic: String,
    /// Fine-grained topic tags in source order. Never empty.
    pub specified_topics: Vec<String>,
}

impl ExamRecord {
    /// Key identifying the exam this task was part of.
    pub fn exam_key(&self) -> String {
        format!("{} | {}", self.year, self.season)
    }

    /// Task identifier as listed in `TopicAnalytic::related_tasks`.
    pub fn task_label(&self) -> String {
        format!("{} [{}]", self.name, self.part)
    }
}

/// Aggregated statistics for a single canonical topic label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAnalytic {
    /// Canonical label (unique across a run)
    pub name: String,
    /// "<name> [<part>]" for every contributing task, duplicates kept
    pub related_tasks: Vec<String>,
    /// Year of every contributing task, duplicates kept
    pub related_years: Vec<String>,
    /// Broad topic of the first task that produced this label
    pub topic: String,
    pub count: u32,
    /// Share of exams containing this label, formatted as "NN.NN%"
    pub probability: String,
}

impl TopicAnalytic {
    /// Fresh analytic for a label first seen on `record`, with nothing counted yet.
    pub fn new(name: impl Into<String>, record: &ExamRecord) -> Self {
        Self {
            name: name.into(),
            related_tasks: Vec::new(),
            related_years: Vec::new(),
            topic: record.topic.clone(),
            count: 0,
            probability: String::new(),
        }
    }
}
