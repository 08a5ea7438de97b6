// Label canonicalization rules.
//
// Two folding rules keep near-duplicate tags in one bucket:
//
// 1. Promotion: if a record carries one of the priority tags ("Question",
//    "Basic-Math"), the first matching *rule* wins and every other tag is
//    folded under it, e.g. ["Question", "Loops"] -> "Question: Loops".
//    With no other tags the broad topic is used: "Question: Arrays".
// 2. Pair merge: a tag set containing both "Struktogramm" and "Pseudocode"
//    collapses to "Struktogramm/Pseudocode".

use super::models::ExamRecord;
use super::traits::LabelCanonicalizer;

/// Configurable folding rules.
#[derive(Debug, Clone)]
pub struct CanonicalRules {
    /// Tags that absorb all other tags of a record, checked in this order
    pub priority_topics: Vec<String>,
    /// Two tags that are merged when they appear together
    pub merge_pair: (String, String),
    /// Label used for a merged pair
    pub merged_label: String,
}

impl Default for CanonicalRules {
    fn default() -> Self {
        Self {
            priority_topics: vec!["Question".to_string(), "Basic-Math".to_string()],
            merge_pair: ("Struktogramm".to_string(), "Pseudocode".to_string()),
            merged_label: "Struktogramm/Pseudocode".to_string(),
        }
    }
}

impl CanonicalRules {
    /// Apply the promotion rule. Returns the tags unchanged when no priority
    /// tag is present.
    pub fn promote(&self, tags: &[String], topic: &str) -> Vec<String> {
        let Some(specific) = self
            .priority_topics
            .iter()
            .find(|candidate| tags.contains(candidate))
        else {
            return tags.to_vec();
        };

        let remaining: Vec<&str> = tags
            .iter()
            .filter(|tag| *tag != specific)
            .map(String::as_str)
            .collect();

        if remaining.is_empty() {
            vec![format!("{specific}: {topic}")]
        } else {
            vec![format!("{specific}: {}", remaining.join(", "))]
        }
    }

    /// Apply the pair-merge rule.
    pub fn merge_pair(&self, names: Vec<String>) -> Vec<String> {
        let (a, b) = &self.merge_pair;
        if names.contains(a) && names.contains(b) {
            vec![self.merged_label.clone()]
        } else {
            names
        }
    }
}

impl LabelCanonicalizer for CanonicalRules {
    fn labels(&self, record: &ExamRecord) -> Vec<String> {
        let promoted = self.promote(&record.specified_topics, &record.topic);
        self.merge_pair(promoted)
    }
}
