// Label canonicalizer trait — swap-ready abstraction.
//
// The aggregator only needs to know which labels a record counts towards.
// The default implementation is CanonicalRules (promotion + pair merge), but
// a different folding strategy can be plugged in without touching the
// counting code.

use super::models::ExamRecord;

/// Trait for turning a record's topic tags into the labels it is counted under.
pub trait LabelCanonicalizer {
    /// Labels this record contributes to, in order. Usually exactly one.
    fn labels(&self, record: &ExamRecord) -> Vec<String>;
}
