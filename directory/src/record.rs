//! Official exam record shape.

use eduverify_types::ExamCategory;
use serde::{Deserialize, Serialize};

/// One official record in the score directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Candidate name as registered with the testing agency.
    pub name: String,
    /// Overall percentile. JEE Advanced records carry 0 here; ranks are
    /// the meaningful figure for that exam.
    #[serde(default)]
    pub percentile: Option<f64>,
    /// All India Rank.
    #[serde(default)]
    pub rank: Option<u32>,
    pub exam: ExamCategory,
}
