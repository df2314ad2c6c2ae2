//! Verified student roster entry.

use crate::exam::ExamCategory;
use crate::roll::RollNumber;
use serde::{Deserialize, Serialize};

/// A verified student on an institute's roster.
///
/// Immutable once added; created only by promoting a successful
/// verification outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub roll: RollNumber,
    pub name: String,
    /// Display score, e.g. "99.85%tile" or "AIR 450".
    pub score: String,
    pub exam: ExamCategory,
}

impl Student {
    /// Format the display score from an official record.
    ///
    /// A positive percentile wins; otherwise the All India Rank is shown.
    /// JEE Advanced records carry percentile 0 and are displayed by rank.
    pub fn format_score(percentile: Option<f64>, rank: Option<u32>) -> String {
        match percentile {
            Some(p) if p > 0.0 => format!("{p}%tile"),
            _ => format!("AIR {}", rank.unwrap_or(0)),
        }
    }
}
