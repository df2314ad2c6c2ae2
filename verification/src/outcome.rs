//! Per-entry verification outcomes.

use eduverify_types::{ExamCategory, RollNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason reported for a roll number absent from the score directory.
pub const INVALID_ROLL_NUMBER: &str = "Invalid Roll Number";

/// Outcome of verifying one candidate roll number.
///
/// A tagged union carrying exactly the fields valid for each case.
/// Outcomes are data, never control flow: a batch reports every entry and
/// never aborts early.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VerificationOutcome {
    /// The roll number resolved in the score directory and is unclaimed.
    Success {
        roll: RollNumber,
        name: String,
        percentile: Option<f64>,
        rank: Option<u32>,
        exam: ExamCategory,
    },
    /// Another institute already lists this roll number — the
    /// domain-significant integrity violation.
    Malpractice {
        roll: RollNumber,
        /// Display name of the institute holding the prior claim.
        claimed_by: String,
    },
    /// The roll number is not in the score directory.
    Error { roll: RollNumber, reason: String },
}

impl VerificationOutcome {
    /// The candidate roll number this outcome belongs to.
    pub fn roll(&self) -> &RollNumber {
        match self {
            Self::Success { roll, .. } | Self::Malpractice { roll, .. } | Self::Error { roll, .. } => {
                roll
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_malpractice(&self) -> bool {
        matches!(self, Self::Malpractice { .. })
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { roll, name, exam, .. } => {
                write!(f, "{roll}: verified — {name} ({exam})")
            }
            Self::Malpractice { roll, claimed_by } => {
                write!(
                    f,
                    "{roll}: Double Claim Detected! Already listed by \"{claimed_by}\"."
                )
            }
            Self::Error { roll, reason } => write!(f, "{roll}: {reason}"),
        }
    }
}
