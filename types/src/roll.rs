//! Roll-number identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An examination roll number, as issued by the testing agency.
///
/// Always stored trimmed. The uniqueness property that matters — at most
/// one institute may claim a given roll number — is enforced by the
/// verification crate, not by this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollNumber(String);

impl RollNumber {
    /// Parse a candidate string into a roll number.
    ///
    /// Trims surrounding whitespace. Returns `None` for empty or
    /// whitespace-only input — callers that process batches silently drop
    /// such entries rather than reporting them as errors.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Return the raw roll-number string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
