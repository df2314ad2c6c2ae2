//! Exam category enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The national entrance examination a score belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamCategory {
    #[serde(rename = "JEE Mains")]
    JeeMains,
    #[serde(rename = "JEE Advanced")]
    JeeAdvanced,
    #[serde(rename = "NEET")]
    Neet,
}

impl ExamCategory {
    /// The display name used by the testing agencies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JeeMains => "JEE Mains",
            Self::JeeAdvanced => "JEE Advanced",
            Self::Neet => "NEET",
        }
    }
}

impl fmt::Display for ExamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_official_names() {
        let json = serde_json::to_string(&ExamCategory::JeeMains).unwrap();
        assert_eq!(json, "\"JEE Mains\"");
        let parsed: ExamCategory = serde_json::from_str("\"NEET\"").unwrap();
        assert_eq!(parsed, ExamCategory::Neet);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ExamCategory::JeeAdvanced.to_string(), "JEE Advanced");
    }
}
