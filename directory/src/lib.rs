//! Official score directory — the external source of truth for roll numbers.
//!
//! Stands in for the national testing agency's record system. The rest of
//! the workspace only ever reads from it through the [`ScoreDirectory`]
//! trait; the bundled [`NtaDirectory`] is a fixed in-memory dataset.

pub mod record;

pub use record::ScoreRecord;

use eduverify_types::{ExamCategory, RollNumber};
use std::collections::HashMap;

/// Read-only lookup of official exam records by roll number.
///
/// The directory is authoritative and unmodifiable: a roll number absent
/// here is invalid no matter what any institute claims.
pub trait ScoreDirectory {
    fn lookup(&self, roll: &RollNumber) -> Option<&ScoreRecord>;
}

/// In-memory NTA mock dataset.
#[derive(Clone, Debug, Default)]
pub struct NtaDirectory {
    records: HashMap<String, ScoreRecord>,
}

impl NtaDirectory {
    /// An empty directory. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a directory from explicit records.
    pub fn from_records(entries: impl IntoIterator<Item = (String, ScoreRecord)>) -> Self {
        Self {
            records: entries.into_iter().collect(),
        }
    }

    /// The fixed mock dataset shipped with the application.
    pub fn mock() -> Self {
        let entry = |roll: &str, name: &str, percentile: f64, rank: u32, exam: ExamCategory| {
            (
                roll.to_string(),
                ScoreRecord {
                    name: name.to_string(),
                    percentile: Some(percentile),
                    rank: Some(rank),
                    exam,
                },
            )
        };
        Self::from_records([
            entry("240100123", "Rahul Sharma", 99.85, 1450, ExamCategory::JeeMains),
            entry("240100456", "Priya Singh", 99.92, 820, ExamCategory::JeeMains),
            entry("ADV24001", "Anish Kumar", 0.0, 450, ExamCategory::JeeAdvanced),
            entry("NEET2405", "Sneha Reddy", 99.78, 2100, ExamCategory::Neet),
            entry("NEET2409", "Mohit Jain", 99.99, 12, ExamCategory::Neet),
            entry("240999999", "Test Student", 95.00, 50000, ExamCategory::JeeMains),
        ])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScoreDirectory for NtaDirectory {
    fn lookup(&self, roll: &RollNumber) -> Option<&ScoreRecord> {
        self.records.get(roll.as_str())
    }
}
