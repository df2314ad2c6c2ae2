//! Institute entity and its opaque identifier.

use crate::fee::Fee;
use crate::student::Student;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique institute identifier, assigned by the registry at
/// creation time. Unique across all institutes for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstituteId(String);

impl InstituteId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstituteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coaching institute with its roster of verified students.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Institute {
    pub id: InstituteId,
    pub name: String,
    /// Free-text city name.
    pub location: String,
    pub fee: Fee,
    pub phone: String,
    pub hostel: bool,
    pub rating: f64,
    /// Roster in insertion order. Students are appended, never edited or
    /// removed.
    pub students: Vec<Student>,
}

impl Institute {
    /// Whether this institute's roster claims the given roll number.
    pub fn claims(&self, roll: &crate::roll::RollNumber) -> bool {
        self.students.iter().any(|s| &s.roll == roll)
    }
}
