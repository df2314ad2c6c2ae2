//! Annual fee amount with Indian-format display.
//!
//! Fees are stored as a whole-rupee integer rather than a display string,
//! so sorting compares numeric values directly. Display renders the Indian
//! digit grouping ("₹1,50,000"); parsing accepts any display-formatted
//! string and keeps only its digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An annual fee in whole rupees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fee(u64);

impl Fee {
    pub const ZERO: Self = Self(0);

    pub fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    pub fn rupees(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a display-formatted fee string by stripping every non-digit
    /// character.
    ///
    /// "₹1,50,000" parses to 150000. A string containing no digits parses
    /// to zero, which therefore sorts before any real fee.
    pub fn parse_display(s: &str) -> Self {
        let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        Self(digits.parse().unwrap_or(0))
    }
}

impl fmt::Display for Fee {
    /// Indian digit grouping: the last three digits form one group, every
    /// earlier group has two digits ("₹1,50,000", "₹21,00,000").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        if len <= 3 {
            return write!(f, "₹{digits}");
        }
        let (head, tail) = digits.split_at(len - 3);
        let mut grouped = String::new();
        let head_bytes = head.as_bytes();
        let mut i = 0;
        // Leading group may have a single digit; the rest have two.
        let first = head_bytes.len() % 2;
        if first == 1 {
            grouped.push(head_bytes[0] as char);
            i = 1;
        }
        while i < head_bytes.len() {
            if !grouped.is_empty() {
                grouped.push(',');
            }
            grouped.push(head_bytes[i] as char);
            grouped.push(head_bytes[i + 1] as char);
            i += 2;
        }
        write!(f, "₹{grouped},{tail}")
    }
}
