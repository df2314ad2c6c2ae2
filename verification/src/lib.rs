//! Batch roll-number verification.
//!
//! The integrity core of EduVerify: classifies candidate roll numbers
//! against committed registry state and the official score directory,
//! and gates roster appends so that no roll number is ever claimed by
//! two institutes at once.

pub mod error;
pub mod outcome;
pub mod verifier;

pub use error::VerificationError;
pub use outcome::VerificationOutcome;
pub use verifier::{promote, verify_batch};
