//! Fundamental types for EduVerify.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, exam categories, fee amounts, students, and
//! institutes.

pub mod exam;
pub mod fee;
pub mod institute;
pub mod roll;
pub mod student;

pub use exam::ExamCategory;
pub use fee::Fee;
pub use institute::{Institute, InstituteId};
pub use roll::RollNumber;
pub use student::Student;
