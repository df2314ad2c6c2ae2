//! Generative-AI counselor integration.
//!
//! The counselor is an external collaborator: this crate's only domain
//! obligation is to summarize current registry state into a context
//! string; the reply text is passed through unvalidated. Any failure is
//! logged and replaced with an apology string — a counselor outage must
//! never crash the application.

pub mod client;
pub mod context;
pub mod error;

pub use client::{CounselorClient, CounselorConfig};
pub use context::build_context;
pub use error::CounselorError;
