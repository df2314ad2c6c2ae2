//! Authoritative institute registry.
//!
//! Owns the list of institutes and their rosters of verified students.
//! Pure storage by design: [`Registry::append_student`] performs no
//! uniqueness check — cross-institute claim enforcement lives in the
//! verification crate, which must be consulted before every append.

pub mod error;
pub mod registry;
pub mod seed;

pub use error::RegistryError;
pub use registry::{NewInstitute, Registry};
pub use seed::seeded;
