//! The registry itself: institute list, registration, roster appends.

use crate::error::RegistryError;
use eduverify_types::{Fee, Institute, InstituteId, RollNumber, Student};
use serde::{Deserialize, Serialize};

/// Rating assigned to a freshly registered institute, before any reviews.
const DEFAULT_RATING: f64 = 4.5;

/// Input for registering a new institute.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewInstitute {
    pub name: String,
    pub location: String,
    pub fee: Fee,
    pub phone: String,
    pub hostel: bool,
}

/// The authoritative, process-local collection of institutes.
///
/// All state is volatile; nothing persists between runs. Institute ids
/// come from a monotonic counter and stay unique for the registry's
/// lifetime.
#[derive(Clone, Debug)]
pub struct Registry {
    institutes: Vec<Institute>,
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            institutes: Vec::new(),
            next_id: 1,
        }
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from pre-existing institutes.
    ///
    /// The id counter starts past the largest numeric id present, so
    /// subsequent registrations never collide with seeded ids.
    pub fn with_institutes(institutes: Vec<Institute>) -> Self {
        let next_id = institutes
            .iter()
            .filter_map(|i| i.id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self {
            institutes,
            next_id,
        }
    }

    /// Register a new institute.
    ///
    /// Name, location, and phone must be non-empty. The institute starts
    /// with an empty roster and the default rating.
    pub fn register(&mut self, data: NewInstitute) -> Result<&Institute, RegistryError> {
        if data.name.trim().is_empty() {
            return Err(RegistryError::MissingField("name"));
        }
        if data.location.trim().is_empty() {
            return Err(RegistryError::MissingField("location"));
        }
        if data.phone.trim().is_empty() {
            return Err(RegistryError::MissingField("phone"));
        }

        let id = InstituteId::new(self.next_id.to_string());
        self.next_id += 1;

        tracing::info!(institute = %id, name = %data.name, "registering institute");
        self.institutes.push(Institute {
            id,
            name: data.name,
            location: data.location,
            fee: data.fee,
            phone: data.phone,
            hostel: data.hostel,
            rating: DEFAULT_RATING,
            students: Vec::new(),
        });
        Ok(self.institutes.last().expect("just pushed"))
    }

    /// Append a student to an institute's roster, preserving insertion
    /// order.
    ///
    /// Callers must have confirmed via the verifier that the roll number
    /// is not claimed elsewhere; this method does not check.
    pub fn append_student(
        &mut self,
        institute_id: &InstituteId,
        student: Student,
    ) -> Result<&Institute, RegistryError> {
        let institute = self
            .institutes
            .iter_mut()
            .find(|i| &i.id == institute_id)
            .ok_or_else(|| RegistryError::InstituteNotFound(institute_id.to_string()))?;
        tracing::debug!(
            institute = %institute_id,
            roll = %student.roll,
            "appending student to roster"
        );
        institute.students.push(student);
        Ok(institute)
    }

    /// All institutes in registration order.
    pub fn institutes(&self) -> &[Institute] {
        &self.institutes
    }

    /// Look up one institute by id.
    pub fn get(&self, id: &InstituteId) -> Option<&Institute> {
        self.institutes.iter().find(|i| &i.id == id)
    }

    /// Find the institute (other than `exclude`, if given) whose roster
    /// claims the roll number.
    ///
    /// This is the cross-roster scan behind double-claim detection. The
    /// claiming institute excludes itself so that re-verifying its own
    /// students is not flagged.
    pub fn find_claim(
        &self,
        roll: &RollNumber,
        exclude: Option<&InstituteId>,
    ) -> Option<&Institute> {
        self.institutes
            .iter()
            .filter(|i| exclude != Some(&i.id))
            .find(|i| i.claims(roll))
    }
}
