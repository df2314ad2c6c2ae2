use eduverify_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("roll number {roll} is already claimed by \"{institute}\"")]
    AlreadyClaimed { roll: String, institute: String },

    #[error("outcome for {0} is not a verified success and cannot be promoted")]
    NotPromotable(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
