use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("institute not found: {0}")]
    InstituteNotFound(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
