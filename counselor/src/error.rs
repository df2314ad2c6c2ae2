use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounselorError {
    #[error("counselor request failed: {0}")]
    Request(String),

    #[error("counselor returned HTTP {status}")]
    Status { status: u16 },

    #[error("counselor reply could not be decoded: {0}")]
    Decode(String),
}
