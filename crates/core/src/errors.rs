use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No event store is configured")]
    NotConfigured,

    #[error("Storage error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl MeetError {
    /// Whether a failed read is worth issuing again.
    ///
    /// Only remote failures qualify; a missing row stays missing.
    pub fn is_transient(&self) -> bool {
        matches!(self, MeetError::Store(_))
    }
}

pub type MeetResult<T> = Result<T, MeetError>;
