//! Error types for validation.

use thiserror::Error;

use dvw_ingest::IngestError;
use dvw_model::ModelError;

/// Errors that prevent a validation run from starting.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A caller-supplied argument is out of range or malformed.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The play log could not be loaded.
    #[error(transparent)]
    Ingest(IngestError),
}

impl ValidateError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<IngestError> for ValidateError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::MissingColumns { .. } => Self::invalid_argument(err.to_string()),
            other => Self::Ingest(other),
        }
    }
}

impl From<ModelError> for ValidateError {
    fn from(err: ModelError) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
