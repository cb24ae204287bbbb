use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("options are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
