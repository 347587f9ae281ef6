use receivables_core_api::ApiError;
use thiserror::Error;

use crate::edit::completeness::IncompleteRecord;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Incomplete(#[from] IncompleteRecord),

    #[error("No {0} is open for editing")]
    NotOpen(&'static str),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for SessionError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        SessionError::Storage(err.to_string())
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
