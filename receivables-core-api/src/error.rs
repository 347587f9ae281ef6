use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend rejected the session token. Callers sign the user out.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status onto the flat error taxonomy.
    pub fn from_status(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400 | 422 => ApiError::ValidationError(message),
            _ => ApiError::Status { code, message },
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_known_codes() {
        assert!(ApiError::from_status(403, "expired").is_forbidden());
        assert!(matches!(ApiError::from_status(404, "gone"), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(422, "bad"), ApiError::ValidationError(_)));
        match ApiError::from_status(502, "upstream") {
            ApiError::Status { code, message } => {
                assert_eq!(code, 502);
                assert_eq!(message, "upstream");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
