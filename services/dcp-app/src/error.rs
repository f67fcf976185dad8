//! Error types for the DCP frontend

/// Errors surfaced to the user when talking to the DCP API
///
/// Cloneable so a failed fetch can sit in reactive view state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Station {0} not found")]
    NotFound(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
