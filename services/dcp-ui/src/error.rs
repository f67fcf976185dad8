//! Error types for the DCP UI host

/// Errors that can occur in the DCP UI host
#[derive(Debug, thiserror::Error)]
pub enum DcpUiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for DCP UI operations
pub type Result<T> = std::result::Result<T, DcpUiError>;
