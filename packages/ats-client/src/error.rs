//! Error types for the ATS API client.

use thiserror::Error;

/// Result type for ATS API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// ATS API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport error (request could not be sent, no response received)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server error (non-success response status)
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// Decode error (response body did not match the expected shape)
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
