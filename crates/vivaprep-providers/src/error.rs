//! Embedding backend error types.
//!
//! A failed embedding call is fatal to the session — there is no retry
//! layer — but typed variants keep the console messages precise.

use thiserror::Error;

/// Errors that can occur when calling an embedding backend.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested embedding model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}
