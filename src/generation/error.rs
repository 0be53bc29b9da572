//! Error types for text generation.

use thiserror::Error;

/// Errors a generator can report.
///
/// The controller collapses all of these into one user-facing failure;
/// the detail is only ever logged.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key available.
    #[error("generator is not configured")]
    NotConfigured,

    /// Transport failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    ParseError(String),

    /// The response decoded but carried no text.
    #[error("response contained no text")]
    EmptyResponse,
}
