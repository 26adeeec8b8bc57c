//! Error types for the registration flow

use thiserror::Error;

/// Errors raised at the draft boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A field key that is not part of the registration form
    #[error("Unknown registration field: {0}")]
    UnknownField(String),

    /// A step number outside the wizard range
    #[error("Step {0} is outside the wizard range 1..=5")]
    StepOutOfRange(u8),
}

/// Errors that can occur while submitting a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Request could not be sent or the response could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The registration service answered with a non-success status
    #[error("Registration rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Another submission is still outstanding
    #[error("A submission is already in progress")]
    InFlight,

    /// The draft could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmissionError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            SubmissionError::Network(format!("Connection error: {}", err))
        } else if err.is_decode() {
            SubmissionError::Network(format!("Unreadable response body: {}", err))
        } else {
            SubmissionError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Serialization(err.to_string())
    }
}

/// Result type alias for submission operations
pub type SubmissionResult<T> = Result<T, SubmissionError>;
