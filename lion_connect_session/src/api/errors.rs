use thiserror::Error;

use crate::api::types::FieldError;

/// Failures of the backend operations consumed by the session
/// subsystem. Only connectivity failures are eligible for the single
/// automatic retry; semantic failures never are.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Login rejected the credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token recovery found no usable refresh credential.
    #[error("No recoverable session")]
    NoSession,

    /// Signup fields rejected by the backend.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connectivity failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Any other unexpected response status.
    #[error("Unexpected status: {0}")]
    Status(u16),
}

impl ApiError {
    /// Connectivity failures may be retried once; everything else is
    /// final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}
