//! Error type for the coordination layer

use thiserror::Error;

use crate::api::ApiError;
use crate::session::SessionError;
use crate::storage::StorageError;

/// Errors surfaced by the auth operations. Carries the originating
/// layer's error so HTTP adapters can map variants precisely.
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Error from the backend API operations
    #[error("Api error: {0}")]
    Api(ApiError),

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(SessionError),

    /// Error from the durable client store
    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl CoordinationError {
    /// Log the error and return self, allowing method chaining where a
    /// call site wants explicit logging.
    pub fn log(self) -> Self {
        match &self {
            Self::Api(err) => tracing::error!("Api error: {}", err),
            Self::Session(err) => tracing::error!("Session error: {}", err),
            Self::Storage(err) => tracing::error!("Storage error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<ApiError> for CoordinationError {
    fn from(err: ApiError) -> Self {
        let error = Self::Api(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::Session(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<StorageError> for CoordinationError {
    fn from(err: StorageError) -> Self {
        let error = Self::Storage(err);
        tracing::error!("{}", error);
        error
    }
}
