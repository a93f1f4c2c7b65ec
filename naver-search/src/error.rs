//! Dispatch error type.

use naver_search_client::ClientError;
use naver_search_tools::SchemaError;
use thiserror::Error;

/// Why an operation did not produce data.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Unknown operation or invalid arguments. Nothing was sent upstream.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The upstream call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl DispatchError {
    /// Check whether the failure happened before any network activity.
    #[must_use]
    pub fn is_rejected_locally(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::Client(ClientError::NotInitialized))
    }
}

/// Result type for dispatch.
pub type DispatchResult<T> = Result<T, DispatchError>;
