//! Client error types.

use thiserror::Error;

/// Errors raised while calling the Naver API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request was attempted before credentials were supplied.
    #[error("Naver API client is not initialized; call initialize() with credentials first")]
    NotInitialized,

    /// The upstream call failed.
    ///
    /// `status` is `None` for transport failures that never produced a
    /// response.
    #[error("Naver API Error: {message}")]
    Upstream {
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Upstream `errorMessage`, or a description of the failure.
        message: String,
    },
}

impl ClientError {
    /// Create an upstream error from a response status.
    #[must_use]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create an upstream error for a request that produced no response.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            message: message.into(),
        }
    }

    /// HTTP status of the failed response, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::NotInitialized => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    /// An endpoint override is not a valid URL.
    #[error("Invalid URL in {var}: {source}")]
    InvalidUrl {
        /// Variable holding the bad value.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
}
