//! MCP error types.

use thiserror::Error;

/// Transport-level failures of the MCP server.
///
/// Protocol-level problems (bad JSON, unknown methods) are answered with
/// JSON-RPC error responses and never surface here.
#[derive(Debug, Error)]
pub enum McpError {
    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McpError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        assert_eq!(err.to_string(), "IO error: stdout closed");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(McpError::from(json_err), McpError::Json(_)));
    }
}
