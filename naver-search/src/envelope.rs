//! Uniform result envelope.

use naver_search_mcp::CallToolResult;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Outcome of one operation.
///
/// `data` is present exactly when `success` is true, `error_message`
/// exactly when it is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Raw upstream response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    /// Failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ResultEnvelope {
    /// A successful outcome.
    #[must_use]
    pub fn success(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_message: None,
        }
    }

    /// A failed outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error_message: Some(message.into()),
        }
    }

    /// Render for the tool transport.
    ///
    /// Success becomes the pretty-printed data, failure becomes
    /// `Error: <message>` flagged as an error.
    #[must_use]
    pub fn into_call_tool_result(self) -> CallToolResult {
        if self.success {
            let data = self.data.unwrap_or(JsonValue::Null);
            let text = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
            CallToolResult::text(text)
        } else {
            let message = self.error_message.unwrap_or_default();
            CallToolResult::error(format!("Error: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_envelope_wire_shape() {
        assert_eq!(
            serde_json::to_value(ResultEnvelope::success(json!({"items": []}))).unwrap(),
            json!({"success": true, "data": {"items": []}})
        );
        assert_eq!(
            serde_json::to_value(ResultEnvelope::failure("Unknown operation: x")).unwrap(),
            json!({"success": false, "errorMessage": "Unknown operation: x"})
        );
    }

    #[test]
    fn test_failure_renders_error_prefix() {
        let result = ResultEnvelope::failure("Naver API Error: Invalid client").into_call_tool_result();
        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("Error: Naver API Error: Invalid client"));
    }

    #[test]
    fn test_success_renders_pretty_json() {
        let result = ResultEnvelope::success(json!({"total": 1})).into_call_tool_result();
        assert!(!result.is_error);
        assert_eq!(result.first_text(), Some("{\n  \"total\": 1\n}"));
    }
}
