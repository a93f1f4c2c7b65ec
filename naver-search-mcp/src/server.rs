//! MCP server implementation.
//!
//! The server speaks newline-delimited JSON-RPC and delegates every tool
//! listing and tool call to a single [`ToolService`].

use crate::error::McpResult;
use crate::types::{
    CallToolParams, CallToolResult, Implementation, InitializeResult, JsonRpcError,
    JsonRpcMessage, JsonRpcResponse, ListToolsResult, McpTool, RequestId, ServerCapabilities,
    ToolsCapability, PROTOCOL_VERSION,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Backend answering `tools/list` and `tools/call`.
///
/// Unknown tool names are passed through to [`call`](Self::call), so the
/// service decides how to report them.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// Tools to advertise, in order.
    fn tools(&self) -> Vec<McpTool>;

    /// Invoke a tool.
    async fn call(&self, name: &str, arguments: JsonValue) -> CallToolResult;
}

/// MCP server exposing a [`ToolService`].
///
/// # Example
///
/// ```ignore
/// use naver_search_mcp::McpServer;
///
/// let server = McpServer::new("naver-search", env!("CARGO_PKG_VERSION"), service);
/// server.run_stdio().await?;
/// ```
pub struct McpServer {
    info: Implementation,
    service: Arc<dyn ToolService>,
    capabilities: ServerCapabilities,
}

impl McpServer {
    /// Create a new server.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        service: Arc<dyn ToolService>,
    ) -> Self {
        Self {
            info: Implementation::new(name, version),
            service,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
        }
    }

    /// Run the server on stdio.
    pub async fn run_stdio(&self) -> McpResult<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await
    }

    /// Serve line-delimited messages from `reader`, answering on `writer`.
    ///
    /// Returns at end of input.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(server = %self.info.name, version = %self.info.version, "MCP server listening");
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                break; // EOF
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(resp) = self.handle_message(trimmed).await {
                let json = serde_json::to_string(&resp)?;
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        debug!("Input closed, stopping MCP server");
        Ok(())
    }

    /// Handle one raw message. Notifications produce no response.
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        let value: JsonValue = match serde_json::from_str(message) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Unparsable message");
                return Some(JsonRpcResponse::error(
                    0,
                    JsonRpcError::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let request = match serde_json::from_value::<JsonRpcMessage>(value) {
            Ok(JsonRpcMessage::Request(request)) => request,
            Ok(JsonRpcMessage::Notification(notification)) => {
                debug!(method = %notification.method, "Notification received");
                return None;
            }
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    0,
                    JsonRpcError::INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        debug!(method = %request.method, "Request received");
        match request.method.as_str() {
            "initialize" => {
                let result = InitializeResult {
                    protocol_version: PROTOCOL_VERSION.to_string(),
                    capabilities: self.capabilities.clone(),
                    server_info: self.info.clone(),
                    instructions: None,
                };
                Some(JsonRpcResponse::success(request.id, result))
            }
            "ping" => Some(JsonRpcResponse::success(request.id, serde_json::json!({}))),
            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.service.tools(),
                    next_cursor: None,
                };
                Some(JsonRpcResponse::success(request.id, result))
            }
            "tools/call" => Some(self.handle_call(request.id, request.params).await),
            _ => Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        }
    }

    async fn handle_call(&self, id: RequestId, params: Option<JsonValue>) -> JsonRpcResponse {
        let params: CallToolParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        JsonRpcError::INVALID_PARAMS,
                        format!("Invalid params: {e}"),
                    );
                }
            },
            None => return JsonRpcResponse::error(id, JsonRpcError::INVALID_PARAMS, "Missing params"),
        };

        let result = self.service.call(&params.name, params.arguments).await;
        JsonRpcResponse::success(id, result)
    }

    /// Get server info.
    pub fn info(&self) -> &Implementation {
        &self.info
    }
}
