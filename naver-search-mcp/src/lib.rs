//! # naver-search-mcp
//!
//! Model Context Protocol (MCP) server transport for naver-search.
//!
//! MCP frames tool discovery and invocation as JSON-RPC 2.0 messages. This
//! crate reads newline-delimited messages from stdin, answers on stdout and
//! hands `tools/list` and `tools/call` to a [`ToolService`].
//!
//! ## Core Concepts
//!
//! - **[`McpServer`]**: stdio JSON-RPC loop
//! - **[`ToolService`]**: the backend that lists and executes tools
//! - **[`CallToolResult`]**: text content plus an `isError` flag
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use naver_search_mcp::{CallToolResult, McpServer, McpTool, ToolService};
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl ToolService for Echo {
//!     fn tools(&self) -> Vec<McpTool> {
//!         vec![McpTool::new("echo", serde_json::json!({"type": "object"}))]
//!     }
//!
//!     async fn call(&self, _name: &str, arguments: serde_json::Value) -> CallToolResult {
//!         CallToolResult::text(arguments.to_string())
//!     }
//! }
//!
//! # async fn run() -> naver_search_mcp::McpResult<()> {
//! McpServer::new("echo-server", "0.1.0", Arc::new(Echo)).run_stdio().await
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod server;
pub mod types;

pub use error::{McpError, McpResult};
pub use server::{McpServer, ToolService};
pub use types::{
    CallToolParams, CallToolResult, Implementation, InitializeResult, JsonRpcError,
    JsonRpcMessage, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, ListToolsResult,
    McpTool, RequestId, ServerCapabilities, ToolResultContent, ToolsCapability,
    PROTOCOL_VERSION,
};
