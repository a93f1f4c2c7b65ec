//! # naver-search
//!
//! Naver Search and DataLab operations exposed as Model Context Protocol
//! tools.
//!
//! The crate ties the workspace together: [`OperationCatalog`] declares the
//! 21 operations and their input schemas, [`Dispatcher`] validates a call and
//! routes it to a [`NaverApi`] implementation, and every outcome is reported
//! as a [`ResultEnvelope`]. [`Dispatcher`] implements [`ToolService`], so it
//! plugs straight into an [`McpServer`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use naver_search::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = NaverClient::from_config(NaverConfig::from_env()?);
//! let dispatcher = Dispatcher::new(OperationCatalog::standard()?, Arc::new(client));
//!
//! let envelope = dispatcher
//!     .execute("search_news", serde_json::json!({"query": "rust"}))
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&envelope)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod dispatcher;
pub mod envelope;
pub mod error;
mod service;

pub use catalog::{OperationCatalog, OperationEntry, OperationKind};
pub use dispatcher::Dispatcher;
pub use envelope::ResultEnvelope;
pub use error::{DispatchError, DispatchResult};

pub use naver_search_client::{
    ClientError, ConfigError, Credentials, Endpoints, NaverApi, NaverClient, NaverConfig,
};
pub use naver_search_mcp::{CallToolResult, McpServer, ToolService};
pub use naver_search_tools::{SchemaError, ValidationError};

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        Dispatcher, NaverApi, NaverClient, NaverConfig, OperationCatalog, ResultEnvelope,
    };
    pub use naver_search_mcp::{McpServer, ToolService};
}
