//! `naver-search` MCP server over stdio.

use std::sync::Arc;

use anyhow::Context;
use naver_search::{Dispatcher, McpServer, NaverClient, NaverConfig, OperationCatalog};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SERVER_NAME: &str = "naver-search";
const LOG_FORMAT_VAR: &str = "NAVER_SEARCH_LOG_FORMAT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    if std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = match NaverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let client = NaverClient::from_config(config);
    let catalog = OperationCatalog::standard().context("failed to build operation catalog")?;
    info!(operations = catalog.len(), "Starting {SERVER_NAME}");

    let dispatcher = Dispatcher::new(catalog, Arc::new(client));
    McpServer::new(SERVER_NAME, env!("CARGO_PKG_VERSION"), Arc::new(dispatcher))
        .run_stdio()
        .await
        .context("stdio transport failed")?;

    Ok(())
}
