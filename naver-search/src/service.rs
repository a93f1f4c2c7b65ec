//! Tool transport binding.

use async_trait::async_trait;
use naver_search_mcp::{CallToolResult, McpTool, ToolService};
use serde_json::Value as JsonValue;

use crate::dispatcher::Dispatcher;

#[async_trait]
impl ToolService for Dispatcher {
    fn tools(&self) -> Vec<McpTool> {
        self.catalog()
            .definitions()
            .into_iter()
            .map(|def| McpTool::new(def.name(), def.input_schema()).with_description(def.description()))
            .collect()
    }

    async fn call(&self, name: &str, arguments: JsonValue) -> CallToolResult {
        self.execute(name, arguments).await.into_call_tool_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OperationCatalog;
    use async_trait::async_trait;
    use naver_search_client::{
        ClientError, ClientResult, LocalSearchParams, NaverApi, SearchParams, SearchTrendRequest,
        SearchType, ShoppingTrend,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    struct Uninitialized;

    #[async_trait]
    impl NaverApi for Uninitialized {
        async fn search(&self, _: SearchType, _: &SearchParams) -> ClientResult<JsonValue> {
            Err(ClientError::NotInitialized)
        }

        async fn search_local(&self, _: &LocalSearchParams) -> ClientResult<JsonValue> {
            Err(ClientError::NotInitialized)
        }

        async fn search_trend(&self, _: &SearchTrendRequest) -> ClientResult<JsonValue> {
            Err(ClientError::NotInitialized)
        }

        async fn shopping_trend(&self, _: &ShoppingTrend) -> ClientResult<JsonValue> {
            Err(ClientError::NotInitialized)
        }
    }

    fn service() -> Dispatcher {
        Dispatcher::new(OperationCatalog::standard().unwrap(), Arc::new(Uninitialized))
    }

    #[test]
    fn test_tools_mirror_catalog() {
        let tools = service().tools();
        assert_eq!(tools.len(), 21);
        assert_eq!(tools[0].name, "search");
        assert_eq!(tools[0].input_schema["type"], "object");
        assert!(tools[0].input_schema["required"]
            .as_array()
            .unwrap()
            .contains(&json!("query")));
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[tokio::test]
    async fn test_uninitialized_client_reported() {
        let result = service().call("search_news", json!({"query": "x"})).await;
        assert!(result.is_error);
        assert!(result.first_text().unwrap().starts_with("Error: "));
        assert!(result.first_text().unwrap().contains("not initialized"));
    }
}
