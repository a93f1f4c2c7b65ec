//! Operation dispatch.
//!
//! [`Dispatcher::execute`] is the single entry point for running an
//! operation: it validates the raw arguments against the catalog, calls the
//! bound upstream method and folds every outcome into a [`ResultEnvelope`].

use std::sync::Arc;

use naver_search_client::{LocalSearchParams, NaverApi, SearchParams, SearchTrendRequest, SearchType};
use naver_search_tools::{SchemaError, ValidatedInput, ValidationError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::catalog::{OperationCatalog, OperationKind};
use crate::envelope::ResultEnvelope;
use crate::error::DispatchResult;

/// Arguments of the unified search operation.
#[derive(Debug, Deserialize)]
struct UnifiedSearch {
    #[serde(rename = "type")]
    ty: SearchType,
    #[serde(flatten)]
    params: SearchParams,
}

/// Routes validated operations to the Naver API.
#[derive(Clone)]
pub struct Dispatcher {
    catalog: Arc<OperationCatalog>,
    api: Arc<dyn NaverApi>,
}

impl Dispatcher {
    /// Create a dispatcher over a catalog and an upstream client.
    pub fn new(catalog: OperationCatalog, api: Arc<dyn NaverApi>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            api,
        }
    }

    /// The catalog this dispatcher serves.
    #[must_use]
    pub fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    /// Run an operation. Never fails; failures are reported in the envelope.
    pub async fn execute(&self, name: &str, args: JsonValue) -> ResultEnvelope {
        match self.try_execute(name, &args).await {
            Ok(data) => {
                info!(operation = %name, "Operation completed");
                ResultEnvelope::success(data)
            }
            Err(e) => {
                warn!(
                    operation = %name,
                    local = e.is_rejected_locally(),
                    error = %e,
                    "Operation failed"
                );
                ResultEnvelope::failure(e.to_string())
            }
        }
    }

    async fn try_execute(&self, name: &str, raw: &JsonValue) -> DispatchResult<JsonValue> {
        let (kind, input) = self.catalog.resolve(name, raw)?;
        debug!(operation = %name, kind = ?kind, "Dispatching");

        let data = match kind {
            OperationKind::Search => {
                let args: UnifiedSearch = typed(name, &input)?;
                self.api.search(args.ty, &args.params).await?
            }
            OperationKind::SearchCategory(ty) => {
                let params: SearchParams = typed(name, &input)?;
                self.api.search(ty, &params).await?
            }
            OperationKind::LocalSearch => {
                let params: LocalSearchParams = typed(name, &input)?;
                self.api.search_local(&params).await?
            }
            OperationKind::SearchTrend => {
                let request: SearchTrendRequest = typed(name, &input)?;
                self.api.search_trend(&request).await?
            }
            OperationKind::ShoppingTrend(variant) => {
                let request = variant.parse(input.into_value()).map_err(|e| {
                    SchemaError::validation(name, ValidationError::single("arguments", e.to_string()))
                })?;
                self.api.shopping_trend(&request).await?
            }
        };

        Ok(data)
    }
}

fn typed<T: DeserializeOwned>(name: &str, input: &ValidatedInput) -> Result<T, SchemaError> {
    input
        .deserialize()
        .map_err(|e| SchemaError::validation(name, e))
}
