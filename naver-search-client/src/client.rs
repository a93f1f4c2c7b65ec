//! HTTP client for the Naver search and DataLab APIs.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{
    config::{Credentials, Endpoints, NaverConfig},
    datalab::ShoppingTrend,
    error::{ClientError, ClientResult},
    types::{LocalSearchParams, SearchParams, SearchTrendRequest, SearchType},
};

/// Header carrying the client id.
pub const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
/// Header carrying the client secret.
pub const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// The upstream operations, one method per operation family.
///
/// Responses are returned as raw JSON, exactly as received.
#[async_trait]
pub trait NaverApi: Send + Sync {
    /// Keyword search in one content category.
    async fn search(&self, ty: SearchType, params: &SearchParams) -> ClientResult<JsonValue>;

    /// Local business search.
    async fn search_local(&self, params: &LocalSearchParams) -> ClientResult<JsonValue>;

    /// Search-volume trend.
    async fn search_trend(&self, request: &SearchTrendRequest) -> ClientResult<JsonValue>;

    /// Shopping insight trend.
    async fn shopping_trend(&self, request: &ShoppingTrend) -> ClientResult<JsonValue>;
}

/// Error body returned by the Naver API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NaverErrorResponse {
    error_message: Option<String>,
}

/// Naver Open API client.
///
/// Created without credentials; every request fails with
/// [`ClientError::NotInitialized`] until [`initialize`](Self::initialize) is
/// called.
#[derive(Debug)]
pub struct NaverClient {
    http: Client,
    endpoints: Endpoints,
    credentials: RwLock<Option<Credentials>>,
}

impl NaverClient {
    /// Create an uninitialized client with the default endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            endpoints: Endpoints::default(),
            credentials: RwLock::new(None),
        }
    }

    /// Create an initialized client from configuration.
    #[must_use]
    pub fn from_config(config: NaverConfig) -> Self {
        let client = Self::new().with_endpoints(config.endpoints);
        client.initialize(config.credentials);
        client
    }

    /// Set the endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set a custom HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Store credentials, replacing any previously stored.
    pub fn initialize(&self, credentials: Credentials) {
        debug!(client_id = %credentials.client_id, "Initializing Naver client");
        *self.credentials.write() = Some(credentials);
    }

    /// Check whether credentials have been supplied.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.credentials.read().is_some()
    }

    /// The configured endpoints.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn authorize(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        let guard = self.credentials.read();
        let credentials = guard.as_ref().ok_or(ClientError::NotInitialized)?;
        Ok(request
            .header(CLIENT_ID_HEADER, &credentials.client_id)
            .header(CLIENT_SECRET_HEADER, &credentials.client_secret))
    }

    async fn get<Q: Serialize + ?Sized>(&self, url: &str, query: &Q) -> ClientResult<JsonValue> {
        let request = self.authorize(self.http.get(url))?.query(query);
        debug!(method = "GET", url = %url, "Sending Naver API request");
        Self::read_response(request).await
    }

    async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ClientResult<JsonValue> {
        let request = self.authorize(self.http.post(url))?.json(body);
        debug!(method = "POST", url = %url, "Sending Naver API request");
        Self::read_response(request).await
    }

    async fn read_response(request: RequestBuilder) -> ClientResult<JsonValue> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<NaverErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error_message)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            return Err(ClientError::upstream(status.as_u16(), message));
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| ClientError::upstream(status.as_u16(), format!("Failed to parse response: {e}")))
    }
}

impl Default for NaverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NaverApi for NaverClient {
    async fn search(&self, ty: SearchType, params: &SearchParams) -> ClientResult<JsonValue> {
        let url = self.endpoints.search_url(ty.path_segment());
        self.get(&url, params).await
    }

    async fn search_local(&self, params: &LocalSearchParams) -> ClientResult<JsonValue> {
        let url = self.endpoints.search_url("local");
        self.get(&url, params).await
    }

    async fn search_trend(&self, request: &SearchTrendRequest) -> ClientResult<JsonValue> {
        let url = self.endpoints.datalab_url("/search");
        self.post(&url, request).await
    }

    async fn shopping_trend(&self, request: &ShoppingTrend) -> ClientResult<JsonValue> {
        let url = self.endpoints.datalab_url(request.path());
        let body = request
            .body()
            .map_err(|e| ClientError::transport(format!("Failed to encode request: {e}")))?;
        self.post(&url, &body).await
    }
}
