//! Client configuration.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// Default base URL of the search API.
pub const SEARCH_BASE_URL: &str = "https://openapi.naver.com/v1/search";
/// Default base URL of the DataLab API.
pub const DATALAB_BASE_URL: &str = "https://openapi.naver.com/v1/datalab";

/// Environment variable holding the client id.
pub const CLIENT_ID_VAR: &str = "NAVER_CLIENT_ID";
/// Environment variable holding the client secret.
pub const CLIENT_SECRET_VAR: &str = "NAVER_CLIENT_SECRET";
/// Optional override of [`SEARCH_BASE_URL`].
pub const SEARCH_BASE_URL_VAR: &str = "NAVER_SEARCH_BASE_URL";
/// Optional override of [`DATALAB_BASE_URL`].
pub const DATALAB_BASE_URL_VAR: &str = "NAVER_DATALAB_BASE_URL";

/// Application credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Client id (`X-Naver-Client-Id`).
    pub client_id: String,
    /// Client secret (`X-Naver-Client-Secret`).
    pub client_secret: String,
}

impl Credentials {
    /// Create credentials.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Base URLs of the two API families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    search: Url,
    datalab: Url,
}

impl Endpoints {
    /// Parse custom base URLs.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the first invalid URL.
    pub fn new(search: &str, datalab: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            search: Url::parse(search)?,
            datalab: Url::parse(datalab)?,
        })
    }

    /// Search API base.
    #[must_use]
    pub fn search(&self) -> &Url {
        &self.search
    }

    /// DataLab API base.
    #[must_use]
    pub fn datalab(&self) -> &Url {
        &self.datalab
    }

    /// URL of a search category, e.g. `.../v1/search/news`.
    #[must_use]
    pub fn search_url(&self, segment: &str) -> String {
        join(&self.search, segment)
    }

    /// URL of a DataLab route, e.g. `.../v1/datalab/search`.
    #[must_use]
    pub fn datalab_url(&self, path: &str) -> String {
        join(&self.datalab, path)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search: Url::parse(SEARCH_BASE_URL).expect("default search URL is valid"),
            datalab: Url::parse(DATALAB_BASE_URL).expect("default DataLab URL is valid"),
        }
    }
}

fn join(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Everything needed to build a ready-to-use client.
#[derive(Debug, Clone)]
pub struct NaverConfig {
    /// Credentials.
    pub credentials: Credentials,
    /// API base URLs.
    pub endpoints: Endpoints,
}

impl NaverConfig {
    /// Create a config with the default endpoints.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: Endpoints::default(),
        }
    }

    /// Set the endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is unset or empty, or an endpoint
    /// override does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(var))
        };
        let credentials = Credentials::new(required(CLIENT_ID_VAR)?, required(CLIENT_SECRET_VAR)?);

        let url_or = |var: &'static str, default: &str| -> Result<Url, ConfigError> {
            let value = lookup(var).filter(|v| !v.is_empty());
            Url::parse(value.as_deref().unwrap_or(default))
                .map_err(|source| ConfigError::InvalidUrl { var, source })
        };
        let endpoints = Endpoints {
            search: url_or(SEARCH_BASE_URL_VAR, SEARCH_BASE_URL)?,
            datalab: url_or(DATALAB_BASE_URL_VAR, DATALAB_BASE_URL)?,
        };

        Ok(Self {
            credentials,
            endpoints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = NaverConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.credentials, Credentials::new("id", "secret"));
        assert_eq!(config.endpoints, Endpoints::default());
        assert_eq!(
            config.endpoints.search_url("news"),
            "https://openapi.naver.com/v1/search/news"
        );
        assert_eq!(
            config.endpoints.datalab_url("/shopping/categories"),
            "https://openapi.naver.com/v1/datalab/shopping/categories"
        );
    }

    #[test]
    fn test_missing_secret() {
        let err = NaverConfig::from_lookup(lookup(&[(CLIENT_ID_VAR, "id")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(CLIENT_SECRET_VAR)));
    }

    #[test]
    fn test_empty_id_is_missing() {
        let err = NaverConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, ""),
            (CLIENT_SECRET_VAR, "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(CLIENT_ID_VAR)));
    }

    #[test]
    fn test_endpoint_overrides() {
        let config = NaverConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (SEARCH_BASE_URL_VAR, "http://127.0.0.1:9000/v1/search/"),
        ]))
        .unwrap();
        assert_eq!(
            config.endpoints.search_url("blog"),
            "http://127.0.0.1:9000/v1/search/blog"
        );
        assert_eq!(config.endpoints.datalab().as_str(), DATALAB_BASE_URL);
    }

    #[test]
    fn test_invalid_override() {
        let err = NaverConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (DATALAB_BASE_URL_VAR, "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: DATALAB_BASE_URL_VAR, .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("id", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("id"));
        assert!(!debug.contains("super-secret"));
    }
}
