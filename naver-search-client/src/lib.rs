//! # naver-search-client
//!
//! Authenticated HTTP client for the Naver Open API.
//!
//! Covers keyword search across ten content categories, local business
//! search, DataLab search trends and the eight DataLab shopping insight
//! routes. Every response is returned as raw JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use naver_search_client::{NaverApi, NaverClient, NaverConfig, SearchParams, SearchType};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NaverClient::from_config(NaverConfig::from_env()?);
//! let news = client
//!     .search(SearchType::News, &SearchParams::new("rust").with_display(5))
//!     .await?;
//! println!("{news}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod datalab;
pub mod error;
pub mod types;

pub use client::{NaverApi, NaverClient, CLIENT_ID_HEADER, CLIENT_SECRET_HEADER};
pub use config::{Credentials, Endpoints, NaverConfig};
pub use datalab::{
    AgeBand, CategoryAgeTrend, CategoryDeviceTrend, CategoryGenderTrend, CategoryTrend, Device,
    Gender, KeywordAgeTrend, KeywordDeviceTrend, KeywordGenderTrend, KeywordsTrend, ParamGroup,
    ShoppingTrend, ShoppingVariant,
};
pub use error::{ClientError, ClientResult, ConfigError};
pub use types::{
    KeywordGroup, LocalSearchParams, LocalSort, SearchParams, SearchTrendRequest, SearchType,
    SortOrder, TimeUnit, TrendRange,
};
