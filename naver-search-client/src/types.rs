//! Request models for the search and search-trend APIs.
//!
//! Field names serialize to the upstream wire names, so these types are used
//! directly as query strings and JSON bodies.

use serde::{Deserialize, Serialize};

/// Content category of a keyword search.
///
/// The serialized form is the upstream path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// News articles.
    News,
    /// Blog posts.
    Blog,
    /// Shopping items.
    Shop,
    /// Images.
    Image,
    /// Web documents.
    Webkr,
    /// Encyclopedia entries.
    Encyc,
    /// Knowledge Q&A.
    Kin,
    /// Books.
    Book,
    /// Academic documents.
    Doc,
    /// Cafe articles.
    Cafearticle,
}

impl SearchType {
    /// Every category, in catalog order.
    pub const ALL: [SearchType; 10] = [
        Self::News,
        Self::Blog,
        Self::Shop,
        Self::Image,
        Self::Webkr,
        Self::Encyc,
        Self::Kin,
        Self::Book,
        Self::Doc,
        Self::Cafearticle,
    ];

    /// Upstream path segment.
    #[must_use]
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Blog => "blog",
            Self::Shop => "shop",
            Self::Image => "image",
            Self::Webkr => "webkr",
            Self::Encyc => "encyc",
            Self::Kin => "kin",
            Self::Book => "book",
            Self::Doc => "doc",
            Self::Cafearticle => "cafearticle",
        }
    }

    /// Name of the dedicated operation for this category.
    #[must_use]
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::News => "search_news",
            Self::Blog => "search_blog",
            Self::Shop => "search_shop",
            Self::Image => "search_image",
            Self::Webkr => "search_webkr",
            Self::Encyc => "search_encyc",
            Self::Kin => "search_kin",
            Self::Book => "search_book",
            Self::Doc => "search_academic",
            Self::Cafearticle => "search_cafearticle",
        }
    }

    /// Human description of the category search.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::News => "Search Naver news articles",
            Self::Blog => "Search Naver blog posts",
            Self::Shop => "Search Naver shopping items",
            Self::Image => "Search Naver images",
            Self::Webkr => "Search Naver web documents",
            Self::Encyc => "Search Naver encyclopedia entries",
            Self::Kin => "Search Naver KnowledgeiN questions and answers",
            Self::Book => "Search Naver books",
            Self::Doc => "Search Naver academic documents",
            Self::Cafearticle => "Search Naver cafe articles",
        }
    }

    /// All path segments, for schema enums.
    #[must_use]
    pub fn segments() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::path_segment).collect()
    }
}

/// Result ordering of a keyword search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ordered by relevance.
    #[serde(rename = "sim")]
    Similarity,
    /// Ordered by date, newest first.
    #[serde(rename = "date")]
    Date,
}

/// Parameters of a keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search query.
    pub query: String,
    /// Number of results (1-100).
    pub display: u32,
    /// Index of the first result (1-1000).
    pub start: u32,
    /// Result ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl SearchParams {
    /// Create parameters with the default paging.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            display: 10,
            start: 1,
            sort: None,
        }
    }

    /// Set the page size.
    #[must_use]
    pub fn with_display(mut self, display: u32) -> Self {
        self.display = display;
        self
    }

    /// Set the start index.
    #[must_use]
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the ordering.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Result ordering of a local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalSort {
    /// Relevance order.
    Random,
    /// Ordered by review count.
    Comment,
}

/// Parameters of a local business search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSearchParams {
    /// Search query.
    pub query: String,
    /// Number of results (1-5).
    pub display: u32,
    /// Index of the first result (always 1).
    pub start: u32,
    /// Result ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<LocalSort>,
}

impl LocalSearchParams {
    /// Create parameters with the default paging.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            display: 1,
            start: 1,
            sort: None,
        }
    }
}

/// Bucket size of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Daily buckets.
    Date,
    /// Weekly buckets.
    Week,
    /// Monthly buckets.
    Month,
}

/// Period and bucket size shared by every trend request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRange {
    /// First day, `yyyy-mm-dd`.
    pub start_date: String,
    /// Last day, `yyyy-mm-dd`.
    pub end_date: String,
    /// Bucket size.
    pub time_unit: TimeUnit,
}

impl TrendRange {
    /// Create a range.
    #[must_use]
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        time_unit: TimeUnit,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            time_unit,
        }
    }
}

/// A named set of keywords aggregated into one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordGroup {
    /// Series name.
    pub group_name: String,
    /// Keywords in the group.
    pub keywords: Vec<String>,
}

/// Search-volume trend request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTrendRequest {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Series to compare.
    pub keyword_groups: Vec<KeywordGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_search_type_wire_names() {
        for ty in SearchType::ALL {
            assert_eq!(serde_json::to_value(ty).unwrap(), json!(ty.path_segment()));
        }
        assert_eq!(SearchType::Doc.operation_name(), "search_academic");
    }

    #[test]
    fn test_search_params_skip_missing_sort() {
        let params = SearchParams::new("rust");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"query": "rust", "display": 10, "start": 1})
        );

        let params = params.with_sort(SortOrder::Similarity);
        assert_eq!(serde_json::to_value(&params).unwrap()["sort"], "sim");
    }

    #[test]
    fn test_search_trend_body() {
        let request = SearchTrendRequest {
            range: TrendRange::new("2024-01-01", "2024-03-31", TimeUnit::Date),
            keyword_groups: vec![KeywordGroup {
                group_name: "lang".into(),
                keywords: vec!["rust".into()],
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "startDate": "2024-01-01",
                "endDate": "2024-03-31",
                "timeUnit": "date",
                "keywordGroups": [{"groupName": "lang", "keywords": ["rust"]}]
            })
        );
    }
}
