//! The operation catalog.
//!
//! Every operation the server exposes, its argument schema and the upstream
//! call it is bound to. Built once at start-up and never modified.

use indexmap::IndexMap;
use naver_search_client::{AgeBand, SearchType, ShoppingVariant};
use naver_search_tools::{
    ObjectJsonSchema, OperationDefinition, SchemaBuilder, SchemaError, SchemaRegistry,
    SchemaResult, ValidatedInput,
};
use serde_json::Value as JsonValue;

/// Name of the unified search operation.
pub const SEARCH: &str = "search";
/// Name of the local business search operation.
pub const SEARCH_LOCAL: &str = "search_local";
/// Name of the search trend operation.
pub const DATALAB_SEARCH: &str = "datalab_search";

const TIME_UNITS: &[&str] = &["date", "week", "month"];
const DEVICES: &[&str] = &["pc", "mo"];
const GENDERS: &[&str] = &["f", "m"];

/// The upstream call an operation is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Keyword search, category taken from the `type` argument.
    Search,
    /// Keyword search in a fixed category.
    SearchCategory(SearchType),
    /// Local business search.
    LocalSearch,
    /// Search-volume trend.
    SearchTrend,
    /// Shopping insight trend on one route.
    ShoppingTrend(ShoppingVariant),
}

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct OperationEntry {
    /// Advertised definition.
    pub definition: OperationDefinition,
    /// Upstream binding.
    pub kind: OperationKind,
}

impl OperationEntry {
    /// Create a catalog entry.
    #[must_use]
    pub fn new(definition: OperationDefinition, kind: OperationKind) -> Self {
        Self { definition, kind }
    }
}

/// Ordered, immutable set of operations.
#[derive(Debug, Clone)]
pub struct OperationCatalog {
    registry: SchemaRegistry,
    kinds: IndexMap<String, OperationKind>,
}

impl OperationCatalog {
    /// Build a catalog from entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateOperation`] if two entries share a
    /// name.
    pub fn from_entries(entries: impl IntoIterator<Item = OperationEntry>) -> SchemaResult<Self> {
        let mut registry = SchemaRegistry::new();
        let mut kinds = IndexMap::new();
        for entry in entries {
            let name = entry.definition.name.clone();
            registry.register(entry.definition)?;
            kinds.insert(name, entry.kind);
        }
        Ok(Self { registry, kinds })
    }

    /// The full Naver catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in entries collide, which they do not.
    pub fn standard() -> SchemaResult<Self> {
        Self::from_entries(standard_entries())
    }

    /// Definitions in catalog order.
    #[must_use]
    pub fn definitions(&self) -> Vec<&OperationDefinition> {
        self.registry.definitions()
    }

    /// Upstream binding of an operation.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<OperationKind> {
        self.kinds.get(name).copied()
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Validate raw arguments and resolve the binding.
    ///
    /// # Errors
    ///
    /// Returns the registry's error for unknown names or invalid arguments.
    pub fn resolve(&self, name: &str, raw: &JsonValue) -> SchemaResult<(OperationKind, ValidatedInput)> {
        let input = self.registry.validate(name, raw)?;
        let kind = self
            .kind(name)
            .ok_or_else(|| SchemaError::OperationNotFound(name.to_string()))?;
        Ok((kind, input))
    }
}

fn standard_entries() -> Vec<OperationEntry> {
    let mut entries = vec![OperationEntry::new(
        OperationDefinition::new(
            SEARCH,
            "Search Naver by content category (news, blog, shop, image, webkr, encyc, kin, book, doc, cafearticle)",
        )
        .with_parameters(search_schema(true)),
        OperationKind::Search,
    )];

    entries.extend(SearchType::ALL.into_iter().map(|ty| {
        OperationEntry::new(
            OperationDefinition::new(ty.operation_name(), ty.description())
                .with_parameters(search_schema(false)),
            OperationKind::SearchCategory(ty),
        )
    }));

    entries.push(OperationEntry::new(
        OperationDefinition::new(SEARCH_LOCAL, "Search local businesses and places registered on Naver")
            .with_parameters(local_schema()),
        OperationKind::LocalSearch,
    ));

    entries.push(OperationEntry::new(
        OperationDefinition::new(DATALAB_SEARCH, "Analyze Naver search volume trends for keyword groups")
            .with_parameters(search_trend_schema()),
        OperationKind::SearchTrend,
    ));

    entries.extend(ShoppingVariant::ALL.into_iter().map(|variant| {
        OperationEntry::new(
            OperationDefinition::new(variant.operation_name(), variant.description())
                .with_parameters(shopping_schema(variant)),
            OperationKind::ShoppingTrend(variant),
        )
    }));

    entries
}

fn search_schema(with_type: bool) -> ObjectJsonSchema {
    let mut builder = SchemaBuilder::new();
    if with_type {
        builder = builder.enum_values("type", "Content category to search", &SearchType::segments(), true);
    }
    builder
        .non_empty_string("query", "Search query", true)
        .integer_with_default("display", "Number of results to return (1-100)", 1, 100, 10)
        .integer_with_default("start", "Index of the first result (1-1000)", 1, 1000, 1)
        .enum_values("sort", "Sort order: sim (relevance) or date (newest first)", &["sim", "date"], false)
        .build()
}

fn local_schema() -> ObjectJsonSchema {
    SchemaBuilder::new()
        .non_empty_string("query", "Search query", true)
        .integer_with_default("display", "Number of results to return (1-5)", 1, 5, 1)
        .integer_with_default("start", "Index of the first result (always 1)", 1, 1, 1)
        .enum_values(
            "sort",
            "Sort order: random (relevance) or comment (review count)",
            &["random", "comment"],
            false,
        )
        .build()
}

fn with_range(builder: SchemaBuilder) -> SchemaBuilder {
    builder
        .date("startDate", "Start date (yyyy-mm-dd)", true)
        .date("endDate", "End date (yyyy-mm-dd)", true)
        .enum_values("timeUnit", "Bucket size: date, week or month", TIME_UNITS, true)
}

fn search_trend_schema() -> ObjectJsonSchema {
    let group = SchemaBuilder::new()
        .non_empty_string("groupName", "Name of the keyword group", true)
        .array(
            "keywords",
            "Keywords aggregated into this group",
            serde_json::json!({"type": "string"}),
            Some(1),
            true,
        )
        .build();

    with_range(SchemaBuilder::new())
        .object_array("keywordGroups", "Keyword groups to compare", group, true)
        .build()
}

fn param_group(desc: &str) -> ObjectJsonSchema {
    SchemaBuilder::new()
        .non_empty_string("name", "Series name", true)
        .array("param", desc, serde_json::json!({"type": "string"}), Some(1), true)
        .build()
}

fn shopping_schema(variant: ShoppingVariant) -> ObjectJsonSchema {
    let ages: Vec<&str> = AgeBand::ALL.iter().map(AgeBand::as_str).collect();
    let builder = with_range(SchemaBuilder::new());

    let builder = match variant {
        ShoppingVariant::Categories => builder
            .object_array(
                "category",
                "Category groups to compare",
                param_group("Category codes"),
                true,
            )
            .enum_values("device", "Device filter: pc or mo", DEVICES, false)
            .enum_values("gender", "Gender filter: f or m", GENDERS, false)
            .enum_array("ages", "Age band filter", &ages, false),
        ShoppingVariant::CategoryByDevice => category_code(builder)
            .enum_values("device", "Device filter: pc or mo", DEVICES, false),
        ShoppingVariant::CategoryByGender => category_code(builder)
            .enum_values("gender", "Gender filter: f or m", GENDERS, false),
        ShoppingVariant::CategoryByAge => {
            category_code(builder).enum_array("ages", "Age band filter", &ages, false)
        }
        ShoppingVariant::Keywords => category_code(builder).object_array(
            "keyword",
            "Keyword groups to compare",
            param_group("Keywords"),
            true,
        ),
        ShoppingVariant::KeywordByDevice => single_keyword(builder)
            .enum_values("device", "Device: pc or mo", DEVICES, false),
        ShoppingVariant::KeywordByGender => single_keyword(builder)
            .enum_values("gender", "Gender: f or m", GENDERS, false),
        ShoppingVariant::KeywordByAge => {
            single_keyword(builder).enum_array("ages", "Age bands", &ages, false)
        }
    };

    builder.build()
}

fn category_code(builder: SchemaBuilder) -> SchemaBuilder {
    builder.non_empty_string("category", "Shopping category code", true)
}

fn single_keyword(builder: SchemaBuilder) -> SchemaBuilder {
    category_code(builder).non_empty_string("keyword", "Keyword to analyze", true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = OperationCatalog::standard().unwrap();
        let names: Vec<&str> = catalog.definitions().iter().map(|d| d.name()).collect();

        assert_eq!(
            names,
            vec![
                "search",
                "search_news",
                "search_blog",
                "search_shop",
                "search_image",
                "search_webkr",
                "search_encyc",
                "search_kin",
                "search_book",
                "search_academic",
                "search_cafearticle",
                "search_local",
                "datalab_search",
                "datalab_shopping_category",
                "datalab_shopping_by_device",
                "datalab_shopping_by_gender",
                "datalab_shopping_by_age",
                "datalab_shopping_keywords",
                "datalab_shopping_keyword_by_device",
                "datalab_shopping_keyword_by_gender",
                "datalab_shopping_keyword_by_age",
            ]
        );
        assert_eq!(catalog.len(), 21);
    }

    #[test]
    fn test_convenience_operations_hide_type() {
        let catalog = OperationCatalog::standard().unwrap();
        let unified = catalog.definitions()[0].input_schema();
        let news = catalog.definitions()[1].input_schema();

        assert_eq!(unified["required"], json!(["type", "query"]));
        assert!(news["properties"].get("type").is_none());
        assert_eq!(
            catalog.kind("search_academic"),
            Some(OperationKind::SearchCategory(SearchType::Doc))
        );
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let catalog = OperationCatalog::standard().unwrap();
        let (kind, input) = catalog.resolve("search_local", &json!({"query": "cafe"})).unwrap();

        assert_eq!(kind, OperationKind::LocalSearch);
        assert_eq!(input.into_value(), json!({"query": "cafe", "display": 1, "start": 1}));
    }

    #[test]
    fn test_local_display_capped_at_five() {
        let catalog = OperationCatalog::standard().unwrap();
        let err = catalog
            .resolve("search_local", &json!({"query": "cafe", "display": 6}))
            .unwrap_err();
        assert!(err.to_string().contains("`display` must be at most 5"));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let entry = || {
            OperationEntry::new(OperationDefinition::new("dup", "Duplicate"), OperationKind::SearchTrend)
        };
        let err = OperationCatalog::from_entries([entry(), entry()]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateOperation(_)));
    }

    #[test]
    fn test_shopping_schemas_declare_only_their_dimension() {
        let catalog = OperationCatalog::standard().unwrap();
        let by_gender = catalog
            .definitions()
            .into_iter()
            .find(|d| d.name() == "datalab_shopping_by_gender")
            .unwrap()
            .parameters()
            .clone();

        let keys: Vec<&str> = by_gender.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["startDate", "endDate", "timeUnit", "category", "gender"]);
        assert!(!by_gender.is_required("gender"));
    }

    #[rstest]
    #[case("datalab_shopping_by_device")]
    #[case("datalab_shopping_by_gender")]
    #[case("datalab_shopping_by_age")]
    fn test_category_breakdown_filter_optional(#[case] name: &str) {
        let catalog = OperationCatalog::standard().unwrap();
        let (_, input) = catalog
            .resolve(
                name,
                &json!({
                    "startDate": "2024-01-01",
                    "endDate": "2024-03-31",
                    "timeUnit": "month",
                    "category": "50000000"
                }),
            )
            .unwrap();

        assert_eq!(input.fields().len(), 4);
    }
}
