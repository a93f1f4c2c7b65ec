//! DataLab shopping insight requests.
//!
//! Each upstream route takes its own body shape. [`ShoppingTrend`] is a
//! closed union with one variant per route, and every variant carries only
//! the fields its route accepts.
//!
//! Category is a plain code on every route except `/shopping/categories`,
//! which takes a list of `{name, param}` groups. The keyword routes that
//! break a single keyword down by one dimension always send all three
//! dimension fields, with `""` or `[]` for the ones not selected.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::TrendRange;

/// Device filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Desktop.
    Pc,
    /// Mobile.
    Mo,
}

impl Device {
    /// Wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Mo => "mo",
        }
    }
}

/// Gender filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female.
    F,
    /// Male.
    M,
}

impl Gender {
    /// Wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F => "f",
            Self::M => "m",
        }
    }
}

/// Age band filter, by decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    /// 10-19.
    #[serde(rename = "10")]
    Teens,
    /// 20-29.
    #[serde(rename = "20")]
    Twenties,
    /// 30-39.
    #[serde(rename = "30")]
    Thirties,
    /// 40-49.
    #[serde(rename = "40")]
    Forties,
    /// 50-59.
    #[serde(rename = "50")]
    Fifties,
    /// 60 and over.
    #[serde(rename = "60")]
    Sixties,
}

impl AgeBand {
    /// Every band, youngest first.
    pub const ALL: [AgeBand; 6] = [
        Self::Teens,
        Self::Twenties,
        Self::Thirties,
        Self::Forties,
        Self::Fifties,
        Self::Sixties,
    ];

    /// Wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teens => "10",
            Self::Twenties => "20",
            Self::Thirties => "30",
            Self::Forties => "40",
            Self::Fifties => "50",
            Self::Sixties => "60",
        }
    }
}

/// A named series and the codes or keywords it aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamGroup {
    /// Series name.
    pub name: String,
    /// Category codes or keywords.
    pub param: Vec<String>,
}

/// `/shopping/categories`: compare category groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category groups.
    pub category: Vec<ParamGroup>,
    /// Optional device filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    /// Optional gender filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Optional age filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ages: Option<Vec<AgeBand>>,
}

/// `/shopping/category/device`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDeviceTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Optional device filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

/// `/shopping/category/gender`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGenderTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Optional gender filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// `/shopping/category/age`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAgeTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Optional age filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ages: Option<Vec<AgeBand>>,
}

/// `/shopping/category/keywords`: compare keyword groups within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Keyword groups.
    pub keyword: Vec<ParamGroup>,
}

/// `/shopping/category/keyword/device`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordDeviceTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Keyword.
    pub keyword: String,
    /// Device, empty on the wire when absent.
    #[serde(default)]
    pub device: Option<Device>,
}

/// `/shopping/category/keyword/gender`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGenderTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Keyword.
    pub keyword: String,
    /// Gender, empty on the wire when absent.
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// `/shopping/category/keyword/age`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAgeTrend {
    /// Period and bucket size.
    #[serde(flatten)]
    pub range: TrendRange,
    /// Category code.
    pub category: String,
    /// Keyword.
    pub keyword: String,
    /// Age bands.
    #[serde(default)]
    pub ages: Vec<AgeBand>,
}

/// Wire body of the single-keyword dimension routes.
#[derive(Serialize)]
struct KeywordBreakdownBody<'a> {
    #[serde(flatten)]
    range: &'a TrendRange,
    category: &'a str,
    keyword: &'a str,
    device: &'static str,
    gender: &'static str,
    ages: Vec<&'static str>,
}

impl<'a> KeywordBreakdownBody<'a> {
    fn new(range: &'a TrendRange, category: &'a str, keyword: &'a str) -> Self {
        Self {
            range,
            category,
            keyword,
            device: "",
            gender: "",
            ages: Vec::new(),
        }
    }
}

/// A shopping insight request, one variant per upstream route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingTrend {
    /// Category groups.
    Categories(CategoryTrend),
    /// One category by device.
    CategoryByDevice(CategoryDeviceTrend),
    /// One category by gender.
    CategoryByGender(CategoryGenderTrend),
    /// One category by age.
    CategoryByAge(CategoryAgeTrend),
    /// Keyword groups within a category.
    Keywords(KeywordsTrend),
    /// One keyword by device.
    KeywordByDevice(KeywordDeviceTrend),
    /// One keyword by gender.
    KeywordByGender(KeywordGenderTrend),
    /// One keyword by age.
    KeywordByAge(KeywordAgeTrend),
}

impl ShoppingTrend {
    /// The route this request targets.
    #[must_use]
    pub fn variant(&self) -> ShoppingVariant {
        match self {
            Self::Categories(_) => ShoppingVariant::Categories,
            Self::CategoryByDevice(_) => ShoppingVariant::CategoryByDevice,
            Self::CategoryByGender(_) => ShoppingVariant::CategoryByGender,
            Self::CategoryByAge(_) => ShoppingVariant::CategoryByAge,
            Self::Keywords(_) => ShoppingVariant::Keywords,
            Self::KeywordByDevice(_) => ShoppingVariant::KeywordByDevice,
            Self::KeywordByGender(_) => ShoppingVariant::KeywordByGender,
            Self::KeywordByAge(_) => ShoppingVariant::KeywordByAge,
        }
    }

    /// Path below the DataLab base URL.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.variant().path()
    }

    /// JSON body to post.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn body(&self) -> serde_json::Result<JsonValue> {
        match self {
            Self::Categories(t) => serde_json::to_value(t),
            Self::CategoryByDevice(t) => serde_json::to_value(t),
            Self::CategoryByGender(t) => serde_json::to_value(t),
            Self::CategoryByAge(t) => serde_json::to_value(t),
            Self::Keywords(t) => serde_json::to_value(t),
            Self::KeywordByDevice(t) => {
                let mut body = KeywordBreakdownBody::new(&t.range, &t.category, &t.keyword);
                body.device = t.device.as_ref().map_or("", Device::as_str);
                serde_json::to_value(body)
            }
            Self::KeywordByGender(t) => {
                let mut body = KeywordBreakdownBody::new(&t.range, &t.category, &t.keyword);
                body.gender = t.gender.as_ref().map_or("", Gender::as_str);
                serde_json::to_value(body)
            }
            Self::KeywordByAge(t) => {
                let mut body = KeywordBreakdownBody::new(&t.range, &t.category, &t.keyword);
                body.ages = t.ages.iter().map(AgeBand::as_str).collect();
                serde_json::to_value(body)
            }
        }
    }
}

/// Route selector of a [`ShoppingTrend`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShoppingVariant {
    /// `/shopping/categories`
    Categories,
    /// `/shopping/category/device`
    CategoryByDevice,
    /// `/shopping/category/gender`
    CategoryByGender,
    /// `/shopping/category/age`
    CategoryByAge,
    /// `/shopping/category/keywords`
    Keywords,
    /// `/shopping/category/keyword/device`
    KeywordByDevice,
    /// `/shopping/category/keyword/gender`
    KeywordByGender,
    /// `/shopping/category/keyword/age`
    KeywordByAge,
}

impl ShoppingVariant {
    /// Every variant, in catalog order.
    pub const ALL: [ShoppingVariant; 8] = [
        Self::Categories,
        Self::CategoryByDevice,
        Self::CategoryByGender,
        Self::CategoryByAge,
        Self::Keywords,
        Self::KeywordByDevice,
        Self::KeywordByGender,
        Self::KeywordByAge,
    ];

    /// Path below the DataLab base URL.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Categories => "/shopping/categories",
            Self::CategoryByDevice => "/shopping/category/device",
            Self::CategoryByGender => "/shopping/category/gender",
            Self::CategoryByAge => "/shopping/category/age",
            Self::Keywords => "/shopping/category/keywords",
            Self::KeywordByDevice => "/shopping/category/keyword/device",
            Self::KeywordByGender => "/shopping/category/keyword/gender",
            Self::KeywordByAge => "/shopping/category/keyword/age",
        }
    }

    /// Name of the operation exposing this route.
    #[must_use]
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::Categories => "datalab_shopping_category",
            Self::CategoryByDevice => "datalab_shopping_by_device",
            Self::CategoryByGender => "datalab_shopping_by_gender",
            Self::CategoryByAge => "datalab_shopping_by_age",
            Self::Keywords => "datalab_shopping_keywords",
            Self::KeywordByDevice => "datalab_shopping_keyword_by_device",
            Self::KeywordByGender => "datalab_shopping_keyword_by_gender",
            Self::KeywordByAge => "datalab_shopping_keyword_by_age",
        }
    }

    /// Human description of the route.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Categories => "Analyze shopping click trends for groups of categories",
            Self::CategoryByDevice => "Analyze shopping click trends of a category by device",
            Self::CategoryByGender => "Analyze shopping click trends of a category by gender",
            Self::CategoryByAge => "Analyze shopping click trends of a category by age group",
            Self::Keywords => "Analyze shopping click trends for keyword groups within a category",
            Self::KeywordByDevice => "Analyze shopping click trends of a keyword by device",
            Self::KeywordByGender => "Analyze shopping click trends of a keyword by gender",
            Self::KeywordByAge => "Analyze shopping click trends of a keyword by age group",
        }
    }

    /// Build the request for this route from validated arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` does not match this route's fields.
    pub fn parse(self, value: JsonValue) -> serde_json::Result<ShoppingTrend> {
        Ok(match self {
            Self::Categories => ShoppingTrend::Categories(serde_json::from_value(value)?),
            Self::CategoryByDevice => ShoppingTrend::CategoryByDevice(serde_json::from_value(value)?),
            Self::CategoryByGender => ShoppingTrend::CategoryByGender(serde_json::from_value(value)?),
            Self::CategoryByAge => ShoppingTrend::CategoryByAge(serde_json::from_value(value)?),
            Self::Keywords => ShoppingTrend::Keywords(serde_json::from_value(value)?),
            Self::KeywordByDevice => ShoppingTrend::KeywordByDevice(serde_json::from_value(value)?),
            Self::KeywordByGender => ShoppingTrend::KeywordByGender(serde_json::from_value(value)?),
            Self::KeywordByAge => ShoppingTrend::KeywordByAge(serde_json::from_value(value)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeUnit;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn range() -> TrendRange {
        TrendRange::new("2024-01-01", "2024-01-31", TimeUnit::Week)
    }

    #[test]
    fn test_category_by_device_body_has_only_device() {
        let trend = ShoppingTrend::CategoryByDevice(CategoryDeviceTrend {
            range: range(),
            category: "50000000".into(),
            device: Some(Device::Mo),
        });

        assert_eq!(
            trend.body().unwrap(),
            json!({
                "startDate": "2024-01-01",
                "endDate": "2024-01-31",
                "timeUnit": "week",
                "category": "50000000",
                "device": "mo"
            })
        );
    }

    #[rstest]
    #[case(ShoppingVariant::CategoryByDevice, "/shopping/category/device")]
    #[case(ShoppingVariant::CategoryByGender, "/shopping/category/gender")]
    #[case(ShoppingVariant::CategoryByAge, "/shopping/category/age")]
    fn test_category_breakdown_without_filter(
        #[case] variant: ShoppingVariant,
        #[case] expected_path: &str,
    ) {
        let trend = variant
            .parse(json!({
                "startDate": "2024-01-01",
                "endDate": "2024-01-31",
                "timeUnit": "month",
                "category": "50000000"
            }))
            .unwrap();

        assert_eq!(trend.path(), expected_path);
        assert_eq!(
            trend.body().unwrap(),
            json!({
                "startDate": "2024-01-01",
                "endDate": "2024-01-31",
                "timeUnit": "month",
                "category": "50000000"
            })
        );
    }

    #[test]
    fn test_categories_omits_absent_filters() {
        let trend = ShoppingTrend::Categories(CategoryTrend {
            range: range(),
            category: vec![ParamGroup {
                name: "fashion".into(),
                param: vec!["50000000".into()],
            }],
            device: None,
            gender: Some(Gender::F),
            ages: None,
        });

        let body = trend.body().unwrap();
        assert_eq!(body["category"], json!([{"name": "fashion", "param": ["50000000"]}]));
        assert_eq!(body["gender"], "f");
        assert!(body.get("device").is_none());
        assert!(body.get("ages").is_none());
    }

    #[test]
    fn test_keyword_by_gender_sends_empty_dimensions() {
        let trend = ShoppingTrend::KeywordByGender(KeywordGenderTrend {
            range: range(),
            category: "50000000".into(),
            keyword: "coat".into(),
            gender: Some(Gender::M),
        });

        assert_eq!(
            trend.body().unwrap(),
            json!({
                "startDate": "2024-01-01",
                "endDate": "2024-01-31",
                "timeUnit": "week",
                "category": "50000000",
                "keyword": "coat",
                "device": "",
                "gender": "m",
                "ages": []
            })
        );
    }

    #[test]
    fn test_keyword_by_age_without_ages() {
        let trend = ShoppingVariant::KeywordByAge
            .parse(json!({
                "startDate": "2024-01-01",
                "endDate": "2024-01-31",
                "timeUnit": "month",
                "category": "50000000",
                "keyword": "coat"
            }))
            .unwrap();

        let body = trend.body().unwrap();
        assert_eq!(body["ages"], json!([]));
        assert_eq!(body["device"], "");
        assert_eq!(trend.path(), "/shopping/category/keyword/age");
    }

    #[test]
    fn test_parse_rejects_wrong_category_shape() {
        let err = ShoppingVariant::CategoryByAge.parse(json!({
            "startDate": "2024-01-01",
            "endDate": "2024-01-31",
            "timeUnit": "month",
            "category": [{"name": "x", "param": ["1"]}],
            "ages": ["20"]
        }));
        assert!(err.is_err());
    }

    #[test]
    fn test_variant_round_trip_names() {
        for variant in ShoppingVariant::ALL {
            assert!(variant.path().starts_with("/shopping/"));
            assert!(variant.operation_name().starts_with("datalab_shopping_"));
        }
        assert_eq!(AgeBand::ALL.map(|a| a.as_str()), ["10", "20", "30", "40", "50", "60"]);
    }
}
