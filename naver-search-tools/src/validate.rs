//! Argument validation and coercion.
//!
//! Raw caller arguments are checked against an [`ObjectJsonSchema`]. The
//! supported keywords are `type`, `enum`, `minimum`, `maximum`, `minLength`,
//! `format: "date"`, `items`, `minItems`, nested `properties`/`required`, and
//! `default`.
//!
//! Validation collects every violation before failing. Defaults are only
//! substituted into the output of a successful validation, and properties the
//! schema does not declare are dropped.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::definition::ObjectJsonSchema;
use crate::errors::{FieldIssue, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Arguments that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    fields: Map<String, JsonValue>,
}

impl ValidatedInput {
    /// Get a validated field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }

    /// Borrow all validated fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }

    /// Convert into a JSON object.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.fields)
    }

    /// Deserialize into a typed request model.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the typed model is stricter than the
    /// schema that produced this input.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        serde_json::from_value(JsonValue::Object(self.fields.clone()))
            .map_err(|e| ValidationError::single("arguments", e.to_string()))
    }
}

/// Validate `raw` against `schema`.
///
/// `null` is accepted as an empty argument object.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every offending field.
pub fn validate(schema: &ObjectJsonSchema, raw: &JsonValue) -> Result<ValidatedInput, ValidationError> {
    let empty = Map::new();
    let input = match raw {
        JsonValue::Null => &empty,
        JsonValue::Object(map) => map,
        other => {
            return Err(ValidationError::single(
                "arguments",
                format!("must be an object, got {}", type_name(other)),
            ))
        }
    };

    let required: Vec<&str> = schema.required.iter().map(String::as_str).collect();
    let mut issues = Vec::new();
    let fields = check_object("", schema.properties.iter(), &required, input, &mut issues);

    if issues.is_empty() {
        Ok(ValidatedInput { fields })
    } else {
        Err(ValidationError::new(issues))
    }
}

fn check_object<'a>(
    path: &str,
    properties: impl Iterator<Item = (&'a String, &'a JsonValue)>,
    required: &[&str],
    input: &Map<String, JsonValue>,
    issues: &mut Vec<FieldIssue>,
) -> Map<String, JsonValue> {
    let mut out = Map::new();
    let mut declared = Vec::new();

    for (name, prop) in properties {
        declared.push(name.as_str());
        let field = join_path(path, name);
        match input.get(name) {
            None | Some(JsonValue::Null) => {
                if required.contains(&name.as_str()) {
                    issues.push(FieldIssue::new(field, "is required"));
                } else if let Some(default) = prop.get("default") {
                    out.insert(name.clone(), default.clone());
                }
            }
            Some(value) => {
                if let Some(checked) = check_value(&field, prop, value, issues) {
                    out.insert(name.clone(), checked);
                }
            }
        }
    }

    for key in input.keys() {
        if !declared.contains(&key.as_str()) {
            debug!(field = %join_path(path, key), "Dropping undeclared argument");
        }
    }

    out
}

fn check_value(
    field: &str,
    schema: &JsonValue,
    value: &JsonValue,
    issues: &mut Vec<FieldIssue>,
) -> Option<JsonValue> {
    match schema.get("type").and_then(JsonValue::as_str) {
        Some("string") => check_string(field, schema, value, issues),
        Some("integer") => check_integer(field, schema, value, issues),
        Some("number") => check_number(field, value, issues),
        Some("boolean") => check_boolean(field, value, issues),
        Some("array") => check_array(field, schema, value, issues),
        Some("object") => check_nested(field, schema, value, issues),
        _ => Some(value.clone()),
    }
}

fn check_string(
    field: &str,
    schema: &JsonValue,
    value: &JsonValue,
    issues: &mut Vec<FieldIssue>,
) -> Option<JsonValue> {
    let Some(s) = value.as_str() else {
        issues.push(FieldIssue::new(field, "must be a string"));
        return None;
    };

    if let Some(allowed) = schema.get("enum").and_then(JsonValue::as_array) {
        if !allowed.iter().any(|a| a.as_str() == Some(s)) {
            issues.push(FieldIssue::new(
                field,
                format!("must be one of {}", list_values(allowed)),
            ));
            return None;
        }
    }

    if let Some(min) = schema.get("minLength").and_then(JsonValue::as_u64) {
        if (s.chars().count() as u64) < min {
            let expected = if min == 1 {
                "must not be empty".to_string()
            } else {
                format!("must be at least {min} characters")
            };
            issues.push(FieldIssue::new(field, expected));
            return None;
        }
    }

    if schema.get("format").and_then(JsonValue::as_str) == Some("date")
        && NaiveDate::parse_from_str(s, DATE_FORMAT).is_err()
    {
        issues.push(FieldIssue::new(field, "must be a date in yyyy-mm-dd format"));
        return None;
    }

    Some(value.clone())
}

fn check_integer(
    field: &str,
    schema: &JsonValue,
    value: &JsonValue,
    issues: &mut Vec<FieldIssue>,
) -> Option<JsonValue> {
    let Some(n) = as_integer(value) else {
        issues.push(FieldIssue::new(field, "must be an integer"));
        return None;
    };

    if let Some(min) = schema.get("minimum").and_then(JsonValue::as_i64) {
        if n < min {
            issues.push(FieldIssue::new(field, format!("must be at least {min}")));
            return None;
        }
    }
    if let Some(max) = schema.get("maximum").and_then(JsonValue::as_i64) {
        if n > max {
            issues.push(FieldIssue::new(field, format!("must be at most {max}")));
            return None;
        }
    }

    Some(JsonValue::from(n))
}

fn check_number(field: &str, value: &JsonValue, issues: &mut Vec<FieldIssue>) -> Option<JsonValue> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    };
    match parsed.and_then(serde_json::Number::from_f64) {
        Some(n) => Some(JsonValue::Number(n)),
        None => {
            issues.push(FieldIssue::new(field, "must be a number"));
            None
        }
    }
}

fn check_boolean(field: &str, value: &JsonValue, issues: &mut Vec<FieldIssue>) -> Option<JsonValue> {
    match value {
        JsonValue::Bool(b) => Some(JsonValue::Bool(*b)),
        JsonValue::String(s) if s == "true" => Some(JsonValue::Bool(true)),
        JsonValue::String(s) if s == "false" => Some(JsonValue::Bool(false)),
        _ => {
            issues.push(FieldIssue::new(field, "must be a boolean"));
            None
        }
    }
}

fn check_array(
    field: &str,
    schema: &JsonValue,
    value: &JsonValue,
    issues: &mut Vec<FieldIssue>,
) -> Option<JsonValue> {
    let Some(items) = value.as_array() else {
        issues.push(FieldIssue::new(field, "must be an array"));
        return None;
    };

    if let Some(min) = schema.get("minItems").and_then(JsonValue::as_u64) {
        if (items.len() as u64) < min {
            let noun = if min == 1 { "item" } else { "items" };
            issues.push(FieldIssue::new(
                field,
                format!("must contain at least {min} {noun}"),
            ));
            return None;
        }
    }

    let Some(item_schema) = schema.get("items") else {
        return Some(value.clone());
    };

    let before = issues.len();
    let checked: Vec<JsonValue> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| check_value(&format!("{field}[{i}]"), item_schema, item, issues))
        .collect();

    (issues.len() == before).then_some(JsonValue::Array(checked))
}

fn check_nested(
    field: &str,
    schema: &JsonValue,
    value: &JsonValue,
    issues: &mut Vec<FieldIssue>,
) -> Option<JsonValue> {
    let Some(input) = value.as_object() else {
        issues.push(FieldIssue::new(field, "must be an object"));
        return None;
    };

    let empty = Map::new();
    let properties = schema
        .get("properties")
        .and_then(JsonValue::as_object)
        .unwrap_or(&empty);
    let required: Vec<&str> = schema
        .get("required")
        .and_then(JsonValue::as_array)
        .map(|r| r.iter().filter_map(JsonValue::as_str).collect())
        .unwrap_or_default();

    let before = issues.len();
    let out = check_object(field, properties.iter(), &required, input, issues);
    (issues.len() == before).then_some(JsonValue::Object(out))
}

fn as_integer(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn list_values(values: &[JsonValue]) -> String {
    values
        .iter()
        .map(|v| match v.as_str() {
            Some(s) => format!("\"{s}\""),
            None => v.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn search_schema() -> ObjectJsonSchema {
        SchemaBuilder::new()
            .non_empty_string("query", "Search query", true)
            .integer_with_default("display", "Results per page", 1, 100, 10)
            .integer_with_default("start", "Start position", 1, 1000, 1)
            .enum_values("sort", "Sort order", &["sim", "date"], false)
            .build()
    }

    fn trend_schema() -> ObjectJsonSchema {
        let group = SchemaBuilder::new()
            .string("groupName", "Group name", true)
            .string_array("keywords", "Keywords", true)
            .build();
        SchemaBuilder::new()
            .date("startDate", "Start", true)
            .date("endDate", "End", true)
            .enum_values("timeUnit", "Bucket", &["date", "week", "month"], true)
            .object_array("keywordGroups", "Groups", group, true)
            .build()
    }

    #[test]
    fn test_defaults_applied() {
        let input = validate(&search_schema(), &json!({"query": "rust"})).unwrap();
        assert_eq!(
            input.into_value(),
            json!({"query": "rust", "display": 10, "start": 1})
        );
    }

    #[test]
    fn test_null_is_empty_object() {
        let err = validate(&search_schema(), &JsonValue::Null).unwrap_err();
        assert!(err.has_field("query"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = validate(&search_schema(), &json!(["query"])).unwrap_err();
        assert_eq!(err.to_string(), "`arguments` must be an object, got array");
    }

    #[test]
    fn test_undeclared_fields_dropped() {
        let input = validate(
            &search_schema(),
            &json!({"query": "rust", "type": "news", "extra": true}),
        )
        .unwrap();
        assert!(input.get("type").is_none());
        assert!(input.get("extra").is_none());
    }

    #[rstest]
    #[case(json!(20), 20)]
    #[case(json!(20.0), 20)]
    #[case(json!("20"), 20)]
    fn test_integer_coercion(#[case] display: JsonValue, #[case] expected: i64) {
        let input = validate(&search_schema(), &json!({"query": "q", "display": display})).unwrap();
        assert_eq!(input.get("display"), Some(&json!(expected)));
    }

    #[rstest]
    #[case(json!({"query": "q", "display": 0}), "display", "must be at least 1")]
    #[case(json!({"query": "q", "display": 101}), "display", "must be at most 100")]
    #[case(json!({"query": "q", "display": 1.5}), "display", "must be an integer")]
    #[case(json!({"query": "q", "sort": "random"}), "sort", "must be one of \"sim\", \"date\"")]
    #[case(json!({"query": ""}), "query", "must not be empty")]
    #[case(json!({"query": 42}), "query", "must be a string")]
    fn test_constraint_violations(
        #[case] raw: JsonValue,
        #[case] field: &str,
        #[case] expected: &str,
    ) {
        let err = validate(&search_schema(), &raw).unwrap_err();
        assert_eq!(err.issues(), &[FieldIssue::new(field, expected)]);
    }

    #[test]
    fn test_collects_all_issues() {
        let err = validate(&search_schema(), &json!({"display": "many", "sort": "x"})).unwrap_err();
        assert_eq!(err.fields(), vec!["query", "display", "sort"]);
    }

    #[test]
    fn test_nested_paths_reported() {
        let err = validate(
            &trend_schema(),
            &json!({
                "startDate": "2024-02-30",
                "endDate": "2024-03-01",
                "timeUnit": "day",
                "keywordGroups": [{"groupName": "g", "keywords": ["a", 1]}]
            }),
        )
        .unwrap_err();

        assert_eq!(
            err.fields(),
            vec!["startDate", "timeUnit", "keywordGroups[0].keywords[1]"]
        );
    }

    #[test]
    fn test_empty_object_array_rejected() {
        let err = validate(
            &trend_schema(),
            &json!({
                "startDate": "2024-01-01",
                "endDate": "2024-03-01",
                "timeUnit": "month",
                "keywordGroups": []
            }),
        )
        .unwrap_err();
        assert_eq!(
            err.issues(),
            &[FieldIssue::new("keywordGroups", "must contain at least 1 item")]
        );
    }

    #[test]
    fn test_valid_trend_passes_through() {
        let raw = json!({
            "startDate": "2024-01-01",
            "endDate": "2024-03-01",
            "timeUnit": "week",
            "keywordGroups": [{"groupName": "lang", "keywords": ["rust", "go"]}]
        });
        let input = validate(&trend_schema(), &raw).unwrap();
        assert_eq!(input.into_value(), raw);
    }

    #[test]
    fn test_deserialize_typed() {
        #[derive(serde::Deserialize)]
        struct Params {
            query: String,
            display: u32,
            start: u32,
        }

        let input = validate(&search_schema(), &json!({"query": "rust", "start": "3"})).unwrap();
        let params: Params = input.deserialize().unwrap();
        assert_eq!(params.query, "rust");
        assert_eq!(params.display, 10);
        assert_eq!(params.start, 3);
    }
}
