//! JSON schema construction.
//!
//! This module provides the `SchemaBuilder` API used to declare operation
//! argument schemas. Only the keywords understood by
//! [`validate`](crate::validate) are emitted.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::definition::ObjectJsonSchema;

/// Schema builder for manual schema construction.
///
/// # Example
///
/// ```rust
/// use naver_search_tools::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .non_empty_string("query", "Search query", true)
///     .integer_with_default("display", "Number of results", 1, 100, 10)
///     .enum_values("sort", "Sort order", &["sim", "date"], false)
///     .build();
///
/// assert!(schema.is_required("query"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    properties: IndexMap<String, JsonValue>,
    required: Vec<String>,
    description: Option<String>,
}

impl SchemaBuilder {
    /// Create a new empty schema builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string property.
    #[must_use]
    pub fn string(self, name: &str, desc: &str, required: bool) -> Self {
        self.raw(
            name,
            serde_json::json!({
                "type": "string",
                "description": desc
            }),
            required,
        )
    }

    /// Add a string property that must not be empty.
    #[must_use]
    pub fn non_empty_string(self, name: &str, desc: &str, required: bool) -> Self {
        self.raw(
            name,
            serde_json::json!({
                "type": "string",
                "description": desc,
                "minLength": 1
            }),
            required,
        )
    }

    /// Add a calendar date property (`yyyy-mm-dd`).
    #[must_use]
    pub fn date(self, name: &str, desc: &str, required: bool) -> Self {
        self.raw(
            name,
            serde_json::json!({
                "type": "string",
                "description": desc,
                "format": "date"
            }),
            required,
        )
    }

    /// Add an enum property (string values).
    #[must_use]
    pub fn enum_values(self, name: &str, desc: &str, values: &[&str], required: bool) -> Self {
        self.raw(
            name,
            serde_json::json!({
                "type": "string",
                "description": desc,
                "enum": values
            }),
            required,
        )
    }

    /// Add an integer property with constraints.
    #[must_use]
    pub fn integer_constrained(
        self,
        name: &str,
        desc: &str,
        required: bool,
        minimum: Option<i64>,
        maximum: Option<i64>,
    ) -> Self {
        let mut prop = serde_json::json!({
            "type": "integer",
            "description": desc
        });
        if let Some(min) = minimum {
            prop["minimum"] = JsonValue::from(min);
        }
        if let Some(max) = maximum {
            prop["maximum"] = JsonValue::from(max);
        }
        self.raw(name, prop, required)
    }

    /// Add an optional bounded integer that falls back to `default` when absent.
    #[must_use]
    pub fn integer_with_default(
        self,
        name: &str,
        desc: &str,
        minimum: i64,
        maximum: i64,
        default: i64,
    ) -> Self {
        self.raw(
            name,
            serde_json::json!({
                "type": "integer",
                "description": desc,
                "minimum": minimum,
                "maximum": maximum,
                "default": default
            }),
            false,
        )
    }

    /// Add an array property.
    #[must_use]
    pub fn array(
        self,
        name: &str,
        desc: &str,
        items: JsonValue,
        min_items: Option<usize>,
        required: bool,
    ) -> Self {
        let mut prop = serde_json::json!({
            "type": "array",
            "description": desc,
            "items": items
        });
        if let Some(min) = min_items {
            prop["minItems"] = JsonValue::from(min);
        }
        self.raw(name, prop, required)
    }

    /// Add a string array property.
    #[must_use]
    pub fn string_array(self, name: &str, desc: &str, required: bool) -> Self {
        self.array(name, desc, serde_json::json!({"type": "string"}), None, required)
    }

    /// Add an array whose items are drawn from a fixed set of strings.
    #[must_use]
    pub fn enum_array(self, name: &str, desc: &str, values: &[&str], required: bool) -> Self {
        self.array(
            name,
            desc,
            serde_json::json!({"type": "string", "enum": values}),
            None,
            required,
        )
    }

    /// Add a non-empty array of objects described by `items`.
    #[must_use]
    pub fn object_array(
        self,
        name: &str,
        desc: &str,
        items: ObjectJsonSchema,
        required: bool,
    ) -> Self {
        self.array(name, desc, items.into(), Some(1), required)
    }

    /// Add a raw JSON property.
    #[must_use]
    pub fn raw(mut self, name: &str, schema: JsonValue, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required && !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
        self
    }

    /// Set the schema description.
    #[must_use]
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Build the object schema.
    #[must_use]
    pub fn build(self) -> ObjectJsonSchema {
        ObjectJsonSchema {
            schema_type: "object".to_string(),
            properties: self.properties,
            required: self.required,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_string_and_enum() {
        let schema = SchemaBuilder::new()
            .string("name", "A name", true)
            .enum_values("sort", "Sort order", &["sim", "date"], false)
            .build();

        assert_eq!(schema.property_count(), 2);
        assert!(schema.is_required("name"));
        assert_eq!(
            schema.get_property("sort").unwrap()["enum"],
            serde_json::json!(["sim", "date"])
        );
    }

    #[test]
    fn test_integer_with_default() {
        let schema = SchemaBuilder::new()
            .integer_with_default("display", "Results", 1, 100, 10)
            .build();

        let prop = schema.get_property("display").unwrap();
        assert_eq!(prop["minimum"], 1);
        assert_eq!(prop["maximum"], 100);
        assert_eq!(prop["default"], 10);
        assert!(!schema.is_required("display"));
    }

    #[test]
    fn test_object_array_requires_one_item() {
        let group = SchemaBuilder::new()
            .string("groupName", "Group", true)
            .string_array("keywords", "Keywords", true)
            .build();
        let schema = SchemaBuilder::new()
            .object_array("keywordGroups", "Groups", group, true)
            .build();

        let prop = schema.get_property("keywordGroups").unwrap();
        assert_eq!(prop["type"], "array");
        assert_eq!(prop["minItems"], 1);
        assert_eq!(prop["items"]["required"], serde_json::json!(["groupName", "keywords"]));
    }

    #[test]
    fn test_build_json_shape() {
        let json = serde_json::to_value(
            SchemaBuilder::new()
                .date("startDate", "Start", true)
                .description("Trend range")
                .build(),
        )
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "object",
                "properties": {
                    "startDate": {"type": "string", "description": "Start", "format": "date"}
                },
                "required": ["startDate"],
                "description": "Trend range"
            })
        );
    }
}
