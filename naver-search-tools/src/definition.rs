//! Operation definition types.
//!
//! An [`OperationDefinition`] is what the catalog advertises to callers: a
//! unique name, a human description and the JSON Schema of the accepted
//! arguments. The same schema drives argument validation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// JSON Schema for an object type (operation arguments).
///
/// Property order is preserved so that advertised schemas list fields in the
/// order they were declared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectJsonSchema {
    /// The schema type (always "object" for operation arguments).
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Property definitions.
    pub properties: IndexMap<String, JsonValue>,

    /// List of required property names.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,

    /// Description of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ObjectJsonSchema {
    /// Create a new empty object schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: IndexMap::new(),
            required: Vec::new(),
            description: None,
        }
    }

    /// Add a property to the schema.
    #[must_use]
    pub fn with_property(mut self, name: &str, schema: JsonValue, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required && !self.is_required(name) {
            self.required.push(name.to_string());
        }
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Check if a property is required.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Get a property schema.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&JsonValue> {
        self.properties.get(name)
    }

    /// Get the number of properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Convert to a JSON value.
    pub fn to_json(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Default for ObjectJsonSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectJsonSchema> for JsonValue {
    fn from(schema: ObjectJsonSchema) -> Self {
        serde_json::to_value(schema).unwrap_or(JsonValue::Null)
    }
}

/// Complete definition of one invocable operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    /// Operation name, unique within a registry.
    pub name: String,

    /// Human-readable description of what the operation does.
    pub description: String,

    /// Schema of the accepted arguments.
    #[serde(rename = "inputSchema")]
    pub parameters: ObjectJsonSchema,
}

impl OperationDefinition {
    /// Create a new definition with an empty argument schema.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: ObjectJsonSchema::new(),
        }
    }

    /// Set the argument schema.
    #[must_use]
    pub fn with_parameters(mut self, schema: ObjectJsonSchema) -> Self {
        self.parameters = schema;
        self
    }

    /// Get the operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the argument schema.
    #[must_use]
    pub fn parameters(&self) -> &ObjectJsonSchema {
        &self.parameters
    }

    /// The argument schema as a JSON Schema document.
    #[must_use]
    pub fn input_schema(&self) -> JsonValue {
        self.parameters.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_json_schema_new() {
        let schema = ObjectJsonSchema::new();
        assert_eq!(schema.schema_type, "object");
        assert!(schema.properties.is_empty());
        assert!(schema.required.is_empty());
    }

    #[test]
    fn test_object_json_schema_with_property() {
        let schema = ObjectJsonSchema::new()
            .with_property("query", serde_json::json!({"type": "string"}), true)
            .with_property("display", serde_json::json!({"type": "integer"}), false);

        assert_eq!(schema.property_count(), 2);
        assert!(schema.is_required("query"));
        assert!(!schema.is_required("display"));
    }

    #[test]
    fn test_required_not_duplicated() {
        let schema = ObjectJsonSchema::new()
            .with_property("query", serde_json::json!({"type": "string"}), true)
            .with_property("query", serde_json::json!({"type": "string"}), true);

        assert_eq!(schema.required, vec!["query".to_string()]);
    }

    #[test]
    fn test_definition_serializes_input_schema() {
        let def = OperationDefinition::new("search_news", "Search news").with_parameters(
            ObjectJsonSchema::new().with_property(
                "query",
                serde_json::json!({"type": "string"}),
                true,
            ),
        );

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["name"], "search_news");
        assert_eq!(json["inputSchema"]["type"], "object");
        assert_eq!(json["inputSchema"]["required"][0], "query");
    }

    #[test]
    fn test_property_order_preserved() {
        let schema = ObjectJsonSchema::new()
            .with_property("startDate", serde_json::json!({"type": "string"}), true)
            .with_property("endDate", serde_json::json!({"type": "string"}), true)
            .with_property("timeUnit", serde_json::json!({"type": "string"}), true);

        let keys: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["startDate", "endDate", "timeUnit"]);
    }
}
