//! Operation registry.
//!
//! This module provides the `SchemaRegistry` type which holds the advertised
//! definition of every operation and validates raw arguments against them by
//! operation name.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{
    definition::OperationDefinition,
    errors::{SchemaError, SchemaResult},
    validate::{validate, ValidatedInput},
};

/// Registry of operation definitions keyed by name.
///
/// Registration order is preserved, so [`definitions`](Self::definitions)
/// lists operations in the order they were registered.
///
/// # Example
///
/// ```rust
/// use naver_search_tools::{OperationDefinition, SchemaBuilder, SchemaRegistry};
///
/// let mut registry = SchemaRegistry::new();
/// registry
///     .register(
///         OperationDefinition::new("search_news", "Search news articles")
///             .with_parameters(SchemaBuilder::new().string("query", "Query", true).build()),
///     )
///     .unwrap();
///
/// let input = registry
///     .validate("search_news", &serde_json::json!({"query": "rust"}))
///     .unwrap();
/// assert_eq!(input.get("query").unwrap(), "rust");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    operations: IndexMap<String, OperationDefinition>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation definition.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateOperation`] if the name is taken. The
    /// existing definition is left in place.
    pub fn register(&mut self, definition: OperationDefinition) -> SchemaResult<()> {
        if self.operations.contains_key(definition.name()) {
            return Err(SchemaError::DuplicateOperation(definition.name));
        }
        self.operations.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Get a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OperationDefinition> {
        self.operations.get(name)
    }

    /// Check if an operation is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// All definitions, in registration order.
    #[must_use]
    pub fn definitions(&self) -> Vec<&OperationDefinition> {
        self.operations.values().collect()
    }

    /// All operation names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Validate raw arguments for the named operation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::OperationNotFound`] for an unknown name and
    /// [`SchemaError::Validation`] when the arguments do not conform.
    pub fn validate(&self, name: &str, raw: &JsonValue) -> SchemaResult<ValidatedInput> {
        let definition = self
            .get(name)
            .ok_or_else(|| SchemaError::OperationNotFound(name.to_string()))?;

        debug!(operation = %name, "Validating arguments");
        validate(definition.parameters(), raw).map_err(|e| SchemaError::validation(name, e))
    }
}
