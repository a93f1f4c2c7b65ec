//! Schema and validation error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single constraint violation on one argument field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Path of the offending field (`keywordGroups[0].keywords`).
    pub field: String,
    /// The constraint the value failed to meet.
    pub expected: String,
}

impl FieldIssue {
    /// Create a new field issue.
    #[must_use]
    pub fn new(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.field, self.expected)
    }
}

/// Arguments did not conform to an operation schema.
///
/// Carries every violation found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Create from a list of issues.
    #[must_use]
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Create from a single issue.
    #[must_use]
    pub fn single(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new(field, expected)])
    }

    /// All collected issues.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Names of the offending fields.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }

    /// Check whether a given field path was reported.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised by the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No operation with this name is registered.
    #[error("Unknown operation: {0}")]
    OperationNotFound(String),

    /// Arguments failed validation.
    #[error("Invalid arguments for {operation}: {source}")]
    Validation {
        /// Operation the arguments were meant for.
        operation: String,
        /// Field-level details.
        #[source]
        source: ValidationError,
    },

    /// An operation with this name was already registered.
    #[error("Operation already registered: {0}")]
    DuplicateOperation(String),
}

impl SchemaError {
    /// Create a validation error for an operation.
    #[must_use]
    pub fn validation(operation: impl Into<String>, source: ValidationError) -> Self {
        Self::Validation {
            operation: operation.into(),
            source,
        }
    }

    /// Check if this is an unknown-operation error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::OperationNotFound(_))
    }

    /// Field-level details, when this is a validation error.
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
