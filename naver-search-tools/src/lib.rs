//! # naver-search-tools
//!
//! Operation definitions and argument validation for naver-search.
//!
//! Every operation the server exposes is described by an
//! [`OperationDefinition`]: a name, a description and the JSON Schema of the
//! arguments it accepts. The same schema is used to validate and coerce raw
//! caller arguments before anything is sent upstream.
//!
//! ## Core Concepts
//!
//! - **[`SchemaBuilder`]**: Fluent construction of argument schemas
//! - **[`SchemaRegistry`]**: Ordered registry with name-based validation
//! - **[`ValidatedInput`]**: Conformant arguments with defaults applied
//! - **[`SchemaError`]**: Unknown operation, invalid arguments, duplicates
//!
//! ## Example
//!
//! ```rust
//! use naver_search_tools::{OperationDefinition, SchemaBuilder, SchemaRegistry};
//! use serde_json::json;
//!
//! let mut registry = SchemaRegistry::new();
//! registry
//!     .register(
//!         OperationDefinition::new("search_blog", "Search blog posts").with_parameters(
//!             SchemaBuilder::new()
//!                 .non_empty_string("query", "Search query", true)
//!                 .integer_with_default("display", "Number of results", 1, 100, 10)
//!                 .build(),
//!         ),
//!     )
//!     .unwrap();
//!
//! let err = registry.validate("search_blog", &json!({"display": 500})).unwrap_err();
//! assert!(err.validation_error().unwrap().has_field("query"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod definition;
pub mod errors;
pub mod registry;
pub mod schema;
pub mod validate;

pub use definition::{ObjectJsonSchema, OperationDefinition};
pub use errors::{FieldIssue, SchemaError, SchemaResult, ValidationError};
pub use registry::SchemaRegistry;
pub use schema::SchemaBuilder;
pub use validate::{validate, ValidatedInput};
