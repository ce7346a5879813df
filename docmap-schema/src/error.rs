//! Error types for schema construction.

use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while describing a document type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Two properties of one schema share a name.
    #[error("duplicate property '{name}' in schema '{schema_type}'")]
    DuplicateProperty { schema_type: String, name: String },

    /// A descriptor parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
