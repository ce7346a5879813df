//! Error types for records and stores.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when handing records to a document store or
/// moving them through JSON.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record was stored before its schema type was registered.
    #[error("schema type not registered: {0}")]
    UnknownSchemaType(String),

    /// A different schema was already registered under the same type.
    #[error("conflicting schema already registered for type: {0}")]
    DuplicateSchemaType(String),

    /// A double property holds NaN or an infinity, which JSON cannot carry.
    #[error("record '{uri}': property '{property}' holds a non-finite double")]
    NonFiniteDouble { uri: String, property: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store's internal state is unusable (e.g. a poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
