//! Error types for converter construction and registry operations.

use crate::coercion::FieldKind;
use docmap_record::StoreError;
use docmap_schema::{Cardinality, DataType, SchemaError};
use thiserror::Error;

/// Result type for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while building converters or routing objects through them.
///
/// Baseline `encode`/`decode` never produce these; only mapping construction,
/// strict-mode encoding and the registry do.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No coercion exists between the field's Rust type and the declared data type.
    #[error("property '{property}': no coercion from {field_kind} fields to {data_type} values")]
    UnsupportedCoercion {
        property: String,
        field_kind: FieldKind,
        data_type: DataType,
    },

    /// A scalar binder was used for a repeated property or vice versa.
    #[error("property '{property}' is {cardinality} but was bound as a {binding} field")]
    CardinalityMismatch {
        property: String,
        cardinality: Cardinality,
        binding: &'static str,
    },

    /// A nested converter produces a different schema type than the property declares.
    #[error("property '{property}' expects nested schema '{expected}', converter produces '{found}'")]
    NestedSchemaMismatch {
        property: String,
        expected: String,
        found: String,
    },

    /// Strict mode: a required field was null.
    #[error("required property '{property}' of '{schema_type}' is not set")]
    MissingRequiredProperty {
        schema_type: String,
        property: String,
    },

    #[error("no converter registered for type {0}")]
    UnregisteredType(&'static str),

    #[error("a converter for type {0} is already registered")]
    TypeAlreadyRegistered(&'static str),

    #[error("schema type '{0}' is already registered")]
    DuplicateSchemaType(String),

    /// A record of one schema type was handed to the converter of another.
    #[error("record has schema type '{found}', converter expects '{expected}'")]
    SchemaTypeMismatch { expected: String, found: String },

    #[error("configuration error: {0}")]
    Config(String),
}
