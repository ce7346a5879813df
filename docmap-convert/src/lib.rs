//! Schema-driven converters between typed objects and generic records.
//!
//! - [`DocumentMapping`]: a converter for one Rust type, built by binding
//!   each field to a property descriptor
//! - [`DocumentConverter`]: the encode/decode contract every converter meets
//! - [`CoercionMatrix`]: the table of widen/narrow paths between field types
//!   and the store's native arrays
//! - [`cardinality`]: null/absence rules per cardinality
//! - [`ConverterRegistry`]: per-type lookup, encode mode, store hand-off
//!
//! Converters hold no mutable state; encode and decode may run concurrently
//! on any number of threads.

pub mod cardinality;
mod coercion;
mod config;
mod converter;
mod error;
mod mapping;
mod registry;

pub use cardinality::FieldValue;
pub use coercion::{Coercion, CoercionMatrix, FieldKind, FieldType, Scalar};
pub use config::{ConverterConfig, EncodeMode};
pub use converter::DocumentConverter;
pub use error::{ConvertError, ConvertResult};
pub use mapping::{DocumentMapping, MappingBuilder};
pub use registry::ConverterRegistry;

pub use docmap_record::{
    DocumentStore, GenericRecord, InMemoryStore, PropertyValues, RecordBuilder, StoreError,
};
pub use docmap_schema::{
    Cardinality, DataType, PropertyDescriptor, SchemaBuilder, SchemaDescriptor, SchemaError,
};
