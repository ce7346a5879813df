//! Schema model for docmap.
//!
//! Defines the contract a document type publishes to the document store:
//! - [`PropertyDescriptor`]: one named property with its data type, cardinality
//!   and opaque indexing/tokenizing hints
//! - [`SchemaDescriptor`]: the frozen, ordered property list of one document type
//! - [`SchemaBuilder`]: accumulates descriptors and enforces name uniqueness
//!
//! Descriptors are immutable after construction and are shared freely across
//! threads by the converters in `docmap-convert`.

mod error;
mod property;
mod schema;
mod types;

pub use error::{SchemaError, SchemaResult};
pub use property::{PropertyDescriptor, PropertyDescriptorBuilder, SNIPPET_OFFSET_DISABLED};
pub use schema::{SchemaBuilder, SchemaDescriptor};
pub use types::{Cardinality, DataType, IndexingType, TokenizerType};
