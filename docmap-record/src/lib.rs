//! Generic property records for docmap.
//!
//! A [`GenericRecord`] is the schema-flexible form a document store keeps:
//! a uri, a schema type tag, and a map from property name to a native-typed
//! array ([`PropertyValues`]). A missing key means "not set", which is
//! distinct from a key holding a zero-length array.
//!
//! The [`DocumentStore`] trait is the collaborator contract the converters
//! hand records to. [`InMemoryStore`] is a small reference implementation.

mod error;
mod record;
mod store;
mod values;

pub use error::{StoreError, StoreResult};
pub use record::{GenericRecord, RecordBuilder};
pub use store::{DocumentStore, InMemoryStore};
pub use values::{NativeType, NativeValue, PropertyValues};
