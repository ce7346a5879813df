use crate::error::{StoreError, StoreResult};
use crate::record::GenericRecord;
use docmap_schema::SchemaDescriptor;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// The document store the converters hand records to.
///
/// Implementations own persistence, indexing and validation of stored
/// records against registered schemas.
pub trait DocumentStore: Send + Sync {
    /// Registers a schema. Called once per type before any of its records are stored.
    fn register_schema(&self, schema: &SchemaDescriptor) -> StoreResult<()>;

    /// The registered schema for `schema_type`, if any.
    fn schema(&self, schema_type: &str) -> StoreResult<Option<SchemaDescriptor>>;

    /// Stores a record, replacing any previous record with the same uri.
    fn put(&self, record: GenericRecord) -> StoreResult<()>;

    fn get(&self, uri: &str) -> StoreResult<Option<GenericRecord>>;

    /// Removes a record. Returns whether it existed.
    fn remove(&self, uri: &str) -> StoreResult<bool>;
}

/// A process-local [`DocumentStore`] keyed by uri.
///
/// Checks only that a record's schema type has been registered.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    schemas: RwLock<HashMap<String, SchemaDescriptor>>,
    records: RwLock<HashMap<String, GenericRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(read(&self.records)?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn read<T>(lock: &RwLock<T>) -> StoreResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| StoreError::Unavailable(e.to_string()))
}

fn write<T>(lock: &RwLock<T>) -> StoreResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| StoreError::Unavailable(e.to_string()))
}

impl DocumentStore for InMemoryStore {
    fn register_schema(&self, schema: &SchemaDescriptor) -> StoreResult<()> {
        let mut schemas = write(&self.schemas)?;
        match schemas.get(schema.schema_type()) {
            Some(existing) if existing == schema => Ok(()),
            Some(_) => Err(StoreError::DuplicateSchemaType(
                schema.schema_type().to_string(),
            )),
            None => {
                debug!(schema_type = %schema.schema_type(), "Schema registered with store");
                schemas.insert(schema.schema_type().to_string(), schema.clone());
                Ok(())
            }
        }
    }

    fn schema(&self, schema_type: &str) -> StoreResult<Option<SchemaDescriptor>> {
        Ok(read(&self.schemas)?.get(schema_type).cloned())
    }

    fn put(&self, record: GenericRecord) -> StoreResult<()> {
        if !read(&self.schemas)?.contains_key(record.schema_type()) {
            return Err(StoreError::UnknownSchemaType(record.schema_type().to_string()));
        }
        write(&self.records)?.insert(record.uri().to_string(), record);
        Ok(())
    }

    fn get(&self, uri: &str) -> StoreResult<Option<GenericRecord>> {
        Ok(read(&self.records)?.get(uri).cloned())
    }

    fn remove(&self, uri: &str) -> StoreResult<bool> {
        Ok(write(&self.records)?.remove(uri).is_some())
    }
}
