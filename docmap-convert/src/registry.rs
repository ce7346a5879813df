//! Per-type converter lookup.
//!
//! The registry is the call boundary between application code and the
//! document store: it finds the converter for a Rust type, applies the
//! configured encode mode, and rejects records of a foreign schema type
//! before they reach a converter.

use crate::config::{ConverterConfig, EncodeMode};
use crate::converter::DocumentConverter;
use crate::error::{ConvertError, ConvertResult};
use docmap_record::{DocumentStore, GenericRecord};
use docmap_schema::SchemaDescriptor;
use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

type SharedConverter<T> = Arc<dyn DocumentConverter<Object = T>>;

/// Converters keyed by the Rust type they produce.
#[derive(Default)]
pub struct ConverterRegistry {
    config: ConverterConfig,
    converters: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    schemas: BTreeMap<String, SchemaDescriptor>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Registers `converter` for its object type.
    ///
    /// Each Rust type and each schema type may be registered once.
    pub fn register<C>(&mut self, converter: C) -> ConvertResult<()>
    where
        C: DocumentConverter + 'static,
        C::Object: 'static,
    {
        self.register_shared(Arc::new(converter))
    }

    /// Registers a converter that is also shared elsewhere (e.g. as a nested converter).
    pub fn register_shared<C>(&mut self, converter: Arc<C>) -> ConvertResult<()>
    where
        C: DocumentConverter + 'static,
        C::Object: 'static,
    {
        let type_id = TypeId::of::<C::Object>();
        if self.converters.contains_key(&type_id) {
            return Err(ConvertError::TypeAlreadyRegistered(type_name::<C::Object>()));
        }
        let schema_type = converter.schema_type().to_string();
        if self.schemas.contains_key(&schema_type) {
            return Err(ConvertError::DuplicateSchemaType(schema_type));
        }

        self.schemas
            .insert(schema_type.clone(), converter.schema().clone());
        let shared: SharedConverter<C::Object> = converter;
        self.converters.insert(type_id, Box::new(shared));
        debug!(
            schema_type = %schema_type,
            object_type = type_name::<C::Object>(),
            "Converter registered"
        );
        Ok(())
    }

    /// The converter for `T`, if registered.
    pub fn converter<T: 'static>(&self) -> Option<SharedConverter<T>> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|c| c.downcast_ref::<SharedConverter<T>>())
            .cloned()
    }

    fn require<T: 'static>(&self) -> ConvertResult<SharedConverter<T>> {
        self.converter::<T>()
            .ok_or(ConvertError::UnregisteredType(type_name::<T>()))
    }

    pub fn contains(&self, schema_type: &str) -> bool {
        self.schemas.contains_key(schema_type)
    }

    pub fn schema(&self, schema_type: &str) -> Option<&SchemaDescriptor> {
        self.schemas.get(schema_type)
    }

    /// All registered schemas, ordered by schema type.
    pub fn schemas(&self) -> impl Iterator<Item = &SchemaDescriptor> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Encodes `object` with its registered converter, honouring the encode mode.
    pub fn encode<T: 'static>(&self, object: &T) -> ConvertResult<GenericRecord> {
        let converter = self.require::<T>()?;
        match self.config.encode_mode {
            EncodeMode::Permissive => Ok(converter.encode(object)),
            EncodeMode::Strict => converter.encode_strict(object),
        }
    }

    /// Decodes `record` as a `T`.
    pub fn decode<T: 'static>(&self, record: &GenericRecord) -> ConvertResult<T> {
        let converter = self.require::<T>()?;
        if self.config.reject_foreign_records && record.schema_type() != converter.schema_type() {
            return Err(ConvertError::SchemaTypeMismatch {
                expected: converter.schema_type().to_string(),
                found: record.schema_type().to_string(),
            });
        }
        Ok(converter.decode(record))
    }

    /// Registers every known schema with `store`.
    pub fn register_schemas(&self, store: &dyn DocumentStore) -> ConvertResult<()> {
        for schema in self.schemas.values() {
            store.register_schema(schema)?;
        }
        info!(count = self.schemas.len(), "Schemas registered with document store");
        Ok(())
    }

    /// Encodes `object` and stores the record.
    pub fn put<T: 'static>(&self, store: &dyn DocumentStore, object: &T) -> ConvertResult<()> {
        let record = self.encode(object)?;
        store.put(record)?;
        Ok(())
    }

    /// Loads the record at `uri` and decodes it as a `T`.
    pub fn get<T: 'static>(&self, store: &dyn DocumentStore, uri: &str) -> ConvertResult<Option<T>> {
        match store.get(uri)? {
            Some(record) => self.decode(&record).map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("config", &self.config)
            .field("schema_types", &self.schemas.keys().collect::<Vec<_>>())
            .finish()
    }
}
