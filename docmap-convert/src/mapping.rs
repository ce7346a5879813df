//! Runtime-registered converters.
//!
//! A [`DocumentMapping`] is assembled by binding each field of a typed
//! object to a [`PropertyDescriptor`] with a getter/setter pair. The schema
//! is derived from the bindings, so fields and properties correspond 1:1.
//!
//! ```ignore
//! #[derive(Default)]
//! struct Gift {
//!     uri: String,
//!     tags: Option<Vec<String>>,
//!     price: Option<f32>,
//! }
//!
//! let mapping = DocumentMapping::<Gift>::builder("Gift", |g| &g.uri, |g, uri| g.uri = uri)
//!     .repeated(
//!         PropertyDescriptor::string("tags", Cardinality::Repeated),
//!         |g| g.tags.as_deref(),
//!         |g, v| g.tags = v,
//!     )?
//!     .scalar(
//!         PropertyDescriptor::double("price", Cardinality::Required),
//!         |g| g.price.as_ref(),
//!         |g, v| g.price = v,
//!     )?
//!     .build()?;
//! ```

use crate::cardinality::{FieldValue, check_required, decode_property, encode_property};
use crate::coercion::{Coercion, CoercionMatrix, FieldKind, FieldType, Scalar};
use crate::converter::DocumentConverter;
use crate::error::{ConvertError, ConvertResult};
use docmap_record::{GenericRecord, RecordBuilder};
use docmap_schema::{Cardinality, PropertyDescriptor, SchemaBuilder, SchemaDescriptor};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type ReadFn<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&mut T, FieldValue) + Send + Sync>;
type NestedCheck = Box<dyn Fn(&GenericRecord) -> ConvertResult<()> + Send + Sync>;

struct FieldBinding<T> {
    descriptor: PropertyDescriptor,
    coercion: Coercion,
    read: ReadFn<T>,
    write: WriteFn<T>,
    /// Required-property check for nested documents, run in strict mode.
    nested: Option<NestedCheck>,
}

/// A converter for `T` built from explicit field bindings.
pub struct DocumentMapping<T> {
    schema: Arc<SchemaDescriptor>,
    uri_get: fn(&T) -> &str,
    uri_set: fn(&mut T, String),
    bindings: Vec<FieldBinding<T>>,
}

impl<T: Default + 'static> DocumentMapping<T> {
    /// Starts a mapping for `schema_type`; `uri_get`/`uri_set` access the
    /// object's identity field.
    pub fn builder(
        schema_type: impl Into<String>,
        uri_get: fn(&T) -> &str,
        uri_set: fn(&mut T, String),
    ) -> MappingBuilder<T> {
        MappingBuilder {
            schema: SchemaBuilder::new(schema_type),
            uri_get,
            uri_set,
            bindings: Vec::new(),
        }
    }

    /// The frozen schema, shared.
    pub fn shared_schema(&self) -> Arc<SchemaDescriptor> {
        Arc::clone(&self.schema)
    }
}

impl<T: Default + 'static> DocumentConverter for DocumentMapping<T> {
    type Object = T;

    fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    fn encode(&self, object: &T) -> GenericRecord {
        let mut builder = RecordBuilder::new((self.uri_get)(object), self.schema.schema_type());
        for binding in &self.bindings {
            let value = (binding.read)(object);
            if let Some(values) = encode_property(&binding.descriptor, &binding.coercion, value) {
                builder.insert(binding.descriptor.name(), values);
            }
        }
        builder.build()
    }

    fn decode(&self, record: &GenericRecord) -> T {
        let mut object = T::default();
        (self.uri_set)(&mut object, record.uri().to_string());
        for binding in &self.bindings {
            let value = decode_property(&binding.descriptor, &binding.coercion, record);
            (binding.write)(&mut object, value);
        }
        object
    }

    fn validate_required(&self, record: &GenericRecord) -> ConvertResult<()> {
        check_required(&self.schema, record)?;
        for binding in &self.bindings {
            let Some(check) = &binding.nested else {
                continue;
            };
            let documents = record
                .property_documents(binding.descriptor.name())
                .unwrap_or_default();
            for document in documents {
                check(document)?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for DocumentMapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentMapping")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Accumulates field bindings for a [`DocumentMapping`].
///
/// Each binder checks cardinality and resolves its coercion immediately, so
/// every misconfiguration is reported before the mapping exists.
pub struct MappingBuilder<T> {
    schema: SchemaBuilder,
    uri_get: fn(&T) -> &str,
    uri_set: fn(&mut T, String),
    bindings: Vec<FieldBinding<T>>,
}

impl<T: Default + 'static> MappingBuilder<T> {
    /// Binds a `Required` or `Optional` field holding an `Option<V>`.
    pub fn scalar<V: FieldType>(
        self,
        descriptor: PropertyDescriptor,
        get: fn(&T) -> Option<&V>,
        set: fn(&mut T, Option<V>),
    ) -> ConvertResult<Self> {
        self.bind(
            descriptor,
            V::KIND,
            false,
            Box::new(move |object: &T| {
                FieldValue::Single(get(object).cloned().map(V::into_scalar))
            }),
            Box::new(move |object: &mut T, value: FieldValue| {
                set(object, single(value).and_then(V::from_scalar))
            }),
            None,
        )
    }

    /// Binds a `Repeated` field holding an `Option<Vec<V>>`.
    pub fn repeated<V: FieldType>(
        self,
        descriptor: PropertyDescriptor,
        get: fn(&T) -> Option<&[V]>,
        set: fn(&mut T, Option<Vec<V>>),
    ) -> ConvertResult<Self> {
        self.bind(
            descriptor,
            V::KIND,
            true,
            Box::new(move |object: &T| {
                FieldValue::Repeated(
                    get(object).map(|vs| vs.iter().cloned().map(V::into_scalar).collect()),
                )
            }),
            Box::new(move |object: &mut T, value: FieldValue| {
                set(
                    object,
                    repeated(value).map(|vs| vs.into_iter().filter_map(V::from_scalar).collect()),
                )
            }),
            None,
        )
    }

    /// Binds a `Required` or `Optional` nested document through another converter.
    pub fn nested<C>(
        self,
        descriptor: PropertyDescriptor,
        converter: Arc<C>,
        get: fn(&T) -> Option<&C::Object>,
        set: fn(&mut T, Option<C::Object>),
    ) -> ConvertResult<Self>
    where
        C: DocumentConverter + 'static,
        C::Object: 'static,
    {
        check_nested(&descriptor, converter.as_ref())?;
        let reader = Arc::clone(&converter);
        let checker = Arc::clone(&converter);
        self.bind(
            descriptor,
            FieldKind::Document,
            false,
            Box::new(move |object: &T| {
                FieldValue::Single(get(object).map(|o| Scalar::Document(reader.encode(o))))
            }),
            Box::new(move |object: &mut T, value: FieldValue| {
                let decoded = match single(value) {
                    Some(Scalar::Document(record)) => Some(converter.decode(&record)),
                    _ => None,
                };
                set(object, decoded)
            }),
            Some(nested_check(checker)),
        )
    }

    /// Binds a `Repeated` nested document field through another converter.
    pub fn nested_repeated<C>(
        self,
        descriptor: PropertyDescriptor,
        converter: Arc<C>,
        get: fn(&T) -> Option<&[C::Object]>,
        set: fn(&mut T, Option<Vec<C::Object>>),
    ) -> ConvertResult<Self>
    where
        C: DocumentConverter + 'static,
        C::Object: 'static,
    {
        check_nested(&descriptor, converter.as_ref())?;
        let reader = Arc::clone(&converter);
        let checker = Arc::clone(&converter);
        self.bind(
            descriptor,
            FieldKind::Document,
            true,
            Box::new(move |object: &T| {
                FieldValue::Repeated(get(object).map(|os| {
                    os.iter()
                        .map(|o| Scalar::Document(reader.encode(o)))
                        .collect()
                }))
            }),
            Box::new(move |object: &mut T, value: FieldValue| {
                let decoded = repeated(value).map(|scalars| {
                    scalars
                        .into_iter()
                        .filter_map(|s| match s {
                            Scalar::Document(record) => Some(converter.decode(&record)),
                            _ => None,
                        })
                        .collect()
                });
                set(object, decoded)
            }),
            Some(nested_check(checker)),
        )
    }

    fn bind(
        mut self,
        descriptor: PropertyDescriptor,
        field_kind: FieldKind,
        is_repeated: bool,
        read: ReadFn<T>,
        write: WriteFn<T>,
        nested: Option<NestedCheck>,
    ) -> ConvertResult<Self> {
        let cardinality = descriptor.cardinality();
        if is_repeated != (cardinality == Cardinality::Repeated) {
            return Err(ConvertError::CardinalityMismatch {
                property: descriptor.name().to_string(),
                cardinality,
                binding: if is_repeated { "repeated" } else { "scalar" },
            });
        }

        let coercion = CoercionMatrix::resolve(&descriptor, field_kind)?;
        self.schema.push(descriptor.clone())?;
        self.bindings.push(FieldBinding {
            descriptor,
            coercion,
            read,
            write,
            nested,
        });
        Ok(self)
    }

    /// Freezes the schema and returns the converter.
    pub fn build(self) -> ConvertResult<DocumentMapping<T>> {
        let schema = self.schema.build()?;
        debug!(
            schema_type = %schema.schema_type(),
            bindings = self.bindings.len(),
            "Document mapping built"
        );
        Ok(DocumentMapping {
            schema: Arc::new(schema),
            uri_get: self.uri_get,
            uri_set: self.uri_set,
            bindings: self.bindings,
        })
    }
}

impl<T> fmt::Debug for MappingBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingBuilder")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

fn single(value: FieldValue) -> Option<Scalar> {
    match value {
        FieldValue::Single(s) => s,
        FieldValue::Repeated(_) => None,
    }
}

fn repeated(value: FieldValue) -> Option<Vec<Scalar>> {
    match value {
        FieldValue::Repeated(vs) => vs,
        FieldValue::Single(_) => None,
    }
}

fn nested_check<C: DocumentConverter + 'static>(converter: Arc<C>) -> NestedCheck {
    Box::new(move |record: &GenericRecord| converter.validate_required(record))
}

fn check_nested<C: DocumentConverter>(
    descriptor: &PropertyDescriptor,
    converter: &C,
) -> ConvertResult<()> {
    let expected = descriptor.document_schema_type().unwrap_or_default();
    if expected != converter.schema_type() {
        return Err(ConvertError::NestedSchemaMismatch {
            property: descriptor.name().to_string(),
            expected: expected.to_string(),
            found: converter.schema_type().to_string(),
        });
    }
    Ok(())
}
