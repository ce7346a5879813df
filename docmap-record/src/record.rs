use crate::error::{StoreError, StoreResult};
use crate::values::{NativeType, PropertyValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A schema-flexible document as the store sees it.
///
/// Records are transient: built per operation and handed across the store
/// boundary. Properties are keyed by name in sorted order so serialized
/// records are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericRecord {
    uri: String,
    schema_type: String,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValues>,
}

impl GenericRecord {
    /// Starts a builder for a record identified by `uri`.
    pub fn builder(uri: impl Into<String>, schema_type: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(uri, schema_type)
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn schema_type(&self) -> &str {
        &self.schema_type
    }

    /// Whether the property is set at all (a zero-length array counts as set).
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Raw access to a property regardless of its native type.
    pub fn property(&self, name: &str) -> Option<&PropertyValues> {
        self.properties.get(name)
    }

    /// The property's array if it is present and stored as `native_type`.
    ///
    /// A property stored under another native type reads as absent.
    pub fn property_array(&self, name: &str, native_type: NativeType) -> Option<&PropertyValues> {
        let values = self.properties.get(name)?;
        if values.native_type() != native_type {
            warn!(
                uri = %self.uri,
                property = name,
                expected = %native_type,
                actual = %values.native_type(),
                "Property stored under a different native type; treating as absent"
            );
            return None;
        }
        Some(values)
    }

    pub fn property_strings(&self, name: &str) -> Option<&[String]> {
        match self.property_array(name, NativeType::Strings)? {
            PropertyValues::Strings(v) => Some(v),
            _ => None,
        }
    }

    pub fn property_longs(&self, name: &str) -> Option<&[i64]> {
        match self.property_array(name, NativeType::Longs)? {
            PropertyValues::Longs(v) => Some(v),
            _ => None,
        }
    }

    pub fn property_doubles(&self, name: &str) -> Option<&[f64]> {
        match self.property_array(name, NativeType::Doubles)? {
            PropertyValues::Doubles(v) => Some(v),
            _ => None,
        }
    }

    pub fn property_booleans(&self, name: &str) -> Option<&[bool]> {
        match self.property_array(name, NativeType::Booleans)? {
            PropertyValues::Booleans(v) => Some(v),
            _ => None,
        }
    }

    pub fn property_bytes(&self, name: &str) -> Option<&[Vec<u8>]> {
        match self.property_array(name, NativeType::Bytes)? {
            PropertyValues::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn property_documents(&self, name: &str) -> Option<&[GenericRecord]> {
        match self.property_array(name, NativeType::Documents)? {
            PropertyValues::Documents(v) => Some(v),
            _ => None,
        }
    }

    /// Names of all set properties, sorted.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Serializes the record, nested documents included.
    ///
    /// JSON has no encoding for NaN or infinity, so a record holding one is
    /// rejected with `NonFiniteDouble`.
    pub fn to_json(&self) -> StoreResult<String> {
        self.check_finite()?;
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn check_finite(&self) -> StoreResult<()> {
        for (name, values) in &self.properties {
            match values {
                PropertyValues::Doubles(v) if v.iter().any(|d| !d.is_finite()) => {
                    return Err(StoreError::NonFiniteDouble {
                        uri: self.uri.clone(),
                        property: name.clone(),
                    });
                }
                PropertyValues::Documents(docs) => {
                    for doc in docs {
                        doc.check_finite()?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Builds a [`GenericRecord`] property by property.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: GenericRecord,
}

impl RecordBuilder {
    pub fn new(uri: impl Into<String>, schema_type: impl Into<String>) -> Self {
        Self {
            record: GenericRecord {
                uri: uri.into(),
                schema_type: schema_type.into(),
                properties: BTreeMap::new(),
            },
        }
    }

    /// Sets (or replaces) a property.
    pub fn set_property(mut self, name: impl Into<String>, values: impl Into<PropertyValues>) -> Self {
        self.insert(name, values);
        self
    }

    /// In-place variant of [`set_property`](Self::set_property).
    pub fn insert(&mut self, name: impl Into<String>, values: impl Into<PropertyValues>) {
        self.record.properties.insert(name.into(), values.into());
    }

    pub fn build(self) -> GenericRecord {
        self.record
    }
}
