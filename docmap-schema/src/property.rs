use crate::error::{SchemaError, SchemaResult};
use crate::types::{Cardinality, DataType, IndexingType, TokenizerType};
use serde::{Deserialize, Serialize};

/// Sentinel for [`PropertyDescriptor::snippet_offset_percent`] meaning the
/// store picks the snippet anchor itself.
pub const SNIPPET_OFFSET_DISABLED: f32 = -1.0;

/// Describes one property of a document type.
///
/// Immutable once built. Indexing, tokenizer and snippet-offset values are
/// hints for the document store and are never interpreted by the converters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyDescriptor")]
pub struct PropertyDescriptor {
    name: String,
    data_type: DataType,
    cardinality: Cardinality,
    indexing_type: IndexingType,
    tokenizer_type: TokenizerType,
    snippet_offset_percent: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    document_schema_type: Option<String>,
}

impl PropertyDescriptor {
    /// Starts a descriptor for `name`. Defaults to an optional string property.
    pub fn builder(name: impl Into<String>) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::new(name)
    }

    fn simple(name: impl Into<String>, data_type: DataType, cardinality: Cardinality) -> Self {
        Self {
            name: name.into(),
            data_type,
            cardinality,
            indexing_type: IndexingType::NONE,
            tokenizer_type: TokenizerType::PLAIN,
            snippet_offset_percent: SNIPPET_OFFSET_DISABLED,
            document_schema_type: None,
        }
    }

    /// Shorthand for a string property with default hints.
    pub fn string(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self::simple(name, DataType::String, cardinality)
    }

    /// Shorthand for a 64-bit integer property.
    pub fn int64(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self::simple(name, DataType::Int64, cardinality)
    }

    /// Shorthand for a double-precision property.
    pub fn double(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self::simple(name, DataType::Double, cardinality)
    }

    /// Shorthand for a boolean property.
    pub fn boolean(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self::simple(name, DataType::Boolean, cardinality)
    }

    /// Shorthand for a byte-blob property.
    pub fn bytes(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self::simple(name, DataType::Bytes, cardinality)
    }

    /// Shorthand for a nested document property of `schema_type`.
    pub fn document(
        name: impl Into<String>,
        schema_type: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            document_schema_type: Some(schema_type.into()),
            ..Self::simple(name, DataType::Document, cardinality)
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    #[must_use]
    pub fn indexing_type(&self) -> IndexingType {
        self.indexing_type
    }

    #[must_use]
    pub fn tokenizer_type(&self) -> TokenizerType {
        self.tokenizer_type
    }

    /// Snippet anchor as a percentage of the value, or [`SNIPPET_OFFSET_DISABLED`].
    #[must_use]
    pub fn snippet_offset_percent(&self) -> f32 {
        self.snippet_offset_percent
    }

    /// Schema type of the nested document. Set only for [`DataType::Document`].
    #[must_use]
    pub fn document_schema_type(&self) -> Option<&str> {
        self.document_schema_type.as_deref()
    }

    fn validate(&self) -> SchemaResult<()> {
        let percent = self.snippet_offset_percent;
        if percent != SNIPPET_OFFSET_DISABLED && !(0.0..=100.0).contains(&percent) {
            return Err(SchemaError::InvalidConfiguration(format!(
                "property '{}': snippet offset percent {percent} must be within [0, 100] \
                 or disabled",
                self.name
            )));
        }

        match (self.data_type, self.document_schema_type.as_deref()) {
            (DataType::Document, None) | (DataType::Document, Some("")) => {
                Err(SchemaError::InvalidConfiguration(format!(
                    "property '{}': document properties must name their schema type",
                    self.name
                )))
            }
            (other, Some(schema_type)) if other != DataType::Document => {
                Err(SchemaError::InvalidConfiguration(format!(
                    "property '{}': {other} property cannot reference schema type '{schema_type}'",
                    self.name
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Builder for [`PropertyDescriptor`]. Range checks run in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PropertyDescriptorBuilder {
    inner: PropertyDescriptor,
}

impl PropertyDescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            inner: PropertyDescriptor::simple(name, DataType::String, Cardinality::Optional),
        }
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.inner.data_type = data_type;
        self
    }

    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.inner.cardinality = cardinality;
        self
    }

    pub fn indexing_type(mut self, indexing_type: IndexingType) -> Self {
        self.inner.indexing_type = indexing_type;
        self
    }

    pub fn tokenizer_type(mut self, tokenizer_type: TokenizerType) -> Self {
        self.inner.tokenizer_type = tokenizer_type;
        self
    }

    pub fn snippet_offset_percent(mut self, percent: f32) -> Self {
        self.inner.snippet_offset_percent = percent;
        self
    }

    pub fn document_schema_type(mut self, schema_type: impl Into<String>) -> Self {
        self.inner.document_schema_type = Some(schema_type.into());
        self
    }

    /// Validates the accumulated parameters and returns the frozen descriptor.
    pub fn build(self) -> SchemaResult<PropertyDescriptor> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[derive(Deserialize)]
struct RawPropertyDescriptor {
    name: String,
    data_type: DataType,
    cardinality: Cardinality,
    #[serde(default)]
    indexing_type: IndexingType,
    #[serde(default)]
    tokenizer_type: TokenizerType,
    #[serde(default = "default_snippet_offset")]
    snippet_offset_percent: f32,
    #[serde(default)]
    document_schema_type: Option<String>,
}

fn default_snippet_offset() -> f32 {
    SNIPPET_OFFSET_DISABLED
}

impl TryFrom<RawPropertyDescriptor> for PropertyDescriptor {
    type Error = SchemaError;

    fn try_from(raw: RawPropertyDescriptor) -> SchemaResult<Self> {
        let descriptor = Self {
            name: raw.name,
            data_type: raw.data_type,
            cardinality: raw.cardinality,
            indexing_type: raw.indexing_type,
            tokenizer_type: raw.tokenizer_type,
            snippet_offset_percent: raw.snippet_offset_percent,
            document_schema_type: raw.document_schema_type,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}
