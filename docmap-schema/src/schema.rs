use crate::error::{SchemaError, SchemaResult};
use crate::property::PropertyDescriptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The frozen contract of one document type: its schema type id and the
/// ordered list of its properties.
///
/// Only obtainable through [`SchemaBuilder::build`] (or deserialization, which
/// replays the builder), so property names are always unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchemaDescriptor")]
pub struct SchemaDescriptor {
    schema_type: String,
    properties: Vec<PropertyDescriptor>,
}

impl SchemaDescriptor {
    /// Starts a builder for `schema_type`.
    pub fn builder(schema_type: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(schema_type)
    }

    #[must_use]
    pub fn schema_type(&self) -> &str {
        &self.schema_type
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(PropertyDescriptor::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Accumulates property descriptors in insertion order.
///
/// `build` consumes the builder, so a builder cannot be reused after its
/// schema has been frozen.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema_type: String,
    properties: Vec<PropertyDescriptor>,
}

impl SchemaBuilder {
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn schema_type(&self) -> &str {
        &self.schema_type
    }

    /// Appends `descriptor`. Fails if a property with the same name was
    /// already added or the name is empty.
    pub fn add_property(mut self, descriptor: PropertyDescriptor) -> SchemaResult<Self> {
        self.push(descriptor)?;
        Ok(self)
    }

    /// In-place variant of [`add_property`](Self::add_property).
    pub fn push(&mut self, descriptor: PropertyDescriptor) -> SchemaResult<()> {
        if descriptor.name().is_empty() {
            return Err(SchemaError::InvalidConfiguration(format!(
                "schema '{}': property names must not be empty",
                self.schema_type
            )));
        }
        if self.contains(descriptor.name()) {
            return Err(SchemaError::DuplicateProperty {
                schema_type: self.schema_type.clone(),
                name: descriptor.name().to_string(),
            });
        }
        self.properties.push(descriptor);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name() == name)
    }

    /// Freezes the accumulated properties into a [`SchemaDescriptor`].
    pub fn build(self) -> SchemaResult<SchemaDescriptor> {
        if self.schema_type.is_empty() {
            return Err(SchemaError::InvalidConfiguration(
                "schema type must not be empty".to_string(),
            ));
        }
        debug!(
            schema_type = %self.schema_type,
            properties = self.properties.len(),
            "Schema built"
        );
        Ok(SchemaDescriptor {
            schema_type: self.schema_type,
            properties: self.properties,
        })
    }
}

#[derive(Deserialize)]
struct RawSchemaDescriptor {
    schema_type: String,
    #[serde(default)]
    properties: Vec<PropertyDescriptor>,
}

impl TryFrom<RawSchemaDescriptor> for SchemaDescriptor {
    type Error = SchemaError;

    fn try_from(raw: RawSchemaDescriptor) -> SchemaResult<Self> {
        raw.properties
            .into_iter()
            .try_fold(SchemaBuilder::new(raw.schema_type), SchemaBuilder::add_property)?
            .build()
    }
}
