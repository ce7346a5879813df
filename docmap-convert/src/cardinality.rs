//! How each cardinality treats null, absence and array length.
//!
//! | Cardinality | encode null | encode value         | decode absent | decode present        |
//! |-------------|-------------|----------------------|---------------|-----------------------|
//! | Required    | omit        | single-element array | `None`        | first element         |
//! | Optional    | omit        | single-element array | `None`        | first element         |
//! | Repeated    | omit        | full ordered array   | `None`        | full ordered sequence |
//!
//! Encoding performs no presence check for `Required`; [`check_required`]
//! is the opt-in strict check.

use crate::coercion::{Coercion, Scalar};
use crate::error::{ConvertError, ConvertResult};
use docmap_record::{GenericRecord, PropertyValues};
use docmap_schema::{Cardinality, PropertyDescriptor, SchemaDescriptor};
use tracing::warn;

/// A field's value with element types erased.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A `Required` or `Optional` field.
    Single(Option<Scalar>),
    /// A `Repeated` field. `None` is "absent", never "empty".
    Repeated(Option<Vec<Scalar>>),
}

/// The native array to store for a field, or `None` to omit the property.
pub fn encode_property(
    descriptor: &PropertyDescriptor,
    coercion: &Coercion,
    value: FieldValue,
) -> Option<PropertyValues> {
    let values = match value {
        FieldValue::Single(None) | FieldValue::Repeated(None) => return None,
        FieldValue::Single(Some(v)) => vec![v],
        FieldValue::Repeated(Some(vs)) => vs,
    };

    let encoded = coercion.widen_all(values);
    if encoded.is_none() {
        warn!(
            property = descriptor.name(),
            field_kind = %coercion.field_kind(),
            "Field value does not match its coercion; property omitted"
        );
    }
    encoded
}

/// Reads a property back into field shape according to its cardinality.
///
/// A property stored under an unexpected native type reads as absent.
pub fn decode_property(
    descriptor: &PropertyDescriptor,
    coercion: &Coercion,
    record: &GenericRecord,
) -> FieldValue {
    let stored = record.property_array(descriptor.name(), coercion.native_type());
    match descriptor.cardinality() {
        Cardinality::Repeated => FieldValue::Repeated(stored.map(|v| coercion.narrow_all(v))),
        Cardinality::Required | Cardinality::Optional => FieldValue::Single(
            stored
                .and_then(|v| v.get(0))
                .and_then(|first| coercion.narrow(first)),
        ),
    }
}

/// Strict-mode check: every `Required` property of `schema` must be present
/// in `record`.
pub fn check_required(schema: &SchemaDescriptor, record: &GenericRecord) -> ConvertResult<()> {
    match schema
        .properties()
        .iter()
        .filter(|p| p.cardinality() == Cardinality::Required)
        .find(|p| !record.has_property(p.name()))
    {
        Some(missing) => Err(ConvertError::MissingRequiredProperty {
            schema_type: schema.schema_type().to_string(),
            property: missing.name().to_string(),
        }),
        None => Ok(()),
    }
}
