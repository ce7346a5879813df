use crate::cardinality::check_required;
use crate::error::ConvertResult;
use docmap_record::GenericRecord;
use docmap_schema::SchemaDescriptor;

/// The encode/decode pair for one document type.
///
/// Implementations are stateless: both directions are pure functions of
/// their input and may be called concurrently. [`DocumentMapping`] is the
/// registration-built implementation; hand-written converters only need
/// to uphold the same cardinality rules.
///
/// [`DocumentMapping`]: crate::DocumentMapping
pub trait DocumentConverter: Send + Sync {
    /// The typed object this converter produces.
    type Object;

    fn schema(&self) -> &SchemaDescriptor;

    fn schema_type(&self) -> &str {
        self.schema().schema_type()
    }

    /// Converts `object` to a record holding only its non-null properties.
    fn encode(&self, object: &Self::Object) -> GenericRecord;

    /// Converts `record` back. Absent properties leave their fields `None`.
    fn decode(&self, record: &GenericRecord) -> Self::Object;

    /// Checks that every `Required` property of this converter's schema is
    /// present in `record`. Converters with nested documents also check the
    /// nested records against their own schemas.
    fn validate_required(&self, record: &GenericRecord) -> ConvertResult<()> {
        check_required(self.schema(), record)
    }

    /// Like [`encode`](Self::encode), but fails with
    /// `MissingRequiredProperty` when a `Required` field is null at any depth.
    fn encode_strict(&self, object: &Self::Object) -> ConvertResult<GenericRecord> {
        let record = self.encode(object);
        self.validate_required(&record)?;
        Ok(record)
    }
}
