//! Coercion matrix between Rust field types and the store's native arrays.
//!
//! Every widen-on-encode / narrow-on-decode path is an entry in one static
//! table keyed by `(FieldKind, NativeType)`. Mapping construction resolves
//! each binding against the table up front, so an unmapped pair surfaces as
//! a configuration error rather than at conversion time.

use crate::error::{ConvertError, ConvertResult};
use docmap_record::{GenericRecord, NativeType, NativeValue, PropertyValues};
use docmap_schema::{DataType, PropertyDescriptor};
use std::fmt;

/// The in-memory element type of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    /// `f32`, stored widened as a double.
    Float,
    Double,
    /// `i32`, stored widened as a long.
    Int,
    Long,
    Boolean,
    Bytes,
    Document,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Boolean => "bool",
            Self::Bytes => "Vec<u8>",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

/// A single field value in its declared (pre-widening) type.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Float(f32),
    Double(f64),
    Int(i32),
    Long(i64),
    Boolean(bool),
    Bytes(Vec<u8>),
    Document(GenericRecord),
}

/// A Rust type that can back a mapped field.
pub trait FieldType: Clone + Send + Sync + 'static {
    const KIND: FieldKind;

    fn into_scalar(self) -> Scalar;

    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! field_type {
    ($ty:ty, $kind:ident) => {
        impl FieldType for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn into_scalar(self) -> Scalar {
                Scalar::$kind(self)
            }

            fn from_scalar(scalar: Scalar) -> Option<Self> {
                match scalar {
                    Scalar::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

field_type!(String, String);
field_type!(f32, Float);
field_type!(f64, Double);
field_type!(i32, Int);
field_type!(i64, Long);
field_type!(bool, Boolean);
field_type!(Vec<u8>, Bytes);
field_type!(GenericRecord, Document);

/// One auditable conversion path.
#[derive(Debug, Clone, Copy)]
pub struct Coercion {
    field_kind: FieldKind,
    native_type: NativeType,
    widen: fn(Scalar) -> Option<NativeValue>,
    narrow: fn(NativeValue) -> Option<Scalar>,
}

impl Coercion {
    pub fn field_kind(&self) -> FieldKind {
        self.field_kind
    }

    pub fn native_type(&self) -> NativeType {
        self.native_type
    }

    /// Encode direction for one element. `None` if `value` is not of this
    /// coercion's field kind.
    pub fn widen(&self, value: Scalar) -> Option<NativeValue> {
        (self.widen)(value)
    }

    /// Decode direction for one element.
    pub fn narrow(&self, value: NativeValue) -> Option<Scalar> {
        (self.narrow)(value)
    }

    /// Widens every element, preserving order, into one native array.
    pub fn widen_all(&self, values: Vec<Scalar>) -> Option<PropertyValues> {
        let native = values
            .into_iter()
            .map(|v| self.widen(v))
            .collect::<Option<Vec<_>>>()?;
        PropertyValues::from_values(self.native_type, native)
    }

    /// Narrows every element of `values`, preserving order.
    pub fn narrow_all(&self, values: &PropertyValues) -> Vec<Scalar> {
        values
            .to_values()
            .into_iter()
            .filter_map(|v| self.narrow(v))
            .collect()
    }
}

const fn entry(
    field_kind: FieldKind,
    native_type: NativeType,
    widen: fn(Scalar) -> Option<NativeValue>,
    narrow: fn(NativeValue) -> Option<Scalar>,
) -> Coercion {
    Coercion {
        field_kind,
        native_type,
        widen,
        narrow,
    }
}

fn widen_string(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::String(s) => Some(NativeValue::String(s)),
        _ => None,
    }
}

fn narrow_string(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::String(s) => Some(Scalar::String(s)),
        _ => None,
    }
}

fn widen_float(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Float(f) => Some(NativeValue::Double(f64::from(f))),
        _ => None,
    }
}

fn narrow_float(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Double(d) => Some(Scalar::Float(d as f32)),
        _ => None,
    }
}

fn widen_double(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Double(d) => Some(NativeValue::Double(d)),
        _ => None,
    }
}

fn narrow_double(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Double(d) => Some(Scalar::Double(d)),
        _ => None,
    }
}

fn widen_int(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Int(i) => Some(NativeValue::Long(i64::from(i))),
        _ => None,
    }
}

// Truncates values outside i32 range.
fn narrow_int(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Long(l) => Some(Scalar::Int(l as i32)),
        _ => None,
    }
}

fn widen_long(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Long(l) => Some(NativeValue::Long(l)),
        _ => None,
    }
}

fn narrow_long(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Long(l) => Some(Scalar::Long(l)),
        _ => None,
    }
}

fn widen_boolean(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Boolean(b) => Some(NativeValue::Boolean(b)),
        _ => None,
    }
}

fn narrow_boolean(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Boolean(b) => Some(Scalar::Boolean(b)),
        _ => None,
    }
}

fn widen_bytes(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Bytes(b) => Some(NativeValue::Bytes(b)),
        _ => None,
    }
}

fn narrow_bytes(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Bytes(b) => Some(Scalar::Bytes(b)),
        _ => None,
    }
}

fn widen_document(v: Scalar) -> Option<NativeValue> {
    match v {
        Scalar::Document(d) => Some(NativeValue::Document(d)),
        _ => None,
    }
}

fn narrow_document(v: NativeValue) -> Option<Scalar> {
    match v {
        NativeValue::Document(d) => Some(Scalar::Document(d)),
        _ => None,
    }
}

static ENTRIES: [Coercion; 8] = [
    entry(FieldKind::String, NativeType::Strings, widen_string, narrow_string),
    entry(FieldKind::Float, NativeType::Doubles, widen_float, narrow_float),
    entry(FieldKind::Double, NativeType::Doubles, widen_double, narrow_double),
    entry(FieldKind::Int, NativeType::Longs, widen_int, narrow_int),
    entry(FieldKind::Long, NativeType::Longs, widen_long, narrow_long),
    entry(FieldKind::Boolean, NativeType::Booleans, widen_boolean, narrow_boolean),
    entry(FieldKind::Bytes, NativeType::Bytes, widen_bytes, narrow_bytes),
    entry(FieldKind::Document, NativeType::Documents, widen_document, narrow_document),
];

/// The table of supported `(FieldKind, NativeType)` conversions.
pub struct CoercionMatrix;

impl CoercionMatrix {
    /// All entries, in table order.
    pub fn entries() -> &'static [Coercion] {
        &ENTRIES
    }

    /// The coercion for a `field_kind` field declared as `data_type`.
    pub fn lookup(field_kind: FieldKind, data_type: DataType) -> Option<Coercion> {
        let native_type = NativeType::for_data_type(data_type);
        ENTRIES
            .iter()
            .find(|c| c.field_kind == field_kind && c.native_type == native_type)
            .copied()
    }

    pub fn supports(field_kind: FieldKind, data_type: DataType) -> bool {
        Self::lookup(field_kind, data_type).is_some()
    }

    /// Field kinds that can back a property of `data_type`.
    pub fn field_kinds_for(data_type: DataType) -> Vec<FieldKind> {
        let native_type = NativeType::for_data_type(data_type);
        ENTRIES
            .iter()
            .filter(|c| c.native_type == native_type)
            .map(|c| c.field_kind)
            .collect()
    }

    /// Resolves the coercion for binding a `field_kind` field to `descriptor`.
    pub fn resolve(descriptor: &PropertyDescriptor, field_kind: FieldKind) -> ConvertResult<Coercion> {
        Self::lookup(field_kind, descriptor.data_type()).ok_or_else(|| {
            ConvertError::UnsupportedCoercion {
                property: descriptor.name().to_string(),
                field_kind,
                data_type: descriptor.data_type(),
            }
        })
    }
}
