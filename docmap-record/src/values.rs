use crate::record::GenericRecord;
use docmap_schema::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type of a native property array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeType {
    Strings,
    Longs,
    Doubles,
    Booleans,
    Bytes,
    Documents,
}

impl NativeType {
    /// The array type the store uses for properties declared as `data_type`.
    pub const fn for_data_type(data_type: DataType) -> Self {
        match data_type {
            DataType::String => Self::Strings,
            DataType::Int64 => Self::Longs,
            DataType::Double => Self::Doubles,
            DataType::Boolean => Self::Booleans,
            DataType::Bytes => Self::Bytes,
            DataType::Document => Self::Documents,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strings => "string[]",
            Self::Longs => "long[]",
            Self::Doubles => "double[]",
            Self::Booleans => "boolean[]",
            Self::Bytes => "bytes[]",
            Self::Documents => "document[]",
        };
        f.write_str(name)
    }
}

/// One element of a native array.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    String(String),
    Long(i64),
    Double(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
    Document(GenericRecord),
}

impl NativeValue {
    pub fn native_type(&self) -> NativeType {
        match self {
            Self::String(_) => NativeType::Strings,
            Self::Long(_) => NativeType::Longs,
            Self::Double(_) => NativeType::Doubles,
            Self::Boolean(_) => NativeType::Booleans,
            Self::Bytes(_) => NativeType::Bytes,
            Self::Document(_) => NativeType::Documents,
        }
    }
}

/// The values of one property as stored: a homogeneous, ordered array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValues {
    Strings(Vec<String>),
    Longs(Vec<i64>),
    Doubles(Vec<f64>),
    Booleans(Vec<bool>),
    Bytes(Vec<Vec<u8>>),
    Documents(Vec<GenericRecord>),
}

impl PropertyValues {
    /// A zero-length array of `native_type`.
    pub fn empty(native_type: NativeType) -> Self {
        match native_type {
            NativeType::Strings => Self::Strings(Vec::new()),
            NativeType::Longs => Self::Longs(Vec::new()),
            NativeType::Doubles => Self::Doubles(Vec::new()),
            NativeType::Booleans => Self::Booleans(Vec::new()),
            NativeType::Bytes => Self::Bytes(Vec::new()),
            NativeType::Documents => Self::Documents(Vec::new()),
        }
    }

    /// Assembles an array of `native_type` from individual elements.
    ///
    /// Returns `None` if any element is of a different native type.
    pub fn from_values(
        native_type: NativeType,
        values: impl IntoIterator<Item = NativeValue>,
    ) -> Option<Self> {
        let mut out = Self::empty(native_type);
        for value in values {
            match (&mut out, value) {
                (Self::Strings(v), NativeValue::String(x)) => v.push(x),
                (Self::Longs(v), NativeValue::Long(x)) => v.push(x),
                (Self::Doubles(v), NativeValue::Double(x)) => v.push(x),
                (Self::Booleans(v), NativeValue::Boolean(x)) => v.push(x),
                (Self::Bytes(v), NativeValue::Bytes(x)) => v.push(x),
                (Self::Documents(v), NativeValue::Document(x)) => v.push(x),
                _ => return None,
            }
        }
        Some(out)
    }

    pub fn native_type(&self) -> NativeType {
        match self {
            Self::Strings(_) => NativeType::Strings,
            Self::Longs(_) => NativeType::Longs,
            Self::Doubles(_) => NativeType::Doubles,
            Self::Booleans(_) => NativeType::Booleans,
            Self::Bytes(_) => NativeType::Bytes,
            Self::Documents(_) => NativeType::Documents,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Strings(v) => v.len(),
            Self::Longs(v) => v.len(),
            Self::Doubles(v) => v.len(),
            Self::Booleans(v) => v.len(),
            Self::Bytes(v) => v.len(),
            Self::Documents(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, cloned.
    pub fn get(&self, index: usize) -> Option<NativeValue> {
        match self {
            Self::Strings(v) => v.get(index).cloned().map(NativeValue::String),
            Self::Longs(v) => v.get(index).copied().map(NativeValue::Long),
            Self::Doubles(v) => v.get(index).copied().map(NativeValue::Double),
            Self::Booleans(v) => v.get(index).copied().map(NativeValue::Boolean),
            Self::Bytes(v) => v.get(index).cloned().map(NativeValue::Bytes),
            Self::Documents(v) => v.get(index).cloned().map(NativeValue::Document),
        }
    }

    /// All elements in order, cloned.
    pub fn to_values(&self) -> Vec<NativeValue> {
        match self {
            Self::Strings(v) => v.iter().cloned().map(NativeValue::String).collect(),
            Self::Longs(v) => v.iter().copied().map(NativeValue::Long).collect(),
            Self::Doubles(v) => v.iter().copied().map(NativeValue::Double).collect(),
            Self::Booleans(v) => v.iter().copied().map(NativeValue::Boolean).collect(),
            Self::Bytes(v) => v.iter().cloned().map(NativeValue::Bytes).collect(),
            Self::Documents(v) => v.iter().cloned().map(NativeValue::Document).collect(),
        }
    }
}

impl From<Vec<String>> for PropertyValues {
    fn from(v: Vec<String>) -> Self {
        Self::Strings(v)
    }
}

impl From<Vec<&str>> for PropertyValues {
    fn from(v: Vec<&str>) -> Self {
        Self::Strings(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<i64>> for PropertyValues {
    fn from(v: Vec<i64>) -> Self {
        Self::Longs(v)
    }
}

impl From<Vec<f64>> for PropertyValues {
    fn from(v: Vec<f64>) -> Self {
        Self::Doubles(v)
    }
}

impl From<Vec<bool>> for PropertyValues {
    fn from(v: Vec<bool>) -> Self {
        Self::Booleans(v)
    }
}

impl From<Vec<Vec<u8>>> for PropertyValues {
    fn from(v: Vec<Vec<u8>>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<GenericRecord>> for PropertyValues {
    fn from(v: Vec<GenericRecord>) -> Self {
        Self::Documents(v)
    }
}
