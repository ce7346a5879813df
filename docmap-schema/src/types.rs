use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared data type of a property.
///
/// Determines which native array the document store keeps the property's
/// values in. The integer codes returned by [`DataType::code`] are stable and
/// may be handed to stores that identify types numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Int64,
    Double,
    Boolean,
    Bytes,
    /// A nested document of another registered schema type.
    Document,
}

impl DataType {
    /// Every supported data type, in code order.
    pub const ALL: [DataType; 6] = [
        DataType::String,
        DataType::Int64,
        DataType::Double,
        DataType::Boolean,
        DataType::Bytes,
        DataType::Document,
    ];

    /// Stable numeric identifier.
    pub const fn code(self) -> u8 {
        match self {
            Self::String => 1,
            Self::Int64 => 2,
            Self::Double => 3,
            Self::Boolean => 4,
            Self::Bytes => 5,
            Self::Document => 6,
        }
    }

    /// Inverse of [`DataType::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Bytes => "bytes",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

/// How many values a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Zero or more values, order-preserving.
    Repeated,
    /// Zero or one value.
    Optional,
    /// Exactly one value expected. Not enforced on encode unless strict mode is on.
    Required,
}

impl Cardinality {
    pub const ALL: [Cardinality; 3] = [
        Cardinality::Repeated,
        Cardinality::Optional,
        Cardinality::Required,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Self::Repeated => 1,
            Self::Optional => 2,
            Self::Required => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Whether a field with this cardinality holds a single value.
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Repeated)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Repeated => "repeated",
            Self::Optional => "optional",
            Self::Required => "required",
        };
        f.write_str(name)
    }
}

/// Store-specific indexing hint. Passed through to the store untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexingType(pub u32);

impl IndexingType {
    pub const NONE: Self = Self(0);
    pub const EXACT_TERMS: Self = Self(1);
    pub const PREFIXES: Self = Self(2);
}

/// Store-specific tokenizer hint. Passed through to the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenizerType(pub u32);

impl TokenizerType {
    pub const NONE: Self = Self(0);
    pub const PLAIN: Self = Self(1);
}

impl Default for TokenizerType {
    fn default() -> Self {
        Self::PLAIN
    }
}
