//! Field data types.

use std::fmt;

use smol_str::SmolStr;

/// The protobuf scalar value types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarType {
    /// Look up a scalar type by its keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "double" => ScalarType::Double,
            "float" => ScalarType::Float,
            "int32" => ScalarType::Int32,
            "int64" => ScalarType::Int64,
            "uint32" => ScalarType::Uint32,
            "uint64" => ScalarType::Uint64,
            "sint32" => ScalarType::Sint32,
            "sint64" => ScalarType::Sint64,
            "fixed32" => ScalarType::Fixed32,
            "fixed64" => ScalarType::Fixed64,
            "sfixed32" => ScalarType::Sfixed32,
            "sfixed64" => ScalarType::Sfixed64,
            "bool" => ScalarType::Bool,
            "string" => ScalarType::String,
            "bytes" => ScalarType::Bytes,
            _ => return None,
        };
        Some(ty)
    }

    /// Get the keyword for this scalar type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::Float => "float",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a message field.
///
/// Only [`DataType::Named`] refers to other declarations; scalar and map
/// fields never take part in type resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// A built-in scalar like `int32` or `string`.
    Scalar(ScalarType),
    /// `map<key, value>`.
    Map {
        key: ScalarType,
        value: Box<DataType>,
    },
    /// A reference to a message or enum, possibly dotted (`pkg.Outer.Inner`).
    Named(SmolStr),
}

impl DataType {
    /// Build a data type from a type keyword or a type reference.
    ///
    /// Scalar keywords become [`DataType::Scalar`]; anything else is a named
    /// reference.
    pub fn from_name(name: &str) -> Self {
        match ScalarType::from_name(name) {
            Some(scalar) => DataType::Scalar(scalar),
            None => DataType::Named(SmolStr::new(name)),
        }
    }

    /// Build a map type.
    pub fn map(key: ScalarType, value: DataType) -> Self {
        DataType::Map {
            key,
            value: Box::new(value),
        }
    }

    /// Get the referenced type name of a named type.
    pub fn named(&self) -> Option<&str> {
        match self {
            DataType::Named(name) => Some(name),
            DataType::Scalar(_) | DataType::Map { .. } => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Scalar(scalar) => write!(f, "{}", scalar),
            DataType::Map { key, value } => write!(f, "map<{}, {}>", key, value),
            DataType::Named(name) => f.write_str(name),
        }
    }
}
