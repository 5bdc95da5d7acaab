//! [`PackValue`] — the closed set of values the encoder accepts.

use crate::MsgPackError;

/// A value that can be written as MessagePack.
///
/// The set is closed: every variant has an encoding, so dispatch over it is
/// exhaustive. Values that cannot be represented (containers coming from
/// JSON, for example) are rejected when converting *into* `PackValue`.
#[derive(Debug, Clone, PartialEq)]
pub enum PackValue {
    /// MsgPack nil
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer. Non-negative values take the unsigned encodings.
    Integer(i64),
    /// Unsigned integer
    UInteger(u64),
    /// Single-precision float, always written as float32
    Float32(f32),
    /// Double-precision float, always written as float64
    Float64(f64),
    /// UTF-8 text
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl PackValue {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PackValue::Null => "null",
            PackValue::Bool(_) => "bool",
            PackValue::Integer(_) => "integer",
            PackValue::UInteger(_) => "uinteger",
            PackValue::Float32(_) => "float32",
            PackValue::Float64(_) => "float64",
            PackValue::Str(_) => "str",
            PackValue::Bytes(_) => "bin",
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for PackValue {
            fn from(v: $t) -> Self {
                PackValue::Integer(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for PackValue {
            fn from(v: $t) -> Self {
                PackValue::UInteger(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<()> for PackValue {
    fn from(_: ()) -> Self {
        PackValue::Null
    }
}

impl From<bool> for PackValue {
    fn from(v: bool) -> Self {
        PackValue::Bool(v)
    }
}

impl From<f32> for PackValue {
    fn from(v: f32) -> Self {
        PackValue::Float32(v)
    }
}

impl From<f64> for PackValue {
    fn from(v: f64) -> Self {
        PackValue::Float64(v)
    }
}

impl From<&str> for PackValue {
    fn from(v: &str) -> Self {
        PackValue::Str(v.to_owned())
    }
}

impl From<String> for PackValue {
    fn from(v: String) -> Self {
        PackValue::Str(v)
    }
}

impl From<&[u8]> for PackValue {
    fn from(v: &[u8]) -> Self {
        PackValue::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for PackValue {
    fn from(v: Vec<u8>) -> Self {
        PackValue::Bytes(v)
    }
}

impl<T: Into<PackValue>> From<Option<T>> for PackValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(PackValue::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for PackValue {
    type Error = MsgPackError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Null => Ok(PackValue::Null),
            serde_json::Value::Bool(b) => Ok(PackValue::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(PackValue::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(PackValue::UInteger(u))
                } else {
                    n.as_f64()
                        .map(PackValue::Float64)
                        .ok_or(MsgPackError::UnsupportedType { kind: "number" })
                }
            }
            serde_json::Value::String(s) => Ok(PackValue::Str(s)),
            serde_json::Value::Array(_) => Err(MsgPackError::UnsupportedType { kind: "array" }),
            serde_json::Value::Object(_) => Err(MsgPackError::UnsupportedType { kind: "object" }),
        }
    }
}
