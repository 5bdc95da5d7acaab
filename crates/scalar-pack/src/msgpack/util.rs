//! Convenience MessagePack helpers.

use crate::PackValue;

use super::{MsgPackEncoder, MsgPackError};

/// Binary MessagePack payload alias.
pub type MsgPack = Vec<u8>;

/// Encode a single value with a fresh encoder.
pub fn encode(value: &PackValue) -> Result<MsgPack, MsgPackError> {
    let mut encoder = MsgPackEncoder::new();
    encoder.encode(value)
}

/// Append the encoding of `value` to `out`; `out` is unchanged on failure.
pub fn encode_into(value: &PackValue, out: &mut Vec<u8>) -> Result<(), MsgPackError> {
    let mut encoder = MsgPackEncoder::new();
    encoder.encode_into(value, out)
}

/// Encode a JSON scalar. Arrays and objects are rejected.
pub fn encode_json(value: serde_json::Value) -> Result<MsgPack, MsgPackError> {
    let value = PackValue::try_from(value).inspect_err(|err| {
        log::debug!("msgpack: json value not encodable: {err}");
    })?;
    encode(&value)
}
