//! MessagePack encoding for scalar values, text and raw bytes.
//!
//! ```
//! use scalar_pack::{msgpack, PackValue};
//!
//! let bytes = msgpack::encode(&PackValue::from(128u8)).unwrap();
//! assert_eq!(bytes, [0xcc, 0x80]);
//! ```

mod pack_value;

pub mod msgpack;

pub use msgpack::{MsgPackEncoder, MsgPackError};
pub use pack_value::PackValue;
