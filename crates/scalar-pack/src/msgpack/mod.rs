//! MessagePack encoder family.

pub mod constants;
pub mod encoder;
pub mod error;
pub mod util;

pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;
pub use util::{encode, encode_into, encode_json, MsgPack};
