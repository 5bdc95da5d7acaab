//! MessagePack tag bytes and width-class bounds.
//!
//! Only the scalar, str and bin families are listed; containers and
//! extension types are never emitted by this crate.

/// Core one-byte MessagePack markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MsgPackMarker {
    Null = 0xc0,
    False = 0xc2,
    True = 0xc3,
}

impl MsgPackMarker {
    #[inline]
    pub const fn bool(value: bool) -> Self {
        if value {
            MsgPackMarker::True
        } else {
            MsgPackMarker::False
        }
    }
}

// Integers.
pub const POSITIVE_FIXINT_MAX: u64 = 0x7f;
pub const NEGATIVE_FIXINT_MIN: i64 = -0x20;
pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;
pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

// Floats.
pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

// Strings.
pub const FIXSTR: u8 = 0xa0;
pub const FIXSTR_MAX_LEN: usize = 0x1f;
pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

// Binary.
pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

/// Largest payload length any str/bin header can describe.
pub const MAX_LEN: usize = u32::MAX as usize;
