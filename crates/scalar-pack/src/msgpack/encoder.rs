//! `MsgPackEncoder` — writes [`PackValue`]s using the narrowest MessagePack
//! encoding that represents them exactly.

use scalar_pack_buffers::Writer;

use super::constants::*;
use super::error::MsgPackError;
use crate::PackValue;

pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Creates an encoder whose output segments start with `capacity` bytes
    /// reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_capacity(capacity),
        }
    }

    /// Encodes one value and returns its bytes.
    ///
    /// On failure nothing is kept: the writer holds no partial output.
    pub fn encode(&mut self, value: &PackValue) -> Result<Vec<u8>, MsgPackError> {
        self.writer.reset();
        if let Err(err) = self.write_any(value) {
            self.writer.reset();
            return Err(err);
        }
        Ok(self.writer.flush())
    }

    /// Encodes one value onto the end of `out`. `out` is left untouched
    /// when encoding fails.
    pub fn encode_into(
        &mut self,
        value: &PackValue,
        out: &mut Vec<u8>,
    ) -> Result<(), MsgPackError> {
        self.writer.reset();
        if let Err(err) = self.write_any(value) {
            self.writer.reset();
            return Err(err);
        }
        out.extend_from_slice(self.writer.as_slice());
        self.writer.reset();
        Ok(())
    }

    pub fn write_any(&mut self, value: &PackValue) -> Result<(), MsgPackError> {
        match value {
            PackValue::Null => self.write_null(),
            PackValue::Bool(b) => self.write_boolean(*b),
            PackValue::Integer(i) => self.write_integer(*i),
            PackValue::UInteger(u) => self.write_u_integer(*u),
            PackValue::Float32(f) => self.write_f32(*f),
            PackValue::Float64(f) => self.write_f64(*f),
            PackValue::Str(s) => self.write_str(s)?,
            PackValue::Bytes(b) => self.write_bin(b)?,
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.u8(MsgPackMarker::Null as u8);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(MsgPackMarker::bool(b) as u8);
    }

    /// Floats are never narrowed to integers, even when integral.
    pub fn write_f32(&mut self, float: f32) {
        self.writer.u8f32(FLOAT32, float);
    }

    pub fn write_f64(&mut self, float: f64) {
        self.writer.u8f64(FLOAT64, float);
    }

    /// Encode a signed integer. Non-negative values use the unsigned
    /// ladder, which covers them at least as compactly.
    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
            return;
        }
        let writer = &mut self.writer;
        if int >= NEGATIVE_FIXINT_MIN {
            // negative fixint: 0xe0..0xff
            writer.i8(int as i8);
        } else if int >= i8::MIN as i64 {
            writer.u8i8(INT8, int as i8);
        } else if int >= i16::MIN as i64 {
            writer.u8i16(INT16, int as i16);
        } else if int >= i32::MIN as i64 {
            writer.u8i32(INT32, int as i32);
        } else {
            writer.u8i64(INT64, int);
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        let writer = &mut self.writer;
        if uint <= POSITIVE_FIXINT_MAX {
            writer.u8(uint as u8);
        } else if uint <= u8::MAX as u64 {
            writer.u16(((UINT8 as u16) << 8) | uint as u16);
        } else if uint <= u16::MAX as u64 {
            writer.u8u16(UINT16, uint as u16);
        } else if uint <= u32::MAX as u64 {
            writer.u8u32(UINT32, uint as u32);
        } else {
            writer.u8u64(UINT64, uint);
        }
    }

    /// Writes a str header for a payload of `length` bytes.
    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        if length > MAX_LEN {
            log::debug!("msgpack: rejecting str of {length} bytes");
            return Err(MsgPackError::LengthOverflow {
                kind: "str",
                len: length,
            });
        }
        if length <= FIXSTR_MAX_LEN {
            self.writer.u8(FIXSTR | length as u8);
        } else if length <= u8::MAX as usize {
            log::trace!("msgpack: str8 header for {length} bytes");
            self.writer.u16(((STR8 as u16) << 8) | length as u16);
        } else if length <= u16::MAX as usize {
            log::trace!("msgpack: str16 header for {length} bytes");
            self.writer.u8u16(STR16, length as u16);
        } else {
            log::trace!("msgpack: str32 header for {length} bytes");
            self.writer.u8u32(STR32, length as u32);
        }
        Ok(())
    }

    /// Writes a string; the header carries its UTF-8 byte length.
    pub fn write_str(&mut self, s: &str) -> Result<(), MsgPackError> {
        self.write_str_hdr(s.len())?;
        self.writer.utf8(s);
        Ok(())
    }

    /// Writes a bin header. There is no fix form for bin.
    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        if length > MAX_LEN {
            log::debug!("msgpack: rejecting bin of {length} bytes");
            return Err(MsgPackError::LengthOverflow {
                kind: "bin",
                len: length,
            });
        }
        if length <= u8::MAX as usize {
            self.writer.u16(((BIN8 as u16) << 8) | length as u16);
        } else if length <= u16::MAX as usize {
            log::trace!("msgpack: bin16 header for {length} bytes");
            self.writer.u8u16(BIN16, length as u16);
        } else {
            log::trace!("msgpack: bin32 header for {length} bytes");
            self.writer.u8u32(BIN32, length as u32);
        }
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), MsgPackError> {
        self.write_bin_hdr(buf.len())?;
        self.writer.buf(buf);
        Ok(())
    }
}
