//! Forward-only binary writer with big-endian helpers.

/// A growable byte writer that only ever appends.
///
/// Every multi-byte number is written most-significant byte first,
/// regardless of the host byte order.
///
/// # Example
///
/// ```
/// use scalar_pack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with a default initial capacity (1KB).
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Creates a new writer that pre-allocates `capacity` bytes. The
    /// allocation is kept across flushes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last flush.
    #[inline]
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Pending bytes, i.e. everything written since the last flush.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Drops all pending bytes.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns a right-sized copy of the pending bytes and starts a new
    /// segment in the same allocation.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8.to_vec();
        self.uint8.clear();
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes a signed 8-bit integer (two's complement).
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.push(val as u8);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes the IEEE-754 bit pattern of a 32-bit float (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.u32(val.to_bits());
    }

    /// Writes the IEEE-754 bit pattern of a 64-bit float (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.u64(val.to_bits());
    }

    /// Writes a u8 followed by a u16 (big-endian).
    pub fn u8u16(&mut self, u8_val: u8, u16_val: u16) {
        self.uint8.reserve(3);
        self.u8(u8_val);
        self.u16(u16_val);
    }

    /// Writes a u8 followed by a u32 (big-endian).
    pub fn u8u32(&mut self, u8_val: u8, u32_val: u32) {
        self.uint8.reserve(5);
        self.u8(u8_val);
        self.u32(u32_val);
    }

    /// Writes a u8 followed by a u64 (big-endian).
    pub fn u8u64(&mut self, u8_val: u8, u64_val: u64) {
        self.uint8.reserve(9);
        self.u8(u8_val);
        self.u64(u64_val);
    }

    /// Writes a u8 followed by an i8.
    pub fn u8i8(&mut self, u8_val: u8, i8_val: i8) {
        self.uint8.reserve(2);
        self.u8(u8_val);
        self.i8(i8_val);
    }

    /// Writes a u8 followed by an i16 (big-endian).
    pub fn u8i16(&mut self, u8_val: u8, i16_val: i16) {
        self.uint8.reserve(3);
        self.u8(u8_val);
        self.i16(i16_val);
    }

    /// Writes a u8 followed by an i32 (big-endian).
    pub fn u8i32(&mut self, u8_val: u8, i32_val: i32) {
        self.uint8.reserve(5);
        self.u8(u8_val);
        self.i32(i32_val);
    }

    /// Writes a u8 followed by an i64 (big-endian).
    pub fn u8i64(&mut self, u8_val: u8, i64_val: i64) {
        self.uint8.reserve(9);
        self.u8(u8_val);
        self.i64(i64_val);
    }

    /// Writes a u8 followed by a f32 (big-endian).
    pub fn u8f32(&mut self, u8_val: u8, f32_val: f32) {
        self.uint8.reserve(5);
        self.u8(u8_val);
        self.f32(f32_val);
    }

    /// Writes a u8 followed by a f64 (big-endian).
    pub fn u8f64(&mut self, u8_val: u8, f64_val: f64) {
        self.uint8.reserve(9);
        self.u8(u8_val);
        self.f64(f64_val);
    }

    /// Writes a byte slice verbatim.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.uint8.extend_from_slice(bytes);
        bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_u16() {
        let mut writer = Writer::new();
        writer.u16(0x0102);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_u32() {
        let mut writer = Writer::new();
        writer.u32(0x01020304);
        assert_eq!(writer.flush(), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_u64() {
        let mut writer = Writer::new();
        writer.u64(0x0102_0304_0506_0708);
        assert_eq!(
            writer.flush(),
            [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn test_i8_negative() {
        let mut writer = Writer::new();
        writer.i8(-1i8);
        assert_eq!(writer.flush(), [0xff]);
    }

    #[test]
    fn test_i16_negative() {
        let mut writer = Writer::new();
        writer.i16(-129i16);
        assert_eq!(writer.flush(), [0xff, 0x7f]);
    }

    #[test]
    fn test_i64_negative() {
        let mut writer = Writer::new();
        writer.i64(-2_147_483_649i64);
        assert_eq!(
            writer.flush(),
            [0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_tagged_float() {
        let mut writer = Writer::new();
        writer.u8f32(0xca, 314.0 / 100.0);
        assert_eq!(writer.flush(), [0xca, 0x40, 0x48, 0xf5, 0xc3]);
    }

    #[test]
    fn test_tagged_u16() {
        let mut writer = Writer::new();
        writer.u8u16(0xda, 0x0100);
        assert_eq!(writer.flush(), [0xda, 0x01, 0x00]);
    }

    #[test]
    fn test_utf8() {
        let mut writer = Writer::new();
        let n = writer.utf8("café");
        let data = writer.flush();
        assert_eq!(n, 5);
        assert_eq!(std::str::from_utf8(&data).unwrap(), "café");
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_reset_drops_pending() {
        let mut writer = Writer::with_capacity(4);
        writer.u8(0xd9);
        assert_eq!(writer.len(), 1);
        writer.reset();
        assert!(writer.is_empty());
        writer.u8(0xc0);
        assert_eq!(writer.as_slice(), [0xc0]);
    }

    #[test]
    fn test_flush_is_right_sized() {
        let mut writer = Writer::new();
        writer.u8(0xc0);
        let data = writer.flush();
        assert_eq!(data, [0xc0]);
        assert!(data.capacity() < 64, "1-byte flush kept {} bytes", data.capacity());
    }

    #[test]
    fn test_flush_reuses_allocation() {
        let mut writer = Writer::with_capacity(256);
        for _ in 0..1000 {
            writer.u8(0xc3);
            assert_eq!(writer.flush(), [0xc3]);
        }
        assert!(writer.is_empty());
        assert!(writer.uint8.capacity() >= 256);
    }

    proptest! {
        #[test]
        fn u64_is_big_endian(val in any::<u64>()) {
            let mut writer = Writer::new();
            writer.u64(val);
            prop_assert_eq!(writer.flush(), val.to_be_bytes().to_vec());
        }

        #[test]
        fn i32_is_big_endian(val in any::<i32>()) {
            let mut writer = Writer::new();
            writer.u8i32(0xd2, val);
            let data = writer.flush();
            prop_assert_eq!(data[0], 0xd2);
            prop_assert_eq!(i32::from_be_bytes([data[1], data[2], data[3], data[4]]), val);
        }
    }
}
