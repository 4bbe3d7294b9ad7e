use std::fmt;

use bytebuffer::ByteBuffer;

use crate::*;

/// max bytes an unsigned varint encoding a `u32` can take
const MAX_VAR_INT_BYTES: u32 = 5;
/// max bytes an unsigned varint encoding a `u64` can take
const MAX_VAR_LONG_BYTES: u32 = 10;

/// Cursor-based reader/writer for the network protocol.
///
/// Reads advance the read cursor, writes append at the write cursor. The two are independent,
/// so a stream that was just written can be rewound and read back.
/// Multi-byte integers are big-endian unless the method name has the `l_` prefix.
#[derive(Clone)]
pub struct NetworkBinaryStream {
    buffer: ByteBuffer,
    limits: StreamLimits,
}

impl Default for NetworkBinaryStream {
    fn default() -> Self {
        Self::with_limits(StreamLimits::default())
    }
}

impl NetworkBinaryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: StreamLimits) -> Self {
        Self {
            buffer: ByteBuffer::new(),
            limits,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            buffer: ByteBuffer::from_vec(data),
            limits: StreamLimits::default(),
        }
    }

    /// replace the limits applied to length prefixes read from now on
    #[must_use]
    pub fn limited_by(mut self, limits: StreamLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn limits(&self) -> &StreamLimits {
        &self.limits
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.into_vec()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.buffer.get_rpos()
    }

    /// amount of bytes that have not been read yet
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.buffer.get_rpos())
    }

    /// whether the read cursor has reached the end of the data
    #[inline]
    pub fn feof(&self) -> bool {
        self.remaining() == 0
    }

    /// move the read cursor back to the start, keeping the data
    #[inline]
    pub fn rewind(&mut self) {
        self.buffer.set_rpos(0);
    }

    /// drop all data and move both cursors to the start
    #[inline]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /* reading */

    #[inline]
    pub fn get_byte(&mut self) -> DecodeResult<u8> {
        Ok(self.buffer.read_u8()?)
    }

    #[inline]
    pub fn get_bool(&mut self) -> DecodeResult<bool> {
        Ok(self.get_byte()? != 0)
    }

    #[inline]
    pub fn get_short(&mut self) -> DecodeResult<u16> {
        Ok(self.buffer.read_u16()?)
    }

    // the underlying buffer is big-endian, little-endian reads swap the result

    #[inline]
    pub fn get_l_short(&mut self) -> DecodeResult<u16> {
        Ok(self.buffer.read_u16()?.swap_bytes())
    }

    #[inline]
    pub fn get_signed_short(&mut self) -> DecodeResult<i16> {
        Ok(self.buffer.read_i16()?)
    }

    #[inline]
    pub fn get_signed_l_short(&mut self) -> DecodeResult<i16> {
        Ok(self.buffer.read_i16()?.swap_bytes())
    }

    #[inline]
    pub fn get_int(&mut self) -> DecodeResult<i32> {
        Ok(self.buffer.read_i32()?)
    }

    #[inline]
    pub fn get_l_int(&mut self) -> DecodeResult<i32> {
        Ok(self.buffer.read_i32()?.swap_bytes())
    }

    #[inline]
    pub fn get_l_float(&mut self) -> DecodeResult<f32> {
        Ok(f32::from_bits(self.buffer.read_u32()?.swap_bytes()))
    }

    pub fn get_unsigned_var_int(&mut self) -> DecodeResult<u32> {
        let mut value = 0u32;
        for i in 0..MAX_VAR_INT_BYTES {
            let byte = self.get_byte()?;
            value |= u32::from(byte & 0x7f) << (i * 7);

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(DecodeError::VarIntTooLong)
    }

    pub fn get_var_int(&mut self) -> DecodeResult<i32> {
        let raw = self.get_unsigned_var_int()?;
        Ok(((raw >> 1) as i32) ^ -((raw & 1) as i32))
    }

    pub fn get_unsigned_var_long(&mut self) -> DecodeResult<u64> {
        let mut value = 0u64;
        for i in 0..MAX_VAR_LONG_BYTES {
            let byte = self.get_byte()?;
            value |= u64::from(byte & 0x7f) << (i * 7);

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(DecodeError::VarIntTooLong)
    }

    pub fn get_var_long(&mut self) -> DecodeResult<i64> {
        let raw = self.get_unsigned_var_long()?;
        Ok(((raw >> 1) as i64) ^ -((raw & 1) as i64))
    }

    /// read exactly `len` bytes
    pub fn get_bytes(&mut self, len: usize) -> DecodeResult<Vec<u8>> {
        if len > self.remaining() {
            return Err(DecodeError::NotEnoughData);
        }

        Ok(self.buffer.read_bytes(len)?)
    }

    /// read everything up to the end of the data
    pub fn get_remaining_bytes(&mut self) -> DecodeResult<Vec<u8>> {
        self.get_bytes(self.remaining())
    }

    /// read a UTF-8 string prefixed with its byte length as an unsigned varint
    pub fn get_string(&mut self) -> DecodeResult<String> {
        let len = self.get_unsigned_var_int()? as usize;
        check_limit(len, self.limits.max_string_length)?;

        let data = self.get_bytes(len)?;
        Ok(String::from_utf8(data)?)
    }

    /// read an element count as an unsigned varint, rejecting counts above `max_array_length`
    pub fn get_array_len(&mut self) -> DecodeResult<usize> {
        let len = self.get_unsigned_var_int()? as usize;
        check_limit(len, self.limits.max_array_length)?;
        Ok(len)
    }

    #[inline]
    pub fn get_value<T: Decodable>(&mut self) -> DecodeResult<T> {
        T::decode(self)
    }

    /// read a `Vec<T>`, prefixed with an unsigned varint indicating the amount of values
    pub fn get_value_vec<T: Decodable>(&mut self) -> DecodeResult<Vec<T>> {
        let len = self.get_array_len()?;

        // never trust the prefix for preallocation, every element takes at least a byte
        let mut out = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            out.push(self.get_value()?);
        }

        Ok(out)
    }

    /* writing */

    #[inline]
    pub fn put_byte(&mut self, val: u8) {
        self.buffer.write_u8(val);
    }

    #[inline]
    pub fn put_bool(&mut self, val: bool) {
        self.put_byte(u8::from(val));
    }

    #[inline]
    pub fn put_short(&mut self, val: u16) {
        self.buffer.write_u16(val);
    }

    #[inline]
    pub fn put_l_short(&mut self, val: u16) {
        self.buffer.write_u16(val.swap_bytes());
    }

    #[inline]
    pub fn put_signed_short(&mut self, val: i16) {
        self.buffer.write_i16(val);
    }

    #[inline]
    pub fn put_signed_l_short(&mut self, val: i16) {
        self.buffer.write_i16(val.swap_bytes());
    }

    #[inline]
    pub fn put_int(&mut self, val: i32) {
        self.buffer.write_i32(val);
    }

    #[inline]
    pub fn put_l_int(&mut self, val: i32) {
        self.buffer.write_i32(val.swap_bytes());
    }

    #[inline]
    pub fn put_l_float(&mut self, val: f32) {
        self.buffer.write_u32(val.to_bits().swap_bytes());
    }

    pub fn put_unsigned_var_int(&mut self, mut val: u32) {
        while val >= 0x80 {
            self.put_byte((val as u8 & 0x7f) | 0x80);
            val >>= 7;
        }

        self.put_byte(val as u8);
    }

    pub fn put_var_int(&mut self, val: i32) {
        self.put_unsigned_var_int(((val << 1) ^ (val >> 31)) as u32);
    }

    pub fn put_unsigned_var_long(&mut self, mut val: u64) {
        while val >= 0x80 {
            self.put_byte((val as u8 & 0x7f) | 0x80);
            val >>= 7;
        }

        self.put_byte(val as u8);
    }

    pub fn put_var_long(&mut self, val: i64) {
        self.put_unsigned_var_long(((val << 1) ^ (val >> 63)) as u64);
    }

    #[inline]
    pub fn put_bytes(&mut self, data: &[u8]) {
        self.buffer.write_bytes(data);
    }

    /// write a length or element count as an unsigned varint. Lengths past `u32::MAX` cannot be
    /// represented on the wire and are a bug in the caller.
    pub fn put_array_len(&mut self, len: usize) {
        debug_assert!(u32::try_from(len).is_ok(), "length {len} does not fit in a u32 prefix");
        self.put_unsigned_var_int(u32::try_from(len).unwrap_or(u32::MAX));
    }

    pub fn put_string(&mut self, val: &str) {
        self.put_array_len(val.len());
        self.put_bytes(val.as_bytes());
    }

    #[inline]
    pub fn put_value<T: Encodable + ?Sized>(&mut self, val: &T) {
        val.encode(self);
    }

    /// write a slice of values, prefixed with an unsigned varint indicating the amount of values
    pub fn put_value_vec<T: Encodable>(&mut self, values: &[T]) {
        self.put_array_len(values.len());
        for val in values {
            self.put_value(val);
        }
    }
}

#[inline]
fn check_limit(length: usize, limit: usize) -> DecodeResult<()> {
    if length > limit {
        Err(DecodeError::LengthLimitExceeded { length, limit })
    } else {
        Ok(())
    }
}

impl fmt::Debug for NetworkBinaryStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkBinaryStream")
            .field("len", &self.len())
            .field("offset", &self.offset())
            .field("limits", &self.limits)
            .finish()
    }
}

impl From<Vec<u8>> for NetworkBinaryStream {
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}
