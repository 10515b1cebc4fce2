//! # Byte Array Builder
//!
//! Write side of the codec. A builder owns a growing [`BytesMut`] and appends
//! big-endian primitives, length-prefixed runs and nested serializables to it.
//!
//! The output length is always the sum of the appended encodings: there is no
//! padding or alignment between fields.

use crate::core::reader::prefixed_len;
use crate::core::serialization::ByteSerializable;
use bytes::{BufMut, Bytes, BytesMut};

/// Default initial capacity, enough for most small packets
const DEFAULT_CAPACITY: usize = 64;

/// Accumulates the encoding of one logical packet.
#[derive(Debug, Clone, Default)]
pub struct ByteArrayBuilder {
    buf: BytesMut,
}

impl ByteArrayBuilder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes appended so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the bytes appended so far
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Copy out the accumulated buffer. The builder keeps its contents.
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.buf.to_vec()
    }

    /// Finish building and hand over the buffer without copying
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn append_bool(&mut self, value: bool) -> &mut Self {
        self.buf.put_u8(u8::from(value));
        self
    }

    pub fn append_u8(&mut self, value: u8) -> &mut Self {
        self.buf.put_u8(value);
        self
    }

    pub fn append_i8(&mut self, value: i8) -> &mut Self {
        self.buf.put_i8(value);
        self
    }

    pub fn append_u16(&mut self, value: u16) -> &mut Self {
        self.buf.put_u16(value);
        self
    }

    pub fn append_i16(&mut self, value: i16) -> &mut Self {
        self.buf.put_i16(value);
        self
    }

    pub fn append_u32(&mut self, value: u32) -> &mut Self {
        self.buf.put_u32(value);
        self
    }

    pub fn append_i32(&mut self, value: i32) -> &mut Self {
        self.buf.put_i32(value);
        self
    }

    pub fn append_u64(&mut self, value: u64) -> &mut Self {
        self.buf.put_u64(value);
        self
    }

    pub fn append_i64(&mut self, value: i64) -> &mut Self {
        self.buf.put_i64(value);
        self
    }

    pub fn append_f32(&mut self, value: f32) -> &mut Self {
        self.buf.put_f32(value);
        self
    }

    pub fn append_f64(&mut self, value: f64) -> &mut Self {
        self.buf.put_f64(value);
        self
    }

    /// Append UTF-8 text as `[len: i32][bytes]`.
    ///
    /// # Panics
    /// If the text is longer than `i32::MAX` bytes.
    pub fn append_string(&mut self, value: &str) -> &mut Self {
        self.append_bytes(value.as_bytes())
    }

    /// Append a byte run as `[len: i32][bytes]`.
    ///
    /// # Panics
    /// If the run is longer than `i32::MAX` bytes.
    pub fn append_bytes(&mut self, value: &[u8]) -> &mut Self {
        let len = length_prefix(value.len());
        self.buf.reserve(prefixed_len(value.len()));
        self.buf.put_i32(len);
        self.buf.put_slice(value);
        self
    }

    /// Append bytes as-is, with no length prefix
    pub fn append_raw(&mut self, value: &[u8]) -> &mut Self {
        self.buf.put_slice(value);
        self
    }

    /// Append a nested value through its own build hook
    pub fn append_serializable<T: ByteSerializable>(&mut self, value: &T) -> &mut Self {
        value.build_as_byte_array(self);
        self
    }
}

/// Length prefix for a run of `len` bytes.
///
/// # Panics
/// If `len` exceeds `i32::MAX`; such a run has no wire encoding.
fn length_prefix(len: usize) -> i32 {
    match i32::try_from(len) {
        Ok(prefix) => prefix,
        Err(_) => panic!("field of {len} bytes does not fit an i32 length prefix"),
    }
}
