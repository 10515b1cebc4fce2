//! # Byte Array Reader
//!
//! Read side of the codec. A reader borrows a buffer and decodes values from an
//! explicit cursor, mirroring every append on [`ByteArrayBuilder`].
//!
//! A failed read leaves the cursor where that read started. Successful reads
//! cannot be undone; snapshot [`ByteArrayReader::position`] and
//! [`ByteArrayReader::seek`] back for lookahead.
//!
//! [`ByteArrayBuilder`]: crate::core::builder::ByteArrayBuilder

use crate::config::LENGTH_PREFIX_SIZE;
use crate::core::serialization::ByteSerializable;
use crate::error::{ProtocolError, Result};
use bytes::Buf;

/// Cursor over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct ByteArrayReader<'a> {
    buf: &'a [u8],
    pos: usize,
    max_field_length: usize,
}

impl<'a> ByteArrayReader<'a> {
    /// Create a reader starting at `start`.
    ///
    /// Any length prefix the builder can write is accepted. A start past the
    /// end is accepted too; the first read reports the underflow.
    pub fn new(buf: &'a [u8], start: usize) -> Self {
        Self::with_limits(buf, start, i32::MAX as usize)
    }

    /// Create a reader that rejects length prefixes above `max_field_length`
    pub fn with_limits(buf: &'a [u8], start: usize, max_field_length: usize) -> Self {
        Self {
            buf,
            pos: start,
            max_field_length,
        }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Index of the next unread byte
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor. Seeking past the end is allowed and makes every read fail.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume exactly `len` bytes or fail without moving
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(ProtocolError::Underflow {
                needed: len,
                remaining,
            });
        }
        if len == 0 {
            return Ok(&[]);
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Any non-zero byte decodes as `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?.get_u8())
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?.get_i8())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.take(2)?.get_u16())
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.take(2)?.get_i16())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.take(4)?.get_u32())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.take(4)?.get_i32())
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(self.take(8)?.get_u64())
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.take(8)?.get_i64())
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(self.take(4)?.get_f32())
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(self.take(8)?.get_f64())
    }

    /// Read a `[len: i32][bytes]` run, borrowing the bytes from the buffer
    pub fn read_bytes_ref(&mut self) -> Result<&'a [u8]> {
        let start = self.pos;
        let length = self.read_i32()?;
        let remaining = self.remaining();

        if length < 0 || length as usize > remaining {
            self.pos = start;
            return Err(ProtocolError::MalformedLength { length, remaining });
        }

        let len = length as usize;
        if len > self.max_field_length {
            self.pos = start;
            return Err(ProtocolError::OversizedField {
                length: len,
                limit: self.max_field_length,
            });
        }

        self.take(len)
    }

    /// Read a `[len: i32][bytes]` run into an owned vector
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        self.read_bytes_ref().map(<[u8]>::to_vec)
    }

    /// Read `[len: i32][utf-8 bytes]` text
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        let bytes = self.read_bytes_ref()?;
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => {
                self.pos = start;
                Err(ProtocolError::InvalidUtf8(e.to_string()))
            }
        }
    }

    /// Read `len` bytes with no length prefix
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Decode a nested value, sharing this reader's cursor.
    ///
    /// The cursor is restored if the nested decode fails part way.
    pub fn read_serializable<T: ByteSerializable>(&mut self) -> Result<T> {
        let start = self.pos;
        T::read_from(self).inspect_err(|_| self.pos = start)
    }
}

/// Byte count of a length-prefixed field carrying `len` content bytes
pub const fn prefixed_len(len: usize) -> usize {
    LENGTH_PREFIX_SIZE + len
}
