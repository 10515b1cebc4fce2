//! # Byte Serialization Contract
//!
//! [`ByteSerializable`] is the capability every wire-transmissible type
//! implements. Implementors provide a build hook and a read hook that walk the
//! same fields in the same order; the provided methods wrap them for callers
//! holding plain buffers.
//!
//! ## Usage
//! ```rust
//! use packet_wire::core::builder::ByteArrayBuilder;
//! use packet_wire::core::reader::ByteArrayReader;
//! use packet_wire::core::serialization::ByteSerializable;
//! use packet_wire::error::Result;
//!
//! #[derive(Debug, PartialEq)]
//! struct Score {
//!     player: String,
//!     points: u32,
//! }
//!
//! impl ByteSerializable for Score {
//!     fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder) {
//!         builder.append_string(&self.player).append_u32(self.points);
//!     }
//!
//!     fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
//!         Ok(Score {
//!             player: reader.read_string()?,
//!             points: reader.read_u32()?,
//!         })
//!     }
//! }
//!
//! let score = Score { player: "ada".into(), points: 7 };
//! let bytes = score.as_byte_array();
//! let (decoded, next) = Score::read_from_byte_array(&bytes, 0).unwrap();
//! assert_eq!(decoded, score);
//! assert_eq!(next, bytes.len());
//! ```

use crate::core::builder::ByteArrayBuilder;
use crate::core::reader::ByteArrayReader;
use crate::error::Result;

/// Types with a fixed, self-delimiting binary encoding
pub trait ByteSerializable: Sized {
    /// Write this value's fields into `builder` in declaration order
    fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder);

    /// Read a value back, advancing the shared cursor past it.
    ///
    /// Must fail, not consume silently, when the bytes at the cursor do not
    /// encode this type.
    fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self>;

    /// Exact size of the encoding when cheaply known, used to presize buffers
    fn encoded_len(&self) -> usize {
        0
    }

    /// Encode into a fresh buffer
    fn as_byte_array(&self) -> Vec<u8> {
        let mut builder = ByteArrayBuilder::with_capacity(self.encoded_len());
        self.build_as_byte_array(&mut builder);
        builder.to_byte_array()
    }

    /// Decode from `start`, returning the value and the index after its last byte
    fn read_from_byte_array(buf: &[u8], start: usize) -> Result<(Self, usize)> {
        let mut reader = ByteArrayReader::new(buf, start);
        let value = Self::read_from(&mut reader)?;
        Ok((value, reader.position()))
    }

    /// Decode from the start of `buf`, ignoring trailing bytes
    fn from_byte_array(buf: &[u8]) -> Result<Self> {
        Self::read_from_byte_array(buf, 0).map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[derive(Debug, PartialEq)]
    struct Pair {
        a: i16,
        b: String,
    }

    impl ByteSerializable for Pair {
        fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder) {
            builder.append_i16(self.a).append_string(&self.b);
        }

        fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
            Ok(Pair {
                a: reader.read_i16()?,
                b: reader.read_string()?,
            })
        }
    }

    #[derive(Debug, PartialEq)]
    struct Wrapper {
        inner: Pair,
        tail: u8,
    }

    impl ByteSerializable for Wrapper {
        fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder) {
            builder.append_serializable(&self.inner).append_u8(self.tail);
        }

        fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
            Ok(Wrapper {
                inner: reader.read_serializable()?,
                tail: reader.read_u8()?,
            })
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_nested_values_share_cursor() {
        let value = Wrapper {
            inner: Pair {
                a: -9,
                b: "nested".to_string(),
            },
            tail: 42,
        };
        let bytes = value.as_byte_array();
        assert_eq!(bytes.len(), 2 + 4 + 6 + 1);

        let (decoded, next) = Wrapper::read_from_byte_array(&bytes, 0).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(next, bytes.len());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_read_from_offset() {
        let value = Pair {
            a: 1,
            b: "x".to_string(),
        };
        let mut bytes = vec![0xEE, 0xEE];
        bytes.extend(value.as_byte_array());

        let (decoded, next) = Pair::read_from_byte_array(&bytes, 2).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(next, bytes.len());
    }

    #[test]
    fn test_truncated_nested_value_fails() {
        let value = Wrapper {
            inner: Pair {
                a: 3,
                b: "abc".to_string(),
            },
            tail: 1,
        };
        let bytes = value.as_byte_array();
        let result = Wrapper::from_byte_array(&bytes[..bytes.len() - 2]);
        assert!(matches!(result, Err(ProtocolError::MalformedLength { .. })));
    }
}
