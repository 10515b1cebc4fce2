//! # Core Codec Components
//!
//! Byte-level building blocks shared by every packet.
//!
//! ## Components
//! - **Builder**: appends big-endian primitives and length-prefixed runs
//! - **Reader**: decodes the same values from an explicit cursor
//! - **Serialization**: the `ByteSerializable` contract tying the two together
//!
//! ## Field Encodings
//! ```text
//! integers, floats:  fixed width, big-endian
//! bool:              1 byte (0 = false, anything else = true)
//! text, byte runs:   [Length(i32)] [Bytes(Length)]
//! ```
//!
//! ## Safety
//! - Every read is bounds-checked before the cursor moves
//! - Length prefixes are validated against the remaining buffer, and against a
//!   field limit when the reader is built with `with_limits`

pub mod builder;
pub mod reader;
pub mod serialization;
