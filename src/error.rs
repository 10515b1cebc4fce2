//! # Error Types
//!
//! Error handling for packet encoding, decoding and dispatch.
//!
//! Every decode failure aborts the single read or parse call that raised it.
//! No partially decoded packet is ever returned alongside an error.
//!
//! ## Error Categories
//! - **Bounds Errors**: the buffer ran out before a field was complete
//! - **Type Errors**: unknown or mismatched packet type identifiers
//! - **Content Errors**: malformed length prefixes, invalid UTF-8, oversized fields
//! - **Configuration Errors**: config file I/O, parse and validation failures
//!
//! ## Example Usage
//! ```rust
//! use packet_wire::error::{ProtocolError, Result};
//! use packet_wire::protocol::packet::Packet;
//! use tracing::{error, info};
//!
//! fn first_packet(bytes: &[u8]) -> Result<Packet> {
//!     Packet::parse(bytes)
//! }
//!
//! match first_packet(&[0x00, 0x00]) {
//!     Ok(packet) => info!(?packet, "Decoded packet"),
//!     Err(ProtocolError::Underflow { needed, remaining }) => {
//!         error!(needed, remaining, "Buffer too short")
//!     }
//!     Err(e) => error!(error = %e, "Decode failed"),
//! }
//! ```

use crate::protocol::packet_type::PacketType;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Dispatcher-related error messages
    pub const ERR_DISPATCHER_WRITE_LOCK: &str = "Failed to acquire write lock on dispatcher";
    pub const ERR_DISPATCHER_READ_LOCK: &str = "Failed to acquire read lock on dispatcher";

    /// Configuration errors
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";

    /// Logging setup
    pub const ERR_LOGGING_INSTALLED: &str = "A global tracing subscriber is already installed";
}

// ProtocolError is the single error type for every codec and dispatch operation
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Buffer underflow: needed {needed} bytes, {remaining} remaining")]
    Underflow { needed: usize, remaining: usize },

    #[error("Unrecognized packet type: {0}")]
    UnrecognizedPacketType(i32),

    #[error("Malformed length prefix {length} with {remaining} bytes remaining")]
    MalformedLength { length: i32, remaining: usize },

    #[error("Packet type mismatch: expected {expected:?}, found {found}")]
    PacketTypeMismatch { expected: PacketType, found: i32 },

    #[error("Field too large: {length} bytes (limit {limit})")]
    OversizedField { length: usize, limit: usize },

    #[error("Packet too large: {0} bytes")]
    OversizedPacket(usize),

    #[error("Invalid UTF-8 in text field: {0}")]
    InvalidUtf8(String),

    #[error("No handler registered for {0:?}")]
    UnexpectedPacket(PacketType),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl ProtocolError {
    /// True for the errors raised when a buffer ends before the data it declares.
    ///
    /// `MalformedLength` counts: a length prefix that overruns the buffer is a
    /// specialised underflow.
    pub fn is_underflow(&self) -> bool {
        matches!(
            self,
            ProtocolError::Underflow { .. } | ProtocolError::MalformedLength { .. }
        )
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
