//! # packet-wire
//!
//! Length-prefixed binary packet serialization with tagged variant dispatch.
//!
//! Packets are written with a [`ByteArrayBuilder`](core::builder::ByteArrayBuilder),
//! read back with a [`ByteArrayReader`](core::reader::ByteArrayReader), and
//! recovered from untyped bytes with [`Packet::parse`].
//!
//! ```rust
//! use packet_wire::{decode, encode, ChatPacket, Packet};
//!
//! let chat = ChatPacket::new("Tester", "Testee", "hello");
//! let bytes = encode(&chat.clone().into());
//!
//! match decode(&bytes).unwrap() {
//!     Packet::Chat(decoded) => assert_eq!(decoded, chat),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! Transport and framing are left to the caller: every decode call expects
//! fully buffered input.

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::core::serialization::ByteSerializable;
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::packet::{decode, encode, Packet, PacketIter};
pub use crate::protocol::packet_type::PacketType;
pub use crate::protocol::variants::{
    ChatPacket, CustomPacket, DisconnectPacket, EntityStatePacket, PingPacket, PongPacket, Vec3,
};
