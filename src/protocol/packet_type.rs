//! Packet type identifiers.
//!
//! The discriminants below are the wire identifiers. The compiler rejects
//! duplicate discriminants, so no two variants can share an identifier.

use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire identifier written as the first `i32` of every packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PacketType {
    Chat = 0,
    Ping = 1,
    Pong = 2,
    EntityState = 3,
    Custom = 4,
    Disconnect = 5,
}

impl PacketType {
    /// Every packet type, in identifier order
    pub const ALL: [PacketType; 6] = [
        PacketType::Chat,
        PacketType::Ping,
        PacketType::Pong,
        PacketType::EntityState,
        PacketType::Custom,
        PacketType::Disconnect,
    ];

    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Stable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            PacketType::Chat => "CHAT",
            PacketType::Ping => "PING",
            PacketType::Pong => "PONG",
            PacketType::EntityState => "ENTITY_STATE",
            PacketType::Custom => "CUSTOM",
            PacketType::Disconnect => "DISCONNECT",
        }
    }
}

impl TryFrom<i32> for PacketType {
    type Error = ProtocolError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(PacketType::Chat),
            1 => Ok(PacketType::Ping),
            2 => Ok(PacketType::Pong),
            3 => Ok(PacketType::EntityState),
            4 => Ok(PacketType::Custom),
            5 => Ok(PacketType::Disconnect),
            _ => Err(ProtocolError::UnrecognizedPacketType(id)),
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
