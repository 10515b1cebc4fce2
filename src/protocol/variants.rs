//! Concrete packet variants.
//!
//! Every variant encodes as `[type_id: i32][fields...]`. The field order
//! documented on each struct is the wire order.

use crate::config::TYPE_ID_SIZE;
use crate::core::builder::ByteArrayBuilder;
use crate::core::reader::{prefixed_len, ByteArrayReader};
use crate::core::serialization::ByteSerializable;
use crate::error::{ProtocolError, Result};
use crate::protocol::packet_type::PacketType;

/// Field-level hooks shared by every packet variant.
///
/// `ByteSerializable` for a variant writes the type identifier and then these
/// fields; the dispatcher in [`Packet`](crate::protocol::packet::Packet) reads
/// the identifier itself and calls [`PacketVariant::read_fields`] directly.
pub trait PacketVariant: ByteSerializable {
    const TYPE: PacketType;

    fn build_fields(&self, builder: &mut ByteArrayBuilder);

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self>;

    /// Size of the encoded fields, excluding the type identifier
    fn fields_len(&self) -> usize;
}

/// Consume the leading identifier and check it names `expected`.
///
/// On mismatch the cursor is left in front of the identifier.
pub fn expect_packet_type(reader: &mut ByteArrayReader<'_>, expected: PacketType) -> Result<()> {
    let start = reader.position();
    let found = reader.read_i32()?;
    if found != expected.id() {
        reader.seek(start);
        return Err(ProtocolError::PacketTypeMismatch { expected, found });
    }
    Ok(())
}

macro_rules! impl_packet_serializable {
    ($($variant:ty),* $(,)?) => {
        $(
            impl ByteSerializable for $variant {
                fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder) {
                    builder.append_i32(<Self as PacketVariant>::TYPE.id());
                    self.build_fields(builder);
                }

                fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
                    let start = reader.position();
                    expect_packet_type(reader, <Self as PacketVariant>::TYPE)?;
                    <Self as PacketVariant>::read_fields(reader).inspect_err(|_| reader.seek(start))
                }

                fn encoded_len(&self) -> usize {
                    TYPE_ID_SIZE + self.fields_len()
                }
            }
        )*
    };
}

impl_packet_serializable!(
    ChatPacket,
    PingPacket,
    PongPacket,
    EntityStatePacket,
    CustomPacket,
    DisconnectPacket,
);

/// Three `f32` components, encoded as x, y, z
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ENCODED_LEN: usize = 12;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl ByteSerializable for Vec3 {
    fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder) {
        builder.append_f32(self.x).append_f32(self.y).append_f32(self.z);
    }

    fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            x: reader.read_f32()?,
            y: reader.read_f32()?,
            z: reader.read_f32()?,
        })
    }

    fn encoded_len(&self) -> usize {
        Self::ENCODED_LEN
    }
}

/// A text message between two named users.
///
/// Wire order: sender, recipient, message (all length-prefixed text).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatPacket {
    pub sender: String,
    pub recipient: String,
    pub message: String,
}

impl ChatPacket {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            message: message.into(),
        }
    }
}

impl PacketVariant for ChatPacket {
    const TYPE: PacketType = PacketType::Chat;

    fn build_fields(&self, builder: &mut ByteArrayBuilder) {
        builder
            .append_string(&self.sender)
            .append_string(&self.recipient)
            .append_string(&self.message);
    }

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            sender: reader.read_string()?,
            recipient: reader.read_string()?,
            message: reader.read_string()?,
        })
    }

    fn fields_len(&self) -> usize {
        prefixed_len(self.sender.len())
            + prefixed_len(self.recipient.len())
            + prefixed_len(self.message.len())
    }
}

/// Liveness probe. Wire order: sequence (u32), timestamp_ms (u64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PingPacket {
    pub sequence: u32,
    pub timestamp_ms: u64,
}

impl PingPacket {
    pub const fn new(sequence: u32, timestamp_ms: u64) -> Self {
        Self {
            sequence,
            timestamp_ms,
        }
    }
}

impl PacketVariant for PingPacket {
    const TYPE: PacketType = PacketType::Ping;

    fn build_fields(&self, builder: &mut ByteArrayBuilder) {
        builder.append_u32(self.sequence).append_u64(self.timestamp_ms);
    }

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            sequence: reader.read_u32()?,
            timestamp_ms: reader.read_u64()?,
        })
    }

    fn fields_len(&self) -> usize {
        4 + 8
    }
}

/// Answer to a [`PingPacket`], echoing its sequence and timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PongPacket {
    pub sequence: u32,
    pub timestamp_ms: u64,
}

impl PongPacket {
    pub const fn reply_to(ping: &PingPacket) -> Self {
        Self {
            sequence: ping.sequence,
            timestamp_ms: ping.timestamp_ms,
        }
    }
}

impl PacketVariant for PongPacket {
    const TYPE: PacketType = PacketType::Pong;

    fn build_fields(&self, builder: &mut ByteArrayBuilder) {
        builder.append_u32(self.sequence).append_u64(self.timestamp_ms);
    }

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            sequence: reader.read_u32()?,
            timestamp_ms: reader.read_u64()?,
        })
    }

    fn fields_len(&self) -> usize {
        4 + 8
    }
}

/// Snapshot of one simulated entity.
///
/// Wire order: entity_id (u64), position (Vec3), velocity (Vec3), active (bool).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntityStatePacket {
    pub entity_id: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub active: bool,
}

impl PacketVariant for EntityStatePacket {
    const TYPE: PacketType = PacketType::EntityState;

    fn build_fields(&self, builder: &mut ByteArrayBuilder) {
        builder
            .append_u64(self.entity_id)
            .append_serializable(&self.position)
            .append_serializable(&self.velocity)
            .append_bool(self.active);
    }

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            entity_id: reader.read_u64()?,
            position: reader.read_serializable()?,
            velocity: reader.read_serializable()?,
            active: reader.read_bool()?,
        })
    }

    fn fields_len(&self) -> usize {
        8 + Vec3::ENCODED_LEN * 2 + 1
    }
}

/// Application-defined command with an opaque payload.
///
/// Wire order: command (text), payload (length-prefixed bytes).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomPacket {
    pub command: String,
    pub payload: Vec<u8>,
}

impl CustomPacket {
    pub fn new(command: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            command: command.into(),
            payload: payload.into(),
        }
    }
}

impl PacketVariant for CustomPacket {
    const TYPE: PacketType = PacketType::Custom;

    fn build_fields(&self, builder: &mut ByteArrayBuilder) {
        builder
            .append_string(&self.command)
            .append_bytes(&self.payload);
    }

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            command: reader.read_string()?,
            payload: reader.read_bytes()?,
        })
    }

    fn fields_len(&self) -> usize {
        prefixed_len(self.command.len()) + prefixed_len(self.payload.len())
    }
}

/// Orderly shutdown notice. Wire order: reason (text).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisconnectPacket {
    pub reason: String,
}

impl DisconnectPacket {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PacketVariant for DisconnectPacket {
    const TYPE: PacketType = PacketType::Disconnect;

    fn build_fields(&self, builder: &mut ByteArrayBuilder) {
        builder.append_string(&self.reason);
    }

    fn read_fields(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        Ok(Self {
            reason: reader.read_string()?,
        })
    }

    fn fields_len(&self) -> usize {
        prefixed_len(self.reason.len())
    }
}
