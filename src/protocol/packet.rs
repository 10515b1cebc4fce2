//! # Packet
//!
//! The closed set of packet variants and the dispatch that recovers a concrete
//! variant from raw bytes.
//!
//! ## Wire Format
//! ```text
//! [TypeId(i32)] [Field 1] ... [Field N]
//! ```
//!
//! ## Dispatch
//! `parse` reads the identifier, resolves it through [`PacketType`] and
//! hands the reader to that variant's field decoder. An unknown identifier or a
//! short buffer fails the whole call; no partial packet is returned.

use crate::config::{CodecConfig, TYPE_ID_SIZE};
use crate::core::builder::ByteArrayBuilder;
use crate::core::reader::ByteArrayReader;
use crate::core::serialization::ByteSerializable;
use crate::error::{ProtocolError, Result};
use crate::protocol::packet_type::PacketType;
use crate::protocol::variants::{
    ChatPacket, CustomPacket, DisconnectPacket, EntityStatePacket, PacketVariant, PingPacket,
    PongPacket,
};
use crate::utils::hex;
use tracing::{debug, warn};

/// Any packet that can cross the wire
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    Chat(ChatPacket),
    Ping(PingPacket),
    Pong(PongPacket),
    EntityState(EntityStatePacket),
    Custom(CustomPacket),
    Disconnect(DisconnectPacket),
}

impl Packet {
    pub fn packet_type(&self) -> PacketType {
        match self {
            Packet::Chat(_) => PacketType::Chat,
            Packet::Ping(_) => PacketType::Ping,
            Packet::Pong(_) => PacketType::Pong,
            Packet::EntityState(_) => PacketType::EntityState,
            Packet::Custom(_) => PacketType::Custom,
            Packet::Disconnect(_) => PacketType::Disconnect,
        }
    }

    /// Wire identifier of this packet's variant
    pub fn type_identifier(&self) -> i32 {
        self.packet_type().id()
    }

    /// Decode the packet at the start of `buf`. Trailing bytes are ignored.
    pub fn parse(buf: &[u8]) -> Result<Packet> {
        Self::parse_at(buf, 0).map(|(packet, _)| packet)
    }

    /// Decode the packet starting at `start` and return it with the index of the
    /// first byte after it
    pub fn parse_at(buf: &[u8], start: usize) -> Result<(Packet, usize)> {
        let mut reader = ByteArrayReader::new(buf, start);
        let packet = Self::decode_logged(&mut reader)?;
        Ok((packet, reader.position()))
    }

    /// Decode with caller-supplied limits
    pub fn parse_with(buf: &[u8], config: &CodecConfig) -> Result<Packet> {
        if buf.len() > config.max_packet_size {
            warn!(
                len = buf.len(),
                limit = config.max_packet_size,
                "Rejected oversized packet buffer"
            );
            return Err(ProtocolError::OversizedPacket(buf.len()));
        }
        let mut reader = ByteArrayReader::with_limits(buf, 0, config.max_field_length);
        Self::decode_logged(&mut reader)
    }

    /// Iterate over back-to-back packets in `buf`
    pub fn iter(buf: &[u8]) -> PacketIter<'_> {
        PacketIter {
            reader: ByteArrayReader::new(buf, 0),
            failed: false,
        }
    }

    fn decode_logged(reader: &mut ByteArrayReader<'_>) -> Result<Packet> {
        let start = reader.position();
        match Self::read_from(reader) {
            Ok(packet) => {
                debug!(
                    packet_type = %packet.packet_type(),
                    offset = start,
                    len = reader.position() - start,
                    "Decoded packet"
                );
                Ok(packet)
            }
            Err(e) => {
                let buf = reader.buffer();
                let head = buf.get(start..).unwrap_or_default();
                warn!(error = %e, offset = start, bytes = %hex::preview(head), "Rejected packet");
                Err(e)
            }
        }
    }

    /// Decode the fields of `ty`, the identifier having been consumed already
    fn read_variant(ty: PacketType, reader: &mut ByteArrayReader<'_>) -> Result<Packet> {
        Ok(match ty {
            PacketType::Chat => Packet::Chat(ChatPacket::read_fields(reader)?),
            PacketType::Ping => Packet::Ping(PingPacket::read_fields(reader)?),
            PacketType::Pong => Packet::Pong(PongPacket::read_fields(reader)?),
            PacketType::EntityState => {
                Packet::EntityState(EntityStatePacket::read_fields(reader)?)
            }
            PacketType::Custom => Packet::Custom(CustomPacket::read_fields(reader)?),
            PacketType::Disconnect => Packet::Disconnect(DisconnectPacket::read_fields(reader)?),
        })
    }
}

impl ByteSerializable for Packet {
    fn build_as_byte_array(&self, builder: &mut ByteArrayBuilder) {
        match self {
            Packet::Chat(p) => p.build_as_byte_array(builder),
            Packet::Ping(p) => p.build_as_byte_array(builder),
            Packet::Pong(p) => p.build_as_byte_array(builder),
            Packet::EntityState(p) => p.build_as_byte_array(builder),
            Packet::Custom(p) => p.build_as_byte_array(builder),
            Packet::Disconnect(p) => p.build_as_byte_array(builder),
        }
    }

    fn read_from(reader: &mut ByteArrayReader<'_>) -> Result<Self> {
        let start = reader.position();
        let result = reader
            .read_i32()
            .and_then(PacketType::try_from)
            .and_then(|ty| Self::read_variant(ty, reader));
        if result.is_err() {
            reader.seek(start);
        }
        result
    }

    fn encoded_len(&self) -> usize {
        TYPE_ID_SIZE
            + match self {
                Packet::Chat(p) => p.fields_len(),
                Packet::Ping(p) => p.fields_len(),
                Packet::Pong(p) => p.fields_len(),
                Packet::EntityState(p) => p.fields_len(),
                Packet::Custom(p) => p.fields_len(),
                Packet::Disconnect(p) => p.fields_len(),
            }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Packet {
                fn from(packet: $ty) -> Self {
                    Packet::$variant(packet)
                }
            }
        )*
    };
}

impl_from_variant!(
    Chat(ChatPacket),
    Ping(PingPacket),
    Pong(PongPacket),
    EntityState(EntityStatePacket),
    Custom(CustomPacket),
    Disconnect(DisconnectPacket),
);

/// Iterator over a buffer of concatenated packets.
///
/// Yields each packet in order and stops after the first error.
#[derive(Debug, Clone)]
pub struct PacketIter<'a> {
    reader: ByteArrayReader<'a>,
    failed: bool,
}

impl PacketIter<'_> {
    /// Index of the first byte not yet consumed
    pub fn position(&self) -> usize {
        self.reader.position()
    }
}

impl Iterator for PacketIter<'_> {
    type Item = Result<Packet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let result = Packet::decode_logged(&mut self.reader);
        self.failed = result.is_err();
        Some(result)
    }
}

/// Encode a packet into a transmissible buffer
pub fn encode(packet: &Packet) -> Vec<u8> {
    packet.as_byte_array()
}

/// Decode one fully received buffer
pub fn decode(bytes: &[u8]) -> Result<Packet> {
    Packet::parse(bytes)
}
