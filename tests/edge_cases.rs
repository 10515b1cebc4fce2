#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the codec and dispatch
//! Boundary conditions, malformed inputs, limits and nested reads

use packet_wire::config::{CodecConfig, MAX_FIELD_LENGTH};
use packet_wire::core::builder::ByteArrayBuilder;
use packet_wire::core::reader::ByteArrayReader;
use packet_wire::{
    decode, encode, ByteSerializable, ChatPacket, CustomPacket, DisconnectPacket,
    EntityStatePacket, Packet, PacketType, PingPacket, ProtocolError, Vec3,
};

// ============================================================================
// CHAT SCENARIOS
// ============================================================================

#[test]
fn test_chat_escaped_characters_survive() {
    let chat = ChatPacket::new("Tester", "Testee", "This is a test. ! a /\\&..,");
    let bytes = encode(&chat.clone().into());
    assert_eq!(decode(&bytes).unwrap(), Packet::Chat(chat));
}

#[test]
fn test_chat_embedded_separators_and_unicode() {
    let chat = ChatPacket::new("nul\0name", "tab\tline\nbreak", "日本語 🚀 \"quoted\" ; , |");
    let bytes = chat.as_byte_array();
    let decoded = ChatPacket::from_byte_array(&bytes).unwrap();
    assert_eq!(decoded, chat);
}

#[test]
fn test_chat_all_fields_empty() {
    let chat = ChatPacket::default();
    let bytes = chat.as_byte_array();
    // type id + three zero prefixes
    assert_eq!(bytes.len(), 16);
    assert_eq!(ChatPacket::from_byte_array(&bytes).unwrap(), chat);
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn test_empty_buffer() {
    assert!(matches!(
        decode(&[]),
        Err(ProtocolError::Underflow {
            needed: 4,
            remaining: 0
        })
    ));
}

#[test]
fn test_negative_text_length() {
    let mut builder = ByteArrayBuilder::new();
    builder
        .append_i32(PacketType::Disconnect.id())
        .append_i32(-5);
    let result = decode(&builder.to_byte_array());
    assert!(matches!(
        result,
        Err(ProtocolError::MalformedLength { length: -5, .. })
    ));
}

#[test]
fn test_text_length_past_end() {
    let mut builder = ByteArrayBuilder::new();
    builder
        .append_i32(PacketType::Disconnect.id())
        .append_i32(100)
        .append_raw(b"short");
    let result = decode(&builder.to_byte_array());
    assert!(matches!(
        result,
        Err(ProtocolError::MalformedLength {
            length: 100,
            remaining: 5
        })
    ));
}

#[test]
fn test_invalid_utf8_in_chat() {
    let mut builder = ByteArrayBuilder::new();
    builder
        .append_i32(PacketType::Chat.id())
        .append_bytes(&[0xC3, 0x28])
        .append_string("b")
        .append_string("c");
    assert!(matches!(
        decode(&builder.to_byte_array()),
        Err(ProtocolError::InvalidUtf8(_))
    ));
}

#[test]
fn test_non_canonical_bool_decodes_true() {
    let entity = EntityStatePacket {
        entity_id: 1,
        position: Vec3::default(),
        velocity: Vec3::default(),
        active: true,
    };
    let mut bytes = entity.as_byte_array();
    let last = bytes.len() - 1;
    bytes[last] = 0x7F;

    let decoded = EntityStatePacket::from_byte_array(&bytes).unwrap();
    assert!(decoded.active);
}

#[test]
fn test_truncated_nested_vec3() {
    let entity = EntityStatePacket {
        entity_id: 42,
        position: Vec3::new(1.0, 2.0, 3.0),
        velocity: Vec3::new(4.0, 5.0, 6.0),
        active: false,
    };
    let bytes = entity.as_byte_array();
    // Cut inside the velocity vector
    let cut = 4 + 8 + 12 + 6;
    assert!(matches!(
        Packet::parse(&bytes[..cut]),
        Err(ProtocolError::Underflow { needed: 4, .. })
    ));
}

#[test]
fn test_failed_parse_at_leaves_no_partial_state() {
    let good = encode(&PingPacket::new(1, 2).into());
    let mut buffer = good.clone();
    buffer.extend_from_slice(&PacketType::Chat.id().to_be_bytes());
    buffer.extend_from_slice(&[0, 0]);

    let (_, next) = Packet::parse_at(&buffer, 0).unwrap();
    assert_eq!(next, good.len());
    assert!(Packet::parse_at(&buffer, next)
        .unwrap_err()
        .is_underflow());
    // The first packet is still readable from the same buffer
    assert!(Packet::parse_at(&buffer, 0).is_ok());
}

#[test]
fn test_parse_at_past_end() {
    let bytes = encode(&DisconnectPacket::new("x").into());
    assert!(matches!(
        Packet::parse_at(&bytes, bytes.len() + 10),
        Err(ProtocolError::Underflow { remaining: 0, .. })
    ));
}

// ============================================================================
// LIMITS
// ============================================================================

#[test]
fn test_parse_with_rejects_oversized_buffer() {
    let config = CodecConfig {
        max_packet_size: 16,
        max_field_length: 8,
    };
    let bytes = encode(&ChatPacket::new("a", "b", "a longer message").into());
    assert!(matches!(
        Packet::parse_with(&bytes, &config),
        Err(ProtocolError::OversizedPacket(len)) if len == bytes.len()
    ));
}

#[test]
fn test_parse_with_rejects_oversized_field() {
    let config = CodecConfig {
        max_packet_size: 1024,
        max_field_length: 4,
    };
    let bytes = encode(&CustomPacket::new("cmd", vec![0u8; 5]).into());
    assert!(matches!(
        Packet::parse_with(&bytes, &config),
        Err(ProtocolError::OversizedField {
            length: 5,
            limit: 4
        })
    ));
}

#[test]
fn test_default_decode_has_no_field_limit() {
    let message = "x".repeat(MAX_FIELD_LENGTH + 1);
    let packet: Packet = ChatPacket::new("Tester", "Testee", message).into();
    let bytes = encode(&packet);
    assert_eq!(decode(&bytes).unwrap(), packet);
    assert_eq!(Packet::parse_at(&bytes, 0).unwrap(), (packet, bytes.len()));

    let config = CodecConfig {
        max_packet_size: bytes.len(),
        max_field_length: MAX_FIELD_LENGTH,
    };
    assert!(matches!(
        Packet::parse_with(&bytes, &config),
        Err(ProtocolError::OversizedField { length, limit })
            if length == MAX_FIELD_LENGTH + 1 && limit == MAX_FIELD_LENGTH
    ));
}

// ============================================================================
// READER / BUILDER INTERPLAY
// ============================================================================

#[test]
fn test_reader_decodes_packets_back_to_back() {
    let mut builder = ByteArrayBuilder::new();
    builder
        .append_serializable(&ChatPacket::new("a", "b", "c"))
        .append_serializable(&Packet::from(PingPacket::new(5, 6)));
    let bytes = builder.to_byte_array();

    let mut reader = ByteArrayReader::new(&bytes, 0);
    let chat: ChatPacket = reader.read_serializable().unwrap();
    let next: Packet = reader.read_serializable().unwrap();

    assert_eq!(chat, ChatPacket::new("a", "b", "c"));
    assert_eq!(next, Packet::Ping(PingPacket::new(5, 6)));
    assert!(reader.is_empty());
}

#[test]
fn test_read_serializable_restores_cursor_on_mismatch() {
    let bytes = ChatPacket::new("a", "b", "c").as_byte_array();
    let mut reader = ByteArrayReader::new(&bytes, 0);

    let err = reader.read_serializable::<PingPacket>().unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::PacketTypeMismatch {
            expected: PacketType::Ping,
            found: 0
        }
    ));
    assert_eq!(reader.position(), 0);
}

#[test]
fn test_float_bit_patterns_preserved() {
    let entity = EntityStatePacket {
        entity_id: u64::MAX,
        position: Vec3::new(f32::MIN_POSITIVE, -0.0, f32::MAX),
        velocity: Vec3::new(f32::INFINITY, f32::NEG_INFINITY, 1e-40),
        active: true,
    };
    let decoded = EntityStatePacket::from_byte_array(&entity.as_byte_array()).unwrap();
    assert_eq!(decoded, entity);
    assert!(decoded.position.y.is_sign_negative());
}
