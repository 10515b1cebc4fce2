//! Example: Encoding, transmitting and dispatching packets
//!
//! Builds a few packets, concatenates their encodings as a transport would
//! deliver them, then decodes and dispatches each one.
//!
//! Run with: `cargo run --example chat_roundtrip`

#![allow(clippy::uninlined_format_args)]

use packet_wire::config::WireConfig;
use packet_wire::protocol::dispatcher::Dispatcher;
use packet_wire::utils::logging::init_logging;
use packet_wire::{encode, ChatPacket, DisconnectPacket, Packet, PacketType, PingPacket, PongPacket};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = WireConfig::from_env()?;
    config.validate_strict()?;
    init_logging(&config.logging)?;

    println!("=== Packet Round-Trip Demo ===\n");

    let outgoing: Vec<Packet> = vec![
        ChatPacket::new("Tester", "Testee", "This is a test. ! a /\\&..,").into(),
        PingPacket::new(1, 1_700_000_000_000).into(),
        DisconnectPacket::new("demo finished").into(),
    ];

    let mut wire = Vec::new();
    for packet in &outgoing {
        let bytes = encode(packet);
        println!(
            "{:<12} {:>3} bytes  {:02X?}",
            packet.packet_type().name(),
            bytes.len(),
            &bytes[..bytes.len().min(12)]
        );
        wire.extend(bytes);
    }

    let dispatcher = Dispatcher::new();
    dispatcher.register(PacketType::Chat, |packet| {
        if let Packet::Chat(chat) = packet {
            println!("  chat {} -> {}: {}", chat.sender, chat.recipient, chat.message);
        }
        Ok(None)
    })?;
    dispatcher.register(PacketType::Ping, |packet| match packet {
        Packet::Ping(ping) => Ok(Some(PongPacket::reply_to(ping).into())),
        _ => Ok(None),
    })?;
    dispatcher.register(PacketType::Disconnect, |packet| {
        if let Packet::Disconnect(bye) = packet {
            println!("  disconnect: {}", bye.reason);
        }
        Ok(None)
    })?;

    println!("\nDecoding {} bytes:", wire.len());
    for packet in Packet::iter(&wire) {
        let packet = packet?;
        if let Some(reply) = dispatcher.dispatch(&packet)? {
            println!("  reply: {:?}", reply);
        }
    }

    Ok(())
}
