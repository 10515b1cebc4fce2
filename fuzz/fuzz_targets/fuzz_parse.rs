#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_wire::Packet;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail cleanly: no panics, no partial packets
    if let Ok((packet, next)) = Packet::parse_at(data, 0) {
        assert!(next <= data.len());
        let _ = packet.packet_type();
    }
    for _ in Packet::iter(data) {}
});
