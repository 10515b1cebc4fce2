//! # Packet Protocol
//!
//! The packet family and everything that routes it.
//!
//! ## Components
//! - **PacketType**: the authoritative identifier table
//! - **Variants**: concrete packet structs and their field encodings
//! - **Packet**: the sum type, `parse` dispatch and stream iteration
//! - **Dispatcher**: handler routing for decoded packets
//!
//! ## Packet Types
//! | Id | Type | Fields |
//! |----|------|--------|
//! | 0 | Chat | sender, recipient, message |
//! | 1 | Ping | sequence, timestamp_ms |
//! | 2 | Pong | sequence, timestamp_ms |
//! | 3 | EntityState | entity_id, position, velocity, active |
//! | 4 | Custom | command, payload |
//! | 5 | Disconnect | reason |

pub mod dispatcher;
pub mod packet;
pub mod packet_type;
pub mod variants;
