use crate::error::{constants, ProtocolError, Result};
use crate::protocol::packet::Packet;
use crate::protocol::packet_type::PacketType;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, instrument};

type HandlerFn = dyn Fn(&Packet) -> Result<Option<Packet>> + Send + Sync + 'static;

/// Routes decoded packets to handlers keyed by packet type.
///
/// A handler may answer with a packet of its own (`Ok(Some(reply))`) or
/// consume the packet silently (`Ok(None)`).
#[derive(Clone)]
pub struct Dispatcher {
    handlers: Arc<RwLock<HashMap<PacketType, Box<HandlerFn>>>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register `handler` for `packet_type`, replacing any previous one
    pub fn register<F>(&self, packet_type: PacketType, handler: F) -> Result<()>
    where
        F: Fn(&Packet) -> Result<Option<Packet>> + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().map_err(|_| {
            ProtocolError::Custom(constants::ERR_DISPATCHER_WRITE_LOCK.to_string())
        })?;

        handlers.insert(packet_type, Box::new(handler));
        Ok(())
    }

    pub fn is_registered(&self, packet_type: PacketType) -> bool {
        self.handlers
            .read()
            .map(|handlers| handlers.contains_key(&packet_type))
            .unwrap_or(false)
    }

    #[instrument(skip(self, packet), fields(packet_type = %packet.packet_type()), level = "debug")]
    pub fn dispatch(&self, packet: &Packet) -> Result<Option<Packet>> {
        let packet_type = packet.packet_type();

        let handlers = self.handlers.read().map_err(|_| {
            ProtocolError::Custom(constants::ERR_DISPATCHER_READ_LOCK.to_string())
        })?;

        let reply = handlers
            .get(&packet_type)
            .ok_or(ProtocolError::UnexpectedPacket(packet_type))
            .and_then(|handler| handler(packet))?;

        debug!(replied = reply.is_some(), "Packet handled");
        Ok(reply)
    }

    /// Parse one packet from `bytes` and dispatch it
    #[instrument(skip(self, bytes), fields(len = bytes.len()), level = "debug")]
    pub fn dispatch_bytes(&self, bytes: &[u8]) -> Result<Option<Packet>> {
        let packet = Packet::parse(bytes)?;
        self.dispatch(&packet)
    }
}
