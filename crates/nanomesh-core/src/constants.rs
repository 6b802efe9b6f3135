//! Protocol constants and the packet kind enumeration.

use crate::error::PacketError;

/// Fixed wire header size: kind(1) + source(4) + dest(4) + packet_id(4) + hops(1).
pub const HEADER_SIZE: usize = 14;

/// Maximum hop count representable on the wire.
pub const MAX_HOPS: u8 = u8::MAX;

/// The kind of a routing packet.
///
/// The wire kind byte is not validated at decode time — unknown values
/// parse successfully and are rejected by the dispatcher via
/// [`PacketKind::from_wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketKind {
    /// Route request: "where is node X?" Flooded.
    Rreq = 1,
    /// Route reply: "I am node X." Unicast back along the reverse path.
    Rrep = 2,
    /// Application data. Unicast along the known route.
    Data = 3,
    /// Delivery acknowledgement. Reserved on the wire, never dispatched.
    Ack = 4,
}

impl PacketKind {
    pub fn from_wire(v: u8) -> Result<Self, PacketError> {
        match v {
            1 => Ok(PacketKind::Rreq),
            2 => Ok(PacketKind::Rrep),
            3 => Ok(PacketKind::Data),
            4 => Ok(PacketKind::Ack),
            _ => Err(PacketError::UnknownKind(v)),
        }
    }

    /// The kind byte as it appears on the wire.
    #[must_use]
    pub fn wire(self) -> u8 {
        self as u8
    }
}
