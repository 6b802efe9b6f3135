//! Packet wire format parsing and serialization.
//!
//! Layout, fixed 14-byte header followed by raw payload bytes:
//!
//! ```text
//! kind(1) | source(4, BE i32) | dest(4, BE i32) | packet_id(4, BE i32) | hops(1) | payload
//! ```
//!
//! There is no checksum and no payload length prefix — the payload
//! length is implicit (total length minus header). The payload is
//! opaque to the codec; in practice it carries UTF-8 text for DATA
//! packets and is empty for control packets.

use std::borrow::Cow;

use crate::constants::{PacketKind, HEADER_SIZE};
use crate::error::PacketError;
use crate::types::{NodeId, PacketId, PacketKey};

/// A parsed packet.
///
/// The kind byte is kept raw: unknown kinds parse successfully and are
/// rejected later by the dispatcher, so malformed-kind traffic still
/// contributes reverse-route information.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct WirePacket {
    pub kind: u8,
    pub source: NodeId,
    pub dest: NodeId,
    pub packet_id: PacketId,
    pub hops: u8,
    pub payload: Vec<u8>,
}

impl WirePacket {
    /// Build a packet with an arbitrary payload.
    pub fn new(
        kind: PacketKind,
        source: NodeId,
        dest: NodeId,
        packet_id: PacketId,
        hops: u8,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            kind: kind.wire(),
            source,
            dest,
            packet_id,
            hops,
            payload,
        }
    }

    /// Build a control packet (RREQ/RREP), which carries no payload.
    pub fn control(
        kind: PacketKind,
        source: NodeId,
        dest: NodeId,
        packet_id: PacketId,
        hops: u8,
    ) -> Self {
        Self::new(kind, source, dest, packet_id, hops, Vec::new())
    }

    /// Parse a packet from wire bytes.
    ///
    /// Fails only when the input is shorter than the fixed header.
    pub fn parse(raw: &[u8]) -> Result<Self, PacketError> {
        if raw.len() < HEADER_SIZE {
            return Err(PacketError::TooShort {
                min: HEADER_SIZE,
                actual: raw.len(),
            });
        }

        let kind = raw[0];
        let source = i32::from_be_bytes(raw[1..5].try_into().expect("slice is exactly 4 bytes"));
        let dest = i32::from_be_bytes(raw[5..9].try_into().expect("slice is exactly 4 bytes"));
        let packet_id =
            i32::from_be_bytes(raw[9..13].try_into().expect("slice is exactly 4 bytes"));
        let hops = raw[13];
        let payload = raw[HEADER_SIZE..].to_vec();

        Ok(Self {
            kind,
            source: NodeId(source),
            dest: NodeId(dest),
            packet_id: PacketId(packet_id),
            hops,
            payload,
        })
    }

    /// Serialize the packet back to wire format.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        result.push(self.kind);
        result.extend_from_slice(&self.source.0.to_be_bytes());
        result.extend_from_slice(&self.dest.0.to_be_bytes());
        result.extend_from_slice(&self.packet_id.0.to_be_bytes());
        result.push(self.hops);
        result.extend_from_slice(&self.payload);
        result
    }

    /// The dispatchable packet kind, or an error for reserved/unknown
    /// kind bytes.
    pub fn packet_kind(&self) -> Result<PacketKind, PacketError> {
        PacketKind::from_wire(self.kind)
    }

    /// The `(source, packet_id)` duplicate-suppression key.
    pub fn key(&self) -> PacketKey {
        PacketKey::new(self.source, self.packet_id)
    }

    /// The payload interpreted as text. Lossy: invalid UTF-8 is
    /// replaced, never rejected.
    #[must_use]
    pub fn payload_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}
