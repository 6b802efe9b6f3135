//! Newtype wrappers for protocol identifier fields.
//!
//! These types prevent accidental mixing of the various 32-bit
//! identifiers that travel in packet headers, and keep the transport's
//! opaque peer/channel handles distinct from routing identifiers.

use core::fmt;

/// A 32-bit signed integer uniquely identifying a device for routing.
///
/// Assigned once per install and persisted externally; immutable for
/// the process lifetime. Distinct from the device's display name,
/// which is a collaborator concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeId(pub i32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A 32-bit signed packet sequence number.
///
/// Monotonically incremented by the originating node for every packet
/// it creates. Uniqueness is scoped to `(sourceId, packetId)`, not
/// global.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct PacketId(pub i32);

impl PacketId {
    /// The successor sequence number, wrapping at `i32::MAX`.
    pub fn next(self) -> PacketId {
        PacketId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PacketId({})", self.0)
    }
}

/// Opaque handle to an immediate neighbor, supplied by the transport.
///
/// Only meaningful to the transport collaborator that issued it; the
/// routing core stores and compares it, nothing more.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct PeerHandle(pub u64);

impl fmt::Debug for PeerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerHandle({})", self.0)
    }
}

/// Opaque handle to the communication channel a neighbor is reachable
/// through, supplied by the transport alongside the peer handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ChannelHandle(pub u64);

impl fmt::Debug for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelHandle({})", self.0)
    }
}

/// The `(sourceId, packetId)` pair that identifies a packet for
/// duplicate suppression.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct PacketKey {
    pub source: NodeId,
    pub packet_id: PacketId,
}

impl PacketKey {
    pub const fn new(source: NodeId, packet_id: PacketId) -> Self {
        Self { source, packet_id }
    }
}

impl fmt::Debug for PacketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PacketKey({}-{})", self.source, self.packet_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_id_next_wraps() {
        assert_eq!(PacketId(0).next(), PacketId(1));
        assert_eq!(PacketId(i32::MAX).next(), PacketId(i32::MIN));
    }

    #[test]
    fn test_packet_key_equality() {
        let a = PacketKey::new(NodeId(100), PacketId(7));
        let b = PacketKey::new(NodeId(100), PacketId(7));
        let c = PacketKey::new(NodeId(100), PacketId(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(NodeId(4592).to_string(), "4592");
        assert_eq!(NodeId(-1).to_string(), "-1");
        assert_eq!(format!("{:?}", PeerHandle(3)), "PeerHandle(3)");
        assert_eq!(
            format!("{:?}", PacketKey::new(NodeId(100), PacketId(2))),
            "PacketKey(100-2)"
        );
    }
}
