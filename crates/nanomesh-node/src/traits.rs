//! Collaborator traits consumed by the node.
//!
//! The routing engine produces actions rather than performing I/O —
//! these traits are the seams where concrete proximity transports,
//! neighbor directories, and UI/persistence layers plug in.

use nanomesh_core::{ChannelHandle, NodeId, PeerHandle};

use crate::error::TransportError;

/// Best-effort, fire-and-forget frame transmission to one neighbor.
///
/// No delivery guarantee and no confirmation: an `Ok` return means the
/// frame was handed to the radio, nothing more. Implementations must
/// not block for unbounded time.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        peer: PeerHandle,
        channel: ChannelHandle,
        data: &[u8],
    ) -> Result<(), TransportError>;
}

/// One currently attached direct neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Stable peer handle usable with [`Transport::send`].
    pub peer: PeerHandle,
    /// Channel the neighbor is reachable through.
    pub channel: ChannelHandle,
}

/// Enumerable set of the neighbors the node can currently reach in a
/// single hop. Membership is managed externally (friend/handshake
/// bootstrapping is not a routing concern).
pub trait NeighborDirectory: Send + Sync {
    fn neighbors(&self) -> Vec<Neighbor>;
}

/// Receiver for messages that terminate at the local node, plus the
/// optimistic local echo of messages the node originates. Persistence
/// and display live behind this trait, outside the routing core.
pub trait DeliverySink: Send + Sync {
    /// A DATA packet addressed to the local node arrived.
    fn message_received(&self, sender: NodeId, text: &str);

    /// A locally composed message was transmitted (directly or from
    /// the pending buffer). Not rolled back on transport failure.
    fn message_sent(&self, dest: NodeId, text: &str);
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(
        &self,
        peer: PeerHandle,
        channel: ChannelHandle,
        data: &[u8],
    ) -> Result<(), TransportError> {
        (**self).send(peer, channel, data)
    }
}

impl<T: NeighborDirectory + ?Sized> NeighborDirectory for std::sync::Arc<T> {
    fn neighbors(&self) -> Vec<Neighbor> {
        (**self).neighbors()
    }
}

impl<T: DeliverySink + ?Sized> DeliverySink for std::sync::Arc<T> {
    fn message_received(&self, sender: NodeId, text: &str) {
        (**self).message_received(sender, text)
    }

    fn message_sent(&self, dest: NodeId, text: &str) {
        (**self).message_sent(dest, text)
    }
}
