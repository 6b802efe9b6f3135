//! In-memory mesh fabric for tests and local experiments.
//!
//! `MemoryMesh` stands in for a real proximity radio: each registered
//! node is addressable by the [`PeerHandle`] its neighbors know it by,
//! and a frame "transmitted" to that handle lands directly on the
//! target node's event queue. Delivery is immediate and lossless,
//! which keeps multi-node routing tests deterministic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nanomesh_core::{ChannelHandle, PeerHandle};

use crate::error::TransportError;
use crate::node::NodeHandle;
use crate::traits::{Neighbor, NeighborDirectory, Transport};

#[derive(Default)]
struct MeshInner {
    nodes: Mutex<HashMap<PeerHandle, NodeHandle>>,
}

/// Registry connecting in-memory nodes to each other.
#[derive(Clone, Default)]
pub struct MemoryMesh {
    inner: Arc<MeshInner>,
}

impl MemoryMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under the peer handle its neighbors address it
    /// by. Replaces any previous registration for that handle.
    pub fn register(&self, peer: PeerHandle, handle: NodeHandle) {
        self.inner
            .nodes
            .lock()
            .expect("mesh registry lock poisoned")
            .insert(peer, handle);
    }

    /// Remove a node from the fabric. Frames sent to it afterwards
    /// fail with `PeerUnreachable`, like a device leaving radio range.
    pub fn unregister(&self, peer: PeerHandle) {
        self.inner
            .nodes
            .lock()
            .expect("mesh registry lock poisoned")
            .remove(&peer);
    }

    /// Build the transport a node registered as `local` sends through.
    pub fn transport(&self, local: PeerHandle) -> MemoryTransport {
        MemoryTransport {
            local,
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Transport end for one node on a [`MemoryMesh`].
pub struct MemoryTransport {
    local: PeerHandle,
    inner: Arc<MeshInner>,
}

impl Transport for MemoryTransport {
    fn send(
        &self,
        peer: PeerHandle,
        channel: ChannelHandle,
        data: &[u8],
    ) -> Result<(), TransportError> {
        let handle = {
            let nodes = self
                .inner
                .nodes
                .lock()
                .expect("mesh registry lock poisoned");
            nodes.get(&peer).cloned()
        };

        let handle = handle.ok_or(TransportError::PeerUnreachable)?;

        // The receiver learns the frame came from us, not who we sent
        // it to. That mirrors a radio: arrival identifies the sender.
        handle
            .try_packet_received(self.local, channel, data.to_vec())
            .map_err(|e| TransportError::SendFailed(e.to_string()))
    }
}

/// Neighbor directory backed by an explicit, mutable list.
#[derive(Default)]
pub struct StaticNeighbors {
    neighbors: Mutex<Vec<Neighbor>>,
}

impl StaticNeighbors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, peer: PeerHandle, channel: ChannelHandle) {
        self.neighbors
            .lock()
            .expect("neighbor list lock poisoned")
            .push(Neighbor { peer, channel });
    }

    pub fn remove(&self, peer: PeerHandle) {
        self.neighbors
            .lock()
            .expect("neighbor list lock poisoned")
            .retain(|n| n.peer != peer);
    }
}

impl NeighborDirectory for StaticNeighbors {
    fn neighbors(&self) -> Vec<Neighbor> {
        self.neighbors
            .lock()
            .expect("neighbor list lock poisoned")
            .clone()
    }
}
