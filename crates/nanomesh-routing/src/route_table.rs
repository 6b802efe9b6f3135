//! Per-destination next-hop routing table.
//!
//! Updated by every component that observes traffic: reverse-route
//! learning inserts an entry for a packet's originator, and neighbor
//! attachment inserts a one-hop entry. The newest observation always
//! wins — there is no hop-distance comparison and no expiry. A later,
//! longer path silently displaces a shorter known one; that is the
//! documented contract, not an oversight.

use std::collections::HashMap;

use nanomesh_core::{ChannelHandle, NodeId, PeerHandle};

/// Best known way to reach one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RouteEntry {
    /// Immediate neighbor through which the destination is reachable.
    pub next_hop_peer: PeerHandle,
    /// Channel the neighbor is reachable through.
    pub next_hop_channel: ChannelHandle,
    /// Hops from self to the destination.
    pub hop_distance: u8,
    /// When this entry was last written.
    pub last_updated: u64,
}

/// Routing table mapping destination node ids to next-hop entries.
#[must_use]
pub struct RouteTable {
    entries: HashMap<NodeId, RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or unconditionally overwrite the entry for a destination.
    pub fn upsert(
        &mut self,
        dest: NodeId,
        next_hop_peer: PeerHandle,
        next_hop_channel: ChannelHandle,
        hop_distance: u8,
        now: u64,
    ) {
        self.entries.insert(
            dest,
            RouteEntry {
                next_hop_peer,
                next_hop_channel,
                hop_distance,
                last_updated: now,
            },
        );
    }

    /// Get the route entry for a destination.
    #[must_use]
    pub fn lookup(&self, dest: &NodeId) -> Option<&RouteEntry> {
        self.entries.get(dest)
    }

    /// Hop distance to a destination, if known.
    #[must_use]
    pub fn hops_to(&self, dest: &NodeId) -> Option<u8> {
        self.entries.get(dest).map(|e| e.hop_distance)
    }

    /// Check whether a route to the destination is known.
    #[must_use]
    pub fn contains(&self, dest: &NodeId) -> bool {
        self.entries.contains_key(dest)
    }

    /// Remove the entry for a destination.
    pub fn remove(&mut self, dest: &NodeId) -> Option<RouteEntry> {
        self.entries.remove(dest)
    }

    /// Number of known destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &RouteEntry)> {
        self.entries.iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
