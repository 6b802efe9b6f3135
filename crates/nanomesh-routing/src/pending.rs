//! Buffer for outgoing payloads awaiting route discovery.
//!
//! Messages sent toward a destination with no known route are queued
//! here, FIFO per destination, and drained in bulk and in order when a
//! route reply arrives. There is no timeout: a queue for which no
//! route ever appears is abandoned silently.

use std::collections::{HashMap, VecDeque};

use nanomesh_core::NodeId;

/// Per-destination FIFO queues of undelivered message texts.
#[must_use]
pub struct PendingStore {
    queues: HashMap<NodeId, VecDeque<String>>,
}

impl PendingStore {
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Append a message to the queue for a destination.
    pub fn push(&mut self, dest: NodeId, text: String) {
        self.queues.entry(dest).or_default().push_back(text);
    }

    /// Drain and return the whole queue for a destination, in send
    /// order (consumed on use).
    #[must_use]
    pub fn take(&mut self, dest: &NodeId) -> Vec<String> {
        self.queues
            .remove(dest)
            .map(|queue| queue.into_iter().collect())
            .unwrap_or_default()
    }

    /// Whether any messages are queued for a destination.
    #[must_use]
    pub fn contains(&self, dest: &NodeId) -> bool {
        self.queues.contains_key(dest)
    }

    /// Number of messages queued for a destination.
    #[must_use]
    pub fn queued_for(&self, dest: &NodeId) -> usize {
        self.queues.get(dest).map_or(0, VecDeque::len)
    }

    /// Total number of queued messages across all destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Whether no messages are queued at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}

impl Default for PendingStore {
    fn default() -> Self {
        Self::new()
    }
}
