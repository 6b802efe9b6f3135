//! Packet duplicate suppression using two-set rotation.
//!
//! Maintains a current and previous key set. When the current set
//! exceeds the rotation threshold, it becomes the previous set and a
//! new empty set is created. Both sets are checked for duplicates, so
//! the at-most-once contract holds for every key within the retention
//! window while memory stays bounded.

use std::collections::HashSet;

use nanomesh_core::PacketKey;

/// Maximum combined key-set size before rotation.
pub const SEEN_MAX_SIZE: usize = 100_000;

/// Rotation threshold: when the current set exceeds this, rotate.
pub const SEEN_ROTATION_THRESHOLD: usize = SEEN_MAX_SIZE / 2;

/// Two-set duplicate suppressor keyed by `(sourceId, packetId)`.
pub struct SeenFilter {
    current: HashSet<PacketKey>,
    prev: HashSet<PacketKey>,
}

impl SeenFilter {
    pub fn new() -> Self {
        Self {
            current: HashSet::new(),
            prev: HashSet::new(),
        }
    }

    /// Check if a packet key has been seen before.
    #[must_use]
    pub fn contains(&self, key: &PacketKey) -> bool {
        self.current.contains(key) || self.prev.contains(key)
    }

    /// Record a packet key, returning `true` if it was new.
    ///
    /// This is the `shouldProcess` operation: the first call for a
    /// given key returns `true` and records it; every later call with
    /// the same key returns `false`.
    pub fn insert(&mut self, key: PacketKey) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.current.insert(key);
        self.maybe_rotate();
        true
    }

    /// Rotate sets if the current set exceeds the threshold.
    fn maybe_rotate(&mut self) {
        if self.current.len() > SEEN_ROTATION_THRESHOLD {
            self.prev = std::mem::take(&mut self.current);
        }
    }

    /// Total number of tracked keys across both sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len() + self.prev.len()
    }

    /// Returns true if both sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.prev.is_empty()
    }
}

impl Default for SeenFilter {
    fn default() -> Self {
        Self::new()
    }
}
