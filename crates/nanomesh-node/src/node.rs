//! Core MeshNode struct and async event loop.
//!
//! The node owns the routing engine outright. Every input, whether an
//! inbound frame from the transport, a locally composed message, or a
//! neighbor attachment, arrives as a [`NodeEvent`] on one queue and is
//! processed to completion before the next, so routing state never
//! needs a lock and packet interleaving cannot corrupt the tables.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;

use nanomesh_core::{ChannelHandle, NodeId, PeerHandle};
use nanomesh_routing::{EngineAction, RoutingEngine};

use crate::error::NodeError;
use crate::shutdown::ShutdownToken;
use crate::traits::{DeliverySink, NeighborDirectory, Transport};

/// Events delivered to the central event loop.
#[derive(Debug)]
pub enum NodeEvent {
    /// A raw frame arrived from a directly attached peer.
    Inbound {
        peer: PeerHandle,
        channel: ChannelHandle,
        raw: Vec<u8>,
    },
    /// The local user composed a message for a destination node.
    SendMessage { dest: NodeId, text: String },
    /// A peer completed attachment and is now a direct neighbor.
    NeighborAttached {
        id: NodeId,
        peer: PeerHandle,
        channel: ChannelHandle,
    },
}

/// Cloneable handle for feeding events into a running node.
///
/// Transport receive bridges hold one of these and push frames in as
/// they arrive; UI code holds another and pushes outbound messages.
#[derive(Clone)]
pub struct NodeHandle {
    event_tx: mpsc::Sender<NodeEvent>,
    shutdown: ShutdownToken,
}

impl NodeHandle {
    /// Queue a locally composed message for routing.
    pub async fn send_message(&self, dest: NodeId, text: String) -> Result<(), NodeError> {
        self.event_tx
            .send(NodeEvent::SendMessage { dest, text })
            .await
            .map_err(|_| NodeError::EventQueueClosed)
    }

    /// Queue an inbound frame received from a peer.
    pub async fn packet_received(
        &self,
        peer: PeerHandle,
        channel: ChannelHandle,
        raw: Vec<u8>,
    ) -> Result<(), NodeError> {
        self.event_tx
            .send(NodeEvent::Inbound { peer, channel, raw })
            .await
            .map_err(|_| NodeError::EventQueueClosed)
    }

    /// Non-async variant of [`packet_received`](Self::packet_received)
    /// for transport callbacks that cannot await. Fails when the queue
    /// is full rather than blocking.
    pub fn try_packet_received(
        &self,
        peer: PeerHandle,
        channel: ChannelHandle,
        raw: Vec<u8>,
    ) -> Result<(), NodeError> {
        self.event_tx
            .try_send(NodeEvent::Inbound { peer, channel, raw })
            .map_err(|_| NodeError::EventQueueClosed)
    }

    /// Record a newly attached direct neighbor.
    pub async fn neighbor_attached(
        &self,
        id: NodeId,
        peer: PeerHandle,
        channel: ChannelHandle,
    ) -> Result<(), NodeError> {
        self.event_tx
            .send(NodeEvent::NeighborAttached { id, peer, channel })
            .await
            .map_err(|_| NodeError::EventQueueClosed)
    }

    /// Signal the node's event loop to stop.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal_stop();
    }
}

/// A mesh node that owns the routing engine and drives it from a
/// single event queue.
pub struct MeshNode<T, N, D> {
    engine: RoutingEngine,
    transport: T,
    neighbors: N,
    sink: D,
    event_tx: mpsc::Sender<NodeEvent>,
    event_rx: mpsc::Receiver<NodeEvent>,
    shutdown: ShutdownToken,
}

impl<T, N, D> MeshNode<T, N, D>
where
    T: Transport,
    N: NeighborDirectory,
    D: DeliverySink,
{
    /// Create a new node for the given local routing id.
    pub fn new(
        local_id: NodeId,
        event_queue_capacity: usize,
        transport: T,
        neighbors: N,
        sink: D,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel(event_queue_capacity);

        Self {
            engine: RoutingEngine::new(local_id),
            transport,
            neighbors,
            sink,
            event_tx,
            event_rx,
            shutdown: ShutdownToken::new(),
        }
    }

    /// The local routing id this node answers to.
    pub fn local_id(&self) -> NodeId {
        self.engine.local_id()
    }

    /// Get a cloneable handle for feeding events into the loop.
    pub fn handle(&self) -> NodeHandle {
        NodeHandle {
            event_tx: self.event_tx.clone(),
            shutdown: self.shutdown.clone(),
        }
    }

    /// Direct access to the engine, for inspection in tests and tools.
    pub fn engine(&self) -> &RoutingEngine {
        &self.engine
    }

    /// Run the event loop. Returns when shutdown is signalled or every
    /// handle has been dropped.
    pub async fn run(&mut self) {
        let mut shutdown_rx = self.shutdown.subscribe();

        tracing::info!(local = %self.engine.local_id(), "entering event loop");

        loop {
            tokio::select! {
                biased;

                _ = shutdown_rx.changed() => {
                    tracing::info!("shutdown signal received");
                    break;
                }

                event = self.event_rx.recv() => {
                    match event {
                        Some(event) => self.handle_event(event),
                        None => {
                            tracing::info!("event channel closed, exiting");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Process one event to completion, applying every action the
    /// engine emits before returning.
    fn handle_event(&mut self, event: NodeEvent) {
        let now = unix_now();
        let actions = match event {
            NodeEvent::Inbound { peer, channel, raw } => {
                self.engine.handle_inbound(peer, channel, &raw, now)
            }
            NodeEvent::SendMessage { dest, text } => self.engine.send_message(dest, &text),
            NodeEvent::NeighborAttached { id, peer, channel } => {
                tracing::info!(%id, ?peer, "neighbor attached");
                self.engine.neighbor_attached(id, peer, channel, now);
                Vec::new()
            }
        };

        self.apply_actions(actions);
    }

    fn apply_actions(&mut self, actions: Vec<EngineAction>) {
        for action in actions {
            match action {
                EngineAction::Transmit { peer, channel, raw } => {
                    if let Err(e) = self.transport.send(peer, channel, &raw) {
                        tracing::debug!(?peer, "transmit failed: {e}");
                    }
                }
                EngineAction::Broadcast { exclude, raw } => {
                    for neighbor in self.neighbors.neighbors() {
                        if Some(neighbor.peer) == exclude {
                            continue;
                        }
                        // Best effort per neighbor; one failure never
                        // stops the rest of the flood.
                        if let Err(e) = self.transport.send(neighbor.peer, neighbor.channel, &raw) {
                            tracing::debug!(peer = ?neighbor.peer, "broadcast leg failed: {e}");
                        }
                    }
                }
                EngineAction::Deliver { sender, text } => {
                    self.sink.message_received(sender, &text);
                }
                EngineAction::Echo { dest, text } => {
                    self.sink.message_sent(dest, &text);
                }
            }
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
