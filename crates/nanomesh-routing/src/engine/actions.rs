//! I/O actions produced by the routing engine.

use nanomesh_core::{ChannelHandle, NodeId, PeerHandle};

/// An action to execute after an engine operation.
///
/// The engine never touches the transport or the UI itself; it returns
/// these for the caller (normally the node event loop) to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAction {
    /// Send raw bytes to one specific neighbor over one channel.
    Transmit {
        peer: PeerHandle,
        channel: ChannelHandle,
        raw: Vec<u8>,
    },
    /// Send raw bytes to every current neighbor except the excluded
    /// one. Each per-neighbor send is independent best-effort: one
    /// failure must not abort the others.
    Broadcast {
        exclude: Option<PeerHandle>,
        raw: Vec<u8>,
    },
    /// Hand an inbound application payload to the delivery sink.
    Deliver { sender: NodeId, text: String },
    /// Surface a locally composed message that was just transmitted.
    /// Emitted alongside the DATA transmit and never rolled back on
    /// transport failure.
    Echo { dest: NodeId, text: String },
}
