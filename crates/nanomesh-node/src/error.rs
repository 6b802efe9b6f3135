//! Node and transport error types.

/// Failure reported by a transport send attempt.
///
/// Always local to one attempt: a failed send toward one neighbor
/// never aborts sends to the others, and never propagates past the
/// event loop.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("peer is not reachable")]
    PeerUnreachable,

    #[error("channel closed")]
    ChannelClosed,

    #[error("receiver queue full")]
    QueueFull,

    #[error("send failed: {0}")]
    SendFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("node event queue closed")]
    EventQueueClosed,
}
