//! Delivery sinks for use in tests.

use std::sync::Mutex;

use tokio::sync::mpsc;

use nanomesh_core::NodeId;

use crate::traits::DeliverySink;

/// One observable delivery-side event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryEvent {
    /// A message addressed to this node arrived.
    Received { sender: NodeId, text: String },
    /// A locally composed message was transmitted.
    Sent { dest: NodeId, text: String },
}

/// Sink that records every event for later assertion.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DeliveryEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeliveryEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }

    pub fn received(&self) -> Vec<DeliveryEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, DeliveryEvent::Received { .. }))
            .collect()
    }
}

impl DeliverySink for RecordingSink {
    fn message_received(&self, sender: NodeId, text: &str) {
        self.events
            .lock()
            .expect("sink lock poisoned")
            .push(DeliveryEvent::Received {
                sender,
                text: text.to_owned(),
            });
    }

    fn message_sent(&self, dest: NodeId, text: &str) {
        self.events
            .lock()
            .expect("sink lock poisoned")
            .push(DeliveryEvent::Sent {
                dest,
                text: text.to_owned(),
            });
    }
}

/// Sink that forwards events over an unbounded channel, so tests can
/// await a delivery instead of polling a recording.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<DeliveryEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DeliveryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl DeliverySink for ChannelSink {
    fn message_received(&self, sender: NodeId, text: &str) {
        let _ = self.tx.send(DeliveryEvent::Received {
            sender,
            text: text.to_owned(),
        });
    }

    fn message_sent(&self, dest: NodeId, text: &str) {
        let _ = self.tx.send(DeliveryEvent::Sent {
            dest,
            text: text.to_owned(),
        });
    }
}
