//! Shared cancellation token for stopping the node event loop.

use tokio::sync::watch;

/// A cancellation token that signals the event loop to stop.
///
/// Cloneable and cheap; any holder may call
/// [`signal_stop()`](Self::signal_stop), and the loop observes it via
/// a subscribed `watch::Receiver` in its `select!`.
#[derive(Clone)]
pub struct ShutdownToken {
    stop_tx: watch::Sender<bool>,
    stop_rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        Self { stop_tx, stop_rx }
    }

    /// Get a new subscription to the stop signal.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.stop_rx.clone()
    }

    /// Check whether the stop signal has been sent.
    pub fn is_stopped(&self) -> bool {
        *self.stop_rx.borrow()
    }

    /// Send the stop signal to all subscribers. Idempotent.
    pub fn signal_stop(&self) {
        let _ = self.stop_tx.send(true);
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}
