//! Node orchestration for the nanomesh routing stack.
//!
//! This crate wires the pure routing engine to its collaborators: a
//! transport that moves frames between devices in radio range, a
//! directory of currently attached neighbors, and a delivery sink for
//! messages addressed to the local node. All engine state is owned by
//! a single tokio event loop fed through an explicit event queue, so
//! no locking is needed around the routing tables.

pub mod config;
pub mod error;
pub mod logging;
pub mod memory;
pub mod node;
pub mod shutdown;
pub mod testing;
pub mod traits;

pub use config::NodeConfig;
pub use error::{NodeError, TransportError};
pub use memory::{MemoryMesh, MemoryTransport, StaticNeighbors};
pub use node::{MeshNode, NodeEvent, NodeHandle};
pub use shutdown::ShutdownToken;
pub use testing::{ChannelSink, DeliveryEvent, RecordingSink};
pub use traits::{DeliverySink, Neighbor, NeighborDirectory, Transport};
