//! The forwarding engine: packet classification, route discovery, and
//! relay/delivery dispatch.

mod actions;
mod dispatch;

pub use actions::EngineAction;
pub use dispatch::RoutingEngine;
