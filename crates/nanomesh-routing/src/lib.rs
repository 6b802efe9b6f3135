//! Reactive multi-hop routing for the nanomesh stack.
//!
//! This crate implements the on-demand (AODV-style) distance-vector
//! core: duplicate suppression for flooded control traffic, the
//! per-destination next-hop table, the pending-message buffer, and the
//! [`engine::RoutingEngine`] that dispatches inbound packets and
//! originates outbound ones.
//!
//! The engine performs no I/O. Every operation returns a list of
//! [`engine::EngineAction`]s for the caller to execute, so every
//! routing path can be tested with fast, deterministic unit tests.

pub mod dedup;
pub mod engine;
pub mod pending;
pub mod route_table;

pub use dedup::SeenFilter;
pub use engine::{EngineAction, RoutingEngine};
pub use pending::PendingStore;
pub use route_table::{RouteEntry, RouteTable};
