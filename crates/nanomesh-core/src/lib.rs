//! Core types, constants, and the wire format for the nanomesh routing stack.
//!
//! This crate defines the protocol identifiers, the packet kind
//! enumeration, and the bit-exact codec for the 14-byte packet header
//! used by every other crate in the workspace.

pub mod constants;
pub mod error;
pub mod packet;
pub mod types;

pub use constants::{PacketKind, HEADER_SIZE};
pub use error::PacketError;
pub use packet::WirePacket;
pub use types::{ChannelHandle, NodeId, PacketId, PacketKey, PeerHandle};
