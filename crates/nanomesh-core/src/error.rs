//! Error types for the nanomesh-core crate.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketError {
    /// Input shorter than the fixed header. The only decode failure.
    TooShort { min: usize, actual: usize },
    /// Kind byte outside the known set; surfaced by the dispatcher,
    /// never by the codec.
    UnknownKind(u8),
}

impl fmt::Display for PacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketError::TooShort { min, actual } => {
                write!(
                    f,
                    "packet too short: need at least {min} bytes, got {actual}"
                )
            }
            PacketError::UnknownKind(v) => write!(f, "unknown packet kind: {v}"),
        }
    }
}

impl std::error::Error for PacketError {}
