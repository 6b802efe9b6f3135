//! TOML-based configuration for nanomesh nodes.

use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use nanomesh_core::NodeId;

use crate::error::NodeError;

/// Top-level node configuration loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub node: NodeSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub runtime: RuntimeSection,
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, NodeError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NodeError::Config(format!("failed to read config file: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(format!("failed to parse config: {e}")))
    }

    /// The configured node id, or a freshly generated one.
    ///
    /// Ids are four-digit by convention, matching how installs without
    /// a persisted id pick theirs. The caller is responsible for
    /// persisting a generated id; routing only needs it stable for the
    /// process lifetime.
    pub fn resolve_node_id(&self) -> NodeId {
        match self.node.id {
            Some(id) => NodeId(id),
            None => NodeId(rand::thread_rng().gen_range(1000..9999)),
        }
    }
}

/// The `[node]` section.
#[derive(Debug, Deserialize)]
pub struct NodeSection {
    /// Routing identifier. Generated when absent.
    pub id: Option<i32>,
    /// Human-readable name advertised to peers. Display only; never
    /// used for routing.
    pub display_name: Option<String>,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            id: None,
            display_name: None,
        }
    }
}

/// The `[logging]` section.
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// The `[runtime]` section.
#[derive(Debug, Deserialize)]
pub struct RuntimeSection {
    /// Capacity of the node's inbound event queue.
    #[serde(default = "default_event_queue_capacity")]
    pub event_queue_capacity: usize,
}

fn default_event_queue_capacity() -> usize {
    1024
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            event_queue_capacity: default_event_queue_capacity(),
        }
    }
}
