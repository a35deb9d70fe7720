//! Node configuration for **replichain** core.
//!
//! [`NodeConfig`] centralises the parameters every node needs before it can
//! drive an [`crate::engine::Engine`]: its own identifier (listening port),
//! the full membership list, and the mining interval. It is constructed via
//! [`NodeConfigBuilder`] using the fluent builder pattern, enabling callers
//! to customise only the fields they care about while keeping sensible
//! defaults.
//!
//! ```
//! use replichain_core::config::NodeConfig;
//!
//! let cfg = NodeConfig::builder()
//!     .node_id(5001)
//!     .nodes(vec![5001, 5002, 5003])
//!     .block_mine_time(5)
//!     .finish();
//! assert_eq!(cfg.node_id, 5001);
//! ```

use serde::{Deserialize, Serialize};

/// Runtime configuration shared across the crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeConfig {
    /// This node's identifier (its listening port).
    pub node_id: u64,

    /// The full, identically-ordered membership list, including `node_id`.
    pub nodes: Vec<u64>,

    /// Seconds to wait after a trigger before constructing a block.
    pub block_mine_time: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_id: 0,
            nodes: Vec::new(),
            block_mine_time: 5,
        }
    }
}

impl NodeConfig {
    /// Starts a new [`NodeConfigBuilder`] pre-populated with defaults.
    pub fn builder() -> NodeConfigBuilder {
        NodeConfigBuilder::new()
    }

    /// Whether this node is the designated genesis bootstrapper, i.e. the
    /// node with the minimum identifier among `nodes`.
    pub fn is_bootstrap_node(&self) -> bool {
        self.nodes.iter().min().is_some_and(|min| *min == self.node_id)
    }
}

/// Fluent builder for [`NodeConfig`].
pub struct NodeConfigBuilder {
    inner: NodeConfig,
}

impl NodeConfigBuilder {
    /// Starts a new builder pre-populated with [`NodeConfig::default`].
    pub fn new() -> Self {
        Self { inner: NodeConfig::default() }
    }

    pub fn node_id(mut self, id: u64) -> Self {
        self.inner.node_id = id;
        self
    }

    pub fn nodes(mut self, nodes: Vec<u64>) -> Self {
        self.inner.nodes = nodes;
        self
    }

    pub fn block_mine_time(mut self, secs: u64) -> Self {
        self.inner.block_mine_time = secs;
        self
    }

    /// Consumes the builder returning an immutable configuration value.
    pub fn finish(self) -> NodeConfig {
        self.inner
    }
}

impl Default for NodeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_fields() {
        let cfg = NodeConfig::builder()
            .node_id(5002)
            .nodes(vec![5001, 5002, 5003])
            .block_mine_time(2)
            .finish();
        assert_eq!(cfg.node_id, 5002);
        assert_eq!(cfg.nodes, vec![5001, 5002, 5003]);
        assert_eq!(cfg.block_mine_time, 2);
    }

    #[test]
    fn bootstrap_node_is_minimum_identifier() {
        let cfg = NodeConfig::builder()
            .node_id(5002)
            .nodes(vec![5003, 5001, 5002])
            .finish();
        assert!(!cfg.is_bootstrap_node());

        let cfg = NodeConfig::builder()
            .node_id(5001)
            .nodes(vec![5003, 5001, 5002])
            .finish();
        assert!(cfg.is_bootstrap_node());
    }
}
