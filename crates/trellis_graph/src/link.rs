// SPDX-License-Identifier: MIT OR Apache-2.0
//! Link (edge) definitions for the graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub Uuid);

impl LinkId {
    /// Create a new random link ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

/// A link from an output socket to an input socket.
///
/// Sockets are addressed by identifier, which is unique within a node's
/// direction list, so a (node, identifier) pair pins down one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Unique link ID
    pub id: LinkId,
    /// Source node ID
    pub from_node: NodeId,
    /// Source output identifier
    pub from_socket: String,
    /// Target node ID
    pub to_node: NodeId,
    /// Target input identifier
    pub to_socket: String,
}

impl Link {
    /// Create a new link
    pub fn new(
        from_node: NodeId,
        from_socket: impl Into<String>,
        to_node: NodeId,
        to_socket: impl Into<String>,
    ) -> Self {
        Self {
            id: LinkId::new(),
            from_node,
            from_socket: from_socket.into(),
            to_node,
            to_socket: to_socket.into(),
        }
    }

    /// Check if this link involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }

    /// Check if this link starts at the given output socket
    pub fn starts_at(&self, node_id: NodeId, identifier: &str) -> bool {
        self.from_node == node_id && self.from_socket == identifier
    }

    /// Check if this link ends at the given input socket
    pub fn ends_at(&self, node_id: NodeId, identifier: &str) -> bool {
        self.to_node == node_id && self.to_socket == identifier
    }
}
