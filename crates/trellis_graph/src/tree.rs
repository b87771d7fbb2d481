// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node tree data structure containing nodes and links.

use crate::link::{Link, LinkId};
use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named node tree (the host calls this a node group).
///
/// Nodes and links iterate in insertion order; removal uses
/// `shift_remove` so that order survives edits. Links live in a
/// central store, per-socket link lists are derived views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTree {
    /// Tree name
    pub name: String,
    /// Nodes in the tree
    nodes: IndexMap<NodeId, Node>,
    /// Links between sockets
    links: IndexMap<LinkId, Link>,
}

impl NodeTree {
    /// Create a new empty tree
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            links: IndexMap::new(),
        }
    }

    /// Add a node to the tree.
    ///
    /// The node's name is made unique within the tree using the host's
    /// suffix scheme: the first clash of "Math" becomes "Math.001".
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        node.name = self.unique_name(&node.name);
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and every link touching it
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.links.retain(|_, l| !l.involves_node(node_id));
        self.nodes.shift_remove(&node_id)
    }

    /// Duplicate a node.
    ///
    /// The copy gets a fresh ID, a uniquified name derived from the
    /// source's base name, no links, and sits offset by (+32, -32).
    pub fn duplicate_node(&mut self, node_id: NodeId) -> Option<NodeId> {
        let mut copy = self.nodes.get(&node_id)?.clone();
        copy.id = NodeId::new();
        copy.location[0] += 32.0;
        copy.location[1] -= 32.0;
        copy.name = self.unique_name(base_name(&copy.name));
        let id = copy.id;
        self.nodes.insert(id, copy);
        Some(id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get a node by name
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.values().find(|n| n.name == name)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a link between sockets.
    ///
    /// Links run output to input. When the target input is already
    /// linked and not multi-input, the existing link is replaced, the
    /// way the host editor rewires on drop. Linking an already linked
    /// pair is a no-op returning the existing ID.
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_socket: &str,
        to_node: NodeId,
        to_socket: &str,
    ) -> Result<LinkId, ConnectError> {
        let source_node = self.nodes.get(&from_node)
            .ok_or(ConnectError::NodeNotFound(from_node))?;
        let target_node = self.nodes.get(&to_node)
            .ok_or(ConnectError::NodeNotFound(to_node))?;

        if from_node == to_node {
            return Err(ConnectError::SelfLoop);
        }

        let source = source_node.output(from_socket)
            .ok_or_else(|| ConnectError::OutputNotFound(from_socket.to_string()))?;
        let target = target_node.input(to_socket)
            .ok_or_else(|| ConnectError::InputNotFound(to_socket.to_string()))?;

        if !source.socket_type.can_connect_to(&target.socket_type) {
            return Err(ConnectError::IncompatibleTypes);
        }

        if let Some(existing) = self.links.values().find(|l| {
            l.starts_at(from_node, from_socket) && l.ends_at(to_node, to_socket)
        }) {
            return Ok(existing.id);
        }

        if !target.multi_input {
            let occupied: Vec<LinkId> = self
                .links
                .values()
                .filter(|l| l.ends_at(to_node, to_socket))
                .map(|l| l.id)
                .collect();
            for id in occupied {
                self.links.shift_remove(&id);
            }
        }

        let link = Link::new(from_node, from_socket, to_node, to_socket);
        let id = link.id;
        self.links.insert(id, link);
        Ok(id)
    }

    /// Remove a link
    pub fn disconnect(&mut self, link_id: LinkId) -> Option<Link> {
        self.links.shift_remove(&link_id)
    }

    /// Get a link by ID
    pub fn link(&self, link_id: LinkId) -> Option<&Link> {
        self.links.get(&link_id)
    }

    /// Get all links
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Get links arriving at an input socket, in insertion order
    pub fn links_into<'a>(
        &'a self,
        node_id: NodeId,
        identifier: &'a str,
    ) -> impl Iterator<Item = &'a Link> {
        self.links.values().filter(move |l| l.ends_at(node_id, identifier))
    }

    /// Get links leaving an output socket, in insertion order
    pub fn links_out_of<'a>(
        &'a self,
        node_id: NodeId,
        identifier: &'a str,
    ) -> impl Iterator<Item = &'a Link> {
        self.links.values().filter(move |l| l.starts_at(node_id, identifier))
    }

    /// Get links involving a node
    pub fn links_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Link> {
        self.links.values().filter(move |l| l.involves_node(node_id))
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.nodes.values().any(|n| n.name == base) {
            return base.to_string();
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{base}.{n:03}");
            if !self.nodes.values().any(|node| node.name == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Strip a trailing numeric suffix ("Math.001" -> "Math")
fn base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, suffix))
            if !base.is_empty()
                && !suffix.is_empty()
                && suffix.chars().all(|c| c.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

/// Error when creating a link
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Output socket not found on the source node
    #[error("Output socket not found: {0:?}")]
    OutputNotFound(String),

    /// Input socket not found on the target node
    #[error("Input socket not found: {0:?}")]
    InputNotFound(String),

    /// Incompatible socket types
    #[error("Incompatible socket types")]
    IncompatibleTypes,

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{MathOperation, NodeCategory, NodeParams, NodeSpec};
    use crate::socket::{Socket, SocketType, SocketValue};

    fn value_node() -> Node {
        Node::new(&NodeSpec {
            type_tag: "VALUE".to_string(),
            label: "Value".to_string(),
            category: NodeCategory::Input,
            description: String::new(),
            inputs: vec![],
            outputs: vec![Socket::output("Value", "Value", SocketType::Value)],
            default_params: NodeParams::None,
            dimensions: [140.0, 80.0],
        })
    }

    fn math_node() -> Node {
        Node::new(&NodeSpec {
            type_tag: "MATH".to_string(),
            label: "Math".to_string(),
            category: NodeCategory::Math,
            description: String::new(),
            inputs: vec![
                Socket::input("Value", "Value", SocketType::Value).with_default(SocketValue::Float(0.5)),
                Socket::input("Value", "Value_001", SocketType::Value).with_default(SocketValue::Float(0.5)),
            ],
            outputs: vec![Socket::output("Value", "Value", SocketType::Value)],
            default_params: NodeParams::Math {
                operation: MathOperation::Add,
                use_clamp: false,
            },
            dimensions: [140.0, 120.0],
        })
    }

    fn join_node() -> Node {
        Node::new(&NodeSpec {
            type_tag: "JOIN_GEOMETRY".to_string(),
            label: "Join Geometry".to_string(),
            category: NodeCategory::Geometry,
            description: String::new(),
            inputs: vec![Socket::input("Geometry", "Geometry", SocketType::Geometry).multi()],
            outputs: vec![Socket::output("Geometry", "Geometry", SocketType::Geometry)],
            default_params: NodeParams::None,
            dimensions: [140.0, 80.0],
        })
    }

    fn cube_node() -> Node {
        Node::new(&NodeSpec {
            type_tag: "MESH_PRIMITIVE_CUBE".to_string(),
            label: "Cube".to_string(),
            category: NodeCategory::Mesh,
            description: String::new(),
            inputs: vec![],
            outputs: vec![Socket::output("Mesh", "Mesh", SocketType::Geometry)],
            default_params: NodeParams::None,
            dimensions: [140.0, 120.0],
        })
    }

    #[test]
    fn test_add_node_uniquifies_names() {
        let mut tree = NodeTree::new("Test");
        let a = tree.add_node(math_node());
        let b = tree.add_node(math_node());
        let c = tree.add_node(math_node());
        assert_eq!(tree.node(a).unwrap().name, "Math");
        assert_eq!(tree.node(b).unwrap().name, "Math.001");
        assert_eq!(tree.node(c).unwrap().name, "Math.002");
    }

    #[test]
    fn test_name_gap_is_reused() {
        let mut tree = NodeTree::new("Test");
        tree.add_node(math_node());
        let b = tree.add_node(math_node());
        tree.add_node(math_node());
        tree.remove_node(b);
        let d = tree.add_node(math_node());
        assert_eq!(tree.node(d).unwrap().name, "Math.001");
    }

    #[test]
    fn test_remove_node_drops_links() {
        let mut tree = NodeTree::new("Test");
        let value = tree.add_node(value_node());
        let math = tree.add_node(math_node());
        tree.connect(value, "Value", math, "Value").unwrap();
        assert_eq!(tree.link_count(), 1);

        tree.remove_node(value);
        assert_eq!(tree.link_count(), 0);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_iteration_order_survives_removal() {
        let mut tree = NodeTree::new("Test");
        tree.add_node(value_node());
        let b = tree.add_node(math_node());
        tree.add_node(cube_node());
        tree.add_node(join_node());
        tree.remove_node(b);

        let names: Vec<&str> = tree.nodes().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Value", "Cube", "Join Geometry"]);
    }

    #[test]
    fn test_duplicate_node() {
        let mut tree = NodeTree::new("Test");
        let value = tree.add_node(value_node());
        let math = tree.add_node(math_node());
        tree.connect(value, "Value", math, "Value").unwrap();

        let copy = tree.duplicate_node(math).unwrap();
        let copied = tree.node(copy).unwrap();
        assert_eq!(copied.name, "Math.001");
        assert_eq!(copied.location, [32.0, -32.0]);
        assert_eq!(tree.links_for_node(copy).count(), 0);

        // Duplicating the copy strips its suffix before uniquifying
        let second = tree.duplicate_node(copy).unwrap();
        assert_eq!(tree.node(second).unwrap().name, "Math.002");
    }

    #[test]
    fn test_connect_validation() {
        let mut tree = NodeTree::new("Test");
        let value = tree.add_node(value_node());
        let math = tree.add_node(math_node());
        let cube = tree.add_node(cube_node());

        assert!(matches!(
            tree.connect(NodeId::new(), "Value", math, "Value"),
            Err(ConnectError::NodeNotFound(_))
        ));
        assert!(matches!(
            tree.connect(value, "Result", math, "Value"),
            Err(ConnectError::OutputNotFound(_))
        ));
        assert!(matches!(
            tree.connect(value, "Value", math, "Value_002"),
            Err(ConnectError::InputNotFound(_))
        ));
        assert!(matches!(
            tree.connect(cube, "Mesh", math, "Value"),
            Err(ConnectError::IncompatibleTypes)
        ));
        assert!(matches!(
            tree.connect(math, "Value", math, "Value"),
            Err(ConnectError::SelfLoop)
        ));
        assert_eq!(tree.link_count(), 0);
    }

    #[test]
    fn test_connect_replaces_single_input() {
        let mut tree = NodeTree::new("Test");
        let a = tree.add_node(value_node());
        let b = tree.add_node(value_node());
        let math = tree.add_node(math_node());

        tree.connect(a, "Value", math, "Value").unwrap();
        tree.connect(b, "Value", math, "Value").unwrap();

        let incoming: Vec<&Link> = tree.links_into(math, "Value").collect();
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].from_node, b);
        assert_eq!(tree.link_count(), 1);
    }

    #[test]
    fn test_connect_appends_multi_input() {
        let mut tree = NodeTree::new("Test");
        let cube = tree.add_node(cube_node());
        let cube2 = tree.add_node(cube_node());
        let join = tree.add_node(join_node());

        tree.connect(cube, "Mesh", join, "Geometry").unwrap();
        tree.connect(cube2, "Mesh", join, "Geometry").unwrap();

        let incoming: Vec<&Link> = tree.links_into(join, "Geometry").collect();
        assert_eq!(incoming.len(), 2);
        assert_eq!(incoming[0].from_node, cube);
        assert_eq!(incoming[1].from_node, cube2);
    }

    #[test]
    fn test_connect_identical_is_noop() {
        let mut tree = NodeTree::new("Test");
        let value = tree.add_node(value_node());
        let math = tree.add_node(math_node());

        let first = tree.connect(value, "Value", math, "Value").unwrap();
        let second = tree.connect(value, "Value", math, "Value").unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.link_count(), 1);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("Math"), "Math");
        assert_eq!(base_name("Math.001"), "Math");
        assert_eq!(base_name("Map.Range"), "Map.Range");
        assert_eq!(base_name(".001"), ".001");
    }
}
