// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot export: walk a node tree and produce the flat JSON document.
//!
//! The walk is pure. Every node in the tree yields exactly one record,
//! in tree insertion order; link lists follow link insertion order. The
//! file writers serialize the whole document in one shot.

use std::fs;
use std::path::Path;

use thiserror::Error;
use trellis_graph::{ConnectError, Node, NodeParams, NodeTree, Socket, SocketType, SocketValue};

use crate::record::{LinkRecord, NodeRecord, SocketRecord, ValueRecord};

/// Errors from exporting or importing snapshot documents.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// I/O failure reading or writing a snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON document
    #[error("Invalid snapshot data: {0}")]
    Json(#[from] serde_json::Error),
    /// Two records share a node name
    #[error("Duplicate node name {0:?} in snapshot")]
    DuplicateName(String),
    /// A link references a node name that is not in the document
    #[error("Link references unknown node {node:?} (socket {socket:?})")]
    DanglingLink {
        /// Referenced node name
        node: String,
        /// Referenced socket identifier
        socket: String,
    },
    /// Unknown operation code on a math or vector-math record
    #[error("Unknown operation code {0:?}")]
    UnknownOperation(String),
    /// Unknown mode code on a fillet-curve record
    #[error("Unknown mode code {0:?}")]
    UnknownMode(String),
    /// A resolved link was rejected by the graph
    #[error("Invalid link: {0}")]
    Connect(#[from] ConnectError),
}

/// Produces one record per node, in tree insertion order.
pub fn snapshot_tree(tree: &NodeTree) -> Vec<NodeRecord> {
    tree.nodes().map(|node| node_record(tree, node)).collect()
}

/// Writes the snapshot of `tree` to `path` as compact JSON.
pub fn write_snapshot(tree: &NodeTree, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string(&snapshot_tree(tree))?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes the snapshot of `tree` to `path` as indented JSON.
pub fn write_snapshot_pretty(tree: &NodeTree, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(&snapshot_tree(tree))?;
    fs::write(path, json)?;
    Ok(())
}

fn node_record(tree: &NodeTree, node: &Node) -> NodeRecord {
    let inputs = node
        .inputs
        .iter()
        .map(|socket| input_record(tree, node, socket))
        .collect();
    let outputs = node
        .outputs
        .iter()
        .map(|socket| output_record(tree, node, socket))
        .collect();
    let (operation, use_clamp, mode) = node_extras(node);

    NodeRecord {
        name: node.name.clone(),
        label: node.label.clone(),
        default_label: node.default_label.clone(),
        node_type: node.type_tag.clone(),
        inputs,
        outputs,
        color: node.color,
        location: node.location,
        dimensions: node.dimensions,
        operation,
        use_clamp,
        mode,
    }
}

fn input_record(tree: &NodeTree, node: &Node, socket: &Socket) -> SocketRecord {
    let links = tree
        .links_into(node.id, &socket.identifier)
        .filter_map(|link| {
            tree.node(link.from_node).map(|other| LinkRecord {
                node: other.name.clone(),
                socket: link.from_socket.clone(),
            })
        })
        .collect();

    SocketRecord {
        name: socket.name.clone(),
        identifier: socket.identifier.clone(),
        socket_type: socket.socket_type.tag().to_string(),
        links,
        display_shape: socket.display_shape.tag().to_string(),
        is_multi_input: Some(socket.multi_input),
        value: value_record(socket),
    }
}

fn output_record(tree: &NodeTree, node: &Node, socket: &Socket) -> SocketRecord {
    let links = tree
        .links_out_of(node.id, &socket.identifier)
        .filter_map(|link| {
            tree.node(link.to_node).map(|other| LinkRecord {
                node: other.name.clone(),
                socket: link.to_socket.clone(),
            })
        })
        .collect();

    SocketRecord {
        name: socket.name.clone(),
        identifier: socket.identifier.clone(),
        socket_type: socket.socket_type.tag().to_string(),
        links,
        display_shape: socket.display_shape.tag().to_string(),
        is_multi_input: None,
        value: value_record(socket),
    }
}

/// Scalar socket types carry scalar defaults, vector sockets carry
/// vector defaults. Anything else has no value field.
fn value_record(socket: &Socket) -> Option<ValueRecord> {
    let default = socket.default_value.as_ref()?;
    match &socket.socket_type {
        SocketType::Value | SocketType::Int | SocketType::Boolean => match default {
            SocketValue::Vector(_) => None,
            scalar => Some(ValueRecord::from(scalar)),
        },
        SocketType::Vector => match default {
            SocketValue::Vector(_) => Some(ValueRecord::from(default)),
            _ => None,
        },
        _ => None,
    }
}

fn node_extras(node: &Node) -> (Option<String>, Option<bool>, Option<String>) {
    match (node.type_tag.as_str(), &node.params) {
        ("MATH", NodeParams::Math { operation, use_clamp }) => {
            (Some(operation.tag().to_string()), Some(*use_clamp), None)
        }
        ("VECT_MATH", NodeParams::VectorMath { operation }) => {
            (Some(operation.tag().to_string()), None, None)
        }
        ("FILLET_CURVE", NodeParams::FilletCurve { mode }) => {
            (None, None, Some(mode.tag().to_string()))
        }
        _ => (None, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_graph::{geometry_registry, MathOperation, NodeRegistry};

    fn registry() -> NodeRegistry {
        geometry_registry()
    }

    #[test]
    fn test_record_per_node_in_order() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("VALUE").unwrap());
        tree.add_node(registry.create_node("MATH").unwrap());
        tree.add_node(registry.create_node("MATH").unwrap());

        let records = snapshot_tree(&tree);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Value", "Math", "Math.001"]);
    }

    #[test]
    fn test_math_extras_present() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("MATH").unwrap().with_params(
            NodeParams::Math {
                operation: MathOperation::Subtract,
                use_clamp: true,
            },
        ));
        tree.add_node(registry.create_node("VECT_MATH").unwrap());
        tree.add_node(registry.create_node("FILLET_CURVE").unwrap());

        let records = snapshot_tree(&tree);
        assert_eq!(records[0].operation.as_deref(), Some("SUBTRACT"));
        assert_eq!(records[0].use_clamp, Some(true));
        assert_eq!(records[0].mode, None);

        assert_eq!(records[1].operation.as_deref(), Some("ADD"));
        assert_eq!(records[1].use_clamp, None);

        assert_eq!(records[2].operation, None);
        assert_eq!(records[2].mode.as_deref(), Some("BEZIER"));
    }

    #[test]
    fn test_extras_absent_for_plain_types() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("MESH_PRIMITIVE_CUBE").unwrap());

        let record = &snapshot_tree(&tree)[0];
        assert_eq!(record.operation, None);
        assert_eq!(record.use_clamp, None);
        assert_eq!(record.mode, None);
    }

    #[test]
    fn test_scalar_value_fields() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("POINTS").unwrap());
        tree.add_node(registry.create_node("CURVE_TO_MESH").unwrap());

        let records = snapshot_tree(&tree);
        let points = &records[0];
        assert_eq!(points.inputs[0].value, Some(ValueRecord::Int(1)));
        assert_eq!(points.inputs[2].value, Some(ValueRecord::Float(0.1)));

        let fill_caps = &records[1].inputs[2];
        assert_eq!(fill_caps.name, "Fill Caps");
        assert_eq!(fill_caps.value, Some(ValueRecord::Bool(false)));
    }

    #[test]
    fn test_vector_value_field() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("MESH_PRIMITIVE_CUBE").unwrap());

        let record = &snapshot_tree(&tree)[0];
        assert_eq!(record.inputs[0].name, "Size");
        assert_eq!(record.inputs[0].value, Some(ValueRecord::Vector([1.0, 1.0, 1.0])));
    }

    #[test]
    fn test_no_value_for_geometry() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("JOIN_GEOMETRY").unwrap());
        tree.add_node(registry.create_node("SET_MATERIAL").unwrap());

        let records = snapshot_tree(&tree);
        assert_eq!(records[0].inputs[0].value, None);
        assert_eq!(records[0].outputs[0].value, None);

        let material = &records[1].inputs[2];
        assert_eq!(material.socket_type, "MATERIAL");
        assert_eq!(material.value, None);
    }

    #[test]
    fn test_multi_input_link_order() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        let a = tree.add_node(registry.create_node("MESH_PRIMITIVE_CUBE").unwrap());
        let b = tree.add_node(registry.create_node("MESH_PRIMITIVE_CUBE").unwrap());
        let join = tree.add_node(registry.create_node("JOIN_GEOMETRY").unwrap());
        tree.connect(a, "Mesh", join, "Geometry").unwrap();
        tree.connect(b, "Mesh", join, "Geometry").unwrap();

        let records = snapshot_tree(&tree);
        let geometry = &records[2].inputs[0];
        assert_eq!(geometry.is_multi_input, Some(true));
        let sources: Vec<&str> = geometry.links.iter().map(|l| l.node.as_str()).collect();
        assert_eq!(sources, ["Cube", "Cube.001"]);
    }

    #[test]
    fn test_linked_sockets_reference_both_ends() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        let value = tree.add_node(registry.create_node("VALUE").unwrap());
        let math = tree.add_node(registry.create_node("MATH").unwrap());
        tree.connect(value, "Value", math, "Value_001").unwrap();

        let records = snapshot_tree(&tree);
        let out_link = &records[0].outputs[0].links[0];
        assert_eq!(out_link.node, "Math");
        assert_eq!(out_link.socket, "Value_001");

        let in_link = &records[1].inputs[1].links[0];
        assert_eq!(in_link.node, "Value");
        assert_eq!(in_link.socket, "Value");
        assert!(records[1].inputs[0].links.is_empty());
    }

    #[test]
    fn test_end_to_end_single_math_node() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("MATH").unwrap());

        let value = serde_json::to_value(snapshot_tree(&tree)).unwrap();
        let expected = serde_json::json!([{
            "name": "Math",
            "label": "",
            "default_label": "Math",
            "type": "MATH",
            "inputs": [
                {
                    "name": "Value",
                    "identifier": "Value",
                    "type": "VALUE",
                    "links": [],
                    "display_shape": "CIRCLE",
                    "is_multi_input": false,
                    "value": 0.5_f32
                },
                {
                    "name": "Value",
                    "identifier": "Value_001",
                    "type": "VALUE",
                    "links": [],
                    "display_shape": "CIRCLE",
                    "is_multi_input": false,
                    "value": 0.5_f32
                },
                {
                    "name": "Value",
                    "identifier": "Value_002",
                    "type": "VALUE",
                    "links": [],
                    "display_shape": "CIRCLE",
                    "is_multi_input": false,
                    "value": 0.5_f32
                }
            ],
            "outputs": [
                {
                    "name": "Value",
                    "identifier": "Value",
                    "type": "VALUE",
                    "links": [],
                    "display_shape": "CIRCLE",
                    "value": 0.0_f32
                }
            ],
            "color": [0.608_f32, 0.608_f32, 0.608_f32],
            "location": [0.0_f32, 0.0_f32],
            "dimensions": [140.0_f32, 172.0_f32],
            "operation": "ADD",
            "use_clamp": false
        }]);
        assert_eq!(value, expected);
    }

    #[test]
    fn test_write_snapshot_files() {
        let registry = registry();
        let mut tree = NodeTree::new("Geometry Nodes");
        tree.add_node(registry.create_node("VALUE").unwrap());

        let dir = tempfile::tempdir().unwrap();
        let compact = dir.path().join("tree.json");
        let pretty = dir.path().join("tree_pretty.json");
        write_snapshot(&tree, &compact).unwrap();
        write_snapshot_pretty(&tree, &pretty).unwrap();

        let compact_text = std::fs::read_to_string(&compact).unwrap();
        let pretty_text = std::fs::read_to_string(&pretty).unwrap();
        assert!(!compact_text.contains('\n'));
        assert!(pretty_text.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&compact_text).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty_text).unwrap();
        assert_eq!(a, b);
    }
}
