// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot import: parse a JSON document back into a node tree.
//!
//! Node names are the link namespace, so every record must carry a
//! unique name. Input-side link lists are authoritative; output-side
//! lists are regenerated on the next export.

use std::collections::HashMap;
use std::path::Path;

use trellis_graph::{
    DisplayShape, FilletMode, MathOperation, Node, NodeId, NodeParams, NodeTree, Socket,
    SocketType, SocketValue, VectorMathOperation,
};

use crate::export::SnapshotError;
use crate::record::{NodeRecord, SocketRecord};

/// Reads and parses a snapshot document from `path`.
pub fn read_snapshot(path: &Path) -> Result<Vec<NodeRecord>, SnapshotError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Rebuilds a node tree named `name` from snapshot records.
///
/// Nodes land in record order, links in input-walk order. Every link's
/// source must name a node in the document and one of its outputs.
pub fn resolve(name: impl Into<String>, records: &[NodeRecord]) -> Result<NodeTree, SnapshotError> {
    let mut tree = NodeTree::new(name);
    let mut ids: HashMap<String, NodeId> = HashMap::new();
    let mut order: Vec<NodeId> = Vec::with_capacity(records.len());

    for record in records {
        if ids.contains_key(&record.name) {
            return Err(SnapshotError::DuplicateName(record.name.clone()));
        }
        let id = tree.add_node(resolve_node(record)?);
        ids.insert(record.name.clone(), id);
        order.push(id);
    }

    for (record, &to) in records.iter().zip(&order) {
        for input in &record.inputs {
            for link in &input.links {
                let Some(&from) = ids.get(&link.node) else {
                    return Err(SnapshotError::DanglingLink {
                        node: link.node.clone(),
                        socket: link.socket.clone(),
                    });
                };
                tree.connect(from, &link.socket, to, &input.identifier)?;
            }
        }
    }

    Ok(tree)
}

fn resolve_node(record: &NodeRecord) -> Result<Node, SnapshotError> {
    Ok(Node {
        id: NodeId::new(),
        name: record.name.clone(),
        label: record.label.clone(),
        default_label: record.default_label.clone(),
        type_tag: record.node_type.clone(),
        inputs: record.inputs.iter().map(resolve_socket).collect(),
        outputs: record.outputs.iter().map(resolve_socket).collect(),
        color: record.color,
        location: record.location,
        dimensions: record.dimensions,
        params: resolve_params(record)?,
    })
}

fn resolve_socket(record: &SocketRecord) -> Socket {
    Socket {
        name: record.name.clone(),
        identifier: record.identifier.clone(),
        socket_type: SocketType::from_tag(&record.socket_type),
        display_shape: DisplayShape::from_tag(&record.display_shape).unwrap_or_default(),
        multi_input: record.is_multi_input.unwrap_or(false),
        default_value: record.value.as_ref().map(SocketValue::from),
    }
}

fn resolve_params(record: &NodeRecord) -> Result<NodeParams, SnapshotError> {
    match record.node_type.as_str() {
        "MATH" => {
            let operation = match &record.operation {
                Some(tag) => MathOperation::from_tag(tag)
                    .ok_or_else(|| SnapshotError::UnknownOperation(tag.clone()))?,
                None => MathOperation::default(),
            };
            Ok(NodeParams::Math {
                operation,
                use_clamp: record.use_clamp.unwrap_or(false),
            })
        }
        "VECT_MATH" => {
            let operation = match &record.operation {
                Some(tag) => VectorMathOperation::from_tag(tag)
                    .ok_or_else(|| SnapshotError::UnknownOperation(tag.clone()))?,
                None => VectorMathOperation::default(),
            };
            Ok(NodeParams::VectorMath { operation })
        }
        "FILLET_CURVE" => {
            let mode = match &record.mode {
                Some(tag) => {
                    FilletMode::from_tag(tag).ok_or_else(|| SnapshotError::UnknownMode(tag.clone()))?
                }
                None => FilletMode::default(),
            };
            Ok(NodeParams::FilletCurve { mode })
        }
        _ => Ok(NodeParams::None),
    }
}
