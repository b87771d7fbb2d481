// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flat record types mirroring the snapshot JSON document.
//!
//! Field declaration order is load-bearing: serde emits fields in the
//! order they appear here, and the document layout is part of the
//! interchange contract. Optional fields are omitted entirely when
//! absent rather than written as null.

use serde::{Deserialize, Serialize};
use trellis_graph::SocketValue;

/// One end of a link as seen from a socket: the node at the other end
/// by name, and its socket by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Name of the node at the other end
    pub node: String,
    /// Identifier of the socket at the other end
    pub socket: String,
}

/// A socket's default value in the document: a bare JSON scalar or a
/// 3-element array, depending on the socket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueRecord {
    /// Boolean socket value
    Bool(bool),
    /// Integer socket value
    Int(i32),
    /// Float socket value
    Float(f32),
    /// Vector socket value
    Vector([f32; 3]),
}

impl From<&SocketValue> for ValueRecord {
    fn from(value: &SocketValue) -> Self {
        match value {
            SocketValue::Float(v) => Self::Float(*v),
            SocketValue::Int(v) => Self::Int(*v),
            SocketValue::Boolean(v) => Self::Bool(*v),
            SocketValue::Vector(v) => Self::Vector(*v),
        }
    }
}

impl From<&ValueRecord> for SocketValue {
    fn from(value: &ValueRecord) -> Self {
        match value {
            ValueRecord::Float(v) => Self::Float(*v),
            ValueRecord::Int(v) => Self::Int(*v),
            ValueRecord::Bool(v) => Self::Boolean(*v),
            ValueRecord::Vector(v) => Self::Vector(*v),
        }
    }
}

/// A socket in the document.
///
/// Inputs and outputs share this shape; `is_multi_input` is present on
/// every input record and never on outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketRecord {
    /// Display name
    pub name: String,
    /// Identifier, unique within the owning direction list
    pub identifier: String,
    /// Socket type tag, e.g. "VALUE"
    #[serde(rename = "type")]
    pub socket_type: String,
    /// Links touching this socket, in insertion order
    pub links: Vec<LinkRecord>,
    /// Display shape tag, e.g. "CIRCLE"
    pub display_shape: String,
    /// Whether multiple incoming links are allowed (inputs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multi_input: Option<bool>,
    /// Default value, present for value-bearing socket types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueRecord>,
}

/// A node in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node name, unique within the tree (the link namespace)
    pub name: String,
    /// User label, empty when unset
    pub label: String,
    /// The type's display name
    pub default_label: String,
    /// Node type tag, e.g. "MATH"
    #[serde(rename = "type")]
    pub node_type: String,
    /// Input sockets, in socket order
    pub inputs: Vec<SocketRecord>,
    /// Output sockets, in socket order
    pub outputs: Vec<SocketRecord>,
    /// Header color (RGB)
    pub color: [f32; 3],
    /// Editor position
    pub location: [f32; 2],
    /// Drawn size
    pub dimensions: [f32; 2],
    /// Math/vector-math operation code, type-dependent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Clamp flag, math nodes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_clamp: Option<bool>,
    /// Fillet mode, fillet-curve nodes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}
