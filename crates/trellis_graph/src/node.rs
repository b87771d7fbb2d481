// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph model.

use crate::socket::Socket;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default node header color used by the host
pub const DEFAULT_NODE_COLOR: [f32; 3] = [0.608, 0.608, 0.608];

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeCategory {
    /// Input nodes (constants, scene data)
    Input,
    /// Scalar math
    Math,
    /// Vector math and composition
    Vector,
    /// Geometry-level operations
    Geometry,
    /// Curve primitives and operations
    Curve,
    /// Mesh primitives
    Mesh,
    /// Point cloud and instancing
    Point,
    /// Material assignment
    Material,
    /// Group interface nodes
    Group,
    /// Output/preview nodes
    Output,
}

/// Operation code for the scalar math node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathOperation {
    /// a + b
    #[default]
    Add,
    /// a - b
    Subtract,
    /// a * b
    Multiply,
    /// a / b
    Divide,
    /// a * b + c
    MultiplyAdd,
    /// a ^ b
    Power,
    /// log base b of a
    Logarithm,
    /// Square root
    Sqrt,
    /// 1 / sqrt(a)
    InverseSqrt,
    /// |a|
    Absolute,
    /// e ^ a
    Exponent,
    /// min(a, b)
    Minimum,
    /// max(a, b)
    Maximum,
    /// Round down
    Floor,
    /// a mod b
    Modulo,
    /// sin(a)
    Sine,
    /// cos(a)
    Cosine,
    /// Degrees to radians
    Radians,
}

impl MathOperation {
    /// The wire tag for this operation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::MultiplyAdd => "MULTIPLY_ADD",
            Self::Power => "POWER",
            Self::Logarithm => "LOGARITHM",
            Self::Sqrt => "SQRT",
            Self::InverseSqrt => "INVERSE_SQRT",
            Self::Absolute => "ABSOLUTE",
            Self::Exponent => "EXPONENT",
            Self::Minimum => "MINIMUM",
            Self::Maximum => "MAXIMUM",
            Self::Floor => "FLOOR",
            Self::Modulo => "MODULO",
            Self::Sine => "SINE",
            Self::Cosine => "COSINE",
            Self::Radians => "RADIANS",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ADD" => Some(Self::Add),
            "SUBTRACT" => Some(Self::Subtract),
            "MULTIPLY" => Some(Self::Multiply),
            "DIVIDE" => Some(Self::Divide),
            "MULTIPLY_ADD" => Some(Self::MultiplyAdd),
            "POWER" => Some(Self::Power),
            "LOGARITHM" => Some(Self::Logarithm),
            "SQRT" => Some(Self::Sqrt),
            "INVERSE_SQRT" => Some(Self::InverseSqrt),
            "ABSOLUTE" => Some(Self::Absolute),
            "EXPONENT" => Some(Self::Exponent),
            "MINIMUM" => Some(Self::Minimum),
            "MAXIMUM" => Some(Self::Maximum),
            "FLOOR" => Some(Self::Floor),
            "MODULO" => Some(Self::Modulo),
            "SINE" => Some(Self::Sine),
            "COSINE" => Some(Self::Cosine),
            "RADIANS" => Some(Self::Radians),
            _ => None,
        }
    }
}

/// Operation code for the vector math node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorMathOperation {
    /// Component-wise addition
    #[default]
    Add,
    /// Component-wise subtraction
    Subtract,
    /// Component-wise multiplication
    Multiply,
    /// Component-wise division
    Divide,
    /// Multiply by a scalar
    Scale,
}

impl VectorMathOperation {
    /// The wire tag for this operation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Scale => "SCALE",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ADD" => Some(Self::Add),
            "SUBTRACT" => Some(Self::Subtract),
            "MULTIPLY" => Some(Self::Multiply),
            "DIVIDE" => Some(Self::Divide),
            "SCALE" => Some(Self::Scale),
            _ => None,
        }
    }
}

/// Rounding mode for the fillet curve node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilletMode {
    /// Rounded corners
    #[default]
    Bezier,
    /// Straight-cut corners
    Poly,
}

impl FilletMode {
    /// The wire tag for this mode.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bezier => "BEZIER",
            Self::Poly => "POLY",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BEZIER" => Some(Self::Bezier),
            "POLY" => Some(Self::Poly),
            _ => None,
        }
    }
}

/// Per-type extra state carried by a node beyond its sockets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum NodeParams {
    /// No extra state
    #[default]
    None,
    /// Scalar math node state
    Math {
        /// Selected operation
        operation: MathOperation,
        /// Clamp the result to [0, 1]
        use_clamp: bool,
    },
    /// Vector math node state
    VectorMath {
        /// Selected operation
        operation: VectorMathOperation,
    },
    /// Fillet curve node state
    FilletCurve {
        /// Corner rounding mode
        mode: FilletMode,
    },
}

/// Node type definition used by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Type tag, e.g. "MATH"
    pub type_tag: String,
    /// Display name shown when a node has no user label
    pub label: String,
    /// Category
    pub category: NodeCategory,
    /// Description
    pub description: String,
    /// Default input sockets
    pub inputs: Vec<Socket>,
    /// Default output sockets
    pub outputs: Vec<Socket>,
    /// Extra state new instances start with
    pub default_params: NodeParams,
    /// Drawn size of new instances
    pub dimensions: [f32; 2],
}

/// A node instance in a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Instance name, unique within the owning tree
    pub name: String,
    /// User-assigned label (empty when unset)
    pub label: String,
    /// The type's display name
    pub default_label: String,
    /// Type tag, e.g. "MATH"
    pub type_tag: String,
    /// Input sockets
    pub inputs: Vec<Socket>,
    /// Output sockets
    pub outputs: Vec<Socket>,
    /// Header color (RGB)
    pub color: [f32; 3],
    /// Position in the editor
    pub location: [f32; 2],
    /// Drawn size
    pub dimensions: [f32; 2],
    /// Per-type extra state
    pub params: NodeParams,
}

impl Node {
    /// Create a new node from a type definition
    pub fn new(spec: &NodeSpec) -> Self {
        Self {
            id: NodeId::new(),
            name: spec.label.clone(),
            label: String::new(),
            default_label: spec.label.clone(),
            type_tag: spec.type_tag.clone(),
            inputs: spec.inputs.clone(),
            outputs: spec.outputs.clone(),
            color: DEFAULT_NODE_COLOR,
            location: [0.0, 0.0],
            dimensions: spec.dimensions,
            params: spec.default_params.clone(),
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: [f32; 2]) -> Self {
        self.location = location;
        self
    }

    /// Set the user label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the header color
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set the extra state
    pub fn with_params(mut self, params: NodeParams) -> Self {
        self.params = params;
        self
    }

    /// Get an input socket by identifier
    pub fn input(&self, identifier: &str) -> Option<&Socket> {
        self.inputs.iter().find(|s| s.identifier == identifier)
    }

    /// Get a mutable input socket by identifier
    pub fn input_mut(&mut self, identifier: &str) -> Option<&mut Socket> {
        self.inputs.iter_mut().find(|s| s.identifier == identifier)
    }

    /// Get an output socket by identifier
    pub fn output(&self, identifier: &str) -> Option<&Socket> {
        self.outputs.iter().find(|s| s.identifier == identifier)
    }

    /// Get a mutable output socket by identifier
    pub fn output_mut(&mut self, identifier: &str) -> Option<&mut Socket> {
        self.outputs.iter_mut().find(|s| s.identifier == identifier)
    }
}

/// Registry of available node types
pub struct NodeRegistry {
    /// Registered node specs by type tag
    specs: indexmap::IndexMap<String, NodeSpec>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            specs: indexmap::IndexMap::new(),
        }
    }

    /// Register a node spec
    pub fn register(&mut self, spec: NodeSpec) {
        debug_assert!(
            unique_identifiers(&spec.inputs) && unique_identifiers(&spec.outputs),
            "duplicate socket identifier in spec {}",
            spec.type_tag
        );
        self.specs.insert(spec.type_tag.clone(), spec);
    }

    /// Get a node spec by type tag
    pub fn get(&self, type_tag: &str) -> Option<&NodeSpec> {
        self.specs.get(type_tag)
    }

    /// Get all registered specs
    pub fn specs(&self) -> impl Iterator<Item = &NodeSpec> {
        self.specs.values()
    }

    /// Get specs by category
    pub fn specs_in_category(&self, category: NodeCategory) -> impl Iterator<Item = &NodeSpec> {
        self.specs.values().filter(move |s| s.category == category)
    }

    /// Create a node from a type tag
    pub fn create_node(&self, type_tag: &str) -> Option<Node> {
        self.get(type_tag).map(Node::new)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_identifiers(sockets: &[Socket]) -> bool {
    sockets
        .iter()
        .enumerate()
        .all(|(i, a)| sockets[..i].iter().all(|b| b.identifier != a.identifier))
}
