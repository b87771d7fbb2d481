// SPDX-License-Identifier: MIT OR Apache-2.0
//! Socket definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};

/// Data type that can flow through a socket.
///
/// The variants mirror the host type tags that appear in exported
/// snapshots (`"VALUE"`, `"INT"`, ...). `Custom` holds any tag outside
/// the built-in set so that foreign snapshots survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketType {
    /// Scalar float value
    Value,
    /// Integer value
    Int,
    /// Boolean value
    Boolean,
    /// 3D vector
    Vector,
    /// Geometry (meshes, curves, point clouds)
    Geometry,
    /// Material reference
    Material,
    /// Any tag not covered by the built-in set
    Custom(String),
}

impl SocketType {
    /// The wire tag for this type, as it appears in snapshots.
    pub fn tag(&self) -> &str {
        match self {
            Self::Value => "VALUE",
            Self::Int => "INT",
            Self::Boolean => "BOOLEAN",
            Self::Vector => "VECTOR",
            Self::Geometry => "GEOMETRY",
            Self::Material => "MATERIAL",
            Self::Custom(tag) => tag,
        }
    }

    /// Parse a wire tag. Unknown tags become `Custom`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "VALUE" => Self::Value,
            "INT" => Self::Int,
            "BOOLEAN" => Self::Boolean,
            "VECTOR" => Self::Vector,
            "GEOMETRY" => Self::Geometry,
            "MATERIAL" => Self::Material,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Whether this is one of the scalar value types.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Value | Self::Int | Self::Boolean)
    }

    /// Check if a link from this type into `other` is allowed.
    ///
    /// Scalar types convert freely among themselves and to/from vectors
    /// (the host's implicit conversions). Geometry, material and custom
    /// types only connect to themselves.
    pub fn can_connect_to(&self, other: &SocketType) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (a, b) if a.is_scalar() && b.is_scalar() => true,
            (a, Self::Vector) if a.is_scalar() => true,
            (Self::Vector, b) if b.is_scalar() => true,
            _ => false,
        }
    }
}

/// Host-defined visual hint for a socket, unrelated to its data type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayShape {
    /// Plain circle (the default)
    #[default]
    Circle,
    /// Square
    Square,
    /// Diamond (fields in the host UI)
    Diamond,
    /// Circle with a center dot
    CircleDot,
    /// Square with a center dot
    SquareDot,
    /// Diamond with a center dot
    DiamondDot,
}

impl DisplayShape {
    /// The wire tag for this shape.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Circle => "CIRCLE",
            Self::Square => "SQUARE",
            Self::Diamond => "DIAMOND",
            Self::CircleDot => "CIRCLE_DOT",
            Self::SquareDot => "SQUARE_DOT",
            Self::DiamondDot => "DIAMOND_DOT",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CIRCLE" => Some(Self::Circle),
            "SQUARE" => Some(Self::Square),
            "DIAMOND" => Some(Self::Diamond),
            "CIRCLE_DOT" => Some(Self::CircleDot),
            "SQUARE_DOT" => Some(Self::SquareDot),
            "DIAMOND_DOT" => Some(Self::DiamondDot),
            _ => None,
        }
    }
}

/// Value that can be stored as a socket default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SocketValue {
    /// Scalar float
    Float(f32),
    /// Integer
    Int(i32),
    /// Boolean
    Boolean(bool),
    /// 3D vector
    Vector([f32; 3]),
}

impl SocketValue {
    /// Get the socket type this value belongs to.
    pub fn socket_type(&self) -> SocketType {
        match self {
            Self::Float(_) => SocketType::Value,
            Self::Int(_) => SocketType::Int,
            Self::Boolean(_) => SocketType::Boolean,
            Self::Vector(_) => SocketType::Vector,
        }
    }

    /// Coerce to a float. Integers convert, booleans map to 0/1,
    /// vectors do not coerce.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f32),
            Self::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Self::Vector(_) => None,
        }
    }

    /// Coerce to a vector. Scalars broadcast to all three components.
    pub fn as_vector(&self) -> Option<[f32; 3]> {
        match self {
            Self::Vector(v) => Some(*v),
            other => other.as_float().map(|f| [f, f, f]),
        }
    }
}

/// A typed input or output attachment point on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
    /// Display name
    pub name: String,
    /// Stable identifier, unique within the owning node's direction list
    pub identifier: String,
    /// Data type
    pub socket_type: SocketType,
    /// Visual hint
    pub display_shape: DisplayShape,
    /// Whether multiple incoming links are allowed (inputs only)
    pub multi_input: bool,
    /// Default value used when the socket is unlinked
    pub default_value: Option<SocketValue>,
}

impl Socket {
    /// Create an input socket.
    pub fn input(name: impl Into<String>, identifier: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            socket_type,
            display_shape: DisplayShape::Circle,
            multi_input: false,
            default_value: None,
        }
    }

    /// Create an output socket.
    pub fn output(name: impl Into<String>, identifier: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            socket_type,
            display_shape: DisplayShape::Circle,
            multi_input: false,
            default_value: None,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, value: SocketValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set the display shape.
    pub fn with_shape(mut self, shape: DisplayShape) -> Self {
        self.display_shape = shape;
        self
    }

    /// Mark as multi-input.
    pub fn multi(mut self) -> Self {
        self.multi_input = true;
        self
    }
}
