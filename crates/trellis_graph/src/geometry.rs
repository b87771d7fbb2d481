// SPDX-License-Identifier: MIT OR Apache-2.0
//! Geometry node catalog.
//!
//! Registers the node set the snapshot pipeline understands, with the
//! host's socket names, identifiers, defaults and display shapes.
//! Socket identifiers follow the host scheme: the identifier equals the
//! name unless the name repeats within the node, in which case later
//! sockets get "_001"-style suffixes.

use crate::node::{
    FilletMode, MathOperation, NodeCategory, NodeParams, NodeRegistry, NodeSpec,
    VectorMathOperation,
};
use crate::socket::{DisplayShape, Socket, SocketType, SocketValue};

/// Create the geometry node registry with all available node types
pub fn geometry_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    // ========================================================================
    // Input Nodes
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "VALUE".to_string(),
        label: "Value".to_string(),
        category: NodeCategory::Input,
        description: "Constant float value".to_string(),
        inputs: vec![],
        outputs: vec![
            Socket::output("Value", "Value", SocketType::Value).with_default(SocketValue::Float(0.5)),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 77.0],
    });

    registry.register(NodeSpec {
        type_tag: "INPUT_VECTOR".to_string(),
        label: "Vector".to_string(),
        category: NodeCategory::Input,
        description: "Constant 3D vector value".to_string(),
        inputs: vec![],
        outputs: vec![
            Socket::output("Vector", "Vector", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 121.0],
    });

    registry.register(NodeSpec {
        type_tag: "INDEX".to_string(),
        label: "Index".to_string(),
        category: NodeCategory::Input,
        description: "Index of the element being processed".to_string(),
        inputs: vec![],
        outputs: vec![
            Socket::output("Index", "Index", SocketType::Int)
                .with_default(SocketValue::Int(0))
                .with_shape(DisplayShape::Diamond),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 52.0],
    });

    // ========================================================================
    // Math
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "MATH".to_string(),
        label: "Math".to_string(),
        category: NodeCategory::Math,
        description: "Scalar math operation".to_string(),
        inputs: vec![
            Socket::input("Value", "Value", SocketType::Value).with_default(SocketValue::Float(0.5)),
            Socket::input("Value", "Value_001", SocketType::Value).with_default(SocketValue::Float(0.5)),
            Socket::input("Value", "Value_002", SocketType::Value).with_default(SocketValue::Float(0.5)),
        ],
        outputs: vec![
            Socket::output("Value", "Value", SocketType::Value).with_default(SocketValue::Float(0.0)),
        ],
        default_params: NodeParams::Math {
            operation: MathOperation::Add,
            use_clamp: false,
        },
        dimensions: [140.0, 172.0],
    });

    registry.register(NodeSpec {
        type_tag: "MAP_RANGE".to_string(),
        label: "Map Range".to_string(),
        category: NodeCategory::Math,
        description: "Remap a value from one range to another".to_string(),
        inputs: vec![
            Socket::input("Value", "Value", SocketType::Value).with_default(SocketValue::Float(1.0)),
            Socket::input("From Min", "From Min", SocketType::Value).with_default(SocketValue::Float(0.0)),
            Socket::input("From Max", "From Max", SocketType::Value).with_default(SocketValue::Float(1.0)),
            Socket::input("To Min", "To Min", SocketType::Value).with_default(SocketValue::Float(0.0)),
            Socket::input("To Max", "To Max", SocketType::Value).with_default(SocketValue::Float(1.0)),
        ],
        outputs: vec![
            Socket::output("Result", "Result", SocketType::Value).with_default(SocketValue::Float(0.0)),
        ],
        default_params: NodeParams::None,
        dimensions: [240.0, 252.0],
    });

    // ========================================================================
    // Vector
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "VECT_MATH".to_string(),
        label: "Vector Math".to_string(),
        category: NodeCategory::Vector,
        description: "Vector math operation".to_string(),
        inputs: vec![
            Socket::input("Vector", "Vector", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::input("Vector", "Vector_001", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::input("Vector", "Vector_002", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::input("Scale", "Scale", SocketType::Value).with_default(SocketValue::Float(1.0)),
        ],
        outputs: vec![
            Socket::output("Vector", "Vector", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::output("Value", "Value", SocketType::Value).with_default(SocketValue::Float(0.0)),
        ],
        default_params: NodeParams::VectorMath {
            operation: VectorMathOperation::Add,
        },
        dimensions: [140.0, 192.0],
    });

    registry.register(NodeSpec {
        type_tag: "COMBXYZ".to_string(),
        label: "Combine XYZ".to_string(),
        category: NodeCategory::Vector,
        description: "Combine components into a vector".to_string(),
        inputs: vec![
            Socket::input("X", "X", SocketType::Value).with_default(SocketValue::Float(0.0)),
            Socket::input("Y", "Y", SocketType::Value).with_default(SocketValue::Float(0.0)),
            Socket::input("Z", "Z", SocketType::Value).with_default(SocketValue::Float(0.0)),
        ],
        outputs: vec![
            Socket::output("Vector", "Vector", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 124.0],
    });

    registry.register(NodeSpec {
        type_tag: "SEPXYZ".to_string(),
        label: "Separate XYZ".to_string(),
        category: NodeCategory::Vector,
        description: "Split a vector into components".to_string(),
        inputs: vec![
            Socket::input("Vector", "Vector", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
        ],
        outputs: vec![
            Socket::output("X", "X", SocketType::Value).with_default(SocketValue::Float(0.0)),
            Socket::output("Y", "Y", SocketType::Value).with_default(SocketValue::Float(0.0)),
            Socket::output("Z", "Z", SocketType::Value).with_default(SocketValue::Float(0.0)),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 124.0],
    });

    // ========================================================================
    // Point / Instances
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "POINTS".to_string(),
        label: "Points".to_string(),
        category: NodeCategory::Point,
        description: "Generate a point cloud".to_string(),
        inputs: vec![
            Socket::input("Count", "Count", SocketType::Int).with_default(SocketValue::Int(1)),
            Socket::input("Position", "Position", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0]))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Radius", "Radius", SocketType::Value)
                .with_default(SocketValue::Float(0.1))
                .with_shape(DisplayShape::DiamondDot),
        ],
        outputs: vec![Socket::output("Geometry", "Geometry", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 124.0],
    });

    registry.register(NodeSpec {
        type_tag: "INSTANCE_ON_POINTS".to_string(),
        label: "Instance on Points".to_string(),
        category: NodeCategory::Point,
        description: "Place instances on points".to_string(),
        inputs: vec![
            Socket::input("Points", "Points", SocketType::Geometry),
            Socket::input("Selection", "Selection", SocketType::Boolean)
                .with_default(SocketValue::Boolean(true))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Instance", "Instance", SocketType::Geometry),
            Socket::input("Pick Instance", "Pick Instance", SocketType::Boolean)
                .with_default(SocketValue::Boolean(false))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Instance Index", "Instance Index", SocketType::Int)
                .with_default(SocketValue::Int(0))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Rotation", "Rotation", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0]))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Scale", "Scale", SocketType::Vector)
                .with_default(SocketValue::Vector([1.0, 1.0, 1.0]))
                .with_shape(DisplayShape::DiamondDot),
        ],
        outputs: vec![Socket::output("Instances", "Instances", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 184.0],
    });

    // ========================================================================
    // Curve Primitives
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "CURVE_PRIMITIVE_CIRCLE".to_string(),
        label: "Curve Circle".to_string(),
        category: NodeCategory::Curve,
        description: "Generate a circular curve".to_string(),
        inputs: vec![
            Socket::input("Resolution", "Resolution", SocketType::Int)
                .with_default(SocketValue::Int(32)),
            Socket::input("Point 1", "Point 1", SocketType::Vector)
                .with_default(SocketValue::Vector([-1.0, 0.0, 0.0])),
            Socket::input("Point 2", "Point 2", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 1.0, 0.0])),
            Socket::input("Point 3", "Point 3", SocketType::Vector)
                .with_default(SocketValue::Vector([1.0, 0.0, 0.0])),
            Socket::input("Radius", "Radius", SocketType::Value)
                .with_default(SocketValue::Float(1.0)),
        ],
        outputs: vec![
            Socket::output("Curve", "Curve", SocketType::Geometry),
            Socket::output("Center", "Center", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 144.0],
    });

    registry.register(NodeSpec {
        type_tag: "CURVE_PRIMITIVE_QUADRILATERAL".to_string(),
        label: "Quadrilateral".to_string(),
        category: NodeCategory::Curve,
        description: "Generate a four-sided curve".to_string(),
        inputs: vec![
            Socket::input("Width", "Width", SocketType::Value).with_default(SocketValue::Float(2.0)),
            Socket::input("Height", "Height", SocketType::Value).with_default(SocketValue::Float(2.0)),
        ],
        outputs: vec![Socket::output("Curve", "Curve", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 124.0],
    });

    // ========================================================================
    // Curve Operations
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "CURVE_TO_MESH".to_string(),
        label: "Curve to Mesh".to_string(),
        category: NodeCategory::Curve,
        description: "Sweep a profile along a curve".to_string(),
        inputs: vec![
            Socket::input("Curve", "Curve", SocketType::Geometry),
            Socket::input("Profile Curve", "Profile Curve", SocketType::Geometry),
            Socket::input("Fill Caps", "Fill Caps", SocketType::Boolean)
                .with_default(SocketValue::Boolean(false)),
        ],
        outputs: vec![Socket::output("Mesh", "Mesh", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 100.0],
    });

    registry.register(NodeSpec {
        type_tag: "FILLET_CURVE".to_string(),
        label: "Fillet Curve".to_string(),
        category: NodeCategory::Curve,
        description: "Round curve control points".to_string(),
        inputs: vec![
            Socket::input("Curve", "Curve", SocketType::Geometry),
            Socket::input("Count", "Count", SocketType::Int).with_default(SocketValue::Int(1)),
            Socket::input("Radius", "Radius", SocketType::Value)
                .with_default(SocketValue::Float(0.25))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Limit Radius", "Limit Radius", SocketType::Boolean)
                .with_default(SocketValue::Boolean(false)),
        ],
        outputs: vec![Socket::output("Curve", "Curve", SocketType::Geometry)],
        default_params: NodeParams::FilletCurve {
            mode: FilletMode::Bezier,
        },
        dimensions: [140.0, 148.0],
    });

    // ========================================================================
    // Mesh Primitives
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "MESH_PRIMITIVE_CUBE".to_string(),
        label: "Cube".to_string(),
        category: NodeCategory::Mesh,
        description: "Generate a cube mesh".to_string(),
        inputs: vec![
            Socket::input("Size", "Size", SocketType::Vector)
                .with_default(SocketValue::Vector([1.0, 1.0, 1.0])),
            Socket::input("Vertices X", "Vertices X", SocketType::Int)
                .with_default(SocketValue::Int(2)),
            Socket::input("Vertices Y", "Vertices Y", SocketType::Int)
                .with_default(SocketValue::Int(2)),
            Socket::input("Vertices Z", "Vertices Z", SocketType::Int)
                .with_default(SocketValue::Int(2)),
        ],
        outputs: vec![Socket::output("Mesh", "Mesh", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 144.0],
    });

    registry.register(NodeSpec {
        type_tag: "MESH_PRIMITIVE_CYLINDER".to_string(),
        label: "Cylinder".to_string(),
        category: NodeCategory::Mesh,
        description: "Generate a cylinder mesh".to_string(),
        inputs: vec![
            Socket::input("Vertices", "Vertices", SocketType::Int)
                .with_default(SocketValue::Int(32)),
            Socket::input("Side Segments", "Side Segments", SocketType::Int)
                .with_default(SocketValue::Int(1)),
            Socket::input("Fill Segments", "Fill Segments", SocketType::Int)
                .with_default(SocketValue::Int(1)),
            Socket::input("Radius", "Radius", SocketType::Value)
                .with_default(SocketValue::Float(1.0)),
            Socket::input("Depth", "Depth", SocketType::Value)
                .with_default(SocketValue::Float(2.0)),
        ],
        outputs: vec![
            Socket::output("Mesh", "Mesh", SocketType::Geometry),
            Socket::output("Top", "Top", SocketType::Boolean)
                .with_default(SocketValue::Boolean(false))
                .with_shape(DisplayShape::Diamond),
            Socket::output("Side", "Side", SocketType::Boolean)
                .with_default(SocketValue::Boolean(false))
                .with_shape(DisplayShape::Diamond),
            Socket::output("Bottom", "Bottom", SocketType::Boolean)
                .with_default(SocketValue::Boolean(false))
                .with_shape(DisplayShape::Diamond),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 220.0],
    });

    registry.register(NodeSpec {
        type_tag: "MESH_PRIMITIVE_UV_SPHERE".to_string(),
        label: "UV Sphere".to_string(),
        category: NodeCategory::Mesh,
        description: "Generate a UV sphere mesh".to_string(),
        inputs: vec![
            Socket::input("Segments", "Segments", SocketType::Int)
                .with_default(SocketValue::Int(32)),
            Socket::input("Rings", "Rings", SocketType::Int).with_default(SocketValue::Int(16)),
            Socket::input("Radius", "Radius", SocketType::Value)
                .with_default(SocketValue::Float(1.0)),
        ],
        outputs: vec![Socket::output("Mesh", "Mesh", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 124.0],
    });

    registry.register(NodeSpec {
        type_tag: "MESH_PRIMITIVE_GRID".to_string(),
        label: "Grid".to_string(),
        category: NodeCategory::Mesh,
        description: "Generate a planar grid mesh".to_string(),
        inputs: vec![
            Socket::input("Size X", "Size X", SocketType::Value)
                .with_default(SocketValue::Float(1.0)),
            Socket::input("Size Y", "Size Y", SocketType::Value)
                .with_default(SocketValue::Float(1.0)),
            Socket::input("Vertices X", "Vertices X", SocketType::Int)
                .with_default(SocketValue::Int(3)),
            Socket::input("Vertices Y", "Vertices Y", SocketType::Int)
                .with_default(SocketValue::Int(3)),
        ],
        outputs: vec![Socket::output("Mesh", "Mesh", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 144.0],
    });

    // ========================================================================
    // Geometry
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "JOIN_GEOMETRY".to_string(),
        label: "Join Geometry".to_string(),
        category: NodeCategory::Geometry,
        description: "Merge multiple geometry streams".to_string(),
        inputs: vec![Socket::input("Geometry", "Geometry", SocketType::Geometry).multi()],
        outputs: vec![Socket::output("Geometry", "Geometry", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 76.0],
    });

    registry.register(NodeSpec {
        type_tag: "TRANSFORM_GEOMETRY".to_string(),
        label: "Transform".to_string(),
        category: NodeCategory::Geometry,
        description: "Translate, rotate and scale geometry".to_string(),
        inputs: vec![
            Socket::input("Geometry", "Geometry", SocketType::Geometry),
            Socket::input("Translation", "Translation", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::input("Rotation", "Rotation", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::input("Scale", "Scale", SocketType::Vector)
                .with_default(SocketValue::Vector([1.0, 1.0, 1.0])),
        ],
        outputs: vec![Socket::output("Geometry", "Geometry", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 148.0],
    });

    registry.register(NodeSpec {
        type_tag: "BOUNDING_BOX".to_string(),
        label: "Bounding Box".to_string(),
        category: NodeCategory::Geometry,
        description: "Axis-aligned bounds of geometry".to_string(),
        inputs: vec![Socket::input("Geometry", "Geometry", SocketType::Geometry)],
        outputs: vec![
            Socket::output("Bounding Box", "Bounding Box", SocketType::Geometry),
            Socket::output("Min", "Min", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
            Socket::output("Max", "Max", SocketType::Vector)
                .with_default(SocketValue::Vector([0.0, 0.0, 0.0])),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 124.0],
    });

    // ========================================================================
    // Material
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "SET_MATERIAL".to_string(),
        label: "Set Material".to_string(),
        category: NodeCategory::Material,
        description: "Assign a material to geometry".to_string(),
        inputs: vec![
            Socket::input("Geometry", "Geometry", SocketType::Geometry),
            Socket::input("Selection", "Selection", SocketType::Boolean)
                .with_default(SocketValue::Boolean(true))
                .with_shape(DisplayShape::DiamondDot),
            Socket::input("Material", "Material", SocketType::Material),
        ],
        outputs: vec![Socket::output("Geometry", "Geometry", SocketType::Geometry)],
        default_params: NodeParams::None,
        dimensions: [140.0, 100.0],
    });

    // ========================================================================
    // Group / Output
    // ========================================================================

    registry.register(NodeSpec {
        type_tag: "GROUP_INPUT".to_string(),
        label: "Group Input".to_string(),
        category: NodeCategory::Group,
        description: "Values exposed on the group interface".to_string(),
        inputs: vec![],
        outputs: vec![
            Socket::output("Value", "Value", SocketType::Value).with_default(SocketValue::Float(0.0)),
        ],
        default_params: NodeParams::None,
        dimensions: [140.0, 76.0],
    });

    registry.register(NodeSpec {
        type_tag: "GROUP_OUTPUT".to_string(),
        label: "Group Output".to_string(),
        category: NodeCategory::Group,
        description: "Result of the node group".to_string(),
        inputs: vec![Socket::input("Geometry", "Geometry", SocketType::Geometry)],
        outputs: vec![],
        default_params: NodeParams::None,
        dimensions: [140.0, 76.0],
    });

    registry.register(NodeSpec {
        type_tag: "VIEWER".to_string(),
        label: "Viewer".to_string(),
        category: NodeCategory::Output,
        description: "Preview geometry while editing".to_string(),
        inputs: vec![Socket::input("Geometry", "Geometry", SocketType::Geometry)],
        outputs: vec![],
        default_params: NodeParams::None,
        dimensions: [140.0, 52.0],
    });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: &[&str] = &[
        "VALUE",
        "INPUT_VECTOR",
        "INDEX",
        "MATH",
        "MAP_RANGE",
        "VECT_MATH",
        "COMBXYZ",
        "SEPXYZ",
        "POINTS",
        "INSTANCE_ON_POINTS",
        "CURVE_PRIMITIVE_CIRCLE",
        "CURVE_PRIMITIVE_QUADRILATERAL",
        "CURVE_TO_MESH",
        "FILLET_CURVE",
        "MESH_PRIMITIVE_CUBE",
        "MESH_PRIMITIVE_CYLINDER",
        "MESH_PRIMITIVE_UV_SPHERE",
        "MESH_PRIMITIVE_GRID",
        "JOIN_GEOMETRY",
        "TRANSFORM_GEOMETRY",
        "BOUNDING_BOX",
        "SET_MATERIAL",
        "GROUP_INPUT",
        "GROUP_OUTPUT",
        "VIEWER",
    ];

    #[test]
    fn test_all_types_registered() {
        let registry = geometry_registry();
        for tag in ALL_TYPES {
            assert!(registry.get(tag).is_some(), "missing {tag}");
        }
        assert_eq!(registry.specs().count(), ALL_TYPES.len());
    }

    #[test]
    fn test_identifiers_unique_per_direction() {
        let registry = geometry_registry();
        for spec in registry.specs() {
            for sockets in [&spec.inputs, &spec.outputs] {
                for (i, a) in sockets.iter().enumerate() {
                    for b in &sockets[..i] {
                        assert_ne!(
                            a.identifier, b.identifier,
                            "duplicate identifier in {}",
                            spec.type_tag
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_defaults_match_socket_types() {
        let registry = geometry_registry();
        for spec in registry.specs() {
            for socket in spec.inputs.iter().chain(spec.outputs.iter()) {
                if let Some(value) = &socket.default_value {
                    assert_eq!(
                        value.socket_type(),
                        socket.socket_type,
                        "default type mismatch on {}/{}",
                        spec.type_tag,
                        socket.identifier
                    );
                }
                if matches!(socket.socket_type, SocketType::Geometry | SocketType::Material) {
                    assert!(socket.default_value.is_none());
                }
            }
        }
    }

    #[test]
    fn test_math_spec() {
        let registry = geometry_registry();
        let spec = registry.get("MATH").unwrap();
        let identifiers: Vec<&str> = spec.inputs.iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(identifiers, ["Value", "Value_001", "Value_002"]);
        assert!(matches!(
            spec.default_params,
            NodeParams::Math { operation: MathOperation::Add, use_clamp: false }
        ));
    }

    #[test]
    fn test_join_geometry_is_multi_input() {
        let registry = geometry_registry();
        let join = registry.get("JOIN_GEOMETRY").unwrap();
        assert!(join.inputs[0].multi_input);

        // The only one in the catalog
        for spec in registry.specs() {
            for socket in &spec.inputs {
                if socket.multi_input {
                    assert_eq!(spec.type_tag, "JOIN_GEOMETRY");
                }
            }
        }
    }

    #[test]
    fn test_group_interface_directions() {
        let registry = geometry_registry();
        assert!(registry.get("GROUP_INPUT").unwrap().inputs.is_empty());
        assert!(registry.get("GROUP_OUTPUT").unwrap().outputs.is_empty());
        assert!(registry.get("VIEWER").unwrap().outputs.is_empty());
    }
}
