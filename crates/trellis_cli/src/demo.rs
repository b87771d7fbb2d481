// SPDX-License-Identifier: MIT OR Apache-2.0
//! Starter scene content for `trellis init`.

use trellis_graph::{
    geometry_registry, MathOperation, NodeParams, NodeTree, SocketValue,
};

/// Builds the tree written into fresh scenes.
///
/// A value is doubled, fanned out into a vector, and used to translate
/// a cube on its way to the group output.
pub fn starter_tree() -> NodeTree {
    let registry = geometry_registry();
    let mut tree = NodeTree::new("Geometry Nodes");

    // Every tag below is part of the built-in catalog.
    let value = tree.add_node(
        registry
            .create_node("VALUE")
            .unwrap()
            .with_location([-600.0, 40.0]),
    );

    let mut double = registry
        .create_node("MATH")
        .unwrap()
        .with_params(NodeParams::Math {
            operation: MathOperation::Multiply,
            use_clamp: false,
        })
        .with_location([-420.0, 40.0]);
    if let Some(socket) = double.input_mut("Value_001") {
        socket.default_value = Some(SocketValue::Float(2.0));
    }
    let double = tree.add_node(double);

    let combine = tree.add_node(
        registry
            .create_node("COMBXYZ")
            .unwrap()
            .with_location([-240.0, 40.0]),
    );
    let cube = tree.add_node(
        registry
            .create_node("MESH_PRIMITIVE_CUBE")
            .unwrap()
            .with_location([-420.0, -180.0]),
    );
    let transform = tree.add_node(
        registry
            .create_node("TRANSFORM_GEOMETRY")
            .unwrap()
            .with_location([-40.0, -60.0]),
    );
    let output = tree.add_node(
        registry
            .create_node("GROUP_OUTPUT")
            .unwrap()
            .with_location([160.0, -60.0]),
    );

    tree.connect(value, "Value", double, "Value").unwrap();
    tree.connect(double, "Value", combine, "X").unwrap();
    tree.connect(double, "Value", combine, "Y").unwrap();
    tree.connect(double, "Value", combine, "Z").unwrap();
    tree.connect(cube, "Mesh", transform, "Geometry").unwrap();
    tree.connect(combine, "Vector", transform, "Translation")
        .unwrap();
    tree.connect(transform, "Geometry", output, "Geometry")
        .unwrap();

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_graph::Evaluator;

    #[test]
    fn test_starter_tree_shape() {
        let tree = starter_tree();
        assert_eq!(tree.name, "Geometry Nodes");
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.link_count(), 7);
        assert!(tree.node_by_name("Transform").is_some());
    }

    #[test]
    fn test_starter_tree_evaluates() {
        let tree = starter_tree();
        let combine = tree.node_by_name("Combine XYZ").unwrap();
        let mut evaluator = Evaluator::new(&tree);
        let value = evaluator.evaluate(combine.id, "Vector").unwrap();
        assert_eq!(value, SocketValue::Vector([1.0, 1.0, 1.0]));
    }
}
