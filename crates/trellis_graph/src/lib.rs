// SPDX-License-Identifier: MIT OR Apache-2.0
//! Geometry node-graph model for Trellis.
//!
//! This crate provides the in-memory graph that snapshots are taken
//! from:
//! - Typed sockets with identifiers, defaults and display shapes
//! - Nodes instantiated from a registry of type definitions
//! - Trees with host-style unique naming and link management
//! - Value-level evaluation of scalar/vector subgraphs
//! - Scene files holding multiple named trees
//!
//! ## Architecture
//!
//! A [`Scene`] owns named [`NodeTree`]s; each tree owns [`Node`]s and
//! the [`Link`]s between their sockets. The [`geometry_registry`]
//! catalog defines the node set with the host's socket layout, so
//! trees built here mirror what the host application would hold.

pub mod node;
pub mod socket;
pub mod link;
pub mod tree;
pub mod geometry;
pub mod evaluation;
pub mod scene;

pub use node::{
    FilletMode, MathOperation, Node, NodeCategory, NodeId, NodeParams, NodeRegistry, NodeSpec,
    VectorMathOperation, DEFAULT_NODE_COLOR,
};
pub use socket::{DisplayShape, Socket, SocketType, SocketValue};
pub use link::{Link, LinkId};
pub use tree::{ConnectError, NodeTree};
pub use geometry::geometry_registry;
pub use evaluation::{EvalContext, EvalError, Evaluator};
pub use scene::{Scene, SceneError, SCENE_FILE_NAME};
