// SPDX-License-Identifier: MIT OR Apache-2.0
//! Value-level graph evaluation.
//!
//! Pull-based: evaluating an output socket recursively evaluates the
//! linked upstream outputs, falling back to input defaults when a
//! socket is unlinked. Only the scalar/vector node types evaluate;
//! geometry-producing nodes are out of scope here and report an
//! unsupported type.

use crate::node::{MathOperation, Node, NodeId, NodeParams, VectorMathOperation};
use crate::socket::SocketValue;
use crate::tree::NodeTree;
use std::collections::HashMap;

/// Ambient state for one evaluation pass
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalContext {
    /// Element index reported by the index node
    pub index: i32,
}

/// Error during evaluation
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Socket not found
    #[error("Socket not found: {0:?}")]
    SocketNotFound(String),

    /// Node type has no evaluator
    #[error("No evaluator for node type {0:?}")]
    UnsupportedType(String),

    /// Output exists but cannot be computed
    #[error("Output {socket:?} of {type_tag:?} is not evaluable")]
    UnsupportedOutput {
        /// Node type tag
        type_tag: String,
        /// Output identifier
        socket: String,
    },

    /// Unlinked input with no default value
    #[error("Input {0:?} is unlinked and has no default")]
    MissingDefault(String),

    /// Value has the wrong type for the consuming socket
    #[error("Type mismatch at {0:?}")]
    TypeMismatch(String),

    /// Dependency cycle
    #[error("Dependency cycle through {0:?}")]
    CycleDetected(String),
}

/// Demand-driven evaluator over one tree.
///
/// Results are memoized per (node, output) for the lifetime of the
/// evaluator, so shared upstream branches compute once.
pub struct Evaluator<'a> {
    tree: &'a NodeTree,
    ctx: EvalContext,
    cache: HashMap<(NodeId, String), SocketValue>,
    stack: Vec<NodeId>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with a default context
    pub fn new(tree: &'a NodeTree) -> Self {
        Self {
            tree,
            ctx: EvalContext::default(),
            cache: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Set the ambient context
    pub fn with_context(mut self, ctx: EvalContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Evaluate one output socket of a node
    pub fn evaluate(&mut self, node_id: NodeId, output: &str) -> Result<SocketValue, EvalError> {
        let key = (node_id, output.to_string());
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let node = self.tree.node(node_id).ok_or(EvalError::NodeNotFound(node_id))?;
        if node.output(output).is_none() {
            return Err(EvalError::SocketNotFound(output.to_string()));
        }
        if self.stack.contains(&node_id) {
            return Err(EvalError::CycleDetected(node.name.clone()));
        }

        self.stack.push(node_id);
        let result = self.evaluate_node(node, output);
        self.stack.pop();

        let value = result?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    fn evaluate_node(&mut self, node: &Node, output: &str) -> Result<SocketValue, EvalError> {
        match node.type_tag.as_str() {
            // Constants read directly from their own output socket
            "VALUE" | "INPUT_VECTOR" | "GROUP_INPUT" => node
                .output(output)
                .and_then(|s| s.default_value.clone())
                .ok_or_else(|| EvalError::MissingDefault(output.to_string())),

            "INDEX" => Ok(SocketValue::Int(self.ctx.index)),

            "MATH" => self.evaluate_math(node).map(SocketValue::Float),

            "VECT_MATH" => match output {
                "Vector" => self.evaluate_vector_math(node).map(SocketValue::Vector),
                _ => Err(EvalError::UnsupportedOutput {
                    type_tag: node.type_tag.clone(),
                    socket: output.to_string(),
                }),
            },

            "COMBXYZ" => {
                let x = self.input_float(node, "X")?;
                let y = self.input_float(node, "Y")?;
                let z = self.input_float(node, "Z")?;
                Ok(SocketValue::Vector([x, y, z]))
            }

            "SEPXYZ" => {
                let [x, y, z] = self.input_vector(node, "Vector")?;
                match output {
                    "X" => Ok(SocketValue::Float(x)),
                    "Y" => Ok(SocketValue::Float(y)),
                    "Z" => Ok(SocketValue::Float(z)),
                    _ => Err(EvalError::SocketNotFound(output.to_string())),
                }
            }

            "MAP_RANGE" => {
                let from_min = self.input_float(node, "From Min")?;
                let from_max = self.input_float(node, "From Max")?;
                let to_min = self.input_float(node, "To Min")?;
                let to_max = self.input_float(node, "To Max")?;
                let value = self.input_float(node, "Value")?;
                let factor = (value - from_min) / (from_max - from_min);
                Ok(SocketValue::Float(to_min + factor * (to_max - to_min)))
            }

            other => Err(EvalError::UnsupportedType(other.to_string())),
        }
    }

    fn evaluate_math(&mut self, node: &Node) -> Result<f32, EvalError> {
        let (operation, use_clamp) = match node.params {
            NodeParams::Math { operation, use_clamp } => (operation, use_clamp),
            _ => (MathOperation::default(), false),
        };

        let result = match operation {
            MathOperation::Add => self.math_binary(node, |a, b| a + b)?,
            MathOperation::Subtract => self.math_binary(node, |a, b| a - b)?,
            MathOperation::Multiply => self.math_binary(node, |a, b| a * b)?,
            MathOperation::Divide => self.math_binary(node, |a, b| a / b)?,
            MathOperation::MultiplyAdd => {
                let a = self.input_float(node, "Value")?;
                let b = self.input_float(node, "Value_001")?;
                let c = self.input_float(node, "Value_002")?;
                a * b + c
            }
            MathOperation::Power => self.math_binary(node, f32::powf)?,
            MathOperation::Logarithm => self.math_binary(node, |a, b| a.ln() / b.ln())?,
            MathOperation::Minimum => self.math_binary(node, f32::min)?,
            MathOperation::Maximum => self.math_binary(node, f32::max)?,
            MathOperation::Modulo => self.math_binary(node, |a, b| a % b)?,
            MathOperation::Sqrt => self.input_float(node, "Value")?.sqrt(),
            MathOperation::InverseSqrt => 1.0 / self.input_float(node, "Value")?.sqrt(),
            MathOperation::Absolute => self.input_float(node, "Value")?.abs(),
            MathOperation::Exponent => self.input_float(node, "Value")?.exp(),
            MathOperation::Floor => self.input_float(node, "Value")?.floor(),
            MathOperation::Sine => self.input_float(node, "Value")?.sin(),
            MathOperation::Cosine => self.input_float(node, "Value")?.cos(),
            MathOperation::Radians => self.input_float(node, "Value")?.to_radians(),
        };

        Ok(if use_clamp { result.clamp(0.0, 1.0) } else { result })
    }

    fn math_binary(
        &mut self,
        node: &Node,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<f32, EvalError> {
        let a = self.input_float(node, "Value")?;
        let b = self.input_float(node, "Value_001")?;
        Ok(f(a, b))
    }

    fn evaluate_vector_math(&mut self, node: &Node) -> Result<[f32; 3], EvalError> {
        let operation = match node.params {
            NodeParams::VectorMath { operation } => operation,
            _ => VectorMathOperation::default(),
        };

        let a = self.input_vector(node, "Vector")?;
        match operation {
            VectorMathOperation::Add => {
                let b = self.input_vector(node, "Vector_001")?;
                Ok([a[0] + b[0], a[1] + b[1], a[2] + b[2]])
            }
            VectorMathOperation::Subtract => {
                let b = self.input_vector(node, "Vector_001")?;
                Ok([a[0] - b[0], a[1] - b[1], a[2] - b[2]])
            }
            VectorMathOperation::Multiply => {
                let b = self.input_vector(node, "Vector_001")?;
                Ok([a[0] * b[0], a[1] * b[1], a[2] * b[2]])
            }
            VectorMathOperation::Divide => {
                let b = self.input_vector(node, "Vector_001")?;
                Ok([a[0] / b[0], a[1] / b[1], a[2] / b[2]])
            }
            VectorMathOperation::Scale => {
                let scale = self.input_float(node, "Scale")?;
                Ok([a[0] * scale, a[1] * scale, a[2] * scale])
            }
        }
    }

    /// Read an input: the first incoming link wins, else the default.
    fn input_value(&mut self, node: &Node, identifier: &str) -> Result<SocketValue, EvalError> {
        let socket = node
            .input(identifier)
            .ok_or_else(|| EvalError::SocketNotFound(identifier.to_string()))?;

        let upstream = self
            .tree
            .links_into(node.id, identifier)
            .next()
            .map(|l| (l.from_node, l.from_socket.clone()));
        if let Some((from_node, from_socket)) = upstream {
            return self.evaluate(from_node, &from_socket);
        }

        socket
            .default_value
            .clone()
            .ok_or_else(|| EvalError::MissingDefault(identifier.to_string()))
    }

    fn input_float(&mut self, node: &Node, identifier: &str) -> Result<f32, EvalError> {
        self.input_value(node, identifier)?
            .as_float()
            .ok_or_else(|| EvalError::TypeMismatch(identifier.to_string()))
    }

    fn input_vector(&mut self, node: &Node, identifier: &str) -> Result<[f32; 3], EvalError> {
        self.input_value(node, identifier)?
            .as_vector()
            .ok_or_else(|| EvalError::TypeMismatch(identifier.to_string()))
    }
}
