//! Lightweight mutable view over a parsed ONNX graph
//!
//! The emitter needs two things the raw protobuf does not offer: per-node
//! input overrides (the peephole rewriter redirects a MatMul input) and a
//! `collapsed` marker for fused-away nodes. Building this view keeps the
//! conversion purely functional with respect to the decoded model.

use crate::error::{ConvertError, Result};
use crate::ops::Op;
use crate::proto::{AttributeProto, GraphProto, ModelProto, NodeProto, TensorProto};

/// One node of the source graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Operator, drawn from the closed vocabulary
    pub op: Op,
    /// Layer name; falls back to the first output when the node is unnamed
    pub name: String,
    /// Input value-names, rewritable by the fusion pass
    pub inputs: Vec<String>,
    /// Output value-names
    pub outputs: Vec<String>,
    /// Fused away; the emitter skips collapsed nodes
    pub collapsed: bool,
    attributes: Vec<AttributeProto>,
}

impl Node {
    fn from_proto(node: &NodeProto) -> Result<Self> {
        let op = Op::from_symbol(&node.op_type)
            .ok_or_else(|| ConvertError::UnsupportedOp(node.op_type.clone()))?;

        let name = if node.name.is_empty() {
            node.output.first().cloned().unwrap_or_default()
        } else {
            node.name.clone()
        };

        Ok(Self {
            op,
            name,
            inputs: node.input.clone(),
            outputs: node.output.clone(),
            collapsed: false,
            attributes: node.attribute.clone(),
        })
    }

    fn attribute(&self, key: &str) -> Option<&AttributeProto> {
        self.attributes.iter().find(|attr| attr.name == key)
    }

    /// Integer attribute with a caller-supplied default
    pub fn attr_i(&self, key: &str, default: i64) -> i64 {
        self.attribute(key).map_or(default, |attr| attr.i)
    }

    /// Float attribute with a caller-supplied default
    pub fn attr_f(&self, key: &str, default: f32) -> f32 {
        self.attribute(key).map_or(default, |attr| attr.f)
    }

    /// String attribute, empty when absent
    pub fn attr_s(&self, key: &str) -> String {
        self.attribute(key)
            .map(|attr| String::from_utf8_lossy(&attr.s).into_owned())
            .unwrap_or_default()
    }

    /// List-of-integer attribute, narrowed to i32
    pub fn attr_ai(&self, key: &str) -> Vec<i32> {
        self.attribute(key)
            .map(|attr| attr.ints.iter().map(|&v| v as i32).collect())
            .unwrap_or_default()
    }

    /// List-of-float attribute
    pub fn attr_af(&self, key: &str) -> Vec<f32> {
        self.attribute(key).map(|attr| attr.floats.clone()).unwrap_or_default()
    }

    /// Tensor attribute
    pub fn attr_tensor(&self, key: &str) -> Option<TensorProto> {
        self.attribute(key).and_then(|attr| attr.t.clone())
    }

    /// First output name, empty for output-less nodes
    pub fn output0(&self) -> &str {
        self.outputs.first().map(String::as_str).unwrap_or("")
    }
}

/// The source graph as consumed by the conversion pipeline
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    /// Graph input names in declaration order (may be covered by initializers)
    pub input_names: Vec<String>,
    /// Named weight tensors
    pub initializers: Vec<TensorProto>,
}

impl Graph {
    /// Build the view from a decoded model
    ///
    /// Fails on any node whose operator is outside the supported vocabulary.
    pub fn from_model(model: &ModelProto) -> Result<Self> {
        let graph = model.graph.clone().unwrap_or_default();
        Self::from_graph_proto(&graph)
    }

    pub fn from_graph_proto(graph: &GraphProto) -> Result<Self> {
        let nodes = graph.node.iter().map(Node::from_proto).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            nodes,
            input_names: graph.input.iter().map(|v| v.name.clone()).collect(),
            initializers: graph.initializer.clone(),
        })
    }
}
