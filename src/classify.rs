//! Phase 1: classifier / constant-folder
//!
//! One pass over the node list that partitions every value-name into either
//! a runtime tensor or a conversion-time weight, propagating weights across
//! `Constant` and weight-fed `Reshape`. Weights feeding `Add`/`Mul` move to
//! a separate bucket because those must surface as MemoryData layers rather
//! than fold away. The classifier never fails.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::Graph;
use crate::ops::Op;
use crate::proto::TensorProto;
use crate::tensor;

/// Classification maps consumed by the rewriter and the emitter
#[derive(Default)]
pub struct GraphInfo {
    /// Value-name → tensor for every value fixed at conversion time
    pub weights: FxHashMap<String, TensorProto>,

    /// Weights feeding an element-wise binary operator; emitted as layers
    pub binaryop_weights: FxHashMap<String, TensorProto>,

    /// Runtime consumer count per value-name
    pub node_reference: FxHashMap<String, i32>,

    /// All runtime value-names
    pub blob_names: FxHashSet<String>,

    /// Graph inputs that become Input layers
    pub input_node_count: usize,
}

/// Classify every edge of the graph
pub fn classify(graph: &Graph) -> GraphInfo {
    let mut info = GraphInfo::default();

    for init in &graph.initializers {
        info.weights.insert(init.name.clone(), init.clone());
    }

    for node in &graph.nodes {
        match node.op {
            Op::Constant => {
                let tensor = node.attr_tensor("value").unwrap_or_default();
                info.weights.insert(node.output0().to_string(), tensor);
                continue;
            }
            Op::Reshape if matches!(node.inputs.len(), 1 | 2) => {
                let data_input = &node.inputs[0];
                if let Some(weight) = info.weights.get(data_input).cloned() {
                    let mut folded = weight;
                    if node.inputs.len() == 2 {
                        // opset-5 form: shape comes from a second weight
                        if let Some(shape_tp) = info.weights.get(&node.inputs[1]) {
                            folded.dims = tensor::i64_data(shape_tp);
                        }
                    }
                    info.weights.insert(node.output0().to_string(), folded);
                    continue;
                }
            }
            op if op.folds_binary_weights() => {
                // binary op with weight: promote back to a runtime edge
                for input_name in &node.inputs {
                    if let Some(weight) = info.weights.remove(input_name) {
                        info.binaryop_weights.insert(input_name.clone(), weight);
                    }
                }
            }
            _ => {}
        }

        for input_name in &node.inputs {
            if info.weights.contains_key(input_name) {
                continue;
            }
            info.blob_names.insert(input_name.clone());
            *info.node_reference.entry(input_name.clone()).or_insert(0) += 1;
        }

        if node.op == Op::Dropout {
            // extra outputs (mask) are dropped, only the data output survives
            info.blob_names.insert(node.output0().to_string());
            continue;
        }

        for output_name in &node.outputs {
            info.blob_names.insert(output_name.clone());
        }
    }

    for input_name in &graph.input_names {
        if info.weights.contains_key(input_name) || info.binaryop_weights.contains_key(input_name)
        {
            continue;
        }
        info.blob_names.insert(input_name.clone());
        info.input_node_count += 1;
    }

    info
}
