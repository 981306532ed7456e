//! Phase 2: transpose→matmul peephole
//!
//! The single graph rewrite: a `Transpose(weight, perm=[1,0])` whose only
//! consumer is the directly following `MatMul` is collapsed by transposing
//! the weight payload in place and pointing the MatMul at the weight name.
//! A precondition mismatch skips the rewrite; the pass cannot fail.

use tracing::debug;

use crate::classify::GraphInfo;
use crate::graph::Graph;
use crate::ops::Op;
use crate::tensor;

/// Collapse every eligible Transpose/MatMul pair, returning how many fused
pub fn fuse_transpose_matmul(graph: &mut Graph, info: &mut GraphInfo) -> usize {
    let mut reduced = 0;
    let mut i = 0;

    while i < graph.nodes.len() {
        if !transpose_feeds_matmul(graph, info, i) {
            i += 1;
            continue;
        }

        let weight_name = graph.nodes[i].inputs[0].clone();
        let output_name = graph.nodes[i].output0().to_string();

        let weight = match info.weights.get_mut(&weight_name) {
            Some(w) => w,
            None => {
                i += 1;
                continue;
            }
        };
        let h = weight.dims[0] as usize;
        let w = weight.dims[1] as usize;

        let src = tensor::f32_data(weight);
        let mut permuted = Vec::with_capacity(h * w);
        for j in 0..w {
            for k in 0..h {
                permuted.push(src[k * w + j]);
            }
        }
        weight.dims = vec![w as i64, h as i64];
        tensor::set_f32_data(weight, &permuted);

        graph.nodes[i].collapsed = true;
        info.node_reference.remove(&output_name);
        info.blob_names.remove(&output_name);

        graph.nodes[i + 1].inputs[1] = weight_name.clone();

        debug!(weight = %weight_name, "collapsed Transpose into MatMul");
        reduced += 1;
        i += 2;
    }

    reduced
}

fn transpose_feeds_matmul(graph: &Graph, info: &GraphInfo, i: usize) -> bool {
    let node = &graph.nodes[i];
    if node.op != Op::Transpose || node.inputs.is_empty() || node.outputs.is_empty() {
        return false;
    }

    let weight = match info.weights.get(&node.inputs[0]) {
        Some(w) => w,
        None => return false,
    };
    if weight.dims.len() != 2 {
        return false;
    }
    let elems = weight.dims[0] as usize * weight.dims[1] as usize;
    if tensor::f32_data(weight).len() < elems {
        return false;
    }

    if info.node_reference.get(node.output0()).copied().unwrap_or(0) != 1 {
        return false;
    }

    if node.attr_ai("perm") != vec![1, 0] {
        return false;
    }

    match graph.nodes.get(i + 1) {
        Some(next) => next.op == Op::MatMul && next.inputs.len() >= 2,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::proto::{
        AttributeProto, GraphProto, NodeProto, TensorProto, ValueInfoProto, DATA_TYPE_FLOAT,
    };

    fn transpose_matmul_graph(perm: &[i64]) -> Graph {
        let weight = TensorProto {
            name: "W".to_string(),
            dims: vec![2, 3],
            data_type: DATA_TYPE_FLOAT,
            float_data: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            ..Default::default()
        };
        let transpose = NodeProto {
            input: vec!["W".to_string()],
            output: vec!["Wt".to_string()],
            op_type: "Transpose".to_string(),
            attribute: vec![AttributeProto {
                name: "perm".to_string(),
                ints: perm.to_vec(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let matmul = NodeProto {
            input: vec!["x".to_string(), "Wt".to_string()],
            output: vec!["y".to_string()],
            op_type: "MatMul".to_string(),
            ..Default::default()
        };
        let proto = GraphProto {
            node: vec![transpose, matmul],
            initializer: vec![weight],
            input: vec![ValueInfoProto { name: "x".to_string() }],
            ..Default::default()
        };
        Graph::from_graph_proto(&proto).unwrap()
    }

    #[test]
    fn test_fusion_transposes_weight_in_place() {
        let mut graph = transpose_matmul_graph(&[1, 0]);
        let mut info = classify(&graph);

        let reduced = fuse_transpose_matmul(&mut graph, &mut info);
        assert_eq!(reduced, 1);

        assert!(graph.nodes[0].collapsed);
        assert_eq!(graph.nodes[1].inputs[1], "W");
        assert!(!info.blob_names.contains("Wt"));
        assert!(!info.node_reference.contains_key("Wt"));

        let weight = info.weights.get("W").unwrap();
        assert_eq!(weight.dims, vec![3, 2]);
        // dst[j, k] = src[k, j]
        assert_eq!(
            tensor::f32_data(weight),
            vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]
        );
    }

    #[test]
    fn test_identity_perm_not_fused() {
        let mut graph = transpose_matmul_graph(&[0, 1]);
        let mut info = classify(&graph);

        let reduced = fuse_transpose_matmul(&mut graph, &mut info);
        assert_eq!(reduced, 0);
        assert!(!graph.nodes[0].collapsed);
    }

    #[test]
    fn test_runtime_transpose_not_fused() {
        // transpose of a runtime tensor must stay a Permute layer
        let mut graph = transpose_matmul_graph(&[1, 0]);
        let mut info = classify(&graph);
        info.weights.remove("W");

        let reduced = fuse_transpose_matmul(&mut graph, &mut info);
        assert_eq!(reduced, 0);
    }
}
