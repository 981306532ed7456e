//! Phase 3: param/blob emitter
//!
//! Walks the rewritten graph in source order and produces the two output
//! buffers: the line-oriented param text and the raw little-endian blob.
//! Layer lines are buffered first so the header can carry the number of
//! layers actually written rather than a derived formula.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;

use crate::classify::GraphInfo;
use crate::error::{ConvertError, Result};
use crate::graph::{Graph, Node};
use crate::ops::Op;
use crate::proto::TensorProto;
use crate::tensor::{self, BlobWriter};

/// Magic first line of every ncnn param file
const PARAM_MAGIC: &str = "7767517";

/// Sentinel pad value for SAME_LOWER/SAME_UPPER auto padding
const PAD_SAME: i32 = -233;

/// The two translated output buffers
#[derive(Debug)]
pub struct NcnnModel {
    /// UTF-8 param text
    pub param: Vec<u8>,
    /// Raw little-endian weight payloads
    pub bin: Vec<u8>,
}

/// Counts reported after a successful emission
#[derive(Debug, Clone, Copy)]
pub struct EmitStats {
    pub layer_count: usize,
    pub blob_count: usize,
}

/// Layer-line writer with the fixed param-file field widths
///
/// Layer kind is left-justified to 16 columns and the layer name to 24,
/// numeric parameters are `key=value` tokens.
struct ParamWriter {
    buf: String,
    layer_count: usize,
}

impl ParamWriter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            layer_count: 0,
        }
    }

    fn begin_layer(&mut self, kind: &str, name: &str, input_size: usize, output_size: usize) {
        write!(self.buf, "{:<16} {:<24} {} {}", kind, name, input_size, output_size).unwrap();
        self.layer_count += 1;
    }

    fn blob(&mut self, name: &str) {
        write!(self.buf, " {}", name).unwrap();
    }

    fn int(&mut self, key: i32, value: i32) {
        write!(self.buf, " {}={}", key, value).unwrap();
    }

    fn float(&mut self, key: i32, value: f32) {
        write!(self.buf, " {}={:.6}", key, value).unwrap();
    }

    fn end_layer(&mut self) {
        self.buf.push('\n');
    }
}

/// Emit the translated model
pub fn emit(graph: &Graph, info: &mut GraphInfo) -> Result<(NcnnModel, EmitStats)> {
    // fan-out bookkeeping: values with more than one runtime consumer get a
    // Split layer; consumers take split outputs from the highest index down
    let mut split_refs: FxHashMap<String, i32> = info
        .node_reference
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(name, &count)| (name.clone(), count))
        .collect();
    let split_blob_count: usize = split_refs.values().map(|&c| c as usize).sum();
    let blob_count = info.blob_names.len() + split_blob_count;

    let mut pp = ParamWriter::new();
    let mut bv = BlobWriter::new();

    emit_inputs(graph, info, &split_refs, &mut pp);
    emit_input_weights(graph, info, &mut pp, &mut bv);

    let mut internal_split = 0;
    for node in &graph.nodes {
        if node.collapsed {
            continue;
        }
        emit_node(node, info, &mut split_refs, &mut internal_split, &mut pp, &mut bv)?;
    }

    let stats = EmitStats {
        layer_count: pp.layer_count,
        blob_count,
    };

    let param = format!("{}\n{} {}\n{}", PARAM_MAGIC, stats.layer_count, blob_count, pp.buf);

    Ok((
        NcnnModel {
            param: param.into_bytes(),
            bin: bv.into_bytes(),
        },
        stats,
    ))
}

/// One Input layer per non-weight graph input, plus its Split on fan-out
fn emit_inputs(
    graph: &Graph,
    info: &GraphInfo,
    split_refs: &FxHashMap<String, i32>,
    pp: &mut ParamWriter,
) {
    for (j, input_name) in graph.input_names.iter().enumerate() {
        if info.weights.contains_key(input_name) || info.binaryop_weights.contains_key(input_name)
        {
            continue;
        }

        pp.begin_layer("Input", input_name, 0, 1);
        pp.blob(input_name);
        pp.end_layer();

        if let Some(&refcount) = split_refs.get(input_name) {
            let split_name = format!("splitncnn_input{}", j);
            pp.begin_layer("Split", &split_name, 1, refcount as usize);
            pp.blob(input_name);
            for k in 0..refcount {
                pp.blob(&format!("{}_splitncnn_{}", input_name, k));
            }
            pp.end_layer();
        }
    }
}

/// MemoryData layers for binary-op weights declared as graph inputs
fn emit_input_weights(graph: &Graph, info: &GraphInfo, pp: &mut ParamWriter, bv: &mut BlobWriter) {
    for input_name in &graph.input_names {
        let weight = match info.binaryop_weights.get(input_name) {
            Some(w) => w,
            None => continue,
        };

        pp.begin_layer("MemoryData", input_name, 0, 1);
        pp.blob(input_name);
        memory_data_shape(weight, pp);
        pp.end_layer();

        bv.put_tensor(weight);
    }
}

/// Shape keys for a MemoryData layer: last axis first (w, h, c)
fn memory_data_shape(weight: &TensorProto, pp: &mut ParamWriter) {
    let dims = &weight.dims;
    match dims.len() {
        1 => pp.int(0, dims[0] as i32),
        2 => {
            pp.int(0, dims[1] as i32);
            pp.int(1, dims[0] as i32);
        }
        3 => {
            pp.int(0, dims[2] as i32);
            pp.int(1, dims[1] as i32);
            pp.int(2, dims[0] as i32);
        }
        4 => {
            pp.int(0, dims[3] as i32);
            pp.int(1, dims[2] as i32);
            pp.int(2, dims[1] as i32);
        }
        _ => {}
    }
}

fn emit_node(
    node: &Node,
    info: &GraphInfo,
    split_refs: &mut FxHashMap<String, i32>,
    internal_split: &mut usize,
    pp: &mut ParamWriter,
    bv: &mut BlobWriter,
) -> Result<()> {
    // folded constants and weight reshapes produce no layer
    if node.op == Op::Constant && !info.binaryop_weights.contains_key(node.output0()) {
        return Ok(());
    }
    if node.op == Op::Reshape
        && matches!(node.inputs.len(), 1 | 2)
        && info.weights.contains_key(&node.inputs[0])
    {
        return Ok(());
    }

    let kind = layer_kind(node)?;

    let input_size = node
        .inputs
        .iter()
        .filter(|name| !info.weights.contains_key(*name))
        .count();
    let output_size = if node.op == Op::Dropout { 1 } else { node.outputs.len() };

    pp.begin_layer(kind, &node.name, input_size, output_size);

    for input_name in &node.inputs {
        if info.weights.contains_key(input_name) {
            continue;
        }
        match split_refs.get_mut(input_name) {
            Some(refidx) => {
                *refidx -= 1;
                pp.blob(&format!("{}_splitncnn_{}", input_name, refidx));
            }
            None => pp.blob(input_name),
        }
    }
    for output_name in node.outputs.iter().take(output_size) {
        pp.blob(output_name);
    }

    emit_params(node, info, pp, bv)?;
    pp.end_layer();

    for output_name in node.outputs.iter().take(output_size) {
        let refcount = match split_refs.get(output_name) {
            Some(&c) if c > 1 => c,
            _ => continue,
        };

        let split_name = format!("splitncnn_{}", internal_split);
        pp.begin_layer("Split", &split_name, 1, refcount as usize);
        pp.blob(output_name);
        for k in 0..refcount {
            pp.blob(&format!("{}_splitncnn_{}", output_name, k));
        }
        pp.end_layer();
        *internal_split += 1;
    }

    Ok(())
}

/// ncnn layer kind for a surviving node
fn layer_kind(node: &Node) -> Result<&'static str> {
    let kind = match node.op {
        Op::Abs
        | Op::Acos
        | Op::Asin
        | Op::Atan
        | Op::Ceil
        | Op::Cos
        | Op::Exp
        | Op::Floor
        | Op::Log
        | Op::Neg
        | Op::Reciprocal
        | Op::Sin
        | Op::Sqrt
        | Op::Tan => "UnaryOp",
        Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Max | Op::Min | Op::Pow => "BinaryOp",
        Op::Sum => "Eltwise",
        Op::AveragePool | Op::MaxPool | Op::GlobalAveragePool | Op::GlobalMaxPool => "Pooling",
        Op::BatchNormalization => "BatchNorm",
        Op::Clip => "Clip",
        Op::Concat => "Concat",
        Op::Constant => "MemoryData",
        Op::Conv => {
            if node.attr_i("group", 1) > 1 {
                "ConvolutionDepthWise"
            } else {
                "Convolution"
            }
        }
        Op::ConvTranspose => {
            if node.attr_i("group", 1) > 1 {
                "DeconvolutionDepthWise"
            } else {
                "Deconvolution"
            }
        }
        Op::Dropout => "Dropout",
        Op::Elu => "ELU",
        Op::Flatten => "Flatten",
        Op::Gemm => {
            // only the InnerProduct-like form A * B^T + C is expressible
            let alpha = node.attr_f("alpha", 1.0);
            let beta = node.attr_f("beta", 1.0);
            let trans_a = node.attr_i("transA", 0);
            let trans_b = node.attr_i("transB", 0);
            if alpha != 1.0 || beta != 1.0 || trans_a != 0 || trans_b != 1 {
                return Err(ConvertError::GemmForm);
            }
            "InnerProduct"
        }
        Op::ImageScaler => "Scale",
        Op::InstanceNormalization => "InstanceNorm",
        Op::LeakyRelu | Op::Relu => "ReLU",
        Op::Lrn => "LRN",
        Op::MatMul => "InnerProduct",
        Op::Pad => "Padding",
        Op::PRelu => "PReLU",
        Op::Reshape => "Reshape",
        Op::Sigmoid => "Sigmoid",
        Op::Slice => "Crop",
        Op::Softmax => "Softmax",
        Op::Transpose => "Permute",
        Op::Upsample | Op::Resize => "Interp",
    };
    Ok(kind)
}

fn weight<'a>(info: &'a GraphInfo, name: &str) -> Result<&'a TensorProto> {
    info.weights
        .get(name)
        .ok_or_else(|| ConvertError::MissingWeight(name.to_string()))
}

fn input_weight<'a>(info: &'a GraphInfo, node: &Node, idx: usize) -> Result<&'a TensorProto> {
    let name = node.inputs.get(idx).ok_or_else(|| {
        ConvertError::InvalidAttribute(format!("{} is missing input {}", node.name, idx))
    })?;
    weight(info, name)
}

/// Per-operator parameter keys and weight payload streaming
fn emit_params(node: &Node, info: &GraphInfo, pp: &mut ParamWriter, bv: &mut BlobWriter) -> Result<()> {
    if let Some(op_type) = node.op.unary_op_type() {
        pp.int(0, op_type);
        return Ok(());
    }
    if let Some(op_type) = node.op.binary_op_type() {
        pp.int(0, op_type);
        return Ok(());
    }

    match node.op {
        Op::AveragePool | Op::MaxPool => {
            let auto_pad = node.attr_s("auto_pad");
            let kernel_shape = node.attr_ai("kernel_shape");
            let strides = node.attr_ai("strides");
            let pads = node.attr_ai("pads");

            let pool = if node.op == Op::AveragePool { 1 } else { 0 };
            let pad_mode = if auto_pad == "SAME_LOWER" || auto_pad == "SAME_UPPER" { 2 } else { 1 };

            pp.int(0, pool);

            match kernel_shape.len() {
                1 => pp.int(1, kernel_shape[0]),
                2 => {
                    pp.int(1, kernel_shape[1]);
                    pp.int(11, kernel_shape[0]);
                }
                _ => {}
            }
            match strides.len() {
                1 => pp.int(2, strides[0]),
                2 => {
                    pp.int(2, strides[1]);
                    pp.int(12, strides[0]);
                }
                _ => {}
            }
            match pads.len() {
                1 => pp.int(3, pads[0]),
                2 => {
                    pp.int(3, pads[1]);
                    pp.int(13, pads[0]);
                }
                4 => {
                    pp.int(3, pads[1]);
                    pp.int(13, pads[0]);
                    pp.int(14, pads[3]);
                    pp.int(15, pads[2]);
                }
                _ => {}
            }

            pp.int(5, pad_mode);
        }
        Op::GlobalAveragePool => {
            pp.int(0, 1);
            pp.int(4, 1);
        }
        Op::GlobalMaxPool => {
            pp.int(0, 0);
            pp.int(4, 1);
        }
        Op::BatchNormalization => {
            let epsilon = node.attr_f("epsilon", 1e-5);

            let scale = input_weight(info, node, 1)?;
            let bias = input_weight(info, node, 2)?;
            let mean = input_weight(info, node, 3)?;
            let var = input_weight(info, node, 4)?;

            let channels = tensor::data_len(scale);
            pp.int(0, channels as i32);

            bv.put_tensor(scale);
            bv.put_tensor(mean);
            for v in tensor::f32_data(var).iter().take(channels) {
                bv.put_f32(v + epsilon);
            }
            bv.put_tensor(bias);
        }
        Op::Clip => {
            pp.float(0, node.attr_f("min", -f32::MAX));
            pp.float(1, node.attr_f("max", f32::MAX));
        }
        Op::Concat => {
            // the target format has no batch axis
            let axis = node.attr_i("axis", 1);
            pp.int(0, axis as i32 - 1);
        }
        Op::Constant => {
            // reached only for binary-op weights
            if let Some(m) = info.binaryop_weights.get(node.output0()) {
                memory_data_shape(m, pp);
                bv.put_tensor(m);
            }
        }
        Op::Conv | Op::ConvTranspose => emit_convolution(node, info, pp, bv)?,
        Op::Flatten => {
            let axis = node.attr_i("axis", 1);
            if axis != 1 {
                return Err(ConvertError::FlattenAxis(axis));
            }
        }
        Op::Elu => {
            pp.float(0, node.attr_f("alpha", 1.0));
        }
        Op::Gemm => {
            // restricted form, validated when the layer kind was chosen
            let b = input_weight(info, node, 1)?;
            let c = input_weight(info, node, 2)?;

            pp.int(0, tensor::data_len(c) as i32);
            pp.int(1, 1);
            pp.int(2, tensor::data_len(b) as i32);

            bv.put_i32(0);
            bv.put_tensor(b);
            bv.put_tensor(c);
        }
        Op::ImageScaler => {
            let bias = node.attr_af("bias");
            let scale = node.attr_f("scale", 1.0);
            let channels = bias.len();

            pp.int(0, channels as i32);
            pp.int(1, 1);

            for _ in 0..channels {
                bv.put_f32(scale);
            }
            bv.put_f32_slice(&bias);
        }
        Op::InstanceNormalization => {
            let epsilon = node.attr_f("epsilon", 1e-5);
            let scale = input_weight(info, node, 1)?;
            let bias = input_weight(info, node, 2)?;

            pp.int(0, tensor::data_len(scale) as i32);
            pp.float(1, epsilon);
            bv.put_tensor(scale);
            bv.put_tensor(bias);
        }
        Op::LeakyRelu => {
            pp.float(0, node.attr_f("alpha", 0.01));
        }
        Op::Lrn => {
            pp.int(0, 0);
            pp.int(1, node.attr_i("size", 1) as i32);
            pp.float(2, node.attr_f("alpha", 1.0));
            pp.float(3, node.attr_f("beta", 0.5));
            pp.float(4, node.attr_f("bias", 1.0));
        }
        Op::MatMul => {
            let b = input_weight(info, node, 1)?;

            let weight_data_size = tensor::data_len(b);
            let num_output = b.dims.last().copied().unwrap_or(1) as usize;
            let num_input = weight_data_size / num_output.max(1);

            pp.int(0, num_output as i32);
            pp.int(1, 0);
            pp.int(2, weight_data_size as i32);

            bv.put_i32(0);

            // reorder num_input-num_output to num_output-num_input
            let data = tensor::f32_data(b);
            for j in 0..num_output {
                for k in 0..num_input {
                    bv.put_f32(data[k * num_output + j]);
                }
            }
        }
        Op::Pad => {
            let mode = node.attr_s("mode");
            let pads = node.attr_ai("pads");
            let value = node.attr_f("value", 0.0);

            let pad_type = match mode.as_str() {
                "" | "constant" => 0,
                "edge" => 1,
                _ => return Err(ConvertError::PadMode),
            };

            if pads.len() < 4 {
                return Err(ConvertError::InvalidAttribute("Pad pads".to_string()));
            }
            pp.int(0, pads[0]); // top
            pp.int(1, pads[2]); // bottom
            pp.int(2, pads[1]); // left
            pp.int(3, pads[3]); // right
            pp.int(4, pad_type);
            pp.float(5, value);
        }
        Op::PRelu => {
            let slope = input_weight(info, node, 1)?;
            pp.int(0, tensor::data_len(slope) as i32);
            bv.put_tensor(slope);
        }
        Op::Reshape => {
            let shape: Vec<i32> = if node.inputs.len() == 1 {
                node.attr_ai("shape")
            } else {
                node.inputs
                    .get(1)
                    .and_then(|name| info.weights.get(name))
                    .map(|tp| tensor::i64_data(tp).iter().map(|&v| v as i32).collect())
                    .unwrap_or_default()
            };

            match shape.len() {
                1 => pp.int(0, shape[0]),
                2 => pp.int(0, shape[1]),
                3 => {
                    pp.int(0, shape[2]);
                    pp.int(1, shape[1]);
                }
                4 => {
                    pp.int(0, shape[3]);
                    pp.int(1, shape[2]);
                    pp.int(2, shape[1]);
                }
                5 => {
                    pp.int(0, shape[4] * shape[3]);
                    pp.int(1, shape[2]);
                    pp.int(2, shape[1]);
                }
                _ => {}
            }
        }
        Op::Slice => {
            let starts = node.attr_ai("starts");
            let ends = node.attr_ai("ends");
            let steps = node.attr_ai("steps");

            if steps.iter().any(|&s| s != 1) {
                return Err(ConvertError::SliceStep);
            }

            let extent = |end: i32, start: i32| if end == -1 { -234 } else { end - start };

            let mut woffset = 0;
            let mut hoffset = 0;
            let mut coffset = 0;
            let mut outw = -233;
            let mut outh = -233;
            let mut outc = -233;

            match starts.len() {
                2 => {
                    woffset = starts[1];
                    outw = extent(ends[1], starts[1]);
                }
                3 => {
                    woffset = starts[2];
                    hoffset = starts[1];
                    outw = extent(ends[2], starts[2]);
                    outh = extent(ends[1], starts[1]);
                }
                4 => {
                    woffset = starts[3];
                    hoffset = starts[2];
                    coffset = starts[1];
                    outw = extent(ends[3], starts[3]);
                    outh = extent(ends[2], starts[2]);
                    outc = extent(ends[1], starts[1]);
                }
                _ => {}
            }

            pp.int(0, woffset);
            pp.int(1, hoffset);
            pp.int(2, coffset);
            pp.int(3, outw);
            pp.int(4, outh);
            pp.int(5, outc);
        }
        Op::Sum => {
            // eltwise operation type: sum
            pp.int(0, 1);
        }
        Op::Softmax => {
            let axis = node.attr_i("axis", 1);
            pp.int(0, axis as i32 - 1);
            pp.int(1, 1);
        }
        Op::Transpose => {
            let perm = node.attr_ai("perm");

            if perm.len() == 4 {
                match &perm[1..] {
                    [1, 2, 3] => pp.int(0, 0), // w h c
                    [1, 3, 2] => pp.int(0, 1), // h w c
                    [2, 1, 3] => pp.int(0, 2), // w c h
                    [2, 3, 1] => pp.int(0, 3), // c w h
                    [3, 1, 2] => pp.int(0, 4), // h c w
                    [3, 2, 1] => pp.int(0, 5), // c h w
                    _ => {}
                }
            } else if perm.len() == 5 {
                match &perm[1..] {
                    [1, 2, 3, 4] => pp.int(0, 0),
                    [1, 3, 4, 2] => pp.int(0, 1),
                    [2, 1, 3, 4] => pp.int(0, 2),
                    [2, 3, 4, 1] => pp.int(0, 3),
                    [3, 4, 1, 2] => pp.int(0, 4),
                    [3, 4, 2, 1] => pp.int(0, 5),
                    _ => return Err(ConvertError::TransposeType),
                }
            }
        }
        Op::Upsample | Op::Resize => {
            let mode = node.attr_s("mode");

            let scales: Vec<f32> = if node.inputs.len() == 1 {
                node.attr_af("scales")
            } else {
                node.inputs
                    .get(1)
                    .and_then(|name| info.weights.get(name))
                    .map(tensor::f32_data)
                    .unwrap_or_default()
            };

            let resize_type = match mode.as_str() {
                "bilinear" | "linear" => 2,
                "trilinear" => return Err(ConvertError::ResizeMode),
                _ => 1, // nearest
            };

            let mut h_scale = 1.0;
            let w_scale;
            match scales.len() {
                2 => w_scale = scales[1],
                3 => {
                    h_scale = scales[1];
                    w_scale = scales[2];
                }
                4 => {
                    if scales[1] != 1.0 {
                        return Err(ConvertError::ResizeScales);
                    }
                    h_scale = scales[2];
                    w_scale = scales[3];
                }
                _ => return Err(ConvertError::ResizeScales),
            }

            pp.int(0, resize_type);
            pp.float(1, h_scale);
            pp.float(2, w_scale);
        }
        // unary/binary handled above; the rest carry no parameters
        _ => {}
    }

    Ok(())
}

/// Conv and ConvTranspose share the parameter layout; they differ in the
/// filter-count source and in the per-group weight reorder on the way out
fn emit_convolution(node: &Node, info: &GraphInfo, pp: &mut ParamWriter, bv: &mut BlobWriter) -> Result<()> {
    let w = input_weight(info, node, 1)?;
    let has_bias = node.inputs.len() == 3;

    let auto_pad = node.attr_s("auto_pad");
    let kernel_shape = node.attr_ai("kernel_shape");
    let dilations = node.attr_ai("dilations");
    let strides = node.attr_ai("strides");
    let pads = node.attr_ai("pads");
    let group = node.attr_i("group", 1) as i32;

    let num_filter = if node.op == Op::Conv {
        w.dims.first().copied().unwrap_or(0) as i32
    } else {
        w.dims.get(1).copied().unwrap_or(0) as i32 * group
    };

    pp.int(0, num_filter);

    match kernel_shape.len() {
        1 => pp.int(1, kernel_shape[0]),
        2 => {
            pp.int(1, kernel_shape[1]);
            pp.int(11, kernel_shape[0]);
        }
        _ => {}
    }
    match dilations.len() {
        1 => pp.int(2, dilations[0]),
        2 => {
            pp.int(2, dilations[1]);
            pp.int(12, dilations[0]);
        }
        _ => {}
    }
    match strides.len() {
        1 => pp.int(3, strides[0]),
        2 => {
            pp.int(3, strides[1]);
            pp.int(13, strides[0]);
        }
        _ => {}
    }

    if auto_pad == "SAME_LOWER" || auto_pad == "SAME_UPPER" {
        pp.int(4, PAD_SAME);
    } else {
        match pads.len() {
            1 => pp.int(4, pads[0]),
            2 | 4 => {
                pp.int(4, pads[1]);
                pp.int(14, pads[0]);
            }
            _ => {}
        }
    }

    pp.int(5, has_bias as i32);
    pp.int(6, tensor::data_len(w) as i32);
    if group > 1 {
        pp.int(7, group);
    }

    // zero quantisation tag precedes every convolution weight
    bv.put_i32(0);

    if node.op == Op::Conv {
        bv.put_tensor(w);
    } else {
        // reorder deconvolution weight from inch-outch to outch-inch, per group
        let maxk = match kernel_shape.len() {
            2 => (kernel_shape[0] * kernel_shape[1]) as usize,
            1 => (kernel_shape[0] * kernel_shape[0]) as usize,
            _ => {
                return Err(ConvertError::InvalidAttribute(
                    "ConvTranspose kernel_shape".to_string(),
                ))
            }
        };
        let weight_data_size = tensor::data_len(w);
        let group = group as usize;
        let num_filter_g = (num_filter as usize) / group.max(1);
        if maxk == 0 || num_filter_g == 0 {
            return Err(ConvertError::InvalidAttribute(
                "ConvTranspose weight shape".to_string(),
            ));
        }
        let num_input = weight_data_size / maxk / num_filter_g / group;

        let data = tensor::f32_data(w);
        for g in 0..group {
            let base = g * maxk * num_filter_g * num_input;
            for k in 0..num_filter_g {
                for j in 0..num_input {
                    let offset = base + (j * num_filter_g + k) * maxk;
                    bv.put_f32_slice(&data[offset..offset + maxk]);
                }
            }
        }
    }

    if has_bias {
        let bias = weight(info, &node.inputs[2])?;
        bv.put_tensor(bias);
    }

    Ok(())
}
