//! Conversion pipeline
//!
//! ```text
//! ONNX bytes
//!     ↓
//! 1. Parse → Graph (prost decode + operator vocabulary check)
//!     ↓
//! 2. Classify → weights / binary-op weights / fan-out / blob names
//!     ↓
//! 3. Fuse → collapse Transpose(weight) into the following MatMul
//!     ↓
//! 4. Emit → param text + blob bytes
//! ```
//!
//! One `convert_bytes` call owns every intermediate structure; nothing is
//! process-global, so concurrent conversions need no coordination.

use std::path::Path;

use prost::Message;
use tracing::debug;

use crate::classify;
use crate::emit;
use crate::error::Result;
use crate::fuse;
use crate::graph::Graph;
use crate::proto::ModelProto;

pub use crate::emit::NcnnModel;

/// ONNX → ncnn converter
///
/// # Example
///
/// ```no_run
/// use onnx2ncnn::Converter;
///
/// let onnx = std::fs::read("model.onnx")?;
/// let model = Converter::new().convert_bytes(&onnx)?;
/// std::fs::write("model.param", &model.param)?;
/// std::fs::write("model.bin", &model.bin)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct Converter {}

/// Counts gathered across one conversion
#[derive(Debug, Clone, Copy)]
pub struct ConvertStats {
    /// Nodes in the source graph
    pub node_count: usize,
    /// Nodes collapsed by the peephole fusion
    pub reduced_node_count: usize,
    /// Layers written to the param file
    pub layer_count: usize,
    /// Blobs declared in the param header
    pub blob_count: usize,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a serialized ONNX model into the two output buffers
    pub fn convert_bytes(&self, onnx_bytes: &[u8]) -> Result<NcnnModel> {
        self.convert_bytes_with_stats(onnx_bytes).map(|(model, _)| model)
    }

    /// Like [`Converter::convert_bytes`], also reporting conversion counts
    pub fn convert_bytes_with_stats(&self, onnx_bytes: &[u8]) -> Result<(NcnnModel, ConvertStats)> {
        let model = ModelProto::decode(onnx_bytes)?;
        let mut graph = Graph::from_model(&model)?;
        let node_count = graph.nodes.len();
        debug!(nodes = node_count, inputs = graph.input_names.len(), "parsed model");

        let mut info = classify::classify(&graph);
        debug!(
            weights = info.weights.len(),
            binaryop_weights = info.binaryop_weights.len(),
            blobs = info.blob_names.len(),
            "classified graph"
        );

        let reduced_node_count = fuse::fuse_transpose_matmul(&mut graph, &mut info);

        let (ncnn, emit_stats) = emit::emit(&graph, &mut info)?;
        debug!(
            layers = emit_stats.layer_count,
            blobs = emit_stats.blob_count,
            reduced = reduced_node_count,
            "emitted model"
        );

        Ok((
            ncnn,
            ConvertStats {
                node_count,
                reduced_node_count,
                layer_count: emit_stats.layer_count,
                blob_count: emit_stats.blob_count,
            },
        ))
    }

    /// Convert an ONNX file on disk into param and bin files
    pub fn convert_files(
        &self,
        input: impl AsRef<Path>,
        param: impl AsRef<Path>,
        bin: impl AsRef<Path>,
    ) -> Result<ConvertStats> {
        let onnx_bytes = std::fs::read(input)?;
        let (model, stats) = self.convert_bytes_with_stats(&onnx_bytes)?;
        std::fs::write(param, &model.param)?;
        std::fs::write(bin, &model.bin)?;
        Ok(stats)
    }
}
