//! # onnx2ncnn
//!
//! Translate an ONNX computation graph into the ncnn model format: a
//! human-readable `.param` file describing the layer graph plus a `.bin`
//! blob holding raw little-endian float32 weight payloads.
//!
//! The conversion is a three-phase pipeline over the parsed graph:
//!
//! 1. **Classify** — partition every value-name into runtime tensor or
//!    conversion-time weight, folding constants across `Constant` and
//!    weight-fed `Reshape`, and promoting weights that feed `Add`/`Mul`
//!    back to runtime edges (they become `MemoryData` layers).
//! 2. **Fuse** — collapse `Transpose(weight, perm=[1,0])` into a directly
//!    following `MatMul` by transposing the weight payload in place.
//! 3. **Emit** — walk the graph in source order writing one ncnn layer per
//!    surviving node, with explicit `Split` layers for every value that has
//!    more than one runtime consumer.
//!
//! ## Library usage
//!
//! ```no_run
//! use onnx2ncnn::Converter;
//!
//! Converter::new().convert_files("model.onnx", "model.param", "model.bin")?;
//! # Ok::<(), onnx2ncnn::ConvertError>(())
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! onnx2ncnn model.onnx model.param model.bin
//! ```

mod classify;
mod converter;
mod emit;
mod fuse;
mod graph;
mod ops;
mod tensor;

pub mod error;
pub mod proto;

pub use converter::{ConvertStats, Converter, NcnnModel};
pub use error::{ConvertError, Result};
pub use ops::Op;

/// Get the crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
