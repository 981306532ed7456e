//! Error types for the ONNX → ncnn converter

use thiserror::Error;

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while translating an ONNX model
///
/// A conversion either produces both output buffers or fails as a whole;
/// there are no partial results and no warnings.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("read_proto_from_binary failed")]
    ModelParse(#[from] prost::DecodeError),

    #[error("{0} not supported yet!")]
    UnsupportedOp(String),

    #[error("Unsupported Flatten axis {0}!")]
    FlattenAxis(i64),

    #[error("Unsupported Gemm form !")]
    GemmForm,

    #[error("Unsupported Pad mode !")]
    PadMode,

    #[error("Unsupported slice step !")]
    SliceStep,

    #[error("Unsupported transpose type !")]
    TransposeType,

    #[error("Unsupported Upsample/Resize mode !")]
    ResizeMode,

    #[error("Unsupported Upsample/Resize scales !")]
    ResizeScales,

    #[error("weight tensor {0} not found")]
    MissingWeight(String),

    #[error("Invalid attribute value: {0}")]
    InvalidAttribute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
