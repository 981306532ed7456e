//! Supported ONNX operator vocabulary
//!
//! The converter handles a closed set of source operators; anything outside
//! this enum fails the whole conversion with `<op> not supported yet!`.
//! Each variant knows its ncnn layer kind and, for element-wise operators,
//! its UnaryOp/BinaryOp type code.

/// A supported ONNX operator symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Abs,
    Acos,
    Add,
    Asin,
    Atan,
    AveragePool,
    BatchNormalization,
    Ceil,
    Clip,
    Concat,
    Constant,
    Conv,
    ConvTranspose,
    Cos,
    Div,
    Dropout,
    Elu,
    Exp,
    Flatten,
    Floor,
    Gemm,
    GlobalAveragePool,
    GlobalMaxPool,
    ImageScaler,
    InstanceNormalization,
    LeakyRelu,
    Log,
    Lrn,
    MatMul,
    Max,
    MaxPool,
    Min,
    Mul,
    Neg,
    Pad,
    Pow,
    PRelu,
    Reciprocal,
    Relu,
    Reshape,
    Resize,
    Sigmoid,
    Sin,
    Slice,
    Softmax,
    Sqrt,
    Sub,
    Sum,
    Tan,
    Transpose,
    Upsample,
}

impl Op {
    /// Look up a source operator symbol, `None` for anything unsupported
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        let op = match symbol {
            "Abs" => Op::Abs,
            "Acos" => Op::Acos,
            "Add" => Op::Add,
            "Asin" => Op::Asin,
            "Atan" => Op::Atan,
            "AveragePool" => Op::AveragePool,
            "BatchNormalization" => Op::BatchNormalization,
            "Ceil" => Op::Ceil,
            "Clip" => Op::Clip,
            "Concat" => Op::Concat,
            "Constant" => Op::Constant,
            "Conv" => Op::Conv,
            "ConvTranspose" => Op::ConvTranspose,
            "Cos" => Op::Cos,
            "Div" => Op::Div,
            "Dropout" => Op::Dropout,
            "Elu" => Op::Elu,
            "Exp" => Op::Exp,
            "Flatten" => Op::Flatten,
            "Floor" => Op::Floor,
            "Gemm" => Op::Gemm,
            "GlobalAveragePool" => Op::GlobalAveragePool,
            "GlobalMaxPool" => Op::GlobalMaxPool,
            "ImageScaler" => Op::ImageScaler,
            "InstanceNormalization" => Op::InstanceNormalization,
            "LeakyRelu" => Op::LeakyRelu,
            "Log" => Op::Log,
            "LRN" => Op::Lrn,
            "MatMul" => Op::MatMul,
            "Max" => Op::Max,
            "MaxPool" => Op::MaxPool,
            "Min" => Op::Min,
            "Mul" => Op::Mul,
            "Neg" => Op::Neg,
            "Pad" => Op::Pad,
            "Pow" => Op::Pow,
            "PRelu" => Op::PRelu,
            "Reciprocal" => Op::Reciprocal,
            "Relu" => Op::Relu,
            "Reshape" => Op::Reshape,
            "Resize" => Op::Resize,
            "Sigmoid" => Op::Sigmoid,
            "Sin" => Op::Sin,
            "Slice" => Op::Slice,
            "Softmax" => Op::Softmax,
            "Sqrt" => Op::Sqrt,
            "Sub" => Op::Sub,
            "Sum" => Op::Sum,
            "Tan" => Op::Tan,
            "Transpose" => Op::Transpose,
            "Upsample" => Op::Upsample,
            _ => return None,
        };
        Some(op)
    }

    /// UnaryOp type code, `None` if this is not a unary operator
    pub fn unary_op_type(self) -> Option<i32> {
        let code = match self {
            Op::Abs => 0,
            Op::Neg => 1,
            Op::Floor => 2,
            Op::Ceil => 3,
            Op::Sqrt => 5,
            Op::Exp => 7,
            Op::Log => 8,
            Op::Sin => 9,
            Op::Cos => 10,
            Op::Tan => 11,
            Op::Asin => 12,
            Op::Acos => 13,
            Op::Atan => 14,
            Op::Reciprocal => 15,
            _ => return None,
        };
        Some(code)
    }

    /// BinaryOp type code, `None` if this is not a binary operator
    pub fn binary_op_type(self) -> Option<i32> {
        let code = match self {
            Op::Add => 0,
            Op::Sub => 1,
            Op::Mul => 2,
            Op::Div => 3,
            Op::Max => 4,
            Op::Min => 5,
            Op::Pow => 6,
            _ => return None,
        };
        Some(code)
    }

    /// Whether this is an element-wise binary operator whose weight inputs
    /// must be materialised as MemoryData layers
    pub fn folds_binary_weights(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }
}
