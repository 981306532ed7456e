//! Tensor payload helpers
//!
//! ONNX stores tensor payloads either as a packed little-endian byte string
//! (`raw_data`) or as a typed unpacked array (`float_data` / `int64_data`).
//! The converter reads both and always emits raw little-endian float32, so
//! big-endian hosts get correct output too.

use crate::proto::{TensorProto, DATA_TYPE_FLOAT};

/// Number of elements in the tensor payload
///
/// Raw payloads count 4-byte words; unpacked payloads count array entries.
/// Anything other than float32 raw/unpacked data has size zero.
pub fn data_len(t: &TensorProto) -> usize {
    if t.has_raw_data() {
        t.raw_data.len() / 4
    } else if t.data_type == DATA_TYPE_FLOAT {
        t.float_data.len()
    } else {
        0
    }
}

/// Decode the payload as f32 values regardless of encoding
pub fn f32_data(t: &TensorProto) -> Vec<f32> {
    if t.has_raw_data() {
        t.raw_data
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    } else {
        t.float_data.clone()
    }
}

/// Decode the payload as i64 values regardless of encoding
///
/// Shape tensors arrive as unpacked `int64_data` from most exporters, but
/// some write raw bytes instead.
pub fn i64_data(t: &TensorProto) -> Vec<i64> {
    if !t.int64_data.is_empty() {
        t.int64_data.clone()
    } else if t.has_raw_data() {
        t.raw_data
            .chunks_exact(8)
            .map(|b| i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
            .collect()
    } else {
        Vec::new()
    }
}

/// Replace the payload with new f32 values, keeping the original encoding
pub fn set_f32_data(t: &mut TensorProto, values: &[f32]) {
    if t.has_raw_data() {
        let mut raw = Vec::with_capacity(values.len() * 4);
        for v in values {
            raw.extend_from_slice(&v.to_le_bytes());
        }
        t.raw_data = raw;
    } else {
        t.float_data = values.to_vec();
    }
}

/// Growable little-endian blob buffer for weight payloads
#[derive(Default)]
pub struct BlobWriter {
    buf: Vec<u8>,
}

impl BlobWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn put_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn put_f32_slice(&mut self, values: &[f32]) {
        for v in values {
            self.put_f32(*v);
        }
    }

    /// Stream a tensor payload, raw bytes verbatim or unpacked floats
    pub fn put_tensor(&mut self, t: &TensorProto) {
        if t.has_raw_data() {
            self.buf.extend_from_slice(&t.raw_data);
        } else if t.data_type == DATA_TYPE_FLOAT {
            self.put_f32_slice(&t.float_data);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
