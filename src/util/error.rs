//! Error types for detannounce.

use thiserror::Error;

/// Result alias for detannounce operations.
pub type DetAnnounceResult<T> = std::result::Result<T, DetAnnounceError>;

/// Errors that can occur when post-processing detector output.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DetAnnounceError {
    /// The index-aligned output sequences have different lengths.
    #[error(
        "shape mismatch: boxes={boxes}, class_indices={class_indices}, scores={scores}"
    )]
    ShapeMismatch {
        boxes: usize,
        class_indices: usize,
        scores: usize,
    },
    /// A class index does not address an entry of the label table.
    #[error("label index {index} out of range (slot {slot}, table has {len} labels)")]
    LabelIndexOutOfRange { slot: usize, index: usize, len: usize },
    /// A class value cannot be truncated to a label index.
    #[error("invalid class value {value} at slot {slot}")]
    InvalidClassIndex { slot: usize, value: f32 },
    /// The confidence threshold is outside `[0, 1]` or not finite.
    #[error("invalid threshold {threshold}, expected a value in [0, 1]")]
    InvalidThreshold { threshold: f32 },
    /// The rendering surface has a zero or non-finite size.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Reading a label file failed.
    #[error("label io error: {reason}")]
    LabelIo { reason: String },
}
