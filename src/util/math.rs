//! Numeric helpers for box geometry and class index conversion.

use crate::util::{DetAnnounceError, DetAnnounceResult};

/// Area of an axis-aligned box spanned by two edges on each axis.
///
/// Edge order does not matter; the extents are taken as absolute values.
pub(crate) fn span_area(top: f32, left: f32, bottom: f32, right: f32) -> f32 {
    (right - left).abs() * (bottom - top).abs()
}

/// Truncates a float class value toward zero into a label index.
///
/// Negative and non-finite values are rejected instead of saturating.
pub(crate) fn truncate_class_index(slot: usize, value: f32) -> DetAnnounceResult<usize> {
    if !value.is_finite() || value < 0.0 {
        return Err(DetAnnounceError::InvalidClassIndex { slot, value });
    }
    let truncated = value.trunc();
    if truncated > usize::MAX as f32 {
        return Err(DetAnnounceError::InvalidClassIndex { slot, value });
    }
    Ok(truncated as usize)
}

/// Returns true when `threshold` is a finite value in `[0, 1]`.
pub(crate) fn is_unit_interval(threshold: f32) -> bool {
    threshold.is_finite() && (0.0..=1.0).contains(&threshold)
}
