//! Raw detector output and the normalized box type.
//!
//! A `RawDetectionSet` holds the three index-aligned sequences produced by a
//! single inference call: one box, one class value and one score per
//! candidate slot. The slot count is whatever the inputs carry; nothing here
//! assumes a fixed model size.

use crate::util::math::span_area;
use crate::util::{DetAnnounceError, DetAnnounceResult};

/// Axis-aligned box in normalized `[0, 1]` image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormBox {
    /// Top edge as a fraction of image height.
    pub top: f32,
    /// Left edge as a fraction of image width.
    pub left: f32,
    /// Bottom edge as a fraction of image height.
    pub bottom: f32,
    /// Right edge as a fraction of image width.
    pub right: f32,
}

impl NormBox {
    /// Creates a box from `(top, left, bottom, right)`.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Area in normalized units, `|right - left| * |bottom - top|`.
    ///
    /// Only meaningful for comparing boxes of the same frame.
    pub fn area(&self) -> f32 {
        span_area(self.top, self.left, self.bottom, self.right)
    }
}

impl From<[f32; 4]> for NormBox {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

/// Index-aligned detector output for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawDetectionSet {
    boxes: Vec<NormBox>,
    class_indices: Vec<f32>,
    scores: Vec<f32>,
}

impl RawDetectionSet {
    /// Creates a set from already split sequences.
    ///
    /// All three sequences must have the same length.
    pub fn new(
        boxes: Vec<NormBox>,
        class_indices: Vec<f32>,
        scores: Vec<f32>,
    ) -> DetAnnounceResult<Self> {
        if boxes.len() != scores.len() || class_indices.len() != scores.len() {
            return Err(DetAnnounceError::ShapeMismatch {
                boxes: boxes.len(),
                class_indices: class_indices.len(),
                scores: scores.len(),
            });
        }
        Ok(Self {
            boxes,
            class_indices,
            scores,
        })
    }

    /// Creates a set from the flat tensors an SSD-style model emits.
    ///
    /// `locations` packs four coordinates per slot in `(top, left, bottom,
    /// right)` order, so it must hold exactly `4 * scores.len()` values.
    pub fn from_flat(
        locations: &[f32],
        classes: &[f32],
        scores: &[f32],
    ) -> DetAnnounceResult<Self> {
        if locations.len() % 4 != 0 {
            return Err(DetAnnounceError::InvalidInput(
                "locations length must be a multiple of 4",
            ));
        }
        let boxes = locations
            .chunks_exact(4)
            .map(|c| NormBox::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(boxes, classes.to_vec(), scores.to_vec())
    }

    /// Number of candidate slots.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true when the set has no slots.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the boxes, one per slot.
    pub fn boxes(&self) -> &[NormBox] {
        &self.boxes
    }

    /// Returns the raw class values, one per slot.
    pub fn class_indices(&self) -> &[f32] {
        &self.class_indices
    }

    /// Returns the confidence scores, one per slot.
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Iterates `(slot, box, class value, score)` in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, NormBox, f32, f32)> + '_ {
        self.boxes
            .iter()
            .zip(self.class_indices.iter())
            .zip(self.scores.iter())
            .enumerate()
            .map(|(slot, ((bbox, class), score))| (slot, *bbox, *class, *score))
    }
}
