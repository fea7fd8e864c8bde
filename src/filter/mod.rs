//! Confidence filtering of raw detector output.
//!
//! Filtering walks the candidate slots in order and keeps every slot whose
//! score is strictly above the threshold. Accepted slots get their label
//! resolved and their normalized area computed; rejected slots are never
//! looked up, so their class values are not validated.

use crate::labels::LabelTable;
use crate::raw::{NormBox, RawDetectionSet};
use crate::trace::{trace_event, trace_span};
use crate::util::math::{is_unit_interval, truncate_class_index};
use crate::util::{DetAnnounceError, DetAnnounceResult};

#[cfg(feature = "rayon")]
pub mod rayon;

/// Confidence threshold used by the reference detector app.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Accepted detection for one candidate slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Candidate slot the detection came from.
    pub slot: usize,
    /// Box in normalized coordinates.
    pub bbox: NormBox,
    /// Label resolved from the label table, untrimmed.
    pub label: String,
    /// Confidence score.
    pub score: f32,
    /// Area in normalized units.
    pub area: f32,
}

/// Keeps the slots of `raw` whose score is strictly greater than `threshold`.
///
/// The output preserves slot order. A score equal to the threshold is
/// rejected.
///
/// # Errors
///
/// Returns [`DetAnnounceError::InvalidThreshold`] when `threshold` is outside
/// `[0, 1]`, [`DetAnnounceError::InvalidClassIndex`] for a negative or
/// non-finite class value of an accepted slot, and
/// [`DetAnnounceError::LabelIndexOutOfRange`] when the truncated class value
/// does not address a label.
pub fn filter_detections(
    raw: &RawDetectionSet,
    labels: &LabelTable,
    threshold: f32,
) -> DetAnnounceResult<Vec<Detection>> {
    validate_threshold(threshold)?;
    let _span = trace_span!("filter_detections", slots = raw.len()).entered();

    let mut detections = Vec::new();
    for (slot, bbox, class, score) in raw.slots() {
        if score.is_nan() || score <= threshold {
            continue;
        }
        let index = truncate_class_index(slot, class)?;
        let label = labels
            .get(index)
            .ok_or(DetAnnounceError::LabelIndexOutOfRange {
                slot,
                index,
                len: labels.len(),
            })?;
        detections.push(Detection {
            slot,
            bbox,
            label: label.to_owned(),
            score,
            area: bbox.area(),
        });
    }

    trace_event!(
        "filter_done",
        slots = raw.len(),
        accepted = detections.len()
    );
    Ok(detections)
}

/// Filters a sequence of frames one after another.
///
/// Stops at the first frame that fails.
pub fn filter_batch(
    frames: &[RawDetectionSet],
    labels: &LabelTable,
    threshold: f32,
) -> DetAnnounceResult<Vec<Vec<Detection>>> {
    frames
        .iter()
        .map(|raw| filter_detections(raw, labels, threshold))
        .collect()
}

pub(crate) fn validate_threshold(threshold: f32) -> DetAnnounceResult<()> {
    if is_unit_interval(threshold) {
        Ok(())
    } else {
        Err(DetAnnounceError::InvalidThreshold { threshold })
    }
}
