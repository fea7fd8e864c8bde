//! Dominant label selection.

use crate::filter::Detection;

/// Returns the trimmed label of the detection with the largest area.
///
/// The scan starts from a zero baseline and only a strictly larger area
/// replaces the current best, so ties keep the first detection and
/// zero-area detections never win. Returns an empty string when nothing
/// qualifies.
pub fn pick_dominant_label(detections: &[Detection]) -> String {
    dominant_detection(detections)
        .map(|det| det.label.trim().to_owned())
        .unwrap_or_default()
}

/// Returns the detection [`pick_dominant_label`] would take its label from.
pub fn dominant_detection(detections: &[Detection]) -> Option<&Detection> {
    let mut max_area = 0.0f32;
    let mut best = None;
    for det in detections {
        if det.area > max_area {
            max_area = det.area;
            best = Some(det);
        }
    }
    best
}
