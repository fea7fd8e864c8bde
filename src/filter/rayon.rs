//! Rayon-parallel batch filtering (feature-gated).
//!
//! Frames are independent, so each one is filtered on its own worker. The
//! result is identical to [`super::filter_batch`], including which error is
//! reported: the first failing frame in input order wins.

use crate::filter::{filter_detections, validate_threshold, Detection};
use crate::labels::LabelTable;
use crate::raw::RawDetectionSet;
use crate::trace::trace_span;
use crate::util::DetAnnounceResult;
use rayon::prelude::*;

/// Frame-parallel version of [`super::filter_batch`].
pub fn filter_batch_par(
    frames: &[RawDetectionSet],
    labels: &LabelTable,
    threshold: f32,
) -> DetAnnounceResult<Vec<Vec<Detection>>> {
    validate_threshold(threshold)?;
    let _span = trace_span!("filter_batch_par", frames = frames.len()).entered();

    let results: Vec<DetAnnounceResult<Vec<Detection>>> = frames
        .par_iter()
        .map(|raw| filter_detections(raw, labels, threshold))
        .collect();
    results.into_iter().collect()
}
