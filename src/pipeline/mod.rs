//! Per-frame processing: filter, pick the dominant label, decide whether to
//! announce it.

use crate::announce::{decide_announcement_with, AnnouncementState, ResetPolicy};
use crate::dominant::pick_dominant_label;
#[cfg(feature = "rayon")]
use crate::filter::rayon::filter_batch_par;
use crate::filter::{
    filter_batch, filter_detections, validate_threshold, Detection, DEFAULT_THRESHOLD,
};
use crate::labels::LabelTable;
use crate::raw::RawDetectionSet;
use crate::trace::{trace_event, trace_span};
use crate::util::DetAnnounceResult;

/// Configuration for a [`FrameProcessor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessConfig {
    /// Scores must be strictly above this value to be accepted.
    pub threshold: f32,
    /// Handling of frames without a dominant label.
    pub reset_policy: ResetPolicy,
    /// Filter batches on the rayon pool (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reset_policy: ResetPolicy::Never,
            parallel: false,
        }
    }
}

/// Outcome of processing one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Accepted detections in slot order.
    pub detections: Vec<Detection>,
    /// Trimmed dominant label, empty when nothing qualified.
    pub dominant_label: String,
    /// Text to hand to the announcement collaborator, if any.
    pub announcement: Option<String>,
}

/// Stateful per-session processor.
///
/// Owns the session's [`AnnouncementState`]; `&mut self` on the processing
/// methods keeps calls on one session serialized.
#[derive(Clone, Debug)]
pub struct FrameProcessor {
    labels: LabelTable,
    cfg: ProcessConfig,
    state: AnnouncementState,
}

impl FrameProcessor {
    /// Creates a processor with the default configuration.
    pub fn new(labels: LabelTable) -> Self {
        Self {
            labels,
            cfg: ProcessConfig::default(),
            state: AnnouncementState::new(),
        }
    }

    /// Replaces the configuration after validating the threshold.
    pub fn with_config(mut self, cfg: ProcessConfig) -> DetAnnounceResult<Self> {
        validate_threshold(cfg.threshold)?;
        self.cfg = cfg;
        Ok(self)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ProcessConfig {
        &self.cfg
    }

    /// Returns the label table.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Returns the announcement state.
    pub fn state(&self) -> &AnnouncementState {
        &self.state
    }

    /// Processes one frame.
    ///
    /// On error the announcement state is left unchanged.
    pub fn process(&mut self, raw: &RawDetectionSet) -> DetAnnounceResult<FrameReport> {
        let detections = filter_detections(raw, &self.labels, self.cfg.threshold)?;
        Ok(self.announce(detections))
    }

    /// Processes recorded frames in order.
    ///
    /// Filtering runs on every frame before any announcement is decided, so
    /// a failing frame leaves the announcement state unchanged.
    pub fn process_batch(
        &mut self,
        frames: &[RawDetectionSet],
    ) -> DetAnnounceResult<Vec<FrameReport>> {
        let _span = trace_span!("process_batch", frames = frames.len()).entered();
        let filtered = self.filter_all(frames)?;
        Ok(filtered
            .into_iter()
            .map(|detections| self.announce(detections))
            .collect())
    }

    #[cfg(feature = "rayon")]
    fn filter_all(&self, frames: &[RawDetectionSet]) -> DetAnnounceResult<Vec<Vec<Detection>>> {
        if self.cfg.parallel {
            return filter_batch_par(frames, &self.labels, self.cfg.threshold);
        }
        filter_batch(frames, &self.labels, self.cfg.threshold)
    }

    #[cfg(not(feature = "rayon"))]
    fn filter_all(&self, frames: &[RawDetectionSet]) -> DetAnnounceResult<Vec<Vec<Detection>>> {
        filter_batch(frames, &self.labels, self.cfg.threshold)
    }

    fn announce(&mut self, detections: Vec<Detection>) -> FrameReport {
        let dominant_label = pick_dominant_label(&detections);
        let announcement =
            decide_announcement_with(&dominant_label, &mut self.state, self.cfg.reset_policy);
        if let Some(text) = announcement.as_deref() {
            trace_event!("announce", label = text);
        }
        FrameReport {
            detections,
            dominant_label,
            announcement,
        }
    }
}
