//! detannounce turns raw object-detector output into labeled detections and
//! spoken announcements.
//!
//! The core takes the three index-aligned tensors an SSD-style model emits
//! (boxes, class values, scores), keeps the candidates above a confidence
//! threshold, picks the label of the largest accepted box, and decides
//! whether that label should be announced given what was announced before.
//! Parallel batch filtering is available via the `rayon` feature.

pub mod announce;
pub mod dominant;
pub mod filter;
pub mod labels;
pub mod lowlevel;
pub mod overlay;
pub mod pipeline;
pub mod raw;
mod trace;
pub mod util;

pub use announce::{decide_announcement, decide_announcement_with, AnnouncementState, ResetPolicy};
pub use dominant::pick_dominant_label;
pub use filter::{filter_batch, filter_detections, Detection, DEFAULT_THRESHOLD};
pub use labels::LabelTable;
pub use overlay::{layout_overlay, OverlayLayout};
pub use pipeline::{FrameProcessor, FrameReport, ProcessConfig};
pub use raw::{NormBox, RawDetectionSet};
pub use util::{DetAnnounceError, DetAnnounceResult};

#[cfg(feature = "rayon")]
pub use filter::rayon::filter_batch_par;
