//! Lower-level pieces for callers assembling their own frame loop.
//!
//! Most users should prefer [`crate::FrameProcessor`], which chains these
//! steps and owns the announcement state.

pub use crate::dominant::dominant_detection;
pub use crate::overlay::{slot_color, Argb, OverlayItem, OverlayStyle, PixelRect, SLOT_PALETTE};
