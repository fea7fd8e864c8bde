//! Overlay layout for the rendering collaborator.
//!
//! Maps accepted detections onto a surface of a given pixel size. This is
//! geometry only: the renderer gets rectangles, colors and text metrics and
//! does all drawing itself.

use crate::filter::Detection;
use crate::raw::NormBox;
use crate::util::{DetAnnounceError, DetAnnounceResult};

/// Opaque ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLUE: Argb = Argb(0xFF00_00FF);
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const CYAN: Argb = Argb(0xFF00_FFFF);
    pub const GRAY: Argb = Argb(0xFF88_8888);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const DARK_GRAY: Argb = Argb(0xFF44_4444);
    pub const MAGENTA: Argb = Argb(0xFFFF_00FF);
    pub const YELLOW: Argb = Argb(0xFFFF_FF00);
}

/// Box colors indexed by candidate slot.
pub const SLOT_PALETTE: [Argb; 10] = [
    Argb::BLUE,
    Argb::GREEN,
    Argb::RED,
    Argb::CYAN,
    Argb::GRAY,
    Argb::BLACK,
    Argb::DARK_GRAY,
    Argb::MAGENTA,
    Argb::YELLOW,
    Argb::RED,
];

/// Returns the palette color for a candidate slot, wrapping past the end.
pub fn slot_color(slot: usize) -> Argb {
    SLOT_PALETTE[slot % SLOT_PALETTE.len()]
}

/// Rectangle in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl NormBox {
    /// Scales the box to a `width` x `height` surface.
    pub fn to_pixels(&self, width: f32, height: f32) -> PixelRect {
        PixelRect {
            left: self.left * width,
            top: self.top * height,
            right: self.right * width,
            bottom: self.bottom * height,
        }
    }
}

/// Text and stroke metrics derived from the surface height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Label text size in pixels.
    pub text_size: f32,
    /// Box outline width in pixels.
    pub stroke_width: f32,
}

impl OverlayStyle {
    /// Style for a surface of the given size.
    pub fn for_surface(_width: f32, height: f32) -> Self {
        Self {
            text_size: height / 15.0,
            stroke_width: height / 85.0,
        }
    }
}

/// One box to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayItem {
    pub slot: usize,
    pub rect: PixelRect,
    pub color: Argb,
    pub label: String,
    /// Where the label text starts (the rectangle's top-left corner).
    pub text_origin: (f32, f32),
}

/// Full overlay for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    pub style: OverlayStyle,
    pub items: Vec<OverlayItem>,
}

/// Lays out `detections` on a `width` x `height` surface.
pub fn layout_overlay(
    detections: &[Detection],
    width: f32,
    height: f32,
) -> DetAnnounceResult<OverlayLayout> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(DetAnnounceError::InvalidSurface { width, height });
    }
    let items = detections
        .iter()
        .map(|det| {
            let rect = det.bbox.to_pixels(width, height);
            OverlayItem {
                slot: det.slot,
                rect,
                color: slot_color(det.slot),
                label: det.label.clone(),
                text_origin: (rect.left, rect.top),
            }
        })
        .collect();
    Ok(OverlayLayout {
        style: OverlayStyle::for_surface(width, height),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::{slot_color, Argb};

    #[test]
    fn palette_wraps_after_ten_slots() {
        assert_eq!(slot_color(0), Argb::BLUE);
        assert_eq!(slot_color(9), Argb::RED);
        assert_eq!(slot_color(11), Argb::GREEN);
    }
}
