//! Geometry instructions produced by the layout policy.

use crate::model::{Frame, Insets, ScrollDirection, Size};

/// Height of the page indicator strip.
pub const PAGE_CONTROL_HEIGHT: f64 = 1.0;

/// Gap between an overlay page indicator and the bottom edge of the surface.
pub const OVERLAY_GAP: f64 = 2.0;

/// Everything a surface needs to present a model at one container size.
///
/// Plans are plain values: equal inputs produce equal plans, so a component
/// can compare the last applied plan with a fresh one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutPlan {
    /// Scroll axis the plan was computed for.
    pub direction: ScrollDirection,
    /// Frame size the surface takes.
    pub surface_size: Size,
    /// Scrollable content size.
    pub content_size: Size,
    /// Section inset, including page indicator adjustments.
    pub section_inset: Insets,
    /// One frame per item, in item order, in content coordinates.
    pub item_frames: Vec<Frame>,
    /// Cells per row (vertical) or 0 for a horizontal single row.
    pub columns: usize,
    /// Width of one cell before per-item adjustments.
    pub cell_width: f64,
    /// Vertical offset of the page indicator inside the surface.
    pub page_control_y: Option<f64>,
}

impl LayoutPlan {
    /// Size of the item at `index`, or [`Size::ZERO`] when out of range.
    pub fn item_size(&self, index: usize) -> Size {
        self.item_frames
            .get(index)
            .map(Frame::size)
            .unwrap_or(Size::ZERO)
    }

    /// Frame of the item at `index`.
    pub fn item_frame(&self, index: usize) -> Option<Frame> {
        self.item_frames.get(index).copied()
    }

    /// Number of laid out items.
    pub fn item_count(&self) -> usize {
        self.item_frames.len()
    }

    /// Index of the item whose frame contains the content point.
    pub fn item_at_point(&self, x: f64, y: f64) -> Option<usize> {
        self.item_frames
            .iter()
            .position(|f| x >= f.x && x < f.max_x() && y >= f.y && y < f.max_y())
    }
}
