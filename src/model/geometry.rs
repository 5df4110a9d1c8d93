//! Geometry newtypes shared by the model, the layout policy and the surfaces.
//!
//! Units are abstract layout units. The terminal renderer maps one unit to one
//! cell, rounding toward zero.

use serde::{Deserialize, Serialize};

/// Width and height of a surface, cell or container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Size {
    /// The empty size, returned for unknown items.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A point in content or surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Frame at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Size component of this frame.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }
}

/// Edge insets around a section of items.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    /// Top inset.
    pub top: f64,
    /// Left inset.
    pub left: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Right inset.
    pub right: f64,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets from all four edges.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every edge.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Address of an item on a surface.
///
/// A component renders a single section, so `section` is 0 for every valid
/// path. Lookups with any other section resolve to "no item".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl IndexPath {
    /// Create an index path.
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Index path for an item in the single component section.
    pub fn item(item: usize) -> Self {
        Self { section: 0, item }
    }
}

impl From<usize> for IndexPath {
    fn from(item: usize) -> Self {
        Self::item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(10.0, 2.0).is_empty());
    }

    #[test]
    fn frame_edges() {
        let frame = Frame::new(2.0, 3.0, 10.0, 4.0);
        assert_eq!(frame.max_x(), 12.0);
        assert_eq!(frame.max_y(), 7.0);
        assert_eq!(frame.size(), Size::new(10.0, 4.0));
    }

    #[test]
    fn insets_sum_edges() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 6.0);
        assert_eq!(insets.vertical(), 4.0);
        assert_eq!(Insets::uniform(2.0).horizontal(), 4.0);
    }

    #[test]
    fn index_path_from_usize_uses_section_zero() {
        assert_eq!(IndexPath::from(4), IndexPath::new(0, 4));
    }
}
