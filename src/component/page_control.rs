//! Page indicator state of a horizontal component.

use crate::layout_policy::PAGE_CONTROL_HEIGHT;
use crate::model::Frame;
use ratatui::style::Color;

/// Where a page control is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageControlParent {
    /// The surface's background view (placement below the items).
    Background,
    /// The surface itself (overlay placement).
    Surface,
}

/// Indicator colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControlTint {
    /// Color of inactive page dots.
    pub page: Color,
    /// Color of the current page dot.
    pub current_page: Color,
}

impl PageControlTint {
    /// Light inactive dots with a gray current dot.
    pub fn light() -> Self {
        Self {
            page: Color::Gray,
            current_page: Color::DarkGray,
        }
    }
}

/// Page indicator model.
///
/// `tint` of `None` means the renderer's default appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct PageControl {
    /// Number of pages (one per item).
    pub page_count: usize,
    /// Zero-based current page.
    pub current_page: usize,
    /// Frame in the parent's coordinates.
    pub frame: Frame,
    /// Explicit colors.
    pub tint: Option<PageControlTint>,
    parent: Option<PageControlParent>,
}

impl Default for PageControl {
    fn default() -> Self {
        Self {
            page_count: 0,
            current_page: 0,
            frame: Frame::new(0.0, 0.0, 0.0, PAGE_CONTROL_HEIGHT),
            tint: None,
            parent: None,
        }
    }
}

impl PageControl {
    /// Unattached page control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current parent.
    pub fn parent(&self) -> Option<PageControlParent> {
        self.parent
    }

    /// True when attached anywhere.
    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<PageControlParent>) {
        self.parent = parent;
    }

    /// Set the page count, keeping the current page in range.
    pub fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
        self.current_page = self.current_page.min(count.saturating_sub(1));
    }
}
