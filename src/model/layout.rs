//! Layout and interaction configuration carried by a model.

use super::geometry::Insets;
use serde::{Deserialize, Serialize};

/// Fallback item height when neither the item nor a nested model provide one.
pub const DEFAULT_ITEM_HEIGHT: f64 = 3.0;

/// Where the page indicator of a horizontal component is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageIndicatorPlacement {
    /// In a strip below the items; grows the bottom section inset.
    Below,
    /// On top of the items, near the bottom edge of the surface.
    Overlay,
}

impl PageIndicatorPlacement {
    /// Parse a placement name as used in config files and CLI flags.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "below" => Some(Self::Below),
            "overlay" => Some(Self::Overlay),
            _ => None,
        }
    }

    /// Name as used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below => "below",
            Self::Overlay => "overlay",
        }
    }
}

/// Flow-layout hints for a component.
///
/// `span` is the number of columns a grid lays out per row (vertical) or per
/// page (horizontal). Zero means one full-width column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Column hint; fractional values leave part of the next cell visible.
    pub span: f64,
    /// Horizontal gap between cells.
    pub item_spacing: f64,
    /// Vertical gap between rows.
    pub line_spacing: f64,
    /// Section inset around all cells.
    pub inset: Insets,
    /// Height used for items without a height hint.
    pub item_height: f64,
    /// Page indicator placement, horizontal interaction only.
    pub page_indicator: Option<PageIndicatorPlacement>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            span: 0.0,
            item_spacing: 0.0,
            line_spacing: 0.0,
            inset: Insets::ZERO,
            item_height: DEFAULT_ITEM_HEIGHT,
            page_indicator: None,
        }
    }
}

impl LayoutConfig {
    /// Builder-style span setter.
    pub fn with_span(mut self, span: f64) -> Self {
        self.span = span;
        self
    }

    /// Builder-style page indicator setter.
    pub fn with_page_indicator(mut self, placement: Option<PageIndicatorPlacement>) -> Self {
        self.page_indicator = placement;
        self
    }

    /// Builder-style inset setter.
    pub fn with_inset(mut self, inset: Insets) -> Self {
        self.inset = inset;
        self
    }

    /// Builder-style spacing setter.
    pub fn with_spacing(mut self, item_spacing: f64, line_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self.line_spacing = line_spacing;
        self
    }

    /// Builder-style fallback height setter.
    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }
}

/// Scroll axis of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Items flow left to right on a single row.
    Horizontal,
    /// Items flow top to bottom.
    #[default]
    Vertical,
}

/// Interaction flags of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Interaction {
    /// Scroll axis.
    pub scroll_direction: ScrollDirection,
    /// Snap scrolling to whole pages.
    pub paginate: bool,
}

impl Interaction {
    /// Horizontal interaction.
    pub fn horizontal() -> Self {
        Self {
            scroll_direction: ScrollDirection::Horizontal,
            paginate: false,
        }
    }

    /// Vertical interaction.
    pub fn vertical() -> Self {
        Self::default()
    }

    /// True for horizontal scrolling.
    pub fn is_horizontal(&self) -> bool {
        self.scroll_direction == ScrollDirection::Horizontal
    }
}
