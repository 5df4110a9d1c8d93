//! Layout policy: pure geometry for a model at a container size.
//!
//! The policy never touches a surface. It turns a model, its resolved layout
//! and a container size into a [`LayoutPlan`]; the component applies that plan.
//!
//! # Branches
//!
//! - list: one full-width column, rows stacked top to bottom
//! - grid, vertical: `span` columns per row, rows separated by `line_spacing`
//! - grid, horizontal: a single row of cells, `span` cells per page, with the
//!   page indicator strip folded into the section inset

pub mod plan;

pub use plan::{LayoutPlan, OVERLAY_GAP, PAGE_CONTROL_HEIGHT};

use crate::model::{
    ComponentKind, ComponentModel, Frame, Insets, Item, LayoutConfig, PageIndicatorPlacement,
    ScrollDirection, Size,
};

/// Layout policy bound to the fallback layout used for nested models.
///
/// Components build one at construction from the process default layout; the
/// policy keeps its own copy so later changes to the default do not leak in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutPolicy {
    default_layout: LayoutConfig,
}

impl LayoutPolicy {
    /// Policy resolving nested models without a layout to `default_layout`.
    pub fn new(default_layout: LayoutConfig) -> Self {
        Self { default_layout }
    }

    /// Fallback layout for nested models.
    pub fn default_layout(&self) -> &LayoutConfig {
        &self.default_layout
    }

    /// Compute the plan for `model` laid out with `layout` inside `container`.
    ///
    /// Only the container width constrains the result: lists and vertical
    /// grids size to their content height, horizontal grids to their tallest
    /// cell.
    pub fn compute(
        &self,
        model: &ComponentModel,
        layout: &LayoutConfig,
        container: Size,
    ) -> LayoutPlan {
        match (model.kind, model.effective_direction()) {
            (ComponentKind::List, _) => self.list(&model.items, layout, container),
            (_, ScrollDirection::Horizontal) => self.horizontal(&model.items, layout, container),
            (_, ScrollDirection::Vertical) => self.vertical(&model.items, layout, container),
        }
    }

    /// Height of a single item for a given cell width.
    ///
    /// An explicit hint wins; composite items take the height their nested
    /// model needs at that width; everything else uses the layout fallback.
    pub fn item_height(&self, item: &Item, layout: &LayoutConfig, cell_width: f64) -> f64 {
        if let Some(hint) = item.height_hint {
            return hint.max(0.0);
        }
        if let Some(children) = &item.children {
            let nested_layout = children.layout.as_ref().unwrap_or(&self.default_layout);
            let nested = self.compute(children, nested_layout, Size::new(cell_width, 0.0));
            return nested.surface_size.height;
        }
        layout.item_height.max(0.0)
    }

    fn list(&self, items: &[Item], layout: &LayoutConfig, container: Size) -> LayoutPlan {
        let inset = layout.inset;
        let cell_width = (container.width - inset.horizontal()).max(0.0);

        let mut y = inset.top;
        let item_frames = items
            .iter()
            .map(|item| {
                let height = self.item_height(item, layout, cell_width);
                let frame = Frame::new(inset.left, y, cell_width, height);
                y += height;
                frame
            })
            .collect();

        let height = y + inset.bottom;
        LayoutPlan {
            direction: ScrollDirection::Vertical,
            surface_size: Size::new(container.width, height),
            content_size: Size::new(container.width, height),
            section_inset: inset,
            item_frames,
            columns: 1,
            cell_width,
            page_control_y: None,
        }
    }

    fn vertical(&self, items: &[Item], layout: &LayoutConfig, container: Size) -> LayoutPlan {
        let inset = layout.inset;
        let cell_width = cell_width(layout, container.width);
        let columns = if layout.span > 0.0 {
            (layout.span.floor() as usize).max(1)
        } else {
            1
        };

        let mut item_frames = Vec::with_capacity(items.len());
        let mut y = inset.top;
        for (row_index, row) in items.chunks(columns).enumerate() {
            if row_index > 0 {
                y += layout.line_spacing;
            }
            let mut row_height: f64 = 0.0;
            for (column, item) in row.iter().enumerate() {
                let height = self.item_height(item, layout, cell_width);
                let x = inset.left + column as f64 * (cell_width + layout.item_spacing);
                item_frames.push(Frame::new(x, y, cell_width, height));
                row_height = row_height.max(height);
            }
            y += row_height;
        }

        let height = y + inset.bottom;
        LayoutPlan {
            direction: ScrollDirection::Vertical,
            surface_size: Size::new(container.width, height),
            content_size: Size::new(container.width, height),
            section_inset: inset,
            item_frames,
            columns,
            cell_width,
            page_control_y: None,
        }
    }

    fn horizontal(&self, items: &[Item], layout: &LayoutConfig, container: Size) -> LayoutPlan {
        let cell_width = cell_width(layout, container.width);
        let section_inset = horizontal_section_inset(layout);

        let mut tallest: f64 = 0.0;
        let item_frames: Vec<Frame> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let height = self.item_height(item, layout, cell_width);
                tallest = tallest.max(height);
                let x = section_inset.left + index as f64 * (cell_width + layout.item_spacing);
                Frame::new(x, section_inset.top, cell_width, height)
            })
            .collect();

        let content_width = match item_frames.last() {
            Some(last) => last.max_x() + section_inset.right,
            None => section_inset.horizontal(),
        };
        let surface_height = section_inset.top + tallest + section_inset.bottom;

        LayoutPlan {
            direction: ScrollDirection::Horizontal,
            surface_size: Size::new(container.width, surface_height),
            content_size: Size::new(content_width, surface_height),
            section_inset,
            item_frames,
            columns: 0,
            cell_width,
            page_control_y: page_control_offset(layout.page_indicator, surface_height),
        }
    }
}

/// Width of one grid cell.
///
/// `span` cells share the width left after the insets and the gaps between the
/// cells that are at least partially visible. Cells are floored to whole
/// units so terminal rendering never straddles a cell boundary.
pub fn cell_width(layout: &LayoutConfig, container_width: f64) -> f64 {
    let available = (container_width - layout.inset.horizontal()).max(0.0);
    if layout.span <= 0.0 {
        return available.floor();
    }
    let visible = layout.span.ceil().max(1.0);
    let gaps = layout.item_spacing * (visible - 1.0);
    ((available - gaps) / layout.span).floor().max(0.0)
}

/// Section inset of a horizontal grid.
///
/// A page indicator placed below the items claims a strip of its own height at
/// the bottom. The result is always derived from the layout, so repeated setup
/// never grows the inset twice.
pub fn horizontal_section_inset(layout: &LayoutConfig) -> Insets {
    let mut inset = layout.inset;
    if layout.page_indicator == Some(PageIndicatorPlacement::Below) {
        inset.bottom += PAGE_CONTROL_HEIGHT;
    }
    inset
}

/// Vertical offset of the page indicator inside a surface of `surface_height`.
pub fn page_control_offset(
    placement: Option<PageIndicatorPlacement>,
    surface_height: f64,
) -> Option<f64> {
    match placement? {
        PageIndicatorPlacement::Below => Some(surface_height - PAGE_CONTROL_HEIGHT),
        PageIndicatorPlacement::Overlay => {
            Some(surface_height - PAGE_CONTROL_HEIGHT - OVERLAY_GAP)
        }
    }
}
