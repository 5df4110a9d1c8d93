//! Live surfaces a component renders onto.
//!
//! A [`Surface`] is either a single-column [`ListSurface`] or a
//! [`GridSurface`] with a flow layout. The variant is chosen once, from the
//! model kind, when the component is built.
//!
//! Geometry goes through two steps: [`Surface::apply_plan`] stages a plan and
//! [`Surface::layout_if_needed`] commits it. Components always do both in the
//! same call so no layout pass is left pending.

use super::adapters::{SurfaceDataSource, SurfaceDelegate};
use crate::layout_policy::LayoutPlan;
use crate::model::{
    ComponentKind, Frame, IndexPath, Insets, Item, LayoutConfig, Point, ScrollDirection, Size,
};
use std::rc::{Rc, Weak};

/// Which surface variant a model kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Single-column list.
    List,
    /// Grid with a flow layout.
    Grid,
}

impl SurfaceKind {
    /// Surface variant required by `kind`.
    pub fn for_model(kind: ComponentKind) -> Self {
        if kind.uses_grid_surface() {
            Self::Grid
        } else {
            Self::List
        }
    }
}

/// Views that can be attached to a surface or its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subview {
    /// The component's page indicator.
    PageControl,
}

/// View behind the items, sized with the surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackgroundView {
    /// Frame in surface coordinates.
    pub frame: Frame,
    subviews: Vec<Subview>,
}

impl BackgroundView {
    /// Background covering `size`.
    pub fn new(size: Size) -> Self {
        Self {
            frame: Frame::from_size(size),
            subviews: Vec::new(),
        }
    }

    /// Attached subviews in insertion order.
    pub fn subviews(&self) -> &[Subview] {
        &self.subviews
    }

    /// Attach `view` unless it is already attached.
    pub fn attach(&mut self, view: Subview) {
        if !self.subviews.contains(&view) {
            self.subviews.push(view);
        }
    }

    /// Detach `view` if attached.
    pub fn detach(&mut self, view: Subview) {
        self.subviews.retain(|v| *v != view);
    }
}

/// Native layout object of a grid surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowLayout {
    /// Scroll axis.
    pub scroll_direction: ScrollDirection,
    /// Gap between cells on a row.
    pub item_spacing: f64,
    /// Gap between rows.
    pub line_spacing: f64,
    /// Section inset.
    pub section_inset: Insets,
    /// Cell sizes in item order.
    pub item_sizes: Vec<Size>,
    /// Scrollable content size.
    pub content_size: Size,
}

impl FlowLayout {
    /// Push layout parameters into the flow layout.
    ///
    /// Replaces the previous values; nothing accumulates across calls.
    pub fn configure(&mut self, layout: &LayoutConfig, direction: ScrollDirection) {
        self.scroll_direction = direction;
        self.item_spacing = layout.item_spacing;
        self.line_spacing = layout.line_spacing;
        self.section_inset = layout.inset;
    }

    fn apply(&mut self, plan: &LayoutPlan) {
        self.scroll_direction = plan.direction;
        self.section_inset = plan.section_inset;
        self.item_sizes = plan.item_frames.iter().map(Frame::size).collect();
        self.content_size = plan.content_size;
    }
}

/// State shared by both surface variants.
#[derive(Debug, Default)]
pub struct SurfaceCore {
    frame: Frame,
    content_size: Size,
    content_offset: Point,
    section_inset: Insets,
    item_frames: Vec<Frame>,
    background: Option<BackgroundView>,
    subviews: Vec<Subview>,
    data_source: Option<Weak<SurfaceDataSource>>,
    delegate: Option<Weak<SurfaceDelegate>>,
    pending: Option<LayoutPlan>,
    layout_passes: usize,
}

/// Single-column list surface.
#[derive(Debug, Default)]
pub struct ListSurface {
    core: SurfaceCore,
}

impl ListSurface {
    /// Unattached list surface.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Grid surface backed by a flow layout.
#[derive(Debug)]
pub struct GridSurface {
    core: SurfaceCore,
    flow_layout: FlowLayout,
    shows_horizontal_indicator: bool,
    paging: bool,
}

impl Default for GridSurface {
    fn default() -> Self {
        Self {
            core: SurfaceCore::default(),
            flow_layout: FlowLayout::default(),
            shows_horizontal_indicator: true,
            paging: false,
        }
    }
}

impl GridSurface {
    /// Unattached grid surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Native flow layout.
    pub fn flow_layout(&self) -> &FlowLayout {
        &self.flow_layout
    }

    /// Mutable native flow layout.
    pub fn flow_layout_mut(&mut self) -> &mut FlowLayout {
        &mut self.flow_layout
    }

    /// Whether the native horizontal scroll indicator is drawn.
    pub fn shows_horizontal_indicator(&self) -> bool {
        self.shows_horizontal_indicator
    }

    /// Toggle the native horizontal scroll indicator.
    pub fn set_shows_horizontal_indicator(&mut self, shows: bool) {
        self.shows_horizontal_indicator = shows;
    }

    /// Whether scrolling snaps to pages.
    pub fn is_paging(&self) -> bool {
        self.paging
    }

    /// Toggle page snapping.
    pub fn set_paging(&mut self, paging: bool) {
        self.paging = paging;
    }
}

/// A live surface of either variant.
#[derive(Debug)]
pub enum Surface {
    /// Single-column list.
    List(ListSurface),
    /// Grid or carousel.
    Grid(GridSurface),
}

impl Surface {
    /// Fresh surface matching `kind`.
    pub fn for_kind(kind: ComponentKind) -> Self {
        match SurfaceKind::for_model(kind) {
            SurfaceKind::List => Self::List(ListSurface::new()),
            SurfaceKind::Grid => Self::Grid(GridSurface::new()),
        }
    }

    /// Variant tag.
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::List(_) => SurfaceKind::List,
            Self::Grid(_) => SurfaceKind::Grid,
        }
    }

    fn core(&self) -> &SurfaceCore {
        match self {
            Self::List(list) => &list.core,
            Self::Grid(grid) => &grid.core,
        }
    }

    fn core_mut(&mut self) -> &mut SurfaceCore {
        match self {
            Self::List(list) => &mut list.core,
            Self::Grid(grid) => &mut grid.core,
        }
    }

    /// Grid variant, if this is a grid.
    pub fn as_grid(&self) -> Option<&GridSurface> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::List(_) => None,
        }
    }

    /// Mutable grid variant, if this is a grid.
    pub fn as_grid_mut(&mut self) -> Option<&mut GridSurface> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::List(_) => None,
        }
    }

    /// Flow layout of a grid surface.
    pub fn flow_layout_mut(&mut self) -> Option<&mut FlowLayout> {
        self.as_grid_mut().map(GridSurface::flow_layout_mut)
    }

    /// Committed frame.
    pub fn frame(&self) -> Frame {
        self.core().frame
    }

    /// Resize the surface, keeping its origin.
    pub fn set_size(&mut self, size: Size) {
        let core = self.core_mut();
        core.frame.width = size.width;
        core.frame.height = size.height;
    }

    /// Committed content size.
    pub fn content_size(&self) -> Size {
        self.core().content_size
    }

    /// Current scroll offset.
    pub fn content_offset(&self) -> Point {
        self.core().content_offset
    }

    /// Scroll to `offset`.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.core_mut().content_offset = offset;
    }

    /// Committed section inset.
    pub fn section_inset(&self) -> Insets {
        self.core().section_inset
    }

    /// Committed item frames, in content coordinates.
    pub fn item_frames(&self) -> &[Frame] {
        &self.core().item_frames
    }

    /// Background view, once attached.
    pub fn background(&self) -> Option<&BackgroundView> {
        self.core().background.as_ref()
    }

    /// Mutable background view, once attached.
    pub fn background_mut(&mut self) -> Option<&mut BackgroundView> {
        self.core_mut().background.as_mut()
    }

    /// Attach a background view covering the surface, reusing an existing one.
    pub fn attach_background(&mut self) {
        let core = self.core_mut();
        let size = core.frame.size();
        match core.background.as_mut() {
            Some(background) => background.frame = Frame::from_size(size),
            None => core.background = Some(BackgroundView::new(size)),
        }
    }

    /// Subviews attached directly to the surface.
    pub fn subviews(&self) -> &[Subview] {
        &self.core().subviews
    }

    /// Attach `view` to the surface unless already attached.
    pub fn attach_subview(&mut self, view: Subview) {
        let subviews = &mut self.core_mut().subviews;
        if !subviews.contains(&view) {
            subviews.push(view);
        }
    }

    /// Detach `view` from the surface.
    pub fn detach_subview(&mut self, view: Subview) {
        self.core_mut().subviews.retain(|v| *v != view);
    }

    /// Point the surface at its data source and delegate.
    pub fn attach_adapters(
        &mut self,
        data_source: &Rc<SurfaceDataSource>,
        delegate: &Rc<SurfaceDelegate>,
    ) {
        let core = self.core_mut();
        core.data_source = Some(Rc::downgrade(data_source));
        core.delegate = Some(Rc::downgrade(delegate));
    }

    /// Forget data source and delegate.
    pub fn detach_adapters(&mut self) {
        let core = self.core_mut();
        core.data_source = None;
        core.delegate = None;
    }

    /// True while a live data source is attached.
    pub fn has_data_source(&self) -> bool {
        self.core()
            .data_source
            .as_ref()
            .is_some_and(|source| source.strong_count() > 0)
    }

    /// Item count reported by the data source.
    pub fn item_count(&self) -> usize {
        self.core()
            .data_source
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|source| source.number_of_items())
            .unwrap_or(0)
    }

    /// Item reported by the data source.
    pub fn item_at(&self, index_path: IndexPath) -> Option<Item> {
        self.core()
            .data_source
            .as_ref()
            .and_then(Weak::upgrade)
            .and_then(|source| source.item(index_path))
    }

    /// Item size reported by the delegate.
    pub fn size_for_item(&self, index_path: IndexPath) -> Size {
        self.core()
            .delegate
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|delegate| delegate.size_for_item(index_path))
            .unwrap_or(Size::ZERO)
    }

    /// Selection check reported by the delegate.
    pub fn can_select(&self, index_path: IndexPath) -> bool {
        self.core()
            .delegate
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|delegate| delegate.can_select(index_path))
    }

    /// Stage `plan` for the next layout pass.
    pub fn apply_plan(&mut self, plan: &LayoutPlan) {
        self.core_mut().pending = Some(plan.clone());
    }

    /// True while a staged plan has not been committed.
    pub fn needs_layout(&self) -> bool {
        self.core().pending.is_some()
    }

    /// Number of committed layout passes.
    pub fn layout_passes(&self) -> usize {
        self.core().layout_passes
    }

    /// Commit a staged plan, if any.
    pub fn layout_if_needed(&mut self) {
        let Some(plan) = self.core_mut().pending.take() else {
            return;
        };
        if let Self::Grid(grid) = self {
            grid.flow_layout.apply(&plan);
        }
        let core = self.core_mut();
        core.frame.width = plan.surface_size.width;
        core.frame.height = plan.surface_size.height;
        core.content_size = plan.content_size;
        core.section_inset = plan.section_inset;
        core.item_frames = plan.item_frames;
        core.layout_passes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentModel;
    use std::cell::RefCell;

    fn plan(height: f64) -> LayoutPlan {
        LayoutPlan {
            surface_size: Size::new(20.0, height),
            content_size: Size::new(20.0, height),
            item_frames: vec![Frame::new(0.0, 0.0, 20.0, height)],
            ..LayoutPlan::default()
        }
    }

    #[test]
    fn surface_kind_follows_model_kind() {
        assert_eq!(Surface::for_kind(ComponentKind::List).kind(), SurfaceKind::List);
        assert_eq!(Surface::for_kind(ComponentKind::Grid).kind(), SurfaceKind::Grid);
        assert_eq!(
            Surface::for_kind(ComponentKind::Carousel).kind(),
            SurfaceKind::Grid
        );
    }

    #[test]
    fn staged_plan_commits_on_layout_if_needed() {
        let mut surface = Surface::for_kind(ComponentKind::Grid);
        surface.apply_plan(&plan(4.0));
        assert!(surface.needs_layout());
        assert!(surface.item_frames().is_empty());

        surface.layout_if_needed();
        assert!(!surface.needs_layout());
        assert_eq!(surface.frame().height, 4.0);
        assert_eq!(surface.item_frames().len(), 1);
        assert_eq!(surface.layout_passes(), 1);
        let flow = surface.as_grid().map(GridSurface::flow_layout);
        assert_eq!(flow.map(|f| f.item_sizes.len()), Some(1));
    }

    #[test]
    fn layout_if_needed_without_plan_is_noop() {
        let mut surface = Surface::for_kind(ComponentKind::List);
        surface.layout_if_needed();
        assert_eq!(surface.layout_passes(), 0);
    }

    #[test]
    fn subviews_are_not_duplicated() {
        let mut surface = Surface::for_kind(ComponentKind::Grid);
        surface.attach_subview(Subview::PageControl);
        surface.attach_subview(Subview::PageControl);
        assert_eq!(surface.subviews().len(), 1);
        surface.detach_subview(Subview::PageControl);
        assert!(surface.subviews().is_empty());
    }

    #[test]
    fn background_is_reused_and_resized() {
        let mut surface = Surface::for_kind(ComponentKind::List);
        surface.set_size(Size::new(10.0, 5.0));
        surface.attach_background();
        if let Some(background) = surface.background_mut() {
            background.attach(Subview::PageControl);
        }
        surface.set_size(Size::new(12.0, 5.0));
        surface.attach_background();
        let background = surface.background().expect("background attached");
        assert_eq!(background.frame.width, 12.0);
        assert_eq!(background.subviews(), &[Subview::PageControl]);
    }

    #[test]
    fn adapters_route_queries_to_model() {
        let model = Rc::new(RefCell::new(
            ComponentModel::new(ComponentKind::List).with_items(vec![Item::new("a")]),
        ));
        let source = Rc::new(SurfaceDataSource::new(Rc::downgrade(&model)));
        let delegate = Rc::new(SurfaceDelegate::new(Rc::downgrade(&model)));
        let mut surface = Surface::for_kind(ComponentKind::List);
        surface.attach_adapters(&source, &delegate);

        assert!(surface.has_data_source());
        assert_eq!(surface.item_count(), 1);
        assert!(surface.can_select(IndexPath::item(0)));

        drop(source);
        assert!(!surface.has_data_source());
        assert_eq!(surface.item_count(), 0);
    }

    #[test]
    fn grid_defaults_show_indicator_without_paging() {
        let grid = GridSurface::new();
        assert!(grid.shows_horizontal_indicator());
        assert!(!grid.is_paging());
    }
}
