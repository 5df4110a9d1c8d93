//! Components: a model bound to a live surface.
//!
//! A [`Component`] owns one [`ComponentModel`], one [`Surface`] chosen from the
//! model kind, the child components of its composite items and a page
//! control. Every change to the model goes through a mutation operation that
//! ends in [`Component::after_update`], which re-runs [`Component::setup`] at
//! the surface's current size. After any public operation returns, the
//! surface's committed geometry is the layout policy's plan for the current
//! model.
//!
//! # Module Structure
//!
//! - `surface`: list and grid surfaces, flow layout, background view
//! - `adapters`: data source and delegate adapters handed to the surface
//! - `delegate`: host callbacks (selection, refresh, focus, paging)
//! - `page_control`: page indicator state
//! - `composite`: child components derived from composite items
//! - `registry`: item-view kinds and their templates

pub mod adapters;
pub mod composite;
pub mod delegate;
pub mod page_control;
pub mod registry;
pub mod surface;

pub use adapters::{SurfaceDataSource, SurfaceDelegate};
pub use composite::{CompositeChild, CompositeSet, DeriveStats};
pub use delegate::{
    CarouselScrollDelegate, Completion, ComponentDelegate, FocusDelegate, RefreshHandle,
};
pub use page_control::{PageControl, PageControlParent, PageControlTint};
pub use registry::{ItemStyle, ItemTemplate, ViewRegistry};
pub use surface::{
    BackgroundView, FlowLayout, GridSurface, ListSurface, Subview, Surface, SurfaceKind,
};

use crate::cache::StateCache;
use crate::config::defaults::{self, Configuration};
use crate::layout_policy::{LayoutPlan, LayoutPolicy};
use crate::model::{
    ComponentKind, ComponentModel, Frame, IndexPath, Interaction, Item, LayoutConfig,
    PageIndicatorPlacement, Point, ScrollDirection, Size,
};
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, trace};

/// Precondition violations.
///
/// These are programming errors; no operation recovers from them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// The supplied surface cannot render the model kind.
    #[error("Surface kind {surface:?} cannot render a {model:?} model")]
    SurfaceKindMismatch {
        /// Kind of the model.
        model: ComponentKind,
        /// Kind of the surface supplied.
        surface: SurfaceKind,
    },

    /// A replacement model has a different kind than the live one.
    #[error("Cannot change component kind from {from:?} to {to:?}; build a new component")]
    KindChange {
        /// Kind of the live model.
        from: ComponentKind,
        /// Kind of the replacement.
        to: ComponentKind,
    },
}

/// Process-unique component identifier, used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component-{}", self.0)
    }
}

/// A model bound to a live surface.
pub struct Component {
    id: ComponentId,
    model: Rc<RefCell<ComponentModel>>,
    surface: Surface,
    layout: LayoutConfig,
    policy: LayoutPolicy,
    configuration: Configuration,
    data_source: Option<Rc<SurfaceDataSource>>,
    surface_delegate: Option<Rc<SurfaceDelegate>>,
    composites: CompositeSet,
    page_control: PageControl,
    plan: Option<LayoutPlan>,
    delegate: Option<Weak<dyn ComponentDelegate>>,
    focus_delegate: Option<Weak<dyn FocusDelegate>>,
    carousel_scroll_delegate: Option<Weak<dyn CarouselScrollDelegate>>,
    state_cache: Option<StateCache>,
    focused: Option<IndexPath>,
    current_page: usize,
    refreshing: Rc<Cell<bool>>,
    configured: bool,
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.id)
            .field("kind", &self.model.borrow().kind)
            .field("items", &self.model.borrow().items.len())
            .field("surface", &self.surface.kind())
            .field("composites", &self.composites.len())
            .field("configured", &self.configured)
            .finish()
    }
}

impl Component {
    /// Component for `model` with the process configuration and a fresh
    /// surface matching its kind.
    pub fn new(model: ComponentModel) -> Self {
        Self::with_configuration(model, &defaults::current())
    }

    /// Component for `model` with an explicit configuration.
    pub fn with_configuration(model: ComponentModel, configuration: &Configuration) -> Self {
        let surface = Surface::for_kind(model.kind);
        Self::build(model, surface, configuration)
    }

    /// Component for `model` rendering onto an existing surface.
    ///
    /// # Panics
    ///
    /// Panics when the surface variant does not match the model kind.
    pub fn with_surface(model: ComponentModel, surface: Surface) -> Self {
        Self::try_with_surface(model, surface, &defaults::current())
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Component for `model` rendering onto an existing surface, reporting a
    /// kind mismatch instead of panicking.
    pub fn try_with_surface(
        model: ComponentModel,
        surface: Surface,
        configuration: &Configuration,
    ) -> Result<Self, ComponentError> {
        let expected = SurfaceKind::for_model(model.kind);
        if surface.kind() != expected {
            return Err(ComponentError::SurfaceKindMismatch {
                model: model.kind,
                surface: surface.kind(),
            });
        }
        Ok(Self::build(model, surface, configuration))
    }

    /// Component whose model is restored from `cache`, or `fallback` when the
    /// cache holds nothing usable.
    pub fn from_cache(cache: StateCache, fallback: ComponentModel) -> Self {
        Self::from_cache_with_configuration(cache, fallback, &defaults::current())
    }

    /// [`Component::from_cache`] with an explicit configuration.
    pub fn from_cache_with_configuration(
        cache: StateCache,
        fallback: ComponentModel,
        configuration: &Configuration,
    ) -> Self {
        let model = match cache.load() {
            Some(model) => {
                debug!(key = cache.key(), "Restoring component from state cache");
                model
            }
            None => fallback,
        };
        let mut component = Self::with_configuration(model, configuration);
        component.state_cache = Some(cache);
        component
    }

    fn build(model: ComponentModel, mut surface: Surface, configuration: &Configuration) -> Self {
        let layout = model
            .layout
            .clone()
            .unwrap_or_else(|| configuration.default_layout.clone());

        configuration.register_views(&model);

        let direction = model.effective_direction();
        if let Some(flow) = surface.flow_layout_mut() {
            flow.configure(&layout, direction);
        }

        let kind = model.kind;
        let model = Rc::new(RefCell::new(model));
        let data_source = Rc::new(SurfaceDataSource::new(Rc::downgrade(&model)));
        let surface_delegate = Rc::new(SurfaceDelegate::new(Rc::downgrade(&model)));
        surface.attach_adapters(&data_source, &surface_delegate);

        let id = ComponentId::next();
        debug!(component = %id, kind = kind.as_str(), "Component constructed");

        Self {
            id,
            model,
            surface,
            layout,
            policy: LayoutPolicy::new(configuration.default_layout.clone()),
            configuration: configuration.clone(),
            data_source: Some(data_source),
            surface_delegate: Some(surface_delegate),
            composites: CompositeSet::new(),
            page_control: PageControl::new(),
            plan: None,
            delegate: None,
            focus_delegate: None,
            carousel_scroll_delegate: None,
            state_cache: None,
            focused: None,
            current_page: 0,
            refreshing: Rc::new(Cell::new(false)),
            configured: false,
        }
    }

    // ===== Queries =====

    /// Identifier used in logs.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Borrow the model.
    pub fn model(&self) -> Ref<'_, ComponentModel> {
        self.model.borrow()
    }

    /// Model kind.
    pub fn kind(&self) -> ComponentKind {
        self.model.borrow().kind
    }

    /// Copy of the item at `index`.
    pub fn item(&self, index: usize) -> Option<Item> {
        self.model.borrow().items.get(index).cloned()
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.model.borrow().items.len()
    }

    /// Layout resolved at construction or set since.
    pub fn resolved_layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Scroll direction the component currently lays out with.
    pub fn scroll_direction(&self) -> ScrollDirection {
        self.model.borrow().effective_direction()
    }

    /// The live surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable surface, for hosts adjusting scroll offsets.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Page indicator state.
    pub fn page_control(&self) -> &PageControl {
        &self.page_control
    }

    /// Child components of composite items.
    pub fn composites(&self) -> &CompositeSet {
        &self.composites
    }

    /// Last applied layout plan.
    pub fn plan(&self) -> Option<&LayoutPlan> {
        self.plan.as_ref()
    }

    /// Configuration captured at construction.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Associated state cache.
    pub fn state_cache(&self) -> Option<&StateCache> {
        self.state_cache.as_ref()
    }

    /// Associate a state cache for hosts that save on demand.
    pub fn set_state_cache(&mut self, cache: Option<StateCache>) {
        self.state_cache = cache;
    }

    /// True once `setup` has run.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Focused item.
    pub fn focused(&self) -> Option<IndexPath> {
        self.focused
    }

    /// Current page of a horizontal component.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// True while a refresh completion is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.get()
    }

    /// Resolved size of the item at `index_path`, or zero when there is none.
    pub fn size_for_item(&self, index_path: IndexPath) -> Size {
        self.surface_delegate
            .as_ref()
            .map(|delegate| delegate.size_for_item(index_path))
            .unwrap_or(Size::ZERO)
    }

    // ===== Delegates =====

    /// Set the interaction delegate. The component does not keep it alive.
    pub fn set_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: ComponentDelegate + 'static,
    {
        let delegate: Rc<dyn ComponentDelegate> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    /// Set the focus delegate. The component does not keep it alive.
    pub fn set_focus_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: FocusDelegate + 'static,
    {
        let delegate: Rc<dyn FocusDelegate> = delegate.clone();
        self.focus_delegate = Some(Rc::downgrade(&delegate));
    }

    /// Set the paging delegate. The component does not keep it alive.
    pub fn set_carousel_scroll_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: CarouselScrollDelegate + 'static,
    {
        let delegate: Rc<dyn CarouselScrollDelegate> = delegate.clone();
        self.carousel_scroll_delegate = Some(Rc::downgrade(&delegate));
    }

    /// Forget every delegate.
    pub fn clear_delegates(&mut self) {
        self.delegate = None;
        self.focus_delegate = None;
        self.carousel_scroll_delegate = None;
    }

    fn delegate(&self) -> Option<Rc<dyn ComponentDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    // ===== Setup and layout =====

    /// Attach to a container of `size`.
    ///
    /// Runs the view hook, prepares the surface, lays out and reconciles the
    /// page control. Safe to call repeatedly; equal sizes give equal geometry.
    pub fn setup(&mut self, size: Size) {
        debug!(component = %self.id, width = size.width, height = size.height, "setup");

        if let Some(hook) = self.configuration.view_hook.clone() {
            hook(&mut self.surface);
        }

        match self.surface.kind() {
            SurfaceKind::List => self.setup_list(size),
            SurfaceKind::Grid => self.setup_grid(size),
        }

        self.layout(size);
        self.configure_page_control();
        self.configured = true;
    }

    fn attach_adapters(&mut self) {
        if let (Some(source), Some(delegate)) = (&self.data_source, &self.surface_delegate) {
            self.surface.attach_adapters(source, delegate);
        }
    }

    fn setup_list(&mut self, size: Size) {
        self.surface.set_size(size);
        self.attach_adapters();
        self.surface.attach_background();
    }

    fn setup_grid(&mut self, size: Size) {
        self.surface.set_size(size);
        self.attach_adapters();
        self.surface.attach_background();

        let kind = self.kind();
        if kind == ComponentKind::Carousel {
            self.model.borrow_mut().interaction.scroll_direction = ScrollDirection::Horizontal;
            if let Some(grid) = self.surface.as_grid_mut() {
                grid.set_shows_horizontal_indicator(false);
            }
        }

        let direction = self.scroll_direction();
        if let Some(flow) = self.surface.flow_layout_mut() {
            flow.configure(&self.layout, direction);
        }
        if direction == ScrollDirection::Horizontal {
            self.setup_horizontal();
        }
    }

    fn setup_horizontal(&mut self) {
        let paginate = self.model.borrow().interaction.paginate
            || self.kind() == ComponentKind::Carousel;
        let inset = crate::layout_policy::horizontal_section_inset(&self.layout);
        if let Some(grid) = self.surface.as_grid_mut() {
            grid.set_paging(paginate);
            grid.flow_layout_mut().section_inset = inset;
        }
    }

    /// Recompute and commit geometry for `size` without rebuilding the
    /// surface.
    pub fn layout(&mut self, size: Size) {
        if self.composites.is_empty() {
            self.reconcile_composites();
        }

        let plan = {
            let model = self.model.borrow();
            trace!(
                component = %self.id,
                surface = ?self.surface.kind(),
                direction = ?model.effective_direction(),
                width = size.width,
                "computing layout"
            );
            self.policy.compute(&model, &self.layout, size)
        };
        self.apply_plan(plan);
    }

    fn apply_plan(&mut self, plan: LayoutPlan) {
        self.surface.apply_plan(&plan);
        self.surface.layout_if_needed();
        self.surface.attach_background();

        {
            let mut model = self.model.borrow_mut();
            for (item, frame) in model.items.iter_mut().zip(&plan.item_frames) {
                item.size = frame.size();
            }
        }

        for child in self.composites.iter_mut() {
            let size = plan.item_size(child.index);
            child.component.setup(size);
        }

        let count = plan.item_count();
        if count == 0 {
            self.current_page = 0;
        } else {
            self.current_page = self.current_page.min(count - 1);
        }
        if plan.direction == ScrollDirection::Horizontal {
            let x = page_offset(&plan, self.current_page);
            self.surface.set_content_offset(Point::new(x, 0.0));
        }

        trace!(
            component = %self.id,
            items = count,
            height = plan.surface_size.height,
            "layout applied"
        );
        self.plan = Some(plan);
    }

    /// Bring the composite set in line with the model.
    pub fn reconcile_composites(&mut self) -> DeriveStats {
        let model = self.model.borrow();
        let configuration = &self.configuration;
        let stats = self.composites.derive(&model.items, |nested| {
            Component::with_configuration(nested.clone(), configuration)
        });
        if stats != DeriveStats::default() {
            debug!(
                component = %self.id,
                reused = stats.reused,
                built = stats.built,
                dropped = stats.dropped,
                "Reconciled composites"
            );
        }
        stats
    }

    /// Attach, update or detach the page control for the resolved layout.
    pub fn configure_page_control(&mut self) {
        let Some(placement) = self.layout.page_indicator else {
            self.detach_page_control();
            return;
        };

        // vertical plans carry no indicator geometry
        let Some(y) = self.plan.as_ref().and_then(|plan| plan.page_control_y) else {
            self.detach_page_control();
            return;
        };

        let count = self.item_count();
        self.page_control.set_page_count(count);
        self.page_control.current_page = self.current_page.min(count.saturating_sub(1));

        match placement {
            PageIndicatorPlacement::Below => {
                let width = self
                    .surface
                    .background()
                    .map(|background| background.frame.width)
                    .unwrap_or(0.0);
                self.page_control.frame = Frame::new(0.0, y, width, self.page_control.frame.height);
                self.page_control.tint = Some(PageControlTint::light());
                self.attach_page_control(PageControlParent::Background);
            }
            PageIndicatorPlacement::Overlay => {
                let width = self.surface.frame().width;
                self.page_control.frame = Frame::new(0.0, y, width, self.page_control.frame.height);
                self.page_control.tint = None;
                self.attach_page_control(PageControlParent::Surface);
            }
        }
    }

    fn attach_page_control(&mut self, parent: PageControlParent) {
        if self.page_control.parent() != Some(parent) {
            self.detach_page_control();
        }
        match parent {
            PageControlParent::Background => {
                if let Some(background) = self.surface.background_mut() {
                    background.attach(Subview::PageControl);
                }
            }
            PageControlParent::Surface => self.surface.attach_subview(Subview::PageControl),
        }
        self.page_control.set_parent(Some(parent));
    }

    fn detach_page_control(&mut self) {
        match self.page_control.parent() {
            Some(PageControlParent::Background) => {
                if let Some(background) = self.surface.background_mut() {
                    background.detach(Subview::PageControl);
                }
            }
            Some(PageControlParent::Surface) => self.surface.detach_subview(Subview::PageControl),
            None => {}
        }
        self.page_control.set_parent(None);
    }

    /// Re-run setup at the surface's current size.
    ///
    /// Every mutation operation ends here.
    pub fn after_update(&mut self) {
        let size = self.surface.frame().size();
        self.setup(size);
    }

    // ===== Mutation =====

    fn did_mutate(&mut self, operation: &'static str) {
        self.configuration.register_views(&self.model.borrow());
        self.reconcile_composites();
        debug!(component = %self.id, operation, items = self.item_count(), "Model mutated");
        self.after_update();
    }

    /// Add `item` at the end.
    pub fn append(&mut self, item: Item) {
        self.model.borrow_mut().items.push(item);
        self.did_mutate("append");
    }

    /// Add `items` at the end.
    pub fn append_items(&mut self, items: Vec<Item>) {
        self.model.borrow_mut().items.extend(items);
        self.did_mutate("append_items");
    }

    /// Add `items` at the start, keeping their order.
    pub fn prepend_items(&mut self, items: Vec<Item>) {
        {
            let mut model = self.model.borrow_mut();
            model.items.splice(0..0, items);
        }
        self.did_mutate("prepend_items");
    }

    /// Insert `item` at `index`, clamped to the end.
    pub fn insert(&mut self, item: Item, index: usize) {
        {
            let mut model = self.model.borrow_mut();
            let index = index.min(model.items.len());
            model.items.insert(index, item);
        }
        self.did_mutate("insert");
    }

    /// Replace the item at `index`. Returns `false` when out of range.
    pub fn update(&mut self, item: Item, index: usize) -> bool {
        {
            let mut model = self.model.borrow_mut();
            match model.items.get_mut(index) {
                Some(slot) => *slot = item,
                None => return false,
            }
        }
        self.did_mutate("update");
        true
    }

    /// Remove the item at `index`. Returns `false` when out of range.
    pub fn delete(&mut self, index: usize) -> bool {
        {
            let mut model = self.model.borrow_mut();
            if index >= model.items.len() {
                return false;
            }
            model.items.remove(index);
        }
        self.did_mutate("delete");
        true
    }

    /// Remove every listed index that exists. Returns how many were removed.
    pub fn delete_items(&mut self, indexes: &[usize]) -> usize {
        let removed = {
            let mut model = self.model.borrow_mut();
            let before = model.items.len();
            let mut position = 0;
            model.items.retain(|_| {
                let keep = !indexes.contains(&position);
                position += 1;
                keep
            });
            before - model.items.len()
        };
        if removed > 0 {
            self.did_mutate("delete_items");
        }
        removed
    }

    /// Replace all items.
    pub fn reload(&mut self, items: Vec<Item>) {
        self.model.borrow_mut().items = items;
        self.did_mutate("reload");
    }

    /// Replace the model as a whole. The kind must not change.
    pub fn set_model(&mut self, model: ComponentModel) -> Result<(), ComponentError> {
        let current = self.kind();
        if model.kind != current {
            return Err(ComponentError::KindChange {
                from: current,
                to: model.kind,
            });
        }
        self.layout = model
            .layout
            .clone()
            .unwrap_or_else(|| self.configuration.default_layout.clone());
        *self.model.borrow_mut() = model;
        self.composites.clear();
        self.did_mutate("set_model");
        Ok(())
    }

    /// Replace the layout.
    pub fn set_layout(&mut self, layout: LayoutConfig) {
        self.model.borrow_mut().layout = Some(layout.clone());
        self.layout = layout;
        self.did_mutate("set_layout");
    }

    /// Replace the interaction mode. Carousels stay horizontal.
    pub fn set_interaction(&mut self, interaction: Interaction) {
        self.model.borrow_mut().interaction = interaction;
        self.did_mutate("set_interaction");
    }

    // ===== Interaction =====

    /// Report a selection of the item at `index_path` to the delegate.
    ///
    /// Returns `false` when there is no such item.
    pub fn select(&self, index_path: IndexPath) -> bool {
        if !self.surface.can_select(index_path) {
            return false;
        }
        let Some(item) = self.surface.item_at(index_path) else {
            return false;
        };
        debug!(component = %self.id, index = index_path.item, "Item selected");
        if let Some(delegate) = self.delegate() {
            delegate.item_selected(self, &item);
        }
        true
    }

    /// Move focus to `index_path` and notify the focus delegate.
    pub fn focus(&mut self, index_path: IndexPath) -> bool {
        if !self.surface.can_select(index_path) {
            return false;
        }
        self.focused = Some(index_path);
        if let Some(delegate) = self.focus_delegate.as_ref().and_then(Weak::upgrade) {
            delegate.focus_changed(self, index_path);
        }
        true
    }

    /// Scroll a horizontal component to `page`.
    ///
    /// Returns `false` for vertical components and out-of-range pages.
    pub fn scroll_to_page(&mut self, page: usize) -> bool {
        if self.scroll_direction() != ScrollDirection::Horizontal || page >= self.item_count() {
            return false;
        }
        self.current_page = page;
        self.page_control.current_page = page;
        let x = self
            .plan
            .as_ref()
            .map(|plan| page_offset(plan, page))
            .unwrap_or(0.0);
        self.surface.set_content_offset(Point::new(x, 0.0));

        if let Some(delegate) = self
            .carousel_scroll_delegate
            .as_ref()
            .and_then(Weak::upgrade)
        {
            delegate.did_scroll(self, page);
            if let Some(item) = self.item(page) {
                delegate.did_end_scrolling(self, &item);
            }
        }
        true
    }

    /// Ask the host to reload.
    ///
    /// The completion handed to the delegate ends the refresh, whether the
    /// host completes it or drops it. With no live delegate the refresh
    /// resolves immediately. Returns `false` while a
    /// previous refresh is still outstanding.
    pub fn refresh(&self) -> bool {
        if self.refreshing.get() {
            return false;
        }
        self.refreshing.set(true);

        let flag = Rc::clone(&self.refreshing);
        let cancelled = Rc::clone(&self.refreshing);
        let completion = Completion::new(move || flag.set(false))
            .on_cancel(move || cancelled.set(false));
        let handle = RefreshHandle::new(Rc::clone(&self.refreshing));

        match self.delegate() {
            Some(delegate) => delegate.reload_requested(handle, completion),
            None => completion.complete(),
        }
        true
    }

    /// Tell the host the end of the content was reached.
    pub fn reached_end(&self, completion: Completion) {
        if let Some(delegate) = self.delegate() {
            delegate.did_reach_end(self, completion);
        }
    }
}

/// Content offset that brings `page` to the leading edge.
fn page_offset(plan: &LayoutPlan, page: usize) -> f64 {
    plan.item_frame(page)
        .map(|frame| (frame.x - plan.section_inset.left).max(0.0))
        .unwrap_or(0.0)
}

impl Drop for Component {
    fn drop(&mut self) {
        self.surface.detach_adapters();
        self.data_source = None;
        self.surface_delegate = None;
        trace!(component = %self.id, "Component dropped");
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
