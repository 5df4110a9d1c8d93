//! Process-wide component configuration.
//!
//! Components read three pieces of shared state at construction: the default
//! layout, the view hook run at the start of every setup, and the item-view
//! registry. They live here as UI-thread state, initialized lazily on first
//! access. A component takes a [`Configuration`] value when it is built, so
//! tests can construct one directly or swap the process configuration first.
//!
//! The layout is copied into each component; later changes to the default do
//! not reach components that already exist. The registry is shared.

use crate::component::registry::ViewRegistry;
use crate::component::surface::Surface;
use crate::model::{ComponentModel, LayoutConfig};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Kind registered as the fallback item view.
pub const DEFAULT_ITEM_KIND: &str = "default";

/// Callback run against a surface at the start of every setup.
pub type ViewHook = Rc<dyn Fn(&mut Surface)>;

/// Shared item-view registry handle.
pub type SharedRegistry = Rc<RefCell<ViewRegistry>>;

/// Configuration handed to components at construction.
#[derive(Clone)]
pub struct Configuration {
    /// Layout adopted by models without their own.
    pub default_layout: LayoutConfig,
    /// Kind registered as the fallback item view.
    pub default_item_kind: String,
    /// Optional surface customization hook.
    pub view_hook: Option<ViewHook>,
    /// Item-view registry shared by all components.
    pub registry: SharedRegistry,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_layout: LayoutConfig::default(),
            default_item_kind: DEFAULT_ITEM_KIND.to_string(),
            view_hook: None,
            registry: Rc::new(RefCell::new(ViewRegistry::new())),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("default_layout", &self.default_layout)
            .field("default_item_kind", &self.default_item_kind)
            .field("view_hook", &self.view_hook.is_some())
            .field("registry", &self.registry.borrow().len())
            .finish()
    }
}

impl Configuration {
    /// Register the fallback view kind (first call only) and the kinds
    /// `model` needs.
    pub fn register_views(&self, model: &ComponentModel) {
        let mut registry = self.registry.borrow_mut();
        registry.register_default(&self.default_item_kind);
        registry.register_kinds(model.item_kinds());
    }
}

thread_local! {
    static CONFIGURATION: RefCell<Configuration> = RefCell::new(Configuration::default());
}

/// Snapshot of the current configuration.
///
/// The snapshot shares the registry and hook with the process configuration
/// but owns its copy of the default layout.
pub fn current() -> Configuration {
    CONFIGURATION.with(|config| config.borrow().clone())
}

/// Mutate the process configuration in place.
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Configuration),
{
    CONFIGURATION.with(|config| f(&mut config.borrow_mut()));
}

/// Replace the default layout for components built from now on.
pub fn set_default_layout(layout: LayoutConfig) {
    configure(|config| config.default_layout = layout);
}

/// Install or clear the view hook.
pub fn set_view_hook(hook: Option<ViewHook>) {
    configure(|config| config.view_hook = hook);
}

/// Restore the initial configuration, including a fresh registry.
pub fn reset() {
    configure(|config| *config = Configuration::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentKind, Item};

    #[test]
    fn current_returns_copy_of_default_layout() {
        reset();
        let snapshot = current();
        set_default_layout(LayoutConfig::default().with_span(4.0));
        assert_eq!(snapshot.default_layout.span, 0.0);
        assert_eq!(current().default_layout.span, 4.0);
        reset();
    }

    #[test]
    fn registry_is_shared_between_snapshots() {
        reset();
        let a = current();
        let b = current();
        a.registry.borrow_mut().register_default("default");
        assert_eq!(b.registry.borrow().default_kind(), Some("default"));
        reset();
    }

    #[test]
    fn register_views_registers_default_once() {
        let config = Configuration::default();
        let model = ComponentModel::new(ComponentKind::List)
            .with_items(vec![Item::new("a").with_kind("card")]);
        config.register_views(&model);
        config.register_views(&model);
        let registry = config.registry.borrow();
        assert_eq!(registry.default_kind(), Some(DEFAULT_ITEM_KIND));
        assert!(registry.contains("card"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn debug_output_omits_hook_body() {
        let config = Configuration::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("view_hook: false"));
    }
}
