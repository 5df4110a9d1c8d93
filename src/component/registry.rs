//! Item-view registry.
//!
//! Maps item-view kinds to the template the renderer draws them with. One
//! registry is shared by every component on the UI thread (see
//! [`crate::config::defaults`]); the default kind is registered exactly once.

use std::collections::HashMap;
use tracing::debug;

/// How an item view is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemStyle {
    /// Title and subtitle lines without decoration.
    #[default]
    Plain,
    /// Bordered card with the title in the border.
    Card,
}

impl ItemStyle {
    /// Style conventionally associated with a kind name.
    pub fn for_kind(kind: &str) -> Self {
        match kind {
            "card" | "tile" => Self::Card,
            _ => Self::Plain,
        }
    }
}

/// Registered template for one item-view kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemTemplate {
    /// Drawing style.
    pub style: ItemStyle,
}

impl ItemTemplate {
    /// Template with the given style.
    pub fn new(style: ItemStyle) -> Self {
        Self { style }
    }
}

/// Kind-to-template table with a fallback kind.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    templates: HashMap<String, ItemTemplate>,
    default_kind: Option<String>,
}

impl ViewRegistry {
    /// Empty registry without a default kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the template for `kind`.
    pub fn register(&mut self, kind: impl Into<String>, template: ItemTemplate) {
        self.templates.insert(kind.into(), template);
    }

    /// Register `kind` as the fallback kind.
    ///
    /// Only the first call has an effect; later calls leave the existing
    /// default in place and return `false`.
    pub fn register_default(&mut self, kind: &str) -> bool {
        if self.default_kind.is_some() {
            return false;
        }
        debug!(kind, "Registering default item view");
        self.templates
            .entry(kind.to_string())
            .or_insert_with(|| ItemTemplate::new(ItemStyle::for_kind(kind)));
        self.default_kind = Some(kind.to_string());
        true
    }

    /// Register every kind a model needs that is not known yet.
    ///
    /// Returns the number of newly registered kinds.
    pub fn register_kinds<I>(&mut self, kinds: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for kind in kinds {
            if !self.templates.contains_key(&kind) {
                let template = ItemTemplate::new(ItemStyle::for_kind(&kind));
                self.templates.insert(kind, template);
                added += 1;
            }
        }
        added
    }

    /// Fallback kind, once registered.
    pub fn default_kind(&self) -> Option<&str> {
        self.default_kind.as_deref()
    }

    /// True when `kind` has a template.
    pub fn contains(&self, kind: &str) -> bool {
        self.templates.contains_key(kind)
    }

    /// Template for `kind`, falling back to the default kind's template.
    pub fn template(&self, kind: &str) -> ItemTemplate {
        if let Some(template) = self.templates.get(kind) {
            return *template;
        }
        self.default_kind
            .as_ref()
            .and_then(|kind| self.templates.get(kind))
            .copied()
            .unwrap_or_default()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_default_applies_once() {
        let mut registry = ViewRegistry::new();
        assert!(registry.register_default("default"));
        assert!(!registry.register_default("card"));
        assert_eq!(registry.default_kind(), Some("default"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_kinds_skips_known_kinds() {
        let mut registry = ViewRegistry::new();
        registry.register_default("default");
        let added = registry.register_kinds(vec!["card".to_string(), "default".to_string()]);
        assert_eq!(added, 1);
        assert!(registry.contains("card"));
    }

    #[test]
    fn unknown_kind_falls_back_to_default_template() {
        let mut registry = ViewRegistry::new();
        registry.register_default("tile");
        assert_eq!(registry.template("missing").style, ItemStyle::Card);
        assert_eq!(registry.template("").style, ItemStyle::Card);
    }

    #[test]
    fn explicit_template_overrides_convention() {
        let mut registry = ViewRegistry::new();
        registry.register("row", ItemTemplate::new(ItemStyle::Card));
        assert_eq!(registry.template("row").style, ItemStyle::Card);
    }

    #[test]
    fn empty_registry_uses_plain_style() {
        let registry = ViewRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.template("anything").style, ItemStyle::Plain);
    }
}
