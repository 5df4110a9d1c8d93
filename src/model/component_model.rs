//! Declarative description of a component.

use super::error::ModelError;
use super::item::Item;
use super::layout::{Interaction, LayoutConfig, ScrollDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Which surface and layout branch a model renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Single-column list surface.
    #[default]
    List,
    /// Grid surface.
    Grid,
    /// Grid surface forced to horizontal paging.
    Carousel,
}

impl ComponentKind {
    /// True when this kind renders on a grid surface.
    pub fn uses_grid_surface(&self) -> bool {
        !matches!(self, Self::List)
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Carousel => "carousel",
        }
    }
}

/// Everything a component needs to know about what it renders.
///
/// Owned exclusively by one component while that component is alive and only
/// mutated through its mutation operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentModel {
    /// Surface and layout selector.
    pub kind: ComponentKind,
    /// Header text.
    pub title: String,
    /// Items in render order.
    pub items: Vec<Item>,
    /// Explicit layout; `None` adopts the process default at construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutConfig>,
    /// Scroll direction and flags.
    pub interaction: Interaction,
    /// Free-form host data.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl ComponentModel {
    /// Empty model of the given kind.
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Builder-style items setter.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Builder-style layout setter.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Builder-style interaction setter.
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    /// Builder-style title setter.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Scroll direction after the carousel override.
    pub fn effective_direction(&self) -> ScrollDirection {
        match self.kind {
            ComponentKind::Carousel => ScrollDirection::Horizontal,
            ComponentKind::List => ScrollDirection::Vertical,
            ComponentKind::Grid => self.interaction.scroll_direction,
        }
    }

    /// Item-view kinds used by this model and its nested models.
    ///
    /// Empty kinds are skipped; they resolve to the registry default.
    pub fn item_kinds(&self) -> BTreeSet<String> {
        let mut kinds = BTreeSet::new();
        self.collect_kinds(&mut kinds);
        kinds
    }

    fn collect_kinds(&self, kinds: &mut BTreeSet<String>) {
        for item in &self.items {
            if !item.kind.is_empty() {
                kinds.insert(item.kind.clone());
            }
            if let Some(children) = &item.children {
                children.collect_kinds(kinds);
            }
        }
    }

    /// Structural equality ignoring resolved item sizes.
    pub fn same_shape(&self, other: &ComponentModel) -> bool {
        self.kind == other.kind
            && self.title == other.title
            && self.layout == other.layout
            && self.interaction == other.interaction
            && self.meta == other.meta
            && self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.same_shape(b))
    }

    /// Decode a model from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Decode {
            reason: e.to_string(),
        })
    }

    /// Read and decode a model file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ModelError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&contents)
    }
}
