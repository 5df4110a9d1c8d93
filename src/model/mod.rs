//! Declarative model types.
//!
//! A [`ComponentModel`] describes what a component renders: its kind, its
//! items, optional layout hints and the interaction mode. Models are plain
//! serde values so they can be loaded from JSON documents and persisted by the
//! state cache.

pub mod component_model;
pub mod error;
pub mod geometry;
pub mod item;
pub mod layout;

pub use component_model::{ComponentKind, ComponentModel};
pub use error::ModelError;
pub use geometry::{Frame, IndexPath, Insets, Point, Size};
pub use item::Item;
pub use layout::{
    DEFAULT_ITEM_HEIGHT, Interaction, LayoutConfig, PageIndicatorPlacement, ScrollDirection,
};
