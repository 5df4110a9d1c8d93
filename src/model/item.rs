//! Items rendered by a component.

use super::component_model::ComponentModel;
use super::geometry::Size;
use serde::{Deserialize, Serialize};

/// One renderable unit of a component.
///
/// Items are addressed by position; they carry no stable identity of their own.
/// An item with `children` is a composite item and drives a nested component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Primary text.
    pub title: String,
    /// Secondary text.
    pub subtitle: String,
    /// Body text.
    pub text: String,
    /// Item-view kind; empty selects the registry default.
    pub kind: String,
    /// Resolved size, written by the layout pass.
    pub size: Size,
    /// Preferred height; falls back to the layout's item height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_hint: Option<f64>,
    /// Nested model for composite items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Box<ComponentModel>>,
    /// Free-form host data.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Item with a title only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Composite item wrapping a nested model.
    pub fn composite(title: impl Into<String>, children: ComponentModel) -> Self {
        Self {
            title: title.into(),
            children: Some(Box::new(children)),
            ..Self::default()
        }
    }

    /// Builder-style subtitle setter.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Builder-style body text setter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style view kind setter.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder-style height hint setter.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height_hint = Some(height);
        self
    }

    /// True when the item carries a nested model.
    pub fn is_composite(&self) -> bool {
        self.children.is_some()
    }

    /// Structural equality ignoring the resolved size.
    ///
    /// Used to decide whether a composite child can be reused after a model
    /// change: a relayout rewrites `size` but never the item's shape.
    pub fn same_shape(&self, other: &Item) -> bool {
        self.title == other.title
            && self.subtitle == other.subtitle
            && self.text == other.text
            && self.kind == other.kind
            && self.height_hint == other.height_hint
            && self.meta == other.meta
            && match (&self.children, &other.children) {
                (Some(a), Some(b)) => a.same_shape(b),
                (None, None) => true,
                _ => false,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;

    #[test]
    fn new_item_has_zero_size() {
        let item = Item::new("a");
        assert_eq!(item.size, Size::ZERO);
        assert!(!item.is_composite());
    }

    #[test]
    fn same_shape_ignores_size() {
        let a = Item::new("a").with_subtitle("b");
        let mut b = a.clone();
        b.size = Size::new(10.0, 3.0);
        assert!(a.same_shape(&b));
    }

    #[test]
    fn same_shape_compares_nested_models() {
        let a = Item::composite(
            "row",
            ComponentModel::new(ComponentKind::Carousel).with_items(vec![Item::new("x")]),
        );
        let b = Item::composite(
            "row",
            ComponentModel::new(ComponentKind::Carousel).with_items(vec![Item::new("y")]),
        );
        assert!(!a.same_shape(&b));
        assert!(a.same_shape(&a.clone()));
    }

    #[test]
    fn empty_optional_fields_are_not_serialized() {
        let json = serde_json::to_string(&Item::new("a")).expect("serializable");
        assert!(!json.contains("children"));
        assert!(!json.contains("height_hint"));
        assert!(!json.contains("meta"));
    }
}
