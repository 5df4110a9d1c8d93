//! Data-source and delegate adapters between a surface and its component.
//!
//! The component owns both adapters; the surface only holds `Weak` handles to
//! them, and the adapters only hold a `Weak` handle to the component's model.
//! Nothing here can keep a component alive, and every query degrades to an
//! empty answer once the model is gone.

use crate::model::{ComponentModel, IndexPath, Item, Size};
use std::cell::RefCell;
use std::rc::Weak;

/// Answers "how many items" and "which item" for a surface.
#[derive(Debug)]
pub struct SurfaceDataSource {
    model: Weak<RefCell<ComponentModel>>,
}

impl SurfaceDataSource {
    /// Adapter reading from `model`.
    pub fn new(model: Weak<RefCell<ComponentModel>>) -> Self {
        Self { model }
    }

    /// Item count of the model, or 0 once it is gone.
    pub fn number_of_items(&self) -> usize {
        self.model
            .upgrade()
            .map(|model| model.borrow().items.len())
            .unwrap_or(0)
    }

    /// Item at `index_path`.
    pub fn item(&self, index_path: IndexPath) -> Option<Item> {
        if index_path.section != 0 {
            return None;
        }
        let model = self.model.upgrade()?;
        let model = model.borrow();
        model.items.get(index_path.item).cloned()
    }
}

/// Answers sizing and selection questions for a surface.
#[derive(Debug)]
pub struct SurfaceDelegate {
    model: Weak<RefCell<ComponentModel>>,
}

impl SurfaceDelegate {
    /// Adapter reading from `model`.
    pub fn new(model: Weak<RefCell<ComponentModel>>) -> Self {
        Self { model }
    }

    /// Resolved size of the item at `index_path`; zero when there is none.
    pub fn size_for_item(&self, index_path: IndexPath) -> Size {
        if index_path.section != 0 {
            return Size::ZERO;
        }
        self.model
            .upgrade()
            .and_then(|model| model.borrow().items.get(index_path.item).map(|i| i.size))
            .unwrap_or(Size::ZERO)
    }

    /// True when `index_path` addresses an existing item.
    pub fn can_select(&self, index_path: IndexPath) -> bool {
        index_path.section == 0
            && self
                .model
                .upgrade()
                .is_some_and(|model| index_path.item < model.borrow().items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;
    use std::rc::Rc;

    fn model_with(count: usize) -> Rc<RefCell<ComponentModel>> {
        let items = (0..count)
            .map(|i| {
                let mut item = Item::new(format!("{i}"));
                item.size = Size::new(10.0, i as f64 + 1.0);
                item
            })
            .collect();
        Rc::new(RefCell::new(
            ComponentModel::new(ComponentKind::List).with_items(items),
        ))
    }

    #[test]
    fn data_source_reads_live_model() {
        let model = model_with(2);
        let source = SurfaceDataSource::new(Rc::downgrade(&model));
        assert_eq!(source.number_of_items(), 2);
        model.borrow_mut().items.push(Item::new("late"));
        assert_eq!(source.number_of_items(), 3);
        assert_eq!(
            source.item(IndexPath::item(2)).map(|i| i.title),
            Some("late".to_string())
        );
    }

    #[test]
    fn data_source_is_empty_after_model_drop() {
        let model = model_with(2);
        let source = SurfaceDataSource::new(Rc::downgrade(&model));
        drop(model);
        assert_eq!(source.number_of_items(), 0);
        assert_eq!(source.item(IndexPath::item(0)), None);
    }

    #[test]
    fn delegate_sizes_are_total() {
        let model = model_with(2);
        let delegate = SurfaceDelegate::new(Rc::downgrade(&model));
        assert_eq!(delegate.size_for_item(IndexPath::item(1)), Size::new(10.0, 2.0));
        assert_eq!(delegate.size_for_item(IndexPath::item(9)), Size::ZERO);
        assert_eq!(delegate.size_for_item(IndexPath::new(1, 0)), Size::ZERO);
    }

    #[test]
    fn delegate_can_select_existing_items_only() {
        let model = model_with(1);
        let delegate = SurfaceDelegate::new(Rc::downgrade(&model));
        assert!(delegate.can_select(IndexPath::item(0)));
        assert!(!delegate.can_select(IndexPath::item(1)));
        drop(model);
        assert!(!delegate.can_select(IndexPath::item(0)));
    }
}
