//! Child components derived from composite items.
//!
//! Every item carrying a nested model owns one child component. Derivation is
//! diff-aware: a child is kept when an item with the same nested model still
//! exists (at the same index or after a shift), and rebuilt otherwise.

use super::Component;
use crate::model::{ComponentModel, Item};

/// A child component and the item that drives it.
#[derive(Debug)]
pub struct CompositeChild {
    /// Index of the driving item.
    pub index: usize,
    /// The nested model the child was built from.
    source: ComponentModel,
    /// The child itself.
    pub component: Component,
}

impl CompositeChild {
    /// Nested model the child was built from.
    pub fn source(&self) -> &ComponentModel {
        &self.source
    }
}

/// Counts from one derivation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeriveStats {
    /// Children kept from the previous set.
    pub reused: usize,
    /// Children built fresh.
    pub built: usize,
    /// Children dropped.
    pub dropped: usize,
}

/// Ordered set of child components.
#[derive(Debug, Default)]
pub struct CompositeSet {
    children: Vec<CompositeChild>,
}

impl CompositeSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Children in item order.
    pub fn iter(&self) -> impl Iterator<Item = &CompositeChild> {
        self.children.iter()
    }

    /// Mutable children in item order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CompositeChild> {
        self.children.iter_mut()
    }

    /// Child driven by the item at `index`.
    pub fn get(&self, index: usize) -> Option<&Component> {
        self.children
            .iter()
            .find(|child| child.index == index)
            .map(|child| &child.component)
    }

    /// Mutable child driven by the item at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.children
            .iter_mut()
            .find(|child| child.index == index)
            .map(|child| &mut child.component)
    }

    /// Drop every child.
    pub fn clear(&mut self) -> usize {
        let dropped = self.children.len();
        self.children.clear();
        dropped
    }

    /// Bring the set in line with `items`.
    ///
    /// Running it twice on the same items reuses every child the second time.
    pub fn derive<F>(&mut self, items: &[Item], mut build: F) -> DeriveStats
    where
        F: FnMut(&ComponentModel) -> Component,
    {
        let mut stats = DeriveStats::default();
        let mut previous: Vec<Option<CompositeChild>> =
            std::mem::take(&mut self.children).into_iter().map(Some).collect();

        for (index, item) in items.iter().enumerate() {
            let Some(nested) = item.children.as_deref() else {
                continue;
            };

            let slot = previous
                .iter()
                .position(|slot| {
                    slot.as_ref()
                        .is_some_and(|c| c.index == index && c.source.same_shape(nested))
                })
                .or_else(|| {
                    previous.iter().position(|slot| {
                        slot.as_ref().is_some_and(|c| c.source.same_shape(nested))
                    })
                });

            match slot.and_then(|slot| previous[slot].take()) {
                Some(mut child) => {
                    child.index = index;
                    self.children.push(child);
                    stats.reused += 1;
                }
                None => {
                    self.children.push(CompositeChild {
                        index,
                        source: nested.clone(),
                        component: build(nested),
                    });
                    stats.built += 1;
                }
            }
        }

        stats.dropped = previous.iter().filter(|slot| slot.is_some()).count();
        stats
    }
}
