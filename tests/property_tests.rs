//! Property-based tests for layout and reconciliation invariants.
//!
//! Tests validate:
//! 1. Setting up twice at the same size changes nothing
//! 2. Every item gets exactly one frame
//! 3. Cell widths are whole cells and fit the container
//! 4. One child component per composite item, whatever the edit sequence
//! 5. Item sizes after an edit match a fresh plan for the edited model

use listkit::component::Component;
use listkit::config::Configuration;
use listkit::layout_policy::LayoutPolicy;
use listkit::model::{
    ComponentKind, ComponentModel, IndexPath, Interaction, Item, LayoutConfig,
    PageIndicatorPlacement, Size,
};
use proptest::prelude::*;

// ===== Strategies =====

fn kind_strategy() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        Just(ComponentKind::List),
        Just(ComponentKind::Grid),
        Just(ComponentKind::Carousel),
    ]
}

fn placement_strategy() -> impl Strategy<Value = Option<PageIndicatorPlacement>> {
    prop_oneof![
        Just(None),
        Just(Some(PageIndicatorPlacement::Below)),
        Just(Some(PageIndicatorPlacement::Overlay)),
    ]
}

fn layout_strategy() -> impl Strategy<Value = LayoutConfig> {
    (
        prop_oneof![Just(0.0f64), 1.0f64..5.0],
        0.0f64..3.0,
        0.0f64..3.0,
        1.0f64..6.0,
        placement_strategy(),
    )
        .prop_map(|(span, item_spacing, line_spacing, item_height, placement)| {
            LayoutConfig::default()
                .with_span(span)
                .with_spacing(item_spacing.floor(), line_spacing.floor())
                .with_item_height(item_height.floor())
                .with_page_indicator(placement)
        })
}

fn item_strategy() -> impl Strategy<Value = Item> {
    prop_oneof![
        4 => "[a-z]{1,8}".prop_map(Item::new),
        1 => ("[a-z]{1,8}", 1usize..4).prop_map(|(title, count)| {
            let nested = ComponentModel::new(ComponentKind::Carousel)
                .with_items((0..count).map(|i| Item::new(format!("{title}{i}"))).collect());
            Item::composite(title, nested)
        }),
    ]
}

fn model_strategy() -> impl Strategy<Value = ComponentModel> {
    (
        kind_strategy(),
        prop::collection::vec(item_strategy(), 0..12),
        layout_strategy(),
        any::<bool>(),
    )
        .prop_map(|(kind, items, layout, horizontal)| {
            let interaction = if horizontal {
                Interaction::horizontal()
            } else {
                Interaction::vertical()
            };
            ComponentModel::new(kind)
                .with_items(items)
                .with_layout(layout)
                .with_interaction(interaction)
        })
}

#[derive(Debug, Clone)]
enum Edit {
    Append(Item),
    Prepend(Item),
    Insert(Item, usize),
    Update(Item, usize),
    Delete(usize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        item_strategy().prop_map(Edit::Append),
        item_strategy().prop_map(Edit::Prepend),
        (item_strategy(), 0usize..16).prop_map(|(item, index)| Edit::Insert(item, index)),
        (item_strategy(), 0usize..16).prop_map(|(item, index)| Edit::Update(item, index)),
        (0usize..16).prop_map(Edit::Delete),
    ]
}

fn component(model: ComponentModel, width: f64) -> Component {
    let mut component = Component::with_configuration(model, &Configuration::default());
    component.setup(Size::new(width, 0.0));
    component
}

// ===== Properties =====

proptest! {
    #[test]
    fn setup_is_idempotent(model in model_strategy(), width in 0.0f64..120.0) {
        let mut component = component(model, width);
        let frames = component.surface().item_frames().to_vec();
        let surface = component.surface().frame();
        let subviews = component.surface().subviews().to_vec();
        let control = component.page_control().clone();

        component.setup(Size::new(width, 0.0));

        prop_assert_eq!(component.surface().item_frames(), frames.as_slice());
        prop_assert_eq!(component.surface().frame(), surface);
        prop_assert_eq!(component.surface().subviews(), subviews.as_slice());
        prop_assert_eq!(component.page_control(), &control);
    }

    #[test]
    fn every_item_gets_one_frame(model in model_strategy(), width in 0.0f64..120.0) {
        let count = model.items.len();
        let component = component(model, width);
        prop_assert_eq!(component.surface().item_frames().len(), count);
        for (index, item) in component.model().items.iter().enumerate() {
            prop_assert_eq!(item.size, component.surface().item_frames()[index].size());
        }
    }

    #[test]
    fn cell_width_is_whole_and_fits(layout in layout_strategy(), width in 0.0f64..200.0) {
        let cell = listkit::layout_policy::cell_width(&layout, width);
        prop_assert_eq!(cell, cell.floor());
        prop_assert!(cell >= 0.0);
        prop_assert!(cell <= width.max(0.0));
    }

    #[test]
    fn plans_are_deterministic(model in model_strategy(), width in 0.0f64..120.0) {
        let policy = LayoutPolicy::new(LayoutConfig::default());
        let layout = model.layout.clone().unwrap_or_default();
        let first = policy.compute(&model, &layout, Size::new(width, 0.0));
        let second = policy.compute(&model, &layout, Size::new(width, 0.0));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_child_per_composite_item(
        model in model_strategy(),
        edits in prop::collection::vec(edit_strategy(), 0..10),
    ) {
        let mut component = component(model, 40.0);
        for edit in edits {
            match edit {
                Edit::Append(item) => component.append(item),
                Edit::Prepend(item) => component.prepend_items(vec![item]),
                Edit::Insert(item, index) => component.insert(item, index),
                Edit::Update(item, index) => {
                    component.update(item, index);
                }
                Edit::Delete(index) => {
                    component.delete(index);
                }
            }

            let composite_indexes: Vec<usize> = component
                .model()
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.is_composite())
                .map(|(index, _)| index)
                .collect();
            prop_assert_eq!(component.composites().len(), composite_indexes.len());
            for index in composite_indexes {
                prop_assert!(component.composites().get(index).is_some());
            }
            prop_assert_eq!(
                component.surface().item_frames().len(),
                component.item_count()
            );
        }
    }

    #[test]
    fn sizes_after_edit_match_fresh_plan(
        model in model_strategy(),
        edit in edit_strategy(),
        width in 0.0f64..120.0,
    ) {
        let mut component = component(model, width);
        match edit {
            Edit::Append(item) => component.append(item),
            Edit::Prepend(item) => component.prepend_items(vec![item]),
            Edit::Insert(item, index) => component.insert(item, index),
            Edit::Update(item, index) => {
                component.update(item, index);
            }
            Edit::Delete(index) => {
                component.delete(index);
            }
        }

        let policy = LayoutPolicy::new(Configuration::default().default_layout);
        let fresh = policy.compute(
            &component.model(),
            component.resolved_layout(),
            component.surface().frame().size(),
        );
        for index in 0..component.item_count() + 1 {
            prop_assert_eq!(
                component.size_for_item(IndexPath::item(index)),
                fresh.item_size(index)
            );
        }
    }
}
