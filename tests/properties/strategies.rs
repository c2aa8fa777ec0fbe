//! Generators shared by the property tests.

use proptest::prelude::*;

use menukit::menu::MenuItem;
use menukit::ui::Key;

/// Shape of one top-level entry: a leaf, or a parent with children
/// given by their selectability.
#[derive(Debug, Clone)]
pub enum Shape {
    Leaf { selectable: bool },
    Parent { children: Vec<bool> },
}

pub fn shapes() -> impl Strategy<Value = Vec<Shape>> {
    let node = prop_oneof![
        3 => any::<bool>().prop_map(|selectable| Shape::Leaf { selectable }),
        1 => proptest::collection::vec(any::<bool>(), 0..4)
            .prop_map(|children| Shape::Parent { children }),
    ];
    proptest::collection::vec(node, 0..12)
}

pub fn build(shapes: &[Shape]) -> Vec<MenuItem> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| match shape {
            Shape::Leaf { selectable } => {
                MenuItem::leaf(format!("n{i}"), format!("Node {i}")).selectable(*selectable)
            }
            Shape::Parent { children } => {
                let children = children
                    .iter()
                    .enumerate()
                    .map(|(j, selectable)| {
                        MenuItem::leaf(format!("n{i}.{j}"), format!("Child {j}"))
                            .with_description(if j % 2 == 0 { "even child" } else { "" })
                            .selectable(*selectable)
                    })
                    .collect();
                MenuItem::submenu(format!("n{i}"), format!("Node {i}"), children)
            }
        })
        .collect()
}

/// Keys that move, toggle or change navigation mode.
pub fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => Just(Key::Down),
        3 => Just(Key::Up),
        2 => Just(Key::Space),
        1 => Just(Key::Esc),
        1 => Just(Key::Enter),
        1 => Just(Key::Left),
    ]
}

pub fn keys(max: usize) -> impl Strategy<Value = Vec<Key>> {
    proptest::collection::vec(key(), 0..max)
}
