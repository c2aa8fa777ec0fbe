//! Property tests for flattening.

use proptest::prelude::*;

use menukit::menu::flatten;

use crate::strategies::{build, shapes};

proptest! {
    /// PROPERTY: Flattening lists items in declaration order with each
    /// parent's children directly after it.
    #[test]
    fn property_flatten_preserves_declaration_order(tree in shapes()) {
        let items = build(&tree);

        let mut expected: Vec<(String, u8, Option<usize>)> = Vec::new();
        for item in &items {
            let parent = expected.len();
            expected.push((item.id().to_string(), 0u8, None));
            for child in item.children() {
                expected.push((child.id().to_string(), 1u8, Some(parent)));
            }
        }

        let actual: Vec<(String, u8, Option<usize>)> = flatten(&items)
            .iter()
            .map(|r| (r.item.id().to_string(), r.level, r.parent))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Every child row sits in the contiguous run after its parent.
    #[test]
    fn property_children_are_contiguous(tree in shapes()) {
        let items = build(&tree);
        let rows = flatten(&items);

        for (index, row) in rows.iter().enumerate() {
            if let Some(parent) = row.parent {
                prop_assert!(parent < index);
                prop_assert_eq!(rows[parent].level, 0);
                for between in &rows[parent + 1..index] {
                    prop_assert_eq!(between.parent, Some(parent));
                }
            }
        }
    }
}
