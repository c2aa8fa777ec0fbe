//! Property tests for the viewport window.

use proptest::prelude::*;

use menukit::menu::{flatten, window_bounds, MenuItem, ViewportCalculator};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The window always contains the cursor and stays in bounds.
    #[test]
    fn property_window_contains_cursor(
        total in 1usize..300,
        seed in any::<usize>(),
        height in 0u16..120,
        reserved in 0u16..30,
    ) {
        let current = seed % total;
        let calc = ViewportCalculator::new(reserved, 5);
        let max_visible = calc.max_visible_items(height);
        let (start, end) = window_bounds(current, total, max_visible);

        prop_assert!(max_visible >= 5);
        prop_assert!(start <= current && current < end);
        prop_assert!(end <= total);
        prop_assert_eq!(end - start, total.min(max_visible));
    }

    /// PROPERTY: On a flat list the markers count exactly the hidden rows.
    #[test]
    fn property_markers_count_hidden_rows(
        total in 1usize..120,
        seed in any::<usize>(),
        height in 0u16..60,
    ) {
        let items: Vec<MenuItem> = (0..total)
            .map(|i| MenuItem::leaf(format!("i{i}"), format!("Item {i}")))
            .collect();
        let rows = flatten(&items);
        let current = seed % total;
        let window = ViewportCalculator::new(15, 5).compute(&rows, current, height);

        let above = (window.start_row > 0).then_some(window.start_row);
        let below = (window.end_row < total).then_some(total - window.end_row);
        prop_assert_eq!(window.hidden_above, above);
        prop_assert_eq!(window.hidden_below, below);
        prop_assert!(window.contains(current));
    }
}
