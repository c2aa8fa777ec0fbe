//! Property tests for incremental repaint.

use std::io::Write;

use proptest::prelude::*;

use menukit::menu::MenuOptions;
use menukit::ui::Key;
use menukit::RepaintStrategy;

use crate::common::{engine_with_repaint, VirtualScreen};
use crate::strategies::{build, keys, shapes};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Incremental and full repaint leave the same screen behind
    /// and agree on the result.
    #[test]
    fn property_incremental_matches_full_repaint(
        tree in shapes(),
        script in keys(30),
        multi in any::<bool>(),
        height in 10u16..40,
    ) {
        let items = build(&tree);
        let mut script = script;
        script.extend([Key::Esc, Key::Esc]);
        let options = MenuOptions::new().multi_select(multi).info("Pick something");

        let mut results = Vec::new();
        let mut screens = Vec::new();
        for repaint in [RepaintStrategy::Incremental, RepaintStrategy::Full] {
            let mut engine = engine_with_repaint(&script, height, repaint);
            let selection = engine
                .run_with_header(&items, &options, &mut |out| write!(out, "header\r\n"))
                .unwrap();
            let ids: Vec<String> = selection.items().iter().map(|i| i.id().to_string()).collect();
            results.push((selection.is_cancelled(), ids));

            let screen = VirtualScreen::from_bytes(engine.output());
            prop_assert!(screen.cursor_visible());
            screens.push(screen.lines());
        }

        prop_assert_eq!(&results[0], &results[1]);
        prop_assert_eq!(&screens[0], &screens[1]);
    }
}
