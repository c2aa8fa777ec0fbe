//! Property tests for checkbox state and the multi-select snapshot.

use proptest::prelude::*;

use menukit::menu::{MenuModel, NavigationController, Transition};
use menukit::ui::Key;

use crate::strategies::{build, keys, shapes};

fn checked(model: &MenuModel<'_>) -> Vec<bool> {
    (0..model.len()).map(|i| model.is_selected(i)).collect()
}

proptest! {
    /// PROPERTY: Toggling a row twice leaves every flag unchanged.
    #[test]
    fn property_double_toggle_is_identity(tree in shapes(), seed in any::<usize>()) {
        let items = build(&tree);
        let mut model = MenuModel::new(&items);
        prop_assume!(!model.is_empty());

        let row = seed % model.len();
        let before = checked(&model);
        model.toggle(row);
        model.toggle(row);
        prop_assert_eq!(checked(&model), before);
    }

    /// PROPERTY: The snapshot depends on which rows are checked, not on the
    /// order they were checked in.
    #[test]
    fn property_snapshot_ignores_toggle_order(tree in shapes(), mask in any::<u64>()) {
        let items = build(&tree);
        let base = MenuModel::new(&items);
        let picked: Vec<usize> = (0..base.len())
            .filter(|&i| base.is_selectable(i) && mask & (1 << (i % 64)) != 0)
            .collect();

        let mut forward = MenuModel::new(&items);
        for &i in &picked {
            forward.toggle(i);
        }
        let mut backward = MenuModel::new(&items);
        for &i in picked.iter().rev() {
            backward.toggle(i);
        }

        let expected: Vec<_> = picked.iter().map(|&i| base.row(i).item.id()).collect();
        let forward_ids: Vec<_> = forward.selected_items().iter().map(|i| i.id()).collect();
        let backward_ids: Vec<_> = backward.selected_items().iter().map(|i| i.id()).collect();
        prop_assert_eq!(&forward_ids, &expected);
        prop_assert_eq!(&backward_ids, &expected);
    }

    /// PROPERTY: ENTER in multi-select returns exactly the rows whose
    /// checkbox was flipped an odd number of times, wherever the cursor is.
    #[test]
    fn property_confirmation_snapshot_matches_checked_rows(
        tree in shapes(),
        script in keys(40),
    ) {
        let items = build(&tree);
        let Some(mut nav) = NavigationController::new(MenuModel::new(&items), true, 0) else {
            return Ok(());
        };
        let mut shadow = vec![false; nav.model().len()];

        for key in script.into_iter().filter(|k| !matches!(k, Key::Enter | Key::Esc)) {
            let row = nav.current_row();
            let was_sub_nav = nav.in_sub_nav();
            nav.handle(Some(key));
            let opened_children = !was_sub_nav && nav.in_sub_nav();
            if key == Key::Space && !opened_children {
                shadow[row] = !shadow[row];
            }
        }

        prop_assert_eq!(nav.handle(Some(Key::Enter)), Transition::ConfirmMany);
        let expected: Vec<_> = shadow
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| nav.model().row(i).item.id().clone())
            .collect();
        let actual: Vec<_> = nav
            .model()
            .selected_items()
            .iter()
            .map(|i| i.id().clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
