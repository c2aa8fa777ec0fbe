//! Property tests for the navigation state machine.

use proptest::prelude::*;

use menukit::menu::{MenuModel, NavState, NavigationController, Transition, ViewportCalculator};
use menukit::ui::Key;

use crate::strategies::{build, keys, shapes};

proptest! {
    /// PROPERTY: After any key the cursor rests on a selectable row that
    /// belongs to the current navigation mode, inside the viewport.
    #[test]
    fn property_cursor_stays_on_selectable_row(
        tree in shapes(),
        script in keys(40),
        multi in any::<bool>(),
        height in 0u16..40,
    ) {
        let items = build(&tree);
        let Some(mut nav) = NavigationController::new(MenuModel::new(&items), multi, 0) else {
            prop_assert!(!MenuModel::new(&items).any_selectable());
            return Ok(());
        };
        let calc = ViewportCalculator::new(15, 5);

        for key in script {
            let transition = nav.handle(Some(key));
            let current = nav.current_row();
            prop_assert!(nav.model().is_selectable(current));
            match nav.state() {
                NavState::TopNav => {
                    prop_assert_eq!(nav.model().row(current).level, 0);
                }
                NavState::SubNav { parent } => {
                    prop_assert_eq!(nav.model().row(current).parent, Some(parent));
                }
            }

            let window = calc.compute(nav.model().rows(), current, height);
            prop_assert!(window.start_row <= current && current < window.end_row);

            if transition != Transition::Continue {
                break;
            }
        }
    }

    /// PROPERTY: ESC in sub-navigation returns to the parent row; ESC at the
    /// top level cancels.
    #[test]
    fn property_escape_unwinds_one_level(
        tree in shapes(),
        script in keys(30),
    ) {
        let items = build(&tree);
        let Some(mut nav) = NavigationController::new(MenuModel::new(&items), false, 0) else {
            return Ok(());
        };
        for key in script.into_iter().filter(|k| !matches!(k, Key::Esc | Key::Enter)) {
            nav.handle(Some(key));
        }

        if let NavState::SubNav { parent } = nav.state() {
            prop_assert_eq!(nav.handle(Some(Key::Esc)), Transition::Continue);
            prop_assert_eq!(nav.state(), NavState::TopNav);
            prop_assert_eq!(nav.current_row(), parent);
        }
        prop_assert_eq!(nav.handle(Some(Key::Esc)), Transition::Cancel);
    }

    /// PROPERTY: Ctrl-C interrupts from any state without moving the cursor.
    #[test]
    fn property_interrupt_from_any_state(
        tree in shapes(),
        script in keys(30),
        multi in any::<bool>(),
    ) {
        let items = build(&tree);
        let Some(mut nav) = NavigationController::new(MenuModel::new(&items), multi, 0) else {
            return Ok(());
        };
        for key in script {
            if nav.handle(Some(key)) != Transition::Continue {
                break;
            }
        }
        let before = nav.current_row();
        prop_assert_eq!(nav.handle(Some(Key::Interrupt)), Transition::Interrupt);
        prop_assert_eq!(nav.current_row(), before);
    }
}
