//! Navigation state machine.
//!
//! Pure: consumes logical keys, moves the cursor, toggles checkboxes and
//! reports when the menu should end. Drawing and key reading live in
//! `MenuEngine`.

use crate::ui::keys::Key;

use super::model::MenuModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Cursor moves among selectable top-level rows
    TopNav,
    /// Cursor is confined to the children of the row at `parent`
    SubNav { parent: usize },
}

/// Result of feeding one key to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    /// Single-select confirmation of the row at this index
    Confirm(usize),
    /// Multi-select confirmation; read the snapshot from the model
    ConfirmMany,
    Cancel,
    Interrupt,
}

#[derive(Debug, Clone)]
pub struct NavigationController<'a> {
    model: MenuModel<'a>,
    state: NavState,
    current: usize,
    multi_select: bool,
}

impl<'a> NavigationController<'a> {
    /// Start at the nearest selectable top-level row to `start`.
    /// `None` when the menu has nothing the cursor can rest on.
    pub fn new(model: MenuModel<'a>, multi_select: bool, start: usize) -> Option<Self> {
        let current = model.nearest_selectable(start)?;
        Some(Self {
            model,
            state: NavState::TopNav,
            current,
            multi_select,
        })
    }

    pub fn model(&self) -> &MenuModel<'a> {
        &self.model
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn current_row(&self) -> usize {
        self.current
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn in_sub_nav(&self) -> bool {
        matches!(self.state, NavState::SubNav { .. })
    }

    pub fn handle(&mut self, key: Option<Key>) -> Transition {
        match key.map(Key::navigation) {
            Some(Key::Up) => self.step(false),
            Some(Key::Down) => self.step(true),
            Some(Key::Space) => self.space(),
            Some(Key::Enter) => self.enter(),
            Some(Key::Esc) => self.escape(),
            Some(Key::Interrupt) => Transition::Interrupt,
            Some(Key::Left | Key::Right | Key::Backspace | Key::Char(_)) | None => {
                Transition::Continue
            }
        }
    }

    fn step(&mut self, forward: bool) -> Transition {
        let next = match self.state {
            NavState::TopNav => self.model.next_top_level(self.current, forward),
            NavState::SubNav { .. } => self.model.next_sibling(self.current, forward),
        };
        if let Some(row) = next {
            self.current = row;
        }
        Transition::Continue
    }

    fn space(&mut self) -> Transition {
        let row = *self.model.row(self.current);
        if row.level == 0 {
            if let Some(child) = self.model.first_selectable_child(self.current) {
                self.enter_sub_nav(child);
                return Transition::Continue;
            }
        }
        if self.multi_select {
            self.model.toggle(self.current);
        }
        Transition::Continue
    }

    fn enter(&mut self) -> Transition {
        if !self.model.is_selectable(self.current) {
            return Transition::Continue;
        }
        if self.multi_select {
            return Transition::ConfirmMany;
        }
        if self.state == NavState::TopNav && self.model.row(self.current).level == 0 {
            if let Some(child) = self.model.first_selectable_child(self.current) {
                self.enter_sub_nav(child);
                return Transition::Continue;
            }
        }
        Transition::Confirm(self.current)
    }

    fn escape(&mut self) -> Transition {
        match self.state {
            NavState::SubNav { parent } => {
                tracing::trace!(parent, "leaving sub-navigation");
                self.state = NavState::TopNav;
                self.current = parent;
                Transition::Continue
            }
            NavState::TopNav => Transition::Cancel,
        }
    }

    fn enter_sub_nav(&mut self, child: usize) {
        let parent = self.current;
        tracing::trace!(parent, child, "entering sub-navigation");
        self.state = NavState::SubNav { parent };
        self.current = child;
    }
}
