//! Cursor memory for re-entrant menus.

use std::collections::HashMap;

use super::model::MenuModel;

/// Last cursor row per menu id.
///
/// Entries are created on first use and overwritten on every confirm or
/// cancel. Nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct CursorStore {
    positions: HashMap<String, usize>,
}

impl CursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, menu_id: &str) -> Option<usize> {
        self.positions.get(menu_id).copied()
    }

    pub fn set(&mut self, menu_id: &str, row: usize) {
        self.positions.insert(menu_id.to_string(), row);
    }

    pub fn forget(&mut self, menu_id: &str) -> Option<usize> {
        self.positions.remove(menu_id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Starting row for a menu: the remembered row (or 0), clamped to the
    /// row count and advanced to the next selectable top-level row.
    pub fn resume(&self, menu_id: Option<&str>, model: &MenuModel<'_>) -> Option<usize> {
        let remembered = menu_id.and_then(|id| self.get(id)).unwrap_or(0);
        model.nearest_selectable(remembered)
    }

    /// Record where the cursor ended. Child rows are remembered as their
    /// parent so the next run starts in top-level navigation.
    pub fn remember(&mut self, menu_id: Option<&str>, model: &MenuModel<'_>, row: usize) {
        let Some(id) = menu_id else {
            return;
        };
        if model.is_empty() {
            self.set(id, 0);
            return;
        }
        let row = model.top_level_of(row.min(model.len() - 1));
        tracing::trace!(menu_id = id, row, "cursor remembered");
        self.set(id, row);
    }
}
