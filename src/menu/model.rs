//! Flattened view of an item tree plus per-row selection flags.

use super::item::MenuItem;

/// One rendered line of the menu.
#[derive(Debug, Clone, Copy)]
pub struct FlatRow<'a> {
    pub item: &'a MenuItem,
    /// 0 for top-level rows, 1 for children
    pub level: u8,
    /// Flat index of the parent row (children only)
    pub parent: Option<usize>,
}

impl FlatRow<'_> {
    pub fn is_selectable(&self) -> bool {
        self.item.is_selectable()
    }
}

/// Flatten items depth-first; every parent is followed directly by its children.
pub fn flatten(items: &[MenuItem]) -> Vec<FlatRow<'_>> {
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let parent_index = rows.len();
        rows.push(FlatRow {
            item,
            level: 0,
            parent: None,
        });
        for child in item.children() {
            rows.push(FlatRow {
                item: child,
                level: 1,
                parent: Some(parent_index),
            });
        }
    }
    rows
}

/// The item tree as the engine sees it during one invocation.
///
/// The caller's items are borrowed read-only; checkbox state lives here,
/// indexed by flat row, and is seeded from each item's preselection.
#[derive(Debug, Clone)]
pub struct MenuModel<'a> {
    rows: Vec<FlatRow<'a>>,
    selected: Vec<bool>,
}

impl<'a> MenuModel<'a> {
    pub fn new(items: &'a [MenuItem]) -> Self {
        let rows = flatten(items);
        let selected = rows.iter().map(|r| r.item.is_preselected()).collect();
        Self { rows, selected }
    }

    pub fn rows(&self) -> &[FlatRow<'a>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &FlatRow<'a> {
        &self.rows[index]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(FlatRow::is_selectable)
    }

    pub fn any_selectable(&self) -> bool {
        self.rows.iter().any(FlatRow::is_selectable)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Flip the checkbox of a selectable row. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.is_selectable(index) {
            return false;
        }
        self.selected[index] = !self.selected[index];
        self.selected[index]
    }

    /// Checked items in flat (declaration) order.
    pub fn selected_items(&self) -> Vec<&'a MenuItem> {
        self.rows
            .iter()
            .zip(&self.selected)
            .filter(|(_, &checked)| checked)
            .map(|(row, _)| row.item)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Flat indices of the selectable children of `parent`.
    pub fn selectable_children(&self, parent: usize) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.parent == Some(parent) && r.is_selectable())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn first_selectable_child(&self, parent: usize) -> Option<usize> {
        self.selectable_children(parent).first().copied()
    }

    /// The row itself for top-level rows, the parent row for children.
    pub fn top_level_of(&self, index: usize) -> usize {
        self.rows[index].parent.unwrap_or(index)
    }

    /// Next selectable top-level row after `from`, wrapping. `from` itself is
    /// considered last, so a menu with one selectable row stays put.
    pub fn next_top_level(&self, from: usize, forward: bool) -> Option<usize> {
        let total = self.rows.len();
        (1..=total)
            .map(|k| step(from, k, total, forward))
            .find(|&i| self.rows[i].level == 0 && self.rows[i].is_selectable())
    }

    /// Next selectable sibling of a child row, wrapping within its parent.
    pub fn next_sibling(&self, from: usize, forward: bool) -> Option<usize> {
        let parent = self.rows.get(from)?.parent?;
        let siblings = self.selectable_children(parent);
        let pos = siblings.iter().position(|&i| i == from)?;
        let len = siblings.len();
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        Some(siblings[next])
    }

    /// Closest selectable top-level row at or after `from`, wrapping.
    ///
    /// Children only exist under selectable parents, so any menu with a
    /// selectable row has a selectable top-level row.
    pub fn nearest_selectable(&self, from: usize) -> Option<usize> {
        let total = self.rows.len();
        if total == 0 {
            return None;
        }
        let from = from.min(total - 1);
        (0..total)
            .map(|k| (from + k) % total)
            .find(|&i| self.rows[i].level == 0 && self.rows[i].is_selectable())
    }
}

fn step(from: usize, k: usize, total: usize, forward: bool) -> usize {
    let k = k % total;
    if forward {
        (from + k) % total
    } else {
        (from + total - k) % total
    }
}
