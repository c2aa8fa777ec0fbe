//! Visible window over the flat row list.

use super::model::FlatRow;

/// Rows visible this frame, plus scroll marker counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportWindow {
    pub start_row: usize,
    /// Exclusive
    pub end_row: usize,
    pub current_row: usize,
    /// `Some` when rows are hidden above; the count covers only rows at the
    /// same level as the current row and may be zero.
    pub hidden_above: Option<usize>,
    pub hidden_below: Option<usize>,
}

impl ViewportWindow {
    pub fn visible_len(&self) -> usize {
        self.end_row - self.start_row
    }

    pub fn contains(&self, row: usize) -> bool {
        (self.start_row..self.end_row).contains(&row)
    }
}

/// Sizes and positions the viewport from terminal height and cursor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportCalculator {
    reserved_lines: u16,
    min_visible_items: u16,
}

impl ViewportCalculator {
    pub fn new(reserved_lines: u16, min_visible_items: u16) -> Self {
        Self {
            reserved_lines,
            min_visible_items,
        }
    }

    pub fn max_visible_items(&self, term_height: u16) -> usize {
        usize::from(
            self.min_visible_items
                .max(term_height.saturating_sub(self.reserved_lines)),
        )
        .max(1)
    }

    pub fn compute(
        &self,
        rows: &[FlatRow<'_>],
        current_row: usize,
        term_height: u16,
    ) -> ViewportWindow {
        let max_visible = self.max_visible_items(term_height);
        let (start_row, end_row) = window_bounds(current_row, rows.len(), max_visible);

        let level = rows.get(current_row).map(|r| r.level);
        let same_level =
            |slice: &[FlatRow<'_>]| slice.iter().filter(|r| Some(r.level) == level).count();

        let hidden_above = (start_row > 0).then(|| same_level(&rows[..start_row]));
        let hidden_below = (end_row < rows.len()).then(|| same_level(&rows[end_row..]));

        ViewportWindow {
            start_row,
            end_row,
            current_row,
            hidden_above,
            hidden_below,
        }
    }
}

/// Center `current` in a window of `max_visible`, clamped to `[0, total)`.
pub fn window_bounds(current: usize, total: usize, max_visible: usize) -> (usize, usize) {
    let half = max_visible / 2;
    let mut start = current.saturating_sub(half);
    let mut end = start + max_visible;
    if end > total {
        end = total;
        start = end.saturating_sub(max_visible);
    }
    (start, end)
}
