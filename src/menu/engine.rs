//! Menu entry point.
//!
//! `MenuEngine` owns the output stream, the key source, the terminal height
//! source and the cursor memory. Each `run` flattens the caller's items,
//! then loops: size the viewport, render, read one key, feed it to the
//! `NavigationController`. The terminal guard is held for the whole loop
//! so the cursor comes back on every exit path.

use std::io::{self, Write};

use crate::config::EngineConfig;
use crate::error::{MenuError, MenuResult};
use crate::ui::keys::{KeySource, TerminalKeys};
use crate::ui::render::PanelRenderer;
use crate::ui::terminal::{ClearStrategy, LiveTerminal, TerminalGuard, TerminalSize};

use super::actions::ActionRegistry;
use super::controller::{NavigationController, Transition};
use super::cursor::CursorStore;
use super::frame::FrameLayout;
use super::item::MenuItem;
use super::model::MenuModel;
use super::options::MenuOptions;
use super::viewport::ViewportCalculator;

/// Caller content drawn above the menu on every full repaint.
pub type Header<'h> = dyn FnMut(&mut dyn Write) -> io::Result<()> + 'h;

/// What a menu run produced.
#[derive(Debug, Clone)]
pub enum Selection<'a> {
    /// Single-select confirmation
    Single(&'a MenuItem),
    /// Multi-select confirmation, in flat row order
    Multi(Vec<&'a MenuItem>),
    Cancelled,
}

impl<'a> Selection<'a> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }

    pub fn single(&self) -> Option<&'a MenuItem> {
        match self {
            Selection::Single(item) => Some(item),
            _ => None,
        }
    }

    /// Every item the run returned; empty when cancelled.
    pub fn items(&self) -> Vec<&'a MenuItem> {
        match self {
            Selection::Single(item) => vec![*item],
            Selection::Multi(items) => items.clone(),
            Selection::Cancelled => Vec::new(),
        }
    }
}

pub struct MenuEngine<W: Write, K: KeySource, T: TerminalSize> {
    pub(crate) out: W,
    pub(crate) keys: K,
    pub(crate) size: T,
    pub(crate) config: EngineConfig,
    pub(crate) clear: ClearStrategy,
    cursors: CursorStore,
}

impl MenuEngine<io::Stdout, TerminalKeys, LiveTerminal> {
    /// Engine bound to the process terminal.
    pub fn stdout(config: EngineConfig) -> Self {
        Self::new(io::stdout(), TerminalKeys, LiveTerminal, config)
            .with_clear_strategy(ClearStrategy::platform_default())
    }
}

impl<W: Write, K: KeySource, T: TerminalSize> MenuEngine<W, K, T> {
    pub fn new(out: W, keys: K, size: T, config: EngineConfig) -> Self {
        Self {
            out,
            keys,
            size,
            config,
            clear: ClearStrategy::Ansi,
            cursors: CursorStore::new(),
        }
    }

    pub fn with_clear_strategy(mut self, clear: ClearStrategy) -> Self {
        self.clear = clear;
        self
    }

    /// Share cursor memory across engines.
    pub fn with_cursor_store(mut self, cursors: CursorStore) -> Self {
        self.cursors = cursors;
        self
    }

    pub fn cursor_store(&self) -> &CursorStore {
        &self.cursors
    }

    pub fn cursor_store_mut(&mut self) -> &mut CursorStore {
        &mut self.cursors
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (W, K, CursorStore) {
        (self.out, self.keys, self.cursors)
    }

    /// Run a menu with no header.
    pub fn run<'a>(
        &mut self,
        items: &'a [MenuItem],
        options: &MenuOptions,
    ) -> MenuResult<Selection<'a>> {
        self.run_with_header(items, options, &mut |_| Ok(()))
    }

    pub fn run_with_header<'a>(
        &mut self,
        items: &'a [MenuItem],
        options: &MenuOptions,
        header: &mut Header<'_>,
    ) -> MenuResult<Selection<'a>> {
        let menu_id = options.menu_id.as_deref();
        let model = MenuModel::new(items);
        let start = self.cursors.resume(menu_id, &model);

        let Some(mut nav) =
            start.and_then(|row| NavigationController::new(model, options.multi_select, row))
        else {
            tracing::debug!(menu_id, rows = items.len(), "menu has no selectable rows");
            if let Some(id) = menu_id {
                self.cursors.set(id, 0);
            }
            return Ok(Selection::Cancelled);
        };

        tracing::debug!(
            menu_id,
            rows = nav.model().len(),
            start = nav.current_row(),
            multi_select = options.multi_select,
            "menu opened"
        );

        let layout = FrameLayout::new(&self.config, options);
        let viewport =
            ViewportCalculator::new(self.config.reserved_lines, self.config.min_visible_items);
        let strategy = options.repaint.unwrap_or(self.config.repaint);
        let mut renderer = PanelRenderer::new(strategy, self.clear);

        let mut guard = TerminalGuard::acquire(&mut self.out, self.config.raw_mode)?;
        let mut last_height = None;
        let mut last_signature = None;

        let selection = loop {
            let height = self.size.height();
            let in_sub_nav = nav.in_sub_nav();
            let signature = layout.signature(in_sub_nav);

            let resized = last_height.is_some_and(|h| h != height);
            let reshaped = last_signature.as_ref().is_some_and(|s| *s != signature);
            if resized || reshaped {
                tracing::debug!(resized, reshaped, height, "full repaint");
            }

            let window = viewport.compute(nav.model().rows(), nav.current_row(), height);
            let lines = layout.dynamic_lines(&nav, &window);
            renderer.render(&mut guard, &lines, resized || reshaped, |out| {
                header(&mut *out)?;
                layout.write_static(out, in_sub_nav)
            })?;

            last_height = Some(height);
            last_signature = Some(signature);

            match nav.handle(self.keys.read_key()?) {
                Transition::Continue => {}
                Transition::Confirm(row) => break Selection::Single(nav.model().row(row).item),
                Transition::ConfirmMany => break Selection::Multi(nav.model().selected_items()),
                Transition::Cancel => break Selection::Cancelled,
                Transition::Interrupt => {
                    tracing::debug!(menu_id, "menu interrupted");
                    return Err(MenuError::Interrupted);
                }
            }
        };
        drop(guard);

        self.cursors.remember(menu_id, nav.model(), nav.current_row());
        tracing::debug!(
            menu_id,
            cancelled = selection.is_cancelled(),
            full_repaints = renderer.full_repaints(),
            "menu closed"
        );
        Ok(selection)
    }

    /// Run a single-select menu and invoke the action registered for the
    /// confirmed item. The terminal is restored before the action runs and
    /// its error is returned as is.
    ///
    /// `None` on cancel, on multi-select confirmation, or when the item has
    /// no registered action.
    pub fn run_action<O>(
        &mut self,
        items: &[MenuItem],
        actions: &ActionRegistry<O>,
        options: &MenuOptions,
    ) -> anyhow::Result<Option<O>> {
        let Some(item) = self.run(items, options)?.single() else {
            return Ok(None);
        };
        match actions.invoke(item.id()) {
            Some(result) => result.map(Some),
            None => {
                tracing::warn!(item = %item.id(), "no action registered for item");
                Ok(None)
            }
        }
    }
}
