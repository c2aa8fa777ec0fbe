//! Nested menus as an explicit page stack.
//!
//! Actions on a page return a [`Step`] telling the navigator what to do
//! next. Opening a page pushes it; cancelling (ESC) or `Step::Back` pops.
//! The stack depth and breadcrumb are plain data, so nesting can be
//! inspected without running a terminal.

use std::fmt;
use std::io::Write;

use crate::error::{MenuError, MenuResult};
use crate::ui::keys::KeySource;
use crate::ui::render::NEWLINE;
use crate::ui::terminal::TerminalSize;
use crate::ui::theme::Theme;

use super::actions::ActionRegistry;
use super::engine::{MenuEngine, Selection};
use super::item::MenuItem;
use super::options::MenuOptions;

/// What happens after a page action runs.
pub enum Step<O> {
    /// Leave every page and return this outcome
    Done(O),
    /// Push a new page on top of the current one
    Open(MenuPage<O>),
    /// Pop the current page
    Back,
    /// Show the current page again
    Stay,
}

impl<O> fmt::Debug for Step<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Done(_) => f.write_str("Done"),
            Step::Open(page) => f.debug_tuple("Open").field(&page.title).finish(),
            Step::Back => f.write_str("Back"),
            Step::Stay => f.write_str("Stay"),
        }
    }
}

type ManyHandler<O> = Box<dyn Fn(&[&MenuItem]) -> anyhow::Result<Step<O>>>;

/// One menu on the navigation stack.
pub struct MenuPage<O> {
    title: String,
    items: Vec<MenuItem>,
    actions: ActionRegistry<Step<O>>,
    options: MenuOptions,
    on_confirm_many: Option<ManyHandler<O>>,
}

impl<O> MenuPage<O> {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
            actions: ActionRegistry::new(),
            options: MenuOptions::new(),
            on_confirm_many: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn options(mut self, options: MenuOptions) -> Self {
        self.options = options;
        self
    }

    pub fn action<F>(mut self, id: &str, action: F) -> Self
    where
        F: Fn() -> anyhow::Result<Step<O>> + 'static,
    {
        self.actions.register(id, action);
        self
    }

    /// Handler for multi-select confirmation. Without one the page stays.
    pub fn on_confirm_many<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[&MenuItem]) -> anyhow::Result<Step<O>> + 'static,
    {
        self.on_confirm_many = Some(Box::new(handler));
        self
    }

    fn resolve(&self, selection: Selection<'_>) -> anyhow::Result<Step<O>> {
        match selection {
            Selection::Cancelled => Ok(Step::Back),
            Selection::Single(item) => match self.actions.invoke(item.id()) {
                Some(step) => step,
                None => {
                    tracing::warn!(
                        page = %self.title,
                        item = %item.id(),
                        "no action registered for item"
                    );
                    Ok(Step::Stay)
                }
            },
            Selection::Multi(items) => match &self.on_confirm_many {
                Some(handler) => handler(&items),
                None => Ok(Step::Stay),
            },
        }
    }
}

pub struct Navigator<O> {
    stack: Vec<MenuPage<O>>,
    max_depth: usize,
}

impl<O> Navigator<O> {
    pub fn new(root: MenuPage<O>, max_depth: usize) -> Self {
        Self {
            stack: vec![root],
            max_depth: max_depth.max(1),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Page titles from the root to the current page.
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.stack.iter().map(|page| page.title.as_str()).collect()
    }

    pub fn current(&self) -> Option<&MenuPage<O>> {
        self.stack.last()
    }

    pub fn push(&mut self, page: MenuPage<O>) -> MenuResult<()> {
        if self.stack.len() >= self.max_depth {
            return Err(MenuError::DepthLimit {
                limit: self.max_depth,
            });
        }
        tracing::debug!(page = %page.title, depth = self.stack.len() + 1, "page opened");
        self.stack.push(page);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<MenuPage<O>> {
        let page = self.stack.pop()?;
        tracing::debug!(page = %page.title, depth = self.stack.len(), "page closed");
        Some(page)
    }

    /// Drive the stack until an action returns `Step::Done` or the root
    /// page is cancelled (`None`).
    pub fn run<W, K, T>(&mut self, engine: &mut MenuEngine<W, K, T>) -> anyhow::Result<Option<O>>
    where
        W: Write,
        K: KeySource,
        T: TerminalSize,
    {
        let theme = Theme::new(engine.config().color, engine.config().unicode);

        loop {
            let trail = theme.bold(&self.breadcrumb().join(" > "));
            let Some(page) = self.stack.last() else {
                return Ok(None);
            };

            let mut header = |out: &mut dyn Write| write!(out, "{trail}{NEWLINE}{NEWLINE}");
            let selection = engine.run_with_header(&page.items, &page.options, &mut header)?;

            match page.resolve(selection)? {
                Step::Done(outcome) => return Ok(Some(outcome)),
                Step::Open(next) => self.push(next)?,
                Step::Back => {
                    self.pop();
                }
                Step::Stay => {}
            }
        }
    }
}
