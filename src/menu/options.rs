//! Per-call menu options.

use crate::config::RepaintStrategy;

pub const DEFAULT_NAV_HINT: &str = "Up/Down: Navigate, SPACE/ENTER: Select/Enter, ESC: Back.";
pub const DEFAULT_SUB_NAV_HINT: &str =
    "[SUB-NAV] Up/Down: Navigate options, ENTER: Select, ESC: Back.";
pub const DEFAULT_FOOTER_HINT: &str = "[ENTER] Select option.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub multi_select: bool,
    /// Extra line shown above the navigation hint
    pub info_text: String,
    /// Key for cursor memory; `None` disables it
    pub menu_id: Option<String>,
    /// Show the navigation hint line
    pub nav_hint: bool,
    pub nav_hint_text: Option<String>,
    pub sub_nav_hint_text: Option<String>,
    pub footer_hint_text: Option<String>,
    /// Overrides `EngineConfig::left_margin`
    pub left_margin: Option<usize>,
    /// Overrides `EngineConfig::repaint`
    pub repaint: Option<RepaintStrategy>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            multi_select: false,
            info_text: String::new(),
            menu_id: None,
            nav_hint: true,
            nav_hint_text: None,
            sub_nav_hint_text: None,
            footer_hint_text: None,
            left_margin: None,
            repaint: None,
        }
    }
}

impl MenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    pub fn info(mut self, text: impl Into<String>) -> Self {
        self.info_text = text.into();
        self
    }

    pub fn menu_id(mut self, id: impl Into<String>) -> Self {
        self.menu_id = Some(id.into());
        self
    }

    pub fn nav_hint(mut self, show: bool) -> Self {
        self.nav_hint = show;
        self
    }

    pub fn nav_hint_text(mut self, text: impl Into<String>) -> Self {
        self.nav_hint_text = Some(text.into());
        self
    }

    pub fn sub_nav_hint_text(mut self, text: impl Into<String>) -> Self {
        self.sub_nav_hint_text = Some(text.into());
        self
    }

    pub fn footer_hint_text(mut self, text: impl Into<String>) -> Self {
        self.footer_hint_text = Some(text.into());
        self
    }

    pub fn left_margin(mut self, margin: usize) -> Self {
        self.left_margin = Some(margin);
        self
    }

    pub fn repaint(mut self, strategy: RepaintStrategy) -> Self {
        self.repaint = Some(strategy);
        self
    }
}
