use crossterm::style::{Color, Stylize};

/// Design tokens for menukit.
///
/// Design constraints:
/// - Only the semantic colors in `colors::*`
/// - All glyphs used by menus and dialogs are sourced from this module
pub mod colors {
    use super::Color;

    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SCROLL_UP: &str = "▲";
    pub const SCROLL_DOWN: &str = "▼";
    pub const RULE: &str = "─";
    pub const POINTER: &str = ">";
    pub const SUBMENU: &str = ">";
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
}

pub mod icons_ascii {
    pub const SCROLL_UP: &str = "^";
    pub const SCROLL_DOWN: &str = "v";
    pub const RULE: &str = "-";
    pub const POINTER: &str = ">";
    pub const SUBMENU: &str = ">";
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
}

/// Glyph set and styling switches for one menu run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
    pub unicode: bool,
}

impl Theme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    pub fn scroll_up(&self) -> &'static str {
        if self.unicode {
            icons::SCROLL_UP
        } else {
            icons_ascii::SCROLL_UP
        }
    }

    pub fn scroll_down(&self) -> &'static str {
        if self.unicode {
            icons::SCROLL_DOWN
        } else {
            icons_ascii::SCROLL_DOWN
        }
    }

    pub fn rule(&self, width: usize) -> String {
        let glyph = if self.unicode {
            icons::RULE
        } else {
            icons_ascii::RULE
        };
        glyph.repeat(width)
    }

    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }

    pub fn submenu(&self) -> &'static str {
        if self.unicode {
            icons::SUBMENU
        } else {
            icons_ascii::SUBMENU
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self.unicode, checked) {
            (true, true) => icons::CHECKED,
            (true, false) => icons::UNCHECKED,
            (false, true) => icons_ascii::CHECKED,
            (false, false) => icons_ascii::UNCHECKED,
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.with(colors::DIM).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.with(colors::WARNING).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn info(&self, text: &str) -> String {
        if self.color {
            text.with(colors::INFO).to_string()
        } else {
            text.to_string()
        }
    }

    /// Reverse video for the highlighted row. Plain mode leaves text as is;
    /// the pointer already marks the row.
    pub fn highlight(&self, text: &str) -> String {
        if self.color {
            text.reverse().to_string()
        } else {
            text.to_string()
        }
    }
}
