//! Text content of a menu frame: the static hint block and the dynamic
//! viewport block.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::config::EngineConfig;
use crate::ui::render::NEWLINE;
use crate::ui::theme::Theme;

use super::controller::NavigationController;
use super::item::Renderable;
use super::options::{MenuOptions, DEFAULT_FOOTER_HINT, DEFAULT_NAV_HINT, DEFAULT_SUB_NAV_HINT};
use super::viewport::ViewportWindow;

/// Everything the static block depends on besides the header callback.
/// A change between frames forces a full repaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSignature {
    pub show_hint_section: bool,
    pub has_info: bool,
    pub nav_hint: bool,
    pub in_sub_nav: bool,
    pub nav_hint_text: String,
    pub sub_nav_hint_text: String,
}

pub struct FrameLayout<'o> {
    options: &'o MenuOptions,
    theme: Theme,
    margin: String,
    divider: String,
    highlight_width: usize,
}

impl<'o> FrameLayout<'o> {
    pub fn new(config: &EngineConfig, options: &'o MenuOptions) -> Self {
        let theme = Theme::new(config.color, config.unicode);
        let margin = " ".repeat(options.left_margin.unwrap_or(config.left_margin));
        let divider = format!("{margin}{}", theme.rule(config.divider_width));
        Self {
            options,
            theme,
            margin,
            divider,
            highlight_width: config.highlight_width,
        }
    }

    fn show_hint_section(&self) -> bool {
        !self.options.info_text.is_empty() || self.options.nav_hint
    }

    pub fn signature(&self, in_sub_nav: bool) -> StaticSignature {
        StaticSignature {
            show_hint_section: self.show_hint_section(),
            has_info: !self.options.info_text.is_empty(),
            nav_hint: self.options.nav_hint,
            in_sub_nav,
            nav_hint_text: self.options.nav_hint_text.clone().unwrap_or_default(),
            sub_nav_hint_text: self.options.sub_nav_hint_text.clone().unwrap_or_default(),
        }
    }

    /// Hint block drawn under the caller's header.
    pub fn static_lines(&self, in_sub_nav: bool) -> Vec<String> {
        if !self.show_hint_section() {
            return Vec::new();
        }

        let mut lines = vec![self.divider.clone()];
        if !self.options.info_text.is_empty() {
            lines.push(format!("{}{}", self.margin, self.options.info_text));
        }
        if self.options.nav_hint {
            let hint = if in_sub_nav {
                self.options
                    .sub_nav_hint_text
                    .as_deref()
                    .unwrap_or(DEFAULT_SUB_NAV_HINT)
            } else {
                self.options
                    .nav_hint_text
                    .as_deref()
                    .unwrap_or(DEFAULT_NAV_HINT)
            };
            lines.push(format!("{}{}", self.margin, self.theme.dim(hint)));
        }
        lines.push(self.divider.clone());
        lines
    }

    pub fn write_static<W: Write + ?Sized>(&self, out: &mut W, in_sub_nav: bool) -> io::Result<()> {
        for line in self.static_lines(in_sub_nav) {
            write!(out, "{line}{NEWLINE}")?;
        }
        Ok(())
    }

    /// Scroll markers, visible rows, description and footer.
    pub fn dynamic_lines(
        &self,
        nav: &NavigationController<'_>,
        window: &ViewportWindow,
    ) -> Vec<String> {
        let model = nav.model();
        let mut lines = Vec::with_capacity(window.visible_len() + 6);

        lines.push(self.scroll_marker(window.hidden_above, self.theme.scroll_up()));

        for index in window.start_row..window.end_row {
            let row = model.row(index);
            let highlighted = index == window.current_row && row.is_selectable();

            let pointer = if highlighted { self.theme.pointer() } else { " " };
            let indent = "    ".repeat(usize::from(row.level));
            let checkbox = if nav.is_multi_select() {
                format!("{} ", self.theme.checkbox(model.is_selected(index)))
            } else {
                String::new()
            };
            let suffix = if row.level == 0 && row.item.has_children() {
                format!(" {}", self.theme.submenu())
            } else {
                String::new()
            };
            let label = row.item.label(highlighted);

            let content = format!("{pointer} {indent}{checkbox}{label}{suffix}");
            if highlighted {
                let padded = pad_to_width(&content, self.highlight_width);
                lines.push(format!("{}{}", self.margin, self.theme.highlight(&padded)));
            } else {
                lines.push(format!("{}{}", self.margin, content));
            }
        }

        lines.push(self.scroll_marker(window.hidden_below, self.theme.scroll_down()));

        lines.push(self.divider.clone());
        let description = model.row(window.current_row).item.description();
        if !description.is_empty() {
            let text = format!("Description: {description}");
            lines.push(format!("{}{}", self.margin, self.theme.dim(&text)));
        }
        lines.push(self.divider.clone());

        let footer = if nav.is_multi_select() {
            format!(
                "[ENTER] Confirm selection ({} items).",
                model.selected_count()
            )
        } else {
            self.options
                .footer_hint_text
                .clone()
                .unwrap_or_else(|| DEFAULT_FOOTER_HINT.to_string())
        };
        lines.push(format!("{}{}", self.margin, self.theme.bold(&footer)));

        lines
    }

    fn scroll_marker(&self, hidden: Option<usize>, glyph: &str) -> String {
        match hidden {
            None => self.margin.clone(),
            Some(0) => format!("{}{}", self.margin, self.theme.dim(glyph)),
            Some(n) => {
                let text = format!("{glyph} ({n}) {glyph}");
                format!("{}{}", self.margin, self.theme.dim(&text))
            }
        }
    }
}

/// Right-pad with spaces to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::item::MenuItem;
    use crate::menu::model::MenuModel;
    use crate::menu::viewport::ViewportCalculator;
    use crate::ui::keys::Key;

    fn frame(items: &[MenuItem], options: &MenuOptions, keys: &[Key], height: u16) -> Vec<String> {
        let config = EngineConfig::plain();
        let mut nav =
            NavigationController::new(MenuModel::new(items), options.multi_select, 0).unwrap();
        for &k in keys {
            nav.handle(Some(k));
        }
        let window = ViewportCalculator::new(config.reserved_lines, config.min_visible_items)
            .compute(nav.model().rows(), nav.current_row(), height);
        FrameLayout::new(&config, options).dynamic_lines(&nav, &window)
    }

    #[test]
    fn single_select_frame_layout() {
        let items = vec![
            MenuItem::leaf("a", "Alpha").with_description("first letter"),
            MenuItem::submenu("b", "Beta", vec![MenuItem::leaf("b1", "Beta one")]),
        ];
        let lines = frame(&items, &MenuOptions::new(), &[], 40);
        let divider = "-".repeat(79);

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], pad_to_width("> Alpha", 60));
        assert_eq!(lines[2], "  Beta >");
        assert_eq!(lines[3], "      Beta one");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], divider);
        assert_eq!(lines[6], "Description: first letter");
        assert_eq!(lines[7], divider);
        assert_eq!(lines[8], "[ENTER] Select option.");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn multi_select_shows_checkboxes_and_count() {
        let items = vec![MenuItem::leaf("a", "A"), MenuItem::leaf("b", "B")];
        let options = MenuOptions::new().multi_select(true);
        let lines = frame(&items, &options, &[Key::Space, Key::Down], 40);

        assert_eq!(lines[1], "  [x] A");
        assert_eq!(lines[2], pad_to_width("> [ ] B", 60));
        assert_eq!(lines.last().unwrap(), "[ENTER] Confirm selection (1 items).");
    }

    #[test]
    fn description_line_is_omitted_when_empty() {
        let items = vec![MenuItem::leaf("a", "A")];
        let lines = frame(&items, &MenuOptions::new(), &[], 40);
        assert!(!lines.iter().any(|l| l.contains("Description:")));
    }

    #[test]
    fn scroll_markers_show_hidden_peer_counts() {
        let items: Vec<MenuItem> = (0..50)
            .map(|i| MenuItem::leaf(format!("i{i}"), format!("Item {i}")))
            .collect();
        let keys = vec![Key::Down; 20];
        let lines = frame(&items, &MenuOptions::new(), &keys, 20);

        assert_eq!(lines[0], "^ (18) ^");
        assert_eq!(lines[6], "v (27) v");
        assert_eq!(lines[1], "  Item 18");
        assert_eq!(lines[3], pad_to_width("> Item 20", 60));
    }

    #[test]
    fn left_margin_prefixes_every_line() {
        let items = vec![MenuItem::leaf("a", "A")];
        let options = MenuOptions::new().left_margin(2);
        let lines = frame(&items, &options, &[], 40);
        assert!(lines.iter().all(|l| l.starts_with("  ")));
        assert_eq!(lines[0], "  ");
    }

    #[test]
    fn static_block_switches_hint_in_sub_nav() {
        let config = EngineConfig::plain();
        let options = MenuOptions::new()
            .info("Pick a model")
            .sub_nav_hint_text("choose a quantization");
        let layout = FrameLayout::new(&config, &options);

        let top = layout.static_lines(false);
        assert_eq!(top.len(), 4);
        assert_eq!(top[1], "Pick a model");
        assert_eq!(top[2], DEFAULT_NAV_HINT);

        let sub = layout.static_lines(true);
        assert_eq!(sub[2], "choose a quantization");
        assert_ne!(layout.signature(false), layout.signature(true));
    }

    #[test]
    fn static_block_can_be_empty() {
        let config = EngineConfig::plain();
        let options = MenuOptions::new().nav_hint(false);
        assert!(FrameLayout::new(&config, &options).static_lines(false).is_empty());
    }

    #[test]
    fn pad_counts_display_columns() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }
}
