//! Small prompts that share the menu engine's terminal and key source.

use std::io::Write;

use crate::error::{MenuError, MenuResult};
use crate::menu::MenuEngine;

use super::keys::{Key, KeySource};
use super::render::{PanelRenderer, NEWLINE};
use super::terminal::{TerminalGuard, TerminalSize};
use super::theme::Theme;

pub const CONFIRM_HINT: &str = "Left/Right: Choose, ENTER: Confirm, ESC: No.";

fn choice(theme: &Theme, label: &str, selected: bool) -> String {
    match (selected, theme.color) {
        (true, true) => theme.highlight(&format!(" {label} ")),
        (true, false) => format!("[{label}]"),
        (false, _) => format!(" {label} "),
    }
}

/// The Yes/No row of a confirmation panel.
pub fn choice_line(theme: &Theme, yes: bool) -> String {
    format!("{}   {}", choice(theme, "Yes", yes), choice(theme, "No", !yes))
}

impl<W: Write, K: KeySource, T: TerminalSize> MenuEngine<W, K, T> {
    /// Ask a yes/no question. ESC answers no; Ctrl-C is an error.
    pub fn confirm(&mut self, question: &str, default_yes: bool) -> MenuResult<bool> {
        let theme = Theme::new(self.config.color, self.config.unicode);
        let margin = " ".repeat(self.config.left_margin);
        let mut renderer = PanelRenderer::new(self.config.repaint, self.clear);
        let mut guard = TerminalGuard::acquire(&mut self.out, self.config.raw_mode)?;
        let mut yes = default_yes;

        loop {
            let lines = [
                format!("{margin}{}", choice_line(&theme, yes)),
                String::new(),
                format!("{margin}{}", theme.dim(CONFIRM_HINT)),
            ];
            renderer.render(&mut guard, &lines, false, |out| {
                write!(out, "{margin}{}{NEWLINE}{NEWLINE}", theme.bold(question))
            })?;

            match self.keys.read_key()?.map(Key::navigation) {
                Some(Key::Left | Key::Up) => yes = true,
                Some(Key::Right | Key::Down) => yes = false,
                Some(Key::Enter) => break,
                Some(Key::Esc) => {
                    yes = false;
                    break;
                }
                Some(Key::Interrupt) => return Err(MenuError::Interrupted),
                Some(Key::Space | Key::Backspace | Key::Char(_)) | None => {}
            }
        }

        tracing::debug!(question, answer = yes, "confirmation answered");
        Ok(yes)
    }

    /// Read a line of text after `prompt`, echoing as the user types.
    ///
    /// Backspace removes the last character, arrows and other non-text
    /// keys are skipped. ENTER returns the trimmed text, ESC returns `None`.
    pub fn input_with_esc(&mut self, prompt: &str) -> MenuResult<Option<String>> {
        let margin = " ".repeat(self.config.left_margin);
        let mut guard = TerminalGuard::acquire(&mut self.out, self.config.raw_mode)?;
        guard.show_cursor()?;
        write!(guard, "{margin}{prompt}")?;
        guard.flush()?;

        let mut buffer = String::new();
        let answer = loop {
            match self.keys.read_key()? {
                Some(Key::Enter) => break Some(buffer.trim().to_string()),
                Some(Key::Esc) => break None,
                Some(Key::Interrupt) => return Err(MenuError::Interrupted),
                Some(Key::Backspace) => {
                    if buffer.pop().is_some() {
                        write!(guard, "\x08 \x08")?;
                    }
                }
                Some(Key::Space) => {
                    buffer.push(' ');
                    write!(guard, " ")?;
                }
                Some(Key::Char(c)) => {
                    buffer.push(c);
                    write!(guard, "{c}")?;
                }
                Some(Key::Up | Key::Down | Key::Left | Key::Right) | None => continue,
            }
            guard.flush()?;
        };
        write!(guard, "{NEWLINE}")?;

        tracing::debug!(prompt, cancelled = answer.is_none(), "text input finished");
        Ok(answer)
    }

    /// Print `message` and block until any key arrives.
    pub fn wait_for_any_key(&mut self, message: &str) -> MenuResult<()> {
        let theme = Theme::new(self.config.color, self.config.unicode);
        let mut guard = TerminalGuard::acquire(&mut self.out, self.config.raw_mode)?;
        write!(guard, "{}{NEWLINE}", theme.dim(message))?;
        guard.flush()?;

        match self.keys.read_key()? {
            Some(Key::Interrupt) => Err(MenuError::Interrupted),
            _ => Ok(()),
        }
    }
}
