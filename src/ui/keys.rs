//! Keyboard input.
//!
//! Terminal events are translated into a small logical key alphabet.
//! `None` from a key source means "nothing recognised": the caller redraws
//! and reads again.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::{MenuError, MenuResult};

/// Logical keys understood by menus and dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    Backspace,
    /// Any other printable character
    Char(char),
    /// Ctrl-C
    Interrupt,
}

impl Key {
    /// Vim-style letters as the movement keys menus understand. Text
    /// prompts read the raw `Char` instead.
    pub fn navigation(self) -> Self {
        match self {
            Key::Char('k') => Key::Up,
            Key::Char('j') => Key::Down,
            Key::Char('q') => Key::Esc,
            other => other,
        }
    }
}

/// Convert a keyboard event to a logical key
pub fn translate(key: &KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) if !c.is_control() => Some(Key::Char(c)),
        _ => None,
    }
}

/// A blocking source of logical keys.
pub trait KeySource {
    fn read_key(&mut self) -> MenuResult<Option<Key>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> MenuResult<Option<Key>> {
        (**self).read_key()
    }
}

/// Keys read from the real terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> MenuResult<Option<Key>> {
        use crossterm::event::{self, Event};

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(translate(&key)),
                Event::Key(_) => continue,
                // resize and friends: redraw only
                _ => return Ok(None),
            }
        }
    }
}

/// Pre-recorded keys, for tests and scripted runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Option<Key>>,
    reads: usize,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().map(Some).collect(),
            reads: 0,
        }
    }

    /// Queue an unrecognised keypress
    pub fn push_unknown(&mut self) {
        self.keys.push_back(None);
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push_back(Some(key));
    }

    pub fn extend(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys.into_iter().map(Some));
    }

    /// Number of reads performed so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> MenuResult<Option<Key>> {
        self.reads += 1;
        self.keys.pop_front().ok_or(MenuError::InputClosed)
    }
}
