//! Terminal plumbing shared by menus and dialogs
//!
//! - `keys` - key translation and key sources
//! - `terminal` - capabilities, height source, cursor/raw-mode guard
//! - `render` - incremental panel renderer
//! - `theme` - colors and glyphs
//! - `dialog` - yes/no and wait-for-key prompts

pub mod dialog;
pub mod keys;
pub mod render;
pub mod terminal;
pub mod theme;

pub use keys::{translate, Key, KeySource, ScriptedKeys, TerminalKeys};
pub use render::PanelRenderer;
pub use terminal::{
    detect_capabilities, ClearStrategy, FixedSize, LiveTerminal, TerminalCapabilities,
    TerminalGuard, TerminalSize,
};
pub use theme::Theme;
