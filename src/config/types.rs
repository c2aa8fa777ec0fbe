//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;

use super::loader::{self, ConfigWarning};

/// How the renderer repaints between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepaintStrategy {
    /// Currently the same as `Incremental`
    #[default]
    Auto,
    /// Paint the static block once, then rewrite only the dynamic lines
    Incremental,
    /// Clear and repaint the whole screen on every frame
    Full,
}

impl RepaintStrategy {
    pub fn is_incremental(self) -> bool {
        matches!(self, RepaintStrategy::Auto | RepaintStrategy::Incremental)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(RepaintStrategy::Auto),
            "incremental" => Some(RepaintStrategy::Incremental),
            "full" => Some(RepaintStrategy::Full),
            _ => None,
        }
    }
}

/// Engine-wide defaults. Per-call `MenuOptions` override the relevant fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Lines kept free for header, hints and footer when sizing the viewport
    #[serde(default = "default_reserved_lines")]
    pub reserved_lines: u16,

    /// Lower bound on visible rows, however small the terminal is
    #[serde(default = "default_min_visible_items")]
    pub min_visible_items: u16,

    #[serde(default)]
    pub repaint: RepaintStrategy,

    #[serde(default)]
    pub left_margin: usize,

    #[serde(default = "default_divider_width")]
    pub divider_width: usize,

    /// Display width the highlighted row is padded to
    #[serde(default = "default_highlight_width")]
    pub highlight_width: usize,

    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Deepest navigation stack a `Navigator` will build
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Put the terminal in raw mode while a menu reads keys
    #[serde(default = "default_true")]
    pub raw_mode: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reserved_lines: default_reserved_lines(),
            min_visible_items: default_min_visible_items(),
            repaint: RepaintStrategy::default(),
            left_margin: 0,
            divider_width: default_divider_width(),
            highlight_width: default_highlight_width(),
            color: true,
            unicode: true,
            max_depth: default_max_depth(),
            raw_mode: true,
        }
    }
}

fn default_reserved_lines() -> u16 {
    15
}

fn default_min_visible_items() -> u16 {
    5
}

fn default_divider_width() -> usize {
    79
}

fn default_highlight_width() -> usize {
    60
}

fn default_max_depth() -> usize {
    16
}

fn default_true() -> bool {
    true
}

/// On-disk layout: everything lives under a `[menu]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub menu: EngineConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the user config file, or defaults
    pub fn load_or_default() -> Self {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (MENUKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Plain output: no color, ASCII glyphs, cooked terminal.
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            raw_mode: false,
            ..Self::default()
        }
    }
}
