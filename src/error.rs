//! Error types for menukit
//!
//! Library errors use `thiserror`; caller actions keep their own
//! `anyhow::Error` and are never wrapped by the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Terminal read or write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user pressed Ctrl-C while a menu was active
    #[error("interrupted by user")]
    Interrupted,

    /// The key source has no more input to offer
    #[error("key input closed")]
    InputClosed,

    /// Nested menus went deeper than the configured limit
    #[error("menu nesting exceeded the limit of {limit} levels")]
    DepthLimit { limit: usize },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl MenuError {
    /// True when the error came from a Ctrl-C keypress.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, MenuError::Interrupted)
    }
}
