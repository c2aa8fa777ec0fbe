//! Configuration module for menukit
//!
//! Precedence, highest first:
//! 1. Per-call `MenuOptions`
//! 2. Environment variables (MENUKIT_*)
//! 3. User config (`<config_dir>/menukit/config.toml`, `[menu]` table)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{EngineConfig, RepaintStrategy};
