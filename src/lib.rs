//! menukit - keyboard-driven hierarchical terminal menus
//!
//! Callers hand the engine a list of `MenuItem`s (children nested one level)
//! and get back a `Selection`: one item, a multi-select snapshot, or
//! cancellation. Frames are repainted incrementally: the static block once,
//! the viewport rows in place on every key.

pub mod config;
pub mod error;
pub mod menu;
pub mod ui;

// Re-exports for convenience
pub use config::{EngineConfig, RepaintStrategy};
pub use error::{MenuError, MenuResult};
pub use menu::{
    ActionRegistry, CursorStore, ItemId, MenuEngine, MenuItem, MenuOptions, MenuPage, Navigator,
    Selection, Step,
};
pub use ui::{Key, KeySource, ScriptedKeys};
