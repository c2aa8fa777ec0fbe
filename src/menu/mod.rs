//! Hierarchical menus
//!
//! # Module Structure
//!
//! - `item` - MenuItem data, labels and separators
//! - `model` - flattening and selection state
//! - `viewport` - visible window and scroll markers
//! - `cursor` - cursor memory keyed by menu id
//! - `actions` - caller actions keyed by item id
//! - `options` - per-call options
//! - `controller` - navigation state machine
//! - `frame` - frame text
//! - `engine` - the render loop
//! - `navigator` - nested menus as a page stack

mod actions;
mod controller;
mod cursor;
mod engine;
mod frame;
mod item;
mod model;
mod navigator;
mod options;
mod viewport;

pub use actions::{ActionRegistry, Actionable};
pub use controller::{NavState, NavigationController, Transition};
pub use cursor::CursorStore;
pub use engine::{Header, MenuEngine, Selection};
pub use frame::{pad_to_width, FrameLayout, StaticSignature};
pub use item::{ItemId, ItemKind, Label, MenuItem, Renderable};
pub use model::{flatten, FlatRow, MenuModel};
pub use navigator::{MenuPage, Navigator, Step};
pub use options::{MenuOptions, DEFAULT_FOOTER_HINT, DEFAULT_NAV_HINT, DEFAULT_SUB_NAV_HINT};
pub use viewport::{window_bounds, ViewportCalculator, ViewportWindow};
