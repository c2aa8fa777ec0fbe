//! Common test utilities for menukit scenario and property tests.
//!
//! This module provides:
//! - `VirtualScreen`: replays the engine's escape sequences into a grid
//! - Fixtures: engines over scripted keys and reusable item trees

#![allow(dead_code)]

pub mod fixtures;
pub mod screen;

pub use fixtures::*;
pub use screen::*;
