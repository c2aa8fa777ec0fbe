//! Reusable engines and item trees.

use menukit::menu::MenuItem;
use menukit::ui::{FixedSize, Key, ScriptedKeys};
use menukit::{EngineConfig, MenuEngine, RepaintStrategy};

pub type TestEngine = MenuEngine<Vec<u8>, ScriptedKeys, FixedSize>;

/// Plain-output engine over scripted keys.
pub fn engine(keys: &[Key], height: u16) -> TestEngine {
    engine_with(keys, height, EngineConfig::plain())
}

pub fn engine_with(keys: &[Key], height: u16, config: EngineConfig) -> TestEngine {
    MenuEngine::new(
        Vec::new(),
        ScriptedKeys::new(keys.iter().copied()),
        FixedSize(height),
        config,
    )
}

pub fn engine_with_repaint(keys: &[Key], height: u16, repaint: RepaintStrategy) -> TestEngine {
    engine_with(
        keys,
        height,
        EngineConfig {
            repaint,
            ..EngineConfig::plain()
        },
    )
}

/// `count` plain leaves with ids `item-0..`.
pub fn leaves(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|i| MenuItem::leaf(format!("item-{i}"), format!("Item {i}")))
        .collect()
}

/// Leaves, a parent with two children, a static note and a described leaf.
pub fn mixed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("install", "Install dependencies").with_description("Runs the installer"),
        MenuItem::submenu(
            "models",
            "Models",
            vec![
                MenuItem::leaf("q4", "Q4_K_M").with_description("4-bit, medium"),
                MenuItem::separator("", 8, "-"),
                MenuItem::leaf("q8", "Q8_0"),
            ],
        )
        .with_description("Pick a quantization"),
        MenuItem::static_row("Nothing to see here"),
        MenuItem::leaf("exit", "Exit"),
    ]
}

pub fn ids(items: &[&MenuItem]) -> Vec<String> {
    items.iter().map(|i| i.id().to_string()).collect()
}
