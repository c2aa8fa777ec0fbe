//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{ConfigFile, EngineConfig, RepaintStrategy};

/// Non-fatal configuration warning surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(EngineConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let file: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| {
            // serde_ignored reports `menu.key`; warn about the leaf
            let key = dotted.rsplit('.').next().unwrap_or(dotted);
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: line_of(&content, key),
                suggestion: suggest_key(key),
            }
        })
        .collect();

    Ok((file.menu, warnings))
}

/// Path of the user config file (`<config_dir>/menukit/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("menukit").join("config.toml"))
}

/// Load from the user config, or defaults. Env overrides are applied either way.
pub fn load_or_default() -> EngineConfig {
    if let Some(path) = user_config_path() {
        if path.exists() {
            match load_with_warnings(&path) {
                Ok((config, warnings)) => {
                    for w in &warnings {
                        tracing::warn!(
                            key = %w.key,
                            file = %w.file.display(),
                            "unknown config key"
                        );
                    }
                    return with_env_overrides(config);
                }
                Err(e) => tracing::warn!("ignoring unreadable config: {e}"),
            }
        }
    }

    with_env_overrides(EngineConfig::default())
}

/// Apply environment variable overrides (MENUKIT_* prefix)
pub fn with_env_overrides(config: EngineConfig) -> EngineConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: EngineConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> EngineConfig {
    // MENUKIT_REPAINT
    if let Some(value) = get_env("MENUKIT_REPAINT") {
        match RepaintStrategy::parse(&value) {
            Some(strategy) => config.repaint = strategy,
            None => tracing::warn!("ignoring MENUKIT_REPAINT={value}"),
        }
    }

    // MENUKIT_RESERVED_LINES
    if let Some(lines) = get_env("MENUKIT_RESERVED_LINES").and_then(|v| v.trim().parse().ok()) {
        config.reserved_lines = lines;
    }

    // MENUKIT_LEFT_MARGIN
    if let Some(margin) = get_env("MENUKIT_LEFT_MARGIN").and_then(|v| v.trim().parse().ok()) {
        config.left_margin = margin;
    }

    // MENUKIT_MAX_DEPTH
    if let Some(depth) = get_env("MENUKIT_MAX_DEPTH").and_then(|v| v.trim().parse().ok()) {
        config.max_depth = depth;
    }

    config
}

/// First line mentioning `key`, 1-based.
fn line_of(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|index| index + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "menu",
    "reserved_lines",
    "min_visible_items",
    "repaint",
    "left_margin",
    "divider_width",
    "highlight_width",
    "color",
    "unicode",
    "max_depth",
    "raw_mode",
];

/// Closest known key within two edits.
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|&known| (edit_distance(unknown, known), known))
        .filter(|&(distance, _)| distance <= 2)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}
