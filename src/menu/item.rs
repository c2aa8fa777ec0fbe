//! Menu item definitions.
//!
//! Items are plain data: a label, a description and a kind. Behaviour
//! (what happens on confirmation) lives in an `ActionRegistry` keyed by
//! `ItemId`, so the engine can flatten, navigate and render without ever
//! calling into caller code except through labels.

use std::fmt;
use std::rc::Rc;

/// Stable identity of a menu item, used to look up its action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can produce a row label.
///
/// `highlighted` is true when the row is under the cursor. Labels are
/// evaluated fresh on every frame.
pub trait Renderable {
    fn label(&self, highlighted: bool) -> String;
}

/// Row label: fixed text or computed per frame.
#[derive(Clone)]
pub enum Label {
    Text(String),
    Dynamic(Rc<dyn Fn(bool) -> String>),
}

impl Renderable for Label {
    fn label(&self, highlighted: bool) -> String {
        match self {
            Label::Text(text) => text.clone(),
            Label::Dynamic(f) => f(highlighted),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Label::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

/// What kind of row an item produces.
#[derive(Debug, Clone)]
pub enum ItemKind {
    /// Rendered but never reachable by the cursor
    Static,
    /// Selectable row with no children
    Leaf,
    /// Selectable row whose children are shown one level below it.
    /// Children of children are not walked.
    SubMenu(Vec<MenuItem>),
}

/// A single menu entry.
#[derive(Debug, Clone)]
pub struct MenuItem {
    id: ItemId,
    label: Label,
    description: String,
    kind: ItemKind,
    preselected: bool,
}

impl MenuItem {
    /// Create a selectable leaf
    pub fn leaf(id: impl Into<ItemId>, label: impl Into<Label>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            kind: ItemKind::Leaf,
            preselected: false,
        }
    }

    /// Create a parent row with one level of children
    pub fn submenu(
        id: impl Into<ItemId>,
        label: impl Into<Label>,
        children: Vec<MenuItem>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            kind: ItemKind::SubMenu(children),
            preselected: false,
        }
    }

    /// Create a non-selectable row
    pub fn static_row(label: impl Into<Label>) -> Self {
        let label = label.into();
        let id = match &label {
            Label::Text(text) => ItemId::new(format!("static:{text}")),
            Label::Dynamic(_) => ItemId::new("static"),
        };
        Self {
            id,
            label,
            description: String::new(),
            kind: ItemKind::Static,
            preselected: false,
        }
    }

    /// Create a horizontal rule, optionally with centered text.
    ///
    /// The rule is at least 8 columns wide; `fill` uses its first character.
    pub fn separator(text: &str, width: usize, fill: &str) -> Self {
        let text = text.trim().to_string();
        let width = width.max(8);
        let fill = fill.chars().next().unwrap_or('─');
        let id = ItemId::new(format!("separator:{text}"));
        let label = Label::Dynamic(Rc::new(move |_| separator_line(&text, width, fill)));
        Self {
            id,
            label,
            description: String::new(),
            kind: ItemKind::Static,
            preselected: false,
        }
    }

    /// Replace the label with one computed on every frame
    pub fn dynamic(mut self, f: impl Fn(bool) -> String + 'static) -> Self {
        self.label = Label::Dynamic(Rc::new(f));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Start this item checked in multi-select menus
    pub fn selected(mut self, selected: bool) -> Self {
        self.preselected = selected;
        self
    }

    /// Turn a leaf into a static row. Parents keep their kind.
    pub fn selectable(mut self, selectable: bool) -> Self {
        if !selectable && matches!(self.kind, ItemKind::Leaf) {
            self.kind = ItemKind::Static;
        } else if selectable && matches!(self.kind, ItemKind::Static) {
            self.kind = ItemKind::Leaf;
        }
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self.kind, ItemKind::Static)
    }

    pub fn is_preselected(&self) -> bool {
        self.preselected
    }

    pub fn children(&self) -> &[MenuItem] {
        match &self.kind {
            ItemKind::SubMenu(children) => children,
            _ => &[],
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

impl Renderable for MenuItem {
    fn label(&self, highlighted: bool) -> String {
        self.label.label(highlighted)
    }
}

fn separator_line(text: &str, width: usize, fill: char) -> String {
    if text.is_empty() {
        return fill.to_string().repeat(width);
    }

    let content = format!(" {text} ");
    let len = content.chars().count();
    if len >= width {
        return content.chars().take(width).collect();
    }

    let remaining = width - len;
    let left = remaining / 2;
    let right = remaining - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        content,
        fill.to_string().repeat(right)
    )
}
