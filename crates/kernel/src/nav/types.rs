//! Navigation tree data model.
//!
//! The console ships its side navigation as a JSON (or YAML) document of the
//! form `{"items": [...]}`. Each entry is either a submenu (it has an `items`
//! array) or a selectable leaf. Keys are camelCase to match the console
//! config format.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Ordered sequence of top-level navigation entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTree {
    #[serde(default, deserialize_with = "lenient_entries")]
    pub items: Vec<NavigationItem>,
}

/// A navigation entry: a submenu container or a terminal selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNavItem", into = "RawNavItem")]
pub enum NavigationItem {
    Menu(MenuItem),
    Leaf(LeafItem),
}

/// Submenu container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub event_key: String,
    pub title: String,
    pub icon: Option<String>,
    pub rules: VisibilityRules,
    pub items: Vec<LeafItem>,
}

/// Terminal selectable entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafItem {
    pub event_key: String,
    pub title: String,
    pub icon: Option<String>,
    /// Symbolic external target (e.g. `"console"`), resolved to a URL on selection.
    pub external_link: Option<String>,
    /// Renders a "NEW" tag next to the title.
    pub is_new: bool,
    pub rules: VisibilityRules,
    /// Scopes required for the entry when `hide_based_on_scope` is set.
    pub scopes: Option<Vec<String>>,
}

/// Flags enabling the three visibility rules. All default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityRules {
    pub show_based_on_role: bool,
    pub hide_based_on_role: bool,
    pub hide_based_on_scope: bool,
}

/// Variant tag handed to the scope matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Menu,
    Item,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Menu => "menu",
            ItemKind::Item => "item",
        }
    }
}

/// Whether a rendered node is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Display,
    Hide,
}

impl Visibility {
    pub fn is_displayed(self) -> bool {
        self == Visibility::Display
    }

    /// CSS `display` value for the presentation layer.
    pub fn as_css(self) -> &'static str {
        match self {
            Visibility::Display => "block",
            Visibility::Hide => "none",
        }
    }
}

impl NavigationItem {
    pub fn event_key(&self) -> &str {
        match self {
            NavigationItem::Menu(menu) => &menu.event_key,
            NavigationItem::Leaf(leaf) => &leaf.event_key,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            NavigationItem::Menu(menu) => &menu.title,
            NavigationItem::Leaf(leaf) => &leaf.title,
        }
    }

    pub fn rules(&self) -> VisibilityRules {
        match self {
            NavigationItem::Menu(menu) => menu.rules,
            NavigationItem::Leaf(leaf) => leaf.rules,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            NavigationItem::Menu(_) => ItemKind::Menu,
            NavigationItem::Leaf(_) => ItemKind::Item,
        }
    }
}

impl NavigationTree {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self { items }
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All event keys in render order, submenu children after their parent.
    pub fn event_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for item in &self.items {
            keys.push(item.event_key());
            if let NavigationItem::Menu(menu) = item {
                keys.extend(menu.items.iter().map(|leaf| leaf.event_key.as_str()));
            }
        }
        keys
    }

    /// Find a top-level entry by event key.
    pub fn find(&self, event_key: &str) -> Option<&NavigationItem> {
        self.items.iter().find(|item| item.event_key() == event_key)
    }

    /// Find a leaf anywhere in the tree, top-level or inside a submenu.
    pub fn find_leaf(&self, event_key: &str) -> Option<&LeafItem> {
        self.items.iter().find_map(|item| match item {
            NavigationItem::Leaf(leaf) if leaf.event_key == event_key => Some(leaf),
            NavigationItem::Leaf(_) => None,
            NavigationItem::Menu(menu) => menu.items.iter().find(|l| l.event_key == event_key),
        })
    }

    /// Event keys of every submenu; these start expanded.
    pub fn default_open_keys(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| match item {
                NavigationItem::Menu(menu) => Some(menu.event_key.clone()),
                NavigationItem::Leaf(_) => None,
            })
            .collect()
    }
}

/// Wire shape of a navigation entry before it is split into Menu / Leaf.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNavItem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    event_key: String,
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    icon: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "Option::is_none"
    )]
    items: Option<Vec<RawNavItem>>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    external_link: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "is_false")]
    new: bool,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "is_false")]
    show_based_on_role: bool,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "is_false")]
    hide_based_on_role: bool,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "is_false")]
    hide_based_on_scope: bool,
    #[serde(
        default,
        deserialize_with = "lenient_scopes",
        skip_serializing_if = "Option::is_none"
    )]
    scopes: Option<Vec<String>>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Entries are converted one at a time so a single malformed entry is
/// dropped instead of rejecting the whole document.
fn parse_entries<T>(values: Vec<Value>) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed navigation entry");
                None
            }
        })
        .collect()
}

fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<NavigationItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer).map(parse_entries)
}

/// A submenu's `items` must be an array; anything else leaves the entry a leaf.
fn lenient_children<'de, D>(deserializer: D) -> Result<Option<Vec<RawNavItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => Some(parse_entries(values)),
        Some(other) => {
            warn!(value = %other, "navigation entry `items` is not an array; ignoring");
            None
        }
        None => None,
    })
}

/// Strings pass through and numbers keep their text; anything else is empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Only a literal `true` enables a flag; anything else (strings, numbers,
/// null) falls through to the default-hide branch.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

/// Accepts an array of strings or a single space-separated string.
fn lenient_scopes<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(values)) => Some(
            values
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        ),
        Some(Value::String(s)) => Some(s.split_whitespace().map(str::to_string).collect()),
        _ => None,
    })
}

impl RawNavItem {
    fn rules(&self) -> VisibilityRules {
        VisibilityRules {
            show_based_on_role: self.show_based_on_role,
            hide_based_on_role: self.hide_based_on_role,
            hide_based_on_scope: self.hide_based_on_scope,
        }
    }

    fn into_leaf(self) -> LeafItem {
        let rules = self.rules();
        LeafItem {
            event_key: self.event_key,
            title: self.title,
            icon: self.icon,
            external_link: self.external_link,
            is_new: self.new,
            rules,
            scopes: self.scopes,
        }
    }
}

impl From<RawNavItem> for NavigationItem {
    fn from(mut raw: RawNavItem) -> Self {
        match raw.items.take() {
            Some(children) => {
                let rules = raw.rules();
                NavigationItem::Menu(MenuItem {
                    event_key: raw.event_key,
                    title: raw.title,
                    icon: raw.icon,
                    rules,
                    // Submenus are one level deep; nested children are rendered as leaves.
                    items: children.into_iter().map(RawNavItem::into_leaf).collect(),
                })
            }
            None => NavigationItem::Leaf(raw.into_leaf()),
        }
    }
}

impl From<LeafItem> for RawNavItem {
    fn from(leaf: LeafItem) -> Self {
        RawNavItem {
            kind: Some(ItemKind::Item.as_str().to_string()),
            event_key: leaf.event_key,
            title: leaf.title,
            icon: leaf.icon,
            items: None,
            external_link: leaf.external_link,
            new: leaf.is_new,
            show_based_on_role: leaf.rules.show_based_on_role,
            hide_based_on_role: leaf.rules.hide_based_on_role,
            hide_based_on_scope: leaf.rules.hide_based_on_scope,
            scopes: leaf.scopes,
        }
    }
}

impl From<NavigationItem> for RawNavItem {
    fn from(item: NavigationItem) -> Self {
        match item {
            NavigationItem::Leaf(leaf) => leaf.into(),
            NavigationItem::Menu(menu) => RawNavItem {
                kind: Some(ItemKind::Menu.as_str().to_string()),
                event_key: menu.event_key,
                title: menu.title,
                icon: menu.icon,
                items: Some(menu.items.into_iter().map(RawNavItem::from).collect()),
                external_link: None,
                new: false,
                show_based_on_role: menu.rules.show_based_on_role,
                hide_based_on_role: menu.rules.hide_based_on_role,
                hide_based_on_scope: menu.rules.hide_based_on_scope,
                scopes: None,
            },
        }
    }
}
