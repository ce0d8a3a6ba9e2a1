//! Icon name lookup.

use serde::Serialize;

/// A renderable icon: the config name and the CSS class drawing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub name: String,
    pub class: &'static str,
}

/// Icon used for names the console does not know.
pub const FALLBACK_ICON_CLASS: &str = "icon-circle";

const ICONS: &[(&str, &str)] = &[
    ("dashboard", "icon-dashboard"),
    ("people", "icon-people"),
    ("peoples", "icon-people"),
    ("user", "icon-user"),
    ("calendar", "icon-calendar"),
    ("gear", "icon-gear"),
    ("settings", "icon-gear"),
    ("list", "icon-list"),
    ("paragraph", "icon-paragraph"),
    ("task", "icon-task"),
    ("storage", "icon-storage"),
    ("link", "icon-link"),
];

/// Maps icon names from the navigation config to icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconResolver;

impl IconResolver {
    /// Names are matched case-insensitively; unknown names fall back to a
    /// generic icon.
    pub fn icon_from_string(&self, name: &str) -> Icon {
        let lower = name.to_ascii_lowercase();
        let class = ICONS
            .iter()
            .find(|(known, _)| *known == lower)
            .map(|(_, class)| *class)
            .unwrap_or(FALLBACK_ICON_CLASS);

        Icon {
            name: name.to_string(),
            class,
        }
    }
}
