//! Projection of a navigation tree into a renderable side-nav view.
//!
//! A projection is recomputed on every render from the current role and
//! scope; the tree itself is never mutated. Selection and sign-out are
//! reported back to the caller through callbacks, so the active key and the
//! sign-out dialog flag stay owned by whoever renders the console
//! ([`ConsoleState`] is the in-process version of that owner).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::{RoleMatcher, ScopeMatcher};

use super::icon::{Icon, IconResolver};
use super::link::{ExternalLinkResolver, NEW_BROWSING_CONTEXT};
use super::types::{LeafItem, NavigationItem, NavigationTree, Visibility};
use super::visibility::VisibilityResolver;

/// Inputs for one render of the side navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideNavProps {
    pub org_id: String,
    pub role: String,
    /// Space-separated granted scopes.
    #[serde(default)]
    pub scope: String,
    /// Event key of the currently selected entry.
    #[serde(default)]
    pub active_key: String,
}

/// A selectable entry, top-level or inside a submenu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub event_key: String,
    pub title: String,
    pub icon: Option<Icon>,
    pub visibility: Visibility,
    pub is_new: bool,
    pub active: bool,
    /// Resolved external URL; only top-level entries carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

/// A submenu and its entries. Each child's visibility is resolved on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmenuView {
    pub event_key: String,
    pub title: String,
    pub icon: Option<Icon>,
    pub visibility: Visibility,
    pub children: Vec<EntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEntryView {
    Submenu(SubmenuView),
    Entry(EntryView),
}

/// The projected side navigation for one role/scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideNavView {
    pub active_key: String,
    pub default_open_keys: Vec<String>,
    pub entries: Vec<NavEntryView>,
}

/// What the console should do after an entry is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    pub event_key: String,
    /// URL to open in a new browsing context, if the entry links out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_target: Option<String>,
}

impl SideNavView {
    /// Select an entry by event key.
    ///
    /// Calls `on_select` with the key and returns the outcome. Unknown keys,
    /// hidden entries, and entries inside a hidden submenu are not selectable
    /// and return `None` without calling `on_select`.
    pub fn select<F>(&self, event_key: &str, on_select: F) -> Option<SelectionOutcome>
    where
        F: FnOnce(&str),
    {
        let Some(entry) = self.selectable(event_key) else {
            debug!(event_key = %event_key, "ignoring selection of unavailable entry");
            return None;
        };

        on_select(&entry.event_key);

        let open_url = entry.external_url.clone();
        let open_target = open_url.as_ref().map(|_| NEW_BROWSING_CONTEXT.to_string());
        Some(SelectionOutcome {
            event_key: entry.event_key.clone(),
            open_url,
            open_target,
        })
    }

    /// Ask the owner to open the sign-out confirmation dialog.
    pub fn request_sign_out<F>(&self, set_sign_out_modal_open: F)
    where
        F: FnOnce(bool),
    {
        request_sign_out(set_sign_out_modal_open);
    }

    /// Count of displayed nodes (submenus and entries).
    pub fn displayed_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                NavEntryView::Entry(e) => usize::from(e.visibility.is_displayed()),
                NavEntryView::Submenu(s) => {
                    usize::from(s.visibility.is_displayed())
                        + s.children
                            .iter()
                            .filter(|c| c.visibility.is_displayed())
                            .count()
                }
            })
            .sum()
    }

    fn selectable(&self, event_key: &str) -> Option<&EntryView> {
        for entry in &self.entries {
            match entry {
                NavEntryView::Entry(e) if e.event_key == event_key => {
                    return e.visibility.is_displayed().then_some(e);
                }
                NavEntryView::Entry(_) => {}
                NavEntryView::Submenu(submenu) => {
                    if let Some(child) = submenu.children.iter().find(|c| c.event_key == event_key)
                    {
                        let reachable = submenu.visibility.is_displayed()
                            && child.visibility.is_displayed();
                        return reachable.then_some(child);
                    }
                }
            }
        }
        None
    }
}

/// The sign-out control: always asks for the confirmation dialog.
pub fn request_sign_out<F>(set_sign_out_modal_open: F)
where
    F: FnOnce(bool),
{
    set_sign_out_modal_open(true);
}

/// Side-nav projector: visibility rules, link resolution, and icon lookup.
#[derive(Debug, Clone)]
pub struct SideNav<R, S> {
    resolver: VisibilityResolver<R, S>,
    links: ExternalLinkResolver,
    icons: IconResolver,
}

impl<R: RoleMatcher, S: ScopeMatcher> SideNav<R, S> {
    pub fn new(resolver: VisibilityResolver<R, S>, links: ExternalLinkResolver) -> Self {
        Self {
            resolver,
            links,
            icons: IconResolver,
        }
    }

    pub fn resolver(&self) -> &VisibilityResolver<R, S> {
        &self.resolver
    }

    pub fn links(&self) -> &ExternalLinkResolver {
        &self.links
    }

    /// Project `tree` for the role, scope, and selection in `props`.
    pub fn project(&self, tree: &NavigationTree, props: &SideNavProps) -> SideNavView {
        let entries: Vec<NavEntryView> = tree
            .items
            .iter()
            .map(|item| match item {
                NavigationItem::Menu(menu) => NavEntryView::Submenu(SubmenuView {
                    event_key: menu.event_key.clone(),
                    title: menu.title.clone(),
                    icon: self.icon(menu.icon.as_deref()),
                    visibility: self.resolver.resolve_menu(&props.role, &props.scope, menu),
                    children: menu
                        .items
                        .iter()
                        .map(|leaf| self.entry(leaf, props, false))
                        .collect(),
                }),
                NavigationItem::Leaf(leaf) => NavEntryView::Entry(self.entry(leaf, props, true)),
            })
            .collect();

        let view = SideNavView {
            active_key: props.active_key.clone(),
            default_open_keys: tree.default_open_keys(),
            entries,
        };

        debug!(
            role = %props.role,
            items = tree.len(),
            displayed = view.displayed_count(),
            "projected side navigation"
        );
        view
    }

    fn entry(&self, leaf: &LeafItem, props: &SideNavProps, top_level: bool) -> EntryView {
        // Submenu entries render without an icon and never link out.
        let (icon, external_url) = if top_level {
            let url = leaf
                .external_link
                .as_deref()
                .map(|target| self.links.resolve(target, &props.org_id))
                .filter(|url| !url.is_empty());
            (self.icon(leaf.icon.as_deref()), url)
        } else {
            (None, None)
        };

        EntryView {
            event_key: leaf.event_key.clone(),
            title: leaf.title.clone(),
            icon,
            visibility: self.resolver.resolve_leaf(&props.role, &props.scope, leaf),
            is_new: leaf.is_new,
            active: !props.active_key.is_empty() && leaf.event_key == props.active_key,
            external_url,
        }
    }

    fn icon(&self, name: Option<&str>) -> Option<Icon> {
        name.map(|n| self.icons.icon_from_string(n))
    }
}

/// Console state owned by the parent of the side navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsoleState {
    pub active_key: String,
    pub sign_out_modal_open: bool,
}

impl ConsoleState {
    pub fn new(active_key: impl Into<String>) -> Self {
        Self {
            active_key: active_key.into(),
            sign_out_modal_open: false,
        }
    }

    /// Selection callback.
    pub fn on_select(&mut self, event_key: &str) {
        self.active_key = event_key.to_string();
    }

    /// Sign-out dialog setter.
    pub fn set_sign_out_modal_open(&mut self, open: bool) {
        self.sign_out_modal_open = open;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::access::{GrantedScopeMatcher, RolePolicy};

    fn sidenav() -> SideNav<RolePolicy, GrantedScopeMatcher> {
        SideNav::new(
            VisibilityResolver::new(RolePolicy::new(["admin"], ["guest"]), GrantedScopeMatcher),
            ExternalLinkResolver::new("https://idp.example.com"),
        )
    }

    fn tree() -> NavigationTree {
        NavigationTree::from_json(
            r#"{"items": [
                {"eventKey": "1", "title": "Manage", "icon": "people", "hideBasedOnScope": true,
                 "items": [
                    {"eventKey": "1-1", "title": "Doctors", "icon": "user", "hideBasedOnScope": true,
                     "scopes": ["doctor_read"], "new": true},
                    {"eventKey": "1-2", "title": "Bookings", "hideBasedOnScope": true,
                     "scopes": ["booking_read"], "externalLink": "console"}
                 ]},
                {"eventKey": "2", "title": "Console", "icon": "gear", "externalLink": "console",
                 "showBasedOnRole": true},
                {"eventKey": "3", "title": "Docs", "externalLink": "elsewhere",
                 "showBasedOnRole": true},
                {"eventKey": "4", "title": "Hidden"}
            ]}"#,
        )
        .unwrap()
    }

    fn props(role: &str, scope: &str) -> SideNavProps {
        SideNavProps {
            org_id: "petcare".into(),
            role: role.into(),
            scope: scope.into(),
            active_key: "1-1".into(),
        }
    }

    fn submenu(view: &SideNavView) -> &SubmenuView {
        match &view.entries[0] {
            NavEntryView::Submenu(s) => s,
            NavEntryView::Entry(_) => panic!("expected submenu"),
        }
    }

    fn entry<'a>(view: &'a SideNavView, idx: usize) -> &'a EntryView {
        match &view.entries[idx] {
            NavEntryView::Entry(e) => e,
            NavEntryView::Submenu(_) => panic!("expected entry"),
        }
    }

    #[test]
    fn projects_menu_and_children_independently() {
        let view = sidenav().project(&tree(), &props("user", "doctor_read"));

        let menu = submenu(&view);
        assert_eq!(menu.visibility, Visibility::Display);
        assert_eq!(menu.icon.as_ref().unwrap().class, "icon-people");
        assert_eq!(menu.children[0].visibility, Visibility::Display);
        assert_eq!(menu.children[1].visibility, Visibility::Hide);
        assert!(menu.children[0].is_new);
        assert!(menu.children[0].active);
        assert!(!menu.children[1].active);
    }

    #[test]
    fn submenu_entries_have_no_icon_or_link() {
        let view = sidenav().project(&tree(), &props("user", "booking_read"));
        let child = &submenu(&view).children[1];
        assert!(child.icon.is_none());
        assert!(child.external_url.is_none());
    }

    #[test]
    fn top_level_links_resolve() {
        let view = sidenav().project(&tree(), &props("admin", ""));
        assert_eq!(
            entry(&view, 1).external_url.as_deref(),
            Some("https://idp.example.com/o/petcare/console")
        );
        // unknown target resolves to nothing
        assert!(entry(&view, 2).external_url.is_none());
        assert_eq!(entry(&view, 3).visibility, Visibility::Hide);
        assert_eq!(view.default_open_keys, vec!["1"]);
    }

    #[test]
    fn select_calls_back_and_opens_link() {
        let view = sidenav().project(&tree(), &props("admin", ""));
        let mut state = ConsoleState::new("1-1");

        let outcome = view.select("2", |key| state.on_select(key)).unwrap();
        assert_eq!(state.active_key, "2");
        assert_eq!(
            outcome.open_url.as_deref(),
            Some("https://idp.example.com/o/petcare/console")
        );
        assert_eq!(outcome.open_target.as_deref(), Some("_blank"));

        let outcome = view.select("3", |key| state.on_select(key)).unwrap();
        assert_eq!(state.active_key, "3");
        assert!(outcome.open_url.is_none());
        assert!(outcome.open_target.is_none());
    }

    #[test]
    fn hidden_or_unknown_entries_are_not_selectable() {
        let view = sidenav().project(&tree(), &props("user", "doctor_read"));
        let mut state = ConsoleState::new("");

        assert!(view.select("4", |key| state.on_select(key)).is_none());
        assert!(view.select("1-2", |key| state.on_select(key)).is_none());
        assert!(view.select("missing", |key| state.on_select(key)).is_none());
        assert_eq!(state.active_key, "");

        assert!(view.select("1-1", |key| state.on_select(key)).is_some());
        assert_eq!(state.active_key, "1-1");
    }

    #[test]
    fn children_of_hidden_submenu_are_not_selectable() {
        let view = sidenav().project(&tree(), &props("user", ""));
        assert_eq!(submenu(&view).visibility, Visibility::Hide);
        assert!(view.select("1-1", |_| {}).is_none());
    }

    #[test]
    fn duplicate_key_selects_first_in_render_order() {
        let tree = NavigationTree::from_json(
            r#"{"items": [
                {"eventKey": "1", "title": "Manage", "hideBasedOnScope": true,
                 "items": [
                    {"eventKey": "dup", "title": "Doctors", "hideBasedOnScope": true,
                     "scopes": ["doctor_read"]}
                 ]},
                {"eventKey": "dup", "title": "Console", "externalLink": "console",
                 "hideBasedOnScope": true, "scopes": ["console_view"]}
            ]}"#,
        )
        .unwrap();
        let mut state = ConsoleState::default();

        // both occurrences visible: the submenu child wins and has no link
        let view = sidenav().project(&tree, &props("user", "doctor_read console_view"));
        assert_eq!(entry(&view, 1).visibility, Visibility::Display);
        let outcome = view.select("dup", |key| state.on_select(key)).unwrap();
        assert_eq!(state.active_key, "dup");
        assert!(outcome.open_url.is_none());

        // first occurrence hidden: the visible later one is not reached
        let view = sidenav().project(&tree, &props("user", "console_view"));
        assert_eq!(submenu(&view).children[0].visibility, Visibility::Hide);
        assert_eq!(entry(&view, 1).visibility, Visibility::Display);
        let mut called = false;
        assert!(view.select("dup", |_| called = true).is_none());
        assert!(!called);
    }

    #[test]
    fn sign_out_requests_dialog() {
        let view = sidenav().project(&tree(), &props("user", ""));
        let mut state = ConsoleState::default();
        view.request_sign_out(|open| state.set_sign_out_modal_open(open));
        assert!(state.sign_out_modal_open);
    }

    #[test]
    fn view_serializes_with_kind_tags() {
        let view = sidenav().project(&tree(), &props("admin", ""));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["entries"][0]["kind"], "submenu");
        assert_eq!(json["entries"][1]["kind"], "entry");
        assert_eq!(json["entries"][1]["visibility"], "display");
        assert_eq!(json["entries"][0]["visibility"], "hide");
    }
}
