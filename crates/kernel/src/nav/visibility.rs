//! Visibility resolution for navigation entries.
//!
//! Rules are checked in a fixed order and the first one that applies wins:
//!
//! 1. `showBasedOnRole` and the role is in the allowed set: display
//! 2. `hideBasedOnRole` and the role is in the denied set: hide
//! 3. `hideBasedOnScope`: whatever the scope matcher decides
//! 4. otherwise: hide

use tracing::trace;

use crate::access::{RoleMatcher, ScopeMatcher};

use super::types::{ItemKind, LeafItem, MenuItem, NavigationItem, Visibility, VisibilityRules};

/// Resolve visibility for any navigation entry.
pub fn resolve<R, S>(
    role: &str,
    scope: &str,
    item: &NavigationItem,
    roles: &R,
    scopes: &S,
) -> Visibility
where
    R: RoleMatcher + ?Sized,
    S: ScopeMatcher + ?Sized,
{
    match item {
        NavigationItem::Menu(menu) => resolve_menu(role, scope, menu, roles, scopes),
        NavigationItem::Leaf(leaf) => resolve_leaf(role, scope, leaf, roles, scopes),
    }
}

/// Resolve visibility for a submenu container.
pub fn resolve_menu<R, S>(
    role: &str,
    scope: &str,
    menu: &MenuItem,
    roles: &R,
    scopes: &S,
) -> Visibility
where
    R: RoleMatcher + ?Sized,
    S: ScopeMatcher + ?Sized,
{
    let visibility = apply_rules(menu.rules, role, roles, || {
        scopes.hide_based_on_scopes(scope, ItemKind::Menu, Some(&menu.items), None)
    });
    trace!(event_key = %menu.event_key, role = %role, ?visibility, "resolved menu");
    visibility
}

/// Resolve visibility for a selectable entry.
pub fn resolve_leaf<R, S>(
    role: &str,
    scope: &str,
    leaf: &LeafItem,
    roles: &R,
    scopes: &S,
) -> Visibility
where
    R: RoleMatcher + ?Sized,
    S: ScopeMatcher + ?Sized,
{
    let visibility = apply_rules(leaf.rules, role, roles, || {
        scopes.hide_based_on_scopes(scope, ItemKind::Item, None, leaf.scopes.as_deref())
    });
    trace!(event_key = %leaf.event_key, role = %role, ?visibility, "resolved leaf");
    visibility
}

fn apply_rules<R, F>(rules: VisibilityRules, role: &str, roles: &R, by_scope: F) -> Visibility
where
    R: RoleMatcher + ?Sized,
    F: FnOnce() -> Visibility,
{
    if rules.show_based_on_role && roles.show_based_on_roles(role) {
        return Visibility::Display;
    }
    if rules.hide_based_on_role && roles.hide_based_on_roles(role) {
        return Visibility::Hide;
    }
    if rules.hide_based_on_scope {
        return by_scope();
    }
    Visibility::Hide
}

/// A role matcher and scope matcher bundled for repeated resolution.
#[derive(Debug, Clone, Default)]
pub struct VisibilityResolver<R, S> {
    roles: R,
    scopes: S,
}

impl<R: RoleMatcher, S: ScopeMatcher> VisibilityResolver<R, S> {
    pub fn new(roles: R, scopes: S) -> Self {
        Self { roles, scopes }
    }

    pub fn roles(&self) -> &R {
        &self.roles
    }

    pub fn resolve(&self, role: &str, scope: &str, item: &NavigationItem) -> Visibility {
        resolve(role, scope, item, &self.roles, &self.scopes)
    }

    pub fn resolve_menu(&self, role: &str, scope: &str, menu: &MenuItem) -> Visibility {
        resolve_menu(role, scope, menu, &self.roles, &self.scopes)
    }

    pub fn resolve_leaf(&self, role: &str, scope: &str, leaf: &LeafItem) -> Visibility {
        resolve_leaf(role, scope, leaf, &self.roles, &self.scopes)
    }
}
