//! Role allow/deny sets.

use std::collections::HashSet;

/// Decides role membership for the show-by-role and hide-by-role rules.
pub trait RoleMatcher {
    /// True if `role` is in the set that forces an item to display.
    fn show_based_on_roles(&self, role: &str) -> bool;

    /// True if `role` is in the set that forces an item to hide.
    fn hide_based_on_roles(&self, role: &str) -> bool;
}

/// Configured allow and deny sets. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct RolePolicy {
    show_roles: HashSet<String>,
    hide_roles: HashSet<String>,
}

impl RolePolicy {
    pub fn new<S, H>(show_roles: S, hide_roles: H) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        Self {
            show_roles: show_roles.into_iter().map(Into::into).collect(),
            hide_roles: hide_roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn show_roles(&self) -> &HashSet<String> {
        &self.show_roles
    }

    pub fn hide_roles(&self) -> &HashSet<String> {
        &self.hide_roles
    }
}

impl RoleMatcher for RolePolicy {
    fn show_based_on_roles(&self, role: &str) -> bool {
        self.show_roles.contains(role)
    }

    fn hide_based_on_roles(&self, role: &str) -> bool {
        self.hide_roles.contains(role)
    }
}
