//! Scope-based visibility.

use std::collections::HashSet;

use tracing::trace;

use crate::nav::{ItemKind, LeafItem, Visibility};

/// Decides visibility for items that enable the hide-by-scope rule.
pub trait ScopeMatcher {
    /// `child_items` is set for submenus, `required_scopes` for leaves.
    fn hide_based_on_scopes(
        &self,
        scope: &str,
        kind: ItemKind,
        child_items: Option<&[LeafItem]>,
        required_scopes: Option<&[String]>,
    ) -> Visibility;
}

/// Granted scopes parsed from an OAuth2-style space-separated scope string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet {
    scopes: HashSet<String>,
}

impl ScopeSet {
    pub fn parse(scope: &str) -> Self {
        Self {
            scopes: scope.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// True if `required` is non-empty and every entry is granted.
    pub fn grants_all(&self, required: &[String]) -> bool {
        !required.is_empty() && required.iter().all(|s| self.contains(s))
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

/// Shows a leaf when the user holds all of its declared scopes, and a submenu
/// when at least one of its children would be shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantedScopeMatcher;

impl GrantedScopeMatcher {
    fn leaf_visibility(granted: &ScopeSet, required: Option<&[String]>) -> Visibility {
        match required {
            Some(required) if granted.grants_all(required) => Visibility::Display,
            _ => Visibility::Hide,
        }
    }
}

impl ScopeMatcher for GrantedScopeMatcher {
    fn hide_based_on_scopes(
        &self,
        scope: &str,
        kind: ItemKind,
        child_items: Option<&[LeafItem]>,
        required_scopes: Option<&[String]>,
    ) -> Visibility {
        let granted = ScopeSet::parse(scope);

        let visibility = match kind {
            ItemKind::Item => Self::leaf_visibility(&granted, required_scopes),
            ItemKind::Menu => {
                let any_child = child_items.unwrap_or_default().iter().any(|child| {
                    Self::leaf_visibility(&granted, child.scopes.as_deref()).is_displayed()
                });
                if any_child {
                    Visibility::Display
                } else {
                    Visibility::Hide
                }
            }
        };

        trace!(kind = kind.as_str(), granted = granted.len(), ?visibility, "scope match");
        visibility
    }
}
