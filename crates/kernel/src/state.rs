//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::access::{GrantedScopeMatcher, RolePolicy};
use crate::config::Config;
use crate::nav::{
    ExternalLinkResolver, NavigationTree, SideNav, SideNavProps, SideNavView, VisibilityResolver,
    load_navigation,
};
use crate::theme::ThemeEngine;

/// Side-nav projector with the configured matchers.
pub type ConsoleSideNav = SideNav<RolePolicy, GrantedScopeMatcher>;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Navigation tree; immutable for the life of the process.
    tree: NavigationTree,

    sidenav: ConsoleSideNav,

    theme: ThemeEngine,

    /// Pre-rendered logo markup for the side-nav header.
    logo_html: String,
}

impl AppState {
    /// Load the navigation tree named in `config` and build the state.
    pub fn new(config: &Config) -> Result<Self> {
        let tree = load_navigation(&config.nav_data_path).with_context(|| {
            format!(
                "failed to load navigation from {}",
                config.nav_data_path.display()
            )
        })?;

        info!(
            path = %config.nav_data_path.display(),
            items = tree.len(),
            "Navigation tree loaded"
        );

        Self::with_tree(config, tree)
    }

    /// Build the state around an already loaded tree.
    pub fn with_tree(config: &Config, tree: NavigationTree) -> Result<Self> {
        let roles = RolePolicy::new(config.show_roles.clone(), config.hide_roles.clone());
        let sidenav = SideNav::new(
            VisibilityResolver::new(roles, GrantedScopeMatcher),
            ExternalLinkResolver::new(config.base_organization_url.clone()),
        );
        let policy = sidenav.resolver().roles();
        info!(
            show_roles = policy.show_roles().len(),
            hide_roles = policy.hide_roles().len(),
            base_url = %sidenav.links().base_organization_url(),
            "Side navigation policy configured"
        );

        let theme = ThemeEngine::new().context("failed to initialize theme engine")?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                tree,
                sidenav,
                theme,
                logo_html: config.logo_html.clone(),
            }),
        })
    }

    pub fn tree(&self) -> &NavigationTree {
        &self.inner.tree
    }

    pub fn sidenav(&self) -> &ConsoleSideNav {
        &self.inner.sidenav
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    pub fn logo_html(&self) -> &str {
        &self.inner.logo_html
    }

    /// Project the navigation tree for one request.
    pub fn project(&self, props: &SideNavProps) -> SideNavView {
        self.inner.sidenav.project(&self.inner.tree, props)
    }
}
