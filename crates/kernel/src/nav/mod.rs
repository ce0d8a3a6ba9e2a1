//! Side navigation for the console.
//!
//! The navigation tree comes from config and provides:
//! - Submenus and selectable entries with role/scope visibility rules
//! - Per-render visibility resolution (see [`visibility`])
//! - External-link targets resolved against the organisation base URL
//! - A projected view used by the theme and the JSON API

mod error;
mod icon;
mod link;
mod loader;
mod projection;
mod types;
pub mod visibility;

pub use error::NavError;
pub use icon::{FALLBACK_ICON_CLASS, Icon, IconResolver};
pub use link::{CONSOLE_TARGET, ExternalLinkResolver, NEW_BROWSING_CONTEXT};
pub use loader::load_navigation;
pub use projection::{
    ConsoleState, EntryView, NavEntryView, SelectionOutcome, SideNav, SideNavProps, SideNavView,
    SubmenuView, request_sign_out,
};
pub use types::{
    ItemKind, LeafItem, MenuItem, NavigationItem, NavigationTree, Visibility, VisibilityRules,
};
pub use visibility::{VisibilityResolver, resolve};
