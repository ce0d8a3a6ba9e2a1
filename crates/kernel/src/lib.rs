//! Console side navigation kernel.
//!
//! Role/scope-aware visibility over a declarative navigation tree, projected
//! into a renderable side-nav view. This library exposes the internals for
//! integration testing; the `sidenav` binary serves the navigation over HTTP.

pub mod access;
pub mod config;
pub mod error;
pub mod nav;
pub mod routes;
pub mod state;
pub mod theme;

pub use config::Config;
pub use state::AppState;
