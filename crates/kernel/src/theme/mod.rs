//! Theme engine and template rendering.
//!
//! Provides Tera-based rendering of the side navigation view.

mod engine;

pub use engine::{SIDENAV_TEMPLATE, ThemeEngine};
