//! Theme engine with Tera templates.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::nav::{SideNavView, Visibility};

/// Template name of the side navigation.
pub const SIDENAV_TEMPLATE: &str = "sidenav.html";

const SIDENAV_SOURCE: &str = include_str!("../templates/sidenav.html");

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with the built-in templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(SIDENAV_TEMPLATE, SIDENAV_SOURCE)
            .context("failed to parse side navigation template")?;

        // Register custom filters
        Self::register_filters(&mut tera);

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), "loaded templates");

        Ok(Self { tera })
    }

    /// Register custom Tera filters.
    fn register_filters(tera: &mut Tera) {
        // Visibility ("display" / "hide") to a CSS display value
        tera.register_filter(
            "display_css",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let visibility: Visibility = tera::from_value(value.clone())
                    .map_err(|e| tera::Error::msg(format!("display_css: {e}")))?;
                Ok(tera::Value::String(visibility.as_css().to_string()))
            },
        );
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Render the side navigation. `logo_html` is inserted unescaped.
    pub fn render_sidenav(&self, view: &SideNavView, logo_html: &str) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("nav", view);
        context.insert("logo", logo_html);

        self.tera
            .render(SIDENAV_TEMPLATE, &context)
            .context("failed to render side navigation")
    }
}
