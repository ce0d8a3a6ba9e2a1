//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use url::Url;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Organisation base URL used to build external links (required).
    pub base_organization_url: String,

    /// Path to the side navigation JSON/YAML (default: ./config/sidenav.json).
    pub nav_data_path: PathBuf,

    /// Roles that force `showBasedOnRole` entries to display (default: "admin").
    pub show_roles: Vec<String>,

    /// Roles that force `hideBasedOnRole` entries to hide (default: none).
    pub hide_roles: Vec<String>,

    /// Pre-rendered logo markup placed in the side-nav header.
    pub logo_html: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

/// Logo used when `SIDENAV_LOGO_HTML` is not set.
pub const DEFAULT_LOGO_HTML: &str = r#"<span class="side-nav__brand">Console</span>"#;

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let base_organization_url = env::var("BASE_ORGANIZATION_URL")
            .context("BASE_ORGANIZATION_URL environment variable is required")?;
        validate_base_url(&base_organization_url)?;

        let nav_data_path = env::var("NAV_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./config/sidenav.json"));

        let show_roles = env::var("NAV_SHOW_ROLES")
            .map(|v| split_list(&v))
            .unwrap_or_else(|_| vec!["admin".to_string()]);

        let hide_roles = env::var("NAV_HIDE_ROLES")
            .map(|v| split_list(&v))
            .unwrap_or_default();

        let logo_html =
            env::var("SIDENAV_LOGO_HTML").unwrap_or_else(|_| DEFAULT_LOGO_HTML.to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            port,
            base_organization_url,
            nav_data_path,
            show_roles,
            hide_roles,
            logo_html,
            cors_allowed_origins,
        })
    }
}

/// The base URL must be absolute http(s); links are built by appending to it.
fn validate_base_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .with_context(|| format!("BASE_ORGANIZATION_URL '{raw}' is not a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "BASE_ORGANIZATION_URL must use http or https, got '{}'",
            url.scheme()
        );
    }
    Ok(())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
