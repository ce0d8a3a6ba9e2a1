//! Console side navigation server.
//!
//! Serves the rendered side navigation and its selection API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sidenav_kernel::{AppState, Config, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    info!("Starting side navigation server");

    // Load configuration from environment
    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        port = config.port,
        show_roles = ?config.show_roles,
        hide_roles = ?config.hide_roles,
        "Configuration loaded"
    );

    let state = AppState::new(&config).context("failed to initialize application state")?;

    let app = routes::build_router(state, &config.cors_allowed_origins);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
