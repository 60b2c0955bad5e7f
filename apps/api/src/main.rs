//! # KnightShop API
//!
//! REST/JSON server for the KnightShop cafe.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        KnightShop API Server                            │
//! │                                                                         │
//! │  React SPA ───► HTTP (3001) ───► axum handlers ───► knight-core        │
//! │                                       │              (pure pricing)     │
//! │                                       ▼                                 │
//! │                                 in-memory catalog                       │
//! │                                 (loaded once at boot)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod menu;
mod routes;
mod state;

use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, Method};
use knight_core::pricing::PricingEngine;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (RUST_LOG wins, default info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting KnightShop API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        tax_rate_bps = config.tax_rate_bps,
        "Configuration loaded"
    );

    // Build the injected, read-only pricing engine
    let catalog = menu::seed_catalog();
    info!(items = catalog.len(), "Catalog loaded");
    let engine = PricingEngine::new(catalog, config.tax_rate());

    // Create shared state
    let state = AppState::new(engine);

    // CORS: the SPA is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = routes::router(state).layer(cors);

    // Bind and serve
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Backend server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
