//! # HTTP Routes
//!
//! Router assembly for the KnightShop API.
//!
//! ```text
//! GET  /                  health probe
//! GET  /api/menu          full menu listing
//! GET  /api/menu/{id}     single menu item
//! POST /api/orders        validate + price an order
//! POST /api/log/error     client error log sink
//! *                       JSON 404 (catch-all)
//! ```

mod logs;
mod menu;
mod orders;

use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/api/menu", get(menu::list_menu))
        .route("/api/menu/{id}", get(menu::get_menu_item))
        .route("/api/orders", post(orders::place_order))
        .route("/api/log/error", post(logs::log_client_error))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Basic health check route.
async fn health_handler() -> impl IntoResponse {
    "Backend service is running."
}

/// Catch-all for undefined routes; responds with the same JSON error shape
/// as every other failure.
async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::route_not_found(method.as_str(), uri.path())
}
