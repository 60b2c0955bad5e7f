//! # Menu Routes
//!
//! Read-only menu listing backed by the injected catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use knight_core::catalog::CatalogItem;
use knight_core::PricingError;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// A menu item as the frontend sees it.
///
/// `price` is the decimal display value (cents / 100, two fractional
/// digits); `priceCents` is the exact integer the pricing path uses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_cents: i64,
}

impl From<&CatalogItem> for MenuItemResponse {
    fn from(item: &CatalogItem) -> Self {
        MenuItemResponse {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price().to_unit_value(),
            price_cents: item.price_cents,
        }
    }
}

/// `GET /api/menu` - the full menu, sorted by product id.
pub async fn list_menu(State(state): State<Arc<AppState>>) -> Json<Vec<MenuItemResponse>> {
    let items: Vec<MenuItemResponse> = state
        .engine
        .catalog()
        .items_sorted()
        .into_iter()
        .map(MenuItemResponse::from)
        .collect();

    debug!(count = items.len(), "menu listed");
    Json(items)
}

/// `GET /api/menu/{id}` - a single menu item, 404 on a catalog miss.
pub async fn get_menu_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemResponse>, ApiError> {
    let item = state
        .engine
        .catalog()
        .get(&id)
        .ok_or_else(|| ApiError::from(PricingError::ProductNotFound(id.clone())))?;

    Ok(Json(MenuItemResponse::from(item)))
}
