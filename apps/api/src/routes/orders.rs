//! # Order Routes
//!
//! Order placement: validate the submitted lines, price them against the
//! authoritative catalog, and respond with the priced order.
//!
//! ## Request Flow
//! ```text
//! POST /api/orders { "items": [{ "productId": "prod_latte", "quantity": 2 }] }
//!        │
//!        ▼
//! PricingEngine::price_order      catalog lookup fills unit prices
//!        │
//!        ├── PricingError ──► ApiError ──► 400 / 404 / 500 JSON
//!        ▼
//! 201 Created { orderId, placedAt, lines, totals }
//! ```
//!
//! There is no persistence: the "order" exists only in the response. The id
//! and timestamp give the client something stable to show on a receipt.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use knight_core::types::{OrderTotal, PricedLine, RawLineItem};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Order submission body.
///
/// `items` defaults to empty: an empty cart prices to an all-zero total
/// rather than an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Vec<RawLineItem>,
}

/// Monetary totals at the outbound boundary: decimal display values derived
/// from the integer cents by dividing by 100, plus the exact cents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<OrderTotal> for TotalsResponse {
    fn from(totals: OrderTotal) -> Self {
        TotalsResponse {
            subtotal: totals.subtotal().to_unit_value(),
            tax: totals.tax().to_unit_value(),
            total: totals.total().to_unit_value(),
            subtotal_cents: totals.subtotal_cents,
            tax_cents: totals.tax_cents,
            total_cents: totals.total_cents,
        }
    }
}

/// A priced order as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<PricedLine>,
    pub totals: TotalsResponse,
}

/// `POST /api/orders` - price and acknowledge an order.
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let priced = state.engine.price_order(&request.items)?;

    let response = OrderResponse {
        order_id: Uuid::new_v4(),
        placed_at: Utc::now(),
        lines: priced.lines,
        totals: TotalsResponse::from(priced.totals),
    };

    info!(
        order_id = %response.order_id,
        lines = response.lines.len(),
        total_cents = response.totals.total_cents,
        "order priced"
    );

    Ok((StatusCode::CREATED, Json(response)))
}
