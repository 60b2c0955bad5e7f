//! # knight-core: Pure Pricing Logic for KnightShop
//!
//! This crate is the **heart** of the KnightShop cafe backend. It contains
//! the order pricing and cart-total computation path as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KnightShop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React SPA)                         │   │
//! │  │        Menu UI ──► Cart UI ──► Checkout ──► Order posted        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 knightshop-api (axum handlers)                  │   │
//! │  │       GET /api/menu   POST /api/orders   POST /api/log/error    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ knight-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  pricing  │   │   │
//! │  │   │ LineItem  │  │   Money   │  │  Catalog  │  │ validate  │   │   │
//! │  │   │ OrderTotal│  │  TaxCalc  │  │  lookup   │  │  totals   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (line items, totals, tax rate)
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`catalog`] - The authoritative product id → unit price mapping
//! - [`pricing`] - Price Validator and Total Calculator
//! - [`error`] - The pricing error taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input =
//!    same output, recomputed per request, never cached
//! 2. **Integer Money**: All monetary arithmetic is integer cents (i64);
//!    decimal display values exist only at the boundary
//! 3. **Explicit Errors**: All failures are typed enum variants, never
//!    strings or panics; the caller maps them to HTTP status / UI message
//! 4. **Injected Catalog**: The price catalog is an owned, read-only value
//!    passed in at construction time, never a process-wide singleton
//!
//! ## Example Usage
//!
//! ```rust
//! use knight_core::catalog::{CatalogItem, PriceCatalog};
//! use knight_core::pricing::PricingEngine;
//! use knight_core::types::{RawLineItem, TaxRate};
//! use serde_json::json;
//!
//! let catalog = PriceCatalog::from_items(vec![CatalogItem {
//!     id: "prod_123".to_string(),
//!     name: "Cold Brew".to_string(),
//!     description: "Slow-steeped overnight".to_string(),
//!     price_cents: 1099,
//! }]);
//! let engine = PricingEngine::new(catalog, TaxRate::from_bps(650));
//!
//! let line: RawLineItem =
//!     serde_json::from_value(json!({ "productId": "prod_123", "quantity": 3 })).unwrap();
//! let order = engine.price_order(&[line]).unwrap();
//!
//! assert_eq!(order.totals.subtotal_cents, 3297); // $32.97
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use knight_core::Money` instead of
// `use knight_core::money::Money`

pub use catalog::{CatalogItem, PriceCatalog};
pub use error::{PricingError, PricingResult};
pub use money::Money;
pub use pricing::{compute_total, price_cart, validate, PricingEngine};
pub use types::*;
