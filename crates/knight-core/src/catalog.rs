//! # Price Catalog
//!
//! The authoritative server-side mapping of product ids to canonical unit
//! prices.
//!
//! The catalog is built once at process start and injected into the pricing
//! engine as an explicitly owned, read-only value - never a process-wide
//! singleton. Because it is immutable after construction, concurrent reads
//! from simultaneous requests need no locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// A product on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Product identifier (e.g. "prod_espresso").
    pub id: String,

    /// Display name shown on the menu.
    pub name: String,

    /// Short menu description.
    pub description: String,

    /// Canonical unit price in cents.
    pub price_cents: i64,
}

impl CatalogItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Price Catalog
// =============================================================================

/// Read-only lookup table from product id to catalog item.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    items: HashMap<String, CatalogItem>,
}

impl PriceCatalog {
    /// Builds a catalog from a list of items.
    ///
    /// Later duplicates of an id replace earlier ones, matching a "last
    /// definition wins" seed file.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        PriceCatalog { items }
    }

    /// Looks up an item by product id.
    pub fn get(&self, product_id: &str) -> Option<&CatalogItem> {
        self.items.get(product_id)
    }

    /// Returns the canonical unit price for a product.
    ///
    /// ## Errors
    /// [`PricingError::ProductNotFound`] when the id is not in the catalog.
    pub fn price_of(&self, product_id: &str) -> PricingResult<Money> {
        self.items
            .get(product_id)
            .map(CatalogItem::price)
            .ok_or_else(|| PricingError::ProductNotFound(product_id.to_string()))
    }

    /// Returns all items sorted by id, for stable menu listings.
    pub fn items_sorted(&self) -> Vec<&CatalogItem> {
        let mut items: Vec<&CatalogItem> = self.items.values().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
