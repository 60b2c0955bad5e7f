//! # Domain Types
//!
//! Core domain types for the pricing computation.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Data Flow                               │
//! │                                                                         │
//! │  Wire (untrusted)          Validated                 Derived            │
//! │  ────────────────          ─────────                 ───────            │
//! │                                                                         │
//! │  RawLineItem  ──validate──► ValidatedLineItem ──fold──► OrderTotal     │
//! │  { productId,               { product_id,               { subtotal,    │
//! │    unitPrice?,                unit_price: Money,          tax,          │
//! │    quantity? }                quantity > 0 }              total }       │
//! │                                                                         │
//! │  Raw fields stay serde_json::Value so a malformed shape reaches the     │
//! │  validator (and becomes InvalidNumericInput) instead of bouncing off    │
//! │  deserialization.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 650 bps = 6.5%, the shop's configured sales tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a decimal fraction (0.065 = 6.5%).
    pub fn from_decimal(rate: f64) -> Self {
        TaxRate((rate * 10000.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Raw Line Item
// =============================================================================

/// One candidate line item exactly as the wire gave it to us.
///
/// Fields are optional `serde_json::Value` on purpose: the caller may be a
/// buggy frontend (the original demo shipped carts with `price: undefined`)
/// or an attacker, so nothing about the shape is trusted. The Price
/// Validator owns the single coercion step from these values to typed
/// numerics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineItem {
    /// Product identifier; must be a non-empty string to validate.
    #[serde(default)]
    pub product_id: Option<Value>,

    /// Unit price; number or numeric-looking string accepted.
    #[serde(default)]
    pub unit_price: Option<Value>,

    /// Quantity; number or numeric-looking string, whole units only.
    #[serde(default)]
    pub quantity: Option<Value>,
}

// =============================================================================
// Validated Line Item
// =============================================================================

/// A line item after successful validation.
///
/// ## Invariants (enforced by construction)
/// - `product_id` is non-empty
/// - `unit_price` is a finite, non-negative cents amount
/// - `quantity` is strictly positive
///
/// Fields are private so the only ways to obtain one are
/// [`crate::pricing::validate`] and a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedLineItem {
    product_id: String,
    unit_price: Money,
    quantity: i64,
}

impl ValidatedLineItem {
    /// Internal constructor; callers must have already established the
    /// invariants above.
    pub(crate) fn new_unchecked(product_id: String, unit_price: Money, quantity: i64) -> Self {
        debug_assert!(!product_id.is_empty());
        debug_assert!(!unit_price.is_negative());
        debug_assert!(quantity > 0);
        ValidatedLineItem {
            product_id,
            unit_price,
            quantity,
        }
    }

    /// The product identifier.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// The unit price in cents.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// The quantity (always > 0).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Order Total
// =============================================================================

/// Monetary totals for a cart or order.
///
/// Derived, immutable, recomputed on every request - never cached.
/// All fields are integer cents; decimal display values are produced at the
/// outbound boundary by dividing by 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotal {
    /// Sum of all line subtotals, before tax.
    pub subtotal_cents: i64,

    /// Tax on the subtotal.
    pub tax_cents: i64,

    /// Grand total (subtotal + tax).
    pub total_cents: i64,
}

impl OrderTotal {
    /// The all-zero total of an empty cart.
    pub const ZERO: OrderTotal = OrderTotal {
        subtotal_cents: 0,
        tax_cents: 0,
        total_cents: 0,
    };

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Priced Order
// =============================================================================

/// One priced line of an order response.
///
/// Uses the snapshot pattern: name and unit price are frozen at pricing time
/// so the response stays consistent even if the catalog changes later.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    /// Product id as found in the catalog.
    pub product_id: String,

    /// Product name at time of pricing (frozen).
    pub name: String,

    /// Unit price in cents at time of pricing (frozen).
    pub unit_price_cents: i64,

    /// Quantity ordered.
    pub quantity: i64,

    /// Line subtotal before tax (unit_price × quantity).
    pub line_total_cents: i64,
}

impl PricedLine {
    /// Returns the line subtotal as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// A fully priced order: per-line subtotals plus the cart totals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrder {
    pub lines: Vec<PricedLine>,
    pub totals: OrderTotal,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(650);
        assert_eq!(rate.bps(), 650);
        assert!((rate.percentage() - 6.5).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_decimal() {
        assert_eq!(TaxRate::from_decimal(0.065).bps(), 650);
        assert_eq!(TaxRate::from_decimal(0.0825).bps(), 825);
        assert!(TaxRate::from_decimal(0.0).is_zero());
    }

    #[test]
    fn test_raw_line_item_tolerates_odd_shapes() {
        // Shapes that would bounce off a strictly typed struct must still
        // deserialize; the validator decides what to do with them.
        let raw: RawLineItem =
            serde_json::from_value(json!({ "productId": 42, "quantity": true })).unwrap();
        assert!(raw.product_id.is_some());
        assert!(raw.unit_price.is_none());
        assert!(raw.quantity.is_some());

        let empty: RawLineItem = serde_json::from_value(json!({})).unwrap();
        assert!(empty.product_id.is_none());
    }

    #[test]
    fn test_order_total_accessors() {
        let totals = OrderTotal {
            subtotal_cents: 10000,
            tax_cents: 650,
            total_cents: 10650,
        };
        assert_eq!(totals.subtotal().cents(), 10000);
        assert_eq!(totals.tax().to_unit_value(), 6.5);
        assert_eq!(totals.total().to_unit_value(), 106.5);
    }

    #[test]
    fn test_order_total_zero() {
        assert_eq!(OrderTotal::ZERO.subtotal_cents, 0);
        assert_eq!(OrderTotal::ZERO.tax_cents, 0);
        assert_eq!(OrderTotal::ZERO.total_cents, 0);
    }
}
