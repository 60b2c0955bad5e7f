//! # Pricing Module
//!
//! The Price Validator and Total Calculator.
//!
//! ## Computation Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Pricing Path                                   │
//! │                                                                         │
//! │  Caller (HTTP handler / UI layer)                                       │
//! │       │  raw, possibly attacker- or bug-supplied item data              │
//! │       ▼                                                                 │
//! │  ┌──────────────────┐    typed failure    ┌──────────────────────────┐  │
//! │  │  Price Validator │────────────────────►│ PricingError             │  │
//! │  │  validate()      │                     │  InvalidNumericInput     │  │
//! │  └────────┬─────────┘                     │  NegativeValue           │  │
//! │           │ ValidatedLineItem             │  ProductNotFound         │  │
//! │           ▼                               │  CalculationOverflow     │  │
//! │  ┌──────────────────┐                     └──────────────────────────┘  │
//! │  │ Total Calculator │                                                   │
//! │  │ compute_total()  │  checked integer-cent folding                     │
//! │  └────────┬─────────┘                                                   │
//! │           │ OrderTotal { subtotal, tax, total }                         │
//! │           ▼                                                             │
//! │  Caller renders / responds                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two inbound forms exist (the exact wire format is the collaborator's
//! concern, not this module's):
//! - `{unitPrice, quantity}` pairs, catalog-free: [`validate`] + [`compute_total`]
//!   (or the [`price_cart`] convenience wrapper)
//! - `{productId, quantity}` pairs where the catalog supplies the
//!   authoritative unit price: [`PricingEngine::price_order`]
//!
//! Everything here is pure, stateless and idempotent: no operation suspends,
//! blocks on I/O, or shares mutable state.

use serde_json::Value;

use crate::catalog::PriceCatalog;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{OrderTotal, PricedLine, PricedOrder, RawLineItem, TaxRate, ValidatedLineItem};

// =============================================================================
// Field Coercion
// =============================================================================

/// The explicit, single coercion step from an untyped wire value to f64.
///
/// Accepts a JSON number or a numeric-looking string ("10.99"). Everything
/// else - booleans, objects, arrays, non-numeric strings - is None. Note
/// that `"NaN"` parses to an f64 NaN here; the finiteness check in the
/// validators catches it.
fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Extracts a non-empty product id from a raw item.
fn field_product_id(raw: &RawLineItem) -> PricingResult<String> {
    match raw.product_id.as_ref().and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
        _ => Err(PricingError::InvalidNumericInput {
            field: "productId".to_string(),
        }),
    }
}

/// Coerces and range-checks the unit price field.
fn field_unit_price(raw: &RawLineItem) -> PricingResult<Money> {
    let price = raw
        .unit_price
        .as_ref()
        .and_then(coerce_numeric)
        .ok_or_else(|| PricingError::InvalidNumericInput {
            field: "unitPrice".to_string(),
        })?;

    if !price.is_finite() {
        return Err(PricingError::InvalidNumericInput {
            field: "unitPrice".to_string(),
        });
    }
    if price < 0.0 {
        return Err(PricingError::NegativeValue {
            field: "unitPrice".to_string(),
        });
    }

    Money::from_unit_price(price)
}

/// Coerces and range-checks the quantity field.
///
/// Quantities are whole units: a fractional or zero quantity does not
/// describe a line item, so both are `InvalidNumericInput`. A negative
/// quantity is a sign-policy rejection, `NegativeValue`.
fn field_quantity(raw: &RawLineItem) -> PricingResult<i64> {
    let qty = raw
        .quantity
        .as_ref()
        .and_then(coerce_numeric)
        .ok_or_else(|| PricingError::InvalidNumericInput {
            field: "quantity".to_string(),
        })?;

    if !qty.is_finite() {
        return Err(PricingError::InvalidNumericInput {
            field: "quantity".to_string(),
        });
    }
    if qty < 0.0 {
        return Err(PricingError::NegativeValue {
            field: "quantity".to_string(),
        });
    }
    if qty.fract() != 0.0 || qty == 0.0 || qty > i64::MAX as f64 {
        return Err(PricingError::InvalidNumericInput {
            field: "quantity".to_string(),
        });
    }

    Ok(qty as i64)
}

// =============================================================================
// Price Validator
// =============================================================================

/// Validates a raw line item into a [`ValidatedLineItem`].
///
/// ## Contract
/// - `productId` must be a non-empty string
/// - `unitPrice` and `quantity` must each coerce to a finite number
///   (numeric literal or numeric-looking string)
/// - `unitPrice >= 0`, `quantity > 0` and whole
///
/// ## Policy
/// Negative values are rejected outright ([`PricingError::NegativeValue`]),
/// not clamped to a zero total. Unknown or malformed shapes are
/// [`PricingError::InvalidNumericInput`], never silently coerced to zero.
///
/// No side effects beyond the returned result; no shared state is touched.
///
/// ## Example
/// ```rust
/// use knight_core::pricing::validate;
/// use knight_core::types::RawLineItem;
/// use serde_json::json;
///
/// let raw: RawLineItem = serde_json::from_value(
///     json!({ "productId": "prod_123", "unitPrice": "10.99", "quantity": 3 }),
/// ).unwrap();
///
/// let item = validate(&raw).unwrap();
/// assert_eq!(item.unit_price().cents(), 1099);
/// assert_eq!(item.quantity(), 3);
/// ```
pub fn validate(raw: &RawLineItem) -> PricingResult<ValidatedLineItem> {
    let product_id = field_product_id(raw)?;
    let unit_price = field_unit_price(raw)?;
    let quantity = field_quantity(raw)?;

    Ok(ValidatedLineItem::new_unchecked(
        product_id, unit_price, quantity,
    ))
}

// =============================================================================
// Total Calculator
// =============================================================================

/// Folds validated line items into monetary totals.
///
/// ## Algorithm
/// Unit prices are already rounded to cents at validation time (round per
/// unit, then multiply - this matches price-catalog cents exactly instead
/// of compounding float error across many units). Accumulation is checked
/// i64 arithmetic; on overflow the result is
/// [`PricingError::CalculationOverflow`] rather than a wrap.
///
/// An empty sequence yields the all-zero total - not an error.
///
/// ## Example
/// ```rust
/// use knight_core::pricing::compute_total;
/// use knight_core::types::TaxRate;
///
/// let totals = compute_total(&[], TaxRate::from_bps(650)).unwrap();
/// assert_eq!(totals.total_cents, 0);
/// ```
pub fn compute_total(
    items: &[ValidatedLineItem],
    tax_rate: TaxRate,
) -> PricingResult<OrderTotal> {
    let mut subtotal = Money::zero();

    for item in items {
        let line = item
            .unit_price()
            .checked_mul_quantity(item.quantity())
            .ok_or(PricingError::CalculationOverflow)?;
        subtotal = subtotal
            .checked_add(line)
            .ok_or(PricingError::CalculationOverflow)?;
    }

    let tax = subtotal.calculate_tax(tax_rate);
    let total = subtotal
        .checked_add(tax)
        .ok_or(PricingError::CalculationOverflow)?;

    Ok(OrderTotal {
        subtotal_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        total_cents: total.cents(),
    })
}

/// Catalog-free pricing of raw `{unitPrice, quantity}` items.
///
/// The client-side path: validate every raw item, then total. The first
/// invalid item aborts the whole computation - a cart containing garbage
/// has no meaningful total.
pub fn price_cart(items: &[RawLineItem], tax_rate: TaxRate) -> PricingResult<OrderTotal> {
    let validated = items
        .iter()
        .map(validate)
        .collect::<PricingResult<Vec<_>>>()?;
    compute_total(&validated, tax_rate)
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Server-side pricing: catalog lookups plus total computation.
///
/// Owns the injected read-only [`PriceCatalog`] and the configured
/// [`TaxRate`]. Constructed once at process start; safe to share across
/// concurrent requests because nothing here mutates.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: PriceCatalog,
    tax_rate: TaxRate,
}

impl PricingEngine {
    /// Creates an engine over a catalog with a fixed tax rate.
    pub fn new(catalog: PriceCatalog, tax_rate: TaxRate) -> Self {
        PricingEngine { catalog, tax_rate }
    }

    /// The catalog this engine prices against.
    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Prices an order of `{productId, quantity}` lines.
    ///
    /// The catalog supplies the authoritative unit price for every line; a
    /// client-supplied `unitPrice` field is ignored. Each line snapshots the
    /// product name and unit price at pricing time.
    ///
    /// ## Errors
    /// - [`PricingError::InvalidNumericInput`] for a missing/empty product
    ///   id or an unusable quantity
    /// - [`PricingError::NegativeValue`] for a negative quantity
    /// - [`PricingError::ProductNotFound`] when an id is not in the catalog
    /// - [`PricingError::CalculationOverflow`] if totals leave i64 range
    pub fn price_order(&self, lines: &[RawLineItem]) -> PricingResult<PricedOrder> {
        let mut validated = Vec::with_capacity(lines.len());
        let mut priced = Vec::with_capacity(lines.len());

        for raw in lines {
            let product_id = field_product_id(raw)?;
            let quantity = field_quantity(raw)?;

            let entry = self
                .catalog
                .get(&product_id)
                .ok_or_else(|| PricingError::ProductNotFound(product_id.clone()))?;

            let line_total = entry
                .price()
                .checked_mul_quantity(quantity)
                .ok_or(PricingError::CalculationOverflow)?;

            priced.push(PricedLine {
                product_id: product_id.clone(),
                name: entry.name.clone(),
                unit_price_cents: entry.price_cents,
                quantity,
                line_total_cents: line_total.cents(),
            });
            validated.push(ValidatedLineItem::new_unchecked(
                product_id,
                entry.price(),
                quantity,
            ));
        }

        let totals = compute_total(&validated, self.tax_rate)?;
        Ok(PricedOrder {
            lines: priced,
            totals,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawLineItem {
        serde_json::from_value(value).unwrap()
    }

    fn test_engine() -> PricingEngine {
        let catalog = PriceCatalog::from_items(vec![
            CatalogItem {
                id: "prod_123".to_string(),
                name: "Cold Brew".to_string(),
                description: "Slow-steeped overnight".to_string(),
                price_cents: 1099,
            },
            CatalogItem {
                id: "prod_espresso".to_string(),
                name: "Espresso".to_string(),
                description: "Double shot".to_string(),
                price_cents: 275,
            },
        ]);
        PricingEngine::new(catalog, TaxRate::from_bps(650))
    }

    // -------------------------------------------------------------------------
    // Price Validator
    // -------------------------------------------------------------------------

    #[test]
    fn test_validate_accepts_numbers_and_numeric_strings() {
        let item = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 10.99, "quantity": 3 }),
        ))
        .unwrap();
        assert_eq!(item.product_id(), "p1");
        assert_eq!(item.unit_price().cents(), 1099);
        assert_eq!(item.quantity(), 3);

        let item = validate(&raw(
            json!({ "productId": "p1", "unitPrice": "10.99", "quantity": "3" }),
        ))
        .unwrap();
        assert_eq!(item.unit_price().cents(), 1099);
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn test_validate_rejects_empty_product_id() {
        let err = validate(&raw(
            json!({ "productId": "", "unitPrice": 5, "quantity": 1 }),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidNumericInput {
                field: "productId".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_non_numeric_price() {
        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": "abc", "quantity": 2 }),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidNumericInput {
                field: "unitPrice".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let err = validate(&raw(json!({ "productId": "p1", "quantity": 2 }))).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidNumericInput {
                field: "unitPrice".to_string()
            }
        );

        let err = validate(&raw(json!({ "productId": "p1", "unitPrice": 5 }))).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidNumericInput {
                field: "quantity".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_nan_after_coercion() {
        // "NaN" parses to an f64 NaN; the finiteness check must catch it
        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": "NaN", "quantity": 1 }),
        ))
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidNumericInput { .. }));

        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 5, "quantity": "inf" }),
        ))
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidNumericInput { .. }));
    }

    #[test]
    fn test_validate_rejects_malformed_shapes() {
        // Booleans, arrays, objects: never silently coerced to zero
        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": true, "quantity": 1 }),
        ))
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidNumericInput { .. }));

        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 5, "quantity": [2] }),
        ))
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidNumericInput { .. }));
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": -1.50, "quantity": 1 }),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::NegativeValue {
                field: "unitPrice".to_string()
            }
        );

        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 5, "quantity": -2 }),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::NegativeValue {
                field: "quantity".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_zero_and_fractional_quantity() {
        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 5, "quantity": 0 }),
        ))
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidNumericInput { .. }));

        let err = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 5, "quantity": 1.5 }),
        ))
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidNumericInput { .. }));
    }

    #[test]
    fn test_validate_allows_free_items() {
        let item = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 0, "quantity": 2 }),
        ))
        .unwrap();
        assert!(item.unit_price().is_zero());
    }

    // -------------------------------------------------------------------------
    // Total Calculator
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_item_subtotal_matches_rounding_rule() {
        // subtotal == round(unitPrice*100) * quantity
        let item = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 10.99, "quantity": 3 }),
        ))
        .unwrap();
        let totals = compute_total(&[item], TaxRate::zero()).unwrap();
        assert_eq!(totals.subtotal_cents, 3297);
        assert_eq!(totals.total_cents, 3297);
    }

    #[test]
    fn test_empty_sequence_is_zero_not_error() {
        let totals = compute_total(&[], TaxRate::from_bps(650)).unwrap();
        assert_eq!(totals, OrderTotal::ZERO);
    }

    #[test]
    fn test_tax_on_reference_subtotal() {
        // subtotal $100.00 at 6.5% → tax $6.50, total $106.50
        let item = validate(&raw(
            json!({ "productId": "p1", "unitPrice": 100.00, "quantity": 1 }),
        ))
        .unwrap();
        let totals = compute_total(&[item], TaxRate::from_bps(650)).unwrap();
        assert_eq!(totals.subtotal_cents, 10000);
        assert_eq!(totals.tax_cents, 650);
        assert_eq!(totals.total_cents, 10650);
    }

    #[test]
    fn test_compute_total_is_idempotent() {
        let items = vec![
            validate(&raw(
                json!({ "productId": "a", "unitPrice": 2.75, "quantity": 2 }),
            ))
            .unwrap(),
            validate(&raw(
                json!({ "productId": "b", "unitPrice": 4.25, "quantity": 1 }),
            ))
            .unwrap(),
        ];
        let rate = TaxRate::from_bps(650);
        let first = compute_total(&items, rate).unwrap();
        let second = compute_total(&items, rate).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_total_overflow_is_typed() {
        let item = ValidatedLineItem::new_unchecked(
            "p1".to_string(),
            Money::from_cents(i64::MAX),
            2,
        );
        assert_eq!(
            compute_total(&[item], TaxRate::zero()),
            Err(PricingError::CalculationOverflow)
        );
    }

    #[test]
    fn test_price_cart_aborts_on_first_invalid_item() {
        let items = vec![
            raw(json!({ "productId": "a", "unitPrice": 2.75, "quantity": 2 })),
            raw(json!({ "productId": "b", "unitPrice": "abc", "quantity": 1 })),
        ];
        assert!(matches!(
            price_cart(&items, TaxRate::zero()),
            Err(PricingError::InvalidNumericInput { .. })
        ));
    }

    // -------------------------------------------------------------------------
    // Pricing Engine (server-side path)
    // -------------------------------------------------------------------------

    #[test]
    fn test_price_order_uses_catalog_price() {
        // prod_123 at catalog price 10.99, quantity 3 → 3297 cents
        let engine = test_engine();
        let order = engine
            .price_order(&[raw(json!({ "productId": "prod_123", "quantity": 3 }))])
            .unwrap();

        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].name, "Cold Brew");
        assert_eq!(order.lines[0].unit_price_cents, 1099);
        assert_eq!(order.lines[0].line_total_cents, 3297);
        assert_eq!(order.totals.subtotal_cents, 3297);
        // 3297 × 6.5% = 214.305 → 214
        assert_eq!(order.totals.tax_cents, 214);
        assert_eq!(order.totals.total_cents, 3511);
    }

    #[test]
    fn test_price_order_ignores_client_supplied_price() {
        // The catalog is authoritative; a spoofed unitPrice changes nothing
        let engine = test_engine();
        let order = engine
            .price_order(&[raw(
                json!({ "productId": "prod_espresso", "unitPrice": 0.01, "quantity": 1 }),
            )])
            .unwrap();
        assert_eq!(order.totals.subtotal_cents, 275);
    }

    #[test]
    fn test_price_order_unknown_product() {
        let engine = test_engine();
        let err = engine
            .price_order(&[raw(json!({ "productId": "prod_999", "quantity": 1 }))])
            .unwrap_err();
        assert_eq!(err, PricingError::ProductNotFound("prod_999".to_string()));
    }

    #[test]
    fn test_price_order_empty_is_zero() {
        let engine = test_engine();
        let order = engine.price_order(&[]).unwrap();
        assert!(order.lines.is_empty());
        assert_eq!(order.totals, OrderTotal::ZERO);
    }

    #[test]
    fn test_price_order_multiple_lines() {
        let engine = test_engine();
        let order = engine
            .price_order(&[
                raw(json!({ "productId": "prod_espresso", "quantity": 2 })),
                raw(json!({ "productId": "prod_123", "quantity": "1" })),
            ])
            .unwrap();

        // 2 × 275 + 1099 = 1649
        assert_eq!(order.totals.subtotal_cents, 1649);
        assert_eq!(
            order.lines.iter().map(|l| l.line_total_cents).sum::<i64>(),
            order.totals.subtotal_cents
        );
    }

    #[test]
    fn test_price_order_rejects_bad_quantity() {
        let engine = test_engine();
        assert!(matches!(
            engine
                .price_order(&[raw(json!({ "productId": "prod_123", "quantity": -1 }))])
                .unwrap_err(),
            PricingError::NegativeValue { .. }
        ));
        assert!(matches!(
            engine
                .price_order(&[raw(json!({ "productId": "prod_123" }))])
                .unwrap_err(),
            PricingError::InvalidNumericInput { .. }
        ));
    }
}
