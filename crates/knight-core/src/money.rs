//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The original cafe demo accumulated `price * quantity` in floats and    │
//! │  fixed the drift up with toFixed(2) at display time.                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Round each unit price to cents ONCE at the boundary, then all        │
//! │    arithmetic is exact i64 math. $10.99 × 3 = 3297 cents, always.       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use knight_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Or from a decimal unit price at the input boundary
//! let parsed = Money::from_unit_price(10.99).unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{PricingError, PricingResult};
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative intermediate values can exist (they are
///   rejected by validation before they ever reach a total)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type; conversion to
/// a decimal display form happens only at the outbound boundary via
/// [`Money::to_unit_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use knight_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal unit price into cents: `round(price * 100)`.
    ///
    /// This is the single input-boundary conversion. Rounding each unit price
    /// to cents *before* multiplying by quantity matches the catalog price
    /// exactly and avoids compounding float rounding error across many units.
    ///
    /// ## Errors
    /// - [`PricingError::InvalidNumericInput`] if the price is NaN/infinite
    /// - [`PricingError::CalculationOverflow`] if the cents value does not
    ///   fit in i64
    ///
    /// ## Example
    /// ```rust
    /// use knight_core::money::Money;
    ///
    /// assert_eq!(Money::from_unit_price(10.99).unwrap().cents(), 1099);
    /// assert_eq!(Money::from_unit_price(0.0).unwrap().cents(), 0);
    /// assert!(Money::from_unit_price(f64::NAN).is_err());
    /// ```
    pub fn from_unit_price(price: f64) -> PricingResult<Self> {
        if !price.is_finite() {
            return Err(PricingError::InvalidNumericInput {
                field: "unitPrice".to_string(),
            });
        }

        let cents = (price * 100.0).round();
        // i64::MAX as f64 rounds up, so >= catches the unrepresentable edge
        if cents.abs() >= i64::MAX as f64 {
            return Err(PricingError::CalculationOverflow);
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a decimal unit amount (cents / 100).
    ///
    /// For outbound display only. Internal arithmetic never touches floats.
    ///
    /// ## Example
    /// ```rust
    /// use knight_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3297).to_unit_value(), 32.97);
    /// ```
    #[inline]
    pub fn to_unit_value(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity, failing on i64 overflow.
    ///
    /// The Total Calculator uses this instead of the plain `*` operator so
    /// an absurd quantity surfaces as a typed error instead of a panic (or a
    /// silent wrap in release builds).
    ///
    /// ## Example
    /// ```rust
    /// use knight_core::money::Money;
    ///
    /// let unit = Money::from_cents(1099);
    /// assert_eq!(unit.checked_mul_quantity(3), Some(Money::from_cents(3297)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds another Money value, failing on i64 overflow.
    #[inline]
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Calculates tax on this amount, rounding half away from zero.
    ///
    /// ## Implementation
    /// Integer math in i128: `(cents * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5); i128 prevents
    /// intermediate overflow on large subtotals.
    ///
    /// ## Example
    /// ```rust
    /// use knight_core::money::Money;
    /// use knight_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// let rate = TaxRate::from_bps(650);       // 6.5%
    ///
    /// // $100.00 × 6.5% = $6.50
    /// assert_eq!(subtotal.calculate_tax(rate).cents(), 650);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and server logs. The frontend formats its own
/// display values from the decimal fields in API responses.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_unit_price_rounds_to_cents() {
        assert_eq!(Money::from_unit_price(10.99).unwrap().cents(), 1099);
        assert_eq!(Money::from_unit_price(2.5).unwrap().cents(), 250);
        // 0.1 is not exactly representable in binary float; rounding once at
        // the boundary still lands on exactly 10 cents
        assert_eq!(Money::from_unit_price(0.1).unwrap().cents(), 10);
        assert_eq!(Money::from_unit_price(0.0).unwrap().cents(), 0);
    }

    #[test]
    fn test_from_unit_price_rejects_non_finite() {
        assert!(matches!(
            Money::from_unit_price(f64::NAN),
            Err(PricingError::InvalidNumericInput { .. })
        ));
        assert!(matches!(
            Money::from_unit_price(f64::INFINITY),
            Err(PricingError::InvalidNumericInput { .. })
        ));
    }

    #[test]
    fn test_from_unit_price_rejects_unrepresentable() {
        assert!(matches!(
            Money::from_unit_price(1e30),
            Err(PricingError::CalculationOverflow)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_checked_mul_quantity() {
        let unit = Money::from_cents(1099);
        assert_eq!(unit.checked_mul_quantity(3).unwrap().cents(), 3297);
        assert!(Money::from_cents(i64::MAX).checked_mul_quantity(2).is_none());
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)).unwrap().cents(), 1500);
        assert!(Money::from_cents(i64::MAX)
            .checked_add(Money::from_cents(1))
            .is_none());
    }

    #[test]
    fn test_tax_calculation_reference_rate() {
        // $100.00 at 6.5% = $6.50 exactly
        let amount = Money::from_cents(10000);
        let rate = TaxRate::from_bps(650);
        assert_eq!(amount.calculate_tax(rate).cents(), 650);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $10.99 at 6.5% = $0.71435 → $0.71
        let amount = Money::from_cents(1099);
        let rate = TaxRate::from_bps(650);
        assert_eq!(amount.calculate_tax(rate).cents(), 71);

        // $10.00 at 8.25% = $0.825 → $0.83 (half rounds away from zero)
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(825);
        assert_eq!(amount.calculate_tax(rate).cents(), 83);
    }

    #[test]
    fn test_tax_on_zero_is_zero() {
        let rate = TaxRate::from_bps(650);
        assert_eq!(Money::zero().calculate_tax(rate).cents(), 0);
    }

    #[test]
    fn test_to_unit_value() {
        assert_eq!(Money::from_cents(3297).to_unit_value(), 32.97);
        assert_eq!(Money::from_cents(0).to_unit_value(), 0.0);
    }
}
