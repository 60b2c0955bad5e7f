//! # Error Types
//!
//! The pricing error taxonomy for knight-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  knight-core errors (this file)                                         │
//! │  └── PricingError   - Validation and computation failures               │
//! │                                                                         │
//! │  knightshop-api errors (in app)                                         │
//! │  └── ApiError       - What the HTTP client sees (serialized)            │
//! │                                                                         │
//! │  Flow: PricingError ──► ApiError ──► HTTP status + JSON body            │
//! │                                                                         │
//! │  The core NEVER logs or formats user-facing messages itself; it         │
//! │  returns a structured value and the caller decides status / message.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, product id)
//! 3. Errors are enum variants, never strings
//! 4. Every variant is recoverable at the request boundary - none crash

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Failures from line item validation and total computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A field is absent, non-numeric, or NaN/infinite after coercion.
    ///
    /// ## When This Occurs
    /// - `unitPrice` or `quantity` missing from the payload
    /// - A value that is neither a number nor a numeric-looking string
    /// - A quantity with a fractional part (quantities are whole units)
    /// - An empty or missing product id
    ///
    /// Unknown/malformed item shapes land here too; they are never silently
    /// coerced to zero.
    #[error("invalid numeric input for {field}")]
    InvalidNumericInput { field: String },

    /// Coercion succeeded but the value must not be negative.
    ///
    /// Policy: negative prices and non-positive quantities are rejected
    /// outright rather than clamped to a zero total. A validated line item
    /// always has `unit_price >= 0` and `quantity > 0`.
    #[error("{field} must not be negative")]
    NegativeValue { field: String },

    /// The product id is not present in the price catalog (server side only).
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Accumulated cents exceeded the representable i64 range.
    ///
    /// Practically unreachable at cafe scale, but guarded so the integer
    /// width limit is an explicit error rather than a wrap or a panic.
    #[error("order total exceeds the representable amount")]
    CalculationOverflow,
}

impl PricingError {
    /// True when the failure is the caller's fault (maps to a 4xx class).
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, PricingError::CalculationOverflow)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PricingError::InvalidNumericInput {
            field: "unitPrice".to_string(),
        };
        assert_eq!(err.to_string(), "invalid numeric input for unitPrice");

        let err = PricingError::ProductNotFound("prod_999".to_string());
        assert_eq!(err.to_string(), "product not found: prod_999");
    }

    #[test]
    fn test_fault_classification() {
        assert!(PricingError::NegativeValue {
            field: "quantity".to_string()
        }
        .is_client_fault());
        assert!(PricingError::ProductNotFound("x".to_string()).is_client_fault());
        assert!(!PricingError::CalculationOverflow.is_client_fault());
    }
}
