//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in knightshop-api                            │
//! │                                                                         │
//! │  knight-core                    handler               HTTP client       │
//! │  ───────────                    ───────               ───────────       │
//! │                                                                         │
//! │  PricingError ──────From──────► ApiError ──IntoResponse──► status +     │
//! │   InvalidNumericInput → 400                                JSON body    │
//! │   NegativeValue       → 400                                             │
//! │   ProductNotFound     → 404     { "code": "PRODUCT_NOT_FOUND",          │
//! │   CalculationOverflow → 500       "message": "product not found: …" }   │
//! │                                                                         │
//! │  Server faults (5xx) are logged locally in full; the client only ever   │
//! │  sees a generic message - never stack or internal detail.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use knight_core::PricingError;
use serde::Serialize;
use tracing::error;

/// API error returned to HTTP clients.
///
/// ## Serialization
/// ```json
/// {
///   "code": "PRODUCT_NOT_FOUND",
///   "message": "product not found: prod_999"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidNumericInput,
    NegativeValue,
    ProductNotFound,
    NotFound,
    Internal,
}

impl ApiError {
    /// 404 for undefined routes, mirroring the catch-all of the original
    /// backend.
    pub fn route_not_found(method: &str, path: &str) -> Self {
        ApiError {
            code: ErrorCode::NotFound,
            message: format!("Cannot find {method} {path}"),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidNumericInput | ErrorCode::NegativeValue => StatusCode::BAD_REQUEST,
            ErrorCode::ProductNotFound | ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        match &err {
            PricingError::InvalidNumericInput { .. } => ApiError {
                code: ErrorCode::InvalidNumericInput,
                message: err.to_string(),
            },
            PricingError::NegativeValue { .. } => ApiError {
                code: ErrorCode::NegativeValue,
                message: err.to_string(),
            },
            PricingError::ProductNotFound(_) => ApiError {
                code: ErrorCode::ProductNotFound,
                message: err.to_string(),
            },
            // Server fault: log the detail, hand the client a generic message
            PricingError::CalculationOverflow => {
                error!(%err, "pricing computation failed");
                ApiError {
                    code: ErrorCode::Internal,
                    message: "Internal Server Error".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad: ApiError = PricingError::InvalidNumericInput {
            field: "unitPrice".to_string(),
        }
        .into();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let neg: ApiError = PricingError::NegativeValue {
            field: "quantity".to_string(),
        }
        .into();
        assert_eq!(neg.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = PricingError::ProductNotFound("x".to_string()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let overflow: ApiError = PricingError::CalculationOverflow.into();
        assert_eq!(overflow.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let overflow: ApiError = PricingError::CalculationOverflow.into();
        assert_eq!(overflow.message, "Internal Server Error");
    }

    #[test]
    fn test_error_codes_serialize_screaming() {
        let json = serde_json::to_value(ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, serde_json::json!("PRODUCT_NOT_FOUND"));
    }

    #[test]
    fn test_route_not_found_message() {
        let err = ApiError::route_not_found("GET", "/api/nope");
        assert_eq!(err.message, "Cannot find GET /api/nope");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
