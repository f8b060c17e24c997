//! # Checkout Error Type
//!
//! Unified error type for the checkout API surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow at Checkout                             │
//! │                                                                     │
//! │  place_order(...)                                                   │
//! │       │                                                             │
//! │       ├── bad input ──────── ValidationError ──┐                    │
//! │       ├── unknown coupon ─── CouponError ──────┼──► CheckoutError   │
//! │       ├── store failure ──── Store variant ────┤    { code,         │
//! │       └── gateway failure ── PaymentProvider ──┘      message }     │
//! │                                                                     │
//! │  The API layer serializes code + message; the caller switches on    │
//! │  the machine-readable code.                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No automatic retries: pricing is deterministic, and the one
//! side-effecting step (the order write) is a single best-effort write.

use serde::Serialize;
use thiserror::Error;

use vastra_core::{CoreError, CouponError, ValidationError};

// =============================================================================
// Error Codes
// =============================================================================

/// Machine-readable error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (unknown order, product, coupon)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Coupon rejected (inactive, expired, below minimum)
    CouponRejected,

    /// Backing store operation failed
    StoreError,

    /// Payment provider call failed
    PaymentError,
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Error returned from checkout operations.
///
/// Serialized for the API layer as `{ "code": ..., "message": ... }`.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct CheckoutError {
    /// Machine-readable code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

impl CheckoutError {
    /// Creates a new checkout error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CheckoutError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CheckoutError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CheckoutError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a store error.
    pub fn store(message: impl Into<String>) -> Self {
        CheckoutError::new(ErrorCode::StoreError, message)
    }

    /// Creates a payment provider error.
    pub fn payment(message: impl Into<String>) -> Self {
        CheckoutError::new(ErrorCode::PaymentError, message)
    }
}

/// Converts core domain errors to checkout errors.
impl From<CoreError> for CheckoutError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => CheckoutError::not_found("Product", &id),
            CoreError::VariantNotFound { product_id, variant } => CheckoutError::not_found(
                "Variant",
                &format!("{} on product {}", variant, product_id),
            ),
            CoreError::Validation(e) => CheckoutError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (pre-pricing input checks).
impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::validation(err.to_string())
    }
}

/// Converts coupon rejections to checkout errors.
impl From<CouponError> for CheckoutError {
    fn from(err: CouponError) -> Self {
        let code = match err {
            CouponError::NotFound => ErrorCode::NotFound,
            _ => ErrorCode::CouponRejected,
        };
        CheckoutError::new(code, err.to_string())
    }
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vastra_core::Money;

    #[test]
    fn test_display() {
        let err = CheckoutError::not_found("Order", "o-123");
        assert_eq!(err.to_string(), "[NotFound] Order not found: o-123");
    }

    #[test]
    fn test_coupon_error_codes() {
        let err: CheckoutError = CouponError::NotFound.into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: CheckoutError = CouponError::Inactive.into();
        assert_eq!(err.code, ErrorCode::CouponRejected);

        let err: CheckoutError = CouponError::BelowMinimum {
            required: Money::from_rupees(500),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CouponRejected);
        assert!(err.message.contains("₹500"));
    }

    #[test]
    fn test_serializes_code_and_message() {
        let err = CheckoutError::validation("quantity must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "quantity must be positive");
    }
}
