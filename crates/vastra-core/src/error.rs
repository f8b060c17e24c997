//! # Error Types
//!
//! Domain-specific error types for vastra-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  vastra-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                       │
//! │  ├── ValidationError  - Input validation failures                   │
//! │  └── CouponError      - Coupon rejection reasons                    │
//! │                                                                     │
//! │  vastra-checkout errors (separate crate)                            │
//! │  └── CheckoutError    - What the API layer sees (serialized)        │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → CheckoutError → API caller     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, coupon code, etc.)
//! 3. Errors are enum variants, never bare strings
//! 4. Each variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing-domain errors.
///
/// These represent business rule violations. The checkout layer translates
/// them into API responses; they never panic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog snapshot.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart line references a variant the product does not have.
    #[error("Variant {variant} not found on product {product_id}")]
    VariantNotFound { product_id: String, variant: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements; they are
/// reported directly, never retried.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., characters a coupon code may not contain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., coupon code already exists).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Coupon Error
// =============================================================================

/// Why a coupon was rejected during evaluation.
///
/// The decision sequence in [`crate::coupon::evaluate`] fails with the
/// first applicable variant; a rejected coupon contributes zero discount
/// and the order subtotal is charged unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    /// No coupon exists under the canonical (trimmed, uppercased) code.
    #[error("Invalid coupon code")]
    NotFound,

    /// Coupon exists but an admin has deactivated it.
    #[error("Coupon is not active")]
    Inactive,

    /// Coupon expiry timestamp has passed.
    #[error("Coupon has expired")]
    Expired,

    /// Order subtotal is below the coupon's minimum.
    #[error("Order must be at least {required} to use this coupon")]
    BelowMinimum { required: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("prod-42".to_string());
        assert_eq!(err.to_string(), "Product not found: prod-42");

        let err = CouponError::BelowMinimum {
            required: Money::from_rupees(500),
        };
        assert_eq!(err.to_string(), "Order must be at least ₹500 to use this coupon");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
