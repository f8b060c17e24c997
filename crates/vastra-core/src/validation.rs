//! # Validation Module
//!
//! Input validation for pricing-engine callers.
//!
//! Early checks on caller input, before any pricing logic runs; the
//! storefront UI performs its own validation, but the server never
//! trusts it.

use crate::error::ValidationError;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a coupon value against its kind.
///
/// Percent values must be 1..=100; fixed values must be positive.
pub fn validate_coupon_value(is_percent: bool, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "value".to_string(),
        });
    }
    if is_percent && value > 100 {
        return Err(ValidationError::OutOfRange {
            field: "value".to_string(),
            min: 1,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a raw (pre-canonicalization) coupon code.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 32 characters
/// - Letters, numbers, and hyphens only
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 32,
        });
    }

    if !code.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a size label.
pub fn validate_size(size: &str) -> ValidationResult<()> {
    if size.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "size".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_coupon_value() {
        assert!(validate_coupon_value(true, 10).is_ok());
        assert!(validate_coupon_value(true, 100).is_ok());
        assert!(validate_coupon_value(true, 101).is_err());
        assert!(validate_coupon_value(true, 0).is_err());

        assert!(validate_coupon_value(false, 500).is_ok());
        assert!(validate_coupon_value(false, 0).is_err());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("FRESH10").is_ok());
        assert!(validate_coupon_code(" fresh-10 ").is_ok());

        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("   ").is_err());
        assert!(validate_coupon_code("HAS SPACE").is_err());
        assert!(validate_coupon_code(&"A".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size("M").is_ok());
        assert!(validate_size("").is_err());
    }
}
