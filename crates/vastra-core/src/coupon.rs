//! # Coupon Evaluator
//!
//! Validates a coupon against activity/expiry/minimum rules and computes
//! a bounded discount.
//!
//! ## Decision Sequence
//! ```text
//! lookup by canonical code ──missing──► NotFound
//!        │
//!        ▼ inactive? ──► Inactive
//!        ▼ expired?  ──► Expired
//!        ▼ subtotal < min_subtotal? ──► BelowMinimum
//!        ▼
//! raw discount (percent: round-half-up | fixed: value)
//!        ▼ clamp to max_discount when set
//!        ▼ clamp to subtotal
//!        ▼
//! CouponOutcome { discount, new_amount }
//! ```
//!
//! Evaluation is pure: the caller supplies the coupon record (or `None`),
//! the subtotal to discount against, and the current time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CouponError;
use crate::money::Money;
use crate::types::{Coupon, CouponKind};

// =============================================================================
// Canonical Codes
// =============================================================================

/// Canonical form of a coupon code: trimmed and uppercased.
///
/// Applied at both creation and lookup, so " fresh10 " and "FRESH10" are
/// the same coupon.
pub fn canonical_code(code: &str) -> String {
    code.trim().to_uppercase()
}

// =============================================================================
// Evaluation
// =============================================================================

/// A successfully evaluated coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponOutcome {
    /// Discount actually granted (post-clamping).
    pub discount: Money,
    /// `subtotal - discount`, never negative.
    pub new_amount: Money,
}

/// Evaluates a looked-up coupon against a subtotal.
///
/// `coupon` is the record found under the canonical code, or `None` when
/// the lookup missed. Time is a parameter so evaluation stays
/// deterministic and testable.
pub fn evaluate(
    coupon: Option<&Coupon>,
    subtotal: Money,
    now: DateTime<Utc>,
) -> Result<CouponOutcome, CouponError> {
    let coupon = coupon.ok_or(CouponError::NotFound)?;

    if !coupon.active {
        return Err(CouponError::Inactive);
    }
    if let Some(expires_at) = coupon.expires_at {
        if now > expires_at {
            return Err(CouponError::Expired);
        }
    }
    if coupon.min_subtotal.is_positive() && subtotal < coupon.min_subtotal {
        return Err(CouponError::BelowMinimum {
            required: coupon.min_subtotal,
        });
    }

    let mut discount = match coupon.kind {
        CouponKind::Percent => subtotal.percent(coupon.value),
        CouponKind::Fixed => Money::from_rupees(coupon.value),
    };

    if coupon.max_discount.is_positive() && discount > coupon.max_discount {
        discount = coupon.max_discount;
    }
    // A discount can never exceed what is being discounted.
    discount = discount.min(subtotal);

    Ok(CouponOutcome {
        discount,
        new_amount: (subtotal - discount).clamp_non_negative(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
