//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: integer rupees                                       │
//! │    Every price in the catalog and every bundle tier is a whole      │
//! │    rupee amount, so the engine works in i64 rupees and only         │
//! │    converts to paise (minor units) at the payment-provider edge.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vastra_core::money::Money;
//!
//! let price = Money::from_rupees(999);
//! let line = price * 3;
//! assert_eq!(line.rupees(), 2997);
//!
//! // Payment providers charge in the smallest subunit
//! assert_eq!(price.minor_units(), 99_900);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative intermediates (discount math)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Whole major units**: the catalog, bundle tiers, and coupon values
///   are all integral rupees; paise only exist at the provider boundary
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns the value in the smallest currency subunit (paise).
    ///
    /// This is the amount transmitted to the payment provider when a
    /// charge is created; everywhere else the engine stays in rupees.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0 * 100
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the smaller of two amounts.
    ///
    /// The cart aggregator charges `min(base_total, bundle_price)` per
    /// promotional group so a bundle can only ever save money.
    #[inline]
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Clamps the amount to zero or more.
    ///
    /// Applying a discount must never produce a negative payable amount.
    #[inline]
    pub const fn clamp_non_negative(self) -> Money {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }

    /// Computes `value` percent of this amount, rounded half-up to the
    /// nearest whole rupee.
    ///
    /// ## Implementation
    /// Integer math on i128 to avoid overflow: `(amount * pct + 50) / 100`.
    /// The `+50` provides the half-up rounding (50/100 = 0.5), matching
    /// the rounding the client-side estimate uses.
    ///
    /// ## Example
    /// ```rust
    /// use vastra_core::money::Money;
    ///
    /// // 10% of 250 = 25
    /// assert_eq!(Money::from_rupees(250).percent(10).rupees(), 25);
    /// // 15% of 250 = 37.5 → 38 (half-up)
    /// assert_eq!(Money::from_rupees(250).percent(15).rupees(), 38);
    /// ```
    pub fn percent(&self, value: i64) -> Money {
        let raw = (self.0 as i128 * value as i128 + 50) / 100;
        Money(raw as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display for debugging and logs; UI formatting lives with the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, self.0.abs())
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
