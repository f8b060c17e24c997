//! # Bundle Pricer
//!
//! Tiered bundle pricing for promotional subcategories.
//!
//! ## How Bundle Pricing Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart: 5 Oversize tees                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BundleRule::Oversize.price(5)                                      │
//! │       │                                                             │
//! │       ├── 3 units → ₹999   (largest tier first)                     │
//! │       └── 2 units → ₹799   (remainder tier)                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ₹1798  — but the aggregator charges min(base_total, 1798),         │
//! │           so a bundle only ever saves money                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tier tables are business constants, not derived from catalog data.

use crate::money::Money;

// =============================================================================
// Tier Constants
// =============================================================================

// Oversize: 3 for 999, 2 for 799, single 499.
const OVERSIZE_TRIPLE: i64 = 999;
const OVERSIZE_PAIR: i64 = 799;
const OVERSIZE_SINGLE: i64 = 499;

// Regular fit: 4 for 999, 3 for 799, else 299 per unit.
const REGULAR_QUAD: i64 = 999;
const REGULAR_TRIPLE: i64 = 799;
const REGULAR_UNIT: i64 = 299;

// Hoodie: 2 for 999, single 599.
const HOODIE_PAIR: i64 = 999;
const HOODIE_SINGLE: i64 = 599;

// =============================================================================
// Bundle Rule
// =============================================================================

/// A promotional subcategory's bundle pricing rule.
///
/// Selected per product subcategory (case-insensitive); subcategories
/// without a rule are priced per unit with no discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleRule {
    Oversize,
    RegularFit,
    Hoodie,
}

impl BundleRule {
    /// Looks up the rule for a product subcategory, if any.
    pub fn for_sub_category(sub_category: &str) -> Option<BundleRule> {
        match sub_category.trim().to_lowercase().as_str() {
            "oversize" => Some(BundleRule::Oversize),
            "regular fit" => Some(BundleRule::RegularFit),
            "hoodie" => Some(BundleRule::Hoodie),
            _ => None,
        }
    }

    /// Cheapest bundle total for `count` units under this rule.
    ///
    /// Greedy largest-tier-first, which is optimal for these tables.
    /// `price(0)` is zero and the result is monotone non-decreasing in
    /// `count`. Callers must still charge `min(base_total, price(count))`
    /// for the group: a catalog price below the single-unit tier would
    /// otherwise make the "deal" cost more than paying full price.
    pub fn price(&self, count: i64) -> Money {
        let mut n = count.max(0);
        let mut total = 0i64;
        match self {
            BundleRule::Oversize => {
                total += (n / 3) * OVERSIZE_TRIPLE;
                n %= 3;
                if n == 2 {
                    total += OVERSIZE_PAIR;
                } else if n == 1 {
                    total += OVERSIZE_SINGLE;
                }
            }
            BundleRule::RegularFit => {
                total += (n / 4) * REGULAR_QUAD;
                n %= 4;
                if n == 3 {
                    total += REGULAR_TRIPLE;
                    n = 0;
                }
                total += n * REGULAR_UNIT;
            }
            BundleRule::Hoodie => {
                total += (n / 2) * HOODIE_PAIR;
                if n % 2 == 1 {
                    total += HOODIE_SINGLE;
                }
            }
        }
        Money::from_rupees(total)
    }

    /// The per-unit price of this rule's smallest tier.
    ///
    /// Upper bound used by the pricing contract:
    /// `price(count) <= count * single_unit_price()`.
    pub fn single_unit_price(&self) -> Money {
        match self {
            BundleRule::Oversize => Money::from_rupees(OVERSIZE_SINGLE),
            BundleRule::RegularFit => Money::from_rupees(REGULAR_UNIT),
            BundleRule::Hoodie => Money::from_rupees(HOODIE_SINGLE),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_is_free() {
        for rule in [BundleRule::Oversize, BundleRule::RegularFit, BundleRule::Hoodie] {
            assert_eq!(rule.price(0), Money::zero());
            assert_eq!(rule.price(-3), Money::zero());
        }
    }

    #[test]
    fn test_oversize_tiers() {
        let rule = BundleRule::Oversize;
        assert_eq!(rule.price(1).rupees(), 499);
        assert_eq!(rule.price(2).rupees(), 799);
        assert_eq!(rule.price(3).rupees(), 999);
        assert_eq!(rule.price(4).rupees(), 999 + 499);
        // 5 = 3 + 2
        assert_eq!(rule.price(5).rupees(), 999 + 799);
        assert_eq!(rule.price(6).rupees(), 2 * 999);
    }

    #[test]
    fn test_regular_fit_tiers() {
        let rule = BundleRule::RegularFit;
        assert_eq!(rule.price(1).rupees(), 299);
        assert_eq!(rule.price(2).rupees(), 598);
        assert_eq!(rule.price(3).rupees(), 799);
        assert_eq!(rule.price(4).rupees(), 999);
        assert_eq!(rule.price(5).rupees(), 999 + 299);
        assert_eq!(rule.price(6).rupees(), 999 + 598);
        // 7 = 4 + 3
        assert_eq!(rule.price(7).rupees(), 999 + 799);
        assert_eq!(rule.price(8).rupees(), 2 * 999);
    }

    #[test]
    fn test_hoodie_tiers() {
        let rule = BundleRule::Hoodie;
        assert_eq!(rule.price(1).rupees(), 599);
        assert_eq!(rule.price(2).rupees(), 999);
        assert_eq!(rule.price(3).rupees(), 999 + 599);
        assert_eq!(rule.price(4).rupees(), 2 * 999);
    }

    #[test]
    fn test_sub_category_lookup() {
        assert_eq!(BundleRule::for_sub_category("Oversize"), Some(BundleRule::Oversize));
        assert_eq!(BundleRule::for_sub_category(" regular FIT "), Some(BundleRule::RegularFit));
        assert_eq!(BundleRule::for_sub_category("HOODIE"), Some(BundleRule::Hoodie));
        assert_eq!(BundleRule::for_sub_category("Topwear"), None);
        assert_eq!(BundleRule::for_sub_category(""), None);
    }

    #[test]
    fn test_monotone_non_decreasing() {
        for rule in [BundleRule::Oversize, BundleRule::RegularFit, BundleRule::Hoodie] {
            let mut prev = Money::zero();
            for n in 0..=40 {
                let p = rule.price(n);
                assert!(p >= prev, "{:?} price({}) dipped below price({})", rule, n, n - 1);
                prev = p;
            }
        }
    }

    #[test]
    fn test_never_worse_than_singles_tier() {
        for rule in [BundleRule::Oversize, BundleRule::RegularFit, BundleRule::Hoodie] {
            for n in 0..=40 {
                assert!(
                    rule.price(n) <= rule.single_unit_price() * n,
                    "{:?} price({}) exceeds per-unit pricing",
                    rule,
                    n
                );
            }
        }
    }
}
