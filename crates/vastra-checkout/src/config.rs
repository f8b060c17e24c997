//! # Checkout Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; it is read-only after initialization.

use serde::{Deserialize, Serialize};
use std::env;

use vastra_core::Money;

/// Which amount a coupon's minimum-subtotal check and percentage are
/// computed against.
///
/// The storefront has shipped both behaviors at different points, so
/// this is explicit configuration rather than an inferred rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBase {
    /// Discount against subtotal + shipping (current storefront behavior).
    #[default]
    PostShipping,

    /// Discount against the merchandise subtotal only.
    PreShipping,
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Flat shipping fee for cash-on-delivery orders.
    /// Prepaid gateway orders ship free.
    pub cod_fee: Money,

    /// Base amount coupons are evaluated against.
    pub discount_base: DiscountBase,

    /// Currency code (ISO 4217) passed to the payment provider.
    pub currency_code: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            cod_fee: Money::from_rupees(79),
            discount_base: DiscountBase::PostShipping,
            currency_code: "INR".to_string(),
        }
    }
}

impl CheckoutConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VASTRA_COD_FEE`: COD shipping fee in whole rupees
    /// - `VASTRA_DISCOUNT_BASE`: `post_shipping` | `pre_shipping`
    /// - `VASTRA_CURRENCY`: ISO 4217 currency code
    pub fn from_env() -> Self {
        let mut config = CheckoutConfig::default();

        if let Ok(fee_str) = env::var("VASTRA_COD_FEE") {
            if let Ok(fee) = fee_str.parse::<i64>() {
                if fee >= 0 {
                    config.cod_fee = Money::from_rupees(fee);
                }
            }
        }

        if let Ok(base) = env::var("VASTRA_DISCOUNT_BASE") {
            match base.as_str() {
                "pre_shipping" => config.discount_base = DiscountBase::PreShipping,
                "post_shipping" => config.discount_base = DiscountBase::PostShipping,
                _ => {}
            }
        }

        if let Ok(currency) = env::var("VASTRA_CURRENCY") {
            if !currency.trim().is_empty() {
                config.currency_code = currency.trim().to_uppercase();
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::default();
        assert_eq!(config.cod_fee.rupees(), 79);
        assert_eq!(config.discount_base, DiscountBase::PostShipping);
        assert_eq!(config.currency_code, "INR");
    }
}
