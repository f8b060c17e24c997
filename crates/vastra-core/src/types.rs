//! # Domain Types
//!
//! Core domain types for the Vastra pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐          │
//! │  │    Product    │   │    Coupon     │   │     Order     │          │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │          │
//! │  │  id           │   │  code         │   │  id           │          │
//! │  │  price        │   │  kind/value   │   │  items        │          │
//! │  │  sub_category │   │  active       │   │  amount       │          │
//! │  │  variants[]   │   │  expires_at   │   │  payment flag │          │
//! │  └───────────────┘   └───────────────┘   └───────────────┘          │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐          │
//! │  │   CartLine    │   │  VariantRef   │   │ PaymentMethod │          │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │          │
//! │  │  product_id   │   │  ById(id)     │   │  CashOnDeliv. │          │
//! │  │  variant?     │   │  ByIndex(n)   │   │  Gateway      │          │
//! │  │  size, qty    │   └───────────────┘   └───────────────┘          │
//! │  └───────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Variant
// =============================================================================

/// A color variant of a product.
///
/// Older catalog records carry variants without a stable `id` (they were
/// addressed by position); a migration assigns ids going forward, so the
/// engine must accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Stable identifier; `None` on pre-migration records.
    #[serde(default)]
    pub id: Option<String>,

    /// Price override. A present, positive value supersedes the product's
    /// base price for lines that reference this variant.
    #[serde(default)]
    pub price: Option<Money>,

    /// Display color name, e.g. "Midnight Blue".
    pub color_name: String,

    /// Hex color, e.g. "#1a2b3c".
    pub color_hex: String,
}

/// How a cart line refers to a product variant.
///
/// The storefront historically sent either a stable variant id or a bare
/// positional index in the same field; this tagged union makes the two
/// cases explicit. Resolution precedence is id first, index fallback
/// (see [`Product::resolve_variant`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantRef {
    /// Positional index into `Product::variants`.
    ByIndex(usize),
    /// Stable variant id.
    ById(String),
}

impl VariantRef {
    /// Parses a raw wire value into a variant reference.
    ///
    /// Bare digit strings are historical positional references; anything
    /// else is treated as a stable id.
    pub fn parse(raw: &str) -> VariantRef {
        match raw.parse::<usize>() {
            Ok(index) => VariantRef::ByIndex(index),
            Err(_) => VariantRef::ById(raw.to_string()),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product, read-only from the pricing engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base unit price; variant overrides supersede it per line.
    pub price: Money,

    /// Subcategory string, e.g. "Oversize". Drives bundle-rule selection
    /// (matched case-insensitively).
    pub sub_category: String,

    /// Ordered variant list.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Resolves a variant reference against this product.
    ///
    /// Precedence: stable id match first; a numeric id that matches no
    /// variant falls back to positional lookup (pre-migration carts).
    pub fn resolve_variant(&self, vref: &VariantRef) -> Option<&Variant> {
        match vref {
            VariantRef::ById(id) => self
                .variants
                .iter()
                .find(|v| v.id.as_deref() == Some(id.as_str()))
                .or_else(|| {
                    id.parse::<usize>()
                        .ok()
                        .and_then(|index| self.variants.get(index))
                }),
            VariantRef::ByIndex(index) => self.variants.get(*index),
        }
    }

    /// Finds a variant by color, hex first then display name.
    ///
    /// Used by the order authority as a fallback when a submitted line
    /// carries color fields but no resolvable variant reference.
    pub fn variant_by_color(&self, color_hex: Option<&str>, color_name: Option<&str>) -> Option<&Variant> {
        if let Some(hex) = color_hex {
            if let Some(v) = self.variants.iter().find(|v| v.color_hex.eq_ignore_ascii_case(hex)) {
                return Some(v);
            }
        }
        color_name.and_then(|name| {
            self.variants
                .iter()
                .find(|v| v.color_name.eq_ignore_ascii_case(name))
        })
    }

    /// Effective unit price when the given variant (if any) is selected.
    ///
    /// A variant override only applies when present and positive; zero or
    /// absent overrides fall through to the base price.
    pub fn effective_unit_price(&self, variant: Option<&Variant>) -> Money {
        variant
            .and_then(|v| v.price.filter(|p| p.is_positive()))
            .unwrap_or(self.price)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One line of a shopping cart.
///
/// Lines are unique per `(product_id, variant, size)`; adding the same
/// combination again increases the quantity instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: String,

    /// Selected variant, if the product has color variants.
    #[serde(default)]
    pub variant: Option<VariantRef>,

    /// Selected size, e.g. "M".
    pub size: String,

    /// Units of this exact combination; always positive.
    pub quantity: i64,
}

impl CartLine {
    /// Whether this line and another refer to the same
    /// `(product, variant, size)` combination.
    pub fn same_key(&self, other: &CartLine) -> bool {
        self.product_id == other.product_id
            && self.variant == other.variant
            && self.size == other.size
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// Discount shape of a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// `value` is a percentage of the subtotal.
    Percent,
    /// `value` is a fixed rupee amount.
    Fixed,
}

/// An admin-managed discount coupon.
///
/// The `code` field always holds the canonical form (trimmed, uppercased);
/// see [`crate::coupon::canonical_code`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Canonical coupon code, unique.
    pub code: String,

    /// Percent or fixed discount.
    #[serde(rename = "type")]
    pub kind: CouponKind,

    /// Percentage (for `Percent`) or rupee amount (for `Fixed`).
    pub value: i64,

    /// Admins toggle this without deleting the coupon.
    pub active: bool,

    /// Optional expiry; `None` never expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Minimum order subtotal required; zero means no minimum.
    #[serde(default)]
    pub min_subtotal: Money,

    /// Upper bound on the computed discount; zero means unbounded.
    #[serde(default)]
    pub max_discount: Money,

    /// When the coupon was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay the courier on delivery; carries a flat shipping fee.
    CashOnDelivery,
    /// Prepaid via the payment gateway; shipping is free.
    Gateway,
}

impl PaymentMethod {
    /// Whether this method requires a gateway charge before fulfilment.
    pub fn is_prepaid(&self) -> bool {
        matches!(self, PaymentMethod::Gateway)
    }
}

// =============================================================================
// Order
// =============================================================================

/// Fulfilment status of an order, admin-updated.
///
/// Serialized as the storefront's display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Order Placed")]
    Placed,
    #[serde(rename = "Packing")]
    Packing,
    #[serde(rename = "Shipped")]
    Shipped,
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Placed
    }
}

/// Delivery address captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// A line item frozen onto an order at placement time.
///
/// Snapshot pattern: the order keeps what was actually priced, so later
/// catalog edits never change a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub variant: Option<VariantRef>,
    pub size: String,
    pub quantity: i64,
    /// Unit price the authority resolved from trusted records.
    pub unit_price: Money,
}

/// A placed order.
///
/// `amount` is fixed at creation from the server-side computation and is
/// never recomputed; payment verification only flips the `payment` flag
/// or deletes a pending order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderLine>,
    pub address: Address,
    /// Final payable total (subtotal + shipping − discount, clamped ≥ 0).
    pub amount: Money,
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// Discount actually applied, for display and reconciliation.
    pub discount: Money,
    pub payment_method: PaymentMethod,
    /// Whether payment has settled (always false for fresh COD orders).
    pub payment: bool,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_variants() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Oversize Tee".to_string(),
            price: Money::from_rupees(499),
            sub_category: "Oversize".to_string(),
            variants: vec![
                Variant {
                    id: Some("v-black".to_string()),
                    price: None,
                    color_name: "Black".to_string(),
                    color_hex: "#000000".to_string(),
                },
                Variant {
                    id: Some("v-sand".to_string()),
                    price: Some(Money::from_rupees(549)),
                    color_name: "Sand".to_string(),
                    color_hex: "#c2b280".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_resolve_variant_by_id() {
        let product = product_with_variants();
        let v = product
            .resolve_variant(&VariantRef::ById("v-sand".to_string()))
            .unwrap();
        assert_eq!(v.color_name, "Sand");
    }

    #[test]
    fn test_resolve_variant_index_fallback() {
        let product = product_with_variants();
        // A numeric "id" that matches nothing falls back to position.
        let v = product
            .resolve_variant(&VariantRef::ById("1".to_string()))
            .unwrap();
        assert_eq!(v.color_name, "Sand");

        let v = product.resolve_variant(&VariantRef::ByIndex(0)).unwrap();
        assert_eq!(v.color_name, "Black");

        assert!(product.resolve_variant(&VariantRef::ByIndex(9)).is_none());
    }

    #[test]
    fn test_variant_by_color_prefers_hex() {
        let product = product_with_variants();
        let v = product
            .variant_by_color(Some("#C2B280"), Some("Black"))
            .unwrap();
        assert_eq!(v.color_name, "Sand");

        let v = product.variant_by_color(None, Some("black")).unwrap();
        assert_eq!(v.color_hex, "#000000");
    }

    #[test]
    fn test_effective_unit_price() {
        let product = product_with_variants();

        // No variant: base price.
        assert_eq!(product.effective_unit_price(None).rupees(), 499);

        // Variant without override: base price.
        let plain = product.resolve_variant(&VariantRef::ByIndex(0));
        assert_eq!(product.effective_unit_price(plain).rupees(), 499);

        // Variant with positive override: override wins.
        let override_v = product.resolve_variant(&VariantRef::ByIndex(1));
        assert_eq!(product.effective_unit_price(override_v).rupees(), 549);
    }

    #[test]
    fn test_variant_ref_parse() {
        assert_eq!(VariantRef::parse("2"), VariantRef::ByIndex(2));
        assert_eq!(
            VariantRef::parse("66f1a2b3"),
            VariantRef::ById("66f1a2b3".to_string())
        );
    }

    #[test]
    fn test_cart_line_key() {
        let a = CartLine {
            product_id: "p1".to_string(),
            variant: Some(VariantRef::ByIndex(0)),
            size: "M".to_string(),
            quantity: 1,
        };
        let mut b = a.clone();
        b.quantity = 5;
        assert!(a.same_key(&b));

        b.size = "L".to_string();
        assert!(!a.same_key(&b));
    }
}
