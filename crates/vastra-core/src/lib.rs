//! # vastra-core: Pure Pricing Logic for the Vastra Storefront
//!
//! This crate is the rule-dense heart of the storefront: cart totals
//! under promotional bundle pricing, coupon discounts, and per-variant
//! price overrides, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Vastra Architecture                            │
//! │                                                                     │
//! │   Client UI (cart display)        API layer (checkout)              │
//! │        │                               │                            │
//! │        ▼                               ▼                            │
//! │   compute_cart_total            vastra-checkout::CheckoutService    │
//! │        │                               │  (server-trusted records)  │
//! │        └───────────┬───────────────────┘                            │
//! │                    ▼                                                │
//! │        ★ vastra-core (THIS CRATE) ★                                 │
//! │                                                                     │
//! │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────────┐    │
//! │   │  money  │ │ bundle  │ │  cart   │ │ coupon  │ │ validation │    │
//! │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └────────────┘    │
//! │                                                                     │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Consistency Contract
//!
//! The client computes a display estimate and the server recomputes the
//! authoritative amount at checkout, from trusted records only. Both run
//! the exact same aggregation ([`cart::aggregate`]) and coupon evaluation
//! ([`coupon::evaluate`]); the server-computed amount is the only one
//! ever charged or persisted.
//!
//! ## Example
//!
//! ```rust
//! use vastra_core::cart::{compute_cart_total, Cart, Catalog};
//! use vastra_core::money::Money;
//! use vastra_core::types::{CartLine, Product};
//!
//! let catalog = Catalog::from_products([Product {
//!     id: "tee-1".into(),
//!     name: "Oversize Tee".into(),
//!     price: Money::from_rupees(600),
//!     sub_category: "Oversize".into(),
//!     variants: vec![],
//! }]);
//!
//! let mut cart = Cart::new();
//! cart.add_line(CartLine {
//!     product_id: "tee-1".into(),
//!     variant: None,
//!     size: "M".into(),
//!     quantity: 3,
//! }).unwrap();
//!
//! let totals = compute_cart_total(&cart, &catalog);
//! // 3 oversize tees: base 1800, bundle tier 999 — bundle wins.
//! assert_eq!(totals.total.rupees(), 999);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bundle;
pub mod cart;
pub mod coupon;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bundle::BundleRule;
pub use cart::{aggregate, compute_cart_total, Cart, CartTotals, Catalog, PricedLine};
pub use coupon::{canonical_code, evaluate as evaluate_coupon, CouponOutcome};
pub use error::{CoreError, CoreResult, CouponError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single `(product, variant, size)` cart line.
///
/// Prevents accidental over-ordering (e.g. typing 100 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 99;
