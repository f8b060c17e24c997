//! # Vastra Checkout
//!
//! Server-side checkout orchestration for the Vastra storefront. Sits on
//! top of `vastra-core` (the pure pricing engine) and owns everything
//! with a side effect: stores, the payment gateway seam, and the order
//! placement flow.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        vastra-checkout                              │
//! │                                                                     │
//! │   authority   CheckoutService: place_order / verify_payment /       │
//! │               coupon quotes, all amounts recomputed server-side     │
//! │   store       CatalogStore / CouponStore / OrderStore / CartStore   │
//! │               traits + in-memory implementations                    │
//! │   payment     PaymentProvider trait + sandbox gateway               │
//! │   config      CheckoutConfig (COD fee, discount base, currency)     │
//! │   error       CheckoutError { code, message } for the API layer     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod authority;
pub mod config;
pub mod error;
pub mod payment;
pub mod store;

pub use authority::{
    CheckoutService, CouponQuote, OrderLineInput, PlaceOrderRequest, PlaceOrderResponse,
    VerifyPaymentResponse,
};
pub use config::{CheckoutConfig, DiscountBase};
pub use error::{CheckoutError, CheckoutResult, ErrorCode};
pub use payment::{Charge, PaymentProvider, SandboxMode, SandboxProvider};
pub use store::{
    CartStore, CatalogStore, CouponStore, MemoryCarts, MemoryCatalog, MemoryCoupons, MemoryOrders,
    NewCoupon, OrderStore,
};
