//! # Order Subtotal Authority
//!
//! Server-side re-derivation of every payable amount from trusted
//! product records. This is the anti-tampering boundary: clients submit
//! item identifiers and quantities, never prices, and the amount
//! computed here is the only one ever charged or persisted.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  place_order(user, items, address, method, coupon?)                 │
//! │       │                                                             │
//! │       ▼  fetch trusted Product per line (missing → skip, warn)      │
//! │  resolve unit prices (variant by id, color fallback, base)          │
//! │       │                                                             │
//! │       ▼  vastra_core::aggregate — same math as the client estimate  │
//! │  authoritative subtotal                                             │
//! │       │                                                             │
//! │       ▼  + shipping fee (flat for COD, zero prepaid)                │
//! │  coupon evaluation (configured base) → discount                     │
//! │       │                                                             │
//! │       ▼  clamp ≥ 0                                                  │
//! │  persist Order ──COD──► clear mirrored cart                         │
//! │       │                                                             │
//! │       └──Gateway──► create_charge(minor units) → checkout_url       │
//! │                        verify_payment: settled → payment = true     │
//! │                                        failed  → delete pending     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use vastra_core::cart::{aggregate, PricedLine};
use vastra_core::coupon::{self, canonical_code};
use vastra_core::types::{Address, Order, OrderLine, OrderStatus, PaymentMethod, VariantRef};
use vastra_core::validation::{validate_coupon_code, validate_quantity, validate_size};
use vastra_core::Money;

use crate::config::{CheckoutConfig, DiscountBase};
use crate::error::{CheckoutError, CheckoutResult};
use crate::payment::PaymentProvider;
use crate::store::{CartStore, CatalogStore, CouponStore, OrderStore};

// =============================================================================
// Request / Response DTOs
// =============================================================================

/// One submitted order line. Note what is absent: any price or amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub product_id: String,

    /// Stable variant id or historical positional index, as a raw string.
    #[serde(default)]
    pub variant_id: Option<String>,

    /// Color fields some older clients send instead of a variant id.
    #[serde(default)]
    pub color_name: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,

    pub size: String,
    pub quantity: i64,
}

/// A checkout request from the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderLineInput>,
    pub address: Address,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

/// Result of a successful order placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order_id: String,
    /// Final payable amount, computed server-side.
    pub amount: Money,
    pub discount: Money,
    pub shipping_fee: Money,
    /// Gateway payment page, for prepaid orders with a balance due.
    pub checkout_url: Option<String>,
}

/// Result of a payment verification callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub order_id: String,
    /// `false` means the pending order was deleted.
    pub settled: bool,
}

/// Client-facing coupon quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponQuote {
    pub code: String,
    pub discount: Money,
    pub new_amount: Money,
}

// =============================================================================
// Checkout Service
// =============================================================================

/// The checkout orchestrator, generic over its store and provider seams.
#[derive(Debug, Clone)]
pub struct CheckoutService<Cat, Cpn, Ord, Crt, Pay> {
    catalog: Cat,
    coupons: Cpn,
    orders: Ord,
    carts: Crt,
    provider: Pay,
    config: CheckoutConfig,
}

impl<Cat, Cpn, Ord, Crt, Pay> CheckoutService<Cat, Cpn, Ord, Crt, Pay>
where
    Cat: CatalogStore,
    Cpn: CouponStore,
    Ord: OrderStore,
    Crt: CartStore,
    Pay: PaymentProvider,
{
    pub fn new(
        catalog: Cat,
        coupons: Cpn,
        orders: Ord,
        carts: Crt,
        provider: Pay,
        config: CheckoutConfig,
    ) -> Self {
        CheckoutService {
            catalog,
            coupons,
            orders,
            carts,
            provider,
            config,
        }
    }

    /// Recomputes an order subtotal from trusted product records only.
    ///
    /// Returns the priced line snapshots and the aggregated subtotal
    /// (bundle pricing applied, exactly as the client estimate computes
    /// it). Lines referencing unknown products are dropped, not fatal.
    pub async fn authoritative_subtotal(
        &self,
        items: &[OrderLineInput],
    ) -> CheckoutResult<(Vec<OrderLine>, Money)> {
        let mut snapshots = Vec::with_capacity(items.len());
        let mut priced = Vec::with_capacity(items.len());

        for item in items {
            validate_quantity(item.quantity)?;
            validate_size(&item.size)?;

            let Some(product) = self.catalog.get_product(&item.product_id).await? else {
                warn!(product_id = %item.product_id, "Dropping order line for unknown product");
                continue;
            };

            // Variant precedence: explicit reference (id first, index
            // fallback), then color fields from older clients.
            let vref = item.variant_id.as_deref().map(VariantRef::parse);
            let variant = vref
                .as_ref()
                .and_then(|r| product.resolve_variant(r))
                .or_else(|| {
                    product.variant_by_color(item.color_hex.as_deref(), item.color_name.as_deref())
                });

            let unit_price = product.effective_unit_price(variant);
            debug!(
                product_id = %product.id,
                qty = item.quantity,
                unit_price = %unit_price,
                "Resolved order line"
            );

            let snapshot_ref = variant
                .and_then(|v| v.id.clone().map(VariantRef::ById))
                .or(vref);
            snapshots.push(OrderLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                variant: snapshot_ref,
                size: item.size.clone(),
                quantity: item.quantity,
                unit_price,
            });
            priced.push(PricedLine {
                sub_category: product.sub_category.clone(),
                unit_price,
                quantity: item.quantity,
            });
        }

        Ok((snapshots, aggregate(&priced).total))
    }

    /// Quotes a coupon against a subtotal, for the cart page.
    pub async fn evaluate_coupon(&self, code: &str, subtotal: Money) -> CheckoutResult<CouponQuote> {
        validate_coupon_code(code)?;
        let canonical = canonical_code(code);
        let record = self.coupons.get_coupon(&canonical).await?;
        let outcome = coupon::evaluate(record.as_ref(), subtotal, Utc::now())?;

        Ok(CouponQuote {
            code: canonical,
            discount: outcome.discount,
            new_amount: outcome.new_amount,
        })
    }

    /// Places an order. The single side-effecting write of the engine.
    pub async fn place_order(&self, request: PlaceOrderRequest) -> CheckoutResult<PlaceOrderResponse> {
        if request.items.is_empty() {
            return Err(CheckoutError::validation("Order has no items"));
        }

        let (lines, subtotal) = self.authoritative_subtotal(&request.items).await?;
        if lines.is_empty() {
            return Err(CheckoutError::validation("No purchasable items in order"));
        }

        let shipping_fee = match request.payment_method {
            PaymentMethod::CashOnDelivery => self.config.cod_fee,
            PaymentMethod::Gateway => Money::zero(),
        };

        // Coupon failure blocks checkout; it is not silently dropped.
        let mut discount = Money::zero();
        let mut coupon_applied = None;
        if let Some(raw_code) = request.coupon_code.as_deref() {
            validate_coupon_code(raw_code)?;
            let canonical = canonical_code(raw_code);
            let record = self.coupons.get_coupon(&canonical).await?;
            let base = match self.config.discount_base {
                DiscountBase::PostShipping => subtotal + shipping_fee,
                DiscountBase::PreShipping => subtotal,
            };
            let outcome = coupon::evaluate(record.as_ref(), base, Utc::now())?;
            discount = outcome.discount;
            coupon_applied = Some(canonical);
        }

        let amount = (subtotal + shipping_fee - discount).clamp_non_negative();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id.clone(),
            items: lines,
            address: request.address,
            amount,
            coupon_code: coupon_applied,
            discount,
            payment_method: request.payment_method,
            payment: false,
            status: OrderStatus::Placed,
            placed_at: Utc::now(),
        };
        let order = self.orders.create_order(order).await?;

        info!(
            order_id = %order.id,
            user_id = %order.user_id,
            amount = %order.amount,
            discount = %order.discount,
            method = ?order.payment_method,
            "Order placed"
        );

        let checkout_url = match request.payment_method {
            PaymentMethod::CashOnDelivery => {
                self.carts.clear_cart(&request.user_id).await?;
                None
            }
            PaymentMethod::Gateway if amount.is_zero() => {
                // Fully discounted: nothing to charge, settle immediately.
                self.orders.set_payment(&order.id, true).await?;
                self.carts.clear_cart(&request.user_id).await?;
                None
            }
            PaymentMethod::Gateway => {
                // The charge uses the server-computed amount in minor
                // units. On gateway failure the pending order is left
                // for manual reconciliation.
                let charge = self
                    .provider
                    .create_charge(amount.minor_units(), &self.config.currency_code, &order.id)
                    .await
                    .map_err(|e| {
                        warn!(order_id = %order.id, error = %e, "Charge creation failed");
                        e
                    })?;
                charge.checkout_url
            }
        };

        Ok(PlaceOrderResponse {
            order_id: order.id,
            amount,
            discount,
            shipping_fee,
            checkout_url,
        })
    }

    /// Resolves a prepaid order after the gateway callback.
    ///
    /// Settled charges mark the order paid and clear the user's mirrored
    /// cart; failed charges delete the pending order.
    pub async fn verify_payment(&self, order_id: &str) -> CheckoutResult<VerifyPaymentResponse> {
        let order = self
            .orders
            .get_order(order_id)
            .await?
            .ok_or_else(|| CheckoutError::not_found("Order", order_id))?;

        if !order.payment_method.is_prepaid() {
            return Err(CheckoutError::validation(
                "Only gateway orders go through payment verification",
            ));
        }
        if order.payment {
            // Verification callbacks can arrive more than once.
            return Ok(VerifyPaymentResponse {
                order_id: order.id,
                settled: true,
            });
        }

        let settled = self.provider.verify_charge(order_id).await?;
        if settled {
            self.orders.set_payment(order_id, true).await?;
            self.carts.clear_cart(&order.user_id).await?;
            info!(order_id = %order_id, "Payment settled");
        } else {
            self.orders.delete_order(order_id).await?;
            info!(order_id = %order_id, "Payment failed, pending order deleted");
        }

        Ok(VerifyPaymentResponse {
            order_id: order.id,
            settled,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{SandboxMode, SandboxProvider};
    use crate::store::{MemoryCarts, MemoryCatalog, MemoryCoupons, MemoryOrders, NewCoupon};
    use vastra_core::types::{CartLine, CouponKind, Product, Variant};

    type Service =
        CheckoutService<MemoryCatalog, MemoryCoupons, MemoryOrders, MemoryCarts, SandboxProvider>;

    fn product(id: &str, price: i64, sub_category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_rupees(price),
            sub_category: sub_category.to_string(),
            variants: Vec::new(),
        }
    }

    fn address() -> Address {
        Address {
            name: "Asha Rao".to_string(),
            street: "14 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "KA".to_string(),
            zip: "560001".to_string(),
            phone: "9800000000".to_string(),
        }
    }

    fn item(product_id: &str, qty: i64) -> OrderLineInput {
        OrderLineInput {
            product_id: product_id.to_string(),
            variant_id: None,
            color_name: None,
            color_hex: None,
            size: "M".to_string(),
            quantity: qty,
        }
    }

    fn request(items: Vec<OrderLineInput>, method: PaymentMethod) -> PlaceOrderRequest {
        PlaceOrderRequest {
            user_id: "user-1".to_string(),
            items,
            address: address(),
            payment_method: method,
            coupon_code: None,
        }
    }

    struct Fixture {
        service: Service,
        orders: MemoryOrders,
        carts: MemoryCarts,
        coupons: MemoryCoupons,
        provider: SandboxProvider,
    }

    fn fixture_with(products: Vec<Product>, mode: SandboxMode) -> Fixture {
        let catalog = MemoryCatalog::new(products);
        let coupons = MemoryCoupons::new();
        let orders = MemoryOrders::new();
        let carts = MemoryCarts::new();
        let provider = SandboxProvider::new(mode);
        let service = CheckoutService::new(
            catalog,
            coupons.clone(),
            orders.clone(),
            carts.clone(),
            provider.clone(),
            CheckoutConfig::default(),
        );
        Fixture {
            service,
            orders,
            carts,
            coupons,
            provider,
        }
    }

    fn fixture(products: Vec<Product>) -> Fixture {
        fixture_with(products, SandboxMode::Settle)
    }

    #[tokio::test]
    async fn test_subtotal_comes_from_trusted_records_only() {
        // Request shape carries no price at all; the catalog decides.
        let fx = fixture(vec![product("tee", 600, "Oversize")]);

        let (lines, subtotal) = fx
            .service
            .authoritative_subtotal(&[item("tee", 3)])
            .await
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].unit_price.rupees(), 600);
        // min(1800 base, 999 bundle) = 999, same as the client estimate.
        assert_eq!(subtotal.rupees(), 999);
    }

    #[tokio::test]
    async fn test_unknown_product_lines_are_dropped() {
        let fx = fixture(vec![product("tee", 400, "Topwear")]);

        let (lines, subtotal) = fx
            .service
            .authoritative_subtotal(&[item("tee", 1), item("deleted", 5)])
            .await
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(subtotal.rupees(), 400);
    }

    #[tokio::test]
    async fn test_variant_override_resolved_server_side() {
        let mut p = product("tee", 499, "Topwear");
        p.variants = vec![Variant {
            id: Some("v-sand".to_string()),
            price: Some(Money::from_rupees(549)),
            color_name: "Sand".to_string(),
            color_hex: "#c2b280".to_string(),
        }];
        let fx = fixture(vec![p]);

        // By stable id.
        let mut by_id = item("tee", 1);
        by_id.variant_id = Some("v-sand".to_string());
        let (_, subtotal) = fx.service.authoritative_subtotal(&[by_id]).await.unwrap();
        assert_eq!(subtotal.rupees(), 549);

        // Older client: color fields only.
        let mut by_color = item("tee", 1);
        by_color.color_hex = Some("#C2B280".to_string());
        let (lines, subtotal) = fx.service.authoritative_subtotal(&[by_color]).await.unwrap();
        assert_eq!(subtotal.rupees(), 549);
        // Snapshot normalizes to the stable id.
        assert_eq!(lines[0].variant, Some(VariantRef::ById("v-sand".to_string())));
    }

    #[tokio::test]
    async fn test_cod_order_adds_flat_fee_and_clears_cart() {
        let fx = fixture(vec![product("tee", 600, "Oversize")]);
        fx.carts
            .add_line(
                "user-1",
                CartLine {
                    product_id: "tee".to_string(),
                    variant: None,
                    size: "M".to_string(),
                    quantity: 3,
                },
            )
            .await
            .unwrap();

        let response = fx
            .service
            .place_order(request(vec![item("tee", 3)], PaymentMethod::CashOnDelivery))
            .await
            .unwrap();

        // 999 bundle subtotal + 79 COD fee.
        assert_eq!(response.amount.rupees(), 1078);
        assert_eq!(response.shipping_fee.rupees(), 79);
        assert!(response.checkout_url.is_none());

        let order = fx.orders.get_order(&response.order_id).await.unwrap().unwrap();
        assert_eq!(order.amount, response.amount);
        assert!(!order.payment);
        assert_eq!(order.status, OrderStatus::Placed);

        // COD clears the mirrored cart immediately.
        assert!(fx.carts.get_cart("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_order_ships_free_and_charges_minor_units() {
        let fx = fixture(vec![product("tee", 600, "Oversize")]);

        let response = fx
            .service
            .place_order(request(vec![item("tee", 3)], PaymentMethod::Gateway))
            .await
            .unwrap();
        assert_eq!(response.amount.rupees(), 999);
        assert_eq!(response.shipping_fee, Money::zero());
        assert!(response.checkout_url.is_some());

        // The provider saw the server-computed amount in paise.
        let charge = fx.provider.charge(&response.order_id).await.unwrap();
        assert_eq!(charge.amount_minor, 99_900);
    }

    #[tokio::test]
    async fn test_verify_settled_marks_paid_and_clears_cart() {
        let fx = fixture(vec![product("tee", 600, "Oversize")]);
        fx.carts
            .add_line(
                "user-1",
                CartLine {
                    product_id: "tee".to_string(),
                    variant: None,
                    size: "M".to_string(),
                    quantity: 3,
                },
            )
            .await
            .unwrap();

        let placed = fx
            .service
            .place_order(request(vec![item("tee", 3)], PaymentMethod::Gateway))
            .await
            .unwrap();
        // Gateway orders keep the cart until payment settles.
        assert!(!fx.carts.get_cart("user-1").await.unwrap().is_empty());

        let verified = fx.service.verify_payment(&placed.order_id).await.unwrap();
        assert!(verified.settled);

        let order = fx.orders.get_order(&placed.order_id).await.unwrap().unwrap();
        assert!(order.payment);
        assert!(fx.carts.get_cart("user-1").await.unwrap().is_empty());

        // Repeated callback is idempotent.
        assert!(fx.service.verify_payment(&placed.order_id).await.unwrap().settled);
    }

    #[tokio::test]
    async fn test_verify_failure_deletes_pending_order() {
        let fx = fixture_with(vec![product("tee", 600, "Oversize")], SandboxMode::Decline);

        let placed = fx
            .service
            .place_order(request(vec![item("tee", 3)], PaymentMethod::Gateway))
            .await
            .unwrap();

        let verified = fx.service.verify_payment(&placed.order_id).await.unwrap();
        assert!(!verified.settled);
        assert!(fx.orders.get_order(&placed.order_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_coupon_applies_to_post_shipping_base() {
        let fx = fixture(vec![product("tee", 600, "Oversize")]);
        fx.coupons
            .create_coupon(NewCoupon {
                code: "FRESH10".to_string(),
                kind: CouponKind::Percent,
                value: 10,
                expires_at: None,
                min_subtotal: Money::zero(),
                max_discount: Money::zero(),
            })
            .await
            .unwrap();

        let mut req = request(vec![item("tee", 3)], PaymentMethod::CashOnDelivery);
        req.coupon_code = Some(" fresh10 ".to_string());
        let response = fx.service.place_order(req).await.unwrap();

        // Base = 999 + 79 = 1078; 10% → 108 (half-up); amount 970.
        assert_eq!(response.discount.rupees(), 108);
        assert_eq!(response.amount.rupees(), 970);

        let order = fx.orders.get_order(&response.order_id).await.unwrap().unwrap();
        assert_eq!(order.coupon_code.as_deref(), Some("FRESH10"));
        assert_eq!(order.discount.rupees(), 108);
    }

    #[tokio::test]
    async fn test_below_minimum_coupon_blocks_checkout() {
        let fx = fixture(vec![product("tee", 400, "Topwear")]);
        fx.coupons
            .create_coupon(NewCoupon {
                code: "BIGCART".to_string(),
                kind: CouponKind::Fixed,
                value: 100,
                expires_at: None,
                min_subtotal: Money::from_rupees(2000),
                max_discount: Money::zero(),
            })
            .await
            .unwrap();

        let mut req = request(vec![item("tee", 1)], PaymentMethod::CashOnDelivery);
        req.coupon_code = Some("BIGCART".to_string());
        let err = fx.service.place_order(req).await.unwrap_err();
        assert!(err.message.contains("at least"));

        // Checkout blocked: nothing persisted.
        assert!(fx.orders.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fully_discounted_gateway_order_settles_without_charge() {
        let fx = fixture(vec![product("tee", 300, "Topwear")]);
        fx.coupons
            .create_coupon(NewCoupon {
                code: "ONUS".to_string(),
                kind: CouponKind::Fixed,
                value: 500,
                expires_at: None,
                min_subtotal: Money::zero(),
                max_discount: Money::zero(),
            })
            .await
            .unwrap();

        let mut req = request(vec![item("tee", 1)], PaymentMethod::Gateway);
        req.coupon_code = Some("ONUS".to_string());
        let response = fx.service.place_order(req).await.unwrap();

        assert_eq!(response.amount, Money::zero());
        assert!(response.checkout_url.is_none());
        let order = fx.orders.get_order(&response.order_id).await.unwrap().unwrap();
        assert!(order.payment);
        assert!(fx.provider.charge(&response.order_id).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_order_rejected() {
        let fx = fixture(vec![]);
        let err = fx
            .service
            .place_order(request(vec![], PaymentMethod::CashOnDelivery))
            .await
            .unwrap_err();
        assert!(err.message.contains("no items"));

        // All lines unknown is rejected too, not an empty zero order.
        let fx = fixture(vec![]);
        let err = fx
            .service
            .place_order(request(vec![item("ghost", 2)], PaymentMethod::CashOnDelivery))
            .await
            .unwrap_err();
        assert!(err.message.contains("No purchasable items"));
    }

    #[tokio::test]
    async fn test_blank_size_line_rejected() {
        let fx = fixture(vec![product("tee", 400, "Topwear")]);
        let mut bad = item("tee", 1);
        bad.size = " ".to_string();

        let err = fx
            .service
            .place_order(request(vec![bad], PaymentMethod::CashOnDelivery))
            .await
            .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
        assert!(fx.orders.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_coupon_quote() {
        let fx = fixture(vec![]);
        fx.coupons
            .create_coupon(NewCoupon {
                code: "FRESH10".to_string(),
                kind: CouponKind::Percent,
                value: 10,
                expires_at: None,
                min_subtotal: Money::zero(),
                max_discount: Money::from_rupees(50),
            })
            .await
            .unwrap();

        let quote = fx
            .service
            .evaluate_coupon("fresh10", Money::from_rupees(800))
            .await
            .unwrap();
        assert_eq!(quote.code, "FRESH10");
        // 10% of 800 = 80, clamped to max_discount 50.
        assert_eq!(quote.discount.rupees(), 50);
        assert_eq!(quote.new_amount.rupees(), 750);

        let err = fx
            .service
            .evaluate_coupon("NOPE", Money::from_rupees(800))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid coupon code");
    }

    #[tokio::test]
    async fn test_client_and_server_agree_exactly() {
        use vastra_core::cart::{compute_cart_total, Cart, Catalog};

        let products = vec![
            product("over", 600, "Oversize"),
            product("reg", 350, "Regular fit"),
            product("plain", 450, "Topwear"),
        ];
        let fx = fixture(products.clone());

        // Client-side estimate over the same snapshot.
        let catalog = Catalog::from_products(products);
        let mut cart = Cart::new();
        for (id, qty) in [("over", 5), ("reg", 7), ("plain", 2)] {
            cart.add_line(CartLine {
                product_id: id.to_string(),
                variant: None,
                size: "M".to_string(),
                quantity: qty,
            })
            .unwrap();
        }
        let estimate = compute_cart_total(&cart, &catalog);

        let (_, authoritative) = fx
            .service
            .authoritative_subtotal(&[item("over", 5), item("reg", 7), item("plain", 2)])
            .await
            .unwrap();

        assert_eq!(estimate.total, authoritative);
    }
}
