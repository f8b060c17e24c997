//! # Store Seams
//!
//! Async traits for the external collaborators the checkout layer talks
//! to, one per aggregate, plus in-memory implementations used by tests
//! and the demo binary.
//!
//! ## Store Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Store Seams                            │
//! │                                                                     │
//! │   CatalogStore      read-only trusted product records               │
//! │   CouponStore       admin create/list/toggle/delete + lookup        │
//! │   OrderStore        create/get/delete/update orders                 │
//! │   CartStore         per-user mirrored cart                         │
//! │                                                                     │
//! │   Memory* impls: tokio::sync::RwLock<HashMap<..>> snapshots         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The real deployment backs these with the document store; the engine
//! only ever sees the trait.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use vastra_core::cart::Cart;
use vastra_core::coupon::canonical_code;
use vastra_core::types::{CartLine, Coupon, CouponKind, Order, OrderStatus, Product};
use vastra_core::validation::{validate_coupon_code, validate_coupon_value};
use vastra_core::{Money, ValidationError};

use crate::error::{CheckoutError, CheckoutResult};

// =============================================================================
// Catalog Store
// =============================================================================

/// Read-only access to trusted product records.
pub trait CatalogStore: Send + Sync {
    /// Fetches a product by id; `None` when it does not exist (e.g. was
    /// deleted after the client cached it).
    fn get_product(
        &self,
        product_id: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<Option<Product>>> + Send;
}

// =============================================================================
// Coupon Store
// =============================================================================

/// Fields an admin supplies when creating a coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoupon {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub value: i64,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub min_subtotal: Money,
    #[serde(default)]
    pub max_discount: Money,
}

/// Coupon lookup plus the admin surface.
///
/// There is no usage counter: concurrent redemptions of a coupon meant
/// for single use are not prevented (known gap, accepted).
pub trait CouponStore: Send + Sync {
    /// Looks up a coupon; `code` may be raw, lookup is canonical.
    fn get_coupon(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<Option<Coupon>>> + Send;

    /// Lists all coupons, newest first.
    fn list_coupons(&self) -> impl std::future::Future<Output = CheckoutResult<Vec<Coupon>>> + Send;

    /// Creates a coupon under the canonical code; duplicate codes are
    /// rejected.
    fn create_coupon(
        &self,
        coupon: NewCoupon,
    ) -> impl std::future::Future<Output = CheckoutResult<Coupon>> + Send;

    /// Toggles a coupon's active flag.
    fn toggle_coupon(
        &self,
        code: &str,
        active: bool,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;

    /// Deletes a coupon.
    fn delete_coupon(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;
}

// =============================================================================
// Order Store
// =============================================================================

/// Order persistence.
pub trait OrderStore: Send + Sync {
    fn create_order(
        &self,
        order: Order,
    ) -> impl std::future::Future<Output = CheckoutResult<Order>> + Send;

    fn get_order(
        &self,
        order_id: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<Option<Order>>> + Send;

    /// Deletes a pending order (failed payment verification).
    fn delete_order(
        &self,
        order_id: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;

    /// Marks an order's payment as settled.
    fn set_payment(
        &self,
        order_id: &str,
        paid: bool,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;

    /// Admin: updates fulfilment status.
    fn set_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;

    /// Admin: all orders.
    fn list_orders(&self) -> impl std::future::Future<Output = CheckoutResult<Vec<Order>>> + Send;

    /// Storefront: a user's own orders.
    fn orders_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<Vec<Order>>> + Send;
}

// =============================================================================
// Cart Store
// =============================================================================

/// Server-side mirror of each user's cart.
///
/// The client owns its cart; this mirror is what survives re-login and
/// what checkout clears once an order is placed.
pub trait CartStore: Send + Sync {
    fn get_cart(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<Cart>> + Send;

    /// Adds units to the user's mirrored cart (merging same-key lines).
    fn add_line(
        &self,
        user_id: &str,
        line: CartLine,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;

    /// Sets a line quantity; zero removes the line.
    fn set_quantity(
        &self,
        user_id: &str,
        key: &CartLine,
        quantity: i64,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;

    /// Empties the user's mirrored cart.
    fn clear_cart(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<()>> + Send;
}

// =============================================================================
// In-Memory Implementations
// =============================================================================

/// In-memory catalog, keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl MemoryCatalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        MemoryCatalog {
            products: Arc::new(RwLock::new(
                products.into_iter().map(|p| (p.id.clone(), p)).collect(),
            )),
        }
    }

    /// Inserts or replaces a product.
    pub async fn upsert(&self, product: Product) {
        self.products.write().await.insert(product.id.clone(), product);
    }
}

impl CatalogStore for MemoryCatalog {
    async fn get_product(&self, product_id: &str) -> CheckoutResult<Option<Product>> {
        Ok(self.products.read().await.get(product_id).cloned())
    }
}

/// In-memory coupon store, keyed by canonical code.
#[derive(Debug, Clone, Default)]
pub struct MemoryCoupons {
    coupons: Arc<RwLock<HashMap<String, Coupon>>>,
}

impl MemoryCoupons {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CouponStore for MemoryCoupons {
    async fn get_coupon(&self, code: &str) -> CheckoutResult<Option<Coupon>> {
        let canonical = canonical_code(code);
        Ok(self.coupons.read().await.get(&canonical).cloned())
    }

    async fn list_coupons(&self) -> CheckoutResult<Vec<Coupon>> {
        let mut coupons: Vec<Coupon> = self.coupons.read().await.values().cloned().collect();
        coupons.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(coupons)
    }

    async fn create_coupon(&self, new: NewCoupon) -> CheckoutResult<Coupon> {
        validate_coupon_code(&new.code)?;
        validate_coupon_value(new.kind == CouponKind::Percent, new.value)?;

        let canonical = canonical_code(&new.code);
        let mut coupons = self.coupons.write().await;
        if coupons.contains_key(&canonical) {
            return Err(ValidationError::Duplicate {
                field: "code".to_string(),
                value: canonical,
            }
            .into());
        }

        let coupon = Coupon {
            code: canonical.clone(),
            kind: new.kind,
            value: new.value,
            active: true,
            expires_at: new.expires_at,
            min_subtotal: new.min_subtotal,
            max_discount: new.max_discount,
            created_at: Utc::now(),
        };
        coupons.insert(canonical, coupon.clone());
        Ok(coupon)
    }

    async fn toggle_coupon(&self, code: &str, active: bool) -> CheckoutResult<()> {
        let canonical = canonical_code(code);
        let mut coupons = self.coupons.write().await;
        match coupons.get_mut(&canonical) {
            Some(coupon) => {
                coupon.active = active;
                Ok(())
            }
            None => Err(CheckoutError::not_found("Coupon", &canonical)),
        }
    }

    async fn delete_coupon(&self, code: &str) -> CheckoutResult<()> {
        let canonical = canonical_code(code);
        match self.coupons.write().await.remove(&canonical) {
            Some(_) => Ok(()),
            None => Err(CheckoutError::not_found("Coupon", &canonical)),
        }
    }
}

/// In-memory order store, keyed by order id.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrders {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl MemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryOrders {
    async fn create_order(&self, order: Order) -> CheckoutResult<Order> {
        self.orders
            .write()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn get_order(&self, order_id: &str) -> CheckoutResult<Option<Order>> {
        Ok(self.orders.read().await.get(order_id).cloned())
    }

    async fn delete_order(&self, order_id: &str) -> CheckoutResult<()> {
        match self.orders.write().await.remove(order_id) {
            Some(_) => Ok(()),
            None => Err(CheckoutError::not_found("Order", order_id)),
        }
    }

    async fn set_payment(&self, order_id: &str, paid: bool) -> CheckoutResult<()> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(order_id) {
            Some(order) => {
                order.payment = paid;
                Ok(())
            }
            None => Err(CheckoutError::not_found("Order", order_id)),
        }
    }

    async fn set_status(&self, order_id: &str, status: OrderStatus) -> CheckoutResult<()> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(order_id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(CheckoutError::not_found("Order", order_id)),
        }
    }

    async fn list_orders(&self) -> CheckoutResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.orders.read().await.values().cloned().collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(orders)
    }

    async fn orders_for_user(&self, user_id: &str) -> CheckoutResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(orders)
    }
}

/// In-memory per-user cart mirror.
#[derive(Debug, Clone, Default)]
pub struct MemoryCarts {
    carts: Arc<RwLock<HashMap<String, Cart>>>,
}

impl MemoryCarts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCarts {
    async fn get_cart(&self, user_id: &str) -> CheckoutResult<Cart> {
        Ok(self
            .carts
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_line(&self, user_id: &str, line: CartLine) -> CheckoutResult<()> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id.to_string()).or_default();
        cart.add_line(line)?;
        Ok(())
    }

    async fn set_quantity(&self, user_id: &str, key: &CartLine, quantity: i64) -> CheckoutResult<()> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id.to_string()).or_default();
        cart.update_quantity(key, quantity)?;
        Ok(())
    }

    async fn clear_cart(&self, user_id: &str) -> CheckoutResult<()> {
        if let Some(cart) = self.carts.write().await.get_mut(user_id) {
            cart.clear();
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
