//! End-to-end checkout walkthrough against in-memory stores.
//!
//! Seeds a small catalog and a coupon, places a prepaid order, and runs
//! it through payment verification. Useful for eyeballing the pricing
//! pipeline with `RUST_LOG=debug`.

use tracing::info;
use tracing_subscriber::EnvFilter;

use vastra_checkout::{
    CheckoutConfig, CheckoutResult, CheckoutService, CouponStore, MemoryCarts, MemoryCatalog,
    MemoryCoupons,
    MemoryOrders, NewCoupon, OrderLineInput, PlaceOrderRequest, SandboxMode, SandboxProvider,
};
use vastra_core::types::{Address, CouponKind, PaymentMethod, Product, Variant};
use vastra_core::Money;

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "tee-oversize-wash".to_string(),
            name: "Acid Wash Oversize Tee".to_string(),
            price: Money::from_rupees(599),
            sub_category: "Oversize".to_string(),
            variants: vec![
                Variant {
                    id: Some("wash-black".to_string()),
                    price: None,
                    color_name: "Washed Black".to_string(),
                    color_hex: "#2b2b2b".to_string(),
                },
                Variant {
                    id: Some("wash-sand".to_string()),
                    price: Some(Money::from_rupees(649)),
                    color_name: "Sand".to_string(),
                    color_hex: "#c2b280".to_string(),
                },
            ],
        },
        Product {
            id: "tee-regular-crew".to_string(),
            name: "Regular Fit Crew Tee".to_string(),
            price: Money::from_rupees(349),
            sub_category: "Regular fit".to_string(),
            variants: Vec::new(),
        },
        Product {
            id: "hoodie-zip".to_string(),
            name: "Zip-Up Hoodie".to_string(),
            price: Money::from_rupees(799),
            sub_category: "Hoodie".to_string(),
            variants: Vec::new(),
        },
    ]
}

#[tokio::main]
async fn main() -> CheckoutResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let coupons = MemoryCoupons::new();
    coupons
        .create_coupon(NewCoupon {
            code: "FRESH10".to_string(),
            kind: CouponKind::Percent,
            value: 10,
            expires_at: None,
            min_subtotal: Money::from_rupees(500),
            max_discount: Money::from_rupees(200),
        })
        .await?;

    let service = CheckoutService::new(
        MemoryCatalog::new(seed_products()),
        coupons,
        MemoryOrders::new(),
        MemoryCarts::new(),
        SandboxProvider::new(SandboxMode::Settle),
        CheckoutConfig::from_env(),
    );

    let request = PlaceOrderRequest {
        user_id: "demo-user".to_string(),
        items: vec![
            OrderLineInput {
                product_id: "tee-oversize-wash".to_string(),
                variant_id: Some("wash-sand".to_string()),
                color_name: None,
                color_hex: None,
                size: "L".to_string(),
                quantity: 3,
            },
            OrderLineInput {
                product_id: "tee-regular-crew".to_string(),
                variant_id: None,
                color_name: None,
                color_hex: None,
                size: "M".to_string(),
                quantity: 4,
            },
            OrderLineInput {
                product_id: "hoodie-zip".to_string(),
                variant_id: None,
                color_name: None,
                color_hex: None,
                size: "XL".to_string(),
                quantity: 2,
            },
        ],
        address: Address {
            name: "Demo User".to_string(),
            street: "14 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "KA".to_string(),
            zip: "560001".to_string(),
            phone: "9800000000".to_string(),
        },
        payment_method: PaymentMethod::Gateway,
        coupon_code: Some("fresh10".to_string()),
    };

    let placed = service.place_order(request).await?;
    info!(
        order_id = %placed.order_id,
        amount = %placed.amount,
        discount = %placed.discount,
        shipping = %placed.shipping_fee,
        "Order placed"
    );
    if let Some(url) = &placed.checkout_url {
        info!(%url, "Redirect customer to gateway");
    }

    let verified = service.verify_payment(&placed.order_id).await?;
    info!(settled = verified.settled, "Payment verification complete");

    Ok(())
}
