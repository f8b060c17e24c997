//! # Cart Aggregator
//!
//! Groups cart lines by promotional subcategory and computes the cart
//! total with bundle pricing applied.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart lines + catalog snapshot                                      │
//! │       │                                                             │
//! │       ▼  resolve unit price per line (variant override | base)      │
//! │  PricedLine { sub_category, unit_price, quantity }                  │
//! │       │                                                             │
//! │       ▼  partition by BundleRule::for_sub_category                  │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐               │
//! │  │ Oversize     │  │ Regular fit  │  │ regular      │               │
//! │  │ count, base  │  │ count, base  │  │ Σ price×qty  │               │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘               │
//! │         ▼                 ▼                 │                       │
//! │  min(base, bundle)  min(base, bundle)       │                       │
//! │         └────────────────┴──────────────────┘                       │
//! │                          ▼                                          │
//! │                 CartTotals { total, singles_total }                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a pure computation over snapshots. The client estimate and the
//! server authority both call [`aggregate`]; they are required to agree
//! exactly, so neither side may carry private pricing logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bundle::BundleRule;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Product};
use crate::validation::{validate_quantity, validate_size};

// =============================================================================
// Catalog Snapshot
// =============================================================================

/// Read-only product lookup for one pricing pass.
///
/// An explicit snapshot object, passed into each call; there is no
/// ambient catalog state.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Builds a snapshot from a product list (e.g. a fetched catalog page).
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Catalog {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Client Cart
// =============================================================================

/// The client-side cart: a list of lines unique per
/// `(product, variant, size)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds units of a `(product, variant, size)` combination.
    ///
    /// An existing line for the same combination absorbs the quantity;
    /// otherwise a new line is appended. The merged quantity is subject
    /// to the same per-line cap as a fresh one, and a rejected add
    /// leaves the cart unchanged.
    pub fn add_line(&mut self, line: CartLine) -> CoreResult<()> {
        validate_quantity(line.quantity)?;
        validate_size(&line.size)?;

        if let Some(existing) = self.lines.iter_mut().find(|l| l.same_key(&line)) {
            let merged = existing.quantity + line.quantity;
            validate_quantity(merged)?;
            existing.quantity = merged;
            return Ok(());
        }
        self.lines.push(line);
        Ok(())
    }

    /// Sets the quantity of an existing line; zero removes it.
    pub fn update_quantity(&mut self, key: &CartLine, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            self.lines.retain(|l| !l.same_key(key));
            return Ok(());
        }
        validate_quantity(quantity)?;

        match self.lines.iter_mut().find(|l| l.same_key(key)) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::ProductNotFound(key.product_id.clone())),
        }
    }

    /// Total units across all lines (for the cart badge).
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// A cart line with its unit price already resolved from trusted data.
///
/// Both pricing paths reduce their input to this shape before calling
/// [`aggregate`], which is what guarantees they agree.
#[derive(Debug, Clone)]
pub struct PricedLine {
    pub sub_category: String,
    pub unit_price: Money,
    pub quantity: i64,
}

/// Transient per-subcategory accumulator; never persisted.
#[derive(Debug, Clone, Copy, Default)]
struct BundleGroup {
    count: i64,
    base_total: Money,
}

/// Result of one pricing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Payable subtotal with bundle pricing applied.
    pub total: Money,
    /// What the same lines would cost per unit, for displaying savings.
    pub singles_total: Money,
}

impl CartTotals {
    /// Amount saved by bundle pricing.
    pub fn savings(&self) -> Money {
        self.singles_total - self.total
    }
}

/// Aggregates priced lines into cart totals.
///
/// Lines whose subcategory has a [`BundleRule`] accumulate `(count,
/// base_total)` per group; everything else is summed per unit. Each
/// group contributes `min(base_total, bundle_price(count))` so a bundle
/// never costs more than paying full price.
pub fn aggregate(lines: &[PricedLine]) -> CartTotals {
    let mut groups: HashMap<BundleRule, BundleGroup> = HashMap::new();
    let mut regular_total = Money::zero();
    let mut singles_total = Money::zero();

    for line in lines {
        if line.quantity <= 0 {
            continue;
        }
        let line_base = line.unit_price * line.quantity;
        singles_total += line_base;

        match BundleRule::for_sub_category(&line.sub_category) {
            Some(rule) => {
                let group = groups.entry(rule).or_default();
                group.count += line.quantity;
                group.base_total += line_base;
            }
            None => regular_total += line_base,
        }
    }

    let mut total = regular_total;
    for (rule, group) in groups {
        total += group.base_total.min(rule.price(group.count));
    }

    CartTotals { total, singles_total }
}

/// Computes the client-facing cart totals for a cart and catalog snapshot.
///
/// Per line: resolve the variant (if referenced) and take its positive
/// price override, else the product base price. Lines whose product is
/// missing from the snapshot are skipped, mirroring how the storefront
/// tolerates a cart that still references a deleted product.
pub fn compute_cart_total(cart: &Cart, catalog: &Catalog) -> CartTotals {
    let priced: Vec<PricedLine> = cart
        .lines
        .iter()
        .filter_map(|line| {
            let product = catalog.get(&line.product_id)?;
            let variant = line.variant.as_ref().and_then(|v| product.resolve_variant(v));
            Some(PricedLine {
                sub_category: product.sub_category.clone(),
                unit_price: product.effective_unit_price(variant),
                quantity: line.quantity,
            })
        })
        .collect();

    aggregate(&priced)
}

// =============================================================================
// Unit Tests
// =============================================================================
