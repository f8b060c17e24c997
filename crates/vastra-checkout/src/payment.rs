//! # Payment Provider Seam
//!
//! The opaque interface to the payment gateway.
//!
//! ## Charge Lifecycle
//! ```text
//! place_order (Gateway method)
//!      │
//!      ▼
//! create_charge(amount_minor, currency, order_id)
//!      │                                   amounts cross this boundary
//!      ▼                                   in the smallest subunit
//! Charge { reference, checkout_url }
//!      │   client completes payment on the gateway page
//!      ▼
//! verify_charge(order_id) ──settled──► order.payment = true
//!                         └──failed──► pending order deleted
//! ```
//!
//! The amount passed to `create_charge` is always the server-computed
//! one; client-submitted amounts never reach this seam.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{CheckoutError, CheckoutResult};

// =============================================================================
// Provider Interface
// =============================================================================

/// A charge created with the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    /// Our reference for the charge (the order id).
    pub reference: String,

    /// Amount in the smallest currency subunit.
    pub amount_minor: i64,

    /// Hosted payment page the client is redirected to, when the
    /// gateway provides one.
    pub checkout_url: Option<String>,
}

/// Opaque payment gateway interface.
pub trait PaymentProvider: Send + Sync {
    /// Creates a charge for `amount_minor` subunits, keyed by our
    /// `reference` so it can be verified later.
    fn create_charge(
        &self,
        amount_minor: i64,
        currency: &str,
        reference: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<Charge>> + Send;

    /// Whether the charge under `reference` has settled.
    fn verify_charge(
        &self,
        reference: &str,
    ) -> impl std::future::Future<Output = CheckoutResult<bool>> + Send;
}

// =============================================================================
// Sandbox Provider
// =============================================================================

/// How the sandbox resolves charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxMode {
    /// Every charge settles.
    Settle,
    /// Every charge is declined.
    Decline,
    /// The gateway is unreachable.
    Unavailable,
}

/// Gateway stand-in for development and tests.
///
/// Records created charges and resolves them according to its mode, so
/// the verify path can be exercised without network access.
#[derive(Debug, Clone)]
pub struct SandboxProvider {
    mode: SandboxMode,
    charges: Arc<RwLock<HashMap<String, Charge>>>,
}

impl SandboxProvider {
    pub fn new(mode: SandboxMode) -> Self {
        SandboxProvider {
            mode,
            charges: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The charge recorded under `reference`, if any.
    pub async fn charge(&self, reference: &str) -> Option<Charge> {
        self.charges.read().await.get(reference).cloned()
    }
}

impl PaymentProvider for SandboxProvider {
    async fn create_charge(
        &self,
        amount_minor: i64,
        currency: &str,
        reference: &str,
    ) -> CheckoutResult<Charge> {
        if self.mode == SandboxMode::Unavailable {
            return Err(CheckoutError::payment("Payment gateway unreachable"));
        }
        if amount_minor <= 0 {
            return Err(CheckoutError::payment("Charge amount must be positive"));
        }

        let charge = Charge {
            reference: reference.to_string(),
            amount_minor,
            checkout_url: Some(format!(
                "https://sandbox.gateway.test/pay/{}?currency={}",
                reference, currency
            )),
        };
        self.charges
            .write()
            .await
            .insert(reference.to_string(), charge.clone());
        Ok(charge)
    }

    async fn verify_charge(&self, reference: &str) -> CheckoutResult<bool> {
        match self.mode {
            SandboxMode::Unavailable => Err(CheckoutError::payment("Payment gateway unreachable")),
            _ => {
                let known = self.charges.read().await.contains_key(reference);
                if !known {
                    return Err(CheckoutError::not_found("Charge", reference));
                }
                Ok(self.mode == SandboxMode::Settle)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
