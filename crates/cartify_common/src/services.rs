// --- File: crates/cartify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module defines the payment gateway capability as a trait so the
//! router receives it by injection rather than reaching for a global
//! client, which keeps the handlers testable against a fake gateway.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

use crate::error::GatewayError;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for hosted-checkout payment gateway operations.
///
/// Implementations create checkout sessions from a cart of line items and
/// retrieve settled sessions with their line items and payment intent
/// expanded.
pub trait CheckoutGateway: Send + Sync {
    /// Create a payment-mode checkout session for the given line items.
    fn create_checkout_session(
        &self,
        line_items: Vec<CheckoutLineItem>,
    ) -> BoxFuture<'_, CreatedCheckoutSession, GatewayError>;

    /// Retrieve a checkout session, expanding line items and the payment
    /// intent. A session without a payment intent is an error: the order
    /// key cannot be derived without one.
    fn retrieve_checkout_session<'a>(
        &'a self,
        session_id: &'a str,
    ) -> BoxFuture<'a, CheckoutSession, GatewayError>;
}

/// One priced line submitted when creating a checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLineItem {
    /// Display name of the product.
    pub name: String,
    /// Product image URL shown on the hosted checkout page.
    pub image: String,
    /// Unit price in minor currency units (cents).
    pub unit_amount: i64,
    /// Units purchased.
    pub quantity: i64,
}

/// The result of creating a checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedCheckoutSession {
    /// The session identifier (`cs_...` at Stripe).
    pub id: String,
    /// The hosted checkout URL, when the provider returns one.
    pub url: Option<String>,
}

/// One line item of a retrieved checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLineItem {
    /// The gateway's product identifier for this line.
    pub product_id: String,
    /// Units purchased.
    pub quantity: i64,
}

/// A retrieved checkout session, flattened to the fields the order flow
/// consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// The session identifier.
    pub id: String,
    /// The payment-intent identifier; becomes the order key.
    pub payment_intent_id: String,
    /// The payment intent's status, e.g. "succeeded".
    pub payment_intent_status: String,
    /// Total amount in minor currency units.
    pub amount_total: i64,
    /// Customer email from the session's customer details; empty when the
    /// provider did not capture one.
    pub customer_email: String,
    /// The session's line items.
    pub line_items: Vec<SessionLineItem>,
}
