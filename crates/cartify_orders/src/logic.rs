// --- File: crates/cartify_orders/src/logic.rs ---
//! Request/response types and the pure pieces of the order flows: line-item
//! conversion, payment-status mapping, and the empty-result policy shared by
//! the list endpoints.

use cartify_common::models::{Order, OrderProduct, STATUS_FAILED, STATUS_PENDING};
use cartify_common::services::{CheckoutLineItem, CheckoutSession};
use cartify_db::DbError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OrderError;

// --- Data Structures ---

/// One product in a checkout request, priced in major currency units.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutProduct {
    pub name: String,
    pub image: String,
    /// Price in major units, e.g. 9.99 for $9.99.
    pub price: f64,
    pub quantity: i64,
}

/// Request body for creating a checkout session.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCheckoutSessionRequest {
    #[serde(default)]
    pub products: Option<Vec<CheckoutProduct>>,
}

/// Response body for a created checkout session.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCheckoutSessionResponse {
    /// The gateway's checkout session identifier.
    pub id: String,
}

/// Request body for confirming a payment.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize)]
pub struct ConfirmPaymentRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response wrapping a single order.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// Response wrapping the orders matched by a query.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Request body for updating an order's status.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateOrderStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Response for mutations that report a message alongside the order.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderMessageResponse {
    pub message: String,
    pub order: Order,
}

// --- Core Logic Functions ---

/// Converts a major-unit price to integer minor units, e.g. 9.99 to 999.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Builds the gateway line items for a cart. Quantity is passed through
/// unchanged; the price is converted to minor units.
pub fn build_line_items(products: &[CheckoutProduct]) -> Vec<CheckoutLineItem> {
    products
        .iter()
        .map(|product| CheckoutLineItem {
            name: product.name.clone(),
            image: product.image.clone(),
            unit_amount: to_minor_units(product.price),
            quantity: product.quantity,
        })
        .collect()
}

/// Maps a payment-intent status onto the stored order status.
///
/// "succeeded" maps to "pending"; every other value maps to "failed".
pub fn status_for_payment_intent(payment_intent_status: &str) -> &'static str {
    if payment_intent_status == "succeeded" {
        STATUS_PENDING
    } else {
        STATUS_FAILED
    }
}

/// Builds an order from a retrieved checkout session, keyed by the
/// session's payment-intent id. The gateway amount is in minor units and
/// is converted back to major units here.
pub fn order_from_session(session: CheckoutSession) -> Order {
    let status = status_for_payment_intent(&session.payment_intent_status);
    let products = session
        .line_items
        .into_iter()
        .map(|item| OrderProduct {
            product_id: item.product_id,
            quantity: item.quantity,
        })
        .collect();
    Order::new(
        session.payment_intent_id,
        products,
        session.amount_total as f64 / 100.0,
        session.customer_email,
        status.to_string(),
    )
}

/// Empty-result policy for the list endpoints: a query that matches zero
/// orders is reported as `NotFound`, never as an empty success list.
pub fn require_non_empty(
    orders: Vec<Order>,
    not_found_message: &str,
) -> Result<Vec<Order>, OrderError> {
    if orders.is_empty() {
        Err(OrderError::NotFound(not_found_message.to_string()))
    } else {
        Ok(orders)
    }
}

/// Parses a path id into an order key. A malformed id is reported as a
/// repository failure, not as a validation failure, so it surfaces as a
/// server error to the caller.
pub fn parse_order_key(raw: &str) -> Result<Uuid, OrderError> {
    Uuid::parse_str(raw).map_err(|_| OrderError::Repository(DbError::MalformedId(raw.to_string())))
}
