// --- File: crates/cartify_common/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Status written when the payment intent has settled successfully.
pub const STATUS_PENDING: &str = "pending";

/// Status written when the payment intent is in any other state.
pub const STATUS_FAILED: &str = "failed";

/// One product line within an order.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// The gateway's product identifier for this line.
    pub product_id: String,

    /// Number of units purchased, always > 0.
    pub quantity: i64,
}

/// A customer order, keyed internally by `id` and externally by the
/// payment-intent identifier in `order_id`.
///
/// At most one order exists per `order_id`; the confirmation flow upserts
/// on that field.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// The unique identifier for this order.
    pub id: Uuid,

    /// The payment gateway's payment-intent identifier, unique per order.
    pub order_id: String,

    /// The product lines captured from the checkout session.
    pub products: Vec<OrderProduct>,

    /// Total charged, in major currency units (gateway total divided by 100).
    pub amount: f64,

    /// Customer contact captured from the gateway session.
    pub email: String,

    /// Current order status. The confirmation flow only ever writes
    /// "pending" or "failed"; status updates may set any non-empty value.
    pub status: String,

    /// The timestamp when this order was created.
    pub created_at: DateTime<Utc>,

    /// The timestamp when this order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A violation detected by [`Order::validate`]. Writes carrying an invalid
/// order are rejected before they reach the store.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("order_id must not be empty")]
    EmptyOrderId,

    #[error("status must not be empty")]
    EmptyStatus,

    #[error("an order must contain at least one product")]
    NoProducts,

    #[error("product {product_id} has non-positive quantity {quantity}")]
    NonPositiveQuantity { product_id: String, quantity: i64 },
}

impl Order {
    /// Create a new order with a fresh internal id and both timestamps set
    /// to now.
    pub fn new(
        order_id: String,
        products: Vec<OrderProduct>,
        amount: f64,
        email: String,
        status: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_id,
            products,
            amount,
            email,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the order against the write-time constraints: non-empty
    /// `order_id` and `status`, at least one product, every quantity > 0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.order_id.is_empty() {
            return Err(ValidationError::EmptyOrderId);
        }
        if self.status.is_empty() {
            return Err(ValidationError::EmptyStatus);
        }
        if self.products.is_empty() {
            return Err(ValidationError::NoProducts);
        }
        if let Some(bad) = self.products.iter().find(|p| p.quantity <= 0) {
            return Err(ValidationError::NonPositiveQuantity {
                product_id: bad.product_id.clone(),
                quantity: bad.quantity,
            });
        }
        Ok(())
    }
}
