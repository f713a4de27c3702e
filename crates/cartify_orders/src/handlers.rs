// --- File: crates/cartify_orders/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

use cartify_common::models::Order;
use cartify_common::services::CheckoutGateway;
use cartify_db::OrderRepository;

use crate::error::OrderError;
use crate::logic::{
    build_line_items, order_from_session, parse_order_key, require_non_empty,
    ConfirmPaymentRequest, CreateCheckoutSessionRequest, CreateCheckoutSessionResponse,
    OrderMessageResponse, OrderResponse, OrdersResponse, UpdateOrderStatusRequest,
};

// --- State for Order Handlers ---
// The gateway and repository are injected as trait objects so tests can
// substitute fakes.
#[derive(Clone)]
pub struct OrdersState {
    pub gateway: Arc<dyn CheckoutGateway>,
    pub repository: Arc<dyn OrderRepository>,
}

/// Axum handler to create a checkout session for a cart of products.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/create-checkout-session",
    request_body = CreateCheckoutSessionRequest,
    responses(
        (status = 200, description = "Checkout session created", body = CreateCheckoutSessionResponse),
        (status = 400, description = "Missing or empty products"),
        (status = 500, description = "Payment gateway error")
    ),
    tag = "Orders"
))]
pub async fn create_checkout_session_handler(
    State(state): State<Arc<OrdersState>>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> Result<Json<CreateCheckoutSessionResponse>, OrderError> {
    let products = payload.products.unwrap_or_default();
    if products.is_empty() {
        return Err(OrderError::InvalidInput("No products provided".to_string()));
    }

    let line_items = build_line_items(&products);
    let session = state.gateway.create_checkout_session(line_items).await?;
    info!("Created checkout session {}", session.id);
    Ok(Json(CreateCheckoutSessionResponse { id: session.id }))
}

/// Axum handler to confirm a payment and record the resulting order.
///
/// Retrieves the session from the gateway and upserts the order keyed by
/// the payment-intent id: the first confirmation inserts, later ones only
/// refresh the status.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/confirm-payment",
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Order recorded for the payment intent", body = OrderResponse),
        (status = 400, description = "Missing session id"),
        (status = 500, description = "Payment gateway or order store error")
    ),
    tag = "Orders"
))]
pub async fn confirm_payment_handler(
    State(state): State<Arc<OrdersState>>,
    Json(payload): Json<ConfirmPaymentRequest>,
) -> Result<Json<OrderResponse>, OrderError> {
    let session_id = payload.session_id.unwrap_or_default();
    if session_id.is_empty() {
        return Err(OrderError::InvalidInput("Session ID is required".to_string()));
    }

    let session = state.gateway.retrieve_checkout_session(&session_id).await?;
    let order = order_from_session(session);
    info!(
        "Confirming payment intent {} with status {}",
        order.order_id, order.status
    );
    let order = state.repository.upsert_by_order_id(order).await?;
    Ok(Json(OrderResponse { order }))
}

/// Axum handler to list the orders placed with a customer email.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/{email}",
    params(("email" = String, Path, description = "Customer email address")),
    responses(
        (status = 200, description = "Orders for the email", body = OrdersResponse),
        (status = 400, description = "Missing email"),
        (status = 404, description = "No orders for the email")
    ),
    tag = "Orders"
))]
pub async fn list_orders_by_email_handler(
    State(state): State<Arc<OrdersState>>,
    Path(email): Path<String>,
) -> Result<Json<OrdersResponse>, OrderError> {
    if email.is_empty() {
        return Err(OrderError::InvalidInput("Email is required".to_string()));
    }

    let orders = state.repository.find_by_email(&email).await?;
    let orders = require_non_empty(orders, "No orders found for this email")?;
    Ok(Json(OrdersResponse { orders }))
}

/// Axum handler to fetch a single order by its internal id.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/order/{id}",
    params(("id" = String, Path, description = "Internal order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "No order with this id"),
        (status = 500, description = "Malformed id or order store error")
    ),
    tag = "Orders"
))]
pub async fn get_order_by_id_handler(
    State(state): State<Arc<OrdersState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    let order_key = parse_order_key(&id)?;
    let order = state
        .repository
        .find_by_id(order_key)
        .await?
        .ok_or_else(|| OrderError::NotFound("Order not found".to_string()))?;
    Ok(Json(order))
}

/// Axum handler to list every order, newest first.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All orders, newest first", body = [Order]),
        (status = 404, description = "No orders exist")
    ),
    tag = "Orders"
))]
pub async fn list_all_orders_handler(
    State(state): State<Arc<OrdersState>>,
) -> Result<Json<Vec<Order>>, OrderError> {
    let orders = state.repository.find_all_newest_first().await?;
    let orders = require_non_empty(orders, "No orders found")?;
    Ok(Json(orders))
}

/// Axum handler to set the status of an existing order.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/update-order-status/{id}",
    params(("id" = String, Path, description = "Internal order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderMessageResponse),
        (status = 400, description = "Missing status"),
        (status = 404, description = "No order with this id"),
        (status = 500, description = "Malformed id or order store error")
    ),
    tag = "Orders"
))]
pub async fn update_order_status_handler(
    State(state): State<Arc<OrdersState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderMessageResponse>, OrderError> {
    let status = payload.status.unwrap_or_default();
    if status.is_empty() {
        return Err(OrderError::InvalidInput("Status is required".to_string()));
    }

    let order_key = parse_order_key(&id)?;
    let order = state
        .repository
        .update_status(order_key, &status)
        .await?
        .ok_or_else(|| OrderError::NotFound("Order not found".to_string()))?;
    info!("Updated order {} to status {}", order.id, order.status);
    Ok(Json(OrderMessageResponse {
        message: "Order status updated successfully".to_string(),
        order,
    }))
}

/// Axum handler to delete an order. The response carries the order as it
/// existed immediately before deletion.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/delete-order/{id}",
    params(("id" = String, Path, description = "Internal order id")),
    responses(
        (status = 200, description = "Order deleted", body = OrderMessageResponse),
        (status = 404, description = "No order with this id"),
        (status = 500, description = "Malformed id or order store error")
    ),
    tag = "Orders"
))]
pub async fn delete_order_handler(
    State(state): State<Arc<OrdersState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderMessageResponse>, OrderError> {
    let order_key = parse_order_key(&id)?;
    let order = state
        .repository
        .delete(order_key)
        .await?
        .ok_or_else(|| OrderError::NotFound("Order not found".to_string()))?;
    info!("Deleted order {}", order.id);
    Ok(Json(OrderMessageResponse {
        message: "Order deleted successfully".to_string(),
        order,
    }))
}
