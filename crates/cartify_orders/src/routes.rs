// --- File: crates/cartify_orders/src/routes.rs ---

use crate::handlers::{
    confirm_payment_handler, create_checkout_session_handler, delete_order_handler,
    get_order_by_id_handler, list_all_orders_handler, list_orders_by_email_handler,
    update_order_status_handler, OrdersState,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the order feature.
///
/// The static `/order/...`, `/update-order-status/...` and
/// `/delete-order/...` prefixes take precedence over the `/{email}`
/// capture, so only a bare single-segment path is read as an email.
pub fn routes(state: Arc<OrdersState>) -> Router {
    Router::new()
        .route(
            "/create-checkout-session",
            post(create_checkout_session_handler),
        )
        .route("/confirm-payment", post(confirm_payment_handler))
        .route("/", get(list_all_orders_handler))
        .route("/order/{id}", get(get_order_by_id_handler))
        .route(
            "/update-order-status/{id}",
            patch(update_order_status_handler),
        )
        .route("/delete-order/{id}", delete(delete_order_handler))
        .route("/{email}", get(list_orders_by_email_handler))
        .with_state(state)
}
