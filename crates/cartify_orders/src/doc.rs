// --- File: crates/cartify_orders/src/doc.rs ---

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers;
use crate::logic::{
    CheckoutProduct, ConfirmPaymentRequest, CreateCheckoutSessionRequest,
    CreateCheckoutSessionResponse, OrderMessageResponse, OrderResponse, OrdersResponse,
    UpdateOrderStatusRequest,
};
use cartify_common::models::{Order, OrderProduct};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_checkout_session_handler,
        handlers::confirm_payment_handler,
        handlers::list_orders_by_email_handler,
        handlers::get_order_by_id_handler,
        handlers::list_all_orders_handler,
        handlers::update_order_status_handler,
        handlers::delete_order_handler
    ),
    components(
        schemas(
            CheckoutProduct,
            CreateCheckoutSessionRequest,
            CreateCheckoutSessionResponse,
            ConfirmPaymentRequest,
            OrderResponse,
            OrdersResponse,
            UpdateOrderStatusRequest,
            OrderMessageResponse,
            Order,
            OrderProduct
        )
    ),
    tags(
        (name = "Orders", description = "Order service API")
    )
)]
pub struct OrdersApiDoc;
