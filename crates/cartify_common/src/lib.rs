// --- File: crates/cartify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
#[cfg(test)]
mod models_test;
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{GatewayError, HttpStatusCode};

// Re-export HTTP utilities for easier access
pub use http::{client::HTTP_CLIENT, error_response};

// Re-export the shared models for easier access
pub use models::{Order, OrderProduct, STATUS_FAILED, STATUS_PENDING};

// Re-export the service abstractions for easier access
pub use services::{
    BoxFuture, CheckoutGateway, CheckoutLineItem, CheckoutSession, CreatedCheckoutSession,
    SessionLineItem,
};
