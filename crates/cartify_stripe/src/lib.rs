// --- File: crates/cartify_stripe/src/lib.rs ---

pub mod error;
pub mod logic;
pub mod service;

// Re-export for main backend
pub use error::StripeError; // Re-export the error type
pub use service::StripeCheckoutGateway; // Re-export the checkout gateway
