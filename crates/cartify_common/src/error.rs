// --- File: crates/cartify_common/src/error.rs ---
use thiserror::Error;

/// Errors raised by a payment gateway client.
///
/// Every variant maps to HTTP 500 at the router boundary: gateway failures
/// are internal errors from the caller's point of view, whatever the
/// provider reported.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The HTTP request to the provider failed
    #[error("Payment gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Payment gateway returned an error: {message} (Status: {status_code})")]
    Api { status_code: u16, message: String },

    /// The provider's response body could not be parsed
    #[error("Failed to parse payment gateway response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Missing or incomplete gateway configuration
    #[error("Payment gateway configuration missing or incomplete: {0}")]
    Config(String),

    /// A retrieved session carried no payment intent, so no order key can
    /// be derived from it
    #[error("Checkout session {0} has no payment intent")]
    MissingPaymentIntent(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// Each crate's error type implements this to provide a consistent mapping
/// from error values to response statuses.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for GatewayError {
    fn status_code(&self) -> u16 {
        500
    }
}
