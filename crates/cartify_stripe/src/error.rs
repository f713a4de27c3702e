// --- File: crates/cartify_stripe/src/error.rs ---
use cartify_common::GatewayError;
use thiserror::Error;

/// Stripe-specific error types.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing a Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,

    /// A retrieved session carried no payment intent
    #[error("Checkout session {0} has no payment intent")]
    MissingPaymentIntent(String),
}

/// Convert StripeError into the provider-neutral gateway error the rest of
/// the application works with.
impl From<StripeError> for GatewayError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::RequestError(e) => GatewayError::Request(e),
            StripeError::ApiError {
                status_code,
                message,
            } => GatewayError::Api {
                status_code,
                message,
            },
            StripeError::ParseError(e) => GatewayError::Parse(e),
            StripeError::ConfigError => {
                GatewayError::Config("Stripe configuration missing or incomplete".to_string())
            }
            StripeError::MissingPaymentIntent(session_id) => {
                GatewayError::MissingPaymentIntent(session_id)
            }
        }
    }
}
