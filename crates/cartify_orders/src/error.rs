// --- File: crates/cartify_orders/src/error.rs ---
use axum::response::{IntoResponse, Response};
use cartify_common::{error_response, GatewayError, HttpStatusCode};
use cartify_db::DbError;
use thiserror::Error;
use tracing::error;

/// Errors produced by the order route handlers.
///
/// `InvalidInput` and `NotFound` carry messages meant for the caller;
/// gateway and repository failures are logged server side and surfaced
/// only as a generic message.
#[derive(Error, Debug)]
pub enum OrderError {
    /// A required request field was missing or empty.
    #[error("{0}")]
    InvalidInput(String),

    /// No record matched the request.
    #[error("{0}")]
    NotFound(String),

    /// The payment gateway call failed.
    #[error("Payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The order store call failed or rejected the write.
    #[error("Order repository error: {0}")]
    Repository(#[from] DbError),
}

impl HttpStatusCode for OrderError {
    fn status_code(&self) -> u16 {
        match self {
            OrderError::InvalidInput(_) => 400,
            OrderError::NotFound(_) => 404,
            OrderError::Gateway(err) => err.status_code(),
            OrderError::Repository(err) => err.status_code(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        match &self {
            OrderError::InvalidInput(message) | OrderError::NotFound(message) => {
                error_response(status_code, message)
            }
            OrderError::Gateway(err) => {
                error!("Payment gateway call failed: {}", err);
                error_response(status_code, "Failed to communicate with payment provider.")
            }
            OrderError::Repository(err) => {
                error!("Order repository call failed: {}", err);
                error_response(status_code, "Failed to access the order store.")
            }
        }
    }
}
