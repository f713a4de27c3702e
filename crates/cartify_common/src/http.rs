// --- File: crates/cartify_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

// Include the client module
pub mod client;

/// Renders an error as the JSON body shared by every endpoint:
/// `{"error": {"message": ..., "code": ...}}`.
///
/// Callers pass the message they want surfaced; nothing else is attached,
/// so internal detail stays out of the response unless explicitly given.
pub fn error_response(status_code: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = Json(json!({
        "error": {
            "message": message,
            "code": status.as_u16(),
        }
    }));

    (status, body).into_response()
}
