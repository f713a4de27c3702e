// --- File: crates/cartify_stripe/src/logic.rs ---
use cartify_config::StripeConfig;
use serde::Deserialize;
use tracing::{error, info};

// Import the StripeError from the error module
use crate::error::StripeError;

// Import the HTTP client from cartify_common
use cartify_common::services::CheckoutLineItem;
use cartify_common::HTTP_CLIENT;

/// The live Stripe API base URL, overridable through configuration so tests
/// can point the client at a local mock server.
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

// Sessions are always created in USD.
const CHECKOUT_CURRENCY: &str = "usd";

// --- Data Structures ---

/// Response from the Stripe API when creating a Checkout Session.
#[derive(Deserialize, Debug)]
pub struct StripeCreateSessionResponse {
    pub id: String,
    pub url: Option<String>,
}

/// Response from the Stripe API when retrieving a Checkout Session with
/// `line_items` and `payment_intent` expanded.
#[derive(Deserialize, Debug)]
pub struct StripeSessionResponse {
    pub id: String,
    pub amount_total: Option<i64>,
    pub customer_details: Option<StripeCustomerDetails>,
    /// Expanded payment intent; absent while the session has not produced
    /// a payment attempt.
    pub payment_intent: Option<StripePaymentIntent>,
    pub line_items: StripeList<StripeLineItem>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StripeCustomerDetails {
    pub email: Option<String>,
}

/// The expanded payment intent attached to a session.
#[derive(Deserialize, Debug)]
pub struct StripePaymentIntent {
    pub id: String,
    pub status: String,
}

/// The list object Stripe wraps around collections.
#[derive(Deserialize, Debug)]
pub struct StripeList<T> {
    pub data: Vec<T>,
}

/// One expanded line item of a checkout session.
#[derive(Deserialize, Debug)]
pub struct StripeLineItem {
    pub quantity: Option<i64>,
    pub price: StripePrice,
}

/// The price attached to a line item; `product` is the product identifier.
#[derive(Deserialize, Debug)]
pub struct StripePrice {
    pub product: String,
}

// --- Core Logic Functions ---

/// Creates a Stripe Checkout Session in payment mode.
///
/// Line items are sent as the form-encoded `line_items[i][price_data][...]`
/// fields the Stripe API expects; the currency is fixed to USD and the
/// redirect URLs come from configuration.
pub async fn create_checkout_session(
    api_base_url: &str,
    secret_key: &str,
    stripe_config: &StripeConfig,
    line_items: &[CheckoutLineItem],
) -> Result<StripeCreateSessionResponse, StripeError> {
    info!(
        "[Stripe Logic] Creating Checkout Session with {} line items",
        line_items.len()
    );

    let mut form_body: Vec<(String, String)> = vec![
        ("payment_method_types[]".to_string(), "card".to_string()),
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), stripe_config.success_url.clone()),
        ("cancel_url".to_string(), stripe_config.cancel_url.clone()),
    ];

    for (i, item) in line_items.iter().enumerate() {
        form_body.push((
            format!("line_items[{}][price_data][currency]", i),
            CHECKOUT_CURRENCY.to_string(),
        ));
        form_body.push((
            format!("line_items[{}][price_data][product_data][name]", i),
            item.name.clone(),
        ));
        form_body.push((
            format!("line_items[{}][price_data][product_data][images][0]", i),
            item.image.clone(),
        ));
        form_body.push((
            format!("line_items[{}][price_data][unit_amount]", i),
            item.unit_amount.to_string(),
        ));
        form_body.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    let api_url = format!("{}/v1/checkout/sessions", api_base_url);

    info!("[Stripe Logic] Sending request to Stripe API: {}", api_url);

    let response = HTTP_CLIENT
        .post(&api_url)
        .basic_auth(secret_key, None::<&str>)
        .form(&form_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let session: StripeCreateSessionResponse = serde_json::from_str(&body_text)?;
        match &session.url {
            Some(url) => info!(
                "[Stripe Logic] Checkout Session {} created successfully. URL: {}",
                session.id, url
            ),
            None => info!(
                "[Stripe Logic] Checkout Session {} created successfully",
                session.id
            ),
        }
        Ok(session)
    } else {
        Err(api_error(status, body_text))
    }
}

/// Retrieves a Stripe Checkout Session with line items and the payment
/// intent expanded.
pub async fn get_checkout_session(
    api_base_url: &str,
    secret_key: &str,
    session_id: &str,
) -> Result<StripeSessionResponse, StripeError> {
    info!(
        "[Stripe Logic] Retrieving Checkout Session details for ID: {}",
        session_id
    );

    let api_url = format!("{}/v1/checkout/sessions/{}", api_base_url, session_id);

    let response = HTTP_CLIENT
        .get(&api_url)
        .basic_auth(secret_key, None::<&str>)
        .query(&[("expand[]", "line_items"), ("expand[]", "payment_intent")])
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let session: StripeSessionResponse = serde_json::from_str(&body_text)?;
        Ok(session)
    } else {
        Err(api_error(status, body_text))
    }
}

/// Builds an ApiError from a non-success response, preferring Stripe's own
/// error message when the body carries one.
fn api_error(status: reqwest::StatusCode, body_text: String) -> StripeError {
    let message = match serde_json::from_str::<serde_json::Value>(&body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or(&body_text)
            .to_string(),
        Err(_) => body_text,
    };
    error!(
        "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
        status, message
    );
    StripeError::ApiError {
        status_code: status.as_u16(),
        message,
    }
}
