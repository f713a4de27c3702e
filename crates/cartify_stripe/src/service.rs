// --- File: crates/cartify_stripe/src/service.rs ---
//! Adapter that implements the `CheckoutGateway` trait from `cartify_common`
//! on top of the Stripe logic functions.

use cartify_common::services::{
    BoxFuture, CheckoutGateway, CheckoutLineItem, CheckoutSession, CreatedCheckoutSession,
    SessionLineItem,
};
use cartify_common::GatewayError;
use cartify_config::{AppConfig, StripeConfig};
use std::env;
use std::sync::Arc;
use tracing::info;

use crate::error::StripeError;
use crate::logic;

/// Checkout gateway backed by the Stripe REST API.
pub struct StripeCheckoutGateway {
    stripe_config: StripeConfig,
    secret_key: String,
    api_base_url: String,
}

impl StripeCheckoutGateway {
    /// Creates a new gateway from an explicit Stripe configuration and
    /// secret key.
    pub fn new(stripe_config: StripeConfig, secret_key: String) -> Self {
        let api_base_url = stripe_config
            .api_base_url
            .clone()
            .unwrap_or_else(|| logic::DEFAULT_API_BASE_URL.to_string());
        Self {
            stripe_config,
            secret_key,
            api_base_url,
        }
    }

    /// Creates a gateway from the application config.
    ///
    /// The secret key is read from the `STRIPE_SECRET_KEY` environment
    /// variable, never from a config file.
    pub fn from_config(config: &Arc<AppConfig>) -> Result<Self, StripeError> {
        let stripe_config = config.stripe.clone().ok_or(StripeError::ConfigError)?;
        let secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| StripeError::ConfigError)?;
        info!("[Stripe Service] Stripe checkout gateway configured");
        Ok(Self::new(stripe_config, secret_key))
    }
}

impl CheckoutGateway for StripeCheckoutGateway {
    fn create_checkout_session(
        &self,
        line_items: Vec<CheckoutLineItem>,
    ) -> BoxFuture<'_, CreatedCheckoutSession, GatewayError> {
        Box::pin(async move {
            let session = logic::create_checkout_session(
                &self.api_base_url,
                &self.secret_key,
                &self.stripe_config,
                &line_items,
            )
            .await?;
            Ok(CreatedCheckoutSession {
                id: session.id,
                url: session.url,
            })
        })
    }

    fn retrieve_checkout_session<'a>(
        &'a self,
        session_id: &'a str,
    ) -> BoxFuture<'a, CheckoutSession, GatewayError> {
        Box::pin(async move {
            let session =
                logic::get_checkout_session(&self.api_base_url, &self.secret_key, session_id)
                    .await?;
            let payment_intent = session
                .payment_intent
                .ok_or_else(|| GatewayError::MissingPaymentIntent(session.id.clone()))?;
            let line_items = session
                .line_items
                .data
                .into_iter()
                .map(|item| SessionLineItem {
                    product_id: item.price.product,
                    quantity: item.quantity.unwrap_or(0),
                })
                .collect();
            Ok(CheckoutSession {
                id: session.id,
                payment_intent_id: payment_intent.id,
                payment_intent_status: payment_intent.status,
                amount_total: session.amount_total.unwrap_or(0),
                customer_email: session
                    .customer_details
                    .and_then(|details| details.email)
                    .unwrap_or_default(),
                line_items,
            })
        })
    }
}
