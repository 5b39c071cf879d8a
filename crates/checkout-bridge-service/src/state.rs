//! Application state.

use std::sync::Arc;

use checkout_bridge_core::SessionBuilder;

use crate::checkout::CheckoutFlow;
use crate::config::ServiceConfig;
use crate::processor::PaymentProcessor;
use crate::stripe::StripeClient;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Checkout flow (absent when no payment processor is configured).
    pub checkout: Option<CheckoutFlow>,
}

impl AppState {
    /// Create a new application state, building the Stripe client from the
    /// configuration.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        // Create Stripe client if configured
        let stripe = config.stripe_api_key.as_ref().and_then(|key| {
            match StripeClient::new(key, config.processor_timeout()) {
                Ok(client) => {
                    tracing::info!(
                        api_base = %config.stripe_api_base,
                        "Stripe integration enabled"
                    );
                    Some(client.with_base_url(&config.stripe_api_base))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create Stripe client");
                    None
                }
            }
        });

        match stripe {
            Some(client) => Self::with_processor(config, Arc::new(client)),
            None => {
                tracing::warn!("Stripe not configured - checkout sessions will not be available");
                Self {
                    config,
                    checkout: None,
                }
            }
        }
    }

    /// Create application state around an explicit payment processor.
    #[must_use]
    pub fn with_processor(config: ServiceConfig, processor: Arc<dyn PaymentProcessor>) -> Self {
        let builder = SessionBuilder::new(&config.locale, &config.buyer_name_label);
        let checkout = CheckoutFlow::new(processor, builder, config.processor_timeout());

        Self {
            config,
            checkout: Some(checkout),
        }
    }

    /// Check if a payment processor is configured.
    #[must_use]
    pub fn has_processor(&self) -> bool {
        self.checkout.is_some()
    }
}
