//! Stripe API client implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use checkout_bridge_core::SessionCreateSpec;

use super::types::{CheckoutSession, StripeErrorResponse, StripeList, StripePrice};
use crate::processor::{PaymentProcessor, Price, ProcessorError, ProcessorSession};

/// Error type for Stripe operations.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe API returned an error.
    #[error("Stripe API error: {error_type} - {message}")]
    Api {
        /// Error type.
        error_type: String,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<StripeError> for ProcessorError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Api { message, .. } => Self::new(message),
            StripeError::Http(e) if e.is_timeout() => Self::timed_out(e.to_string()),
            other => Self::new(other.to_string()),
        }
    }
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    /// Stripe API base URL.
    pub const BASE_URL: &'static str = "https://api.stripe.com/v1";

    /// Create a new Stripe client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    /// * `timeout` - Per-request timeout for outbound calls
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, StripeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(StripeError::Configuration("Stripe API key is empty".into()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: Self::BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API base (e.g. a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// List active prices for a product.
    ///
    /// # Arguments
    ///
    /// * `product_id` - Stripe product ID
    /// * `limit` - Maximum number of results (1-100)
    pub async fn list_prices(
        &self,
        product_id: &str,
        limit: u32,
    ) -> Result<StripeList<StripePrice>, StripeError> {
        let limit = limit.clamp(1, 100).to_string();

        tracing::debug!(product_id = %product_id, limit = %limit, "Listing active Stripe prices");

        let response = self
            .client
            .get(format!("{}/prices", self.base_url))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .query(&[
                ("product", product_id),
                ("active", "true"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Create a Checkout session.
    pub async fn create_checkout_session(
        &self,
        spec: &SessionCreateSpec,
    ) -> Result<CheckoutSession, StripeError> {
        let params = session_params(spec);

        tracing::debug!(
            success_url = %spec.success_url,
            cancel_url = %spec.cancel_url,
            locale = %spec.locale,
            params = params.len(),
            "Creating Stripe checkout session"
        );

        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.base_url))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .form(&params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        // Try to parse error response
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        match error_body {
            Ok(stripe_error) => Err(StripeError::Api {
                error_type: stripe_error.error.error_type,
                message: stripe_error.error.message,
                code: stripe_error.error.code,
            }),
            Err(_) => Err(StripeError::Api {
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn list_active_prices(
        &self,
        product_id: &str,
        limit: u32,
    ) -> Result<Vec<Price>, ProcessorError> {
        let list = self.list_prices(product_id, limit).await?;
        Ok(list.data.into_iter().map(Price::from).collect())
    }

    async fn create_checkout_session(
        &self,
        spec: &SessionCreateSpec,
    ) -> Result<ProcessorSession, ProcessorError> {
        let session = StripeClient::create_checkout_session(self, spec).await?;
        Ok(session.into())
    }
}

/// Flatten a session spec into Stripe's bracketed form parameters.
fn session_params(spec: &SessionCreateSpec) -> Vec<(String, String)> {
    let mut params = vec![
        ("mode".to_string(), spec.mode.as_str().to_string()),
        ("success_url".to_string(), spec.success_url.clone()),
        ("cancel_url".to_string(), spec.cancel_url.clone()),
        ("locale".to_string(), spec.locale.clone()),
    ];

    for (i, item) in spec.line_items.iter().enumerate() {
        params.push((format!("line_items[{i}][price]"), item.price.clone()));
        params.push((format!("line_items[{i}][quantity]"), item.quantity.to_string()));
    }

    if let Some(metadata) = &spec.metadata {
        for (key, value) in metadata {
            params.push((format!("metadata[{key}]"), value.clone()));
        }
    }

    for (i, field) in spec.custom_fields.iter().enumerate() {
        params.push((format!("custom_fields[{i}][key]"), field.key.clone()));
        params.push((
            format!("custom_fields[{i}][label][type]"),
            "custom".to_string(),
        ));
        params.push((
            format!("custom_fields[{i}][label][custom]"),
            field.label.clone(),
        ));
        params.push((format!("custom_fields[{i}][type]"), "text".to_string()));
    }

    params.push((
        "phone_number_collection[enabled]".to_string(),
        spec.phone_number_collection.to_string(),
    ));

    params
}
