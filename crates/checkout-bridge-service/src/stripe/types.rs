//! Stripe API types.

use serde::Deserialize;

use crate::processor::{Price, ProcessorSession};

/// Stripe price object. Only the ID is read.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePrice {
    /// Price ID.
    pub id: String,
}

impl From<StripePrice> for Price {
    fn from(price: StripePrice) -> Self {
        Self { id: price.id }
    }
}

/// Stripe Checkout session object.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Session ID.
    pub id: String,
    /// Checkout URL to redirect the user to.
    #[serde(default)]
    pub url: Option<String>,
}

impl From<CheckoutSession> for ProcessorSession {
    fn from(session: CheckoutSession) -> Self {
        Self {
            id: session.id,
            url: session.url,
        }
    }
}

/// A page of a Stripe list endpoint. Only the first page is ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    /// Items on this page.
    pub data: Vec<T>,
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Error code, e.g. `resource_missing`.
    #[serde(default)]
    pub code: Option<String>,
}
