//! Request-to-session translation shared by both endpoints.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use checkout_bridge_core::{
    CheckoutError, CheckoutRequest, CreatedSession, ResolvedPrice, SessionBuilder,
    PRICE_LOOKUP_LIMIT,
};

use crate::processor::{PaymentProcessor, ProcessorError};

/// Resolves a price, builds the session request and calls the processor.
///
/// Each outbound call is bounded by `timeout`. Nothing is retried.
#[derive(Clone)]
pub struct CheckoutFlow {
    processor: Arc<dyn PaymentProcessor>,
    builder: SessionBuilder,
    timeout: Duration,
}

impl std::fmt::Debug for CheckoutFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutFlow")
            .field("builder", &self.builder)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CheckoutFlow {
    /// Create a checkout flow.
    #[must_use]
    pub fn new(
        processor: Arc<dyn PaymentProcessor>,
        builder: SessionBuilder,
        timeout: Duration,
    ) -> Self {
        Self {
            processor,
            builder,
            timeout,
        }
    }

    /// Pick the first active price of `product_id`.
    pub async fn resolve_active_price(
        &self,
        product_id: &str,
    ) -> Result<ResolvedPrice, CheckoutError> {
        if product_id.trim().is_empty() {
            return Err(CheckoutError::validation("productId is required"));
        }

        let prices = self
            .bounded(
                self.processor
                    .list_active_prices(product_id, PRICE_LOOKUP_LIMIT),
            )
            .await?;

        if prices.len() > 1 {
            tracing::debug!(
                product_id = %product_id,
                count = prices.len(),
                "Multiple active prices, using the first"
            );
        }

        ResolvedPrice::first_of(prices.into_iter().map(|p| p.id))
    }

    /// Create a checkout session for `request`.
    ///
    /// `origin` is the base for the default redirect URLs.
    pub async fn create_session(
        &self,
        request: &CheckoutRequest,
        origin: &str,
    ) -> Result<CreatedSession, CheckoutError> {
        let price = self.resolve_active_price(request.product_id()).await?;
        let spec = self.builder.build(request, &price, origin);

        tracing::info!(
            product_id = %request.product_id(),
            price_id = %price.price_id,
            quantity = request.quantity(),
            attendees = request.attendees().len(),
            "Creating checkout session"
        );

        let session = self
            .bounded(self.processor.create_checkout_session(&spec))
            .await?;

        let checkout_url = session
            .url
            .ok_or_else(|| CheckoutError::processor("payment processor returned no checkout URL"))?;

        tracing::info!(session_id = %session.id, "Checkout session created");

        Ok(CreatedSession {
            session_id: session.id,
            checkout_url,
        })
    }

    /// Await a processor call, failing with [`CheckoutError::Timeout`] if it
    /// takes longer than the configured timeout or the processor reports its
    /// own timeout first.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, ProcessorError>>,
    ) -> Result<T, CheckoutError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) if err.is_timeout() => Err(CheckoutError::Timeout(self.timeout)),
            Ok(Err(err)) => Err(CheckoutError::Processor(err.message)),
            Err(_) => Err(CheckoutError::Timeout(self.timeout)),
        }
    }
}
