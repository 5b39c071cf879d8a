//! Common test utilities for checkout-bridge integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;

use checkout_bridge_core::SessionCreateSpec;
use checkout_bridge_service::{
    create_router, AppState, PaymentProcessor, Price, ProcessorError, ProcessorSession,
    ServiceConfig,
};

/// Checkout URL returned by [`FakeProcessor`] by default.
pub const CHECKOUT_URL: &str =
    "https://checkout.stripe.com/c/pay/cs_test_a1B2c3#fidkdWxOYHwnPyd1blpxYHZxWjA0T";

/// In-memory payment processor recording every call it receives.
#[derive(Default)]
pub struct FakeProcessor {
    prices: Vec<String>,
    session_url: Option<String>,
    price_error: Option<String>,
    session_error: Option<String>,
    delay: Option<Duration>,
    /// Product IDs looked up, in call order.
    pub price_lookups: Mutex<Vec<String>>,
    /// Session requests received, in call order.
    pub sessions: Mutex<Vec<SessionCreateSpec>>,
}

impl FakeProcessor {
    /// A processor where every product has the given active prices and
    /// session creation succeeds.
    pub fn with_prices(prices: &[&str]) -> Self {
        Self {
            prices: prices.iter().map(|p| (*p).to_string()).collect(),
            session_url: Some(CHECKOUT_URL.to_string()),
            ..Self::default()
        }
    }

    /// Return `url` from session creation.
    pub fn session_url(mut self, url: &str) -> Self {
        self.session_url = Some(url.to_string());
        self
    }

    /// Fail price lookups with `message`.
    pub fn failing_prices(mut self, message: &str) -> Self {
        self.price_error = Some(message.to_string());
        self
    }

    /// Fail session creation with `message`.
    pub fn failing_sessions(mut self, message: &str) -> Self {
        self.session_error = Some(message.to_string());
        self
    }

    /// Sleep before answering price lookups.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The last session request received.
    pub fn last_session(&self) -> SessionCreateSpec {
        self.sessions
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no session was created")
    }

    /// Number of calls of any kind.
    pub fn call_count(&self) -> usize {
        self.price_lookups.lock().unwrap().len() + self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentProcessor for FakeProcessor {
    async fn list_active_prices(
        &self,
        product_id: &str,
        limit: u32,
    ) -> Result<Vec<Price>, ProcessorError> {
        self.price_lookups
            .lock()
            .unwrap()
            .push(product_id.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.price_error {
            return Err(ProcessorError::new(message.clone()));
        }

        Ok(self
            .prices
            .iter()
            .take(limit as usize)
            .map(|id| Price { id: id.clone() })
            .collect())
    }

    async fn create_checkout_session(
        &self,
        spec: &SessionCreateSpec,
    ) -> Result<ProcessorSession, ProcessorError> {
        self.sessions.lock().unwrap().push(spec.clone());

        if let Some(message) = &self.session_error {
            return Err(ProcessorError::new(message.clone()));
        }

        Ok(ProcessorSession {
            id: "cs_test_a1B2c3".into(),
            url: self.session_url.clone(),
        })
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The injected processor, for inspecting calls.
    pub processor: Arc<FakeProcessor>,
}

impl TestHarness {
    /// Create a harness around `processor`.
    pub fn new(processor: FakeProcessor) -> Self {
        Self::with_config(processor, test_config())
    }

    /// Create a harness around `processor` with a custom configuration.
    pub fn with_config(processor: FakeProcessor, config: ServiceConfig) -> Self {
        let processor = Arc::new(processor);
        let state = AppState::with_processor(config, processor.clone());
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");

        Self { server, processor }
    }

    /// Create a harness with no payment processor configured.
    pub fn unconfigured() -> TestServer {
        let state = AppState::new(test_config());
        TestServer::new(create_router(state)).expect("Failed to create test server")
    }
}

/// Configuration used by the harness.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        stripe_api_key: None,
        default_origin: "https://tuapp.com".into(),
        ..ServiceConfig::default()
    }
}

/// `Origin` header pair.
pub fn origin(value: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("origin"),
        HeaderValue::from_static(value),
    )
}
