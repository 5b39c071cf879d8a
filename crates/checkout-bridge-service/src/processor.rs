//! Payment processor seam.
//!
//! The service never talks to a processor SDK directly. Handlers go through
//! [`PaymentProcessor`], which is built once at startup and injected via
//! [`AppState`](crate::AppState), so tests can substitute a fake.

use async_trait::async_trait;

use checkout_bridge_core::SessionCreateSpec;

/// An active price as returned by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    /// Price ID.
    pub id: String,
}

/// A checkout session as returned by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSession {
    /// Session ID.
    pub id: String,
    /// Hosted checkout URL.
    pub url: Option<String>,
}

/// Any failure reported by, or while reaching, the processor.
///
/// Only the message is kept; it is shown to callers as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProcessorError {
    /// Processor-provided message.
    pub message: String,
    timed_out: bool,
}

impl ProcessorError {
    /// Create a processor error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    /// The call gave up waiting on the processor.
    pub fn timed_out(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }

    /// Whether the processor did not answer in time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.timed_out
    }
}

/// Outbound operations against the payment processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// List active prices for `product_id`, at most `limit`, in processor order.
    async fn list_active_prices(
        &self,
        product_id: &str,
        limit: u32,
    ) -> Result<Vec<Price>, ProcessorError>;

    /// Create a checkout session.
    async fn create_checkout_session(
        &self,
        spec: &SessionCreateSpec,
    ) -> Result<ProcessorSession, ProcessorError>;
}
