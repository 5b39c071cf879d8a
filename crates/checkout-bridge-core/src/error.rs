//! Error types for checkout-bridge.

use std::time::Duration;

/// Result type for checkout operations.
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Errors that can occur while turning a request into a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// Missing or malformed caller input.
    #[error("{0}")]
    Validation(String),

    /// The product has no active price.
    #[error("no active prices for this product")]
    NoActivePrice,

    /// The payment processor rejected the call or could not be reached.
    #[error("{0}")]
    Processor(String),

    /// The payment processor did not answer in time.
    #[error("payment processor timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl CheckoutError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a processor error.
    pub fn processor(message: impl Into<String>) -> Self {
        Self::Processor(message.into())
    }

    /// Whether the error was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoActivePrice)
    }
}
