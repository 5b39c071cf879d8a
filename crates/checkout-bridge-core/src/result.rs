//! Checkout outcomes.

use serde::Serialize;

use crate::error::CheckoutError;

/// A checkout session created by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSession {
    /// Processor session ID.
    pub session_id: String,
    /// URL to redirect the payer to.
    pub checkout_url: String,
}

/// Outcome of a checkout attempt, shaped as the message posted to the
/// embedding page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SessionResult {
    /// The session was created.
    #[serde(rename = "stripe-checkout-success")]
    Success {
        /// Checkout URL, unchanged from the processor.
        url: String,
    },

    /// The session could not be created.
    #[serde(rename = "stripe-checkout-error")]
    Error {
        /// Human-readable reason.
        error: String,
    },
}

impl From<std::result::Result<CreatedSession, CheckoutError>> for SessionResult {
    fn from(outcome: std::result::Result<CreatedSession, CheckoutError>) -> Self {
        match outcome {
            Ok(session) => Self::Success {
                url: session.checkout_url,
            },
            Err(err) => Self::Error {
                error: err.to_string(),
            },
        }
    }
}
