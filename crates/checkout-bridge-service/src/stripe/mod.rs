//! Stripe integration for checkout sessions.
//!
//! Stripe handles:
//! - Price lookup for a product
//! - Hosted Checkout session creation

pub mod client;
pub mod types;

pub use client::StripeClient;
pub use client::StripeError;
pub use types::*;
