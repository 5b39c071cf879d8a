//! Checkout-bridge HTTP API service.
//!
//! This crate exposes checkout session creation over HTTP in two shapes:
//!
//! - `POST /api/create-checkout-session` - JSON in, JSON `{url}` out, with
//!   permissive CORS for browser clients
//! - `POST /api/create-checkout-session-form` - form post in, an HTML page
//!   that `postMessage`s the outcome to the parent window out, for callers
//!   embedded in iframes that cannot read cross-origin responses
//!
//! Both go through the same [`CheckoutFlow`], which talks to the payment
//! processor through the injected [`PaymentProcessor`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Static page handlers are async for the router

pub mod checkout;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod processor;
pub mod respond;
pub mod routes;
pub mod state;
pub mod stripe;

pub use checkout::CheckoutFlow;
pub use config::ServiceConfig;
pub use error::ApiError;
pub use processor::{PaymentProcessor, Price, ProcessorError, ProcessorSession};
pub use routes::create_router;
pub use state::AppState;
pub use stripe::{StripeClient, StripeError};
