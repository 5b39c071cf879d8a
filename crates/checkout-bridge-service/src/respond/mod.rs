//! Response adapters.
//!
//! The same checkout outcome is delivered in two shapes, picked by the
//! endpoint that was called:
//!
//! - [`json`] - status code plus `{url}` / `{error}` body, with CORS headers
//! - [`html`] - always 200, an HTML page that posts the outcome to the
//!   parent window

pub mod html;
pub mod json;

pub use html::PostMessagePage;
pub use json::{CheckoutUrlResponse, CORS_HEADERS};
