//! Checkout-bridge core types.
//!
//! This crate holds the request-to-session translation logic with no I/O:
//!
//! - [`CheckoutRequest`] - validated caller input
//! - [`ResolvedPrice`] - the active price picked for a product
//! - [`SessionBuilder`] - assembles the checkout session creation request
//! - [`SessionResult`] - the outcome as delivered to iframe callers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod price;
pub mod request;
pub mod result;
pub mod session;

pub use error::{CheckoutError, Result};
pub use price::{ResolvedPrice, PRICE_LOOKUP_LIMIT};
pub use request::{Attendee, CheckoutRequest, DEFAULT_QUANTITY};
pub use result::{CreatedSession, SessionResult};
pub use session::{
    CheckoutMode, CustomField, LineItem, Metadata, SessionBuilder, SessionCreateSpec,
    BUYER_NAME_FIELD_KEY, DEFAULT_BUYER_NAME_LABEL, DEFAULT_LOCALE,
};
