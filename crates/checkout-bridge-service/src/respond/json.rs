//! JSON response adapter.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use checkout_bridge_core::CreatedSession;

/// CORS headers attached to every response of the JSON endpoint.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "POST, GET, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
];

/// How long browsers may cache a preflight answer, in seconds.
pub const PREFLIGHT_MAX_AGE_SECONDS: &str = "86400";

/// Successful checkout response.
#[derive(Debug, Serialize)]
pub struct CheckoutUrlResponse {
    /// Checkout URL, unchanged from the processor.
    pub url: String,
}

impl From<CreatedSession> for CheckoutUrlResponse {
    fn from(session: CreatedSession) -> Self {
        Self {
            url: session.checkout_url,
        }
    }
}

/// Empty 200 answer to a CORS preflight.
///
/// The CORS headers themselves are added by the route layer.
#[must_use]
pub fn preflight() -> Response {
    (StatusCode::OK, [(ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE_SECONDS)]).into_response()
}
