//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, checkout};
use crate::respond::CORS_HEADERS;
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /` - Endpoint documentation
/// - `GET /health` - Health check
///
/// ## Checkout (concurrency-limited)
/// - `POST /api/create-checkout-session` - JSON in, `{url}` out (CORS)
/// - `OPTIONS /api/create-checkout-session` - CORS preflight
/// - `POST /api/create-checkout-session-form` - form in, `postMessage` page out
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let max_concurrent_requests = state.config.max_concurrent_requests.max(1);

    let state = Arc::new(state);

    // Every JSON response, errors included, carries the same CORS headers
    let mut json_routes = Router::new().route(
        "/create-checkout-session",
        post(checkout::create_checkout_session).options(checkout::preflight),
    );
    for (name, value) in CORS_HEADERS {
        json_routes = json_routes.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    let api_routes = Router::new()
        .merge(json_routes)
        .route(
            "/create-checkout-session-form",
            post(checkout::create_checkout_session_form),
        )
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests));

    Router::new()
        .route("/", get(handlers::landing))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}
