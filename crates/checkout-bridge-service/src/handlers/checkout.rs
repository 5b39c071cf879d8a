//! Checkout session handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::ORIGIN;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use checkout_bridge_core::{CheckoutError, CheckoutRequest, CreatedSession, DEFAULT_QUANTITY};

use crate::error::ApiError;
use crate::extract::FormFields;
use crate::respond::{json, CheckoutUrlResponse, PostMessagePage};
use crate::state::AppState;

/// JSON checkout request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    /// Product to check out.
    #[serde(default)]
    pub product_id: String,
    /// Number of units (default: 1).
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Success redirect override.
    #[serde(default)]
    pub success_url: Option<String>,
    /// Cancel redirect override.
    #[serde(default)]
    pub cancel_url: Option<String>,
    /// Attendee names, one per unit.
    #[serde(default)]
    pub attendee_names: Vec<String>,
}

impl CheckoutPayload {
    fn into_checkout_request(self) -> Result<CheckoutRequest, CheckoutError> {
        let quantity = self.quantity.unwrap_or(i64::from(DEFAULT_QUANTITY));

        Ok(CheckoutRequest::new(self.product_id, quantity)?
            .with_success_url(self.success_url)
            .with_cancel_url(self.cancel_url)
            .with_attendee_names(self.attendee_names))
    }
}

/// Create a checkout session and answer with `{url}`.
pub async fn create_checkout_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<CheckoutPayload>, JsonRejection>,
) -> Result<Json<CheckoutUrlResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = payload.into_checkout_request()?;

    let session = run_checkout(&state, &headers, &request).await?;

    Ok(Json(session.into()))
}

/// Answer a CORS preflight for the JSON endpoint without touching the
/// processor.
pub async fn preflight() -> Response {
    json::preflight()
}

/// Create a checkout session from a posted form and answer with a page that
/// posts the outcome to the parent window.
pub async fn create_checkout_session_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    fields: FormFields,
) -> PostMessagePage {
    let outcome = match fields.into_checkout_request() {
        Ok(request) => run_checkout(&state, &headers, &request).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &outcome {
        match e {
            CheckoutError::Validation(_) | CheckoutError::NoActivePrice => {
                tracing::info!(error = %e, "Form checkout rejected");
            }
            CheckoutError::Processor(_) | CheckoutError::Timeout(_) => {
                tracing::error!(error = %e, "Form checkout failed");
            }
        }
    }

    PostMessagePage(outcome.into())
}

async fn run_checkout(
    state: &AppState,
    headers: &HeaderMap,
    request: &CheckoutRequest,
) -> Result<CreatedSession, CheckoutError> {
    let checkout = state
        .checkout
        .as_ref()
        .ok_or_else(|| CheckoutError::processor("payment processor not configured"))?;

    let origin = request_origin(headers, &state.config.default_origin);

    checkout.create_session(request, origin).await
}

/// Base URL for default redirects: the `Origin` header, unless it is missing,
/// blank or the opaque `null` origin of a sandboxed frame.
fn request_origin<'a>(headers: &'a HeaderMap, default_origin: &'a str) -> &'a str {
    headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "null")
        .unwrap_or(default_origin)
}
